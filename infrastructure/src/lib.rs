//! Infrastructure layer for taskdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod board;
pub mod config;
pub mod logging;
pub mod lyzr;

// Re-export commonly used types
pub use board::JsonTaskRepository;
pub use config::{
    ConfigLoader, FileAgentsConfig, FileBoardConfig, FileConfig, FileDispatchConfig,
    FileLoggingConfig, FileLyzrConfig, FileOutputConfig,
};
pub use logging::JsonlConversationLogger;
pub use lyzr::{LyzrError, LyzrGateway, LyzrSettings};
