//! Lyzr inference API adapter
//!
//! Implements the [`AgentGateway`](taskdesk_application::AgentGateway) port
//! over HTTP with `reqwest`.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::LyzrError;
pub use gateway::{LyzrGateway, LyzrSettings};
