//! Orchestration domain
//!
//! Requests, their templates, dispatch mode and the shapes returned to the
//! dashboard after a dispatch.

pub mod health;
pub mod mode;
pub mod request;
pub mod response;
pub mod template;

pub use health::{AgentStatus, HealthReport};
pub use mode::DispatchMode;
pub use request::OrchestratorRequest;
pub use response::OrchestratorResponse;
pub use template::RequestTemplate;
