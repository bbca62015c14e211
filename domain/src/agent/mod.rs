//! Remote agent domain
//!
//! Roles, identifiers and the fixed request-type → agent routing table.

pub mod directory;
pub mod request_type;
pub mod role;

pub use directory::{AgentDirectory, AgentId, RouteTarget, UNKNOWN_AGENT_NAME};
pub use request_type::RequestType;
pub use role::AgentRole;
