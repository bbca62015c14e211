//! Application-level configuration.
//!
//! - [`DispatchParams`] — dispatch mode and operator name
//! - [`DispatchConfig`] — parameters plus the agent directory

pub mod dispatch_params;

pub use dispatch_params::{DEFAULT_OPERATOR, DispatchConfig, DispatchParams};
