//! Progress notification port
//!
//! Defines the interface for reporting dispatch progress.

use taskdesk_domain::RequestType;

/// Callback for progress updates while a request is in flight
///
/// Implementations live in the presentation layer.
pub trait DispatchProgress: Send + Sync {
    /// Called before the request is sent
    fn on_dispatch_start(&self, request_type: RequestType, agent_name: &str);

    /// Called once the remote API answered or the call failed
    fn on_dispatch_complete(&self, request_type: RequestType, success: bool, elapsed_ms: u64);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DispatchProgress for NoProgress {
    fn on_dispatch_start(&self, _request_type: RequestType, _agent_name: &str) {}
    fn on_dispatch_complete(&self, _request_type: RequestType, _success: bool, _elapsed_ms: u64) {}
}
