//! Dispatch mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a request is physically sent.
///
/// - **ViaManager** (default): every request goes to the manager agent,
///   which forwards it to the right sub-agent. The routed sub-agent is still
///   reported in the response.
/// - **Direct**: the request goes straight to the routed sub-agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    #[default]
    #[serde(rename = "manager")]
    ViaManager,
    Direct,
}

impl DispatchMode {
    pub fn is_direct(&self) -> bool {
        matches!(self, DispatchMode::Direct)
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::ViaManager => write!(f, "manager"),
            DispatchMode::Direct => write!(f, "direct"),
        }
    }
}

impl std::str::FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" | "via-manager" | "via_manager" => Ok(DispatchMode::ViaManager),
            "direct" => Ok(DispatchMode::Direct),
            _ => Err(format!("Invalid DispatchMode: {}", s)),
        }
    }
}
