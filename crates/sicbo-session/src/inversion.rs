//! The step between the engine's raw call and the call shown to users.

use serde::{Deserialize, Serialize};
use sicbo_core::config::SessionConfig;
use sicbo_core::Side;

/// How the engine's raw high/low call is turned into the exposed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InversionPolicy {
    /// Expose the opposite of the engine's call.
    #[default]
    Invert,
    /// Expose the engine's call unchanged.
    Passthrough,
}

impl InversionPolicy {
    pub fn from_config(config: &SessionConfig) -> Self {
        if config.effective_invert() {
            InversionPolicy::Invert
        } else {
            InversionPolicy::Passthrough
        }
    }

    pub fn apply(self, raw: Side) -> Side {
        match self {
            InversionPolicy::Invert => raw.opposite(),
            InversionPolicy::Passthrough => raw,
        }
    }
}
