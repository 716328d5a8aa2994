//! Prediction session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PATTERN_DISPLAY_LEN;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Expose the opposite of the engine's call. Default: true.
    pub invert: Option<bool>,
    /// Symbols shown in the diagnostic pattern string. Default: 20.
    pub pattern_display_len: Option<usize>,
}

impl SessionConfig {
    pub fn effective_invert(&self) -> bool {
        self.invert.unwrap_or(true)
    }

    pub fn effective_pattern_display_len(&self) -> usize {
        self.pattern_display_len
            .unwrap_or(DEFAULT_PATTERN_DISPLAY_LEN)
    }
}
