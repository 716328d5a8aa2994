//! History retention configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum retained outcomes. Default: 1000.
    pub capacity: Option<usize>,
}

impl HistoryConfig {
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }
}
