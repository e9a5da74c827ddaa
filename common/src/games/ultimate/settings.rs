use serde::{Deserialize, Serialize};

use super::error::SettingsError;
use super::types::{FirstPlayerMode, Player};
use crate::config::Validate;

pub const MIN_SEARCH_DEPTH: usize = 1;
pub const MAX_SEARCH_DEPTH: usize = 9;
pub const DEFAULT_SEARCH_DEPTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub search_depth: usize,
    pub first_player: FirstPlayerMode,
    pub machine_player: Player,
}

pub fn validate_search_depth(depth: usize) -> Result<(), SettingsError> {
    if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
        return Err(SettingsError::InvalidSearchDepth {
            depth,
            min: MIN_SEARCH_DEPTH,
            max: MAX_SEARCH_DEPTH,
        });
    }
    Ok(())
}

impl SessionSettings {
    pub fn check(&self) -> Result<(), SettingsError> {
        validate_search_depth(self.search_depth)
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        self.check().map_err(|e| e.to_string())
    }
}
