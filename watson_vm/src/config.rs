//! VM configuration.
//!
//! Configs are plain serde structs so hosts can embed them in their own
//! TOML files. Every field has a default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest stack reservation a config may request up front.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VmConfig {
    /// Maximum number of values on the stack. `None` means unbounded.
    pub max_stack_depth: Option<usize>,
    /// Capacity reserved for the stack when the VM is created.
    pub initial_capacity: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: None,
            initial_capacity: 16,
        }
    }
}

impl VmConfig {
    /// Parse a config from TOML, e.g. `max_stack_depth = 1024`.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: VmConfig =
            toml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stack_depth == Some(0) {
            return Err(ConfigError::ZeroStackDepth);
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.initial_capacity,
                limit: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }

    /// Slots to reserve when a VM is built from this config. Never more than
    /// the depth limit or [`MAX_INITIAL_CAPACITY`], even if `validate` was
    /// skipped.
    pub fn reserved_capacity(&self) -> usize {
        let cap = self.initial_capacity.min(MAX_INITIAL_CAPACITY);
        self.max_stack_depth.map_or(cap, |limit| cap.min(limit))
    }

    pub fn with_max_stack_depth(mut self, limit: usize) -> Self {
        self.max_stack_depth = Some(limit);
        self
    }
}
