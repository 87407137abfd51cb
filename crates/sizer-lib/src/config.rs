//! Sizing configuration
//!
//! Everything the scorer and allocator need is supplied wholesale through
//! this struct; the core holds no globals. Serde defaults let callers
//! override fields selectively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::defaults::{
    default_collector_capacities, default_method_weights, DEFAULT_MAX_LOAD_PERCENT,
};
use crate::error::SizingError;
use crate::models::{CollectorCapacity, CollectorSize};

/// Polling size selection mode: optimize freely or pin one size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeSelection {
    #[default]
    Auto,
    Fixed(CollectorSize),
}

impl TryFrom<String> for SizeSelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("auto") {
            Ok(SizeSelection::Auto)
        } else {
            value.parse::<CollectorSize>().map(SizeSelection::Fixed)
        }
    }
}

impl From<SizeSelection> for String {
    fn from(value: SizeSelection) -> Self {
        match value {
            SizeSelection::Auto => "auto".to_string(),
            SizeSelection::Fixed(size) => size.label().to_string(),
        }
    }
}

/// Full configuration for one sizing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Per-method cost multipliers, keyed by method name
    #[serde(default = "default_method_weights")]
    pub method_weights: BTreeMap<String, f64>,

    /// Per-size resource ceilings
    #[serde(default = "default_collector_capacities")]
    pub collector_capacities: BTreeMap<CollectorSize, CollectorCapacity>,

    /// Maximum load percentage a collector may be planned at, in (0, 100]
    #[serde(default = "default_max_load")]
    pub max_load_percent: u8,

    /// Append one N+1 standby collector for the polling class
    #[serde(default)]
    pub enable_polling_failover: bool,

    /// Append one N+1 standby collector for each logs class
    #[serde(default)]
    pub enable_logs_failover: bool,

    /// Polling size selection mode
    #[serde(default)]
    pub calc_method: SizeSelection,
}

fn default_max_load() -> u8 {
    DEFAULT_MAX_LOAD_PERCENT
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            method_weights: default_method_weights(),
            collector_capacities: default_collector_capacities(),
            max_load_percent: DEFAULT_MAX_LOAD_PERCENT,
            enable_polling_failover: false,
            enable_logs_failover: false,
            calc_method: SizeSelection::Auto,
        }
    }
}

impl SizingConfig {
    /// Max load as a fraction, e.g. 85 -> 0.85.
    pub fn max_load_fraction(&self) -> f64 {
        f64::from(self.max_load_percent) / 100.0
    }

    /// Ceiling lookup that treats a missing size as zero capacity.
    pub fn capacity_of(&self, size: CollectorSize) -> CollectorCapacity {
        self.collector_capacities
            .get(&size)
            .copied()
            .unwrap_or(CollectorCapacity {
                weight: 0.0,
                eps: 0.0,
                fps: 0.0,
            })
    }

    /// Check the parts of the configuration that cannot be degraded around.
    pub fn validate(&self) -> Result<(), SizingError> {
        if self.max_load_percent == 0 || self.max_load_percent > 100 {
            return Err(SizingError::InvalidMaxLoad(self.max_load_percent));
        }
        if self.collector_capacities.is_empty() {
            return Err(SizingError::EmptyCapacityTable);
        }
        Ok(())
    }
}
