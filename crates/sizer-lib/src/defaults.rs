//! Standard capacity and method-weight tables
//!
//! These are the stock numbers a fresh configuration starts from. They are
//! plain constructor functions so callers inject them explicitly; nothing
//! in the core reads them implicitly.

use std::collections::BTreeMap;

use crate::models::{CollectorCapacity, CollectorSize};

/// Default maximum load percentage a collector should run at.
pub const DEFAULT_MAX_LOAD_PERCENT: u8 = 85;

/// Stock per-size resource ceilings.
///
/// Weight is the dimensionless polling ceiling; eps/fps are log events and
/// netflow flows per second.
pub fn default_collector_capacities() -> BTreeMap<CollectorSize, CollectorCapacity> {
    let mut capacities = BTreeMap::new();
    capacities.insert(
        CollectorSize::Small,
        CollectorCapacity {
            weight: 21286.0,
            eps: 7800.0,
            fps: 5000.0,
        },
    );
    capacities.insert(
        CollectorSize::Medium,
        CollectorCapacity {
            weight: 57061.0,
            eps: 17000.0,
            fps: 15000.0,
        },
    );
    capacities.insert(
        CollectorSize::Large,
        CollectorCapacity {
            weight: 107407.0,
            eps: 23000.0,
            fps: 25000.0,
        },
    );
    capacities.insert(
        CollectorSize::Xl,
        CollectorCapacity {
            weight: 180376.0,
            eps: 30000.0,
            fps: 40000.0,
        },
    );
    capacities.insert(
        CollectorSize::Xxl,
        CollectorCapacity {
            weight: 306341.0,
            eps: 35000.0,
            fps: 50000.0,
        },
    );
    capacities
}

/// Stock per-method cost multipliers.
///
/// Method names are open-ended; users add their own alongside these.
pub fn default_method_weights() -> BTreeMap<String, f64> {
    let mut weights = BTreeMap::new();
    weights.insert("ping".to_string(), 0.2);
    weights.insert("snmp".to_string(), 1.0);
    weights.insert("http".to_string(), 1.2);
    weights.insert("jmx".to_string(), 1.5);
    weights.insert("wbem".to_string(), 1.5);
    weights.insert("jdbc".to_string(), 2.0);
    weights.insert("esx".to_string(), 2.5);
    weights.insert("wmi".to_string(), 3.0);
    weights.insert("winrm".to_string(), 3.0);
    weights.insert("script".to_string(), 5.0);
    weights
}
