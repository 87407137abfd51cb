//! Weighted load scorer
//!
//! Converts a site's device inventory into a single dimensionless load
//! number. The score is compared directly against a collector size's
//! `weight` ceiling during allocation.

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::SizingConfig;
use crate::models::{CollectorSize, DeviceCategory, DeviceEntry};

/// Hosts-per-controller threshold at which a dedicated XXL collector is assumed.
const SATURATION_XXL: u32 = 5000;
/// Threshold for the XL saturation tier.
const SATURATION_XL: u32 = 3000;
/// Threshold for the LARGE saturation tier.
const SATURATION_LARGE: u32 = 2000;

/// Compute the total weighted polling load for a device inventory.
///
/// Pure and infallible: devices with zero count contribute nothing, an
/// empty method map contributes nothing, and method ratios are used as
/// given even when they do not sum to 1 (the caller surfaces that as a
/// warning, see [`crate::plan::ratio_warnings`]).
pub fn calculate_weighted_score(
    devices: &BTreeMap<String, DeviceEntry>,
    method_weights: &BTreeMap<String, f64>,
    config: &SizingConfig,
) -> f64 {
    devices
        .values()
        .map(|entry| device_contribution(entry, method_weights, config))
        .sum()
}

/// Per-device-type contributions, for breakdown displays.
///
/// Sums to exactly what [`calculate_weighted_score`] returns.
pub fn score_breakdown(
    devices: &BTreeMap<String, DeviceEntry>,
    method_weights: &BTreeMap<String, f64>,
    config: &SizingConfig,
) -> BTreeMap<String, f64> {
    devices
        .iter()
        .map(|(name, entry)| {
            (
                name.clone(),
                device_contribution(entry, method_weights, config),
            )
        })
        .collect()
}

/// One device type's contribution to the site score.
fn device_contribution(
    entry: &DeviceEntry,
    method_weights: &BTreeMap<String, f64>,
    config: &SizingConfig,
) -> f64 {
    if entry.count == 0 {
        return 0.0;
    }
    match entry.category {
        DeviceCategory::Standard => {
            protocol_mix_score(entry, method_weights) * f64::from(entry.count)
        }
        DeviceCategory::VirtualizationHost => virtualization_score(entry, method_weights, config),
    }
}

/// Per-device cost of the protocol mix: sum of instances x ratio x weight.
///
/// Methods with no configured weight cost nothing.
fn protocol_mix_score(entry: &DeviceEntry, method_weights: &BTreeMap<String, f64>) -> f64 {
    entry
        .methods
        .iter()
        .map(|(method, ratio)| {
            let weight = method_weights.get(method).copied().unwrap_or(0.0);
            f64::from(entry.instances) * ratio * weight
        })
        .sum()
}

/// Score for virtualization hosts bounded by a management controller.
///
/// Above the density thresholds the protocol mix stops mattering: one
/// controller saturates a top-tier collector regardless of how the hosts
/// are polled, so the per-controller score becomes that tier's weight
/// ceiling scaled by the configured max load.
fn virtualization_score(
    entry: &DeviceEntry,
    method_weights: &BTreeMap<String, f64>,
    config: &SizingConfig,
) -> f64 {
    let controller_count = match entry.controllers {
        Some(c) if c > 0 => c,
        _ => 1,
    };
    let avg_per_controller = entry.count.div_ceil(controller_count);

    let per_controller = if avg_per_controller >= SATURATION_XXL {
        saturation_score(CollectorSize::Xxl, config)
    } else if avg_per_controller >= SATURATION_XL {
        saturation_score(CollectorSize::Xl, config)
    } else if avg_per_controller >= SATURATION_LARGE {
        saturation_score(CollectorSize::Large, config)
    } else {
        f64::from(avg_per_controller) * protocol_mix_score(entry, method_weights)
    };

    if avg_per_controller >= SATURATION_LARGE {
        debug!(
            hosts = entry.count,
            controllers = controller_count,
            avg_per_controller,
            per_controller,
            "virtualization density crossed saturation threshold"
        );
    }

    per_controller * f64::from(controller_count)
}

fn saturation_score(size: CollectorSize, config: &SizingConfig) -> f64 {
    config.capacity_of(size).weight * config.max_load_fraction()
}
