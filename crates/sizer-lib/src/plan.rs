//! Per-site and deployment-wide planning
//!
//! The per-site loop the caller would otherwise write by hand: score each
//! site, allocate collectors for it, and aggregate totals across the
//! deployment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::allocator::calculate_collectors;
use crate::config::SizingConfig;
use crate::models::{AllocationResult, CollectorSize, LogsLoad, Site};
use crate::scorer::calculate_weighted_score;

/// Tolerance for the method-ratio soft invariant.
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Sizing result for a single site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePlan {
    pub name: String,
    /// Weighted polling load score
    pub polling_score: f64,
    pub logs_load: LogsLoad,
    pub allocation: AllocationResult,
    /// Unix timestamp of when this plan was computed
    pub generated_at: i64,
}

/// Sizing result aggregated across every site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub sites: Vec<SitePlan>,
    /// Collector headcount per size, failover included
    pub totals_by_size: BTreeMap<CollectorSize, u32>,
    pub total_collectors: u32,
    pub total_polling_score: f64,
    pub generated_at: i64,
}

/// A device type whose method ratios do not sum to 1.
///
/// The score is still computed with the ratios as given; this only feeds
/// the caller's warning display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioWarning {
    pub device_type: String,
    pub ratio_sum: f64,
}

/// Score and allocate one site.
pub fn plan_site(site: &Site, config: &SizingConfig) -> SitePlan {
    let polling_score =
        calculate_weighted_score(&site.devices, &config.method_weights, config);
    let logs_load = site.logs_load();
    let allocation = calculate_collectors(polling_score, logs_load, config);
    debug!(
        site = %site.name,
        polling_score,
        collectors = allocation.total_collectors(),
        "planned site"
    );
    SitePlan {
        name: site.name.clone(),
        polling_score,
        logs_load,
        allocation,
        generated_at: chrono::Utc::now().timestamp(),
    }
}

/// Plan every site and aggregate deployment-wide totals.
pub fn plan_deployment(sites: &[Site], config: &SizingConfig) -> DeploymentPlan {
    let site_plans: Vec<SitePlan> = sites.iter().map(|s| plan_site(s, config)).collect();

    let mut totals_by_size: BTreeMap<CollectorSize, u32> = BTreeMap::new();
    let mut total_collectors = 0u32;
    let mut total_polling_score = 0.0;

    for plan in &site_plans {
        total_polling_score += plan.polling_score;
        for instance in plan.allocation.iter() {
            *totals_by_size.entry(instance.size).or_insert(0) += 1;
            total_collectors += 1;
        }
    }

    DeploymentPlan {
        sites: site_plans,
        totals_by_size,
        total_collectors,
        total_polling_score,
        generated_at: chrono::Utc::now().timestamp(),
    }
}

/// Flag device types whose method ratios stray from summing to 1.
///
/// Devices with no count or no methods are skipped; they contribute
/// nothing so there is nothing to distort.
pub fn ratio_warnings(site: &Site) -> Vec<RatioWarning> {
    site.devices
        .iter()
        .filter(|(_, entry)| entry.count > 0 && !entry.methods.is_empty())
        .filter_map(|(name, entry)| {
            let sum: f64 = entry.methods.values().sum();
            if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
                Some(RatioWarning {
                    device_type: name.clone(),
                    ratio_sum: sum,
                })
            } else {
                None
            }
        })
        .collect()
}
