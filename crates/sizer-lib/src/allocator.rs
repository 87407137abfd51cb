//! Collector allocator
//!
//! Turns the three per-site load numbers (polling weight, events/sec,
//! flows/sec) into concrete collector recommendations. Never fails:
//! degenerate inputs collapse to a zero-collector result and impossible
//! capacity tables fall back to a clamped XXL estimate.

use tracing::debug;

use crate::config::{SizeSelection, SizingConfig};
use crate::models::{
    AllocationResult, CapacityMetric, CollectorInstance, CollectorRole, CollectorSize,
    LogsAllocation, LogsLoad,
};

/// Hard cap on collectors per resource class.
const MAX_COLLECTORS: u32 = 100;

/// A chosen size and the number of primaries it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeChoice {
    pub size: CollectorSize,
    pub count: u32,
}

/// Pick a collector size and headcount for one resource class.
///
/// Iterates the capacity table in ascending size order and keeps the
/// candidate with the fewest collectors in (0, 100]; on a tie the later
/// (larger) size overwrites, so equal headcounts resolve to the size with
/// the most headroom. Sizes with a zero or missing ceiling for the metric
/// cannot serve it and are skipped. A pinned `calc_method` bypasses the
/// search for the polling metric only.
pub fn select_size(total: f64, metric: CapacityMetric, config: &SizingConfig) -> SizeChoice {
    if !total.is_finite() || total <= 0.0 {
        return SizeChoice {
            size: CollectorSize::Small,
            count: 0,
        };
    }

    if metric == CapacityMetric::Weight {
        if let SizeSelection::Fixed(size) = config.calc_method {
            return pinned_choice(total, size, metric, config);
        }
    }

    let fraction = config.max_load_fraction();
    let mut best: Option<SizeChoice> = None;

    for (size, capacity) in &config.collector_capacities {
        let ceiling = metric.ceiling(capacity);
        if !ceiling.is_finite() || ceiling <= 0.0 {
            continue;
        }
        let needed = (total / (ceiling * fraction)).ceil();
        if !needed.is_finite() || needed < 1.0 || needed > f64::from(MAX_COLLECTORS) {
            continue;
        }
        let needed = needed as u32;
        match best {
            Some(choice) if needed > choice.count => {}
            _ => {
                best = Some(SizeChoice {
                    size: *size,
                    count: needed,
                });
            }
        }
    }

    best.unwrap_or_else(|| xxl_fallback(total, metric, config))
}

/// Headcount for an operator-pinned polling size.
fn pinned_choice(
    total: f64,
    size: CollectorSize,
    metric: CapacityMetric,
    config: &SizingConfig,
) -> SizeChoice {
    let ceiling = metric.ceiling(&config.capacity_of(size));
    let needed = (total / (ceiling * config.max_load_fraction())).ceil();
    SizeChoice {
        size,
        count: clamp_count(needed),
    }
}

/// No size could serve the load within the headcount cap; estimate against
/// raw XXL capacity instead of giving up.
fn xxl_fallback(total: f64, metric: CapacityMetric, config: &SizingConfig) -> SizeChoice {
    let ceiling = metric.ceiling(&config.capacity_of(CollectorSize::Xxl));
    let needed = (total / ceiling).ceil();
    debug!(total, ?metric, "no size satisfies the load, falling back to XXL");
    SizeChoice {
        size: CollectorSize::Xxl,
        count: clamp_count(needed),
    }
}

fn clamp_count(needed: f64) -> u32 {
    if !needed.is_finite() {
        return MAX_COLLECTORS;
    }
    (needed.max(1.0).min(f64::from(MAX_COLLECTORS))) as u32
}

/// Allocate collectors for every resource class of a site.
///
/// Polling sizes against the `weight` ceiling, log events against `eps`,
/// netflow against `fps`. Each class gets `count` primaries annotated with
/// their expected load percentage, plus one zero-load N+1 standby when the
/// class's failover flag is set. The standby is appended even when the
/// class is idle (`count == 0`): requesting failover guarantees standby
/// capacity exists.
pub fn calculate_collectors(
    total_weight: f64,
    logs_load: LogsLoad,
    config: &SizingConfig,
) -> AllocationResult {
    AllocationResult {
        polling: materialize(
            total_weight,
            CapacityMetric::Weight,
            config,
            config.enable_polling_failover,
        ),
        logs: LogsAllocation {
            event_collectors: materialize(
                logs_load.events,
                CapacityMetric::Eps,
                config,
                config.enable_logs_failover,
            ),
            netflow_collectors: materialize(
                logs_load.netflow,
                CapacityMetric::Fps,
                config,
                config.enable_logs_failover,
            ),
        },
    }
}

/// Materialize the instance list for one resource class.
fn materialize(
    total: f64,
    metric: CapacityMetric,
    config: &SizingConfig,
    failover: bool,
) -> Vec<CollectorInstance> {
    let choice = select_size(total, metric, config);
    let load = load_percent(total, choice, metric, config);

    let mut instances = Vec::with_capacity(choice.count as usize + 1);
    for _ in 0..choice.count {
        instances.push(CollectorInstance {
            size: choice.size,
            role: CollectorRole::Primary,
            load,
        });
    }
    if failover {
        instances.push(CollectorInstance {
            size: choice.size,
            role: CollectorRole::Failover,
            load: 0,
        });
    }
    instances
}

/// Expected utilization of each primary, as an integer percentage.
fn load_percent(
    total: f64,
    choice: SizeChoice,
    metric: CapacityMetric,
    config: &SizingConfig,
) -> u8 {
    if choice.count == 0 {
        return 0;
    }
    let ceiling = metric.ceiling(&config.capacity_of(choice.size));
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return 0;
    }
    let percent = (total / f64::from(choice.count) / ceiling * 100.0).round();
    if !percent.is_finite() {
        return 0;
    }
    percent.clamp(0.0, 100.0) as u8
}
