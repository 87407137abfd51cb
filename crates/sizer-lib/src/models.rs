//! Core data models for collector sizing

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Discrete collector size classes, ordered by ascending capacity.
///
/// The `Ord` derive follows declaration order, so a `BTreeMap` keyed by
/// `CollectorSize` iterates SMALL through XXL. Size selection relies on
/// this ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CollectorSize {
    #[serde(rename = "SMALL", alias = "small")]
    Small,
    #[serde(rename = "MEDIUM", alias = "medium")]
    Medium,
    #[serde(rename = "LARGE", alias = "large")]
    Large,
    #[serde(rename = "XL", alias = "xl")]
    Xl,
    #[serde(rename = "XXL", alias = "xxl")]
    Xxl,
}

impl CollectorSize {
    /// All sizes in ascending capacity order.
    pub const ALL: [CollectorSize; 5] = [
        CollectorSize::Small,
        CollectorSize::Medium,
        CollectorSize::Large,
        CollectorSize::Xl,
        CollectorSize::Xxl,
    ];

    /// Canonical uppercase label (matches the serialized form).
    pub fn label(&self) -> &'static str {
        match self {
            CollectorSize::Small => "SMALL",
            CollectorSize::Medium => "MEDIUM",
            CollectorSize::Large => "LARGE",
            CollectorSize::Xl => "XL",
            CollectorSize::Xxl => "XXL",
        }
    }
}

impl fmt::Display for CollectorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CollectorSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMALL" => Ok(CollectorSize::Small),
            "MEDIUM" => Ok(CollectorSize::Medium),
            "LARGE" => Ok(CollectorSize::Large),
            "XL" => Ok(CollectorSize::Xl),
            "XXL" => Ok(CollectorSize::Xxl),
            other => Err(format!("unknown collector size '{}'", other)),
        }
    }
}

/// Per-size resource ceilings a single collector can sustain.
///
/// A ceiling of zero (or an absent field) means the size cannot serve
/// that metric and is skipped during selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectorCapacity {
    /// Dimensionless polling weight ceiling
    #[serde(default)]
    pub weight: f64,
    /// Log events per second ceiling
    #[serde(default)]
    pub eps: f64,
    /// Netflow flows per second ceiling
    #[serde(default)]
    pub fps: f64,
}

/// The three independent resource classes a collector serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityMetric {
    Weight,
    Eps,
    Fps,
}

impl CapacityMetric {
    /// Ceiling of `capacity` for this metric.
    pub fn ceiling(&self, capacity: &CollectorCapacity) -> f64 {
        match self {
            CapacityMetric::Weight => capacity.weight,
            CapacityMetric::Eps => capacity.eps,
            CapacityMetric::Fps => capacity.fps,
        }
    }
}

/// How a device type is dispatched during scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceCategory {
    /// Scored from the protocol mix alone
    #[default]
    Standard,
    /// Hosts bounded by a management controller (vCenter-style)
    VirtualizationHost,
}

/// One device type's configuration within a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// Number of devices of this type
    #[serde(default)]
    pub count: u32,
    /// Average monitored sub-instances per device (interfaces, databases, ...)
    #[serde(default)]
    pub instances: u32,
    /// Fraction of instances collected via each method, in [0,1].
    /// Ratios should sum to 1; the core computes with whatever is given.
    #[serde(default)]
    pub methods: BTreeMap<String, f64>,
    #[serde(default)]
    pub category: DeviceCategory,
    /// Management controller count for virtualization hosts; the host
    /// count is divided across these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controllers: Option<u32>,
}

/// Log and netflow ingest rates for a site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsLoad {
    /// Log events per second
    #[serde(default)]
    pub events: f64,
    /// Netflow flows per second
    #[serde(default)]
    pub netflow: f64,
}

/// A monitored site: device inventory plus log/flow rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    #[serde(default)]
    pub devices: BTreeMap<String, DeviceEntry>,
    #[serde(default)]
    pub events_per_second: f64,
    #[serde(default)]
    pub flows_per_second: f64,
}

impl Site {
    /// Log/flow rates as the allocator's input shape.
    pub fn logs_load(&self) -> LogsLoad {
        LogsLoad {
            events: self.events_per_second,
            netflow: self.flows_per_second,
        }
    }
}

/// Role of a materialized collector instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectorRole {
    Primary,
    #[serde(rename = "N+1 Redundancy")]
    Failover,
}

impl fmt::Display for CollectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectorRole::Primary => f.write_str("Primary"),
            CollectorRole::Failover => f.write_str("N+1 Redundancy"),
        }
    }
}

/// One recommended collector. Recomputed on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorInstance {
    pub size: CollectorSize,
    pub role: CollectorRole,
    /// Expected utilization as an integer percentage, 0-100
    pub load: u8,
}

/// Collectors allocated for log and netflow ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAllocation {
    pub event_collectors: Vec<CollectorInstance>,
    pub netflow_collectors: Vec<CollectorInstance>,
}

/// Full allocation for one site across all three resource classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub polling: Vec<CollectorInstance>,
    pub logs: LogsAllocation,
}

impl AllocationResult {
    /// Total number of collectors across all classes, failover included.
    pub fn total_collectors(&self) -> usize {
        self.polling.len()
            + self.logs.event_collectors.len()
            + self.logs.netflow_collectors.len()
    }

    /// Iterate every instance across all three classes.
    pub fn iter(&self) -> impl Iterator<Item = &CollectorInstance> {
        self.polling
            .iter()
            .chain(self.logs.event_collectors.iter())
            .chain(self.logs.netflow_collectors.iter())
    }
}
