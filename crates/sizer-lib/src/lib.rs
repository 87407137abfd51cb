//! Sizing core for monitoring collector deployments
//!
//! This crate provides the pure calculation engine:
//! - Weighted load scoring of device inventories
//! - Collector size/count allocation with optional N+1 failover
//! - Default capacity and method-weight tables
//! - Per-site and deployment-wide plan aggregation
//!
//! Every entry point is a synchronous pure function over plain value
//! types; the surrounding caller owns IO, persistence, and presentation.

pub mod allocator;
pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod plan;
pub mod scorer;

pub use allocator::{calculate_collectors, select_size, SizeChoice};
pub use config::{SizeSelection, SizingConfig};
pub use error::SizingError;
pub use models::*;
pub use plan::{plan_deployment, plan_site, ratio_warnings, DeploymentPlan, SitePlan};
pub use scorer::{calculate_weighted_score, score_breakdown};
