//! Error types for the sizing boundary
//!
//! The scorer and allocator themselves never fail; errors only exist where
//! configuration enters the system.

use thiserror::Error;

/// Errors raised while validating sizing configuration.
#[derive(Debug, Error)]
pub enum SizingError {
    #[error("max_load_percent must be in (0, 100], got {0}")]
    InvalidMaxLoad(u8),

    #[error("collector capacity table is empty")]
    EmptyCapacityTable,
}
