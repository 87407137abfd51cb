//! CLI command implementations

pub mod init;
pub mod plan;
pub mod score;
pub mod sizes;
