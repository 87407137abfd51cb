//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use sizer_lib::CollectorRole;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a load score with thousands grouping
pub fn format_score(score: f64) -> String {
    let rounded = score.round() as i64;
    let digits = rounded.abs().to_string();
    let grouped: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a per-second rate (eps/fps)
pub fn format_rate(rate: f64) -> String {
    if rate >= 1000.0 {
        format!("{:.1}k", rate / 1000.0)
    } else {
        format!("{:.0}", rate)
    }
}

/// Color a load percentage by utilization band
pub fn color_load(load: u8) -> String {
    let formatted = format!("{}%", load);
    if load >= 90 {
        formatted.red().to_string()
    } else if load >= 70 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}

/// Color a collector role
pub fn color_role(role: CollectorRole) -> String {
    match role {
        CollectorRole::Primary => role.to_string(),
        CollectorRole::Failover => role.to_string().cyan().to_string(),
    }
}
