//! Weighted score command

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use sizer_lib::{calculate_weighted_score, ratio_warnings, score_breakdown, SizingConfig};
use tabled::Tabled;

use crate::input::load_sites;
use crate::output::{format_score, print_warning, OutputFormat};

/// Row for the per-device breakdown table
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Device Type")]
    device_type: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// JSON shape for one site's score
#[derive(Serialize)]
struct SiteScore {
    site: String,
    score: f64,
    breakdown: std::collections::BTreeMap<String, f64>,
}

/// Show weighted polling scores with per-device breakdowns.
pub fn run(sites_path: &Path, config: &SizingConfig, format: OutputFormat) -> Result<()> {
    let sites_file = load_sites(sites_path)?;

    let scores: Vec<SiteScore> = sites_file
        .sites
        .iter()
        .map(|site| SiteScore {
            site: site.name.clone(),
            score: calculate_weighted_score(&site.devices, &config.method_weights, config),
            breakdown: score_breakdown(&site.devices, &config.method_weights, config),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&scores)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if scores.is_empty() {
                print_warning("No sites found in the input file");
                return Ok(());
            }

            let rows: Vec<BreakdownRow> = scores
                .iter()
                .flat_map(|site_score| {
                    site_score
                        .breakdown
                        .iter()
                        .map(|(device_type, contribution)| BreakdownRow {
                            site: site_score.site.clone(),
                            device_type: device_type.clone(),
                            contribution: format_score(*contribution),
                        })
                        .collect::<Vec<_>>()
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            for site_score in &scores {
                println!(
                    "{}: total score {}",
                    site_score.site,
                    format_score(site_score.score)
                );
            }

            // Soft invariant: ratios should sum to 1; the scores above are
            // computed with them as given either way.
            for site in &sites_file.sites {
                for warning in ratio_warnings(site) {
                    print_warning(&format!(
                        "{}/{}: method ratios sum to {:.2}, expected 1.00, score accuracy degraded",
                        site.name, warning.device_type, warning.ratio_sum
                    ));
                }
            }
        }
    }

    Ok(())
}
