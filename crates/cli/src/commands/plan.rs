//! Deployment planning command

use std::path::Path;

use anyhow::Result;
use sizer_lib::{
    plan_deployment, CollectorSize, SitePlan, SizeSelection, SizingConfig,
};
use tabled::Tabled;

use crate::input::load_sites;
use crate::output::{color_load, color_role, format_score, print_warning, OutputFormat};

/// Command-line overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOverrides {
    pub max_load: Option<u8>,
    pub polling_failover: bool,
    pub logs_failover: bool,
    pub pinned_size: Option<CollectorSize>,
}

/// Row for per-site collector tables
#[derive(Tabled)]
struct CollectorRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Load")]
    load: String,
}

/// Row for the deployment summary table
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Collectors")]
    collectors: String,
}

/// Compute and render a full deployment plan.
pub fn run(
    sites_path: &Path,
    mut config: SizingConfig,
    overrides: PlanOverrides,
    format: OutputFormat,
) -> Result<()> {
    if let Some(max_load) = overrides.max_load {
        config.max_load_percent = max_load;
    }
    if overrides.polling_failover {
        config.enable_polling_failover = true;
    }
    if overrides.logs_failover {
        config.enable_logs_failover = true;
    }
    if let Some(size) = overrides.pinned_size {
        config.calc_method = SizeSelection::Fixed(size);
    }
    config.validate()?;

    let sites_file = load_sites(sites_path)?;
    let deployment = plan_deployment(&sites_file.sites, &config);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&deployment)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if deployment.sites.is_empty() {
                print_warning("No sites found in the input file");
                return Ok(());
            }

            for site_plan in &deployment.sites {
                print_site(site_plan);
            }

            println!("=== Deployment summary ===");
            let rows: Vec<SummaryRow> = deployment
                .totals_by_size
                .iter()
                .map(|(size, count)| SummaryRow {
                    size: size.to_string(),
                    collectors: count.to_string(),
                })
                .collect();
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!(
                "\nTotal: {} collectors across {} sites (score {})",
                deployment.total_collectors,
                deployment.sites.len(),
                format_score(deployment.total_polling_score)
            );
        }
    }

    Ok(())
}

fn print_site(site_plan: &SitePlan) {
    println!(
        "--- {} (score {}) ---",
        site_plan.name,
        format_score(site_plan.polling_score)
    );

    let mut rows = Vec::new();
    collect_rows(&mut rows, "Polling", &site_plan.allocation.polling);
    collect_rows(
        &mut rows,
        "Events",
        &site_plan.allocation.logs.event_collectors,
    );
    collect_rows(
        &mut rows,
        "Netflow",
        &site_plan.allocation.logs.netflow_collectors,
    );

    if rows.is_empty() {
        print_warning("No collectors needed");
        println!();
        return;
    }

    let table = tabled::Table::new(rows)
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}\n", table);
}

fn collect_rows(
    rows: &mut Vec<CollectorRow>,
    class: &str,
    instances: &[sizer_lib::CollectorInstance],
) {
    for instance in instances {
        rows.push(CollectorRow {
            class: class.to_string(),
            size: instance.size.to_string(),
            role: color_role(instance.role),
            load: color_load(instance.load),
        });
    }
}
