//! Capacity table command

use anyhow::Result;
use sizer_lib::SizingConfig;
use tabled::Tabled;

use crate::output::{format_rate, format_score, print_info, OutputFormat};

/// Row for the capacity table
#[derive(Tabled)]
struct CapacityRow {
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "EPS")]
    eps: String,
    #[tabled(rename = "FPS")]
    fps: String,
}

/// Render the active collector capacity table.
pub fn run(config: &SizingConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config.collector_capacities)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<CapacityRow> = config
                .collector_capacities
                .iter()
                .map(|(size, capacity)| CapacityRow {
                    size: size.to_string(),
                    weight: format_score(capacity.weight),
                    eps: format_rate(capacity.eps),
                    fps: format_rate(capacity.fps),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            print_info(&format!("Max load: {}%", config.max_load_percent));
        }
    }

    Ok(())
}
