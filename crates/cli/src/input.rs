//! Sites file loading
//!
//! The sites file is the CLI's data source: a JSON document listing every
//! site's device inventory and log/flow rates.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sizer_lib::{DeviceCategory, DeviceEntry, Site};

/// Top-level shape of a sites file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitesFile {
    #[serde(default)]
    pub sites: Vec<Site>,
}

/// Load and parse a sites file.
pub fn load_sites(path: &Path) -> Result<SitesFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sites file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse sites file {}", path.display()))
}

/// A small two-site example used by `csp init`.
pub fn example_sites() -> SitesFile {
    let mut headquarters = Site {
        name: "headquarters".to_string(),
        events_per_second: 1200.0,
        flows_per_second: 3000.0,
        ..Site::default()
    };
    headquarters.devices.insert(
        "network-switches".to_string(),
        DeviceEntry {
            count: 40,
            instances: 24,
            methods: [("snmp".to_string(), 1.0)].into_iter().collect(),
            category: DeviceCategory::Standard,
            controllers: None,
        },
    );
    headquarters.devices.insert(
        "windows-servers".to_string(),
        DeviceEntry {
            count: 120,
            instances: 30,
            methods: [("wmi".to_string(), 0.7), ("snmp".to_string(), 0.3)]
                .into_iter()
                .collect(),
            category: DeviceCategory::Standard,
            controllers: None,
        },
    );
    headquarters.devices.insert(
        "virtual-machines".to_string(),
        DeviceEntry {
            count: 800,
            instances: 12,
            methods: [("esx".to_string(), 1.0)].into_iter().collect(),
            category: DeviceCategory::VirtualizationHost,
            controllers: Some(2),
        },
    );

    let mut branch = Site {
        name: "branch-office".to_string(),
        events_per_second: 150.0,
        flows_per_second: 0.0,
        ..Site::default()
    };
    branch.devices.insert(
        "network-switches".to_string(),
        DeviceEntry {
            count: 6,
            instances: 24,
            methods: [("snmp".to_string(), 1.0)].into_iter().collect(),
            category: DeviceCategory::Standard,
            controllers: None,
        },
    );

    SitesFile {
        sites: vec![headquarters, branch],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn example_round_trips_through_json() {
        let example = example_sites();
        let json = serde_json::to_string_pretty(&example).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_sites(file.path()).unwrap();
        assert_eq!(loaded.sites.len(), 2);
        assert_eq!(loaded.sites[0].name, "headquarters");
        assert_eq!(
            loaded.sites[0].devices["virtual-machines"].category,
            DeviceCategory::VirtualizationHost
        );
    }

    #[test]
    fn malformed_file_reports_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = load_sites(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_sites_key_is_an_empty_deployment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let loaded = load_sites(file.path()).unwrap();
        assert!(loaded.sites.is_empty());
    }
}
