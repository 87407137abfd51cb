//! Sizing configuration loading for the CLI
//!
//! Layers an optional config file and CSP_-prefixed environment variables
//! over the library defaults. Every field of [`SizingConfig`] has a serde
//! default, so partial files work.

use std::path::Path;

use anyhow::{Context, Result};
use sizer_lib::SizingConfig;

/// Load the sizing configuration, optionally from a file.
pub fn load_sizing_config(path: Option<&Path>) -> Result<SizingConfig> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Json)
                .required(true),
        );
    }
    builder = builder.add_source(config::Environment::with_prefix("CSP").try_parsing(true));

    let settings = builder
        .build()
        .context("failed to load sizing configuration")?;

    // A file was named explicitly, so a field that fails to deserialize is
    // a user error to report, not something to paper over with defaults.
    // Env-only runs stay lenient: unrelated CSP_* variables must not take
    // the stock configuration down.
    let sizing: SizingConfig = if path.is_some() {
        settings
            .try_deserialize()
            .context("invalid sizing configuration file")?
    } else {
        settings
            .try_deserialize()
            .unwrap_or_else(|_| SizingConfig::default())
    };

    sizing.validate().context("invalid sizing configuration")?;

    Ok(sizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_file_yields_defaults() {
        let config = load_sizing_config(None).unwrap();
        assert_eq!(config, SizingConfig::default());
    }

    #[test]
    fn file_overrides_are_applied() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            file,
            r#"{{"max_load_percent": 60, "enable_polling_failover": true}}"#
        )
        .unwrap();

        let config = load_sizing_config(Some(file.path())).unwrap();
        assert_eq!(config.max_load_percent, 60);
        assert!(config.enable_polling_failover);
        // Untouched fields keep their defaults
        assert_eq!(config.collector_capacities.len(), 5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_sizing_config(Some(Path::new("/nonexistent/sizing.json")));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        // A named config file with a mistyped field must fail loudly, not
        // fall back to defaults.
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"max_load_percent": "seventy"}}"#).unwrap();

        let err = load_sizing_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid sizing configuration file"));
    }

    #[test]
    fn unknown_calc_method_in_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"calc_method": "GIGANTIC"}}"#).unwrap();

        assert!(load_sizing_config(Some(file.path())).is_err());
    }
}
