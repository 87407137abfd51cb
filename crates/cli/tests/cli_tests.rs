//! CLI integration tests

use std::process::Command;

fn run_csp(args: &[&str]) -> std::process::Output {
    let mut all_args = vec!["run", "-p", "csp-cli", "--quiet", "--"];
    all_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&all_args)
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = run_csp(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Collector Sizing Planner"),
        "Should show app name"
    );
    assert!(stdout.contains("plan"), "Should show plan command");
    assert!(stdout.contains("score"), "Should show score command");
    assert!(stdout.contains("sizes"), "Should show sizes command");
    assert!(stdout.contains("init"), "Should show init command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = run_csp(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("csp"), "Should show binary name");
}

/// Test plan subcommand help
#[test]
fn test_plan_help() {
    let output = run_csp(&["plan", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Plan help should succeed");
    assert!(stdout.contains("--max-load"), "Should show max-load option");
    assert!(
        stdout.contains("--polling-failover"),
        "Should show polling-failover option"
    );
    assert!(
        stdout.contains("--logs-failover"),
        "Should show logs-failover option"
    );
    assert!(stdout.contains("--size"), "Should show size option");
}

/// Test init subcommand help
#[test]
fn test_init_help() {
    let output = run_csp(&["init", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Init help should succeed");
    assert!(stdout.contains("--force"), "Should show force option");
}

/// Test format option
#[test]
fn test_format_option() {
    let output = run_csp(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test config option and its env var
#[test]
fn test_config_option() {
    let output = run_csp(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--config"), "Should show config option");
    assert!(stdout.contains("CSP_CONFIG"), "Should show env var");
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = run_csp(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_argument() {
    let output = run_csp(&["plan"]);
    assert!(!output.status.success(), "Missing argument should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}

/// Test planning a missing sites file fails with the path in the error
#[test]
fn test_plan_missing_sites_file() {
    let output = run_csp(&["plan", "/nonexistent/sites.json"]);
    assert!(!output.status.success(), "Missing sites file should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sites.json"),
        "Error should name the missing file"
    );
}

/// End-to-end: init a starter file, then plan it as JSON
#[test]
fn test_init_then_plan_json() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let sites_path = dir.path().join("sites.json");
    let sites_arg = sites_path.to_str().unwrap();

    let output = run_csp(&["init", sites_arg]);
    assert!(output.status.success(), "Init should succeed");
    assert!(sites_path.exists(), "Init should write the sites file");

    // Re-running without --force must refuse to overwrite
    let output = run_csp(&["init", sites_arg]);
    assert!(!output.status.success(), "Init should refuse to overwrite");

    let output = run_csp(&["plan", sites_arg, "--format", "json", "--polling-failover"]);
    assert!(output.status.success(), "Plan should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let deployment: serde_json::Value =
        serde_json::from_str(&stdout).expect("Plan output should be valid JSON");

    let sites = deployment["sites"].as_array().expect("sites array");
    assert_eq!(sites.len(), 2, "Starter file has two sites");
    assert!(
        deployment["total_collectors"].as_u64().unwrap() > 0,
        "A non-empty deployment needs collectors"
    );

    // Every site carries a polling N+1 standby when the flag is set
    for site in sites {
        let polling = site["allocation"]["polling"].as_array().expect("polling");
        let standbys = polling
            .iter()
            .filter(|i| i["role"] == "N+1 Redundancy")
            .count();
        assert_eq!(standbys, 1, "Each site should have one standby");
    }
}

/// End-to-end: score the starter file as JSON
#[test]
fn test_score_json() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let sites_path = dir.path().join("sites.json");
    let sites_arg = sites_path.to_str().unwrap();

    let output = run_csp(&["init", sites_arg]);
    assert!(output.status.success(), "Init should succeed");

    let output = run_csp(&["score", sites_arg, "--format", "json"]);
    assert!(output.status.success(), "Score should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let scores: serde_json::Value =
        serde_json::from_str(&stdout).expect("Score output should be valid JSON");

    let scores = scores.as_array().expect("score array");
    assert_eq!(scores.len(), 2);
    for site_score in scores {
        assert!(site_score["score"].as_f64().unwrap() >= 0.0);
        assert!(site_score["breakdown"].is_object());
    }
}

/// Test the sizes command renders the default table with its footer
#[test]
fn test_sizes_table() {
    let output = run_csp(&["sizes"]);
    assert!(output.status.success(), "Sizes should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for size in ["SMALL", "MEDIUM", "LARGE", "XL", "XXL"] {
        assert!(stdout.contains(size), "Table should list {}", size);
    }
    assert!(
        stdout.contains("Max load: 85%"),
        "Footer should show the default max load"
    );
}

/// Test a malformed config file fails loudly instead of planning on defaults
#[test]
fn test_malformed_config_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("sizing.json");
    std::fs::write(&config_path, r#"{"max_load_percent": "seventy"}"#)
        .expect("Failed to write config");

    let output = run_csp(&["sizes", "--config", config_path.to_str().unwrap()]);
    assert!(!output.status.success(), "Malformed config should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid sizing configuration file"),
        "Should report the config file as invalid"
    );
}

/// Test the sizes command renders the default table
#[test]
fn test_sizes_json() {
    let output = run_csp(&["sizes", "--format", "json"]);
    assert!(output.status.success(), "Sizes should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let capacities: serde_json::Value =
        serde_json::from_str(&stdout).expect("Sizes output should be valid JSON");

    for size in ["SMALL", "MEDIUM", "LARGE", "XL", "XXL"] {
        assert!(
            capacities.get(size).is_some(),
            "Capacity table should contain {}",
            size
        );
    }
}
