/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const PROJECT: &str = "tests/fixtures/sample-project";
const LISTING: &str = "tests/fixtures/sample-project/npm-ls.json";

fn run_json(extra: &[&str]) -> Value {
    let output = cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING])
        .args(extra)
        .env_remove("NODE_ENV")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("npm-sbom")
            .args([PROJECT, "--input", LISTING])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("npm-sbom").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("npm-sbom").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("npm-sbom")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid omit value
    #[test]
    fn test_exit_code_invalid_omit() {
        cargo_bin_cmd!("npm-sbom")
            .args(["--omit", "prod"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - non-existent project path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("npm-sbom")
            .args(["-p", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 1: Application error - path is a file, not a directory
    #[test]
    fn test_exit_code_application_error_file_not_directory() {
        cargo_bin_cmd!("npm-sbom")
            .args(["-p", "Cargo.toml"])
            .assert()
            .code(1);
    }

    /// Exit code 1: Application error - listing file missing
    #[test]
    fn test_exit_code_missing_input() {
        cargo_bin_cmd!("npm-sbom")
            .args([PROJECT, "--input", "tests/fixtures/missing.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("does not exist"));
    }

    /// Exit code 1: Application error - listing is not JSON
    #[test]
    fn test_exit_code_unparseable_listing() {
        let temp_dir = TempDir::new().unwrap();
        let listing = temp_dir.path().join("npm-ls.json");
        fs::write(&listing, "npm ERR! missing: left-pad@1.3.0").unwrap();

        cargo_bin_cmd!("npm-sbom")
            .arg(temp_dir.path())
            .arg("--input")
            .arg(&listing)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse the dependency tree"));
    }

    /// Exit code 1: Application error - listing without a root path
    #[test]
    fn test_exit_code_listing_without_root_path() {
        let temp_dir = TempDir::new().unwrap();
        let listing = temp_dir.path().join("npm-ls.json");
        fs::write(&listing, r#"{"name": "app", "version": "1.0.0"}"#).unwrap();

        cargo_bin_cmd!("npm-sbom")
            .arg(temp_dir.path())
            .arg("--input")
            .arg(&listing)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid dependency tree"));
    }
}

#[test]
fn test_e2e_json_output() {
    let bom = run_json(&[]);

    assert_eq!(bom["bomFormat"], "CycloneDX");
    assert_eq!(bom["specVersion"], "1.6");
    assert!(bom["serialNumber"].as_str().unwrap().starts_with("urn:uuid:"));
    assert!(bom["metadata"]["timestamp"].is_string());
    assert_eq!(bom["metadata"]["component"]["name"], "sample-project");
    assert_eq!(bom["metadata"]["component"]["type"], "application");
    assert_eq!(bom["components"].as_array().unwrap().len(), 6);
    assert_eq!(bom["components"][1]["components"].as_array().unwrap().len(), 2);
}

#[test]
fn test_e2e_progress_goes_to_stderr() {
    cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading dependency listing"))
        .stderr(predicate::str::contains("Building dependency graph"))
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_e2e_omit_dev() {
    let bom = run_json(&["--omit", "dev"]);
    let names: Vec<&str> = bom["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"jest"));
    assert!(names.contains(&"fsevents"));
}

#[test]
fn test_e2e_flatten_components() {
    let bom = run_json(&["--flatten-components"]);
    let components = bom["components"].as_array().unwrap();
    assert_eq!(components.len(), 8);
    assert!(components.iter().all(|c| c.get("components").is_none()));
}

#[test]
fn test_e2e_mc_type_and_short_purls() {
    let bom = run_json(&["--mc-type", "library", "--short-PURLs"]);
    assert_eq!(bom["metadata"]["component"]["type"], "library");
    assert_eq!(bom["components"][1]["purl"], "pkg:npm/express@4.19.2");
}

#[test]
fn test_e2e_reproducible_output_is_byte_identical() {
    let run = || {
        cargo_bin_cmd!("npm-sbom")
            .args([PROJECT, "--input", LISTING, "--output-reproducible"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);

    let bom: Value = serde_json::from_slice(&first).unwrap();
    assert!(bom.get("serialNumber").is_none());
    assert!(bom["metadata"].get("timestamp").is_none());
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("bom.json");

    cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING, "--output-file"])
        .arg(&output_path)
        .env_remove("NODE_ENV")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("SBOM with 8 component(s) written"));

    let bom: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(bom["bomFormat"], "CycloneDX");
}

#[test]
fn test_e2e_output_file_dash_means_stdout() {
    cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING, "--output-file", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bomFormat\": \"CycloneDX\""));
}

#[test]
fn test_e2e_node_env_production_omits_dev() {
    let output = cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING])
        .env("NODE_ENV", "production")
        .output()
        .unwrap();
    let bom: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(bom["components"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["name"] != "jest"));
}

#[cfg(unix)]
#[test]
fn test_e2e_symlinked_output_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target.json");
    fs::write(&target, "keep").unwrap();
    let link = temp_dir.path().join("bom.json");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    cargo_bin_cmd!("npm-sbom")
        .args([PROJECT, "--input", LISTING, "--output-file"])
        .arg(&link)
        .assert()
        .code(1);
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
}
