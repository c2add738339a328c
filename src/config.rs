//! Configuration file support for npm-sbom.
//!
//! Provides YAML-based configuration through `npm-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::sbom_generation::domain::{ComponentType, OmitType};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-sbom.config.yml";

/// Top-level configuration file schema.
///
/// Every field mirrors a command-line option; options given on the command
/// line win over the file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub omit: Option<Vec<String>>,
    pub flatten_components: Option<bool>,
    pub short_purls: Option<bool>,
    pub output_reproducible: Option<bool>,
    pub mc_type: Option<String>,
    pub package_lock_only: Option<bool>,
    pub workspaces: Option<Vec<String>>,
    pub ignore_npm_errors: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Omit types, already validated by [`load_config_from_path`]
    pub fn omit_types(&self) -> Option<Vec<OmitType>> {
        self.omit
            .as_ref()
            .map(|values| values.iter().filter_map(|v| OmitType::from_str(v).ok()).collect())
    }

    /// Root component type, already validated by [`load_config_from_path`]
    pub fn component_type(&self) -> Option<ComponentType> {
        self.mc_type
            .as_deref()
            .and_then(|v| ComponentType::from_str(v).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref omit) = config.omit {
        for (i, value) in omit.iter().enumerate() {
            if let Err(e) = OmitType::from_str(value) {
                bail!(
                    "Invalid config: omit[{}]: {}\n\n\
                     💡 Hint: Allowed values are dev, optional and peer.",
                    i,
                    e
                );
            }
        }
    }

    if let Some(ref mc_type) = config.mc_type {
        if let Err(e) = ComponentType::from_str(mc_type) {
            bail!(
                "Invalid config: mc_type: {}\n\n\
                 💡 Hint: Allowed values are application, library and firmware.",
                e
            );
        }
    }

    if let Some(ref workspaces) = config.workspaces {
        if workspaces.iter().any(|w| w.trim().is_empty()) {
            bail!(
                "Invalid config: workspaces entries must not be empty.\n\n\
                 💡 Hint: Use workspace names or paths as npm expects them for --workspace."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
omit:
  - dev
  - peer
flatten_components: true
short_purls: true
output_reproducible: true
mc_type: firmware
package_lock_only: true
workspaces:
  - packages/api
ignore_npm_errors: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.omit_types(), Some(vec![OmitType::Dev, OmitType::Peer]));
        assert_eq!(config.flatten_components, Some(true));
        assert_eq!(config.short_purls, Some(true));
        assert_eq!(config.output_reproducible, Some(true));
        assert_eq!(config.component_type(), Some(ComponentType::Firmware));
        assert_eq!(config.package_lock_only, Some(true));
        assert_eq!(
            config.workspaces.as_deref(),
            Some(&["packages/api".to_string()][..])
        );
        assert_eq!(config.ignore_npm_errors, Some(false));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "flatten_components: true\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().flatten_components, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_omit_value() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "omit: [dev, prod]\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("omit[1]"));
        assert!(err.contains("prod"));
    }

    #[test]
    fn test_invalid_mc_type() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "mc_type: container\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("mc_type"));
    }

    #[test]
    fn test_empty_workspace_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "workspaces: [\"  \"]\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
flatten_components: false
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "{}\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.omit.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
