//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STRATA_<SECTION>__<KEY>`, e.g.
//!    `STRATA_DEFAULTS__ID_TYPE=String`
//! 3. Config file: `--config`, else `./.strata.toml`, else the user config
//!    directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a choice is neither passed nor prompted for.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Java package settings.
    pub java: JavaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub id_type: String,
    pub methods: Vec<String>,
    pub result_wrapper: bool,
    /// Whether interactive runs ask about the result wrapper at all.
    pub ask_result_wrapper: bool,
    pub util_classes: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            id_type: "long".into(),
            methods: vec!["findAll".into(), "findById".into(), "save".into()],
            result_wrapper: false,
            ask_result_wrapper: true,
            util_classes: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaConfig {
    /// Overrides the package inferred from the target directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,
    /// Provides `ResultProc` when local utility classes are not generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_utils_package: Option<String>,
}

/// Keys accepted by `config get` / `config set`.
pub const KEYS: &[&str] = &[
    "defaults.id_type",
    "defaults.methods",
    "defaults.result_wrapper",
    "defaults.ask_result_wrapper",
    "defaults.util_classes",
    "output.no_color",
    "output.format",
    "java.base_package",
    "java.shared_utils_package",
];

impl AppConfig {
    /// Load configuration from the active file and the environment.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file.map(PathBuf::as_path));
        debug!(path = %path.display(), "Loading configuration");

        let env = Environment::with_prefix("STRATA")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("defaults.methods")
            .try_parsing(true);

        Self::from_file_with(&path, Some(env))
    }

    /// Load from one file only, ignoring the environment.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Self::from_file_with(path, None)
    }

    fn from_file_with(path: &Path, env: Option<Environment>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// The file `load` reads and `config set` writes.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::config_path()
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Current value of a dotted key, as `config set` would accept it.
    pub fn get(&self, key: &str) -> CliResult<String> {
        Ok(match key {
            "defaults.id_type" => self.defaults.id_type.clone(),
            "defaults.methods" => self.defaults.methods.join(","),
            "defaults.result_wrapper" => self.defaults.result_wrapper.to_string(),
            "defaults.ask_result_wrapper" => self.defaults.ask_result_wrapper.to_string(),
            "defaults.util_classes" => self.defaults.util_classes.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "java.base_package" => self.java.base_package.clone().unwrap_or_default(),
            "java.shared_utils_package" => {
                self.java.shared_utils_package.clone().unwrap_or_default()
            }
            _ => return Err(unknown_key(key)),
        })
    }

    /// Update a dotted key. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let value = value.trim();
        match key {
            "defaults.id_type" => self.defaults.id_type = value.to_string(),
            "defaults.methods" => {
                self.defaults.methods = value
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from)
                    .collect();
            }
            "defaults.result_wrapper" => self.defaults.result_wrapper = parse_bool(key, value)?,
            "defaults.ask_result_wrapper" => {
                self.defaults.ask_result_wrapper = parse_bool(key, value)?;
            }
            "defaults.util_classes" => self.defaults.util_classes = parse_bool(key, value)?,
            "output.no_color" => self.output.no_color = parse_bool(key, value)?,
            "output.format" => self.output.format = value.to_string(),
            "java.base_package" => self.java.base_package = optional(value),
            "java.shared_utils_package" => self.java.shared_utils_package = optional(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let toml = self.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create config directory '{}'", parent.display()),
                source: e,
            })?;
        }

        std::fs::write(path, toml).map_err(|e| CliError::IoError {
            message: format!("Failed to write config to '{}'", path.display()),
            source: e,
        })
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::UnknownConfigKey {
        key: key.to_string(),
        available: KEYS.to_vec(),
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CliError::InvalidInput {
            message: format!("{key} expects true or false, got '{value}'"),
            source: None,
        }),
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_generate_plain_layers() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.id_type, "long");
        assert!(!cfg.defaults.result_wrapper);
        assert!(cfg.defaults.ask_result_wrapper);
        assert!(cfg.defaults.util_classes);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(
            &path,
            "[defaults]\nid_type = \"String\"\n\n[java]\nbase_package = \"com.acme\"\n",
        )
        .unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.defaults.id_type, "String");
        assert_eq!(cfg.defaults.methods, Defaults::default().methods);
        assert_eq!(cfg.java.base_package.as_deref(), Some("com.acme"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(&path, "[defaults]\nresult_wrapper = \"maybe\"\n").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn set_then_save_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("strata.toml");

        let mut cfg = AppConfig::default();
        cfg.set("defaults.methods", "findAll, delete").unwrap();
        cfg.set("defaults.result_wrapper", "yes").unwrap();
        cfg.set("defaults.ask_result_wrapper", "off").unwrap();
        cfg.set("java.shared_utils_package", "com.acme.common").unwrap();
        cfg.save(&path).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded.get("defaults.methods").unwrap(), "findAll,delete");
        assert_eq!(loaded.get("defaults.result_wrapper").unwrap(), "true");
        assert!(!loaded.defaults.ask_result_wrapper);
        assert_eq!(
            loaded.get("java.shared_utils_package").unwrap(),
            "com.acme.common"
        );
    }

    #[test]
    fn empty_value_clears_optional_key() {
        let mut cfg = AppConfig::default();
        cfg.set("java.base_package", "com.acme").unwrap();
        cfg.set("java.base_package", "").unwrap();
        assert!(cfg.java.base_package.is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.get("defaults.lang"),
            Err(CliError::UnknownConfigKey { .. })
        ));
        assert!(cfg.set("nope", "x").is_err());
    }

    #[test]
    fn bool_keys_reject_garbage() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.set("output.no_color", "perhaps"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn every_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_ok(), "{key}");
        }
    }
}
