//! `strata config`: read and write configuration values.

use tracing::debug;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::active_path(global.config.as_deref());
            debug!(path = %path.display(), %key, "Updating configuration");

            // Start from the file alone so environment overrides are not persisted.
            let mut stored = AppConfig::from_file(&path).map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            })?;
            stored.set(&key, &value)?;
            stored.save(&path)?;

            output.success(&format!(
                "{key} = {} ({})",
                stored.get(&key)?,
                path.display()
            ))?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(
                &AppConfig::active_path(global.config.as_deref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn quiet_global(config: PathBuf) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: Some(config),
            output_format: OutputFormat::Plain,
        }
    }

    fn run(cmd: ConfigCommands, global: GlobalArgs, config: AppConfig) -> CliResult<()> {
        let output = OutputManager::new(&global, &config);
        execute(cmd, global, config, output)
    }

    #[test]
    fn set_persists_to_the_active_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.toml");

        run(
            ConfigCommands::Set {
                key: "defaults.id_type".into(),
                value: "String".into(),
            },
            quiet_global(path.clone()),
            AppConfig::default(),
        )
        .unwrap();

        let stored = AppConfig::from_file(&path).unwrap();
        assert_eq!(stored.defaults.id_type, "String");
    }

    #[test]
    fn set_keeps_other_stored_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(&path, "[java]\nbase_package = \"com.acme\"\n").unwrap();

        run(
            ConfigCommands::Set {
                key: "defaults.result_wrapper".into(),
                value: "true".into(),
            },
            quiet_global(path.clone()),
            AppConfig::default(),
        )
        .unwrap();

        let stored = AppConfig::from_file(&path).unwrap();
        assert!(stored.defaults.result_wrapper);
        assert_eq!(stored.java.base_package.as_deref(), Some("com.acme"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let dir = TempDir::new().unwrap();
        let result = run(
            ConfigCommands::Get {
                key: "does.not.exist".into(),
            },
            quiet_global(dir.path().join("strata.toml")),
            AppConfig::default(),
        );
        assert!(matches!(result, Err(CliError::UnknownConfigKey { .. })));
    }

    #[test]
    fn set_unknown_key_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.toml");
        let result = run(
            ConfigCommands::Set {
                key: "defaults.lang".into(),
                value: "rust".into(),
            },
            quiet_global(path.clone()),
            AppConfig::default(),
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
