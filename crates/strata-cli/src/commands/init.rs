//! `strata init`: create a default configuration file.

use std::path::PathBuf;

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::CliResult,
    output::OutputManager,
};

/// Write the built-in defaults to the chosen configuration file.
#[instrument(skip_all, fields(local = args.local, force = args.force))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = destination(&args, &global);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    AppConfig::default().save(&config_path)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--local` wins, then `--config`, then the user config directory.
fn destination(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    if args.local {
        return PathBuf::from(LOCAL_CONFIG_FILE);
    }
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}
