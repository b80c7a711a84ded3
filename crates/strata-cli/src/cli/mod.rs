//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered CRUD scaffolding for Spring Boot entities",
    long_about = "Strata generates the entity, repository, service contract, \
                  service implementation and controller of one entity, plus the \
                  support classes they rely on, into a target directory.",
    after_help = "EXAMPLES:\n\
        \x20 strata generate Order --id-type long --methods findAll,findById --yes\n\
        \x20 strata generate Invoice --result-wrapper --shared-utils --dry-run\n\
        \x20 strata methods --format json\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the layers of one entity.
    #[command(
        visible_alias = "g",
        about = "Generate the CRUD layers of an entity",
        after_help = "EXAMPLES:\n\
            \x20 strata generate Order                          # prompts for the rest\n\
            \x20 strata generate Order --dir src/main/java/com/shop --yes\n\
            \x20 strata g Customer --id-type String --methods findAll,save,delete -y"
    )]
    Generate(GenerateArgs),

    /// List the method catalog.
    #[command(
        visible_alias = "ls",
        about = "List the selectable CRUD methods",
        after_help = "EXAMPLES:\n\
            \x20 strata methods\n\
            \x20 strata methods --entity Order\n\
            \x20 strata methods --format csv"
    )]
    Methods(MethodsArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # user config location\n\
            \x20 strata init --local   # ./.strata.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.id_type\n\
            \x20 strata config set defaults.methods findAll,findById\n\
            \x20 strata config set java.base_package com.acme.shop\n\
            \x20 strata config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `strata generate`.
///
/// Every choice left out is prompted for in a terminal, or taken from the
/// configuration defaults otherwise.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity name; the first letter is upper-cased.
    #[arg(value_name = "ENTITY", help = "Entity name, e.g. Order")]
    pub entity: Option<String>,

    /// Target directory (default: current directory).
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Identifier type: int, long, String or any Java type.
    #[arg(
        short = 'i',
        long = "id-type",
        value_name = "TYPE",
        help = "Identifier type (int, long, String, or any Java type)"
    )]
    pub id_type: Option<String>,

    /// Comma-separated catalog method names.
    #[arg(
        short = 'm',
        long = "methods",
        value_name = "NAMES",
        value_delimiter = ',',
        help = "Methods to generate, e.g. findAll,findById"
    )]
    pub methods: Option<Vec<String>>,

    /// Wrap controller responses in `ResultProc`.
    #[arg(
        long = "result-wrapper",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Wrap controller responses in ResultProc"
    )]
    pub result_wrapper: Option<bool>,

    /// Import utilities from the shared package instead of generating them.
    #[arg(
        long = "shared-utils",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Use the shared utility package instead of local utility classes"
    )]
    pub shared_utils: Option<bool>,

    /// Java base package; inferred from `src/main/java/...` when absent.
    #[arg(
        short = 'p',
        long = "base-package",
        value_name = "PACKAGE",
        help = "Base Java package (default: inferred from the target directory)"
    )]
    pub base_package: Option<String>,

    /// Skip prompts and the confirmation.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and confirmation")]
    pub yes: bool,

    /// Preview directories and files without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── methods ───────────────────────────────────────────────────────────────────

/// Arguments for `strata methods`.
#[derive(Debug, Args)]
pub struct MethodsArgs {
    /// Render descriptions for this entity.
    #[arg(short = 'e', long = "entity", value_name = "ENTITY")]
    pub entity: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `methods` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.strata.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.id_type`.
        key: String,
    },
    /// Set a configuration key and save the file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value; lists are comma-separated.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
