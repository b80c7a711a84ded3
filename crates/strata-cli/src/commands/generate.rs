//! Implementation of the `strata generate` command.
//!
//! Responsibility: collect choices from flags, prompts and configuration,
//! resolve them, and hand them to the core generation service. No generation
//! logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use strata_adapters::{JavaRenderer, LocalFilesystem};
use strata_core::{
    application::{GenerationPlan, GenerationReport, GenerationService},
    domain::{MethodSelection, RawChoices, ResolvedParameters, normalize_entity_name},
    error::StrataError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `strata generate` command.
///
/// 1. Resolve the target directory to an absolute path
/// 2. Collect the remaining choices (flag, then prompt, then config default)
/// 3. Resolve them into `ResolvedParameters`
/// 4. Confirm with the user when prompting is possible
/// 5. `--dry-run`: print the plan and stop
/// 6. Run the generation service and report
#[instrument(skip_all, fields(entity = args.entity.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let target = resolve_target(args.dir.as_deref())?;
    let interactive = !args.yes && output.is_interactive();

    let raw = collect_choices(&args, &config, target, interactive)?;
    let params = ResolvedParameters::resolve(raw).map_err(StrataError::from)?;
    let renderer = build_renderer(&args, &config)?;
    let plan = GenerationService::plan(&params);

    debug!(
        entity = %params.entity_name(),
        bundle = ?plan.artifacts.bundle(),
        tasks = plan.artifacts.task_count(),
        "Parameters resolved"
    );

    if output.format() != OutputFormat::Json {
        show_summary(&params, &plan, &output)?;
    }

    if args.dry_run {
        return show_plan(&params, &plan, &output);
    }

    if interactive && !prompt::confirm("Generate these files?", true)? {
        return Err(CliError::Cancelled);
    }

    let service = GenerationService::new(Arc::new(LocalFilesystem::new()), Arc::new(renderer));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError {
            message: "Failed to start the async runtime".into(),
            source: e,
        })?;

    let spinner = output.spinner(format!("Generating {}...", params.entity_name()));
    let result = runtime.block_on(service.generate(params));
    spinner.finish_and_clear();

    let report = result?;
    info!(run_id = %report.run_id, files = report.file_count(), "Generation finished");

    show_report(&report, &output)
}

// ── Choice collection ─────────────────────────────────────────────────────────

/// `--dir` (default: current directory) as an absolute path.
fn resolve_target(dir: Option<&Path>) -> CliResult<PathBuf> {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    std::path::absolute(dir).map_err(|e| CliError::IoError {
        message: format!("Cannot resolve target directory '{}'", dir.display()),
        source: e,
    })
}

fn collect_choices(
    args: &GenerateArgs,
    config: &AppConfig,
    target_directory: PathBuf,
    interactive: bool,
) -> CliResult<RawChoices> {
    let defaults = &config.defaults;

    // An empty name is left for the resolver to reject.
    let entity_name = match &args.entity {
        Some(name) => name.clone(),
        None if interactive => prompt::entity_name()?,
        None => String::new(),
    };

    let id_type = match &args.id_type {
        Some(id_type) => id_type.clone(),
        None if interactive => prompt::id_type(&defaults.id_type)?,
        None => defaults.id_type.clone(),
    };

    let method_names = match &args.methods {
        Some(names) => names.clone(),
        None if interactive => {
            prompt::methods(&normalize_entity_name(entity_name.trim()), &defaults.methods)?
        }
        None => defaults.methods.clone(),
    };
    let methods = MethodSelection::from_catalog(&method_names).map_err(StrataError::from)?;

    let use_result_proc = match args.result_wrapper {
        Some(flag) => flag,
        None if interactive && defaults.ask_result_wrapper => prompt::confirm(
            "Wrap controller responses in ResultProc?",
            defaults.result_wrapper,
        )?,
        None => defaults.result_wrapper,
    };

    // Utility classes only matter with the wrapper; without it the
    // configured default is kept.
    let use_util_class = match args.shared_utils {
        Some(shared) => !shared,
        None if interactive && use_result_proc => prompt::confirm(
            "Generate local utility classes (ResultProc, Util)?",
            defaults.util_classes,
        )?,
        None => defaults.util_classes,
    };

    Ok(RawChoices {
        entity_name,
        target_directory,
        id_type,
        methods,
        use_util_class,
        use_result_proc,
    })
}

fn build_renderer(args: &GenerateArgs, config: &AppConfig) -> CliResult<JavaRenderer> {
    let mut renderer = JavaRenderer::new();

    if let Some(package) = args.base_package.as_ref().or(config.java.base_package.as_ref()) {
        renderer = renderer.with_base_package(package)?;
    }
    if let Some(package) = &config.java.shared_utils_package {
        renderer = renderer.with_shared_utils_package(package)?;
    }

    Ok(renderer)
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn show_summary(
    params: &ResolvedParameters,
    plan: &GenerationPlan,
    output: &OutputManager,
) -> CliResult<()> {
    let methods: Vec<String> = params
        .methods()
        .checked()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    output.header(&format!("Generating '{}'", params.entity_name()))?;
    output.print(&format!(
        "  Target:          {}",
        params.target_directory().display()
    ))?;
    output.print(&format!("  Identifier type: {}", params.id_type()))?;
    output.print(&format!(
        "  Methods:         {}",
        if methods.is_empty() {
            "(none)".to_string()
        } else {
            methods.join(", ")
        }
    ))?;
    output.print(&format!(
        "  Result wrapper:  {}",
        yes_no(params.use_result_proc())
    ))?;
    output.print(&format!(
        "  Utility classes: {}",
        yes_no(params.use_util_class())
    ))?;
    output.print(&format!(
        "  Files:           {}",
        plan.artifacts.task_count()
    ))?;
    output.print("")?;
    Ok(())
}

#[derive(Serialize)]
struct DryRun<'a> {
    parameters: &'a ResolvedParameters,
    plan: &'a GenerationPlan,
}

fn show_plan(
    params: &ResolvedParameters,
    plan: &GenerationPlan,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(&DryRun {
            parameters: params,
            plan,
        });
    }

    let root = params.target_directory();
    output.info("Dry run: nothing will be written")?;
    output.print("Directories:")?;
    for dir in plan.directories.iter() {
        output.print(&format!("  {}", root.join(dir.as_path()).display()))?;
    }
    output.print("Files:")?;
    for task in plan.artifacts.tasks() {
        output.print(&format!(
            "  {}  ({:?})",
            root.join(task.relative_path()).display(),
            task.mode()
        ))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    for path in &report.written {
        output.print(&format!("  + {}", relative(path, &report.target_directory)))?;
    }
    for path in &report.skipped {
        output.warning(&format!(
            "kept existing {}",
            relative(path, &report.target_directory)
        ))?;
    }

    output.success(&format!(
        "Generated {} file(s) for '{}' in {}",
        report.written.len(),
        report.entity,
        report.target_directory.display()
    ))?;
    Ok(())
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// ── tests ─────────────────────────────────────────────────────────────────────
