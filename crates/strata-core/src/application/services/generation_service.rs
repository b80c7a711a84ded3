//! Generation Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Verify the target directory
//! 2. Plan directories and artifacts
//! 3. Ensure every planned directory exists
//! 4. Run the core batch concurrently, then the support batch
//! 5. Aggregate the outcome into one report or one error

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, TaskFailure,
        ports::{ArtifactRenderer, Filesystem, WriteOutcome},
    },
    domain::{
        ArtifactPlan, DirectoryPlan, GenerationTask, ResolvedParameters, SupportBundle, WriteMode,
    },
    error::StrataResult,
};

/// Everything a run would do, computed without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub directories: DirectoryPlan,
    pub artifacts: ArtifactPlan,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub entity: String,
    pub target_directory: PathBuf,
    pub bundle: SupportBundle,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Absolute paths of the ensured directories.
    pub directories: Vec<PathBuf>,
    /// Absolute paths of files written by this run, sorted.
    pub written: Vec<PathBuf>,
    /// Create-if-absent targets that already existed, sorted.
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

#[derive(Debug, Default)]
struct BatchOutcome {
    written: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
    failures: Vec<TaskFailure>,
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Arc<dyn Filesystem>,
    renderer: Arc<dyn ArtifactRenderer>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(filesystem: Arc<dyn Filesystem>, renderer: Arc<dyn ArtifactRenderer>) -> Self {
        Self {
            filesystem,
            renderer,
        }
    }

    /// Directory and artifact plans for `params`.
    pub fn plan(params: &ResolvedParameters) -> GenerationPlan {
        GenerationPlan {
            directories: DirectoryPlan::for_parameters(params),
            artifacts: ArtifactPlan::for_parameters(params),
        }
    }

    /// Run one generation.
    ///
    /// Directory failures abort before any task starts. Task failures are
    /// collected per batch; a failed core batch prevents the support batch
    /// from starting. Nothing already written is removed.
    #[instrument(
        skip_all,
        fields(
            entity = %params.entity_name(),
            target = %params.target_directory().display()
        )
    )]
    pub async fn generate(&self, params: ResolvedParameters) -> StrataResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let root = params.target_directory().to_path_buf();

        info!(%run_id, "Generation started");

        if !self.filesystem.is_dir(&root) {
            return Err(ApplicationError::FilesystemError {
                path: root,
                reason: "target directory does not exist or is not a directory".into(),
            }
            .into());
        }

        let plan = Self::plan(&params);
        let bundle = plan.artifacts.bundle();
        debug!(
            directories = plan.directories.len(),
            tasks = plan.artifacts.task_count(),
            ?bundle,
            "Plan computed"
        );

        let directories = self.ensure_directories(&root, &plan.directories)?;

        let total = plan.artifacts.task_count();
        let (core, support) = plan.artifacts.into_batches();
        let params = Arc::new(params);

        let mut done = self.run_batch("core", core, &params).await;
        if done.failures.is_empty() {
            let support = self.run_batch("support", support, &params).await;
            done.written.extend(support.written);
            done.skipped.extend(support.skipped);
            done.failures.extend(support.failures);
        } else {
            warn!(
                failed = done.failures.len(),
                "Core batch failed, support batch not started"
            );
        }

        if !done.failures.is_empty() {
            return Err(ApplicationError::GenerationFailed {
                failed: done.failures.len(),
                total,
                failures: done.failures,
            }
            .into());
        }

        done.written.sort();
        done.skipped.sort();

        info!(
            written = done.written.len(),
            skipped = done.skipped.len(),
            "Generation completed successfully"
        );

        Ok(GenerationReport {
            run_id,
            entity: params.entity_name().to_string(),
            target_directory: root,
            bundle,
            started_at,
            finished_at: Utc::now(),
            directories,
            written: done.written,
            skipped: done.skipped,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_directories(&self, root: &Path, plan: &DirectoryPlan) -> StrataResult<Vec<PathBuf>> {
        plan.iter()
            .map(|dir| {
                let path = root.join(dir.as_path());
                self.filesystem.create_dir_all(&path)?;
                debug!(path = %path.display(), "Directory ensured");
                Ok(path)
            })
            .collect()
    }

    /// Run every task of a batch concurrently and wait for all of them.
    async fn run_batch(
        &self,
        batch: &'static str,
        tasks: Vec<GenerationTask>,
        params: &Arc<ResolvedParameters>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        if tasks.is_empty() {
            debug!(batch, "Empty batch");
            return outcome;
        }

        debug!(batch, tasks = tasks.len(), "Batch started");

        let mut set = JoinSet::new();
        for task in tasks {
            let filesystem = Arc::clone(&self.filesystem);
            let renderer = Arc::clone(&self.renderer);
            let params = Arc::clone(params);
            set.spawn_blocking(move || {
                execute_task(filesystem.as_ref(), renderer.as_ref(), &params, &task)
            });
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok((path, WriteOutcome::Written))) => outcome.written.push(path),
                Ok(Ok((path, WriteOutcome::Skipped))) => {
                    debug!(path = %path.display(), "Exists, left untouched");
                    outcome.skipped.push(path);
                }
                Ok(Err(failure)) => {
                    warn!(batch, %failure, "Artifact failed");
                    outcome.failures.push(failure);
                }
                Err(join_error) => {
                    warn!(batch, error = %join_error, "Artifact task aborted");
                    outcome.failures.push(TaskFailure {
                        artifact: None,
                        path: None,
                        reason: format!("generation task aborted: {join_error}"),
                    });
                }
            }
        }

        outcome
    }
}

/// Render and write one artifact.
fn execute_task(
    filesystem: &dyn Filesystem,
    renderer: &dyn ArtifactRenderer,
    params: &ResolvedParameters,
    task: &GenerationTask,
) -> Result<(PathBuf, WriteOutcome), TaskFailure> {
    let path = params.target_directory().join(task.relative_path());
    let fail = |e: crate::error::StrataError| TaskFailure {
        artifact: Some(task.kind()),
        path: Some(path.clone()),
        reason: e.to_string(),
    };

    let content = renderer.render(task, params).map_err(fail)?;

    // Planned directories exist already; this covers artifacts whose
    // directory the plan leaves out (utils without util classes).
    if let Some(parent) = path.parent() {
        filesystem.create_dir_all(parent).map_err(fail)?;
    }

    let written = match task.mode() {
        WriteMode::Overwrite => {
            filesystem.write_file(&path, &content).map_err(fail)?;
            WriteOutcome::Written
        }
        WriteMode::CreateIfAbsent => filesystem.write_new(&path, &content).map_err(fail)?,
    };

    debug!(artifact = %task.kind(), path = %path.display(), ?written, "Artifact done");
    Ok((path, written))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::application::ports::{MockArtifactRenderer, MockFilesystem};
    use crate::domain::{ArtifactKind, MethodSelection, RawChoices};
    use crate::error::StrataError;

    fn params(use_result_proc: bool, use_util_class: bool) -> ResolvedParameters {
        ResolvedParameters::resolve(RawChoices {
            entity_name: "order".into(),
            target_directory: PathBuf::from("/workspace"),
            id_type: "long".into(),
            methods: MethodSelection::from_catalog(&["findAll", "findById"]).unwrap(),
            use_util_class,
            use_result_proc,
        })
        .unwrap()
    }

    fn echo_renderer() -> MockArtifactRenderer {
        let mut renderer = MockArtifactRenderer::new();
        renderer
            .expect_render()
            .returning(|task, _| Ok(format!("// {}", task.kind())));
        renderer
    }

    fn io_failure(path: &Path) -> StrataError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn plan_matches_batches() {
        let plan = GenerationService::plan(&params(true, false));
        assert_eq!(plan.directories.len(), 5);
        assert_eq!(plan.artifacts.task_count(), 5);
    }

    #[test]
    fn plan_serializes_for_dry_run_output() {
        let plan = GenerationService::plan(&params(true, false));
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(
            json["directories"],
            serde_json::json!([
                "entities",
                "controllers",
                "repositories",
                "services",
                "services-impl"
            ])
        );
        assert_eq!(json["artifacts"]["bundle"], "result-wrapper-no-utils");
        assert_eq!(json["artifacts"]["core"][0]["kind"], "entity");
        assert_eq!(json["artifacts"]["core"][0]["mode"], "overwrite");
        assert!(json["artifacts"]["support"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_target_directory_fails_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut renderer = MockArtifactRenderer::new();
        renderer.expect_render().never();

        let service = GenerationService::new(Arc::new(fs), Arc::new(renderer));
        let err = service.generate(params(false, true)).await.unwrap_err();

        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[tokio::test]
    async fn directory_failure_aborts_before_tasks_start() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("repositories") {
                Err(io_failure(path))
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().never();
        fs.expect_write_new().never();

        let mut renderer = MockArtifactRenderer::new();
        renderer.expect_render().never();

        let service = GenerationService::new(Arc::new(fs), Arc::new(renderer));
        let err = service.generate(params(false, true)).await.unwrap_err();

        match err {
            StrataError::Application(ApplicationError::FilesystemError { path, .. }) => {
                assert_eq!(path, PathBuf::from("/workspace/repositories"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn write_failure_is_aggregated_and_support_batch_skipped() {
        let writes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&writes);

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            if path.ends_with("controllers/OrderController.java") {
                Err(io_failure(path))
            } else {
                Ok(())
            }
        });
        fs.expect_write_new().never();

        let service = GenerationService::new(Arc::new(fs), Arc::new(echo_renderer()));
        let err = service.generate(params(false, true)).await.unwrap_err();

        match err {
            StrataError::Application(ApplicationError::GenerationFailed {
                failed,
                total,
                failures,
            }) => {
                assert_eq!(failed, 1);
                assert_eq!(total, 11);
                assert_eq!(failures[0].artifact, Some(ArtifactKind::Controller));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Every core task ran to completion despite the failure.
        assert_eq!(writes.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn render_failure_is_reported_per_task() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut renderer = MockArtifactRenderer::new();
        renderer.expect_render().returning(|task, _| match task.kind() {
            ArtifactKind::Entity | ArtifactKind::Repository => {
                Err(ApplicationError::RenderingFailed {
                    reason: "boom".into(),
                }
                .into())
            }
            other => Ok(other.to_string()),
        });

        let service = GenerationService::new(Arc::new(fs), Arc::new(renderer));
        let err = service.generate(params(true, false)).await.unwrap_err();

        match err {
            StrataError::Application(ApplicationError::GenerationFailed { failed, .. }) => {
                assert_eq!(failed, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_run_reports_every_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(5).returning(|_, _| Ok(()));
        fs.expect_write_new().times(3).returning(|path, _| {
            if path.ends_with("utils/Util.java") {
                Ok(WriteOutcome::Skipped)
            } else {
                Ok(WriteOutcome::Written)
            }
        });

        let service = GenerationService::new(Arc::new(fs), Arc::new(echo_renderer()));
        let report = service.generate(params(true, true)).await.unwrap();

        assert_eq!(report.entity, "Order");
        assert_eq!(report.bundle, SupportBundle::ResultWrapperWithUtils);
        assert_eq!(report.directories.len(), 6);
        assert_eq!(report.written.len(), 7);
        assert_eq!(report.skipped, [PathBuf::from("/workspace/utils/Util.java")]);
        assert_eq!(report.file_count(), 8);
        assert!(report.finished_at >= report.started_at);
    }
}
