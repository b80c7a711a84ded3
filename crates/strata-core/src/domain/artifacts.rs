//! Artifact selection: which source files a run produces.
//!
//! The core batch is fixed. The support batch is chosen by [`SupportBundle`],
//! a closed variant over the three meaningful flag combinations; the fourth
//! combination (no result wrapper, no util classes) has no variant of its own
//! and resolves to [`SupportBundle::NoResultWrapper`].

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    layout::OutputDirectory, methods::MethodDescriptor, parameters::ResolvedParameters,
};

// ── Artifact kinds ───────────────────────────────────────────────────────────

/// Every kind of source file the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    // core
    Entity,
    ServiceInterface,
    ServiceImpl,
    Controller,
    Repository,
    // support
    SearchPagination,
    ResultWrapper,
    GenericUtil,
    ControllerExceptionHandler,
    ErrorMessageModel,
    UnsavedEntityException,
    ErrorProcessingException,
    EntityNotFoundException,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::ServiceInterface => "service-interface",
            Self::ServiceImpl => "service-impl",
            Self::Controller => "controller",
            Self::Repository => "repository",
            Self::SearchPagination => "search-pagination",
            Self::ResultWrapper => "result-wrapper",
            Self::GenericUtil => "generic-util",
            Self::ControllerExceptionHandler => "controller-exception-handler",
            Self::ErrorMessageModel => "error-message-model",
            Self::UnsavedEntityException => "unsaved-entity-exception",
            Self::ErrorProcessingException => "error-processing-exception",
            Self::EntityNotFoundException => "entity-not-found-exception",
        }
    }

    /// Directory the artifact is written into.
    pub const fn directory(&self) -> OutputDirectory {
        match self {
            Self::Entity => OutputDirectory::Entities,
            Self::ServiceInterface => OutputDirectory::Services,
            Self::ServiceImpl => OutputDirectory::ServicesImpl,
            Self::Controller => OutputDirectory::Controllers,
            Self::Repository => OutputDirectory::Repositories,
            Self::SearchPagination | Self::ResultWrapper | Self::GenericUtil => {
                OutputDirectory::Utils
            }
            Self::ControllerExceptionHandler => OutputDirectory::Configurations,
            Self::ErrorMessageModel => OutputDirectory::Models,
            Self::UnsavedEntityException
            | Self::ErrorProcessingException
            | Self::EntityNotFoundException => OutputDirectory::Exceptions,
        }
    }

    /// Java class name of the artifact for `entity`.
    pub fn class_name(&self, entity: &str) -> String {
        match self {
            Self::Entity => entity.to_string(),
            Self::ServiceInterface => format!("I{entity}Service"),
            Self::ServiceImpl => format!("{entity}ServiceImpl"),
            Self::Controller => format!("{entity}Controller"),
            Self::Repository => format!("{entity}Repository"),
            Self::SearchPagination => "SearchPagination".into(),
            Self::ResultWrapper => "ResultProc".into(),
            Self::GenericUtil => "Util".into(),
            Self::ControllerExceptionHandler => "ControllerExceptionHandler".into(),
            Self::ErrorMessageModel => "ErrorMessage".into(),
            Self::UnsavedEntityException => "UnsavedEntityException".into(),
            Self::ErrorProcessingException => "ErrorProcessingException".into(),
            Self::EntityNotFoundException => "EntityNotFoundException".into(),
        }
    }

    /// Output path relative to the target directory.
    pub fn relative_path(&self, entity: &str) -> PathBuf {
        self.directory()
            .as_path()
            .join(format!("{}.java", self.class_name(entity)))
    }

    /// Whether the generated body depends on the checked methods.
    pub const fn takes_methods(&self) -> bool {
        matches!(
            self,
            Self::Controller | Self::ServiceInterface | Self::ServiceImpl
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tasks ────────────────────────────────────────────────────────────────────

/// How a task treats an already existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Write unconditionally.
    Overwrite,
    /// Leave an existing file alone.
    CreateIfAbsent,
}

/// One unit of generation work: produce exactly one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationTask {
    kind: ArtifactKind,
    mode: WriteMode,
    path: PathBuf,
    /// Checked methods, in selection order. Empty for kinds that ignore them.
    methods: Vec<MethodDescriptor>,
}

impl GenerationTask {
    fn new(kind: ArtifactKind, mode: WriteMode, params: &ResolvedParameters) -> Self {
        let methods = if kind.takes_methods() {
            params.methods().checked()
        } else {
            Vec::new()
        };
        Self {
            kind,
            mode,
            path: kind.relative_path(params.entity_name()),
            methods,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Output path relative to the target directory.
    pub fn relative_path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name() == name)
    }
}

// ── Support bundle ───────────────────────────────────────────────────────────

/// The cross-cutting artifacts generated next to the core five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportBundle {
    /// Errors surface through exceptions and a controller advice.
    NoResultWrapper,
    /// Results are wrapped; wrapper and helpers are generated locally.
    ResultWrapperWithUtils,
    /// Results are wrapped; helpers come from an external shared package.
    ResultWrapperNoUtils,
}

impl SupportBundle {
    pub fn from_flags(use_result_proc: bool, use_util_class: bool) -> Self {
        match (use_result_proc, use_util_class) {
            (false, _) => Self::NoResultWrapper,
            (true, true) => Self::ResultWrapperWithUtils,
            (true, false) => Self::ResultWrapperNoUtils,
        }
    }

    pub fn for_parameters(params: &ResolvedParameters) -> Self {
        Self::from_flags(params.use_result_proc(), params.use_util_class())
    }

    /// Artifact kinds of the bundle with their write modes.
    pub const fn artifacts(&self) -> &'static [(ArtifactKind, WriteMode)] {
        use ArtifactKind::*;
        use WriteMode::*;
        match self {
            Self::NoResultWrapper => &[
                (SearchPagination, CreateIfAbsent),
                (ControllerExceptionHandler, Overwrite),
                (ErrorMessageModel, Overwrite),
                (UnsavedEntityException, Overwrite),
                (ErrorProcessingException, Overwrite),
                (EntityNotFoundException, Overwrite),
            ],
            Self::ResultWrapperWithUtils => &[
                (ResultWrapper, CreateIfAbsent),
                (SearchPagination, CreateIfAbsent),
                (GenericUtil, CreateIfAbsent),
            ],
            Self::ResultWrapperNoUtils => &[],
        }
    }
}

/// Core artifacts, produced on every run.
pub const CORE_ARTIFACTS: [ArtifactKind; 5] = [
    ArtifactKind::Entity,
    ArtifactKind::ServiceInterface,
    ArtifactKind::ServiceImpl,
    ArtifactKind::Controller,
    ArtifactKind::Repository,
];

// ── Plan ─────────────────────────────────────────────────────────────────────

/// Both batches of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    bundle: SupportBundle,
    core: Vec<GenerationTask>,
    support: Vec<GenerationTask>,
}

impl ArtifactPlan {
    pub fn for_parameters(params: &ResolvedParameters) -> Self {
        let bundle = SupportBundle::for_parameters(params);

        let core = CORE_ARTIFACTS
            .iter()
            .map(|kind| GenerationTask::new(*kind, WriteMode::Overwrite, params))
            .collect();

        let support = bundle
            .artifacts()
            .iter()
            .map(|(kind, mode)| GenerationTask::new(*kind, *mode, params))
            .collect();

        Self {
            bundle,
            core,
            support,
        }
    }

    pub fn bundle(&self) -> SupportBundle {
        self.bundle
    }

    pub fn core(&self) -> &[GenerationTask] {
        &self.core
    }

    pub fn support(&self) -> &[GenerationTask] {
        &self.support
    }

    pub fn tasks(&self) -> impl Iterator<Item = &GenerationTask> {
        self.core.iter().chain(self.support.iter())
    }

    pub fn task_count(&self) -> usize {
        self.core.len() + self.support.len()
    }

    /// Consume the plan into its two batches.
    pub fn into_batches(self) -> (Vec<GenerationTask>, Vec<GenerationTask>) {
        (self.core, self.support)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::{
        layout::DirectoryPlan,
        methods::{MethodDescriptor, MethodSelection},
        parameters::RawChoices,
    };

    fn params_with(
        use_result_proc: bool,
        use_util_class: bool,
        methods: MethodSelection,
    ) -> ResolvedParameters {
        ResolvedParameters::resolve(RawChoices {
            entity_name: "Order".into(),
            target_directory: "/out".into(),
            id_type: "long".into(),
            methods,
            use_util_class,
            use_result_proc,
        })
        .unwrap()
    }

    fn params(use_result_proc: bool, use_util_class: bool) -> ResolvedParameters {
        params_with(use_result_proc, use_util_class, MethodSelection::catalog())
    }

    fn support_kinds(plan: &ArtifactPlan) -> Vec<ArtifactKind> {
        plan.support().iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn core_batch_is_always_five() {
        for (rp, uc) in [(false, false), (false, true), (true, false), (true, true)] {
            let plan = ArtifactPlan::for_parameters(&params(rp, uc));
            let kinds: Vec<_> = plan.core().iter().map(|t| t.kind()).collect();
            assert_eq!(kinds, CORE_ARTIFACTS.to_vec());
            assert!(plan.core().iter().all(|t| t.mode() == WriteMode::Overwrite));
        }
    }

    #[test]
    fn task_totals_per_flag_combination() {
        assert_eq!(ArtifactPlan::for_parameters(&params(false, false)).task_count(), 11);
        assert_eq!(ArtifactPlan::for_parameters(&params(false, true)).task_count(), 11);
        assert_eq!(ArtifactPlan::for_parameters(&params(true, true)).task_count(), 8);
        assert_eq!(ArtifactPlan::for_parameters(&params(true, false)).task_count(), 5);
    }

    #[test]
    fn no_result_wrapper_bundle() {
        use ArtifactKind::*;
        let plan = ArtifactPlan::for_parameters(&params(false, true));
        assert_eq!(plan.bundle(), SupportBundle::NoResultWrapper);
        assert_eq!(
            support_kinds(&plan),
            [
                SearchPagination,
                ControllerExceptionHandler,
                ErrorMessageModel,
                UnsavedEntityException,
                ErrorProcessingException,
                EntityNotFoundException
            ]
        );
        assert_eq!(plan.support()[0].mode(), WriteMode::CreateIfAbsent);
        assert!(plan.support()[1..].iter().all(|t| t.mode() == WriteMode::Overwrite));
    }

    #[test]
    fn no_result_wrapper_ignores_util_flag() {
        let with = ArtifactPlan::for_parameters(&params(false, true));
        let without = ArtifactPlan::for_parameters(&params(false, false));
        assert_eq!(with.bundle(), without.bundle());
        assert_eq!(support_kinds(&with), support_kinds(&without));
    }

    #[test]
    fn result_wrapper_with_utils_bundle() {
        use ArtifactKind::*;
        let plan = ArtifactPlan::for_parameters(&params(true, true));
        assert_eq!(plan.bundle(), SupportBundle::ResultWrapperWithUtils);
        assert_eq!(support_kinds(&plan), [ResultWrapper, SearchPagination, GenericUtil]);
        assert!(plan.support().iter().all(|t| t.mode() == WriteMode::CreateIfAbsent));
    }

    #[test]
    fn result_wrapper_without_utils_has_no_support() {
        let plan = ArtifactPlan::for_parameters(&params(true, false));
        assert_eq!(plan.bundle(), SupportBundle::ResultWrapperNoUtils);
        assert!(plan.support().is_empty());
    }

    #[test]
    fn only_checked_methods_reach_method_aware_tasks() {
        let methods = MethodSelection::new(vec![
            MethodDescriptor::new("findAll", "", true),
            MethodDescriptor::new("findById", "", true),
            MethodDescriptor::new("save", "", false),
        ])
        .unwrap();
        let plan = ArtifactPlan::for_parameters(&params_with(false, true, methods));

        for task in plan.tasks() {
            let names: Vec<_> = task.methods().iter().map(|m| m.name()).collect();
            if task.kind().takes_methods() {
                assert_eq!(names, ["findAll", "findById"], "{}", task.kind());
            } else {
                assert!(names.is_empty(), "{}", task.kind());
            }
        }
    }

    #[test]
    fn output_paths_never_collide() {
        for (rp, uc) in [(false, false), (false, true), (true, false), (true, true)] {
            let plan = ArtifactPlan::for_parameters(&params(rp, uc));
            let paths: HashSet<_> = plan.tasks().map(|t| t.relative_path().to_path_buf()).collect();
            assert_eq!(paths.len(), plan.task_count());
        }
    }

    #[test]
    fn every_task_directory_is_planned_when_utils_are_used() {
        for (rp, uc) in [(false, true), (true, false), (true, true)] {
            let p = params(rp, uc);
            let dirs = DirectoryPlan::for_parameters(&p);
            let plan = ArtifactPlan::for_parameters(&p);
            assert!(plan.tasks().all(|t| dirs.contains(t.kind().directory())));
        }
    }

    #[test]
    fn paths_follow_entity_name() {
        let plan = ArtifactPlan::for_parameters(&params(false, true));
        let paths: Vec<_> = plan.core().iter().map(|t| t.relative_path().to_path_buf()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("entities/Order.java"),
                PathBuf::from("services/IOrderService.java"),
                PathBuf::from("services/impl/OrderServiceImpl.java"),
                PathBuf::from("controllers/OrderController.java"),
                PathBuf::from("repositories/OrderRepository.java"),
            ]
        );
    }
}
