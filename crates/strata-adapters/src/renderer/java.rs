//! Spring Boot / JPA renderer.

use std::collections::BTreeSet;

use strata_core::{
    application::{ApplicationError, ports::ArtifactRenderer},
    domain::{ArtifactKind, GenerationTask, OutputDirectory, RenderContext, ResolvedParameters},
    error::{StrataError, StrataResult},
};
use tracing::{debug, instrument};

use super::templates;

/// Renders every artifact kind as a Java source file.
///
/// The package of each file is `<base>.<directory>`, where `<base>` is the
/// configured base package or, failing that, the package inferred from the
/// target directory. Without either, files are written without a `package`
/// line and without project imports.
#[derive(Debug, Clone, Default)]
pub struct JavaRenderer {
    base_package: Option<String>,
    shared_utils_package: Option<String>,
}

impl JavaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the inferred base package. Blank values are ignored.
    pub fn with_base_package(mut self, package: impl AsRef<str>) -> StrataResult<Self> {
        self.base_package = validated_package("java.base_package", package.as_ref())?;
        Ok(self)
    }

    /// Package that provides `ResultProc` when no local utility classes are
    /// generated. Blank values are ignored.
    pub fn with_shared_utils_package(mut self, package: impl AsRef<str>) -> StrataResult<Self> {
        self.shared_utils_package =
            validated_package("java.shared_utils_package", package.as_ref())?;
        Ok(self)
    }

    fn base_package(&self, params: &ResolvedParameters) -> Option<String> {
        self.base_package
            .clone()
            .or_else(|| params.inferred_base_package())
    }
}

impl ArtifactRenderer for JavaRenderer {
    #[instrument(skip_all, fields(artifact = %task.kind()))]
    fn render(&self, task: &GenerationTask, params: &ResolvedParameters) -> StrataResult<String> {
        let base = self.base_package(params);
        let scope = Scope {
            base: base.as_deref(),
            shared_utils: self.shared_utils_package.as_deref(),
            task,
            params,
        };

        let context = RenderContext::new(params);
        let methods = scope.methods(&context)?;
        let context = context
            .with_variable("PACKAGE", scope.package_line())
            .with_variable("IMPORTS", scope.imports())
            .with_variable("METHODS", methods);

        let source = context.render(template_for(task.kind()));
        if let Some(start) = source.find("{{") {
            let rest = &source[start..];
            let end = rest.find("}}").map_or(rest.len(), |i| i + 2);
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unresolved placeholder {} in {}", &rest[..end], task.kind()),
            }
            .into());
        }

        debug!(bytes = source.len(), package = ?base, "Rendered");
        Ok(source)
    }
}

fn template_for(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Entity => templates::ENTITY,
        ArtifactKind::Repository => templates::REPOSITORY,
        ArtifactKind::ServiceInterface => templates::SERVICE_INTERFACE,
        ArtifactKind::ServiceImpl => templates::SERVICE_IMPL,
        ArtifactKind::Controller => templates::CONTROLLER,
        ArtifactKind::SearchPagination => templates::SEARCH_PAGINATION,
        ArtifactKind::ResultWrapper => templates::RESULT_WRAPPER,
        ArtifactKind::GenericUtil => templates::GENERIC_UTIL,
        ArtifactKind::ControllerExceptionHandler => templates::CONTROLLER_EXCEPTION_HANDLER,
        ArtifactKind::ErrorMessageModel => templates::ERROR_MESSAGE,
        ArtifactKind::UnsavedEntityException => templates::UNSAVED_ENTITY_EXCEPTION,
        ArtifactKind::ErrorProcessingException => templates::ERROR_PROCESSING_EXCEPTION,
        ArtifactKind::EntityNotFoundException => templates::ENTITY_NOT_FOUND_EXCEPTION,
    }
}

fn validated_package(key: &str, package: &str) -> StrataResult<Option<String>> {
    let package = package.trim();
    if package.is_empty() {
        return Ok(None);
    }

    let valid = package.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    });

    if valid {
        Ok(Some(package.to_string()))
    } else {
        Err(StrataError::Configuration {
            message: format!("{key} '{package}' is not a valid Java package name"),
        })
    }
}

/// Catalog methods with a Java rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JavaMethod {
    FindAll,
    FindById,
    Search,
    Save,
    Update,
    Delete,
}

impl JavaMethod {
    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "findAll" => Self::FindAll,
            "findById" => Self::FindById,
            "search" => Self::Search,
            "save" => Self::Save,
            "update" => Self::Update,
            "delete" => Self::Delete,
            _ => return None,
        })
    }
}

/// Per-render view of the task and its surroundings.
struct Scope<'a> {
    base: Option<&'a str>,
    shared_utils: Option<&'a str>,
    task: &'a GenerationTask,
    params: &'a ResolvedParameters,
}

impl Scope<'_> {
    fn wrapped(&self) -> bool {
        self.params.use_result_proc()
    }

    fn has(&self, method: &str) -> bool {
        self.task.has_method(method)
    }

    fn package_of(&self, dir: OutputDirectory) -> Option<String> {
        self.base.map(|base| format!("{base}.{}", dir.package_suffix()))
    }

    fn package_line(&self) -> String {
        self.package_of(self.task.kind().directory())
            .map(|package| format!("package {package};\n\n"))
            .unwrap_or_default()
    }

    fn project_class(&self, kind: ArtifactKind) -> Option<String> {
        let package = self.package_of(kind.directory())?;
        Some(format!(
            "{package}.{}",
            kind.class_name(self.params.entity_name())
        ))
    }

    /// `ResultProc` lives in the local utils package unless only shared
    /// utilities are in use.
    fn result_wrapper_class(&self) -> Option<String> {
        match self.shared_utils {
            Some(shared) if !self.params.use_util_class() => Some(format!("{shared}.ResultProc")),
            _ => self.project_class(ArtifactKind::ResultWrapper),
        }
    }

    fn imports(&self) -> String {
        let mut project: Vec<Option<String>> = Vec::new();
        let mut library: BTreeSet<&'static str> = BTreeSet::new();

        let wrapped = self.wrapped();
        let paginated = self.has("search") && !wrapped;
        let throws_not_found = self.has("findById") || self.has("update");

        match self.task.kind() {
            ArtifactKind::Entity => library.extend([
                "jakarta.persistence.Entity",
                "jakarta.persistence.GeneratedValue",
                "jakarta.persistence.GenerationType",
                "jakarta.persistence.Id",
                "jakarta.persistence.Table",
            ]),
            ArtifactKind::Repository => {
                project.push(self.project_class(ArtifactKind::Entity));
                library.extend([
                    "org.springframework.data.jpa.repository.JpaRepository",
                    "org.springframework.stereotype.Repository",
                ]);
            }
            ArtifactKind::ServiceInterface => {
                project.push(self.project_class(ArtifactKind::Entity));
                if paginated {
                    project.push(self.project_class(ArtifactKind::SearchPagination));
                }
                self.collection_imports(&mut library);
            }
            ArtifactKind::ServiceImpl => {
                project.push(self.project_class(ArtifactKind::Entity));
                if throws_not_found && !wrapped {
                    project.push(self.project_class(ArtifactKind::EntityNotFoundException));
                }
                project.push(self.project_class(ArtifactKind::Repository));
                project.push(self.project_class(ArtifactKind::ServiceInterface));
                if paginated {
                    project.push(self.project_class(ArtifactKind::SearchPagination));
                }
                if throws_not_found && wrapped {
                    library.insert("java.util.NoSuchElementException");
                }
                library.insert("org.springframework.stereotype.Service");
                self.collection_imports(&mut library);
            }
            ArtifactKind::Controller => {
                project.push(self.project_class(ArtifactKind::Entity));
                project.push(self.project_class(ArtifactKind::ServiceInterface));
                if wrapped {
                    project.push(self.result_wrapper_class());
                } else {
                    library.insert("org.springframework.http.ResponseEntity");
                    if self.has("save") {
                        library.insert("org.springframework.http.HttpStatus");
                    }
                }
                if paginated {
                    project.push(self.project_class(ArtifactKind::SearchPagination));
                }
                library.extend([
                    "org.springframework.web.bind.annotation.RequestMapping",
                    "org.springframework.web.bind.annotation.RestController",
                ]);
                self.endpoint_imports(&mut library);
                self.collection_imports(&mut library);
            }
            ArtifactKind::SearchPagination => library.extend([
                "org.springframework.data.domain.PageRequest",
                "org.springframework.data.domain.Pageable",
                "org.springframework.data.domain.Sort",
            ]),
            ArtifactKind::ControllerExceptionHandler => {
                project.extend([
                    self.project_class(ArtifactKind::EntityNotFoundException),
                    self.project_class(ArtifactKind::ErrorProcessingException),
                    self.project_class(ArtifactKind::UnsavedEntityException),
                    self.project_class(ArtifactKind::ErrorMessageModel),
                ]);
                library.extend([
                    "org.springframework.http.HttpStatus",
                    "org.springframework.http.ResponseEntity",
                    "org.springframework.web.bind.annotation.ExceptionHandler",
                    "org.springframework.web.bind.annotation.RestControllerAdvice",
                ]);
            }
            ArtifactKind::ErrorMessageModel => {
                library.insert("java.time.LocalDateTime");
            }
            ArtifactKind::ResultWrapper
            | ArtifactKind::GenericUtil
            | ArtifactKind::UnsavedEntityException
            | ArtifactKind::ErrorProcessingException
            | ArtifactKind::EntityNotFoundException => {}
        }

        let mut out = String::new();
        push_import_group(&mut out, project.iter().flatten().map(String::as_str));
        push_import_group(&mut out, library.into_iter());
        out
    }

    fn collection_imports(&self, library: &mut BTreeSet<&'static str>) {
        if self.has("findAll") {
            library.insert("java.util.List");
        }
        if self.has("search") {
            library.insert("org.springframework.data.domain.Page");
            if self.wrapped() {
                library.insert("org.springframework.data.domain.Pageable");
            }
        }
    }

    fn endpoint_imports(&self, library: &mut BTreeSet<&'static str>) {
        let wrapped = self.wrapped();
        for method in self.task.methods() {
            let annotations: &[&'static str] = match JavaMethod::parse(method.name()) {
                Some(JavaMethod::FindAll) => &["org.springframework.web.bind.annotation.GetMapping"],
                Some(JavaMethod::FindById) => &[
                    "org.springframework.web.bind.annotation.GetMapping",
                    "org.springframework.web.bind.annotation.PathVariable",
                ],
                Some(JavaMethod::Search) if wrapped => {
                    &["org.springframework.web.bind.annotation.GetMapping"]
                }
                Some(JavaMethod::Search) => &[
                    "org.springframework.web.bind.annotation.PostMapping",
                    "org.springframework.web.bind.annotation.RequestBody",
                ],
                Some(JavaMethod::Save) => &[
                    "org.springframework.web.bind.annotation.PostMapping",
                    "org.springframework.web.bind.annotation.RequestBody",
                ],
                Some(JavaMethod::Update) => &[
                    "org.springframework.web.bind.annotation.PathVariable",
                    "org.springframework.web.bind.annotation.PutMapping",
                    "org.springframework.web.bind.annotation.RequestBody",
                ],
                Some(JavaMethod::Delete) => &[
                    "org.springframework.web.bind.annotation.DeleteMapping",
                    "org.springframework.web.bind.annotation.PathVariable",
                ],
                None => &[],
            };
            library.extend(annotations.iter().copied());
        }
    }

    /// Rendered bodies of the checked methods, in selection order.
    fn methods(&self, context: &RenderContext) -> StrataResult<String> {
        let kind = self.task.kind();
        if !kind.takes_methods() {
            return Ok(String::new());
        }

        let wrapped = self.wrapped();
        let entity = self.params.entity_name();
        let not_found = if wrapped {
            format!("new NoSuchElementException(\"{entity} \" + id + \" not found\")")
        } else {
            format!("new EntityNotFoundException(\"{entity}\", id)")
        };

        let mut out = String::new();
        for method in self.task.methods() {
            let java = JavaMethod::parse(method.name()).ok_or_else(|| {
                StrataError::from(ApplicationError::RenderingFailed {
                    reason: format!("no Java rendering for method '{}'", method.name()),
                })
            })?;

            let fragment = fragment(kind, java, wrapped);
            let context = context
                .clone()
                .with_variable("DOC", method.describe(entity))
                .with_variable("NOT_FOUND", not_found.as_str());
            out.push_str(&context.render(fragment));
        }
        Ok(out)
    }
}

/// One `import` line per class, the group followed by a blank line.
fn push_import_group<'a>(out: &mut String, classes: impl Iterator<Item = &'a str>) {
    let before = out.len();
    for class in classes {
        out.push_str("import ");
        out.push_str(class);
        out.push_str(";\n");
    }
    if out.len() > before {
        out.push('\n');
    }
}

fn fragment(kind: ArtifactKind, method: JavaMethod, wrapped: bool) -> &'static str {
    use JavaMethod::*;
    use templates::{controller, interface, service_impl, wrapped_controller};

    match (kind, method) {
        (ArtifactKind::ServiceInterface, FindAll) => interface::FIND_ALL,
        (ArtifactKind::ServiceInterface, FindById) => interface::FIND_BY_ID,
        (ArtifactKind::ServiceInterface, Search) if wrapped => interface::SEARCH_PAGEABLE,
        (ArtifactKind::ServiceInterface, Search) => interface::SEARCH_PAGINATED,
        (ArtifactKind::ServiceInterface, Save) => interface::SAVE,
        (ArtifactKind::ServiceInterface, Update) => interface::UPDATE,
        (ArtifactKind::ServiceInterface, Delete) => interface::DELETE,

        (ArtifactKind::ServiceImpl, FindAll) => service_impl::FIND_ALL,
        (ArtifactKind::ServiceImpl, FindById) => service_impl::FIND_BY_ID,
        (ArtifactKind::ServiceImpl, Search) if wrapped => service_impl::SEARCH_PAGEABLE,
        (ArtifactKind::ServiceImpl, Search) => service_impl::SEARCH_PAGINATED,
        (ArtifactKind::ServiceImpl, Save) => service_impl::SAVE,
        (ArtifactKind::ServiceImpl, Update) => service_impl::UPDATE,
        (ArtifactKind::ServiceImpl, Delete) => service_impl::DELETE,

        (_, FindAll) if wrapped => wrapped_controller::FIND_ALL,
        (_, FindById) if wrapped => wrapped_controller::FIND_BY_ID,
        (_, Search) if wrapped => wrapped_controller::SEARCH,
        (_, Save) if wrapped => wrapped_controller::SAVE,
        (_, Update) if wrapped => wrapped_controller::UPDATE,
        (_, Delete) if wrapped => wrapped_controller::DELETE,

        (_, FindAll) => controller::FIND_ALL,
        (_, FindById) => controller::FIND_BY_ID,
        (_, Search) => controller::SEARCH,
        (_, Save) => controller::SAVE,
        (_, Update) => controller::UPDATE,
        (_, Delete) => controller::DELETE,
    }
}
