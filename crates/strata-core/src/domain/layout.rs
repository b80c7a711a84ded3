//! Directory planning: which output directories must exist before any
//! artifact is written.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::parameters::ResolvedParameters;

/// A directory under the target directory that generation may write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputDirectory {
    Entities,
    Controllers,
    Repositories,
    Services,
    ServicesImpl,
    Utils,
    Models,
    Configurations,
    Exceptions,
}

impl OutputDirectory {
    pub const ALL: [Self; 9] = [
        Self::Entities,
        Self::Controllers,
        Self::Repositories,
        Self::Services,
        Self::ServicesImpl,
        Self::Utils,
        Self::Models,
        Self::Configurations,
        Self::Exceptions,
    ];

    /// Path relative to the target directory, `/`-separated.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Controllers => "controllers",
            Self::Repositories => "repositories",
            Self::Services => "services",
            Self::ServicesImpl => "services/impl",
            Self::Utils => "utils",
            Self::Models => "models",
            Self::Configurations => "configurations",
            Self::Exceptions => "exceptions",
        }
    }

    pub fn as_path(&self) -> &'static Path {
        Path::new(self.as_str())
    }

    /// Java sub-package for sources placed in this directory.
    pub fn package_suffix(&self) -> &'static str {
        match self {
            Self::ServicesImpl => "services.impl",
            other => other.as_str(),
        }
    }

    /// Decision table row: whether this directory is required for `params`.
    pub fn is_required(&self, params: &ResolvedParameters) -> bool {
        match self {
            Self::Entities
            | Self::Controllers
            | Self::Repositories
            | Self::Services
            | Self::ServicesImpl => true,
            Self::Utils => params.use_util_class(),
            Self::Models | Self::Configurations | Self::Exceptions => !params.use_result_proc(),
        }
    }
}

impl fmt::Display for OutputDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of directories a run must ensure.
///
/// No directory depends on another existing first; iteration order is only
/// for stable display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryPlan {
    directories: BTreeSet<OutputDirectory>,
}

impl DirectoryPlan {
    pub fn for_parameters(params: &ResolvedParameters) -> Self {
        Self {
            directories: OutputDirectory::ALL
                .into_iter()
                .filter(|dir| dir.is_required(params))
                .collect(),
        }
    }

    pub fn contains(&self, dir: OutputDirectory) -> bool {
        self.directories.contains(&dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = OutputDirectory> + '_ {
        self.directories.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}
