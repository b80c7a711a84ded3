//! Configuration resolution: raw user choices in, one immutable
//! [`ResolvedParameters`] record out.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::{error::DomainError, methods::MethodSelection};

// ── IdType ───────────────────────────────────────────────────────────────────

/// Identifier type of the generated entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdType {
    Int,
    Long,
    String,
    /// Any other Java type name supplied by the user.
    Other(String),
}

impl IdType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::String => "String",
            Self::Other(other) => other,
        }
    }

    /// Reference type usable as a generic argument (`JpaRepository<E, Long>`).
    pub fn boxed(&self) -> &str {
        match self {
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::String => "String",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = DomainError;

    /// Matches the Java spellings exactly; anything else is kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid(
                "identifier type",
                "must not be empty",
            ));
        }
        Ok(match s {
            "int" => Self::Int,
            "long" => Self::Long,
            "String" => Self::String,
            other => Self::Other(other.to_string()),
        })
    }
}

impl Serialize for IdType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ── Entity name ──────────────────────────────────────────────────────────────

/// Upper-case the first character, leave the rest untouched.
///
/// Idempotent: `normalize_entity_name(normalize_entity_name(x)) == normalize_entity_name(x)`.
pub fn normalize_entity_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Raw input ────────────────────────────────────────────────────────────────

/// Choices as collected by the caller, before validation.
#[derive(Debug, Clone)]
pub struct RawChoices {
    pub entity_name: String,
    pub target_directory: PathBuf,
    pub id_type: String,
    pub methods: MethodSelection,
    pub use_util_class: bool,
    pub use_result_proc: bool,
}

// ── Resolved parameters ──────────────────────────────────────────────────────

/// The sole record the generation engine operates on.
///
/// Constructed once per run via [`ResolvedParameters::resolve`]; fields are
/// private so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    entity_name: String,
    target_directory: PathBuf,
    id_type: IdType,
    methods: MethodSelection,
    use_util_class: bool,
    use_result_proc: bool,
}

impl ResolvedParameters {
    /// Validate and normalize raw choices.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidInput` when the entity name or identifier type is
    /// blank, or when the target directory is not absolute. Only the first
    /// character of the entity name is changed; nothing is trimmed.
    pub fn resolve(raw: RawChoices) -> Result<Self, DomainError> {
        if raw.entity_name.trim().is_empty() {
            return Err(DomainError::invalid("entity name", "must not be empty"));
        }

        let id_type: IdType = raw.id_type.parse()?;

        if !raw.target_directory.is_absolute() {
            return Err(DomainError::invalid(
                "target directory",
                format!("'{}' is not an absolute path", raw.target_directory.display()),
            ));
        }

        Ok(Self {
            entity_name: normalize_entity_name(&raw.entity_name),
            target_directory: raw.target_directory,
            id_type,
            methods: raw.methods,
            use_util_class: raw.use_util_class,
            use_result_proc: raw.use_result_proc,
        })
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    pub fn id_type(&self) -> &IdType {
        &self.id_type
    }

    pub fn methods(&self) -> &MethodSelection {
        &self.methods
    }

    pub fn use_util_class(&self) -> bool {
        self.use_util_class
    }

    pub fn use_result_proc(&self) -> bool {
        self.use_result_proc
    }

    /// Java package of the target directory, if it lives under a
    /// `src/main/java` (or `src/test/java`) source root.
    ///
    /// `/app/src/main/java/com/acme/shop` yields `com.acme.shop`.
    pub fn inferred_base_package(&self) -> Option<String> {
        let components: Vec<&str> = self
            .target_directory
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();

        let root = components
            .windows(3)
            .rposition(|w| w[0] == "src" && (w[1] == "main" || w[1] == "test") && w[2] == "java")?;

        let segments = &components[root + 3..];
        if segments.is_empty() {
            None
        } else {
            Some(segments.join("."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entity: &str, id: &str) -> RawChoices {
        RawChoices {
            entity_name: entity.into(),
            target_directory: PathBuf::from("/workspace/src/main/java/com/acme"),
            id_type: id.into(),
            methods: MethodSelection::catalog(),
            use_util_class: true,
            use_result_proc: false,
        }
    }

    #[test]
    fn first_character_is_upper_cased() {
        let params = ResolvedParameters::resolve(raw("order", "long")).unwrap();
        assert_eq!(params.entity_name(), "Order");
    }

    #[test]
    fn normalization_is_idempotent() {
        let params = ResolvedParameters::resolve(raw("Order", "long")).unwrap();
        assert_eq!(params.entity_name(), "Order");
        assert_eq!(normalize_entity_name("orderLine"), "OrderLine");
        assert_eq!(
            normalize_entity_name(&normalize_entity_name("orderLine")),
            "OrderLine"
        );
    }

    #[test]
    fn remainder_is_untouched() {
        let params = ResolvedParameters::resolve(raw("oRDER_item", "long")).unwrap();
        assert_eq!(params.entity_name(), "ORDER_item");
    }

    #[test]
    fn surrounding_whitespace_and_case_are_kept() {
        let params = ResolvedParameters::resolve(raw(" order", " LONG ")).unwrap();
        assert_eq!(params.entity_name(), " order");
        assert_eq!(params.id_type(), &IdType::Other(" LONG ".into()));
        assert_eq!("LONG".parse::<IdType>().unwrap(), IdType::Other("LONG".into()));
    }

    #[test]
    fn empty_entity_name_is_rejected() {
        for name in ["", "   ", "\t"] {
            let err = ResolvedParameters::resolve(raw(name, "long")).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidInput { field: "entity name", .. }),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn empty_id_type_is_rejected() {
        let err = ResolvedParameters::resolve(raw("Order", "  ")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidInput {
                field: "identifier type",
                ..
            }
        ));
    }

    #[test]
    fn relative_target_is_rejected() {
        let mut choices = raw("Order", "long");
        choices.target_directory = PathBuf::from("relative/dir");
        assert!(ResolvedParameters::resolve(choices).is_err());
    }

    #[test]
    fn id_type_parsing() {
        assert_eq!("int".parse::<IdType>().unwrap(), IdType::Int);
        assert_eq!("long".parse::<IdType>().unwrap(), IdType::Long);
        assert_eq!("String".parse::<IdType>().unwrap(), IdType::String);
        assert_eq!(
            "UUID".parse::<IdType>().unwrap(),
            IdType::Other("UUID".into())
        );
        assert_eq!(IdType::Int.boxed(), "Integer");
        assert_eq!(IdType::Long.boxed(), "Long");
        assert_eq!(IdType::Other("UUID".into()).boxed(), "UUID");
    }

    #[test]
    fn base_package_from_source_root() {
        let params = ResolvedParameters::resolve(raw("Order", "long")).unwrap();
        assert_eq!(params.inferred_base_package().as_deref(), Some("com.acme"));

        let mut choices = raw("Order", "long");
        choices.target_directory = PathBuf::from("/tmp/out");
        let params = ResolvedParameters::resolve(choices).unwrap();
        assert_eq!(params.inferred_base_package(), None);
    }
}
