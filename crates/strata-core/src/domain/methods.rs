//! Selectable CRUD operations.
//!
//! A [`MethodSelection`] is built fresh for every generation run from the
//! user's current choice. Nothing here is global or mutable after
//! construction, so one run can never observe the checkboxes of another.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Placeholder replaced by the entity name in method descriptions.
pub const ENTITY_PLACEHOLDER: &str = "__ENTITY__";

/// One operation the generated controller and service may expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    name: String,
    description: String,
    checked: bool,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into().trim().to_string(),
            description: description.into(),
            checked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw description template, may contain [`ENTITY_PLACEHOLDER`].
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description with the placeholder replaced by `entity`.
    pub fn describe(&self, entity: &str) -> String {
        self.description.replace(ENTITY_PLACEHOLDER, entity)
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Built-in operations, in the order they are offered to the user.
const CATALOG: &[(&str, &str)] = &[
    ("findAll", "List every __ENTITY__"),
    ("findById", "Fetch one __ENTITY__ by its identifier"),
    ("search", "Search __ENTITY__ records page by page"),
    ("save", "Create a new __ENTITY__"),
    ("update", "Update an existing __ENTITY__"),
    ("delete", "Delete a __ENTITY__ by its identifier"),
];

/// Names of every catalog method, in catalog order.
pub fn catalog_names() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Immutable, ordered sequence of method descriptors.
///
/// Invariant: method names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MethodSelection {
    methods: Vec<MethodDescriptor>,
}

impl MethodSelection {
    /// Build a selection from caller-supplied descriptors.
    ///
    /// # Errors
    /// `DomainError::DuplicateMethod` if two descriptors share a name.
    pub fn new(methods: Vec<MethodDescriptor>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for method in &methods {
            if !seen.insert(method.name.as_str()) {
                return Err(DomainError::DuplicateMethod {
                    name: method.name.clone(),
                });
            }
        }
        Ok(Self { methods })
    }

    /// The full catalog with every method unchecked.
    pub fn catalog() -> Self {
        Self {
            methods: CATALOG
                .iter()
                .map(|(name, description)| MethodDescriptor::new(*name, *description, false))
                .collect(),
        }
    }

    /// The full catalog with exactly the named methods checked.
    ///
    /// Names are matched after trimming; an unknown name is rejected rather
    /// than silently dropped.
    pub fn from_catalog<S: AsRef<str>>(checked: &[S]) -> Result<Self, DomainError> {
        let wanted: Vec<&str> = checked.iter().map(|s| s.as_ref().trim()).collect();

        if let Some(unknown) = wanted
            .iter()
            .find(|w| !CATALOG.iter().any(|(name, _)| name == *w))
        {
            return Err(DomainError::UnknownMethod {
                name: (*unknown).to_string(),
                available: catalog_names().into_iter().map(String::from).collect(),
            });
        }

        Ok(Self {
            methods: CATALOG
                .iter()
                .map(|(name, description)| {
                    MethodDescriptor::new(*name, *description, wanted.contains(name))
                })
                .collect(),
        })
    }

    /// Every descriptor, checked or not.
    pub fn all(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// The checked subset, in original order.
    pub fn checked(&self) -> Vec<MethodDescriptor> {
        self.methods.iter().filter(|m| m.checked).cloned().collect()
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.checked && m.name == name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fresh_and_unchecked() {
        let first = MethodSelection::catalog();
        assert!(first.checked().is_empty());
        assert_eq!(first.len(), CATALOG.len());

        // A second run sees no state from the first one.
        let picked = MethodSelection::from_catalog(&["save"]).unwrap();
        assert!(picked.is_checked("save"));
        assert!(!MethodSelection::catalog().is_checked("save"));
    }

    #[test]
    fn checked_preserves_catalog_order() {
        let selection = MethodSelection::from_catalog(&["delete", "findAll", "findById"]).unwrap();
        let names: Vec<_> = selection.checked().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, ["findAll", "findById", "delete"]);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = MethodSelection::from_catalog(&["findAll", "purge"]).unwrap_err();
        assert!(matches!(err, DomainError::UnknownMethod { ref name, .. } if name == "purge"));
    }

    #[test]
    fn names_are_trimmed() {
        let selection = MethodSelection::from_catalog(&[" save "]).unwrap();
        assert!(selection.is_checked("save"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = MethodSelection::new(vec![
            MethodDescriptor::new("save", "", true),
            MethodDescriptor::new("save ", "", false),
        ])
        .unwrap_err();
        assert_eq!(err, DomainError::DuplicateMethod { name: "save".into() });
    }

    #[test]
    fn description_embeds_entity() {
        let method = MethodDescriptor::new("findAll", "List every __ENTITY__", true);
        assert_eq!(method.describe("Order"), "List every Order");
        assert_eq!(method.description(), "List every __ENTITY__");
    }
}
