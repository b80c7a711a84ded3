//! Variable substitution context handed to artifact renderers.

use std::collections::HashMap;

use crate::domain::parameters::ResolvedParameters;

/// Context for artifact rendering.
///
/// A **Value Object** built from [`ResolvedParameters`]. Immutable after
/// creation; [`RenderContext::with_variable`] consumes and returns a new one.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `ENTITY` | "OrderLine" | Resolved entity name |
/// | `ENTITY_CAMEL` | "orderLine" | Computed |
/// | `ENTITY_SNAKE` | "order_line" | Computed |
/// | `ENTITY_KEBAB` | "order-line" | Computed |
/// | `ID_TYPE` | "long" | Resolved identifier type |
/// | `ID_TYPE_BOXED` | "Long" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(params: &ResolvedParameters) -> Self {
        let entity = params.entity_name();
        let mut vars = HashMap::new();

        vars.insert("ENTITY".to_string(), entity.to_string());
        vars.insert("ENTITY_CAMEL".to_string(), to_camel_case(entity));
        vars.insert("ENTITY_SNAKE".to_string(), split_words(entity).join("_"));
        vars.insert("ENTITY_KEBAB".to_string(), split_words(entity).join("-"));
        vars.insert("ID_TYPE".to_string(), params.id_type().as_str().to_string());
        vars.insert("ID_TYPE_BOXED".to_string(), params.id_type().boxed().to_string());

        Self { variables: vars }
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// `OrderLine` → `orderLine`.
fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split an identifier into lowercase words.
///
/// Splits on `_`, `-`, whitespace, lower→upper transitions (`myApp`) and
/// acronym boundaries (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
