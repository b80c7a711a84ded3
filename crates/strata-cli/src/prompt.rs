//! Interactive prompts for `strata generate`.
//!
//! Only compiled with the `interactive` feature; without it every prompt
//! returns [`CliError::FeatureNotAvailable`] and callers are expected to pass
//! each choice as a flag.

#[cfg(feature = "interactive")]
pub use interactive::*;
#[cfg(not(feature = "interactive"))]
pub use unavailable::*;

/// Identifier types offered before the free-form fallback.
#[cfg(feature = "interactive")]
const ID_TYPES: &[&str] = &["long", "int", "String"];

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
    use strata_core::domain::MethodSelection;

    use super::ID_TYPES;
    use crate::error::CliResult;

    pub fn entity_name() -> CliResult<String> {
        let name = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Entity name")
            .validate_with(|input: &String| -> Result<(), &'static str> {
                if input.trim().is_empty() {
                    Err("the entity name must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(name)
    }

    pub fn id_type(default: &str) -> CliResult<String> {
        let theme = ColorfulTheme::default();
        let mut items: Vec<&str> = ID_TYPES.to_vec();
        items.push("other...");

        let preselected = ID_TYPES
            .iter()
            .position(|t| t.eq_ignore_ascii_case(default))
            .unwrap_or(items.len() - 1);

        let picked = Select::with_theme(&theme)
            .with_prompt("Identifier type")
            .items(&items)
            .default(preselected)
            .interact()?;

        if let Some(id_type) = ID_TYPES.get(picked) {
            return Ok((*id_type).to_string());
        }

        let custom = Input::<String>::with_theme(&theme)
            .with_prompt("Java type of the identifier")
            .default(default.to_string())
            .interact_text()?;
        Ok(custom)
    }

    /// Checkbox list over the catalog. `defaults` are pre-checked.
    pub fn methods(entity: &str, defaults: &[String]) -> CliResult<Vec<String>> {
        let catalog = MethodSelection::catalog();
        let items: Vec<String> = catalog
            .all()
            .iter()
            .map(|m| format!("{:<9} {}", m.name(), m.describe(entity)))
            .collect();
        let checked: Vec<bool> = catalog
            .all()
            .iter()
            .map(|m| defaults.iter().any(|d| d == m.name()))
            .collect();

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Methods to generate (space toggles, enter confirms)")
            .items(&items)
            .defaults(&checked)
            .interact()?;

        Ok(picked
            .into_iter()
            .filter_map(|i| catalog.all().get(i).map(|m| m.name().to_string()))
            .collect())
    }

    pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

#[cfg(not(feature = "interactive"))]
mod unavailable {
    use crate::error::{CliError, CliResult};

    fn unavailable<T>() -> CliResult<T> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn entity_name() -> CliResult<String> {
        unavailable()
    }

    pub fn id_type(_default: &str) -> CliResult<String> {
        unavailable()
    }

    pub fn methods(_entity: &str, _defaults: &[String]) -> CliResult<Vec<String>> {
        unavailable()
    }

    pub fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        unavailable()
    }
}
