//! Implementation of the `strata methods` command.

use serde::Serialize;

use strata_core::domain::{MethodSelection, normalize_entity_name};

use crate::{
    cli::{ListFormat, MethodsArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One catalog entry as printed by every format.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct MethodRow {
    name: String,
    description: String,
    /// Pre-checked by `defaults.methods`.
    default: bool,
}

pub fn execute(args: MethodsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let rows = rows(args.entity.as_deref(), &config);

    match args.format {
        ListFormat::Table => {
            output.header("Available methods:")?;
            for row in &rows {
                let marker = if row.default { "*" } else { " " };
                output.print(&format!(
                    "  {marker} {:<9} {}",
                    row.name, row.description
                ))?;
            }
            output.print("")?;
            output.print("  * selected by default (defaults.methods)")?;
        }

        // JSON, list and CSV output go straight to stdout so they stay
        // parseable in pipes and quiet mode.
        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.name);
            }
        }

        ListFormat::Csv => {
            println!("name,description,default");
            for row in &rows {
                println!(
                    "{},{},{}",
                    csv_field(&row.name),
                    csv_field(&row.description),
                    row.default
                );
            }
        }
    }

    Ok(())
}

fn rows(entity: Option<&str>, config: &AppConfig) -> Vec<MethodRow> {
    let entity = entity
        .map(|e| normalize_entity_name(e.trim()))
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "Entity".to_string());

    MethodSelection::catalog()
        .all()
        .iter()
        .map(|m| MethodRow {
            name: m.name().to_string(),
            description: m.describe(&entity),
            default: config.defaults.methods.iter().any(|d| d == m.name()),
        })
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_catalog_order() {
        let names: Vec<String> = rows(None, &AppConfig::default())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            ["findAll", "findById", "search", "save", "update", "delete"]
        );
    }

    #[test]
    fn descriptions_use_the_normalized_entity() {
        let rows = rows(Some("order"), &AppConfig::default());
        assert_eq!(rows[0].description, "List every Order");
        assert!(rows.iter().all(|r| !r.description.contains("__ENTITY__")));
    }

    #[test]
    fn defaults_are_marked() {
        let mut config = AppConfig::default();
        config.defaults.methods = vec!["delete".into()];
        let rows = rows(None, &config);
        let marked: Vec<&str> = rows
            .iter()
            .filter(|r| r.default)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(marked, ["delete"]);
    }

    #[test]
    fn csv_quotes_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
