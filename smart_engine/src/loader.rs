//! Loader utilities for building the SmartAI tables from serialized data.
//!
//! The catalog snapshot and both row tables are RON files under the data
//! directory; which files are read is decided by [`SmartConfig`].

pub mod rules;
pub mod spell_index;
pub mod waypoints;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use smart_data::CatalogDef;

use crate::catalog::CatalogStore;
use crate::config::SmartConfig;
use crate::data_paths::data_path;
use crate::loader::rules::{LoadOptions, load_rule_rows};
use crate::loader::waypoints::load_waypoint_rows;
use crate::script::SmartScriptStore;
use crate::validation::{LoadReport, WaypointReport};
use crate::waypoint::WaypointStore;

/// Everything one load pass produces.
#[derive(Debug)]
pub struct SmartData {
    pub catalog: CatalogStore,
    pub waypoints: WaypointStore,
    pub scripts: SmartScriptStore,
    pub waypoint_report: WaypointReport,
    pub report: LoadReport,
}

/// Load the catalog snapshot, waypoints and rules named by `config`.
///
/// Waypoints load before rules so `WaypointStart` actions can be checked
/// against the paths that actually exist.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or an inconsistent catalog.
/// Individual bad rule rows are not errors; they show up in the report.
pub fn load_smart_data(config: &SmartConfig) -> Result<SmartData> {
    let catalog_path = data_path(&config.catalog_file);
    let waypoints_path = data_path(&config.waypoints_file);
    let rules_path = data_path(&config.rules_file);

    let catalog = load_catalog(&catalog_path).context("while loading reference catalogs")?;
    info!("{} spells added to catalog", catalog.spell_count());
    info!("{} creature templates added to catalog", catalog.creature_template_count());
    info!("{} gameobject templates added to catalog", catalog.gameobject_template_count());

    let waypoint_rows = load_waypoint_rows(&waypoints_path).context("while loading waypoints from file")?;
    let mut waypoints = WaypointStore::new();
    let waypoint_report = waypoints.load(&waypoint_rows);

    let rule_rows = load_rule_rows(&rules_path).context("while loading rules from file")?;
    let mut scripts = SmartScriptStore::new();
    let options = LoadOptions {
        warn_redundant_spells: config.warn_redundant_spells,
    };
    let report = scripts.load_with_options(&rule_rows, &catalog, &waypoints, options);

    Ok(SmartData {
        catalog,
        waypoints,
        scripts,
        waypoint_report,
        report,
    })
}

/// Read a catalog snapshot from a RON file.
///
/// # Errors
/// Returns an error if the file can't be read or parsed.
pub fn load_catalog_def(path: &Path) -> Result<CatalogDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading catalog from '{}'", path.display()))?;
    let def: CatalogDef =
        ron::from_str(&text).with_context(|| format!("parsing catalog from '{}'", path.display()))?;
    Ok(def)
}

/// Read, validate and index a catalog snapshot.
///
/// # Errors
/// Returns an error if the file can't be loaded or the snapshot is inconsistent.
pub fn load_catalog(path: &Path) -> Result<CatalogStore> {
    let def = load_catalog_def(path)?;
    validate_catalog_def(&def)?;
    Ok(CatalogStore::from_def(&def))
}

/// Validate the catalog snapshot and return a single aggregated error.
fn validate_catalog_def(def: &CatalogDef) -> Result<()> {
    let errors = smart_data::validate_catalog(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("catalog validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_data::{SpawnDef, TemplateDef};

    #[test]
    fn inconsistent_catalog_reports_every_problem() {
        let def = CatalogDef {
            creature_templates: vec![TemplateDef::default(), TemplateDef::default()],
            creature_spawns: vec![SpawnDef { guid: 1, entry: 99 }],
            ..CatalogDef::default()
        };
        let err = validate_catalog_def(&def).expect_err("invalid catalog");
        let text = err.to_string();
        assert!(text.starts_with("catalog validation failed:"));
        assert_eq!(text.lines().filter(|line| line.starts_with("- ")).count(), 2);
    }

    #[test]
    fn catalog_file_round_trips_through_ron() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.ron");
        fs::write(
            &path,
            r#"(creature_templates: [(entry: 10, ai_name: "SmartAI")], maps: [1, 2])"#,
        )
        .expect("write catalog");
        let catalog = load_catalog(&path).expect("load catalog");
        assert_eq!(catalog.creature_template_count(), 1);
    }
}
