//! Loader configuration.
//!
//! `smart.toml` names the data files to read and toggles the authoring-quality
//! warnings. Every field has a default, and a missing or broken file falls back
//! to [`SmartConfig::default`] so the loader can always start.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Complete loader configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartConfig {
    /// Catalog snapshot (RON), relative to the data dir.
    pub catalog_file: String,
    /// Rule rows (RON), relative to the data dir.
    pub rules_file: String,
    /// Waypoint rows (RON), relative to the data dir.
    pub waypoints_file: String,
    /// Where to write the JSON load report; no report when unset.
    pub report_file: Option<String>,
    /// Warn when an action duplicates what some spell effect already does.
    pub warn_redundant_spells: bool,
}

impl Default for SmartConfig {
    fn default() -> Self {
        Self {
            catalog_file: "catalog.ron".to_string(),
            rules_file: "smart_scripts.ron".to_string(),
            waypoints_file: "waypoints.ron".to_string(),
            report_file: None,
            warn_redundant_spells: true,
        }
    }
}

/// Loads configuration from a TOML file, falling back to defaults on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read or parsed
pub fn load_config(toml_path: &Path) -> SmartConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("loader configuration read from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load configuration from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            SmartConfig::default()
        },
    }
}

fn try_load_config(toml_path: &Path) -> Result<SmartConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading configuration from '{}'", toml_path.display()))?;
    let config: SmartConfig =
        toml::from_str(&text).with_context(|| format!("parsing configuration from '{}'", toml_path.display()))?;
    Ok(config)
}
