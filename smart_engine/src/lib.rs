#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SMART_ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod catalog;
pub mod config;
pub mod data_paths;
pub mod loader;
pub mod script;
pub mod validation;
pub mod waypoint;

// Re-exports for convenience
pub use catalog::{CatalogStore, Catalogs};
pub use config::{SmartConfig, load_config};
pub use loader::rules::LoadOptions;
pub use loader::{SmartData, load_smart_data};
pub use script::{ChainKey, SmartRule, SmartScriptStore, SourceKind};
pub use validation::{Diagnostic, LoadReport, Rejection, Warning, WaypointReport};
pub use waypoint::{Waypoint, WaypointPath, WaypointStore};
