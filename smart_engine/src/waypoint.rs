//! Waypoint paths referenced by `WaypointStart` actions and walked at runtime.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// One point of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Points of one path keyed by their stored point id.
pub type WaypointPath = BTreeMap<u32, Waypoint>;

/// Path table. Paths are shared out as `Arc`s so a reader can keep walking a
/// path while the store reloads; the store itself drops its previous
/// generation before building the next one.
#[derive(Debug, Default)]
pub struct WaypointStore {
    pub(crate) paths: HashMap<u32, Arc<WaypointPath>>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_path(&self, id: u32) -> Option<Arc<WaypointPath>> {
        self.paths.get(&id).cloned()
    }

    pub fn contains_path(&self, id: u32) -> bool {
        self.paths.contains_key(&id)
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn point_count(&self) -> usize {
        self.paths.values().map(|path| path.len()).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.paths.clear();
    }
}
