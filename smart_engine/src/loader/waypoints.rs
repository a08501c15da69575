//! Waypoint table loader.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use smart_data::WaypointRowDef;

use crate::validation::{WaypointReport, Warning};
use crate::waypoint::{Waypoint, WaypointPath, WaypointStore};

/// Read waypoint rows from a RON file.
///
/// # Errors
/// Returns an error if the file can't be read or parsed.
pub fn load_waypoint_rows(path: &Path) -> Result<Vec<WaypointRowDef>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading waypoints from '{}'", path.display()))?;
    let rows: Vec<WaypointRowDef> =
        ron::from_str(&text).with_context(|| format!("parsing waypoints from '{}'", path.display()))?;
    Ok(rows)
}

impl WaypointStore {
    /// Rebuild every path from `rows`.
    ///
    /// Point ids are expected to run 1, 2, 3, ... per path. A mismatch is
    /// reported, but the point is still stored under its stored id and the
    /// expected counter moves on by one, so a gap stays a gap.
    pub fn load(&mut self, rows: &[WaypointRowDef]) -> WaypointReport {
        let start = Instant::now();
        self.clear();

        let mut report = WaypointReport::default();
        if rows.is_empty() {
            info!(">> Loaded 0 waypoints. Waypoint table is empty.");
            return report;
        }

        let mut ordered: Vec<&WaypointRowDef> = rows.iter().collect();
        ordered.sort_by_key(|row| (row.path, row.point));

        let mut current: Option<(u32, WaypointPath)> = None;
        let mut expected = 1u32;
        for row in ordered {
            if current.as_ref().is_none_or(|(path, _)| *path != row.path) {
                if let Some((path, points)) = current.take() {
                    self.paths.insert(path, Arc::new(points));
                }
                current = Some((row.path, WaypointPath::new()));
                expected = 1;
            }

            if row.point != expected {
                let gap = Warning::WaypointGap {
                    path: row.path,
                    expected,
                    found: row.point,
                };
                warn!("SmartWaypointMgr: {gap}");
                report.gaps.push(gap);
            }
            expected = expected.saturating_add(1);

            if let Some((_, points)) = current.as_mut() {
                points.insert(
                    row.point,
                    Waypoint {
                        id: row.point,
                        x: row.x,
                        y: row.y,
                        z: row.z,
                    },
                );
            }
            report.points += 1;
        }
        if let Some((path, points)) = current {
            self.paths.insert(path, Arc::new(points));
        }

        report.paths = self.paths.len();
        info!(
            ">> Loaded {} waypoint paths (total {} waypoints) in {} ms",
            report.paths,
            report.points,
            start.elapsed().as_millis()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(path: u32, point: u32) -> WaypointRowDef {
        WaypointRowDef {
            path,
            point,
            x: 1.0,
            y: 2.0,
            z: 3.0,
        }
    }

    #[test]
    fn contiguous_points_load_without_warnings() {
        let mut store = WaypointStore::new();
        let report = store.load(&[row(1, 2), row(1, 1), row(2, 1)]);
        assert_eq!(report.paths, 2);
        assert_eq!(report.points, 3);
        assert!(report.gaps.is_empty());
        let path = store.get_path(1).expect("path 1");
        assert_eq!(path.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn gap_keeps_stored_point_id_and_warns() {
        let mut store = WaypointStore::new();
        let report = store.load(&[row(7, 1), row(7, 3)]);
        let path = store.get_path(7).expect("path 7");
        assert_eq!(path.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(
            report.gaps,
            vec![Warning::WaypointGap {
                path: 7,
                expected: 2,
                found: 3
            }]
        );
    }

    #[test]
    fn counter_advances_per_row_not_per_stored_id() {
        let mut store = WaypointStore::new();
        let report = store.load(&[row(3, 2), row(3, 3)]);
        // both rows are off by one against the running counter
        assert_eq!(report.gaps.len(), 2);
    }

    #[test]
    fn path_zero_is_a_real_path() {
        let mut store = WaypointStore::new();
        store.load(&[row(0, 1), row(0, 2)]);
        assert_eq!(store.get_path(0).map(|p| p.len()), Some(2));
    }

    #[test]
    fn empty_table_yields_empty_store() {
        let mut store = WaypointStore::new();
        store.load(&[row(1, 1)]);
        let report = store.load(&[]);
        assert_eq!(report.paths, 0);
        assert_eq!(store.path_count(), 0);
    }
}
