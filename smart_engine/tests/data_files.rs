use std::fs;
use std::sync::Arc;

use smart_data::WaypointRowDef;
use smart_engine::loader::rules::load_rule_rows;
use smart_engine::*;

fn point(path: u32, point: u32) -> WaypointRowDef {
    WaypointRowDef {
        path,
        point,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    }
}

#[test]
fn test_lib_version() {
    assert!(!SMART_ENGINE_VERSION.is_empty());
}

#[test]
fn bundled_data_directory_loads() {
    let data = load_smart_data(&SmartConfig::default()).expect("bundled data loads");
    assert_eq!(data.waypoint_report.paths, 2);
    assert_eq!(data.waypoint_report.points, 5);
    assert!(data.waypoint_report.gaps.is_empty());

    let report = &data.report;
    assert_eq!(report.entities, 6);
    assert_eq!(report.rules, 10);
    assert_eq!(report.rejected.len(), 2);
    assert!(report.was_rejected_for(1002, 0, |r| matches!(r, Rejection::OwnerWrongAi { .. })));
    assert!(report.was_rejected_for(1000, 4, |r| matches!(
        r,
        Rejection::MissingReference { what: "spell", .. }
    )));
    assert!(
        report
            .warnings
            .iter()
            .any(|d| matches!(d.reason, Warning::RedundantSpellEffect { id: 1001, .. }))
    );
    assert!(data.scripts.get_chain(SourceKind::TimedActionList, 300_000).is_some());
    assert!(data.scripts.get_chain(SourceKind::AreaTrigger, 4000).is_some());
}

#[test]
fn config_points_at_files_anywhere() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = dir.path().join("catalog.ron");
    let rules = dir.path().join("rules.ron");
    let waypoints = dir.path().join("waypoints.ron");
    fs::write(
        &catalog,
        r#"(creature_templates: [(entry: 7, ai_name: "SmartAI")], creature_texts: [(entry: 7, group: 0)])"#,
    )
    .expect("write catalog");
    fs::write(
        &rules,
        "[(owner_key: 7, id: 1, event_type: 4, action_type: 1), (owner_key: 7, id: 2, event_type: 4, action_type: 53, action_param2: 3)]",
    )
    .expect("write rules");
    fs::write(&waypoints, "[(path: 3, point: 1, x: 1.0, y: 2.0, z: 3.0)]").expect("write waypoints");

    let config = SmartConfig {
        catalog_file: catalog.display().to_string(),
        rules_file: rules.display().to_string(),
        waypoints_file: waypoints.display().to_string(),
        report_file: None,
        warn_redundant_spells: false,
    };
    let data = load_smart_data(&config).expect("load from temp dir");
    assert_eq!(data.report.rules, 2);
    assert!(data.report.rejected.is_empty());
    assert!(data.waypoints.contains_path(3));

    let json = serde_json::to_value(&data.report).expect("serialize report");
    assert_eq!(json["rules"], 2);
}

#[test]
fn unreadable_rules_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let rules = dir.path().join("rules.ron");
    fs::write(&rules, "[(owner_key: ").expect("write rules");
    let err = load_rule_rows(&rules).expect_err("truncated file");
    assert!(format!("{err:#}").contains("parsing rules"));
}

#[test]
fn waypoint_reload_releases_previous_generation() {
    let mut store = WaypointStore::new();
    store.load(&[point(1, 1), point(1, 2)]);
    let held = store.get_path(1).expect("path 1");
    let weak = Arc::downgrade(&held);

    store.load(&[point(2, 1)]);
    assert!(store.get_path(1).is_none());
    assert_eq!(held.len(), 2, "a reader keeps its path across reload");

    drop(held);
    assert!(weak.upgrade().is_none());
}

#[test]
fn waypoint_start_checks_loaded_paths() {
    let catalog = CatalogStore::from_def(&smart_data::CatalogDef {
        creature_templates: vec![smart_data::TemplateDef {
            entry: 7,
            ai_name: "SmartAI".into(),
        }],
        ..Default::default()
    });
    let row = smart_data::RuleRowDef {
        owner_key: 7,
        id: 1,
        event_type: 4,
        action_type: 53,
        action_param2: 9,
        ..Default::default()
    };
    let mut waypoints = WaypointStore::new();
    let mut scripts = SmartScriptStore::new();

    let report = scripts.load(std::slice::from_ref(&row), &catalog, &waypoints);
    assert!(report.was_rejected_for(7, 1, |r| *r
        == Rejection::MissingReference {
            what: "waypoint path",
            id: 9
        }));

    waypoints.load(&[point(9, 1)]);
    let report = scripts.load(&[row], &catalog, &waypoints);
    assert_eq!(report.rules, 1);
}
