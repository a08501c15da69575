use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Maximum number of effect slots a spell record may carry.
pub const MAX_SPELL_EFFECTS: usize = 3;

/// Validation error for malformed or inconsistent catalog snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: u32 },
    MissingReference { kind: &'static str, id: u32, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id {id}")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} {id} ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a catalog snapshot for duplicate ids and dangling spawn/text references.
///
/// ```
/// use smart_data::{CatalogDef, SpawnDef, TemplateDef, validate_catalog};
///
/// let catalog = CatalogDef {
///     creature_templates: vec![TemplateDef { entry: 10, ai_name: "SmartAI".into() }],
///     creature_spawns: vec![SpawnDef { guid: 500, entry: 10 }],
///     ..CatalogDef::default()
/// };
/// assert!(validate_catalog(&catalog).is_empty());
/// ```
pub fn validate_catalog(catalog: &CatalogDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut spells = HashSet::new();
    let mut creatures = HashSet::new();
    let mut gameobjects = HashSet::new();
    let mut creature_guids = HashSet::new();
    let mut gameobject_guids = HashSet::new();

    track_ids("spell", catalog.spells.iter().map(|s| s.id), &mut spells, &mut errors);
    track_ids(
        "creature template",
        catalog.creature_templates.iter().map(|t| t.entry),
        &mut creatures,
        &mut errors,
    );
    track_ids(
        "gameobject template",
        catalog.gameobject_templates.iter().map(|t| t.entry),
        &mut gameobjects,
        &mut errors,
    );
    track_ids(
        "creature spawn",
        catalog.creature_spawns.iter().map(|s| s.guid),
        &mut creature_guids,
        &mut errors,
    );
    track_ids(
        "gameobject spawn",
        catalog.gameobject_spawns.iter().map(|s| s.guid),
        &mut gameobject_guids,
        &mut errors,
    );
    track_ids(
        "quest",
        catalog.quests.iter().map(|q| q.id),
        &mut HashSet::new(),
        &mut errors,
    );
    track_ids(
        "game event",
        catalog.game_events.iter().map(|e| e.id),
        &mut HashSet::new(),
        &mut errors,
    );

    for spell in &catalog.spells {
        if spell.effects.len() > MAX_SPELL_EFFECTS {
            errors.push(ValidationError::InvalidValue {
                context: format!(
                    "spell {} has {} effect slots (max {MAX_SPELL_EFFECTS})",
                    spell.id,
                    spell.effects.len()
                ),
            });
        }
    }

    for spawn in &catalog.creature_spawns {
        check_ref(
            "creature template",
            spawn.entry,
            &creatures,
            format!("creature spawn {}", spawn.guid),
            &mut errors,
        );
    }

    for spawn in &catalog.gameobject_spawns {
        check_ref(
            "gameobject template",
            spawn.entry,
            &gameobjects,
            format!("gameobject spawn {}", spawn.guid),
            &mut errors,
        );
    }

    for text in &catalog.creature_texts {
        check_ref(
            "creature template",
            text.entry,
            &creatures,
            format!("creature text group {}", text.group),
            &mut errors,
        );
    }

    errors
}

fn track_ids(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
    set: &mut HashSet<u32>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id) {
            errors.push(ValidationError::DuplicateId { kind, id });
        }
    }
}

fn check_ref(kind: &'static str, id: u32, set: &HashSet<u32>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(&id) {
        errors.push(ValidationError::MissingReference { kind, id, context });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(entry: u32) -> TemplateDef {
        TemplateDef {
            entry,
            ai_name: "SmartAI".into(),
        }
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let catalog = CatalogDef {
            creature_templates: vec![template(7), template(7)],
            ..CatalogDef::default()
        };

        let errors = validate_catalog(&catalog);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "creature template" && *id == 7)
        ));
    }

    #[test]
    fn spawn_without_template_is_reported() {
        let catalog = CatalogDef {
            creature_spawns: vec![SpawnDef { guid: 1, entry: 99 }],
            ..CatalogDef::default()
        };

        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::MissingReference { kind, id, .. } if *kind == "creature template" && *id == 99
        ));
    }

    #[test]
    fn too_many_spell_effects_is_reported() {
        let catalog = CatalogDef {
            spells: vec![SpellDef {
                id: 1,
                school_mask: 1,
                effects: vec![SpellEffectDef::default(); 4],
            }],
            ..CatalogDef::default()
        };

        let errors = validate_catalog(&catalog);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn rule_rows_parse_from_ron_with_defaults() {
        let rows: Vec<RuleRowDef> = ron::from_str(
            "[(owner_key: 100, id: 1, event_type: 4, action_type: 11, action_param1: 133, target_type: 2)]",
        )
        .expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event_chance, 100);
        assert_eq!(rows[0].action_params()[0], 133);
        assert_eq!(rows[0].storage_order(), (100, 0, 1, 0));
    }
}
