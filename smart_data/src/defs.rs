use serde::{Deserialize, Serialize};

/// One row of the `smart_scripts` table, exactly as storage hands it over.
///
/// Parameter slots are raw; their meaning depends on the event, action and
/// target kinds. Unused slots may be omitted from data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleRowDef {
    /// Template entry when non-negative, negated spawn guid otherwise.
    pub owner_key: i32,
    pub source_type: u8,
    pub id: u16,
    pub link: u16,
    pub event_type: u8,
    pub event_phase_mask: u8,
    pub event_chance: u8,
    pub event_flags: u8,
    pub event_param1: u32,
    pub event_param2: u32,
    pub event_param3: u32,
    pub event_param4: u32,
    pub event_param5: u32,
    pub action_type: u8,
    pub action_param1: u32,
    pub action_param2: u32,
    pub action_param3: u32,
    pub action_param4: u32,
    pub action_param5: u32,
    pub action_param6: u32,
    pub target_type: u8,
    pub target_param1: u32,
    pub target_param2: u32,
    pub target_param3: u32,
    pub target_x: f32,
    pub target_y: f32,
    pub target_z: f32,
    pub target_o: f32,
}

impl Default for RuleRowDef {
    fn default() -> Self {
        Self {
            owner_key: 0,
            source_type: 0,
            id: 0,
            link: 0,
            event_type: 0,
            event_phase_mask: 0,
            event_chance: 100,
            event_flags: 0,
            event_param1: 0,
            event_param2: 0,
            event_param3: 0,
            event_param4: 0,
            event_param5: 0,
            action_type: 0,
            action_param1: 0,
            action_param2: 0,
            action_param3: 0,
            action_param4: 0,
            action_param5: 0,
            action_param6: 0,
            target_type: 0,
            target_param1: 0,
            target_param2: 0,
            target_param3: 0,
            target_x: 0.0,
            target_y: 0.0,
            target_z: 0.0,
            target_o: 0.0,
        }
    }
}

impl RuleRowDef {
    pub fn event_params(&self) -> [u32; 5] {
        [
            self.event_param1,
            self.event_param2,
            self.event_param3,
            self.event_param4,
            self.event_param5,
        ]
    }

    pub fn action_params(&self) -> [u32; 6] {
        [
            self.action_param1,
            self.action_param2,
            self.action_param3,
            self.action_param4,
            self.action_param5,
            self.action_param6,
        ]
    }

    pub fn target_params(&self) -> [u32; 3] {
        [self.target_param1, self.target_param2, self.target_param3]
    }

    /// Storage sort key: rows of one chain arrive together, in id order.
    pub fn storage_order(&self) -> (i32, u8, u16, u16) {
        (self.owner_key, self.source_type, self.id, self.link)
    }
}

/// One row of the `waypoints` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WaypointRowDef {
    pub path: u32,
    pub point: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Snapshot of the read-only reference data the rule validator checks against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogDef {
    pub spells: Vec<SpellDef>,
    pub creature_templates: Vec<TemplateDef>,
    pub creature_spawns: Vec<SpawnDef>,
    pub gameobject_templates: Vec<TemplateDef>,
    pub gameobject_spawns: Vec<SpawnDef>,
    pub quests: Vec<QuestDef>,
    pub creature_texts: Vec<CreatureTextDef>,
    pub game_events: Vec<GameEventDef>,
    pub factions: Vec<u32>,
    pub maps: Vec<u32>,
    pub areas: Vec<u32>,
    pub area_triggers: Vec<u32>,
    pub sounds: Vec<u32>,
    pub emotes: Vec<u32>,
    pub text_emotes: Vec<u32>,
    pub items: Vec<u32>,
    pub equipment: Vec<u32>,
    pub taxi_paths: Vec<u32>,
    pub display_models: Vec<u32>,
}

/// Spell record; only the fields the validator reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpellDef {
    pub id: u32,
    pub school_mask: u32,
    /// At most three effect slots; missing slots are empty.
    pub effects: Vec<SpellEffectDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpellEffectDef {
    pub effect: u32,
    pub implicit_target_a: u32,
    pub implicit_target_b: u32,
    pub misc_value: i32,
    pub item_type: u32,
}

/// Creature or game-object template with its configured AI driver name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateDef {
    pub entry: u32,
    pub ai_name: String,
}

/// A placed instance of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpawnDef {
    pub guid: u32,
    pub entry: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuestDef {
    pub id: u32,
    pub special_flags: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreatureTextDef {
    pub entry: u32,
    pub group: u8,
}

/// Scheduled world event. An event is usable when it has a length or is a world event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameEventDef {
    pub id: u32,
    pub length: u32,
    pub world_event: bool,
}

impl GameEventDef {
    pub fn is_valid(&self) -> bool {
        self.length > 0 || self.world_event
    }
}
