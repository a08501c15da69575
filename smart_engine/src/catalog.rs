//! Read-only reference catalogs the rule validator checks ids against.
//!
//! The loader only ever sees catalogs through [`Catalogs`], so a server can
//! back it with whatever stores it already keeps in memory. [`CatalogStore`]
//! is the plain implementation built from a `CatalogDef` snapshot.

use std::collections::{BTreeMap, HashMap, HashSet};

use smart_data::{CatalogDef, GameEventDef, QuestDef, SpawnDef, SpellDef, TemplateDef};

/// Lookups by numeric id into the pre-loaded reference data.
pub trait Catalogs {
    fn spell(&self, id: u32) -> Option<&SpellDef>;
    /// Every spell, in id order.
    fn spells(&self) -> Box<dyn Iterator<Item = &SpellDef> + '_>;
    fn creature_template(&self, entry: u32) -> Option<&TemplateDef>;
    fn creature_spawn(&self, guid: u32) -> Option<&SpawnDef>;
    fn gameobject_template(&self, entry: u32) -> Option<&TemplateDef>;
    fn gameobject_spawn(&self, guid: u32) -> Option<&SpawnDef>;
    fn quest(&self, id: u32) -> Option<&QuestDef>;
    fn creature_text_exists(&self, entry: u32, group: u8) -> bool;
    fn game_event(&self, id: u32) -> Option<&GameEventDef>;
    fn has_faction(&self, id: u32) -> bool;
    fn has_map(&self, id: u32) -> bool;
    fn has_area(&self, id: u32) -> bool;
    fn has_area_trigger(&self, id: u32) -> bool;
    fn has_sound(&self, id: u32) -> bool;
    fn has_emote(&self, id: u32) -> bool;
    fn has_text_emote(&self, id: u32) -> bool;
    fn has_item(&self, id: u32) -> bool;
    fn has_equipment(&self, id: u32) -> bool;
    fn has_taxi_path(&self, id: u32) -> bool;
    fn has_display_model(&self, id: u32) -> bool;
}

/// In-memory catalogs keyed for O(1) lookup.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    spells: BTreeMap<u32, SpellDef>,
    creature_templates: HashMap<u32, TemplateDef>,
    creature_spawns: HashMap<u32, SpawnDef>,
    gameobject_templates: HashMap<u32, TemplateDef>,
    gameobject_spawns: HashMap<u32, SpawnDef>,
    quests: HashMap<u32, QuestDef>,
    creature_texts: HashSet<(u32, u8)>,
    game_events: HashMap<u32, GameEventDef>,
    factions: HashSet<u32>,
    maps: HashSet<u32>,
    areas: HashSet<u32>,
    area_triggers: HashSet<u32>,
    sounds: HashSet<u32>,
    emotes: HashSet<u32>,
    text_emotes: HashSet<u32>,
    items: HashSet<u32>,
    equipment: HashSet<u32>,
    taxi_paths: HashSet<u32>,
    display_models: HashSet<u32>,
}

impl CatalogStore {
    /// Index a catalog snapshot. Later duplicates replace earlier ones, so
    /// validate the snapshot first if that matters.
    pub fn from_def(def: &CatalogDef) -> Self {
        Self {
            spells: def.spells.iter().map(|s| (s.id, s.clone())).collect(),
            creature_templates: def.creature_templates.iter().map(|t| (t.entry, t.clone())).collect(),
            creature_spawns: def.creature_spawns.iter().map(|s| (s.guid, *s)).collect(),
            gameobject_templates: def.gameobject_templates.iter().map(|t| (t.entry, t.clone())).collect(),
            gameobject_spawns: def.gameobject_spawns.iter().map(|s| (s.guid, *s)).collect(),
            quests: def.quests.iter().map(|q| (q.id, *q)).collect(),
            creature_texts: def.creature_texts.iter().map(|t| (t.entry, t.group)).collect(),
            game_events: def.game_events.iter().map(|e| (e.id, *e)).collect(),
            factions: def.factions.iter().copied().collect(),
            maps: def.maps.iter().copied().collect(),
            areas: def.areas.iter().copied().collect(),
            area_triggers: def.area_triggers.iter().copied().collect(),
            sounds: def.sounds.iter().copied().collect(),
            emotes: def.emotes.iter().copied().collect(),
            text_emotes: def.text_emotes.iter().copied().collect(),
            items: def.items.iter().copied().collect(),
            equipment: def.equipment.iter().copied().collect(),
            taxi_paths: def.taxi_paths.iter().copied().collect(),
            display_models: def.display_models.iter().copied().collect(),
        }
    }

    pub fn spell_count(&self) -> usize {
        self.spells.len()
    }

    pub fn creature_template_count(&self) -> usize {
        self.creature_templates.len()
    }

    pub fn gameobject_template_count(&self) -> usize {
        self.gameobject_templates.len()
    }
}

impl Catalogs for CatalogStore {
    fn spell(&self, id: u32) -> Option<&SpellDef> {
        self.spells.get(&id)
    }

    fn spells(&self) -> Box<dyn Iterator<Item = &SpellDef> + '_> {
        Box::new(self.spells.values())
    }

    fn creature_template(&self, entry: u32) -> Option<&TemplateDef> {
        self.creature_templates.get(&entry)
    }

    fn creature_spawn(&self, guid: u32) -> Option<&SpawnDef> {
        self.creature_spawns.get(&guid)
    }

    fn gameobject_template(&self, entry: u32) -> Option<&TemplateDef> {
        self.gameobject_templates.get(&entry)
    }

    fn gameobject_spawn(&self, guid: u32) -> Option<&SpawnDef> {
        self.gameobject_spawns.get(&guid)
    }

    fn quest(&self, id: u32) -> Option<&QuestDef> {
        self.quests.get(&id)
    }

    fn creature_text_exists(&self, entry: u32, group: u8) -> bool {
        self.creature_texts.contains(&(entry, group))
    }

    fn game_event(&self, id: u32) -> Option<&GameEventDef> {
        self.game_events.get(&id)
    }

    fn has_faction(&self, id: u32) -> bool {
        self.factions.contains(&id)
    }

    fn has_map(&self, id: u32) -> bool {
        self.maps.contains(&id)
    }

    fn has_area(&self, id: u32) -> bool {
        self.areas.contains(&id)
    }

    fn has_area_trigger(&self, id: u32) -> bool {
        self.area_triggers.contains(&id)
    }

    fn has_sound(&self, id: u32) -> bool {
        self.sounds.contains(&id)
    }

    fn has_emote(&self, id: u32) -> bool {
        self.emotes.contains(&id)
    }

    fn has_text_emote(&self, id: u32) -> bool {
        self.text_emotes.contains(&id)
    }

    fn has_item(&self, id: u32) -> bool {
        self.items.contains(&id)
    }

    fn has_equipment(&self, id: u32) -> bool {
        self.equipment.contains(&id)
    }

    fn has_taxi_path(&self, id: u32) -> bool {
        self.taxi_paths.contains(&id)
    }

    fn has_display_model(&self, id: u32) -> bool {
        self.display_models.contains(&id)
    }
}
