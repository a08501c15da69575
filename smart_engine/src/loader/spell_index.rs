//! Helper spell-effect index.
//!
//! Maps an entity id to the spells whose effects already produce that entity
//! (summon a creature, summon a game object, grant kill credit, create an
//! item). The rule validator uses it to flag rules that duplicate a spell's
//! work. It is built at the start of a rule-load pass and cleared at the end.

use std::collections::HashMap;
use std::time::Instant;

use log::info;

use crate::catalog::Catalogs;

pub const SPELL_EFFECT_CREATE_ITEM: u32 = 24;
pub const SPELL_EFFECT_SUMMON: u32 = 28;
pub const SPELL_EFFECT_SUMMON_OBJECT_WILD: u32 = 76;
pub const SPELL_EFFECT_KILL_CREDIT: u32 = 90;

/// Effect slots inspected per spell.
pub const MAX_SPELL_EFFECTS: usize = 3;

/// Which of the four disjoint index keyspaces to look in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum HelperKind {
    #[strum(serialize = "summon creature")]
    SummonCreature,
    #[strum(serialize = "summon gameobject")]
    SummonGameObject,
    #[strum(serialize = "kill credit")]
    KillCredit,
    #[strum(serialize = "create item")]
    CreateItem,
}

impl HelperKind {
    /// Classify one effect slot; the first matching kind wins.
    fn classify(effect: u32) -> Option<Self> {
        match effect {
            SPELL_EFFECT_SUMMON => Some(HelperKind::SummonCreature),
            SPELL_EFFECT_SUMMON_OBJECT_WILD => Some(HelperKind::SummonGameObject),
            SPELL_EFFECT_KILL_CREDIT => Some(HelperKind::KillCredit),
            SPELL_EFFECT_CREATE_ITEM => Some(HelperKind::CreateItem),
            _ => None,
        }
    }
}

/// A spell effect slot that targets some entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellEffectRef {
    pub spell: u32,
    pub effect: u8,
}

#[derive(Debug, Default)]
pub struct SpellEffectIndex {
    summon_creature: HashMap<u32, Vec<SpellEffectRef>>,
    summon_gameobject: HashMap<u32, Vec<SpellEffectRef>>,
    kill_credit: HashMap<u32, Vec<SpellEffectRef>>,
    create_item: HashMap<u32, Vec<SpellEffectRef>>,
}

impl SpellEffectIndex {
    /// Scan every spell once and index the four helper effect kinds.
    ///
    /// Creature, game-object and kill-credit keys come from the effect's misc
    /// value; create-item keys come from its item type.
    pub fn build(catalogs: &dyn Catalogs) -> Self {
        let start = Instant::now();
        let mut index = Self::default();
        for spell in catalogs.spells() {
            for (slot, effect) in (0u8..).zip(spell.effects.iter().take(MAX_SPELL_EFFECTS)) {
                let Some(kind) = HelperKind::classify(effect.effect) else {
                    continue;
                };
                #[allow(clippy::cast_sign_loss)]
                let key = match kind {
                    HelperKind::CreateItem => effect.item_type,
                    _ => effect.misc_value as u32,
                };
                index.map_mut(kind).entry(key).or_default().push(SpellEffectRef {
                    spell: spell.id,
                    effect: slot,
                });
            }
        }
        info!(
            ">> Loaded SmartAI helper index ({} entries) in {} ms",
            index.len(),
            start.elapsed().as_millis()
        );
        index
    }

    /// Spells whose effects already produce `id`, in spell order.
    pub fn lookup(&self, kind: HelperKind, id: u32) -> &[SpellEffectRef] {
        self.map(kind).get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.summon_creature.clear();
        self.summon_gameobject.clear();
        self.kill_credit.clear();
        self.create_item.clear();
    }

    pub fn len(&self) -> usize {
        [
            &self.summon_creature,
            &self.summon_gameobject,
            &self.kill_credit,
            &self.create_item,
        ]
        .iter()
        .flat_map(|map| map.values())
        .map(Vec::len)
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map(&self, kind: HelperKind) -> &HashMap<u32, Vec<SpellEffectRef>> {
        match kind {
            HelperKind::SummonCreature => &self.summon_creature,
            HelperKind::SummonGameObject => &self.summon_gameobject,
            HelperKind::KillCredit => &self.kill_credit,
            HelperKind::CreateItem => &self.create_item,
        }
    }

    fn map_mut(&mut self, kind: HelperKind) -> &mut HashMap<u32, Vec<SpellEffectRef>> {
        match kind {
            HelperKind::SummonCreature => &mut self.summon_creature,
            HelperKind::SummonGameObject => &mut self.summon_gameobject,
            HelperKind::KillCredit => &mut self.kill_credit,
            HelperKind::CreateItem => &mut self.create_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use smart_data::{CatalogDef, SpellDef, SpellEffectDef};

    fn effect(effect: u32, misc_value: i32, item_type: u32) -> SpellEffectDef {
        SpellEffectDef {
            effect,
            misc_value,
            item_type,
            ..SpellEffectDef::default()
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_def(&CatalogDef {
            spells: vec![
                SpellDef {
                    id: 10,
                    school_mask: 1,
                    effects: vec![effect(SPELL_EFFECT_SUMMON, 500, 0), effect(SPELL_EFFECT_CREATE_ITEM, 0, 77)],
                },
                SpellDef {
                    id: 11,
                    school_mask: 1,
                    effects: vec![effect(0, 0, 0), effect(SPELL_EFFECT_SUMMON, 500, 0)],
                },
                SpellDef {
                    id: 12,
                    school_mask: 1,
                    effects: vec![effect(SPELL_EFFECT_KILL_CREDIT, 500, 0)],
                },
            ],
            ..CatalogDef::default()
        })
    }

    #[test]
    fn build_indexes_each_slot_into_its_own_keyspace() {
        let index = SpellEffectIndex::build(&catalog());
        assert_eq!(
            index.lookup(HelperKind::SummonCreature, 500),
            &[
                SpellEffectRef { spell: 10, effect: 0 },
                SpellEffectRef { spell: 11, effect: 1 }
            ]
        );
        assert_eq!(
            index.lookup(HelperKind::KillCredit, 500),
            &[SpellEffectRef { spell: 12, effect: 0 }]
        );
        assert_eq!(
            index.lookup(HelperKind::CreateItem, 77),
            &[SpellEffectRef { spell: 10, effect: 1 }]
        );
        assert!(index.lookup(HelperKind::SummonGameObject, 500).is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn clear_empties_every_keyspace() {
        let mut index = SpellEffectIndex::build(&catalog());
        index.clear();
        assert!(index.is_empty());
        assert!(index.lookup(HelperKind::SummonCreature, 500).is_empty());
    }
}
