//! Typed SmartAI rule model and the in-memory rule table.
//!
//! A [`SmartRule`] is one validated row of the rule table: an event that fires,
//! the action it performs and the target that action is aimed at. Rules sharing
//! a `(source kind, owner key)` pair form a chain; chains are what the runtime
//! interpreter asks for when an entity spawns.
//!
//! The table itself is filled by [`SmartScriptStore::load`](crate::loader::rules);
//! this module only holds the data and the read-side queries.

pub mod action;
pub mod event;
pub mod target;

use std::collections::BTreeMap;

use variantly::Variantly;

pub use action::{ActionKind, SmartAction};
pub use event::{EventFlags, EventKind, EventSpec, MinMax, MinMaxRepeat, PhaseMask, SmartEvent, SourceMask};
pub use target::{SmartTarget, TargetKind, TargetPosition, TargetSelector};

/// AI driver name a creature template must carry to own rules.
pub const CREATURE_AI_NAME: &str = "SmartAI";
/// AI driver name a game-object template must carry to own rules.
pub const GAMEOBJECT_AI_NAME: &str = "SmartGameObjectAI";

/// Which kind of entity owns a rule chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Variantly, strum::FromRepr, strum::Display,
)]
#[repr(u8)]
pub enum SourceKind {
    Creature = 0,
    GameObject = 1,
    AreaTrigger = 2,
    TimedActionList = 9,
}

/// Raw source values that name a known source kind the loader does not handle.
pub const UNIMPLEMENTED_SOURCES: std::ops::RangeInclusive<u8> = 3..=8;

impl SourceKind {
    /// Bit used for this source in per-event allowed-source masks.
    pub fn mask(self) -> SourceMask {
        match self {
            SourceKind::Creature => SourceMask::CREATURE,
            SourceKind::GameObject => SourceMask::GAMEOBJECT,
            SourceKind::AreaTrigger => SourceMask::AREATRIGGER,
            SourceKind::TimedActionList => SourceMask::TIMED_ACTIONLIST,
        }
    }
}

/// One validated rule. Owned by the chain it was loaded into.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartRule {
    /// Template entry when non-negative, negated spawn guid otherwise.
    pub owner: i32,
    pub source: SourceKind,
    pub id: u16,
    /// Id of the rule this one triggers, 0 for none.
    pub link: u16,
    pub event: EventSpec,
    pub action: SmartAction,
    pub target: SmartTarget,
}

impl SmartRule {
    pub fn event_kind(&self) -> EventKind {
        self.event.event.kind()
    }

    pub fn action_kind(&self) -> ActionKind {
        self.action.kind()
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target.kind()
    }
}

/// Key of a rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainKey {
    pub source: SourceKind,
    pub owner: i32,
}

impl ChainKey {
    pub fn new(source: SourceKind, owner: i32) -> Self {
        Self { source, owner }
    }
}

/// In-memory rule table keyed by `(source kind, owner key)`.
///
/// Rules inside a chain keep load order, which is rule id order.
#[derive(Debug, Default)]
pub struct SmartScriptStore {
    pub(crate) chains: BTreeMap<ChainKey, Vec<SmartRule>>,
}

impl SmartScriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rules of one owner, in rule id order.
    pub fn get_chain(&self, source: SourceKind, owner: i32) -> Option<&[SmartRule]> {
        self.chains.get(&ChainKey::new(source, owner)).map(Vec::as_slice)
    }

    /// Iterate every chain in key order.
    pub fn chains(&self) -> impl Iterator<Item = (&ChainKey, &[SmartRule])> {
        self.chains.iter().map(|(key, rules)| (key, rules.as_slice()))
    }

    /// Number of distinct owners with at least one rule.
    pub fn entity_count(&self) -> usize {
        self.chains.len()
    }

    /// Total number of retained rules across all chains.
    pub fn rule_count(&self) -> usize {
        self.chains.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.chains.clear();
    }
}

/// The rule whose id equals `link`, i.e. the rule a linking rule triggers.
pub fn find_linked_rule(chain: &[SmartRule], link: u16) -> Option<&SmartRule> {
    chain.iter().find(|rule| rule.id == link)
}

/// Any rule in the chain that links to `id`.
pub fn find_link_source(chain: &[SmartRule], id: u16) -> Option<&SmartRule> {
    chain.iter().find(|rule| rule.link == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: u16, link: u16) -> SmartRule {
        SmartRule {
            owner: 1,
            source: SourceKind::Creature,
            id,
            link,
            event: EventSpec {
                phase_mask: PhaseMask::empty(),
                chance: 100,
                flags: EventFlags::empty(),
                event: SmartEvent::Link,
            },
            action: SmartAction::Evade,
            target: SmartTarget::default(),
        }
    }

    #[test]
    fn source_kind_decodes_known_values_only() {
        assert_eq!(SourceKind::from_repr(0), Some(SourceKind::Creature));
        assert_eq!(SourceKind::from_repr(9), Some(SourceKind::TimedActionList));
        assert_eq!(SourceKind::from_repr(4), None);
        assert!(UNIMPLEMENTED_SOURCES.contains(&4));
        assert!(SourceKind::GameObject.is_game_object());
    }

    #[test]
    fn link_lookups_work_in_both_directions() {
        let chain = vec![rule(1, 0), rule(2, 1)];
        assert_eq!(find_linked_rule(&chain, 1).map(|r| r.id), Some(1));
        assert_eq!(find_link_source(&chain, 1).map(|r| r.id), Some(2));
        assert!(find_link_source(&chain, 2).is_none());
        assert!(find_linked_rule(&chain, 9).is_none());
    }

    #[test]
    fn store_counts_chains_and_rules() {
        let mut store = SmartScriptStore::new();
        store
            .chains
            .insert(ChainKey::new(SourceKind::Creature, 1), vec![rule(1, 0), rule(2, 1)]);
        store
            .chains
            .insert(ChainKey::new(SourceKind::GameObject, 1), vec![rule(1, 0)]);
        assert_eq!(store.entity_count(), 2);
        assert_eq!(store.rule_count(), 3);
        assert_eq!(store.get_chain(SourceKind::Creature, 1).map(<[_]>::len), Some(2));
        assert!(store.get_chain(SourceKind::AreaTrigger, 1).is_none());
    }
}
