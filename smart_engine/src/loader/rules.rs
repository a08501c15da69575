//! Rule table loader.
//!
//! Rows arrive raw from storage. Each one is decoded into a [`SmartRule`] and
//! checked against the reference catalogs before it is allowed into a chain;
//! a row that fails any check is logged and dropped, and the rest of the table
//! still loads. Warnings never drop a row.
//!
//! Checks run target first, then the event header and event, then the action.
//! The first failing check is the one reported.

pub mod raw_action;
pub mod raw_event;
pub mod raw_target;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use smart_data::{RuleRowDef, SpellDef};

use crate::catalog::Catalogs;
use crate::loader::spell_index::{HelperKind, SpellEffectIndex};
use crate::script::event::PHASE_MAX;
use crate::script::{
    ActionKind, CREATURE_AI_NAME, ChainKey, EventFlags, EventKind, EventSpec, GAMEOBJECT_AI_NAME, MinMax,
    MinMaxRepeat, PhaseMask, SmartEvent, SmartRule, SmartScriptStore, SmartTarget, SourceKind, TargetKind,
    TargetPosition, UNIMPLEMENTED_SOURCES, find_link_source, find_linked_rule,
};
use crate::validation::{Diagnostic, LoadReport, Rejection, RowContext, Warning};
use crate::waypoint::WaypointStore;

/// Read rule rows from a RON file.
///
/// # Errors
/// Returns an error if the file can't be read or parsed.
pub fn load_rule_rows(path: &Path) -> Result<Vec<RuleRowDef>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading rules from '{}'", path.display()))?;
    let rows: Vec<RuleRowDef> =
        ron::from_str(&text).with_context(|| format!("parsing rules from '{}'", path.display()))?;
    Ok(rows)
}

/// Knobs for one rule-load pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Warn when an action duplicates what a spell effect already does.
    pub warn_redundant_spells: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            warn_redundant_spells: true,
        }
    }
}

/// Read-only collaborators shared by every row of a pass.
struct LoadEnv<'a> {
    catalogs: &'a dyn Catalogs,
    helpers: &'a SpellEffectIndex,
    waypoints: &'a WaypointStore,
    options: LoadOptions,
}

/// Validation context for one row.
pub(crate) struct RuleCheck<'a> {
    env: &'a LoadEnv<'a>,
    row: &'a RuleRowDef,
    source: SourceKind,
    warnings: &'a mut Vec<Warning>,
}

impl SmartScriptStore {
    /// Rebuild every chain from `rows` with default options.
    pub fn load(&mut self, rows: &[RuleRowDef], catalogs: &dyn Catalogs, waypoints: &WaypointStore) -> LoadReport {
        self.load_with_options(rows, catalogs, waypoints, LoadOptions::default())
    }

    /// Rebuild every chain from `rows`.
    ///
    /// The previous contents are discarded first. Rows may arrive in any
    /// order; they are processed in storage order, `(owner, source, id, link)`.
    ///
    /// # Logging
    /// - `error!` for every dropped row
    /// - `warn!` for every integrity warning
    /// - `info!` with the final counts
    pub fn load_with_options(
        &mut self,
        rows: &[RuleRowDef],
        catalogs: &dyn Catalogs,
        waypoints: &WaypointStore,
        options: LoadOptions,
    ) -> LoadReport {
        let mut helpers = SpellEffectIndex::build(catalogs);
        let start = Instant::now();
        self.clear();

        let mut report = LoadReport::default();
        if rows.is_empty() {
            info!(">> Loaded 0 SmartAI scripts. Rule table is empty.");
            helpers.clear();
            return report;
        }

        let env = LoadEnv {
            catalogs,
            helpers: &helpers,
            waypoints,
            options,
        };

        let mut ordered: Vec<&RuleRowDef> = rows.iter().collect();
        ordered.sort_by_key(|row| row.storage_order());

        for row in ordered {
            let context = RowContext::from(row);
            let mut warnings = Vec::new();
            let outcome = build_rule(&env, row, &mut warnings).and_then(|rule| self.insert(rule));

            for warning in &warnings {
                warn!("SmartAIMgr: {context}: {warning}");
            }
            match outcome {
                Ok(new_chain) => {
                    if new_chain {
                        report.entities += 1;
                    }
                    report.rules += 1;
                    // only kept rows carry warnings into the report
                    report
                        .warnings
                        .extend(warnings.into_iter().map(|reason| Diagnostic { row: context, reason }));
                },
                Err(reason) => {
                    error!("SmartAIMgr: {context}: {reason}, skipped");
                    report.rejected.push(Diagnostic { row: context, reason });
                },
            }
        }

        self.check_links(&mut report);

        info!(
            ">> Loaded {} SmartAI scripts ({} rules) in {} ms",
            report.entities,
            report.rules,
            start.elapsed().as_millis()
        );
        helpers.clear();
        report
    }

    /// Append a rule to its chain. Returns true when the chain was created.
    fn insert(&mut self, rule: SmartRule) -> Result<bool, Rejection> {
        let chain = self.chains.entry(ChainKey::new(rule.source, rule.owner)).or_default();
        if chain.iter().any(|existing| existing.id == rule.id) {
            return Err(Rejection::DuplicateRuleId(rule.id));
        }
        let new_chain = chain.is_empty();
        chain.push(rule);
        Ok(new_chain)
    }

    /// Link integrity over the finished table. Both problems are warnings.
    fn check_links(&self, report: &mut LoadReport) {
        for (key, chain) in &self.chains {
            debug!("SmartAIMgr: chain {} {} holds {} rules", key.source, key.owner, chain.len());
            for rule in chain {
                let context = RowContext::from(rule);
                if rule.link != 0 && find_linked_rule(chain, rule.link).is_none() {
                    let warning = Warning::DanglingLink(rule.link);
                    warn!("SmartAIMgr: {context}: {warning}");
                    report.warnings.push(Diagnostic {
                        row: context,
                        reason: warning,
                    });
                }
                if rule.event_kind() == EventKind::Link && find_link_source(chain, rule.id).is_none() {
                    let warning = Warning::UnreachableLinkEvent;
                    warn!("SmartAIMgr: {context}: {warning}");
                    report.warnings.push(Diagnostic {
                        row: context,
                        reason: warning,
                    });
                }
            }
        }
    }
}

/// Decode and validate one row.
fn build_rule(env: &LoadEnv<'_>, row: &RuleRowDef, warnings: &mut Vec<Warning>) -> Result<SmartRule, Rejection> {
    let source = parse_source(row.source_type)?;
    resolve_owner(env.catalogs, source, row.owner_key)?;

    let event_kind = EventKind::from_repr(row.event_type).ok_or(Rejection::UnknownEventKind(row.event_type))?;
    let action_kind = ActionKind::from_repr(row.action_type).ok_or(Rejection::UnknownActionKind(row.action_type))?;
    let target_kind = TargetKind::from_repr(row.target_type).ok_or(Rejection::UnknownTargetKind(row.target_type))?;

    let mut check = RuleCheck {
        env,
        row,
        source,
        warnings,
    };

    let position = TargetPosition {
        x: row.target_x,
        y: row.target_y,
        z: row.target_z,
        o: row.target_o,
    };
    let target = raw_target::cook_target(target_kind, row.target_params(), position);
    check.check_target(&target, action_kind)?;

    let event = check.cook_event_spec(event_kind, &target)?;

    let action = raw_action::cook_action(action_kind, row.action_params());
    check.check_action(&action, &event.event, &target)?;

    Ok(SmartRule {
        owner: row.owner_key,
        source,
        id: row.id,
        link: row.link,
        event,
        action,
        target,
    })
}

fn parse_source(raw: u8) -> Result<SourceKind, Rejection> {
    SourceKind::from_repr(raw).ok_or(if UNIMPLEMENTED_SOURCES.contains(&raw) {
        Rejection::UnimplementedSourceKind(raw)
    } else {
        Rejection::UnknownSourceKind(raw)
    })
}

/// Confirm the owner exists and is driven by the rule-based AI.
fn resolve_owner(catalogs: &dyn Catalogs, source: SourceKind, owner: i32) -> Result<(), Rejection> {
    match source {
        SourceKind::Creature => {
            let entry = if owner < 0 {
                let guid = owner.unsigned_abs();
                catalogs
                    .creature_spawn(guid)
                    .ok_or(Rejection::OwnerNotFound {
                        what: "creature guid",
                        id: guid,
                    })?
                    .entry
            } else {
                owner.unsigned_abs()
            };
            let template = catalogs.creature_template(entry).ok_or(Rejection::OwnerNotFound {
                what: "creature entry",
                id: entry,
            })?;
            expect_ai("creature entry", entry, &template.ai_name, CREATURE_AI_NAME)
        },
        SourceKind::GameObject => {
            let entry = if owner < 0 {
                let guid = owner.unsigned_abs();
                catalogs
                    .gameobject_spawn(guid)
                    .ok_or(Rejection::OwnerNotFound {
                        what: "gameobject guid",
                        id: guid,
                    })?
                    .entry
            } else {
                owner.unsigned_abs()
            };
            let template = catalogs.gameobject_template(entry).ok_or(Rejection::OwnerNotFound {
                what: "gameobject entry",
                id: entry,
            })?;
            expect_ai("gameobject entry", entry, &template.ai_name, GAMEOBJECT_AI_NAME)
        },
        SourceKind::AreaTrigger => {
            if owner < 0 {
                return Err(Rejection::NegativeOwner { script: source, owner });
            }
            let id = owner.unsigned_abs();
            if catalogs.has_area_trigger(id) {
                Ok(())
            } else {
                Err(Rejection::OwnerNotFound {
                    what: "area trigger",
                    id,
                })
            }
        },
        SourceKind::TimedActionList => Ok(()),
    }
}

fn expect_ai(what: &'static str, id: u32, found: &str, expected: &'static str) -> Result<(), Rejection> {
    if found == expected {
        Ok(())
    } else {
        Err(Rejection::OwnerWrongAi { what, id, expected })
    }
}

pub(crate) fn ordered(pair: MinMax) -> Result<(), Rejection> {
    if pair.is_ordered() {
        Ok(())
    } else {
        Err(Rejection::MinGreaterThanMax {
            min: pair.min,
            max: pair.max,
        })
    }
}

pub(crate) fn percent(value: u32) -> Result<(), Rejection> {
    if value > 100 {
        Err(Rejection::PercentOutOfRange(value))
    } else {
        Ok(())
    }
}

pub(crate) fn non_zero(field: &'static str, value: u32) -> Result<(), Rejection> {
    if value == 0 {
        Err(Rejection::ZeroValue(field))
    } else {
        Ok(())
    }
}

pub(crate) fn phase(value: u32) -> Result<(), Rejection> {
    if value >= PHASE_MAX {
        Err(Rejection::PhaseOutOfRange(value))
    } else {
        Ok(())
    }
}

pub(crate) fn at_most(field: &'static str, value: u32, max: u32) -> Result<(), Rejection> {
    if value > max {
        Err(Rejection::InvalidValue { field, value })
    } else {
        Ok(())
    }
}

fn found(what: &'static str, id: u32, exists: bool) -> Result<(), Rejection> {
    if exists {
        Ok(())
    } else {
        Err(Rejection::MissingReference { what, id })
    }
}

impl<'a> RuleCheck<'a> {
    /// Header checks plus the event itself. Timed action lists always run on
    /// an out-of-combat update timer, whatever the stored event kind says.
    fn cook_event_spec(&mut self, kind: EventKind, target: &SmartTarget) -> Result<EventSpec, Rejection> {
        let row = self.row;
        if !self.source.is_timed_action_list() && !kind.allowed_sources().intersects(self.source.mask()) {
            return Err(Rejection::EventNotAllowedForSource {
                event: kind,
                script: self.source,
            });
        }
        let phase_mask =
            PhaseMask::from_bits(row.event_phase_mask).ok_or(Rejection::InvalidPhaseMask(row.event_phase_mask))?;
        if row.event_flags > EventFlags::all().bits() {
            return Err(Rejection::InvalidEventFlags(row.event_flags));
        }
        let flags = EventFlags::from_bits_retain(row.event_flags);
        if row.event_chance > 100 {
            return Err(Rejection::ChanceOutOfRange(row.event_chance));
        }
        if row.link != 0 && row.link == row.id {
            return Err(Rejection::SelfLink(row.id));
        }

        let event = if self.source.is_timed_action_list() {
            let timer = MinMaxRepeat::from_params(&row.event_params());
            ordered(timer.initial)?;
            ordered(timer.repeat)?;
            SmartEvent::UpdateOoc { timer }
        } else {
            let event = raw_event::cook_event(kind, &row.event_params());
            self.check_event(&event, target.kind())?;
            event
        };

        Ok(EventSpec {
            phase_mask,
            chance: row.event_chance,
            flags,
            event,
        })
    }

    fn catalogs(&self) -> &'a dyn Catalogs {
        self.env.catalogs
    }

    fn spell(&self, id: u32) -> Result<&'a SpellDef, Rejection> {
        self.catalogs()
            .spell(id)
            .ok_or(Rejection::MissingReference { what: "spell", id })
    }

    fn require_spell(&self, id: u32) -> Result<(), Rejection> {
        self.spell(id).map(|_| ())
    }

    fn optional_spell(&self, id: u32) -> Result<(), Rejection> {
        if id == 0 { Ok(()) } else { self.require_spell(id) }
    }

    fn require_creature(&self, entry: u32) -> Result<(), Rejection> {
        found("creature entry", entry, self.catalogs().creature_template(entry).is_some())
    }

    fn optional_creature(&self, entry: u32) -> Result<(), Rejection> {
        if entry == 0 { Ok(()) } else { self.require_creature(entry) }
    }

    fn require_gameobject(&self, entry: u32) -> Result<(), Rejection> {
        found("gameobject entry", entry, self.catalogs().gameobject_template(entry).is_some())
    }

    fn optional_gameobject(&self, entry: u32) -> Result<(), Rejection> {
        if entry == 0 { Ok(()) } else { self.require_gameobject(entry) }
    }

    fn require_quest(&self, id: u32) -> Result<(), Rejection> {
        found("quest", id, self.catalogs().quest(id).is_some())
    }

    fn optional_quest(&self, id: u32) -> Result<(), Rejection> {
        if id == 0 { Ok(()) } else { self.require_quest(id) }
    }

    fn game_event(&self, id: u32) -> Result<(), Rejection> {
        match self.catalogs().game_event(id) {
            Some(event) if event.is_valid() => Ok(()),
            Some(_) => Err(Rejection::InvalidValue {
                field: "game event",
                value: id,
            }),
            None => Err(Rejection::MissingReference { what: "game event", id }),
        }
    }

    /// Creature entry of the rule's owner; spawn owners go through their spawn.
    fn owner_creature_entry(&self) -> Result<u32, Rejection> {
        let owner = self.row.owner_key;
        if owner < 0 {
            let guid = owner.unsigned_abs();
            self.catalogs()
                .creature_spawn(guid)
                .map(|spawn| spawn.entry)
                .ok_or(Rejection::MissingReference {
                    what: "creature guid",
                    id: guid,
                })
        } else {
            Ok(owner.unsigned_abs())
        }
    }

    /// A text group must exist for the creature that will speak it.
    ///
    /// Only creature owners are checked, and targets that pick some other
    /// creature at runtime are left alone.
    fn check_text(&self, group: u32, event: &SmartEvent, target: TargetKind) -> Result<(), Rejection> {
        if !self.source.is_creature() {
            return Ok(());
        }
        let entry = if let SmartEvent::TextOver { creature, .. } = event {
            *creature
        } else {
            match target {
                TargetKind::CreatureRange | TargetKind::CreatureDistance | TargetKind::ClosestCreature => {
                    return Ok(());
                },
                _ => self.owner_creature_entry()?,
            }
        };
        let exists = entry != 0
            && u8::try_from(group).is_ok_and(|group| self.catalogs().creature_text_exists(entry, group));
        found("creature text group", group, exists)
    }

    /// Flag an action that some spell effect already covers.
    fn note_redundant(&mut self, kind: HelperKind, id: u32) {
        let env = self.env;
        if !env.options.warn_redundant_spells {
            return;
        }
        for hit in env.helpers.lookup(kind, id) {
            self.warnings.push(Warning::RedundantSpellEffect {
                helper: kind,
                id,
                spell: hit.spell,
                effect: hit.effect,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::loader::spell_index::{SPELL_EFFECT_CREATE_ITEM, SPELL_EFFECT_KILL_CREDIT};
    use super::raw_action::TARGET_UNIT_CASTER;
    use smart_data::{CatalogDef, CreatureTextDef, SpawnDef, SpellEffectDef, TemplateDef};

    fn catalogs() -> CatalogStore {
        CatalogStore::from_def(&CatalogDef {
            spells: vec![
                SpellDef {
                    id: 100,
                    school_mask: 0x4,
                    effects: vec![SpellEffectDef {
                        effect: 28,
                        misc_value: 500,
                        ..SpellEffectDef::default()
                    }],
                },
                SpellDef {
                    id: 101,
                    school_mask: 0x4,
                    effects: vec![SpellEffectDef {
                        effect: SPELL_EFFECT_KILL_CREDIT,
                        implicit_target_a: TARGET_UNIT_CASTER,
                        misc_value: 500,
                        ..SpellEffectDef::default()
                    }],
                },
                SpellDef {
                    id: 102,
                    school_mask: 0x1,
                    effects: vec![SpellEffectDef {
                        effect: SPELL_EFFECT_CREATE_ITEM,
                        item_type: 60,
                        ..SpellEffectDef::default()
                    }],
                },
            ],
            creature_templates: vec![
                TemplateDef {
                    entry: 500,
                    ai_name: CREATURE_AI_NAME.into(),
                },
                TemplateDef {
                    entry: 501,
                    ai_name: "NullAI".into(),
                },
            ],
            creature_spawns: vec![SpawnDef { guid: 77, entry: 500 }],
            gameobject_templates: vec![TemplateDef {
                entry: 900,
                ai_name: GAMEOBJECT_AI_NAME.into(),
            }],
            gameobject_spawns: vec![SpawnDef { guid: 88, entry: 900 }],
            creature_texts: vec![CreatureTextDef { entry: 500, group: 0 }],
            area_triggers: vec![4000],
            items: vec![60],
            display_models: vec![11],
            ..CatalogDef::default()
        })
    }

    fn row(owner_key: i32, id: u16) -> RuleRowDef {
        RuleRowDef {
            owner_key,
            id,
            event_type: EventKind::Aggro as u8,
            action_type: ActionKind::Evade as u8,
            ..RuleRowDef::default()
        }
    }

    fn load(rows: &[RuleRowDef]) -> (SmartScriptStore, LoadReport) {
        let mut store = SmartScriptStore::new();
        let report = store.load(rows, &catalogs(), &WaypointStore::new());
        (store, report)
    }

    fn rejection(rows: &[RuleRowDef]) -> Rejection {
        let (_, report) = load(rows);
        report.rejected.first().map(|d| d.reason.clone()).expect("row rejected")
    }

    #[test]
    fn owner_resolution_by_entry_and_spawn() {
        let (store, report) = load(&[row(500, 1), row(-77, 1)]);
        assert!(report.rejected.is_empty());
        assert_eq!(report.entities, 2);
        assert!(store.get_chain(SourceKind::Creature, -77).is_some());
    }

    #[test]
    fn gameobject_owner_resolves_through_its_spawn() {
        let mut spawned = row(-88, 1);
        spawned.source_type = SourceKind::GameObject as u8;
        spawned.event_type = EventKind::UpdateOoc as u8;
        let mut unknown = spawned.clone();
        unknown.owner_key = -89;

        let (store, report) = load(&[spawned, unknown]);
        assert!(store.get_chain(SourceKind::GameObject, -88).is_some());
        assert_eq!(report.rules, 1);
        assert!(report.was_rejected_for(-89, 1, |r| *r
            == Rejection::OwnerNotFound {
                what: "gameobject guid",
                id: 89
            }));
    }

    #[test]
    fn owner_with_wrong_ai_is_rejected() {
        assert_eq!(
            rejection(&[row(501, 1)]),
            Rejection::OwnerWrongAi {
                what: "creature entry",
                id: 501,
                expected: CREATURE_AI_NAME
            }
        );
        assert_eq!(
            rejection(&[row(-78, 1)]),
            Rejection::OwnerNotFound {
                what: "creature guid",
                id: 78
            }
        );
    }

    #[test]
    fn source_kinds_outside_the_enum_are_rejected() {
        let mut unimplemented = row(500, 1);
        unimplemented.source_type = 5;
        assert_eq!(rejection(&[unimplemented]), Rejection::UnimplementedSourceKind(5));
        let mut invalid = row(500, 1);
        invalid.source_type = 12;
        assert_eq!(rejection(&[invalid]), Rejection::UnknownSourceKind(12));
    }

    #[test]
    fn area_trigger_owner_must_be_known_and_positive() {
        let mut ok = row(4000, 1);
        ok.source_type = SourceKind::AreaTrigger as u8;
        ok.event_type = EventKind::AreaTriggerOnTrigger as u8;
        let (_, report) = load(&[ok.clone()]);
        assert!(report.rejected.is_empty());

        let mut negative = ok;
        negative.owner_key = -4000;
        assert!(matches!(rejection(&[negative]), Rejection::NegativeOwner { .. }));
    }

    #[test]
    fn header_checks_reject_bad_masks_and_self_links() {
        let mut phase = row(500, 1);
        phase.event_phase_mask = 0x40;
        assert_eq!(rejection(&[phase]), Rejection::InvalidPhaseMask(0x40));

        let mut chance = row(500, 1);
        chance.event_chance = 101;
        assert_eq!(rejection(&[chance]), Rejection::ChanceOutOfRange(101));

        let mut self_link = row(500, 4);
        self_link.link = 4;
        assert_eq!(rejection(&[self_link]), Rejection::SelfLink(4));

        let mut wrong_source = row(900, 1);
        wrong_source.source_type = SourceKind::GameObject as u8;
        assert!(matches!(
            rejection(&[wrong_source]),
            Rejection::EventNotAllowedForSource { .. }
        ));
    }

    #[test]
    fn event_flags_allow_reserved_bits_below_the_top_flag() {
        let mut reserved = row(500, 1);
        reserved.event_flags = 0x60;
        let mut past_top = row(500, 2);
        past_top.event_flags = 0xA0;

        let (store, report) = load(&[reserved, past_top]);
        let chain = store.get_chain(SourceKind::Creature, 500).expect("chain");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].event.flags.bits(), 0x60);
        assert!(report.was_rejected_for(500, 2, |r| *r == Rejection::InvalidEventFlags(0xA0)));
    }

    #[test]
    fn timed_action_list_forces_update_ooc() {
        let mut tal = row(12345, 1);
        tal.source_type = SourceKind::TimedActionList as u8;
        tal.event_type = EventKind::Aggro as u8;
        tal.event_param1 = 1000;
        tal.event_param2 = 2000;
        let (store, report) = load(&[tal.clone()]);
        assert!(report.rejected.is_empty());
        let chain = store
            .get_chain(SourceKind::TimedActionList, 12345)
            .expect("tal chain");
        assert_eq!(chain[0].event_kind(), EventKind::UpdateOoc);

        tal.event_param1 = 3000;
        assert_eq!(
            rejection(&[tal]),
            Rejection::MinGreaterThanMax { min: 3000, max: 2000 }
        );
    }

    #[test]
    fn duplicate_rule_id_in_chain_is_rejected() {
        let mut second = row(500, 1);
        second.link = 2;
        let (store, report) = load(&[row(500, 1), second]);
        assert_eq!(store.rule_count(), 1);
        assert!(report.was_rejected_for(500, 1, |r| *r == Rejection::DuplicateRuleId(1)));
    }

    #[test]
    fn link_problems_are_warnings_only() {
        let mut dangling = row(500, 1);
        dangling.link = 9;
        let mut orphan = row(500, 2);
        orphan.event_type = EventKind::Link as u8;
        let (store, report) = load(&[dangling, orphan]);
        assert_eq!(store.rule_count(), 2);
        let reasons: Vec<_> = report.warnings.iter().map(|d| d.reason.clone()).collect();
        assert!(reasons.contains(&Warning::DanglingLink(9)));
        assert!(reasons.contains(&Warning::UnreachableLinkEvent));
    }

    #[test]
    fn redundant_summon_warning_respects_option() {
        let mut summon = row(500, 1);
        summon.action_type = ActionKind::SummonCreature as u8;
        summon.action_param1 = 500;
        summon.action_param2 = 1;

        let (_, report) = load(&[summon.clone()]);
        assert!(report.warnings.iter().any(|d| matches!(
            d.reason,
            Warning::RedundantSpellEffect {
                helper: HelperKind::SummonCreature,
                spell: 100,
                ..
            }
        )));

        let mut store = SmartScriptStore::new();
        let quiet = store.load_with_options(
            &[summon],
            &catalogs(),
            &WaypointStore::new(),
            LoadOptions {
                warn_redundant_spells: false,
            },
        );
        assert!(quiet.warnings.is_empty());
        assert_eq!(quiet.rules, 1);
    }

    #[test]
    fn rejected_row_leaves_no_warnings_in_report() {
        let mut summon = row(500, 1);
        summon.action_type = ActionKind::SummonCreature as u8;
        summon.action_param1 = 500;
        summon.action_param2 = 99;

        let (_, report) = load(&[summon]);
        assert_eq!(report.rules, 0);
        assert!(report.was_rejected_for(500, 1, |r| *r
            == Rejection::InvalidValue {
                field: "summon type",
                value: 99
            }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn kill_credit_and_item_helpers_are_flagged() {
        let mut credit = row(500, 1);
        credit.action_type = ActionKind::CallKilledMonster as u8;
        credit.action_param1 = 500;
        credit.target_type = TargetKind::SelfUnit as u8;

        let mut item = row(500, 2);
        item.action_type = ActionKind::AddItem as u8;
        item.action_param1 = 60;
        item.action_param2 = 1;

        let (_, report) = load(&[credit, item]);
        assert_eq!(report.rules, 2);
        let reasons: Vec<_> = report.warnings.iter().map(|d| d.reason.clone()).collect();
        assert!(reasons.contains(&Warning::RedundantSpellEffect {
            helper: HelperKind::KillCredit,
            id: 500,
            spell: 101,
            effect: 0
        }));
        assert!(reasons.contains(&Warning::RedundantSpellEffect {
            helper: HelperKind::CreateItem,
            id: 60,
            spell: 102,
            effect: 0
        }));
    }

    #[test]
    fn kill_credit_rejects_positional_target() {
        let mut credit = row(500, 1);
        credit.action_type = ActionKind::CallKilledMonster as u8;
        credit.action_param1 = 500;
        credit.target_type = TargetKind::Position as u8;
        assert_eq!(
            rejection(&[credit]),
            Rejection::IncompatibleTarget(TargetKind::Position)
        );
    }

    #[test]
    fn cast_warns_when_kill_credit_hits_caster() {
        let mut cast = row(500, 1);
        cast.action_type = ActionKind::Cast as u8;
        cast.action_param1 = 101;
        let (_, report) = load(&[cast]);
        assert_eq!(report.rules, 1);
        assert!(
            report
                .warnings
                .iter()
                .any(|d| d.reason == Warning::KillCreditTargetsCaster { spell: 101, effect: 0 })
        );
    }

    #[test]
    fn orientation_past_full_turn_is_kept_with_warning() {
        let mut turned = row(500, 1);
        turned.target_o = 7.0;
        let (store, report) = load(&[turned]);
        assert_eq!(store.rule_count(), 1);
        assert!(
            report
                .warnings
                .iter()
                .any(|d| d.row.id == 1 && d.reason == Warning::OrientationOutOfRange(7.0))
        );
    }

    #[test]
    fn talk_needs_text_for_owner_creature() {
        let mut talk = row(-77, 1);
        talk.action_type = ActionKind::Talk as u8;
        let (_, report) = load(&[talk.clone()]);
        assert!(report.rejected.is_empty());

        talk.action_param1 = 3;
        assert_eq!(
            rejection(&[talk.clone()]),
            Rejection::MissingReference {
                what: "creature text group",
                id: 3
            }
        );

        // some other creature speaks
        talk.target_type = TargetKind::ClosestCreature as u8;
        let (_, report) = load(&[talk]);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn empty_table_clears_previous_contents() {
        let mut store = SmartScriptStore::new();
        let catalogs = catalogs();
        let waypoints = WaypointStore::new();
        store.load(&[row(500, 1)], &catalogs, &waypoints);
        assert_eq!(store.rule_count(), 1);
        let report = store.load(&[], &catalogs, &waypoints);
        assert!(store.is_empty());
        assert_eq!(report.rules, 0);
    }
}
