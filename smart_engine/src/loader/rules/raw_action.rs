//! Raw action slot translation and validation.

use crate::loader::spell_index::{HelperKind, MAX_SPELL_EFFECTS, SPELL_EFFECT_KILL_CREDIT};
use crate::script::event::PHASE_MAX;
use crate::script::{ActionKind, MinMax, SmartAction, SmartEvent, SmartTarget, TargetKind};
use crate::validation::{Rejection, Warning};

use super::{RuleCheck, at_most, found, non_zero, ordered, percent, phase};

/// Summon types run from 1 to this value.
pub const MAX_TEMPSUMMON_TYPE: u32 = 8;
pub const MAX_SHEATH_STATE: u32 = 3;
/// Highest react state (aggressive).
pub const REACT_AGGRESSIVE: u32 = 2;
/// AI template ids stop below this value.
pub const SMARTAI_TEMPLATE_END: u32 = 6;
pub const MAX_POWERS: u32 = 5;
pub const QUEST_SPECIAL_FLAGS_EXPLORATION_OR_EVENT: u32 = 2;
/// Implicit spell target meaning "the caster itself".
pub const TARGET_UNIT_CASTER: u32 = 1;

/// Map the six raw action slots onto the payload for `kind`.
#[allow(clippy::too_many_lines)]
#[rustfmt::skip]
pub fn cook_action(kind: ActionKind, p: [u32; 6]) -> SmartAction {
    let flag = |i: usize| p[i] != 0;
    match kind {
        ActionKind::Talk => SmartAction::Talk { text_group: p[0], duration: p[1], use_talk_target: flag(2) },
        ActionKind::SetFaction => SmartAction::SetFaction { faction: p[0] },
        ActionKind::MorphToEntryOrModel => SmartAction::MorphToEntryOrModel { creature: p[0], model: p[1] },
        ActionKind::Sound => SmartAction::Sound { sound: p[0], only_self: flag(1) },
        ActionKind::PlayEmote => SmartAction::PlayEmote { emote: p[0] },
        ActionKind::FailQuest => SmartAction::FailQuest { quest: p[0] },
        ActionKind::AddQuest => SmartAction::AddQuest { quest: p[0] },
        ActionKind::SetReactState => SmartAction::SetReactState { state: p[0] },
        ActionKind::ActivateGameObject => SmartAction::ActivateGameObject,
        ActionKind::RandomEmote => SmartAction::RandomEmote { emotes: p },
        ActionKind::Cast => SmartAction::Cast { spell: p[0], cast_flags: p[1], trigger_flags: p[2] },
        ActionKind::SummonCreature => SmartAction::SummonCreature { creature: p[0], summon_type: p[1], duration: p[2], storage_id: p[3], attack_invoker: flag(4) },
        ActionKind::ThreatSinglePct => SmartAction::ThreatSinglePct { increase: p[0], decrease: p[1] },
        ActionKind::ThreatAllPct => SmartAction::ThreatAllPct { increase: p[0], decrease: p[1] },
        ActionKind::CallAreaExploredOrEventHappens => SmartAction::CallAreaExploredOrEventHappens { quest: p[0] },
        ActionKind::SetEmoteState => SmartAction::SetEmoteState { emote: p[0] },
        ActionKind::SetUnitFlag => SmartAction::SetUnitFlag { flag: p[0], field: p[1] },
        ActionKind::RemoveUnitFlag => SmartAction::RemoveUnitFlag { flag: p[0], field: p[1] },
        ActionKind::AutoAttack => SmartAction::AutoAttack { attack: flag(0) },
        ActionKind::AllowCombatMovement => SmartAction::AllowCombatMovement { allow: flag(0) },
        ActionKind::SetEventPhase => SmartAction::SetEventPhase { phase: p[0] },
        ActionKind::IncEventPhase => SmartAction::IncEventPhase { inc: p[0], dec: p[1] },
        ActionKind::Evade => SmartAction::Evade,
        ActionKind::FleeForAssist => SmartAction::FleeForAssist { with_emote: flag(0) },
        ActionKind::CallGroupEventHappens => SmartAction::CallGroupEventHappens { quest: p[0] },
        ActionKind::CombatStop => SmartAction::CombatStop,
        ActionKind::RemoveAurasFromSpell => SmartAction::RemoveAurasFromSpell { spell: p[0], charges: p[1] },
        ActionKind::Follow => SmartAction::Follow { distance: p[0], angle: p[1], entry: p[2], credit: p[3], credit_type: p[4] },
        ActionKind::RandomPhase => SmartAction::RandomPhase { phases: p },
        ActionKind::RandomPhaseRange => SmartAction::RandomPhaseRange { min: p[0], max: p[1] },
        ActionKind::ResetGameObject => SmartAction::ResetGameObject,
        ActionKind::CallKilledMonster => SmartAction::CallKilledMonster { creature: p[0] },
        ActionKind::SetInstanceData => SmartAction::SetInstanceData { field: p[0], data: p[1] },
        ActionKind::SetInstanceData64 => SmartAction::SetInstanceData64 { field: p[0] },
        ActionKind::UpdateTemplate => SmartAction::UpdateTemplate { creature: p[0], team: flag(1) },
        ActionKind::Die => SmartAction::Die,
        ActionKind::SetInCombatWithZone => SmartAction::SetInCombatWithZone,
        ActionKind::CallForHelp => SmartAction::CallForHelp { range: p[0], with_emote: flag(1) },
        ActionKind::SetSheath => SmartAction::SetSheath { sheath: p[0] },
        ActionKind::ForceDespawn => SmartAction::ForceDespawn { delay: p[0] },
        ActionKind::SetInvincibilityHpLevel => SmartAction::SetInvincibilityHpLevel { min_hp: p[0], percent: p[1] },
        ActionKind::MountToEntryOrModel => SmartAction::MountToEntryOrModel { creature: p[0], model: p[1] },
        ActionKind::SetIngamePhaseMask => SmartAction::SetIngamePhaseMask { mask: p[0] },
        ActionKind::SetData => SmartAction::SetData { field: p[0], data: p[1] },
        ActionKind::MoveForward => SmartAction::MoveForward { distance: p[0] },
        ActionKind::SetVisibility => SmartAction::SetVisibility { visible: flag(0) },
        ActionKind::SetActive => SmartAction::SetActive { active: flag(0) },
        ActionKind::AttackStart => SmartAction::AttackStart,
        ActionKind::SummonGameObject => SmartAction::SummonGameObject { entry: p[0], despawn_time: p[1] },
        ActionKind::KillUnit => SmartAction::KillUnit,
        ActionKind::ActivateTaxi => SmartAction::ActivateTaxi { path: p[0] },
        ActionKind::WaypointStart => SmartAction::WaypointStart { run: flag(0), path: p[1], repeat: flag(2), quest: p[3], despawn_time: p[4], react_state: p[5] },
        ActionKind::WaypointPause => SmartAction::WaypointPause { delay: p[0] },
        ActionKind::WaypointStop => SmartAction::WaypointStop { despawn_time: p[0], quest: p[1], fail: flag(2) },
        ActionKind::AddItem => SmartAction::AddItem { item: p[0], count: p[1] },
        ActionKind::RemoveItem => SmartAction::RemoveItem { item: p[0], count: p[1] },
        ActionKind::InstallAiTemplate => SmartAction::InstallAiTemplate { template: p[0], params: [p[1], p[2], p[3], p[4], p[5]] },
        ActionKind::SetRun => SmartAction::SetRun { run: flag(0) },
        ActionKind::SetFly => SmartAction::SetFly { fly: flag(0) },
        ActionKind::SetSwim => SmartAction::SetSwim { swim: flag(0) },
        ActionKind::Teleport => SmartAction::Teleport { map: p[0] },
        ActionKind::SetCounter => SmartAction::SetCounter { counter: p[0], value: p[1], reset: flag(2) },
        ActionKind::StoreTargetList => SmartAction::StoreTargetList { id: p[0] },
        ActionKind::WaypointResume => SmartAction::WaypointResume,
        ActionKind::SetOrientation => SmartAction::SetOrientation,
        ActionKind::CreateTimedEvent => SmartAction::CreateTimedEvent { id: p[0], timer: MinMax::new(p[1], p[2]), repeat: MinMax::new(p[3], p[4]), chance: p[5] },
        ActionKind::PlayMovie => SmartAction::PlayMovie { movie: p[0] },
        ActionKind::MoveToPos => SmartAction::MoveToPos { point: p[0] },
        ActionKind::RespawnTarget => SmartAction::RespawnTarget,
        ActionKind::Equip => SmartAction::Equip { entry: p[0], mask: p[1], slots: [p[2], p[3], p[4]] },
        ActionKind::CloseGossip => SmartAction::CloseGossip,
        ActionKind::TriggerTimedEvent => SmartAction::TriggerTimedEvent { id: p[0] },
        ActionKind::RemoveTimedEvent => SmartAction::RemoveTimedEvent { id: p[0] },
        ActionKind::AddAura => SmartAction::AddAura { spell: p[0] },
        ActionKind::OverrideScriptBaseObject => SmartAction::OverrideScriptBaseObject,
        ActionKind::ResetScriptBaseObject => SmartAction::ResetScriptBaseObject,
        ActionKind::CallScriptReset => SmartAction::CallScriptReset,
        ActionKind::SetRangedMovement => SmartAction::SetRangedMovement { distance: p[0], angle: p[1] },
        ActionKind::CallTimedActionList => SmartAction::CallTimedActionList { id: p[0], timer_type: p[1], allow_override: flag(2) },
        ActionKind::SetNpcFlag => SmartAction::SetNpcFlag { flag: p[0] },
        ActionKind::AddNpcFlag => SmartAction::AddNpcFlag { flag: p[0] },
        ActionKind::RemoveNpcFlag => SmartAction::RemoveNpcFlag { flag: p[0] },
        ActionKind::SimpleTalk => SmartAction::SimpleTalk { text_group: p[0] },
        ActionKind::InvokerCast => SmartAction::InvokerCast { spell: p[0], cast_flags: p[1], trigger_flags: p[2] },
        ActionKind::CrossCast => SmartAction::CrossCast { spell: p[0], cast_flags: p[1], caster_target_type: p[2], caster_params: [p[3], p[4], p[5]] },
        ActionKind::CallRandomTimedActionList => SmartAction::CallRandomTimedActionList { lists: p },
        ActionKind::CallRandomRangeTimedActionList => SmartAction::CallRandomRangeTimedActionList { first: p[0], last: p[1] },
        ActionKind::RandomMove => SmartAction::RandomMove { distance: p[0] },
        ActionKind::SetUnitFieldBytes1 => SmartAction::SetUnitFieldBytes1 { value: p[0], field: p[1] },
        ActionKind::RemoveUnitFieldBytes1 => SmartAction::RemoveUnitFieldBytes1 { value: p[0], field: p[1] },
        ActionKind::InterruptSpell => SmartAction::InterruptSpell { with_delayed: flag(0), spell: p[1], instant: flag(2) },
        ActionKind::SendGoCustomAnim => SmartAction::SendGoCustomAnim { anim: p[0] },
        ActionKind::SetDynamicFlag => SmartAction::SetDynamicFlag { flag: p[0] },
        ActionKind::AddDynamicFlag => SmartAction::AddDynamicFlag { flag: p[0] },
        ActionKind::RemoveDynamicFlag => SmartAction::RemoveDynamicFlag { flag: p[0] },
        ActionKind::JumpToPos => SmartAction::JumpToPos { speed_xy: p[0], speed_z: p[1] },
        ActionKind::SendGossipMenu => SmartAction::SendGossipMenu { menu: p[0], text: p[1] },
        ActionKind::GoSetLootState => SmartAction::GoSetLootState { state: p[0] },
        ActionKind::SendTargetToTarget => SmartAction::SendTargetToTarget { id: p[0] },
        ActionKind::SetHomePos => SmartAction::SetHomePos,
        ActionKind::SetHealthRegen => SmartAction::SetHealthRegen { regen: flag(0) },
        ActionKind::SetRoot => SmartAction::SetRoot { root: flag(0) },
        ActionKind::SetGoFlag => SmartAction::SetGoFlag { flag: p[0] },
        ActionKind::AddGoFlag => SmartAction::AddGoFlag { flag: p[0] },
        ActionKind::RemoveGoFlag => SmartAction::RemoveGoFlag { flag: p[0] },
        ActionKind::SummonCreatureGroup => SmartAction::SummonCreatureGroup { group: p[0], attack_invoker: flag(1) },
        ActionKind::SetPower => SmartAction::SetPower { power_type: p[0], value: p[1] },
        ActionKind::AddPower => SmartAction::AddPower { power_type: p[0], value: p[1] },
        ActionKind::RemovePower => SmartAction::RemovePower { power_type: p[0], value: p[1] },
        ActionKind::GameEventStop => SmartAction::GameEventStop { game_event: p[0] },
        ActionKind::GameEventStart => SmartAction::GameEventStart { game_event: p[0] },
        ActionKind::StartClosestWaypoint => SmartAction::StartClosestWaypoint { paths: p },
        ActionKind::RandomSound => SmartAction::RandomSound { sounds: [p[0], p[1], p[2], p[3], p[4]], only_self: flag(5) },
    }
}

impl RuleCheck<'_> {
    /// Validate a decoded action against its event and target.
    ///
    /// # Errors
    /// Returns the [`Rejection`] for the first parameter that is out of range
    /// or names a missing record.
    #[allow(clippy::too_many_lines)]
    pub(crate) fn check_action(
        &mut self,
        action: &SmartAction,
        event: &SmartEvent,
        target: &SmartTarget,
    ) -> Result<(), Rejection> {
        let catalogs = self.catalogs();
        match *action {
            SmartAction::Talk { text_group, .. } | SmartAction::SimpleTalk { text_group } => {
                self.check_text(text_group, event, target.kind())
            },
            SmartAction::SetFaction { faction } => {
                if faction == 0 {
                    Ok(())
                } else {
                    found("faction", faction, catalogs.has_faction(faction))
                }
            },
            SmartAction::MorphToEntryOrModel { creature, model }
            | SmartAction::MountToEntryOrModel { creature, model } => {
                self.optional_creature(creature)?;
                if model == 0 {
                    return Ok(());
                }
                if creature != 0 {
                    return Err(Rejection::ConflictingAlternatives("creature entry and model id"));
                }
                found("display model", model, catalogs.has_display_model(model))
            },
            SmartAction::Sound { sound, .. } => found("sound", sound, catalogs.has_sound(sound)),
            SmartAction::PlayEmote { emote } | SmartAction::SetEmoteState { emote } => {
                found("emote", emote, catalogs.has_emote(emote))
            },
            SmartAction::FailQuest { quest } | SmartAction::AddQuest { quest } => {
                non_zero("quest", quest)?;
                self.require_quest(quest)
            },
            SmartAction::ActivateTaxi { path } => found("taxi path", path, catalogs.has_taxi_path(path)),
            SmartAction::RandomEmote { emotes } => emotes
                .into_iter()
                .filter(|&emote| emote != 0)
                .try_for_each(|emote| found("emote", emote, catalogs.has_emote(emote))),
            SmartAction::RandomSound { sounds, .. } => sounds
                .into_iter()
                .filter(|&sound| sound != 0)
                .try_for_each(|sound| found("sound", sound, catalogs.has_sound(sound))),
            SmartAction::Cast { spell, .. } => {
                let info = self.spell(spell)?;
                for (effect, slot) in (0u8..).zip(info.effects.iter().take(MAX_SPELL_EFFECTS)) {
                    if slot.effect == SPELL_EFFECT_KILL_CREDIT && slot.implicit_target_a == TARGET_UNIT_CASTER {
                        self.warnings.push(Warning::KillCreditTargetsCaster { spell, effect });
                    }
                }
                Ok(())
            },
            SmartAction::AddAura { spell } | SmartAction::InvokerCast { spell, .. } => self.require_spell(spell),
            SmartAction::CallAreaExploredOrEventHappens { quest } | SmartAction::CallGroupEventHappens { quest } => {
                let info = catalogs
                    .quest(quest)
                    .ok_or(Rejection::MissingReference { what: "quest", id: quest })?;
                if info.special_flags & QUEST_SPECIAL_FLAGS_EXPLORATION_OR_EVENT == 0 {
                    return Err(Rejection::QuestNotExplorationEvent(quest));
                }
                Ok(())
            },
            SmartAction::SetEventPhase { phase: value } => phase(value),
            SmartAction::IncEventPhase { inc, dec } => {
                if inc == 0 && dec == 0 {
                    return Err(Rejection::ZeroValue("phase increment and decrement"));
                }
                let step = inc.max(dec);
                if step > PHASE_MAX {
                    return Err(Rejection::PhaseOutOfRange(step));
                }
                Ok(())
            },
            SmartAction::RemoveAurasFromSpell { spell, .. } => self.optional_spell(spell),
            SmartAction::RandomPhase { phases } => phases.into_iter().try_for_each(phase),
            SmartAction::RandomPhaseRange { min, max } => {
                phase(min)?;
                phase(max)?;
                ordered(MinMax::new(min, max))
            },
            SmartAction::SummonCreature {
                creature, summon_type, ..
            } => {
                self.require_creature(creature)?;
                self.note_redundant(HelperKind::SummonCreature, creature);
                if !(1..=MAX_TEMPSUMMON_TYPE).contains(&summon_type) {
                    return Err(Rejection::InvalidValue {
                        field: "summon type",
                        value: summon_type,
                    });
                }
                Ok(())
            },
            SmartAction::CallKilledMonster { creature } => {
                self.require_creature(creature)?;
                self.note_redundant(HelperKind::KillCredit, creature);
                if target.kind() == TargetKind::Position {
                    return Err(Rejection::IncompatibleTarget(TargetKind::Position));
                }
                Ok(())
            },
            SmartAction::UpdateTemplate { creature, .. } => self.require_creature(creature),
            SmartAction::SetSheath { sheath } => {
                if sheath >= MAX_SHEATH_STATE {
                    return Err(Rejection::InvalidValue {
                        field: "sheath state",
                        value: sheath,
                    });
                }
                Ok(())
            },
            SmartAction::SetReactState { state } => at_most("react state", state, REACT_AGGRESSIVE),
            SmartAction::SummonGameObject { entry, .. } => {
                self.require_gameobject(entry)?;
                self.note_redundant(HelperKind::SummonGameObject, entry);
                Ok(())
            },
            SmartAction::RemoveItem { item, count } => {
                found("item", item, catalogs.has_item(item))?;
                non_zero("item count", count)
            },
            SmartAction::AddItem { item, count } => {
                found("item", item, catalogs.has_item(item))?;
                self.note_redundant(HelperKind::CreateItem, item);
                non_zero("item count", count)
            },
            SmartAction::Teleport { map } => found("map", map, catalogs.has_map(map)),
            SmartAction::SetCounter { counter, value, .. } => {
                non_zero("counter id", counter)?;
                non_zero("counter value", value)
            },
            SmartAction::InstallAiTemplate { template, .. } => {
                if template >= SMARTAI_TEMPLATE_END {
                    return Err(Rejection::InvalidValue {
                        field: "AI template id",
                        value: template,
                    });
                }
                Ok(())
            },
            SmartAction::WaypointStop { quest, .. } => self.optional_quest(quest),
            SmartAction::WaypointStart {
                path, quest, react_state, ..
            } => {
                found("waypoint path", path, self.env.waypoints.contains_path(path))?;
                self.optional_quest(quest)?;
                at_most("react state", react_state, REACT_AGGRESSIVE)
            },
            SmartAction::CreateTimedEvent {
                timer, repeat, chance, ..
            } => {
                ordered(timer)?;
                ordered(repeat)?;
                percent(chance)
            },
            SmartAction::CallRandomRangeTimedActionList { first, last } => ordered(MinMax::new(first, last)),
            SmartAction::SetInvincibilityHpLevel { percent: value, .. } => percent(value),
            SmartAction::SetPower { power_type, .. }
            | SmartAction::AddPower { power_type, .. }
            | SmartAction::RemovePower { power_type, .. } => {
                if power_type >= MAX_POWERS {
                    return Err(Rejection::InvalidValue {
                        field: "power type",
                        value: power_type,
                    });
                }
                Ok(())
            },
            SmartAction::GameEventStop { game_event } | SmartAction::GameEventStart { game_event } => {
                if game_event < 1 {
                    return Err(Rejection::InvalidValue {
                        field: "game event",
                        value: game_event,
                    });
                }
                self.game_event(game_event)
            },
            SmartAction::Equip { entry, .. } => {
                if self.source.is_creature() && entry != 0 {
                    found("equipment", entry, catalogs.has_equipment(entry))
                } else {
                    Ok(())
                }
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cook_action_reads_slots_by_kind() {
        let action = cook_action(ActionKind::CreateTimedEvent, [4, 1000, 2000, 3000, 4000, 50]);
        assert_eq!(
            action,
            SmartAction::CreateTimedEvent {
                id: 4,
                timer: MinMax::new(1000, 2000),
                repeat: MinMax::new(3000, 4000),
                chance: 50
            }
        );

        let action = cook_action(ActionKind::RandomSound, [1, 2, 3, 4, 5, 1]);
        assert_eq!(
            action,
            SmartAction::RandomSound {
                sounds: [1, 2, 3, 4, 5],
                only_self: true
            }
        );
    }

    #[test]
    fn cook_action_keeps_kind_for_every_tag() {
        for raw in 0..=u8::MAX {
            if let Some(kind) = ActionKind::from_repr(raw) {
                assert_eq!(cook_action(kind, [0; 6]).kind(), kind);
            }
        }
    }
}
