//! Raw event slot translation and validation.

use crate::script::event::RespawnCondition;
use crate::script::{EventKind, MinMax, MinMaxRepeat, SmartEvent, TargetKind};
use crate::validation::Rejection;

use super::{RuleCheck, at_most, found, non_zero, ordered, percent};

/// Highest motion type a movement-inform event can wait for.
pub const NULL_MOTION_TYPE: u32 = 16;
/// Highest effect slot index.
pub const EFFECT_2: u32 = 2;
/// Highest event id an `ActionDone` event can listen for.
pub const EVENT_CHARGE: u32 = 1003;

/// Map the five raw event slots onto the payload for `kind`.
#[allow(clippy::too_many_lines)]
#[rustfmt::skip]
pub fn cook_event(kind: EventKind, p: &[u32; 5]) -> SmartEvent {
    let timers = MinMaxRepeat::from_params(p);
    let pair = |i: usize| MinMax::new(p[i], p[i + 1]);
    match kind {
        EventKind::UpdateIc => SmartEvent::UpdateIc { timer: timers },
        EventKind::UpdateOoc => SmartEvent::UpdateOoc { timer: timers },
        EventKind::HealthPct => SmartEvent::HealthPct { pct: timers },
        EventKind::ManaPct => SmartEvent::ManaPct { pct: timers },
        EventKind::Aggro => SmartEvent::Aggro,
        EventKind::Kill => SmartEvent::Kill { cooldown: pair(0), player_only: p[2] != 0, creature: p[3] },
        EventKind::Death => SmartEvent::Death,
        EventKind::Evade => SmartEvent::Evade,
        EventKind::SpellHit => SmartEvent::SpellHit { spell: p[0], school: p[1], cooldown: pair(2) },
        EventKind::Range => SmartEvent::Range { range: timers },
        EventKind::OocLos => SmartEvent::OocLos { no_hostile: p[0] != 0, max_dist: p[1], cooldown: pair(2) },
        EventKind::Respawn => SmartEvent::Respawn { condition: p[0], map: p[1], area: p[2] },
        EventKind::TargetHealthPct => SmartEvent::TargetHealthPct { pct: timers },
        EventKind::VictimCasting => SmartEvent::VictimCasting { repeat: pair(0), spell: p[2] },
        EventKind::FriendlyHealth => SmartEvent::FriendlyHealth { hp_deficit: p[0], radius: p[1], repeat: pair(2) },
        EventKind::FriendlyIsCc => SmartEvent::FriendlyIsCc { radius: p[0], repeat: pair(1) },
        EventKind::FriendlyMissingBuff => SmartEvent::FriendlyMissingBuff { spell: p[0], radius: p[1], repeat: pair(2) },
        EventKind::SummonedUnit => SmartEvent::SummonedUnit { creature: p[0], cooldown: pair(1) },
        EventKind::TargetManaPct => SmartEvent::TargetManaPct { pct: timers },
        EventKind::AcceptedQuest => SmartEvent::AcceptedQuest { quest: p[0] },
        EventKind::RewardQuest => SmartEvent::RewardQuest { quest: p[0] },
        EventKind::ReachedHome => SmartEvent::ReachedHome,
        EventKind::ReceiveEmote => SmartEvent::ReceiveEmote { emote: p[0], cooldown: pair(1) },
        EventKind::HasAura => SmartEvent::HasAura { spell: p[0], count: p[1], repeat: pair(2) },
        EventKind::TargetBuffed => SmartEvent::TargetBuffed { spell: p[0], count: p[1], repeat: pair(2) },
        EventKind::Reset => SmartEvent::Reset,
        EventKind::IcLos => SmartEvent::IcLos { no_hostile: p[0] != 0, max_dist: p[1], cooldown: pair(2) },
        EventKind::PassengerBoarded => SmartEvent::PassengerBoarded { repeat: pair(0) },
        EventKind::PassengerRemoved => SmartEvent::PassengerRemoved { repeat: pair(0) },
        EventKind::Charmed => SmartEvent::Charmed { on_remove: p[0] != 0 },
        EventKind::CharmedTarget => SmartEvent::CharmedTarget,
        EventKind::SpellHitTarget => SmartEvent::SpellHitTarget { spell: p[0], school: p[1], cooldown: pair(2) },
        EventKind::Damaged => SmartEvent::Damaged { damage: timers },
        EventKind::DamagedTarget => SmartEvent::DamagedTarget { damage: timers },
        EventKind::MovementInform => SmartEvent::MovementInform { motion_type: p[0], point: p[1] },
        EventKind::SummonDespawned => SmartEvent::SummonDespawned { creature: p[0], cooldown: pair(1) },
        EventKind::CorpseRemoved => SmartEvent::CorpseRemoved,
        EventKind::AiInit => SmartEvent::AiInit,
        EventKind::DataSet => SmartEvent::DataSet { id: p[0], value: p[1], cooldown: pair(2) },
        EventKind::WaypointStart => SmartEvent::WaypointStart { point: p[0], path: p[1] },
        EventKind::WaypointReached => SmartEvent::WaypointReached { point: p[0], path: p[1] },
        EventKind::TransportAddPlayer => SmartEvent::TransportAddPlayer,
        EventKind::TransportAddCreature => SmartEvent::TransportAddCreature { creature: p[0] },
        EventKind::TransportRemovePlayer => SmartEvent::TransportRemovePlayer,
        EventKind::TransportRelocate => SmartEvent::TransportRelocate { point: p[0] },
        EventKind::InstancePlayerEnter => SmartEvent::InstancePlayerEnter { team: p[0], cooldown: pair(1) },
        EventKind::AreaTriggerOnTrigger => SmartEvent::AreaTriggerOnTrigger { trigger: p[0] },
        EventKind::QuestAccepted => SmartEvent::QuestAccepted,
        EventKind::QuestObjCompletion => SmartEvent::QuestObjCompletion,
        EventKind::QuestCompletion => SmartEvent::QuestCompletion,
        EventKind::QuestRewarded => SmartEvent::QuestRewarded,
        EventKind::QuestFail => SmartEvent::QuestFail,
        EventKind::TextOver => SmartEvent::TextOver { text_group: p[0], creature: p[1] },
        EventKind::ReceiveHeal => SmartEvent::ReceiveHeal { heal: timers },
        EventKind::JustSummoned => SmartEvent::JustSummoned,
        EventKind::WaypointPaused => SmartEvent::WaypointPaused { point: p[0], path: p[1] },
        EventKind::WaypointResumed => SmartEvent::WaypointResumed { point: p[0], path: p[1] },
        EventKind::WaypointStopped => SmartEvent::WaypointStopped { point: p[0], path: p[1] },
        EventKind::WaypointEnded => SmartEvent::WaypointEnded { point: p[0], path: p[1] },
        EventKind::TimedEventTriggered => SmartEvent::TimedEventTriggered { id: p[0] },
        EventKind::Update => SmartEvent::Update { timer: timers },
        EventKind::Link => SmartEvent::Link,
        EventKind::GossipSelect => SmartEvent::GossipSelect { menu: p[0], option: p[1] },
        EventKind::JustCreated => SmartEvent::JustCreated,
        EventKind::GossipHello => SmartEvent::GossipHello,
        EventKind::FollowCompleted => SmartEvent::FollowCompleted,
        EventKind::DummyEffect => SmartEvent::DummyEffect { spell: p[0], effect_index: p[1] },
        EventKind::IsBehindTarget => SmartEvent::IsBehindTarget { cooldown: pair(0) },
        EventKind::GameEventStart => SmartEvent::GameEventStart { game_event: p[0] },
        EventKind::GameEventEnd => SmartEvent::GameEventEnd { game_event: p[0] },
        EventKind::GoStateChanged => SmartEvent::GoStateChanged { state: p[0] },
        EventKind::GoEventInform => SmartEvent::GoEventInform { event_id: p[0] },
        EventKind::ActionDone => SmartEvent::ActionDone { event_id: p[0] },
        EventKind::OnSpellClick => SmartEvent::OnSpellClick,
        EventKind::FriendlyHealthPct => SmartEvent::FriendlyHealthPct { min_hp_pct: p[0], max_hp_pct: p[1], repeat: pair(2) },
        EventKind::DistanceCreature => SmartEvent::DistanceCreature { guid: p[0], entry: p[1], distance: p[2], repeat: p[3] },
        EventKind::DistanceGameObject => SmartEvent::DistanceGameObject { guid: p[0], entry: p[1], distance: p[2], repeat: p[3] },
        EventKind::CounterSet => SmartEvent::CounterSet { counter: p[0], value: p[1], cooldown: pair(2) },
    }
}

/// Exactly one of a guid/entry pair must be set.
fn one_of(what: &'static str, guid: u32, entry: u32) -> Result<(), Rejection> {
    match (guid, entry) {
        (0, 0) => Err(Rejection::MissingAlternative(what)),
        (0, _) | (_, 0) => Ok(()),
        _ => Err(Rejection::ConflictingAlternatives(what)),
    }
}

impl RuleCheck<'_> {
    /// Validate a decoded event.
    ///
    /// # Errors
    /// Returns the [`Rejection`] for the first parameter that is out of range
    /// or names a missing record.
    pub(crate) fn check_event(&self, event: &SmartEvent, target: TargetKind) -> Result<(), Rejection> {
        for pair in event.timer_pairs() {
            ordered(pair)?;
        }
        for value in event.percentages() {
            percent(value)?;
        }

        let catalogs = self.catalogs();
        match *event {
            SmartEvent::SpellHit { spell, school, .. } | SmartEvent::SpellHitTarget { spell, school, .. } => {
                if spell == 0 {
                    return Ok(());
                }
                let info = self.spell(spell)?;
                if school != 0 && school & info.school_mask != info.school_mask {
                    return Err(Rejection::SpellSchoolMismatch { spell, school });
                }
                Ok(())
            },
            SmartEvent::Respawn { condition, map, area } => match RespawnCondition::from_repr(condition) {
                Some(RespawnCondition::Map) => found("map", map, catalogs.has_map(map)),
                Some(RespawnCondition::Area) => found("area", area, catalogs.has_area(area)),
                _ => Ok(()),
            },
            SmartEvent::FriendlyHealth { radius, .. } => non_zero("radius", radius),
            SmartEvent::FriendlyMissingBuff { spell, radius, .. } => {
                self.require_spell(spell)?;
                non_zero("radius", radius)
            },
            SmartEvent::Kill { creature, .. }
            | SmartEvent::SummonedUnit { creature, .. }
            | SmartEvent::SummonDespawned { creature, .. }
            | SmartEvent::TransportAddCreature { creature } => self.optional_creature(creature),
            SmartEvent::VictimCasting { spell, .. } => self.optional_spell(spell),
            SmartEvent::AcceptedQuest { quest } | SmartEvent::RewardQuest { quest } => self.optional_quest(quest),
            SmartEvent::ReceiveEmote { emote, .. } => {
                if emote == 0 {
                    Ok(())
                } else {
                    found("text emote", emote, catalogs.has_text_emote(emote))
                }
            },
            SmartEvent::HasAura { spell, .. } | SmartEvent::TargetBuffed { spell, .. } => self.require_spell(spell),
            SmartEvent::MovementInform { motion_type, .. } => at_most("motion type", motion_type, NULL_MOTION_TYPE),
            SmartEvent::AreaTriggerOnTrigger { trigger } => {
                if trigger == 0 {
                    Ok(())
                } else {
                    found("area trigger", trigger, catalogs.has_area_trigger(trigger))
                }
            },
            SmartEvent::TextOver { text_group, .. } => self.check_text(text_group, event, target),
            SmartEvent::DummyEffect { spell, effect_index } => {
                self.require_spell(spell)?;
                at_most("effect index", effect_index, EFFECT_2)
            },
            SmartEvent::GameEventStart { game_event } | SmartEvent::GameEventEnd { game_event } => {
                self.game_event(game_event)
            },
            SmartEvent::ActionDone { event_id } => at_most("event id", event_id, EVENT_CHARGE),
            SmartEvent::FriendlyHealthPct { .. } => match target {
                TargetKind::CreatureRange
                | TargetKind::CreatureGuid
                | TargetKind::CreatureDistance
                | TargetKind::ClosestCreature
                | TargetKind::ClosestPlayer
                | TargetKind::PlayerRange
                | TargetKind::PlayerDistance => Ok(()),
                other => Err(Rejection::IncompatibleTarget(other)),
            },
            SmartEvent::DistanceCreature { guid, entry, .. } => {
                one_of("creature guid or entry", guid, entry)?;
                if guid != 0 {
                    found("creature guid", guid, catalogs.creature_spawn(guid).is_some())
                } else {
                    self.require_creature(entry)
                }
            },
            SmartEvent::DistanceGameObject { guid, entry, .. } => {
                one_of("gameobject guid or entry", guid, entry)?;
                if guid != 0 {
                    found("gameobject guid", guid, catalogs.gameobject_spawn(guid).is_some())
                } else {
                    self.require_gameobject(entry)
                }
            },
            SmartEvent::CounterSet { counter, value, .. } => {
                non_zero("counter id", counter)?;
                non_zero("counter value", value)
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cook_event_reads_timer_and_cooldown_slots() {
        let event = cook_event(EventKind::HealthPct, &[10, 40, 1000, 2000, 0]);
        assert_eq!(event.percentages(), vec![10, 40]);
        assert_eq!(event.timer_pairs(), vec![MinMax::new(10, 40), MinMax::new(1000, 2000)]);

        let event = cook_event(EventKind::SpellHit, &[133, 4, 500, 600, 0]);
        assert_eq!(
            event,
            SmartEvent::SpellHit {
                spell: 133,
                school: 4,
                cooldown: MinMax::new(500, 600)
            }
        );
        assert_eq!(event.kind(), EventKind::SpellHit);
    }

    #[test]
    fn cook_event_keeps_kind_for_every_tag() {
        for raw in 0..=77u8 {
            let kind = EventKind::from_repr(raw).expect("contiguous event kinds");
            assert_eq!(cook_event(kind, &[0; 5]).kind(), kind);
        }
    }

    #[test]
    fn one_of_requires_exactly_one_half() {
        assert_eq!(one_of("x", 0, 0), Err(Rejection::MissingAlternative("x")));
        assert_eq!(one_of("x", 1, 1), Err(Rejection::ConflictingAlternatives("x")));
        assert!(one_of("x", 0, 5).is_ok());
        assert!(one_of("x", 5, 0).is_ok());
    }
}
