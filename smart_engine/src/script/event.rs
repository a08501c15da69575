//! Event side of a rule: what has to happen for the rule to fire.

use bitflags::bitflags;

/// Number of usable event phases plus one; phase indices must stay below it.
pub const PHASE_MAX: u32 = 7;

bitflags! {
    /// Phases a rule is active in. Empty means every phase.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PhaseMask: u8 {
        const PHASE_1 = 1 << 0;
        const PHASE_2 = 1 << 1;
        const PHASE_3 = 1 << 2;
        const PHASE_4 = 1 << 3;
        const PHASE_5 = 1 << 4;
        const PHASE_6 = 1 << 5;
    }
}

bitflags! {
    /// Cross-cutting event modifiers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EventFlags: u8 {
        const NOT_REPEATABLE = 1 << 0;
        const DIFFICULTY_0   = 1 << 1;
        const DIFFICULTY_1   = 1 << 2;
        const DIFFICULTY_2   = 1 << 3;
        const DIFFICULTY_3   = 1 << 4;
        const DEBUG_ONLY     = 1 << 7;
    }
}

bitflags! {
    /// Script sources an event kind may be used from.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SourceMask: u16 {
        const CREATURE         = 1 << 0;
        const GAMEOBJECT       = 1 << 1;
        const AREATRIGGER      = 1 << 2;
        const EVENT            = 1 << 3;
        const GOSSIP           = 1 << 4;
        const QUEST            = 1 << 5;
        const SPELL            = 1 << 6;
        const TRANSPORT        = 1 << 7;
        const INSTANCE         = 1 << 8;
        const TIMED_ACTIONLIST = 1 << 9;
    }
}

/// Inclusive timer window in milliseconds (or any other ordered pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMax {
    pub min: u32,
    pub max: u32,
}

impl MinMax {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(self) -> bool {
        self.min <= self.max
    }
}

/// Initial window followed by a repeat window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMaxRepeat {
    pub initial: MinMax,
    pub repeat: MinMax,
}

impl MinMaxRepeat {
    pub fn from_params(params: &[u32; 5]) -> Self {
        Self {
            initial: MinMax::new(params[0], params[1]),
            repeat: MinMax::new(params[2], params[3]),
        }
    }
}

/// Event plus the modifiers that apply to every event kind.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSpec {
    pub phase_mask: PhaseMask,
    /// Percent chance the rule fires when the event happens.
    pub chance: u8,
    pub flags: EventFlags,
    pub event: SmartEvent,
}

/// Raw event kind tags as stored in `event_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::FromRepr, strum::Display)]
#[repr(u8)]
pub enum EventKind {
    UpdateIc = 0,
    UpdateOoc,
    HealthPct,
    ManaPct,
    Aggro,
    Kill,
    Death,
    Evade,
    SpellHit,
    Range,
    OocLos,
    Respawn,
    TargetHealthPct,
    VictimCasting,
    FriendlyHealth,
    FriendlyIsCc,
    FriendlyMissingBuff,
    SummonedUnit,
    TargetManaPct,
    AcceptedQuest,
    RewardQuest,
    ReachedHome,
    ReceiveEmote,
    HasAura,
    TargetBuffed,
    Reset,
    IcLos,
    PassengerBoarded,
    PassengerRemoved,
    Charmed,
    CharmedTarget,
    SpellHitTarget,
    Damaged,
    DamagedTarget,
    MovementInform,
    SummonDespawned,
    CorpseRemoved,
    AiInit,
    DataSet,
    WaypointStart,
    WaypointReached,
    TransportAddPlayer,
    TransportAddCreature,
    TransportRemovePlayer,
    TransportRelocate,
    InstancePlayerEnter,
    AreaTriggerOnTrigger,
    QuestAccepted,
    QuestObjCompletion,
    QuestCompletion,
    QuestRewarded,
    QuestFail,
    TextOver,
    ReceiveHeal,
    JustSummoned,
    WaypointPaused,
    WaypointResumed,
    WaypointStopped,
    WaypointEnded,
    TimedEventTriggered,
    Update,
    Link,
    GossipSelect,
    JustCreated,
    GossipHello,
    FollowCompleted,
    DummyEffect,
    IsBehindTarget,
    GameEventStart,
    GameEventEnd,
    GoStateChanged,
    GoEventInform,
    ActionDone,
    OnSpellClick,
    FriendlyHealthPct,
    DistanceCreature,
    DistanceGameObject,
    CounterSet,
}

impl EventKind {
    /// Script sources this event kind can be attached to.
    #[rustfmt::skip]
    pub fn allowed_sources(self) -> SourceMask {
        const CREATURE: SourceMask = SourceMask::CREATURE;
        const CREATURE_GO: SourceMask = SourceMask::CREATURE.union(SourceMask::GAMEOBJECT);
        match self {
            EventKind::UpdateIc => CREATURE.union(SourceMask::TIMED_ACTIONLIST),
            EventKind::UpdateOoc => CREATURE_GO.union(SourceMask::INSTANCE),
            EventKind::Link => SourceMask::all().difference(SourceMask::TIMED_ACTIONLIST),
            EventKind::SpellHit | EventKind::Respawn | EventKind::SummonedUnit
            | EventKind::AcceptedQuest | EventKind::RewardQuest | EventKind::SummonDespawned
            | EventKind::AiInit | EventKind::DataSet | EventKind::TextOver
            | EventKind::TimedEventTriggered | EventKind::Update | EventKind::GossipSelect
            | EventKind::JustCreated | EventKind::GossipHello | EventKind::GameEventStart
            | EventKind::GameEventEnd | EventKind::CounterSet => CREATURE_GO,
            EventKind::TransportAddPlayer | EventKind::TransportAddCreature
            | EventKind::TransportRemovePlayer | EventKind::TransportRelocate => SourceMask::TRANSPORT,
            EventKind::InstancePlayerEnter => SourceMask::INSTANCE,
            EventKind::AreaTriggerOnTrigger => SourceMask::AREATRIGGER,
            EventKind::QuestAccepted | EventKind::QuestObjCompletion | EventKind::QuestCompletion
            | EventKind::QuestRewarded | EventKind::QuestFail => SourceMask::QUEST,
            EventKind::DummyEffect => SourceMask::SPELL,
            EventKind::GoStateChanged | EventKind::GoEventInform => SourceMask::GAMEOBJECT,
            _ => CREATURE,
        }
    }
}

/// Condition kinds under which a respawn event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::FromRepr, strum::Display)]
#[repr(u32)]
pub enum RespawnCondition {
    None = 0,
    Map = 1,
    Area = 2,
}

/// Typed event payload. Each variant carries only the fields its kind reads.
#[derive(Debug, Clone, PartialEq)]
#[rustfmt::skip]
pub enum SmartEvent {
    UpdateIc { timer: MinMaxRepeat },
    UpdateOoc { timer: MinMaxRepeat },
    HealthPct { pct: MinMaxRepeat },
    ManaPct { pct: MinMaxRepeat },
    Aggro,
    Kill { cooldown: MinMax, player_only: bool, creature: u32 },
    Death,
    Evade,
    SpellHit { spell: u32, school: u32, cooldown: MinMax },
    Range { range: MinMaxRepeat },
    OocLos { no_hostile: bool, max_dist: u32, cooldown: MinMax },
    /// `condition` stays raw; unknown values never match at runtime.
    Respawn { condition: u32, map: u32, area: u32 },
    TargetHealthPct { pct: MinMaxRepeat },
    VictimCasting { repeat: MinMax, spell: u32 },
    FriendlyHealth { hp_deficit: u32, radius: u32, repeat: MinMax },
    FriendlyIsCc { radius: u32, repeat: MinMax },
    FriendlyMissingBuff { spell: u32, radius: u32, repeat: MinMax },
    SummonedUnit { creature: u32, cooldown: MinMax },
    TargetManaPct { pct: MinMaxRepeat },
    AcceptedQuest { quest: u32 },
    RewardQuest { quest: u32 },
    ReachedHome,
    ReceiveEmote { emote: u32, cooldown: MinMax },
    HasAura { spell: u32, count: u32, repeat: MinMax },
    TargetBuffed { spell: u32, count: u32, repeat: MinMax },
    Reset,
    IcLos { no_hostile: bool, max_dist: u32, cooldown: MinMax },
    PassengerBoarded { repeat: MinMax },
    PassengerRemoved { repeat: MinMax },
    Charmed { on_remove: bool },
    CharmedTarget,
    SpellHitTarget { spell: u32, school: u32, cooldown: MinMax },
    Damaged { damage: MinMaxRepeat },
    DamagedTarget { damage: MinMaxRepeat },
    MovementInform { motion_type: u32, point: u32 },
    SummonDespawned { creature: u32, cooldown: MinMax },
    CorpseRemoved,
    AiInit,
    DataSet { id: u32, value: u32, cooldown: MinMax },
    WaypointStart { point: u32, path: u32 },
    WaypointReached { point: u32, path: u32 },
    TransportAddPlayer,
    TransportAddCreature { creature: u32 },
    TransportRemovePlayer,
    TransportRelocate { point: u32 },
    InstancePlayerEnter { team: u32, cooldown: MinMax },
    AreaTriggerOnTrigger { trigger: u32 },
    QuestAccepted,
    QuestObjCompletion,
    QuestCompletion,
    QuestRewarded,
    QuestFail,
    TextOver { text_group: u32, creature: u32 },
    ReceiveHeal { heal: MinMaxRepeat },
    JustSummoned,
    WaypointPaused { point: u32, path: u32 },
    WaypointResumed { point: u32, path: u32 },
    WaypointStopped { point: u32, path: u32 },
    WaypointEnded { point: u32, path: u32 },
    TimedEventTriggered { id: u32 },
    Update { timer: MinMaxRepeat },
    Link,
    GossipSelect { menu: u32, option: u32 },
    JustCreated,
    GossipHello,
    FollowCompleted,
    DummyEffect { spell: u32, effect_index: u32 },
    IsBehindTarget { cooldown: MinMax },
    GameEventStart { game_event: u32 },
    GameEventEnd { game_event: u32 },
    GoStateChanged { state: u32 },
    GoEventInform { event_id: u32 },
    ActionDone { event_id: u32 },
    OnSpellClick,
    FriendlyHealthPct { min_hp_pct: u32, max_hp_pct: u32, repeat: MinMax },
    DistanceCreature { guid: u32, entry: u32, distance: u32, repeat: u32 },
    DistanceGameObject { guid: u32, entry: u32, distance: u32, repeat: u32 },
    CounterSet { counter: u32, value: u32, cooldown: MinMax },
}

impl SmartEvent {
    /// Tag of this event, matching the stored `event_type`.
    #[allow(clippy::too_many_lines)]
    pub fn kind(&self) -> EventKind {
        match self {
            SmartEvent::UpdateIc { .. } => EventKind::UpdateIc,
            SmartEvent::UpdateOoc { .. } => EventKind::UpdateOoc,
            SmartEvent::HealthPct { .. } => EventKind::HealthPct,
            SmartEvent::ManaPct { .. } => EventKind::ManaPct,
            SmartEvent::Aggro => EventKind::Aggro,
            SmartEvent::Kill { .. } => EventKind::Kill,
            SmartEvent::Death => EventKind::Death,
            SmartEvent::Evade => EventKind::Evade,
            SmartEvent::SpellHit { .. } => EventKind::SpellHit,
            SmartEvent::Range { .. } => EventKind::Range,
            SmartEvent::OocLos { .. } => EventKind::OocLos,
            SmartEvent::Respawn { .. } => EventKind::Respawn,
            SmartEvent::TargetHealthPct { .. } => EventKind::TargetHealthPct,
            SmartEvent::VictimCasting { .. } => EventKind::VictimCasting,
            SmartEvent::FriendlyHealth { .. } => EventKind::FriendlyHealth,
            SmartEvent::FriendlyIsCc { .. } => EventKind::FriendlyIsCc,
            SmartEvent::FriendlyMissingBuff { .. } => EventKind::FriendlyMissingBuff,
            SmartEvent::SummonedUnit { .. } => EventKind::SummonedUnit,
            SmartEvent::TargetManaPct { .. } => EventKind::TargetManaPct,
            SmartEvent::AcceptedQuest { .. } => EventKind::AcceptedQuest,
            SmartEvent::RewardQuest { .. } => EventKind::RewardQuest,
            SmartEvent::ReachedHome => EventKind::ReachedHome,
            SmartEvent::ReceiveEmote { .. } => EventKind::ReceiveEmote,
            SmartEvent::HasAura { .. } => EventKind::HasAura,
            SmartEvent::TargetBuffed { .. } => EventKind::TargetBuffed,
            SmartEvent::Reset => EventKind::Reset,
            SmartEvent::IcLos { .. } => EventKind::IcLos,
            SmartEvent::PassengerBoarded { .. } => EventKind::PassengerBoarded,
            SmartEvent::PassengerRemoved { .. } => EventKind::PassengerRemoved,
            SmartEvent::Charmed { .. } => EventKind::Charmed,
            SmartEvent::CharmedTarget => EventKind::CharmedTarget,
            SmartEvent::SpellHitTarget { .. } => EventKind::SpellHitTarget,
            SmartEvent::Damaged { .. } => EventKind::Damaged,
            SmartEvent::DamagedTarget { .. } => EventKind::DamagedTarget,
            SmartEvent::MovementInform { .. } => EventKind::MovementInform,
            SmartEvent::SummonDespawned { .. } => EventKind::SummonDespawned,
            SmartEvent::CorpseRemoved => EventKind::CorpseRemoved,
            SmartEvent::AiInit => EventKind::AiInit,
            SmartEvent::DataSet { .. } => EventKind::DataSet,
            SmartEvent::WaypointStart { .. } => EventKind::WaypointStart,
            SmartEvent::WaypointReached { .. } => EventKind::WaypointReached,
            SmartEvent::TransportAddPlayer => EventKind::TransportAddPlayer,
            SmartEvent::TransportAddCreature { .. } => EventKind::TransportAddCreature,
            SmartEvent::TransportRemovePlayer => EventKind::TransportRemovePlayer,
            SmartEvent::TransportRelocate { .. } => EventKind::TransportRelocate,
            SmartEvent::InstancePlayerEnter { .. } => EventKind::InstancePlayerEnter,
            SmartEvent::AreaTriggerOnTrigger { .. } => EventKind::AreaTriggerOnTrigger,
            SmartEvent::QuestAccepted => EventKind::QuestAccepted,
            SmartEvent::QuestObjCompletion => EventKind::QuestObjCompletion,
            SmartEvent::QuestCompletion => EventKind::QuestCompletion,
            SmartEvent::QuestRewarded => EventKind::QuestRewarded,
            SmartEvent::QuestFail => EventKind::QuestFail,
            SmartEvent::TextOver { .. } => EventKind::TextOver,
            SmartEvent::ReceiveHeal { .. } => EventKind::ReceiveHeal,
            SmartEvent::JustSummoned => EventKind::JustSummoned,
            SmartEvent::WaypointPaused { .. } => EventKind::WaypointPaused,
            SmartEvent::WaypointResumed { .. } => EventKind::WaypointResumed,
            SmartEvent::WaypointStopped { .. } => EventKind::WaypointStopped,
            SmartEvent::WaypointEnded { .. } => EventKind::WaypointEnded,
            SmartEvent::TimedEventTriggered { .. } => EventKind::TimedEventTriggered,
            SmartEvent::Update { .. } => EventKind::Update,
            SmartEvent::Link => EventKind::Link,
            SmartEvent::GossipSelect { .. } => EventKind::GossipSelect,
            SmartEvent::JustCreated => EventKind::JustCreated,
            SmartEvent::GossipHello => EventKind::GossipHello,
            SmartEvent::FollowCompleted => EventKind::FollowCompleted,
            SmartEvent::DummyEffect { .. } => EventKind::DummyEffect,
            SmartEvent::IsBehindTarget { .. } => EventKind::IsBehindTarget,
            SmartEvent::GameEventStart { .. } => EventKind::GameEventStart,
            SmartEvent::GameEventEnd { .. } => EventKind::GameEventEnd,
            SmartEvent::GoStateChanged { .. } => EventKind::GoStateChanged,
            SmartEvent::GoEventInform { .. } => EventKind::GoEventInform,
            SmartEvent::ActionDone { .. } => EventKind::ActionDone,
            SmartEvent::OnSpellClick => EventKind::OnSpellClick,
            SmartEvent::FriendlyHealthPct { .. } => EventKind::FriendlyHealthPct,
            SmartEvent::DistanceCreature { .. } => EventKind::DistanceCreature,
            SmartEvent::DistanceGameObject { .. } => EventKind::DistanceGameObject,
            SmartEvent::CounterSet { .. } => EventKind::CounterSet,
        }
    }

    /// Every ordered timer or cooldown pair this event carries.
    pub fn timer_pairs(&self) -> Vec<MinMax> {
        match self {
            SmartEvent::UpdateIc { timer }
            | SmartEvent::UpdateOoc { timer }
            | SmartEvent::Update { timer }
            | SmartEvent::HealthPct { pct: timer }
            | SmartEvent::ManaPct { pct: timer }
            | SmartEvent::TargetHealthPct { pct: timer }
            | SmartEvent::TargetManaPct { pct: timer }
            | SmartEvent::Range { range: timer }
            | SmartEvent::Damaged { damage: timer }
            | SmartEvent::DamagedTarget { damage: timer }
            | SmartEvent::ReceiveHeal { heal: timer } => vec![timer.initial, timer.repeat],
            SmartEvent::Kill { cooldown, .. }
            | SmartEvent::SpellHit { cooldown, .. }
            | SmartEvent::SpellHitTarget { cooldown, .. }
            | SmartEvent::OocLos { cooldown, .. }
            | SmartEvent::IcLos { cooldown, .. }
            | SmartEvent::SummonedUnit { cooldown, .. }
            | SmartEvent::SummonDespawned { cooldown, .. }
            | SmartEvent::ReceiveEmote { cooldown, .. }
            | SmartEvent::DataSet { cooldown, .. }
            | SmartEvent::IsBehindTarget { cooldown }
            | SmartEvent::InstancePlayerEnter { cooldown, .. }
            | SmartEvent::CounterSet { cooldown, .. } => vec![*cooldown],
            SmartEvent::VictimCasting { repeat, .. }
            | SmartEvent::FriendlyHealth { repeat, .. }
            | SmartEvent::FriendlyIsCc { repeat, .. }
            | SmartEvent::FriendlyMissingBuff { repeat, .. }
            | SmartEvent::HasAura { repeat, .. }
            | SmartEvent::TargetBuffed { repeat, .. }
            | SmartEvent::PassengerBoarded { repeat }
            | SmartEvent::PassengerRemoved { repeat }
            | SmartEvent::FriendlyHealthPct { repeat, .. } => vec![*repeat],
            _ => Vec::new(),
        }
    }

    /// Percentage values this event carries.
    pub fn percentages(&self) -> Vec<u32> {
        match self {
            SmartEvent::HealthPct { pct }
            | SmartEvent::ManaPct { pct }
            | SmartEvent::TargetHealthPct { pct }
            | SmartEvent::TargetManaPct { pct } => vec![pct.initial.min, pct.initial.max],
            SmartEvent::FriendlyHealthPct {
                min_hp_pct, max_hp_pct, ..
            } => vec![*min_hp_pct, *max_hp_pct],
            _ => Vec::new(),
        }
    }
}
