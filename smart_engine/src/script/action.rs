//! Action side of a rule: what the owner does once the event fires.

use super::MinMax;

/// Raw action kind tags as stored in `action_type`.
///
/// Raw 0 means "no action" and never decodes; 16 and 114 are unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::FromRepr, strum::Display)]
#[repr(u8)]
pub enum ActionKind {
    Talk = 1,
    SetFaction,
    MorphToEntryOrModel,
    Sound,
    PlayEmote,
    FailQuest,
    AddQuest,
    SetReactState,
    ActivateGameObject,
    RandomEmote,
    Cast,
    SummonCreature,
    ThreatSinglePct,
    ThreatAllPct,
    CallAreaExploredOrEventHappens,
    SetEmoteState = 17,
    SetUnitFlag,
    RemoveUnitFlag,
    AutoAttack,
    AllowCombatMovement,
    SetEventPhase,
    IncEventPhase,
    Evade,
    FleeForAssist,
    CallGroupEventHappens,
    CombatStop,
    RemoveAurasFromSpell,
    Follow,
    RandomPhase,
    RandomPhaseRange,
    ResetGameObject,
    CallKilledMonster,
    SetInstanceData,
    SetInstanceData64,
    UpdateTemplate,
    Die,
    SetInCombatWithZone,
    CallForHelp,
    SetSheath,
    ForceDespawn,
    SetInvincibilityHpLevel,
    MountToEntryOrModel,
    SetIngamePhaseMask,
    SetData,
    MoveForward,
    SetVisibility,
    SetActive,
    AttackStart,
    SummonGameObject,
    KillUnit,
    ActivateTaxi,
    WaypointStart,
    WaypointPause,
    WaypointStop,
    AddItem,
    RemoveItem,
    InstallAiTemplate,
    SetRun,
    SetFly,
    SetSwim,
    Teleport,
    SetCounter,
    StoreTargetList,
    WaypointResume,
    SetOrientation,
    CreateTimedEvent,
    PlayMovie,
    MoveToPos,
    RespawnTarget,
    Equip,
    CloseGossip,
    TriggerTimedEvent,
    RemoveTimedEvent,
    AddAura,
    OverrideScriptBaseObject,
    ResetScriptBaseObject,
    CallScriptReset,
    SetRangedMovement,
    CallTimedActionList,
    SetNpcFlag,
    AddNpcFlag,
    RemoveNpcFlag,
    SimpleTalk,
    InvokerCast,
    CrossCast,
    CallRandomTimedActionList,
    CallRandomRangeTimedActionList,
    RandomMove,
    SetUnitFieldBytes1,
    RemoveUnitFieldBytes1,
    InterruptSpell,
    SendGoCustomAnim,
    SetDynamicFlag,
    AddDynamicFlag,
    RemoveDynamicFlag,
    JumpToPos,
    SendGossipMenu,
    GoSetLootState,
    SendTargetToTarget,
    SetHomePos,
    SetHealthRegen,
    SetRoot,
    SetGoFlag,
    AddGoFlag,
    RemoveGoFlag,
    SummonCreatureGroup,
    SetPower,
    AddPower,
    RemovePower,
    GameEventStop,
    GameEventStart,
    StartClosestWaypoint,
    RandomSound = 115,
}

/// Typed action payload. Each variant carries only the fields its kind reads.
#[derive(Debug, Clone, PartialEq)]
#[rustfmt::skip]
pub enum SmartAction {
    Talk { text_group: u32, duration: u32, use_talk_target: bool },
    SetFaction { faction: u32 },
    MorphToEntryOrModel { creature: u32, model: u32 },
    Sound { sound: u32, only_self: bool },
    PlayEmote { emote: u32 },
    FailQuest { quest: u32 },
    AddQuest { quest: u32 },
    SetReactState { state: u32 },
    ActivateGameObject,
    RandomEmote { emotes: [u32; 6] },
    Cast { spell: u32, cast_flags: u32, trigger_flags: u32 },
    SummonCreature { creature: u32, summon_type: u32, duration: u32, storage_id: u32, attack_invoker: bool },
    ThreatSinglePct { increase: u32, decrease: u32 },
    ThreatAllPct { increase: u32, decrease: u32 },
    CallAreaExploredOrEventHappens { quest: u32 },
    SetEmoteState { emote: u32 },
    SetUnitFlag { flag: u32, field: u32 },
    RemoveUnitFlag { flag: u32, field: u32 },
    AutoAttack { attack: bool },
    AllowCombatMovement { allow: bool },
    SetEventPhase { phase: u32 },
    IncEventPhase { inc: u32, dec: u32 },
    Evade,
    FleeForAssist { with_emote: bool },
    CallGroupEventHappens { quest: u32 },
    CombatStop,
    RemoveAurasFromSpell { spell: u32, charges: u32 },
    Follow { distance: u32, angle: u32, entry: u32, credit: u32, credit_type: u32 },
    RandomPhase { phases: [u32; 6] },
    RandomPhaseRange { min: u32, max: u32 },
    ResetGameObject,
    CallKilledMonster { creature: u32 },
    SetInstanceData { field: u32, data: u32 },
    SetInstanceData64 { field: u32 },
    UpdateTemplate { creature: u32, team: bool },
    Die,
    SetInCombatWithZone,
    CallForHelp { range: u32, with_emote: bool },
    SetSheath { sheath: u32 },
    ForceDespawn { delay: u32 },
    SetInvincibilityHpLevel { min_hp: u32, percent: u32 },
    MountToEntryOrModel { creature: u32, model: u32 },
    SetIngamePhaseMask { mask: u32 },
    SetData { field: u32, data: u32 },
    MoveForward { distance: u32 },
    SetVisibility { visible: bool },
    SetActive { active: bool },
    AttackStart,
    SummonGameObject { entry: u32, despawn_time: u32 },
    KillUnit,
    ActivateTaxi { path: u32 },
    WaypointStart { run: bool, path: u32, repeat: bool, quest: u32, despawn_time: u32, react_state: u32 },
    WaypointPause { delay: u32 },
    WaypointStop { despawn_time: u32, quest: u32, fail: bool },
    AddItem { item: u32, count: u32 },
    RemoveItem { item: u32, count: u32 },
    InstallAiTemplate { template: u32, params: [u32; 5] },
    SetRun { run: bool },
    SetFly { fly: bool },
    SetSwim { swim: bool },
    Teleport { map: u32 },
    SetCounter { counter: u32, value: u32, reset: bool },
    StoreTargetList { id: u32 },
    WaypointResume,
    SetOrientation,
    CreateTimedEvent { id: u32, timer: MinMax, repeat: MinMax, chance: u32 },
    PlayMovie { movie: u32 },
    MoveToPos { point: u32 },
    RespawnTarget,
    Equip { entry: u32, mask: u32, slots: [u32; 3] },
    CloseGossip,
    TriggerTimedEvent { id: u32 },
    RemoveTimedEvent { id: u32 },
    AddAura { spell: u32 },
    OverrideScriptBaseObject,
    ResetScriptBaseObject,
    CallScriptReset,
    SetRangedMovement { distance: u32, angle: u32 },
    CallTimedActionList { id: u32, timer_type: u32, allow_override: bool },
    SetNpcFlag { flag: u32 },
    AddNpcFlag { flag: u32 },
    RemoveNpcFlag { flag: u32 },
    SimpleTalk { text_group: u32 },
    InvokerCast { spell: u32, cast_flags: u32, trigger_flags: u32 },
    CrossCast { spell: u32, cast_flags: u32, caster_target_type: u32, caster_params: [u32; 3] },
    CallRandomTimedActionList { lists: [u32; 6] },
    CallRandomRangeTimedActionList { first: u32, last: u32 },
    RandomMove { distance: u32 },
    SetUnitFieldBytes1 { value: u32, field: u32 },
    RemoveUnitFieldBytes1 { value: u32, field: u32 },
    InterruptSpell { with_delayed: bool, spell: u32, instant: bool },
    SendGoCustomAnim { anim: u32 },
    SetDynamicFlag { flag: u32 },
    AddDynamicFlag { flag: u32 },
    RemoveDynamicFlag { flag: u32 },
    JumpToPos { speed_xy: u32, speed_z: u32 },
    SendGossipMenu { menu: u32, text: u32 },
    GoSetLootState { state: u32 },
    SendTargetToTarget { id: u32 },
    SetHomePos,
    SetHealthRegen { regen: bool },
    SetRoot { root: bool },
    SetGoFlag { flag: u32 },
    AddGoFlag { flag: u32 },
    RemoveGoFlag { flag: u32 },
    SummonCreatureGroup { group: u32, attack_invoker: bool },
    SetPower { power_type: u32, value: u32 },
    AddPower { power_type: u32, value: u32 },
    RemovePower { power_type: u32, value: u32 },
    GameEventStop { game_event: u32 },
    GameEventStart { game_event: u32 },
    StartClosestWaypoint { paths: [u32; 6] },
    RandomSound { sounds: [u32; 5], only_self: bool },
}

impl SmartAction {
    /// Tag of this action, matching the stored `action_type`.
    #[allow(clippy::too_many_lines)]
    pub fn kind(&self) -> ActionKind {
        match self {
            SmartAction::Talk { .. } => ActionKind::Talk,
            SmartAction::SetFaction { .. } => ActionKind::SetFaction,
            SmartAction::MorphToEntryOrModel { .. } => ActionKind::MorphToEntryOrModel,
            SmartAction::Sound { .. } => ActionKind::Sound,
            SmartAction::PlayEmote { .. } => ActionKind::PlayEmote,
            SmartAction::FailQuest { .. } => ActionKind::FailQuest,
            SmartAction::AddQuest { .. } => ActionKind::AddQuest,
            SmartAction::SetReactState { .. } => ActionKind::SetReactState,
            SmartAction::ActivateGameObject => ActionKind::ActivateGameObject,
            SmartAction::RandomEmote { .. } => ActionKind::RandomEmote,
            SmartAction::Cast { .. } => ActionKind::Cast,
            SmartAction::SummonCreature { .. } => ActionKind::SummonCreature,
            SmartAction::ThreatSinglePct { .. } => ActionKind::ThreatSinglePct,
            SmartAction::ThreatAllPct { .. } => ActionKind::ThreatAllPct,
            SmartAction::CallAreaExploredOrEventHappens { .. } => ActionKind::CallAreaExploredOrEventHappens,
            SmartAction::SetEmoteState { .. } => ActionKind::SetEmoteState,
            SmartAction::SetUnitFlag { .. } => ActionKind::SetUnitFlag,
            SmartAction::RemoveUnitFlag { .. } => ActionKind::RemoveUnitFlag,
            SmartAction::AutoAttack { .. } => ActionKind::AutoAttack,
            SmartAction::AllowCombatMovement { .. } => ActionKind::AllowCombatMovement,
            SmartAction::SetEventPhase { .. } => ActionKind::SetEventPhase,
            SmartAction::IncEventPhase { .. } => ActionKind::IncEventPhase,
            SmartAction::Evade => ActionKind::Evade,
            SmartAction::FleeForAssist { .. } => ActionKind::FleeForAssist,
            SmartAction::CallGroupEventHappens { .. } => ActionKind::CallGroupEventHappens,
            SmartAction::CombatStop => ActionKind::CombatStop,
            SmartAction::RemoveAurasFromSpell { .. } => ActionKind::RemoveAurasFromSpell,
            SmartAction::Follow { .. } => ActionKind::Follow,
            SmartAction::RandomPhase { .. } => ActionKind::RandomPhase,
            SmartAction::RandomPhaseRange { .. } => ActionKind::RandomPhaseRange,
            SmartAction::ResetGameObject => ActionKind::ResetGameObject,
            SmartAction::CallKilledMonster { .. } => ActionKind::CallKilledMonster,
            SmartAction::SetInstanceData { .. } => ActionKind::SetInstanceData,
            SmartAction::SetInstanceData64 { .. } => ActionKind::SetInstanceData64,
            SmartAction::UpdateTemplate { .. } => ActionKind::UpdateTemplate,
            SmartAction::Die => ActionKind::Die,
            SmartAction::SetInCombatWithZone => ActionKind::SetInCombatWithZone,
            SmartAction::CallForHelp { .. } => ActionKind::CallForHelp,
            SmartAction::SetSheath { .. } => ActionKind::SetSheath,
            SmartAction::ForceDespawn { .. } => ActionKind::ForceDespawn,
            SmartAction::SetInvincibilityHpLevel { .. } => ActionKind::SetInvincibilityHpLevel,
            SmartAction::MountToEntryOrModel { .. } => ActionKind::MountToEntryOrModel,
            SmartAction::SetIngamePhaseMask { .. } => ActionKind::SetIngamePhaseMask,
            SmartAction::SetData { .. } => ActionKind::SetData,
            SmartAction::MoveForward { .. } => ActionKind::MoveForward,
            SmartAction::SetVisibility { .. } => ActionKind::SetVisibility,
            SmartAction::SetActive { .. } => ActionKind::SetActive,
            SmartAction::AttackStart => ActionKind::AttackStart,
            SmartAction::SummonGameObject { .. } => ActionKind::SummonGameObject,
            SmartAction::KillUnit => ActionKind::KillUnit,
            SmartAction::ActivateTaxi { .. } => ActionKind::ActivateTaxi,
            SmartAction::WaypointStart { .. } => ActionKind::WaypointStart,
            SmartAction::WaypointPause { .. } => ActionKind::WaypointPause,
            SmartAction::WaypointStop { .. } => ActionKind::WaypointStop,
            SmartAction::AddItem { .. } => ActionKind::AddItem,
            SmartAction::RemoveItem { .. } => ActionKind::RemoveItem,
            SmartAction::InstallAiTemplate { .. } => ActionKind::InstallAiTemplate,
            SmartAction::SetRun { .. } => ActionKind::SetRun,
            SmartAction::SetFly { .. } => ActionKind::SetFly,
            SmartAction::SetSwim { .. } => ActionKind::SetSwim,
            SmartAction::Teleport { .. } => ActionKind::Teleport,
            SmartAction::SetCounter { .. } => ActionKind::SetCounter,
            SmartAction::StoreTargetList { .. } => ActionKind::StoreTargetList,
            SmartAction::WaypointResume => ActionKind::WaypointResume,
            SmartAction::SetOrientation => ActionKind::SetOrientation,
            SmartAction::CreateTimedEvent { .. } => ActionKind::CreateTimedEvent,
            SmartAction::PlayMovie { .. } => ActionKind::PlayMovie,
            SmartAction::MoveToPos { .. } => ActionKind::MoveToPos,
            SmartAction::RespawnTarget => ActionKind::RespawnTarget,
            SmartAction::Equip { .. } => ActionKind::Equip,
            SmartAction::CloseGossip => ActionKind::CloseGossip,
            SmartAction::TriggerTimedEvent { .. } => ActionKind::TriggerTimedEvent,
            SmartAction::RemoveTimedEvent { .. } => ActionKind::RemoveTimedEvent,
            SmartAction::AddAura { .. } => ActionKind::AddAura,
            SmartAction::OverrideScriptBaseObject => ActionKind::OverrideScriptBaseObject,
            SmartAction::ResetScriptBaseObject => ActionKind::ResetScriptBaseObject,
            SmartAction::CallScriptReset => ActionKind::CallScriptReset,
            SmartAction::SetRangedMovement { .. } => ActionKind::SetRangedMovement,
            SmartAction::CallTimedActionList { .. } => ActionKind::CallTimedActionList,
            SmartAction::SetNpcFlag { .. } => ActionKind::SetNpcFlag,
            SmartAction::AddNpcFlag { .. } => ActionKind::AddNpcFlag,
            SmartAction::RemoveNpcFlag { .. } => ActionKind::RemoveNpcFlag,
            SmartAction::SimpleTalk { .. } => ActionKind::SimpleTalk,
            SmartAction::InvokerCast { .. } => ActionKind::InvokerCast,
            SmartAction::CrossCast { .. } => ActionKind::CrossCast,
            SmartAction::CallRandomTimedActionList { .. } => ActionKind::CallRandomTimedActionList,
            SmartAction::CallRandomRangeTimedActionList { .. } => ActionKind::CallRandomRangeTimedActionList,
            SmartAction::RandomMove { .. } => ActionKind::RandomMove,
            SmartAction::SetUnitFieldBytes1 { .. } => ActionKind::SetUnitFieldBytes1,
            SmartAction::RemoveUnitFieldBytes1 { .. } => ActionKind::RemoveUnitFieldBytes1,
            SmartAction::InterruptSpell { .. } => ActionKind::InterruptSpell,
            SmartAction::SendGoCustomAnim { .. } => ActionKind::SendGoCustomAnim,
            SmartAction::SetDynamicFlag { .. } => ActionKind::SetDynamicFlag,
            SmartAction::AddDynamicFlag { .. } => ActionKind::AddDynamicFlag,
            SmartAction::RemoveDynamicFlag { .. } => ActionKind::RemoveDynamicFlag,
            SmartAction::JumpToPos { .. } => ActionKind::JumpToPos,
            SmartAction::SendGossipMenu { .. } => ActionKind::SendGossipMenu,
            SmartAction::GoSetLootState { .. } => ActionKind::GoSetLootState,
            SmartAction::SendTargetToTarget { .. } => ActionKind::SendTargetToTarget,
            SmartAction::SetHomePos => ActionKind::SetHomePos,
            SmartAction::SetHealthRegen { .. } => ActionKind::SetHealthRegen,
            SmartAction::SetRoot { .. } => ActionKind::SetRoot,
            SmartAction::SetGoFlag { .. } => ActionKind::SetGoFlag,
            SmartAction::AddGoFlag { .. } => ActionKind::AddGoFlag,
            SmartAction::RemoveGoFlag { .. } => ActionKind::RemoveGoFlag,
            SmartAction::SummonCreatureGroup { .. } => ActionKind::SummonCreatureGroup,
            SmartAction::SetPower { .. } => ActionKind::SetPower,
            SmartAction::AddPower { .. } => ActionKind::AddPower,
            SmartAction::RemovePower { .. } => ActionKind::RemovePower,
            SmartAction::GameEventStop { .. } => ActionKind::GameEventStop,
            SmartAction::GameEventStart { .. } => ActionKind::GameEventStart,
            SmartAction::StartClosestWaypoint { .. } => ActionKind::StartClosestWaypoint,
            SmartAction::RandomSound { .. } => ActionKind::RandomSound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_repr_has_expected_gaps() {
        assert_eq!(ActionKind::from_repr(0), None);
        assert_eq!(ActionKind::from_repr(16), None);
        assert_eq!(ActionKind::from_repr(114), None);
        assert_eq!(ActionKind::from_repr(116), None);
        assert_eq!(ActionKind::from_repr(15), Some(ActionKind::CallAreaExploredOrEventHappens));
        assert_eq!(ActionKind::from_repr(17), Some(ActionKind::SetEmoteState));
        assert_eq!(ActionKind::from_repr(58), Some(ActionKind::InstallAiTemplate));
        assert_eq!(ActionKind::from_repr(113), Some(ActionKind::StartClosestWaypoint));
        assert_eq!(ActionKind::from_repr(115), Some(ActionKind::RandomSound));
    }

    #[test]
    fn action_kind_displays_variant_name() {
        assert_eq!(ActionKind::SummonCreature.to_string(), "SummonCreature");
        assert_eq!(SmartAction::Die.kind(), ActionKind::Die);
    }
}
