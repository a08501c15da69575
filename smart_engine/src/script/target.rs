//! Target side of a rule: who or where the action is aimed at.

/// Raw target kind tags as stored in `target_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::FromRepr, strum::Display)]
#[repr(u8)]
pub enum TargetKind {
    None = 0,
    SelfUnit,
    Victim,
    HostileSecondAggro,
    HostileLastAggro,
    HostileRandom,
    HostileRandomNotTop,
    ActionInvoker,
    Position,
    CreatureRange,
    CreatureGuid,
    CreatureDistance,
    Stored,
    GameObjectRange,
    GameObjectGuid,
    GameObjectDistance,
    InvokerParty,
    PlayerRange,
    PlayerDistance,
    ClosestCreature,
    ClosestGameObject,
    ClosestPlayer,
    ActionInvokerVehicle,
    OwnerOrSummoner,
    ThreatList,
    ClosestEnemy,
    ClosestFriendly,
}

/// Explicit coordinates carried by every rule; orientation is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub o: f32,
}

/// How the target set is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[rustfmt::skip]
pub enum TargetSelector {
    #[default]
    None,
    SelfUnit,
    Victim,
    HostileSecondAggro,
    HostileLastAggro,
    HostileRandom,
    HostileRandomNotTop,
    ActionInvoker,
    Position,
    CreatureRange { creature: u32, min_dist: u32, max_dist: u32 },
    CreatureGuid { guid: u32, entry: u32 },
    CreatureDistance { creature: u32, dist: u32 },
    Stored { id: u32 },
    GameObjectRange { entry: u32, min_dist: u32, max_dist: u32 },
    GameObjectGuid { guid: u32, entry: u32 },
    GameObjectDistance { entry: u32, dist: u32 },
    InvokerParty,
    PlayerRange { min_dist: u32, max_dist: u32 },
    PlayerDistance { dist: u32 },
    ClosestCreature { entry: u32, dist: u32, dead: bool },
    ClosestGameObject { entry: u32, dist: u32 },
    ClosestPlayer { dist: u32 },
    ActionInvokerVehicle,
    OwnerOrSummoner,
    ThreatList,
    ClosestEnemy { max_dist: u32, player_only: bool },
    ClosestFriendly { max_dist: u32, player_only: bool },
}

impl TargetSelector {
    pub fn kind(&self) -> TargetKind {
        match self {
            TargetSelector::None => TargetKind::None,
            TargetSelector::SelfUnit => TargetKind::SelfUnit,
            TargetSelector::Victim => TargetKind::Victim,
            TargetSelector::HostileSecondAggro => TargetKind::HostileSecondAggro,
            TargetSelector::HostileLastAggro => TargetKind::HostileLastAggro,
            TargetSelector::HostileRandom => TargetKind::HostileRandom,
            TargetSelector::HostileRandomNotTop => TargetKind::HostileRandomNotTop,
            TargetSelector::ActionInvoker => TargetKind::ActionInvoker,
            TargetSelector::Position => TargetKind::Position,
            TargetSelector::CreatureRange { .. } => TargetKind::CreatureRange,
            TargetSelector::CreatureGuid { .. } => TargetKind::CreatureGuid,
            TargetSelector::CreatureDistance { .. } => TargetKind::CreatureDistance,
            TargetSelector::Stored { .. } => TargetKind::Stored,
            TargetSelector::GameObjectRange { .. } => TargetKind::GameObjectRange,
            TargetSelector::GameObjectGuid { .. } => TargetKind::GameObjectGuid,
            TargetSelector::GameObjectDistance { .. } => TargetKind::GameObjectDistance,
            TargetSelector::InvokerParty => TargetKind::InvokerParty,
            TargetSelector::PlayerRange { .. } => TargetKind::PlayerRange,
            TargetSelector::PlayerDistance { .. } => TargetKind::PlayerDistance,
            TargetSelector::ClosestCreature { .. } => TargetKind::ClosestCreature,
            TargetSelector::ClosestGameObject { .. } => TargetKind::ClosestGameObject,
            TargetSelector::ClosestPlayer { .. } => TargetKind::ClosestPlayer,
            TargetSelector::ActionInvokerVehicle => TargetKind::ActionInvokerVehicle,
            TargetSelector::OwnerOrSummoner => TargetKind::OwnerOrSummoner,
            TargetSelector::ThreatList => TargetKind::ThreatList,
            TargetSelector::ClosestEnemy { .. } => TargetKind::ClosestEnemy,
            TargetSelector::ClosestFriendly { .. } => TargetKind::ClosestFriendly,
        }
    }
}

/// Full target of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmartTarget {
    pub selector: TargetSelector,
    pub position: TargetPosition,
}

impl SmartTarget {
    pub fn kind(&self) -> TargetKind {
        self.selector.kind()
    }
}
