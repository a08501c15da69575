//! Raw target slot translation and validation.

use std::f32::consts::PI;

use crate::script::{ActionKind, SmartTarget, TargetKind, TargetPosition, TargetSelector};
use crate::validation::{Rejection, Warning};

use super::RuleCheck;

/// Map the three raw target slots onto the selector for `kind`.
#[rustfmt::skip]
pub fn cook_target(kind: TargetKind, p: [u32; 3], position: TargetPosition) -> SmartTarget {
    let selector = match kind {
        TargetKind::None => TargetSelector::None,
        TargetKind::SelfUnit => TargetSelector::SelfUnit,
        TargetKind::Victim => TargetSelector::Victim,
        TargetKind::HostileSecondAggro => TargetSelector::HostileSecondAggro,
        TargetKind::HostileLastAggro => TargetSelector::HostileLastAggro,
        TargetKind::HostileRandom => TargetSelector::HostileRandom,
        TargetKind::HostileRandomNotTop => TargetSelector::HostileRandomNotTop,
        TargetKind::ActionInvoker => TargetSelector::ActionInvoker,
        TargetKind::Position => TargetSelector::Position,
        TargetKind::CreatureRange => TargetSelector::CreatureRange { creature: p[0], min_dist: p[1], max_dist: p[2] },
        TargetKind::CreatureGuid => TargetSelector::CreatureGuid { guid: p[0], entry: p[1] },
        TargetKind::CreatureDistance => TargetSelector::CreatureDistance { creature: p[0], dist: p[1] },
        TargetKind::Stored => TargetSelector::Stored { id: p[0] },
        TargetKind::GameObjectRange => TargetSelector::GameObjectRange { entry: p[0], min_dist: p[1], max_dist: p[2] },
        TargetKind::GameObjectGuid => TargetSelector::GameObjectGuid { guid: p[0], entry: p[1] },
        TargetKind::GameObjectDistance => TargetSelector::GameObjectDistance { entry: p[0], dist: p[1] },
        TargetKind::InvokerParty => TargetSelector::InvokerParty,
        TargetKind::PlayerRange => TargetSelector::PlayerRange { min_dist: p[0], max_dist: p[1] },
        TargetKind::PlayerDistance => TargetSelector::PlayerDistance { dist: p[0] },
        TargetKind::ClosestCreature => TargetSelector::ClosestCreature { entry: p[0], dist: p[1], dead: p[2] != 0 },
        TargetKind::ClosestGameObject => TargetSelector::ClosestGameObject { entry: p[0], dist: p[1] },
        TargetKind::ClosestPlayer => TargetSelector::ClosestPlayer { dist: p[0] },
        TargetKind::ActionInvokerVehicle => TargetSelector::ActionInvokerVehicle,
        TargetKind::OwnerOrSummoner => TargetSelector::OwnerOrSummoner,
        TargetKind::ThreatList => TargetSelector::ThreatList,
        TargetKind::ClosestEnemy => TargetSelector::ClosestEnemy { max_dist: p[0], player_only: p[1] != 0 },
        TargetKind::ClosestFriendly => TargetSelector::ClosestFriendly { max_dist: p[0], player_only: p[1] != 0 },
    };
    SmartTarget { selector, position }
}

impl RuleCheck<'_> {
    /// Validate the target of a rule.
    ///
    /// # Errors
    /// Returns the [`Rejection`] for the first reference that does not resolve.
    pub(crate) fn check_target(&mut self, target: &SmartTarget, action: ActionKind) -> Result<(), Rejection> {
        if target.position.o.abs() > 2.0 * PI {
            self.warnings.push(Warning::OrientationOutOfRange(target.position.o));
        }

        // AI templates pick their own targets
        if action == ActionKind::InstallAiTemplate {
            return Ok(());
        }

        match target.selector {
            TargetSelector::CreatureRange { creature, .. } | TargetSelector::CreatureDistance { creature, .. } => {
                self.optional_creature(creature)
            },
            TargetSelector::GameObjectRange { entry, .. } | TargetSelector::GameObjectDistance { entry, .. } => {
                self.optional_gameobject(entry)
            },
            TargetSelector::CreatureGuid { entry, .. } => self.optional_creature(entry),
            TargetSelector::GameObjectGuid { entry, .. } => self.optional_gameobject(entry),
            TargetSelector::PlayerDistance { dist } | TargetSelector::ClosestPlayer { dist } => {
                super::non_zero("max distance", dist)
            },
            _ => Ok(()),
        }
    }
}
