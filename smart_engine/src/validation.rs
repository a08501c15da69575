//! Load-time diagnostics for rule and waypoint rows.
//!
//! A [`Rejection`] drops the row it was raised for; a [`Warning`] is advisory
//! and the row stays in the table. Both carry the text that ends up in the log,
//! and both are collected into a [`LoadReport`] so callers (and tests) can see
//! *why* a row was dropped rather than only that it was.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use smart_data::RuleRowDef;

use crate::loader::spell_index::HelperKind;
use crate::script::{EventKind, SmartRule, SourceKind, TargetKind};

/// Reason a rule row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("invalid source_type ({0})")]
    UnknownSourceKind(u8),
    #[error("not yet implemented source_type {0}")]
    UnimplementedSourceKind(u8),
    #[error("{what} ({id}) does not exist")]
    OwnerNotFound { what: &'static str, id: u32 },
    #[error("{what} ({id}) is not using {expected}")]
    OwnerWrongAi {
        what: &'static str,
        id: u32,
        expected: &'static str,
    },
    #[error("{script} owner key {owner} cannot be negative")]
    NegativeOwner { script: SourceKind, owner: i32 },
    #[error("invalid event type ({0})")]
    UnknownEventKind(u8),
    #[error("invalid action type ({0})")]
    UnknownActionKind(u8),
    #[error("invalid target type ({0})")]
    UnknownTargetKind(u8),
    #[error("event type {event} can not be used for script type {script}")]
    EventNotAllowedForSource { event: EventKind, script: SourceKind },
    #[error("invalid phase mask ({0:#x})")]
    InvalidPhaseMask(u8),
    #[error("invalid event flags ({0:#x})")]
    InvalidEventFlags(u8),
    #[error("event chance {0} is above 100")]
    ChanceOutOfRange(u8),
    #[error("event {0} is linking self (infinite loop)")]
    SelfLink(u16),
    #[error("event id {0} is already used in this chain")]
    DuplicateRuleId(u16),
    #[error("uses non-existent {what} {id}")]
    MissingReference { what: &'static str, id: u32 },
    #[error("min ({min}) is greater than max ({max})")]
    MinGreaterThanMax { min: u32, max: u32 },
    #[error("pct value {0} is above 100")]
    PercentOutOfRange(u32),
    #[error("attempts to use phase {0}, phases stop at {max}", max = crate::script::event::PHASE_MAX - 1)]
    PhaseOutOfRange(u32),
    #[error("{0} must not be zero")]
    ZeroValue(&'static str),
    #[error("did not provide {0}")]
    MissingAlternative(&'static str),
    #[error("provided both halves of {0}")]
    ConflictingAlternatives(&'static str),
    #[error("uses invalid {field} {value}")]
    InvalidValue { field: &'static str, value: u32 },
    #[error("uses incompatible target type {0}")]
    IncompatibleTarget(TargetKind),
    #[error("uses spell {spell} with invalid school mask {school:#x}")]
    SpellSchoolMismatch { spell: u32, school: u32 },
    #[error("special flags for quest {0} do not include EXPLORATION_OR_EVENT")]
    QuestNotExplorationEvent(u32),
}

/// Integrity problem that does not drop the row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Warning {
    #[error("has abs(target.o = {0}) > 2*PI (orientation is expressed in radians)")]
    OrientationOutOfRange(f32),
    #[error("there is a {helper} spell for entry {id} (spell {spell}, effect {effect})")]
    RedundantSpellEffect {
        helper: HelperKind,
        id: u32,
        spell: u32,
        effect: u8,
    },
    #[error("kill credit effect of spell {spell} (effect {effect}) targets the caster")]
    KillCreditTargetsCaster { spell: u32, effect: u8 },
    #[error("link event {0} not found or invalid")]
    DanglingLink(u16),
    #[error("link source event not found or invalid, event will never trigger")]
    UnreachableLinkEvent,
    #[error("path entry {path}, unexpected point id {found}, expected {expected}")]
    WaypointGap { path: u32, expected: u32, found: u32 },
}

/// Enough of a row to find it again in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowContext {
    pub owner: i32,
    pub source_type: u8,
    pub id: u16,
    pub link: u16,
    pub event_type: u8,
    pub action_type: u8,
    pub target_type: u8,
}

impl From<&RuleRowDef> for RowContext {
    fn from(row: &RuleRowDef) -> Self {
        Self {
            owner: row.owner_key,
            source_type: row.source_type,
            id: row.id,
            link: row.link,
            event_type: row.event_type,
            action_type: row.action_type,
            target_type: row.target_type,
        }
    }
}

impl From<&SmartRule> for RowContext {
    fn from(rule: &SmartRule) -> Self {
        Self {
            owner: rule.owner,
            source_type: rule.source as u8,
            id: rule.id,
            link: rule.link,
            event_type: rule.event_kind() as u8,
            action_type: rule.action_kind() as u8,
            target_type: rule.target_kind() as u8,
        }
    }
}

impl fmt::Display for RowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry {} SourceType {} Event {} (type {}) Action {} Target {}",
            self.owner, self.source_type, self.id, self.event_type, self.action_type, self.target_type
        )
    }
}

/// A rejection or warning tied to the row that raised it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Diagnostic<T: fmt::Display> {
    pub row: RowContext,
    #[serde(serialize_with = "serialize_display")]
    pub reason: T,
}

impl<T: fmt::Display> fmt::Display for Diagnostic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.row, self.reason)
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Outcome of one rule-load pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Distinct `(source, owner)` chains created.
    pub entities: usize,
    /// Rows retained across all chains.
    pub rules: usize,
    pub rejected: Vec<Diagnostic<Rejection>>,
    pub warnings: Vec<Diagnostic<Warning>>,
}

impl LoadReport {
    pub fn rejected_ids(&self, owner: i32) -> impl Iterator<Item = u16> + '_ {
        self.rejected
            .iter()
            .filter(move |diag| diag.row.owner == owner)
            .map(|diag| diag.row.id)
    }

    /// True when any rejection for the given owner and rule id matches `pred`.
    pub fn was_rejected_for(&self, owner: i32, id: u16, pred: impl Fn(&Rejection) -> bool) -> bool {
        self.rejected
            .iter()
            .any(|diag| diag.row.owner == owner && diag.row.id == id && pred(&diag.reason))
    }
}

/// Outcome of one waypoint-load pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WaypointReport {
    pub paths: usize,
    pub points: usize,
    #[serde(serialize_with = "serialize_display_list")]
    pub gaps: Vec<Warning>,
}

fn serialize_display_list<S: Serializer>(values: &[Warning], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_text_reads_like_a_log_line() {
        let reason = Rejection::MissingReference { what: "spell", id: 133 };
        assert_eq!(reason.to_string(), "uses non-existent spell 133");
        assert_eq!(
            Rejection::PhaseOutOfRange(9).to_string(),
            "attempts to use phase 9, phases stop at 6"
        );
    }

    #[test]
    fn diagnostic_serializes_reason_as_text() {
        let row = RuleRowDef {
            owner_key: 42,
            id: 3,
            ..RuleRowDef::default()
        };
        let diag = Diagnostic {
            row: RowContext::from(&row),
            reason: Rejection::SelfLink(3),
        };
        let json = serde_json::to_value(&diag).expect("serialize");
        assert_eq!(json["row"]["owner"], 42);
        assert_eq!(json["reason"], "event 3 is linking self (infinite loop)");
    }

    #[test]
    fn waypoint_gap_message_names_both_ids() {
        let warning = Warning::WaypointGap {
            path: 7,
            expected: 2,
            found: 3,
        };
        assert_eq!(warning.to_string(), "path entry 7, unexpected point id 3, expected 2");
    }
}
