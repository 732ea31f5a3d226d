//! State changes: temporary buffs and debuffs

use crate::id::GeneratedId;
use crate::stat::{AbilityScores, StatModifiers};
use serde::{Deserialize, Serialize};

/// An authored buff/debuff definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChangeData {
    pub id: String,
    /// Replacement scores while active, for effects that override them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_scores: Option<AbilityScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}

/// One applied instance of a state change on one creature.
///
/// The instance id comes from the run's [`crate::id::IdIssuer`] and is
/// distinct from the id of the creature carrying it.
// TODO: carry elapsed-turn and action-count bookkeeping once the turn engine lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub id: GeneratedId,
    pub data: StateChangeData,
}
