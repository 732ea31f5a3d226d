//! Race definitions

use crate::stat::StatModifiers;
use serde::{Deserialize, Serialize};

/// An authored race definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Expertise tracks the race grants, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}
