//! Expertise tracks and the skills they grant

use crate::stat::StatModifiers;
use serde::{Deserialize, Serialize};

/// One learnable skill.
///
/// Content gives skills no behaviour yet; the id is the whole definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillData {
    pub id: String,
}

/// Highest level an expertise can reach.
///
/// Nine keeps the display to a single digit while covering as wide a spread
/// as possible; it can be lowered across the board if it proves too deep.
pub const MAX_EXPERTISE_LEVEL: usize = 9;

/// A leveled progression track granting one skill per level.
///
/// Some tracks belong to a job or race, others are shared. Slot `level - 1`
/// names the skill granted at that level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseData {
    pub id: String,
    /// Skill granted at each expertise level, lowest first.
    pub skill_data_ids: [String; MAX_EXPERTISE_LEVEL],
    /// Stat deltas this expertise contributes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}

impl ExpertiseData {
    /// Skill granted at `level` (1..=9); `None` outside that range.
    pub fn skill_at_level(&self, level: usize) -> Option<&str> {
        if (1..=MAX_EXPERTISE_LEVEL).contains(&level) {
            Some(self.skill_data_ids[level - 1].as_str())
        } else {
            None
        }
    }
}
