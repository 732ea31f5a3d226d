//! The closed modifier record and its aggregation

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Additive deltas for the stats that may legally be adjusted.
///
/// A closed record rather than an open map, so unknown targets cannot appear
/// and the aggregate over any number of sources is total. Catalog stats like
/// `max_hp` are deliberately absent: downstream logic derives them from
/// `max_hp_rate`, level and ability scores, and nothing may set them
/// directly.
///
/// Jobs, races, expertises, creatures and state changes all author a value of
/// this type, filling in only the fields they affect; omitted fields are
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatModifiers {
    pub action_points_per_turn: f64,
    pub max_action_points: f64,
    pub max_hp_rate: f64,
    pub magical_attack_rate: f64,
    pub magical_defense_rate: f64,
    pub physical_attack_rate: f64,
    pub physical_defense_rate: f64,
}

impl StatModifiers {
    /// Fold any number of partial sources into one resolved set.
    ///
    /// Per-field summation, so the result does not depend on source order
    /// beyond float rounding, which is the accepted tolerance. Zero sources
    /// yield the all-zero set; there is no error path — malformed sources are
    /// a content-loading concern, not an aggregation one.
    pub fn aggregate<'a>(sources: impl IntoIterator<Item = &'a StatModifiers>) -> StatModifiers {
        sources
            .into_iter()
            .fold(StatModifiers::default(), |acc, source| acc + *source)
    }
}

impl Add for StatModifiers {
    type Output = StatModifiers;

    fn add(self, other: StatModifiers) -> StatModifiers {
        StatModifiers {
            action_points_per_turn: self.action_points_per_turn + other.action_points_per_turn,
            max_action_points: self.max_action_points + other.max_action_points,
            max_hp_rate: self.max_hp_rate + other.max_hp_rate,
            magical_attack_rate: self.magical_attack_rate + other.magical_attack_rate,
            magical_defense_rate: self.magical_defense_rate + other.magical_defense_rate,
            physical_attack_rate: self.physical_attack_rate + other.physical_attack_rate,
            physical_defense_rate: self.physical_defense_rate + other.physical_defense_rate,
        }
    }
}
