//! Per-entity runtime stat instances

use crate::random::{choose_by_ratio, UnitRandom};
use crate::range::{InvalidRangeError, RangedNumber};
use crate::stat::data::{StatData, StatKind};
use serde::{Deserialize, Serialize};

/// A ranged integer stat instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegerStat {
    pub default: i64,
    pub range: RangedNumber,
    pub value: i64,
}

impl IntegerStat {
    pub fn new(default: i64, range: RangedNumber) -> Self {
        IntegerStat {
            default,
            range,
            value: default,
        }
    }

    /// Whether the current value sits inside the authored range.
    pub fn in_range(&self) -> Result<bool, InvalidRangeError> {
        self.range.validate(self.value as f64)
    }
}

/// A ranged rate stat instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateStat {
    pub default: f64,
    pub range: RangedNumber,
    pub value: f64,
}

impl RateStat {
    pub fn new(default: f64, range: RangedNumber) -> Self {
        RateStat {
            default,
            range,
            value: default,
        }
    }

    /// Whether the current value sits inside the authored range.
    pub fn in_range(&self) -> Result<bool, InvalidRangeError> {
        self.range.validate(self.value)
    }
}

/// The runtime shape of one stat on one entity.
///
/// Tagged one case per kind so each case carries only the fields legal for
/// it; a chance can never grow a range, a flag can never hold a number.
/// Values move only through the aggregation step, not ad-hoc assignment from
/// arbitrary call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatTemplate {
    Chance { default: f64, value: f64 },
    Integer(IntegerStat),
    /// AND-combined flag: one dissenting source clears it.
    NegativeFlag { default: bool, value: bool },
    /// OR-combined flag: one granting source sets it.
    PositiveFlag { default: bool, value: bool },
    Rate(RateStat),
    ReductionRate { default: f64, value: f64 },
}

impl StatTemplate {
    /// Instantiate the runtime template for a catalog entry.
    ///
    /// Ranged kinds copy the catalog range. Flag kinds ignore `default` as a
    /// number and start cleared: `every_flag` definitions become AND-combined
    /// flags, `some_flag` definitions OR-combined ones.
    pub fn from_data(data: &StatData, default: f64) -> StatTemplate {
        match &data.kind {
            StatKind::Chance => StatTemplate::Chance {
                default,
                value: default,
            },
            StatKind::EveryFlag => StatTemplate::NegativeFlag {
                default: false,
                value: false,
            },
            StatKind::Integer { range } => {
                StatTemplate::Integer(IntegerStat::new(default as i64, *range))
            }
            StatKind::SomeFlag => StatTemplate::PositiveFlag {
                default: false,
                value: false,
            },
            StatKind::Rate { range } => StatTemplate::Rate(RateStat::new(default, *range)),
            StatKind::ReductionRate => StatTemplate::ReductionRate {
                default,
                value: default,
            },
        }
    }

    /// Range check for the ranged kinds; unranged kinds always pass.
    pub fn validate(&self) -> Result<bool, InvalidRangeError> {
        match self {
            StatTemplate::Integer(stat) => stat.in_range(),
            StatTemplate::Rate(stat) => stat.in_range(),
            _ => Ok(true),
        }
    }
}

/// Roll distribution for a fresh ability score: median band 4-6, 10+ rare.
const ABILITY_SCORE_RATIOS: [(u32, i64); 12] = [
    (8, 1),
    (8, 2),
    (8, 3),
    (15, 4),
    (15, 5),
    (15, 6),
    (8, 7),
    (8, 8),
    (8, 9),
    (4, 10),
    (2, 11),
    (1, 12),
];

/// Authored bounds for primary scores.
const ABILITY_SCORE_RANGE: RangedNumber = RangedNumber {
    min: Some(1.0),
    max: Some(99.0),
};

/// The three primary scores.
///
/// Rolled once when an [`crate::entity::IdleCreature`] is generated and
/// stable afterwards; the contracted growth system is the only thing meant to
/// raise them, and even then only by a few points over a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub agility: IntegerStat,
    pub intelligence: IntegerStat,
    pub strength: IntegerStat,
}

impl AbilityScores {
    /// Roll all three scores from the injected source.
    pub fn roll(source: &mut impl UnitRandom) -> AbilityScores {
        AbilityScores {
            agility: Self::roll_score(source),
            intelligence: Self::roll_score(source),
            strength: Self::roll_score(source),
        }
    }

    fn roll_score(source: &mut impl UnitRandom) -> IntegerStat {
        let rolled = choose_by_ratio(source, &ABILITY_SCORE_RATIOS);
        IntegerStat::new(rolled, ABILITY_SCORE_RANGE)
    }
}
