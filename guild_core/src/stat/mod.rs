//! Stat definitions, per-entity instances and modifier aggregation

mod data;
mod modifiers;
mod template;

pub use data::{StatCatalog, StatData, StatKind};
pub use modifiers::StatModifiers;
pub use template::{AbilityScores, IntegerStat, RateStat, StatTemplate};
