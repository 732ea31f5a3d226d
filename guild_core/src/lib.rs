//! guild_core - Stat and modifier core for the guild simulation
//!
//! This library provides:
//! - StatData/StatCatalog: declared stat definitions and their registry
//! - StatTemplate/AbilityScores: per-entity runtime stat instances
//! - StatModifiers: the closed modifier record and its order-independent
//!   aggregation across job, race, creature and state-change sources
//! - RangedNumber: inclusive range validation for authored values
//! - UnitRandom + random_integer/shuffle/choose_by_ratio: injected
//!   deterministic randomness
//! - IdIssuer: per-run unique id issuance
//! - Job/Race/Expertise/StateChange/Creature records and the
//!   roster-to-encounter glue

pub mod collection;
pub mod content;
pub mod entity;
pub mod id;
pub mod random;
pub mod range;
pub mod stat;

// Re-export core types for convenience
pub use collection::{index_by, InvalidKeyError};
pub use content::ContentError;
pub use entity::{
    Creature, CreatureData, ExpertiseData, IdleCreature, IdleParty, JobData, Party, RaceData,
    SkillData, StateChange, StateChangeData, MAX_EXPERTISE_LEVEL,
};
pub use id::{GeneratedId, IdIssuer};
pub use random::{choose_by_ratio, random_integer, shuffle, RngSource, UnitRandom};
pub use range::{InvalidRangeError, RangedNumber};
pub use stat::{
    AbilityScores, IntegerStat, RateStat, StatCatalog, StatData, StatKind, StatModifiers,
    StatTemplate,
};
