//! Entity records: jobs, races, expertises, state changes and creatures

mod creature;
mod expertise;
mod job;
mod race;
mod state_change;

pub use creature::{Creature, CreatureData, IdleCreature, IdleParty, Party};
pub use expertise::{ExpertiseData, SkillData, MAX_EXPERTISE_LEVEL};
pub use job::JobData;
pub use race::RaceData;
pub use state_change::{StateChange, StateChangeData};
