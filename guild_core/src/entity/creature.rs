//! Creature records: the at-rest roster form and the in-encounter form

use crate::entity::job::JobData;
use crate::entity::race::RaceData;
use crate::entity::state_change::{StateChange, StateChangeData};
use crate::id::{GeneratedId, IdIssuer};
use crate::random::UnitRandom;
use crate::stat::{AbilityScores, StatModifiers};
use serde::{Deserialize, Serialize};

/// An authored creature archetype: "elf archer", "goblin warrior",
/// "cerberus". Names the whole kind, not an individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    pub job_id: String,
    pub race_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}

/// A rostered creature not currently on an adventure.
///
/// This is the durable identity: recruitment offers and stage placements
/// reference these ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleCreature {
    pub id: GeneratedId,
    pub name: String,
    pub job_id: String,
    pub race_id: String,
    /// Primary scores, rolled once at generation.
    pub ability_scores: AbilityScores,
    /// Base power: 1 or more, no cap. Job proficiency, HP, shields and
    /// damage all scale with it, and it rarely rises after generation.
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}

impl IdleCreature {
    /// Mint a rostered creature from an archetype: issue its durable id and
    /// roll its primary scores through the injected source.
    pub fn generate(
        data: &CreatureData,
        level: u32,
        ids: &IdIssuer,
        source: &mut impl UnitRandom,
    ) -> IdleCreature {
        IdleCreature {
            id: ids.next(),
            name: data.name.clone(),
            job_id: data.job_id.clone(),
            race_id: data.race_id.clone(),
            ability_scores: AbilityScores::roll(source),
            level,
            stats: data.stats,
        }
    }
}

/// A roster-side party; joining one is what joining the guild means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleParty {
    pub id: GeneratedId,
    pub idle_creature_ids: Vec<GeneratedId>,
}

/// A creature out on an adventure.
///
/// Built by copying the idle record and resolving its job and race ids into
/// full definitions, and deleted when the adventure ends. Owns its active
/// state changes; they live and die with the encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Copied from the idle record; unique across the creatures of one
    /// adventure because idle ids already are.
    pub id: GeneratedId,
    pub name: String,
    pub level: u32,
    pub ability_scores: AbilityScores,
    pub job: JobData,
    pub race: RaceData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
    #[serde(default)]
    pub state_changes: Vec<StateChange>,
}

/// The creatures out on one adventure together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub creatures: Vec<Creature>,
}

impl Creature {
    /// Copy an idle creature into its encounter form.
    pub fn from_idle(idle: &IdleCreature, job: JobData, race: RaceData) -> Creature {
        Creature {
            id: idle.id.clone(),
            name: idle.name.clone(),
            level: idle.level,
            ability_scores: idle.ability_scores,
            job,
            race,
            stats: idle.stats,
            state_changes: Vec::new(),
        }
    }

    /// Apply a state change, issuing a fresh instance id for it.
    pub fn add_state_change(&mut self, data: StateChangeData, ids: &IdIssuer) -> GeneratedId {
        let id = ids.next();
        self.state_changes.push(StateChange {
            id: id.clone(),
            data,
        });
        id
    }

    /// Remove a state change instance by id; true if one was removed.
    pub fn remove_state_change(&mut self, id: &GeneratedId) -> bool {
        let before = self.state_changes.len();
        self.state_changes.retain(|change| &change.id != id);
        self.state_changes.len() != before
    }

    /// Resolve the creature's modifier set from everything currently
    /// contributing: job, race, the creature's own deltas and every active
    /// state change.
    ///
    /// Recomputed on every call; nothing caches the result, so it cannot
    /// drift when a contributing source appears or expires.
    pub fn aggregate_modifiers(&self) -> StatModifiers {
        let sources = self
            .job
            .stats
            .iter()
            .chain(self.race.stats.iter())
            .chain(self.stats.iter())
            .chain(
                self.state_changes
                    .iter()
                    .filter_map(|change| change.data.stats.as_ref()),
            );
        StatModifiers::aggregate(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> JobData {
        JobData {
            id: "fighter".to_string(),
            name: "Fighter".to_string(),
            description: String::new(),
            main_expertise_id: "fighter".to_string(),
            sub_expertise_ids: None,
            stats: Some(StatModifiers {
                max_hp_rate: 0.25,
                physical_attack_rate: 0.25,
                ..Default::default()
            }),
        }
    }

    fn human() -> RaceData {
        RaceData {
            id: "human".to_string(),
            name: "Human".to_string(),
            description: String::new(),
            expertise_ids: None,
            stats: None,
        }
    }

    fn archetype() -> CreatureData {
        CreatureData {
            name: "Town Guard".to_string(),
            job_id: "fighter".to_string(),
            race_id: "human".to_string(),
            stats: None,
        }
    }

    fn haste() -> StateChangeData {
        StateChangeData {
            id: "haste".to_string(),
            ability_scores: None,
            stats: Some(StatModifiers {
                action_points_per_turn: 1.0,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_generate_issues_id_and_rolls_scores() {
        let ids = IdIssuer::new();
        let idle = IdleCreature::generate(&archetype(), 3, &ids, &mut || 0.0);

        assert_eq!(idle.id, GeneratedId::from("1"));
        assert_eq!(idle.level, 3);
        assert_eq!(idle.ability_scores.agility.value, 1);
        assert_eq!(idle.ability_scores.strength.value, 1);
    }

    #[test]
    fn test_from_idle_copies_identity_and_resolves_records() {
        let ids = IdIssuer::new();
        let idle = IdleCreature::generate(&archetype(), 5, &ids, &mut || 0.5);
        let creature = Creature::from_idle(&idle, fighter(), human());

        assert_eq!(creature.id, idle.id);
        assert_eq!(creature.level, 5);
        assert_eq!(creature.job.id, "fighter");
        assert_eq!(creature.race.id, "human");
        assert_eq!(creature.ability_scores, idle.ability_scores);
        assert!(creature.state_changes.is_empty());
    }

    #[test]
    fn test_state_change_ids_are_distinct_from_creature_ids() {
        let ids = IdIssuer::new();
        let idle = IdleCreature::generate(&archetype(), 1, &ids, &mut || 0.5);
        let mut creature = Creature::from_idle(&idle, fighter(), human());

        let change_id = creature.add_state_change(haste(), &ids);
        assert_ne!(change_id, creature.id);
        assert_eq!(creature.state_changes.len(), 1);
    }

    #[test]
    fn test_aggregate_includes_every_active_source() {
        let ids = IdIssuer::new();
        let idle = IdleCreature::generate(&archetype(), 1, &ids, &mut || 0.5);
        let mut creature = Creature::from_idle(&idle, fighter(), human());
        creature.add_state_change(haste(), &ids);

        let aggregate = creature.aggregate_modifiers();
        assert!((aggregate.max_hp_rate - 0.25).abs() < 1e-9);
        assert!((aggregate.physical_attack_rate - 0.25).abs() < 1e-9);
        assert!((aggregate.action_points_per_turn - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_recomputes_after_removal() {
        let ids = IdIssuer::new();
        let idle = IdleCreature::generate(&archetype(), 1, &ids, &mut || 0.5);
        let mut creature = Creature::from_idle(&idle, fighter(), human());

        let change_id = creature.add_state_change(haste(), &ids);
        assert!((creature.aggregate_modifiers().action_points_per_turn - 1.0).abs() < 1e-9);

        assert!(creature.remove_state_change(&change_id));
        assert!((creature.aggregate_modifiers().action_points_per_turn - 0.0).abs() < 1e-9);
        assert!(!creature.remove_state_change(&change_id));
    }

    #[test]
    fn test_creature_without_sources_aggregates_to_zero() {
        let ids = IdIssuer::new();
        let mut job = fighter();
        job.stats = None;
        let idle = IdleCreature::generate(&archetype(), 1, &ids, &mut || 0.5);
        let creature = Creature::from_idle(&idle, job, human());

        assert_eq!(creature.aggregate_modifiers(), StatModifiers::default());
    }
}
