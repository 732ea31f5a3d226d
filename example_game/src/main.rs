//! Example walkthrough - drives guild_core the way a host simulation would
//!
//! This demo shows:
//! - Loading the built-in content tables
//! - Minting a seeded roster of idle creatures (same seed, same roster)
//! - Picking sub expertises for each adventurer
//! - Copying the roster into an encounter party
//! - Applying/expiring state changes and reading the recomputed aggregate
//!
//! Usage: `example_game [seed]` (default seed 42).

use guild_core::content::{
    default_expertises, default_jobs, default_races, default_stat_catalog, default_state_changes,
};
use guild_core::{Creature, CreatureData, IdIssuer, IdleCreature, IdleParty, Party, RngSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let catalog = default_stat_catalog().expect("built-in stat table");
    let jobs = default_jobs().expect("built-in job table");
    let races = default_races().expect("built-in race table");
    let expertises = default_expertises().expect("built-in expertise table");
    let state_changes = default_state_changes().expect("built-in state change table");

    println!("=== Content ===");
    println!(
        "{} stats, {} jobs, {} races, {} expertises",
        catalog.len(),
        jobs.len(),
        races.len(),
        expertises.len()
    );

    // One issuer and one seeded source for the whole run.
    let ids = IdIssuer::new();
    let mut source = RngSource(ChaCha8Rng::seed_from_u64(seed));

    let archetypes = [
        CreatureData {
            name: "Town Guard".to_string(),
            job_id: "fighter".to_string(),
            race_id: "human".to_string(),
            stats: None,
        },
        CreatureData {
            name: "Elf Vanguard".to_string(),
            job_id: "fighter".to_string(),
            race_id: "elf".to_string(),
            stats: None,
        },
        CreatureData {
            name: "Dwarf Vanguard".to_string(),
            job_id: "fighter".to_string(),
            race_id: "dwarf".to_string(),
            stats: None,
        },
    ];

    println!("\n=== Roster (seed {seed}) ===");
    let roster: Vec<IdleCreature> = archetypes
        .iter()
        .enumerate()
        .map(|(i, data)| IdleCreature::generate(data, 1 + i as u32, &ids, &mut source))
        .collect();

    for idle in &roster {
        let scores = &idle.ability_scores;
        println!(
            "#{} {} (lv {}): AGI {} / INT {} / STR {}",
            idle.id,
            idle.name,
            idle.level,
            scores.agility.value,
            scores.intelligence.value,
            scores.strength.value
        );

        let job = &jobs[&idle.job_id];
        let picked = job.choose_sub_expertises(&mut source);
        println!("    sub expertises: {}", picked.join(", "));
        for sub in &picked {
            let track = &expertises[sub];
            println!(
                "      {sub} level 1 grants: {}",
                track.skill_at_level(1).unwrap_or("-")
            );
        }
    }

    let idle_party = IdleParty {
        id: ids.next(),
        idle_creature_ids: roster.iter().map(|idle| idle.id.clone()).collect(),
    };
    println!("party #{} formed with {} members", idle_party.id, roster.len());

    println!("\n=== Adventure ===");
    let mut party = Party {
        creatures: roster
            .iter()
            .map(|idle| {
                Creature::from_idle(
                    idle,
                    jobs[&idle.job_id].clone(),
                    races[&idle.race_id].clone(),
                )
            })
            .collect(),
    };

    // Buff the first member, curse the second, leave the third alone.
    let haste = state_changes["haste"].clone();
    let curse = state_changes["curse_of_frailty"].clone();
    let haste_id = party.creatures[0].add_state_change(haste, &ids);
    party.creatures[1].add_state_change(curse, &ids);

    for creature in &party.creatures {
        let aggregate = creature.aggregate_modifiers();
        println!(
            "{} aggregate: {}",
            creature.name,
            serde_json::to_string(&aggregate).expect("aggregate serializes")
        );
    }

    println!("\nhaste expires on {}", party.creatures[0].name);
    party.creatures[0].remove_state_change(&haste_id);
    let aggregate = party.creatures[0].aggregate_modifiers();
    println!(
        "{} aggregate: {}",
        party.creatures[0].name,
        serde_json::to_string(&aggregate).expect("aggregate serializes")
    );
}
