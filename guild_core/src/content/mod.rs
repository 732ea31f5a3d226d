//! Built-in content tables and TOML loading
//!
//! Content is authored as TOML: the tables every game needs ship embedded in
//! the crate, and hosts can load replacements or additions from disk. The
//! core only ever reads the loaded records; nothing here mutates after load.

use crate::collection::index_by;
use crate::entity::{ExpertiseData, JobData, RaceData, SkillData, StateChangeData};
use crate::stat::{StatCatalog, StatData};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Content loading error.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Load a TOML content file and deserialize it.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Deserialize a TOML content string.
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ContentError> {
    Ok(toml::from_str(content)?)
}

#[derive(Debug, Deserialize)]
struct StatsFile {
    stats: Vec<StatData>,
}

#[derive(Debug, Deserialize)]
struct JobsFile {
    jobs: Vec<JobData>,
}

#[derive(Debug, Deserialize)]
struct RacesFile {
    races: Vec<RaceData>,
}

#[derive(Debug, Deserialize)]
struct ExpertisesFile {
    expertises: Vec<ExpertiseData>,
}

#[derive(Debug, Deserialize)]
struct SkillsFile {
    skills: Vec<SkillData>,
}

#[derive(Debug, Deserialize)]
struct StateChangesFile {
    state_changes: Vec<StateChangeData>,
}

/// Parse a `[[stats]]` document into the catalog.
pub fn parse_stat_catalog(content: &str) -> Result<StatCatalog, ContentError> {
    let file: StatsFile = parse_toml(content)?;
    StatCatalog::from_entries(file.stats).map_err(|e| ContentError::Invalid(e.to_string()))
}

/// Parse a `[[jobs]]` document into an id-keyed map.
pub fn parse_jobs(content: &str) -> Result<HashMap<String, JobData>, ContentError> {
    let file: JobsFile = parse_toml(content)?;
    index_by(file.jobs, |job| Some(job.id.as_str()))
        .map_err(|e| ContentError::Invalid(e.to_string()))
}

/// Parse a `[[races]]` document into an id-keyed map.
pub fn parse_races(content: &str) -> Result<HashMap<String, RaceData>, ContentError> {
    let file: RacesFile = parse_toml(content)?;
    index_by(file.races, |race| Some(race.id.as_str()))
        .map_err(|e| ContentError::Invalid(e.to_string()))
}

/// Parse a `[[expertises]]` document into an id-keyed map.
pub fn parse_expertises(content: &str) -> Result<HashMap<String, ExpertiseData>, ContentError> {
    let file: ExpertisesFile = parse_toml(content)?;
    index_by(file.expertises, |expertise| Some(expertise.id.as_str()))
        .map_err(|e| ContentError::Invalid(e.to_string()))
}

/// Parse a `[[skills]]` document into an id-keyed map.
pub fn parse_skills(content: &str) -> Result<HashMap<String, SkillData>, ContentError> {
    let file: SkillsFile = parse_toml(content)?;
    index_by(file.skills, |skill| Some(skill.id.as_str()))
        .map_err(|e| ContentError::Invalid(e.to_string()))
}

/// Parse a `[[state_changes]]` document into an id-keyed map.
pub fn parse_state_changes(
    content: &str,
) -> Result<HashMap<String, StateChangeData>, ContentError> {
    let file: StateChangesFile = parse_toml(content)?;
    index_by(file.state_changes, |change| Some(change.id.as_str()))
        .map_err(|e| ContentError::Invalid(e.to_string()))
}

/// The built-in stat table.
pub fn default_stat_catalog() -> Result<StatCatalog, ContentError> {
    parse_stat_catalog(include_str!("../../content/stats.toml"))
}

/// The built-in job table.
pub fn default_jobs() -> Result<HashMap<String, JobData>, ContentError> {
    parse_jobs(include_str!("../../content/jobs.toml"))
}

/// The built-in race table.
pub fn default_races() -> Result<HashMap<String, RaceData>, ContentError> {
    parse_races(include_str!("../../content/races.toml"))
}

/// The built-in expertise table.
pub fn default_expertises() -> Result<HashMap<String, ExpertiseData>, ContentError> {
    parse_expertises(include_str!("../../content/expertises.toml"))
}

/// The built-in skill table.
pub fn default_skills() -> Result<HashMap<String, SkillData>, ContentError> {
    parse_skills(include_str!("../../content/skills.toml"))
}

/// The built-in state change table.
pub fn default_state_changes() -> Result<HashMap<String, StateChangeData>, ContentError> {
    parse_state_changes(include_str!("../../content/state_changes.toml"))
}
