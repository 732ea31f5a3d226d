//! Job definitions

use crate::random::{random_integer, shuffle, UnitRandom};
use crate::stat::StatModifiers;
use serde::{Deserialize, Serialize};

/// An authored job definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The expertise every creature of this job carries; it shares the job's
    /// id and name.
    pub main_expertise_id: String,
    /// Optional tracks an adventurer may start with. Monsters and other
    /// non-adventurer creatures ignore these entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_expertise_ids: Option<[String; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatModifiers>,
}

impl JobData {
    /// Pick the sub expertises an adventurer starts with: 1 or 2 of the
    /// job's three, drawn through the injected source.
    ///
    /// Game balance assumes two; a single pick is the early-game on-ramp.
    /// Jobs without sub expertises pick nothing.
    pub fn choose_sub_expertises(&self, source: &mut impl UnitRandom) -> Vec<String> {
        match &self.sub_expertise_ids {
            Some(ids) => {
                let shuffled = shuffle(&ids[..], source);
                let count = 1 + random_integer(source, 1) as usize;
                shuffled.into_iter().take(count).collect()
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranger() -> JobData {
        JobData {
            id: "ranger".to_string(),
            name: "Ranger".to_string(),
            description: String::new(),
            main_expertise_id: "ranger".to_string(),
            sub_expertise_ids: Some([
                "scout".to_string(),
                "survivalist".to_string(),
                "beastmaster".to_string(),
            ]),
            stats: None,
        }
    }

    #[test]
    fn test_chooses_one_or_two_sub_expertises() {
        let job = ranger();

        // Draw order: three shuffle draws, then the count draw.
        let mut draws = [0.0, 0.0, 0.0, 0.0].into_iter();
        let one = job.choose_sub_expertises(&mut || draws.next().unwrap());
        assert_eq!(one.len(), 1);

        let mut draws = [0.0, 0.0, 0.0, 0.9].into_iter();
        let two = job.choose_sub_expertises(&mut || draws.next().unwrap());
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_choices_come_from_the_authored_subs() {
        let job = ranger();
        let subs = job.sub_expertise_ids.clone().unwrap();

        let mut draws = [0.7, 0.2, 0.5, 0.9].into_iter();
        let chosen = job.choose_sub_expertises(&mut || draws.next().unwrap());

        assert!(!chosen.is_empty());
        assert!(chosen.iter().all(|id| subs.contains(id)));
    }

    #[test]
    fn test_job_without_subs_chooses_nothing() {
        let mut job = ranger();
        job.sub_expertise_ids = None;
        assert!(job.choose_sub_expertises(&mut || 0.5).is_empty());
    }
}
