//! Authored stat definitions and the catalog registry

use crate::collection::{index_by, InvalidKeyError};
use crate::range::RangedNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a stat's value means and how contributions to it combine.
///
/// One case per kind; only `integer` and `rate` carry an authored range, so
/// the other kinds cannot be given one by accident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatKind {
    Chance,
    /// Boolean-style flag that holds only while every source grants it.
    EveryFlag,
    Integer { range: RangedNumber },
    /// Boolean-style flag that holds while at least one source grants it.
    SomeFlag,
    Rate { range: RangedNumber },
    ReductionRate,
}

/// One authored stat definition.
///
/// `id` is unique across the whole catalog and is the join key everything
/// else uses: jobs, expertises and state changes name stats as plain strings,
/// never as references. Authored once, immutable, loaded at process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatData {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(flatten)]
    pub kind: StatKind,
}

impl StatData {
    /// The authored range, for the kinds that carry one.
    pub fn range(&self) -> Option<&RangedNumber> {
        match &self.kind {
            StatKind::Integer { range } | StatKind::Rate { range } => Some(range),
            _ => None,
        }
    }
}

/// Read-only, id-keyed registry of every stat definition.
///
/// Built once from the content tables and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct StatCatalog {
    entries: HashMap<String, StatData>,
}

impl StatCatalog {
    pub fn from_entries(entries: Vec<StatData>) -> Result<Self, InvalidKeyError> {
        let entries = index_by(entries, |stat| Some(stat.id.as_str()))?;
        Ok(StatCatalog { entries })
    }

    pub fn get(&self, id: &str) -> Option<&StatData> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agility() -> StatData {
        StatData {
            id: "agility".to_string(),
            name: "Agility".to_string(),
            short_name: "AGI".to_string(),
            kind: StatKind::Integer {
                range: RangedNumber::between(1.0, 99.0),
            },
        }
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = StatCatalog::from_entries(vec![agility()]).unwrap();
        assert!(catalog.contains("agility"));
        assert_eq!(catalog.get("agility").unwrap().short_name, "AGI");
        assert!(catalog.get("luck").is_none());
    }

    #[test]
    fn test_range_only_on_ranged_kinds() {
        let ranged = agility();
        assert_eq!(ranged.range(), Some(&RangedNumber::between(1.0, 99.0)));

        let unranged = StatData {
            id: "magical_defense_rate".to_string(),
            name: "Magical Defense Rate".to_string(),
            short_name: "MDR".to_string(),
            kind: StatKind::ReductionRate,
        };
        assert_eq!(unranged.range(), None);
    }

    #[test]
    fn test_kind_tag_round_trips_through_json() {
        let stat = agility();
        let json = serde_json::to_string(&stat).unwrap();
        assert!(json.contains(r#""kind":"integer""#));

        let back: StatData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stat);
    }
}
