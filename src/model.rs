use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("round {round}: tally title {title:?} is not a survey choice")]
    UnknownTitle { round: usize, title: String },
    #[error("round {round}: tally for {title:?} uses unknown rank field {field:?}")]
    UnknownRankField {
        round: usize,
        title: String,
        field: String,
    },
}

/// Survey results as served to the result view: one tally snapshot per
/// elimination round. Matches the JSON the view consumes field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub title: String,
    pub choices: Vec<String>,
    /// Ordered rounds; the candidate list may shrink from one round to the
    /// next as choices are eliminated.
    pub votes: Vec<Vec<CandidateTally>>,
    pub rank_fields: Vec<String>,
}

/// Per-round vote counts for one choice, keyed by rank field.
///
/// Serializes flat, e.g.
/// ```txt
/// { "title": "A", "first choice": 3, "second choice": 0, ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTally {
    pub title: String,
    #[serde(flatten)]
    pub counts: HashMap<String, u32>,
}

impl SurveyResult {
    /// Integrity check: every tally title is a survey choice and every tally
    /// key is a known rank field. The fetch path does not call this; callers
    /// that care about malformed resources can.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, round) in self.votes.iter().enumerate() {
            for tally in round {
                if !self.choices.contains(&tally.title) {
                    return Err(ModelError::UnknownTitle {
                        round: index + 1,
                        title: tally.title.clone(),
                    });
                }
                for field in tally.counts.keys() {
                    if !self.rank_fields.contains(field) {
                        return Err(ModelError::UnknownRankField {
                            round: index + 1,
                            title: tally.title.clone(),
                            field: field.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl CandidateTally {
    /// Build a tally from a count-per-rank-position vector, pairing each
    /// count with its generated rank field name.
    pub fn from_counts(title: impl Into<String>, counts: &[u32]) -> CandidateTally {
        let counts = rank_fields(counts.len())
            .into_iter()
            .zip(counts.iter().copied())
            .collect();
        CandidateTally {
            title: title.into(),
            counts,
        }
    }

    /// Count for a rank field; absent fields mean zero.
    pub fn count(&self, field: &str) -> u32 {
        self.counts.get(field).copied().unwrap_or(0)
    }
}

/// Rank field names for a survey with `count` ranking positions:
/// "first choice" .. "fifth choice", then "6th choice" style ordinals.
pub fn rank_fields(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{} choice", ordinal(i))).collect()
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        4 => "fourth".to_string(),
        5 => "fifth".to_string(),
        _ if n % 100 / 10 == 1 => format!("{}th", n),
        _ if n % 10 == 1 => format!("{}st", n),
        _ if n % 10 == 2 => format!("{}nd", n),
        _ if n % 10 == 3 => format!("{}rd", n),
        _ => format!("{}th", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rank_fields_use_words_through_fifth() {
        assert_eq!(
            rank_fields(5),
            vec![
                "first choice",
                "second choice",
                "third choice",
                "fourth choice",
                "fifth choice"
            ]
        );
    }

    #[test]
    fn rank_fields_fall_back_to_numeric_ordinals() {
        let fields = rank_fields(23);
        assert_eq!(fields[5], "6th choice");
        assert_eq!(fields[10], "11th choice");
        assert_eq!(fields[11], "12th choice");
        assert_eq!(fields[12], "13th choice");
        assert_eq!(fields[20], "21st choice");
        assert_eq!(fields[21], "22nd choice");
        assert_eq!(fields[22], "23rd choice");
    }

    #[test]
    fn tally_round_trips_through_flat_json() {
        let tally = CandidateTally::from_counts("E", &[6, 4, 1, 0, 0]);
        let value = serde_json::to_value(&tally).unwrap();
        assert_eq!(value["title"], "E");
        assert_eq!(value["first choice"], 6);
        assert_eq!(value["fifth choice"], 0);

        let parsed: CandidateTally = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, tally);
    }

    #[test]
    fn absent_rank_fields_count_as_zero() {
        let tally: CandidateTally = serde_json::from_value(json!({
            "title": "E",
            "third choice": 1,
            "first choice": 6
        }))
        .unwrap();
        assert_eq!(tally.count("first choice"), 6);
        assert_eq!(tally.count("third choice"), 1);
        assert_eq!(tally.count("second choice"), 0);
    }

    #[test]
    fn validate_rejects_unknown_title() {
        let result = SurveyResult {
            title: "Test".to_string(),
            choices: vec!["A".to_string()],
            votes: vec![vec![CandidateTally::from_counts("Z", &[1])]],
            rank_fields: rank_fields(1),
        };
        match result.validate() {
            Err(ModelError::UnknownTitle { round, title }) => {
                assert_eq!(round, 1);
                assert_eq!(title, "Z");
            }
            other => panic!("expected unknown title error, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_unknown_rank_field() {
        let mut tally = CandidateTally::from_counts("A", &[1]);
        tally.counts.insert("write-in".to_string(), 2);
        let result = SurveyResult {
            title: "Test".to_string(),
            choices: vec!["A".to_string()],
            votes: vec![vec![tally]],
            rank_fields: rank_fields(1),
        };
        match result.validate() {
            Err(ModelError::UnknownRankField { field, .. }) => {
                assert_eq!(field, "write-in");
            }
            other => panic!("expected unknown rank field error, got {:?}", other),
        }
    }
}
