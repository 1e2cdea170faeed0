//! Fixed sample data for the result view: one illustrative four-round
//! instant-runoff count over five choices, narrowing to two by the last
//! round. Stands in for a live resource while the endpoint is unsettled.

use crate::model::{rank_fields, CandidateTally, SurveyResult};

/// Returns the sample result. Built fresh on every call; repeated calls are
/// structurally equal.
pub fn sample_result() -> SurveyResult {
    SurveyResult {
        title: "New Survey".to_string(),
        choices: choices(),
        votes: vec![
            round(&[
                ("A", [3, 0, 0, 0, 0]),
                ("B", [4, 0, 0, 0, 0]),
                ("C", [2, 0, 0, 0, 0]),
                ("D", [5, 0, 0, 0, 0]),
                ("E", [6, 0, 0, 0, 0]),
            ]),
            round(&[
                ("A", [3, 0, 0, 0, 0]),
                ("B", [4, 0, 0, 0, 0]),
                ("D", [5, 2, 0, 0, 0]),
                ("E", [6, 0, 0, 0, 0]),
            ]),
            round(&[
                ("B", [4, 0, 0, 0, 0]),
                ("D", [5, 3, 0, 0, 0]),
                ("E", [6, 2, 0, 0, 0]),
            ]),
            round(&[("D", [5, 4, 0, 0, 0]), ("E", [6, 4, 1, 0, 0])]),
        ],
        rank_fields: rank_fields(5),
    }
}

fn choices() -> Vec<String> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn round(tallies: &[(&str, [u32; 5])]) -> Vec<CandidateTally> {
    tallies
        .iter()
        .map(|(title, counts)| CandidateTally::from_counts(*title, counts))
        .collect()
}
