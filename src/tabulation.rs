//! Instant-runoff tabulation: turns raw ranked ballots into the per-round
//! tally snapshots of a [`SurveyResult`].

use crate::model::{rank_fields, CandidateTally, SurveyResult};
use itertools::Itertools;

/// Tabulate ranked ballots into round-by-round snapshots.
///
/// A ballot is an ordered list of indices into `choices`, most preferred
/// first; partial rankings are fine and out-of-range indices are skipped.
/// Each round credits every ballot's highest-ranked surviving choice at the
/// rank position it held on the ballot, then eliminates the candidate with
/// the smallest tally vector. Rounds stop once two or fewer candidates hold
/// votes.
///
/// Ties on elimination go to the lowest-indexed choice.
pub fn tabulate(title: impl Into<String>, choices: &[String], ballots: &[Vec<usize>]) -> SurveyResult {
    let mut rounds = Vec::new();
    let mut eliminated: Vec<usize> = Vec::new();

    loop {
        // tally[candidate][rank position on the ballot]
        let mut tally = vec![vec![0_u32; choices.len()]; choices.len()];
        let mut has_votes = vec![false; choices.len()];
        for ballot in ballots {
            let best = ballot
                .iter()
                .position(|&choice| choice < choices.len() && !eliminated.contains(&choice));
            if let Some(position) = best {
                let choice = ballot[position];
                has_votes[choice] = true;
                tally[choice][position] += 1;
            }
        }

        let survivors = has_votes.iter().positions(|&held| held).collect_vec();
        if survivors.is_empty() {
            break;
        }

        rounds.push(
            survivors
                .iter()
                .map(|&choice| CandidateTally::from_counts(choices[choice].clone(), &tally[choice]))
                .collect(),
        );

        if survivors.len() <= 2 {
            break;
        }

        let &loser = survivors
            .iter()
            .min_by_key(|&&choice| &tally[choice])
            .expect("just checked that survivors is non-empty");
        eliminated.push(loser);
    }

    SurveyResult {
        title: title.into(),
        choices: choices.to_vec(),
        votes: rounds,
        rank_fields: rank_fields(choices.len()),
    }
}
