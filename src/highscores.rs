//! High score leaderboard
//!
//! Top 5 run scores, highest first. Stored as a bare JSON array of integers.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_HIGH_SCORES;

/// High score leaderboard (sorted descending, at most 5 entries)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct HighScores {
    scores: Vec<u64>,
}

impl From<Vec<u64>> for HighScores {
    fn from(scores: Vec<u64>) -> Self {
        Self::from_scores(scores)
    }
}

impl From<HighScores> for Vec<u64> {
    fn from(table: HighScores) -> Self {
        table.scores
    }
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build a leaderboard from arbitrary scores, restoring order and length
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { scores }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u64) -> bool {
        if self.scores.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.scores.last().map(|&s| score > s).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.scores.iter().position(|&s| score > s);
        Some(rank.unwrap_or(self.scores.len()) + 1)
    }

    /// Record a finished run.
    /// Returns the rank achieved (1-indexed) or None if it fell off the table.
    pub fn commit(&mut self, score: u64) -> Option<usize> {
        // Ties go after existing equal scores
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.scores.first().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.scores
    }
}
