//! High score leaderboard
//!
//! Tracks the top 10 finished rounds for the lifetime of the process.
//! Nothing is written to disk; the table dies with the process.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final round score
    pub score: u32,
    /// Orbs collected that round
    pub orbs: u32,
    /// Host timestamp (seconds) when achieved
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it
    /// doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u32, orbs: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            orbs,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(10));
    }

    #[test]
    fn test_entries_stay_sorted() {
        let mut scores = HighScores::new();
        scores.add_score(100, 5, 0.0);
        scores.add_score(160, 5, 1.0);
        scores.add_score(130, 4, 2.0);

        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![160, 130, 100]);
        assert_eq!(scores.top_score(), Some(160));
    }

    #[test]
    fn test_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(100, 5, 0.0), Some(1));
        assert_eq!(scores.add_score(160, 5, 1.0), Some(1));
        assert_eq!(scores.add_score(90, 3, 2.0), Some(3));
        assert_eq!(scores.potential_rank(120), Some(2));
    }

    #[test]
    fn test_table_truncates_at_capacity() {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES as u32 {
            scores.add_score(100 + i * 10, 5, i as f64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Below the floor: rejected
        assert!(!scores.qualifies(50));
        assert_eq!(scores.add_score(50, 2, 99.0), None);

        // Above the floor: inserted, table stays capped
        assert_eq!(scores.add_score(500, 5, 100.0), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }
}
