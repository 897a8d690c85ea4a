//! Job Match - candidate/job compatibility scoring engine
//!
//! This library scores a candidate against a job posting on four independent
//! dimensions (skills, experience/education, location, salary) and folds them
//! into one weighted score used for candidate->jobs search, job->candidates
//! search and global top-N ranking.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::config::{Settings, SettingsError};
pub use crate::core::{MatchingEngine, calculate_match_score};
pub use models::{Candidate, Job, MatchResult, MatchLevel, MatchSummary, MatchStatistics, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = MatchingEngine::default();
        assert_eq!(engine.weights(), &ScoringWeights::default());
    }
}
