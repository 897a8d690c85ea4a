// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Job, MatchResult, MatchLevel, MatchSummary, MatchStatistics, CandidateMatches, ScoringWeights};
pub use requests::{CandidatePayload, JobPayload, MatchOptions, PayloadError, parse_candidate, parse_job};
pub use responses::{MatchView, TopMatchView, MatchListResponse, StatisticsView, round2};
