use serde::{Deserialize, Serialize};

use crate::models::domain::{Candidate, Job, MatchResult, MatchStatistics, MatchSummary};

/// Round to two decimal places for display
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One match as shown to API/UI consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub candidate_id: String,
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub match_score: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub salary_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_level: String,
}

impl MatchView {
    pub fn from_result(result: &MatchResult) -> Self {
        Self {
            candidate_id: result.candidate_id().to_string(),
            job_id: result.job_id().to_string(),
            candidate_name: None,
            candidate_email: None,
            job_title: None,
            company: None,
            match_score: round2(result.match_score()),
            skill_match: round2(result.skill_match()),
            experience_match: round2(result.experience_match()),
            location_match: round2(result.location_match()),
            salary_match: round2(result.salary_match()),
            matched_skills: result.matched_skills().to_vec(),
            missing_skills: result.missing_skills().to_vec(),
            match_level: result.match_level().label().to_string(),
        }
    }

    /// Attach job display fields (candidate -> jobs listings)
    pub fn with_job(mut self, job: &Job) -> Self {
        self.job_title = Some(job.title().to_string());
        self.company = Some(job.company().to_string());
        self
    }

    /// Attach candidate display fields (job -> candidates listings)
    pub fn with_candidate(mut self, candidate: &Candidate) -> Self {
        self.candidate_name = Some(candidate.name().to_string());
        self.candidate_email = Some(candidate.email().to_string());
        self
    }
}

/// All-pairs ranking row as shown to consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMatchView {
    pub candidate_id: String,
    pub candidate_name: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub match_score: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub salary_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_level: String,
}

impl From<&MatchSummary> for TopMatchView {
    fn from(summary: &MatchSummary) -> Self {
        Self {
            candidate_id: summary.candidate_id.clone(),
            candidate_name: summary.candidate_name.clone(),
            job_id: summary.job_id.clone(),
            job_title: summary.job_title.clone(),
            company: summary.company.clone(),
            match_score: round2(summary.match_score),
            skill_match: round2(summary.skill_match),
            experience_match: round2(summary.experience_match),
            location_match: round2(summary.location_match),
            salary_match: round2(summary.salary_match),
            matched_skills: summary.matched_skills.clone(),
            missing_skills: summary.missing_skills.clone(),
            match_level: summary.match_level().label().to_string(),
        }
    }
}

/// Listing envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchListResponse<T> {
    pub matches: Vec<T>,
    pub total_matches: usize,
}

impl<T> MatchListResponse<T> {
    pub fn new(matches: Vec<T>) -> Self {
        let total_matches = matches.len();
        Self { matches, total_matches }
    }
}

/// Match statistics with rounded scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsView {
    pub count: usize,
    pub avg_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub excellent_matches: usize,
    pub good_matches: usize,
    pub fair_matches: usize,
    pub low_matches: usize,
}

impl From<&MatchStatistics> for StatisticsView {
    fn from(stats: &MatchStatistics) -> Self {
        Self {
            count: stats.count,
            avg_score: round2(stats.avg_score),
            min_score: round2(stats.min_score),
            max_score: round2(stats.max_score),
            excellent_matches: stats.excellent_matches,
            good_matches: stats.good_matches,
            fair_matches: stats.fair_matches,
            low_matches: stats.low_matches,
        }
    }
}
