use std::cmp::Ordering;

use rayon::prelude::*;

use crate::config::{Settings, SettingsError};
use crate::core::scoring::calculate_match_score;
use crate::models::{
    Candidate, CandidateMatches, Job, MatchLevel, MatchResult, MatchStatistics, MatchSummary,
    ScoringWeights,
};

/// Sort descending by score. `sort_by` is stable, so equal scores keep their
/// input order.
fn rank_descending<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}

/// Main matching orchestrator - combines the four dimension scorers
///
/// # Operations
/// 1. Single pair scoring
/// 2. One-to-many ranking with a minimum-score threshold
/// 3. All-pairs ranking truncated to the top N
/// 4. Statistics over a result set
///
/// The engine holds only its weights and defaults; every call is a pure
/// function of its inputs, so one engine can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    weights: ScoringWeights,
    min_threshold: f64,
    top_n: usize,
    parallel: bool,
}

impl MatchingEngine {
    /// Minimum overall score for one-to-many results when the caller gives none
    pub const DEFAULT_MIN_THRESHOLD: f64 = 30.0;
    /// All-pairs result limit when the caller gives none
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn new(weights: ScoringWeights) -> Self {
        if (weights.sum() - 1.0).abs() > 1e-6 {
            tracing::warn!(?weights, sum = weights.sum(), "Scoring weights do not sum to 1.0");
        }

        Self {
            weights,
            min_threshold: Self::DEFAULT_MIN_THRESHOLD,
            top_n: Self::DEFAULT_TOP_N,
            parallel: true,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Build an engine from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let weights = settings.scoring_weights()?;

        Ok(Self::new(weights)
            .with_min_threshold(settings.matching.min_threshold)
            .with_top_n(settings.matching.top_n)
            .with_parallel(settings.matching.parallel))
    }

    pub fn with_min_threshold(mut self, min_threshold: f64) -> Self {
        self.min_threshold = min_threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Whether all-pairs scoring fans out across the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_threshold(&self) -> f64 {
        self.min_threshold
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Match a single candidate to a single job
    pub fn match_pair(&self, candidate: &Candidate, job: &Job) -> MatchResult {
        calculate_match_score(candidate, job, &self.weights)
    }

    /// Score, keep results at or above the threshold, rank best first
    fn rank_filtered(&self, results: impl Iterator<Item = MatchResult>, min_threshold: Option<f64>) -> Vec<MatchResult> {
        let threshold = min_threshold.unwrap_or(self.min_threshold);

        let mut ranked: Vec<MatchResult> = results
            .filter(|result| result.match_score() >= threshold)
            .collect();
        rank_descending(&mut ranked, MatchResult::match_score);

        ranked
    }

    /// Match a candidate to many jobs
    ///
    /// # Arguments
    /// * `candidate` - The candidate to match
    /// * `jobs` - Jobs to match against
    /// * `min_threshold` - Minimum overall score to include, engine default when `None`
    ///
    /// # Returns
    /// Results sorted by overall score (descending); ties keep job order
    pub fn match_candidate_to_jobs(
        &self,
        candidate: &Candidate,
        jobs: &[Job],
        min_threshold: Option<f64>,
    ) -> Vec<MatchResult> {
        let ranked = self.rank_filtered(
            jobs.iter().map(|job| self.match_pair(candidate, job)),
            min_threshold,
        );

        tracing::debug!(
            candidate_id = candidate.candidate_id(),
            jobs = jobs.len(),
            matches = ranked.len(),
            "Matched candidate to jobs"
        );

        ranked
    }

    /// Match a job to many candidates; same ordering rules as
    /// [`match_candidate_to_jobs`](Self::match_candidate_to_jobs)
    pub fn match_job_to_candidates(
        &self,
        job: &Job,
        candidates: &[Candidate],
        min_threshold: Option<f64>,
    ) -> Vec<MatchResult> {
        let ranked = self.rank_filtered(
            candidates.iter().map(|candidate| self.match_pair(candidate, job)),
            min_threshold,
        );

        tracing::debug!(
            job_id = job.job_id(),
            candidates = candidates.len(),
            matches = ranked.len(),
            "Matched job to candidates"
        );

        ranked
    }

    /// Ranked jobs for every candidate, in candidate order
    pub fn match_all(
        &self,
        candidates: &[Candidate],
        jobs: &[Job],
        min_threshold: Option<f64>,
    ) -> Vec<CandidateMatches> {
        candidates
            .iter()
            .map(|candidate| CandidateMatches {
                candidate_id: candidate.candidate_id().to_string(),
                matches: self.match_candidate_to_jobs(candidate, jobs, min_threshold),
            })
            .collect()
    }

    /// Top N matches across the full candidate x job product, engine default
    /// N when `top_n` is `None`
    ///
    /// No threshold is applied. Pairs are scored independently (in parallel
    /// unless disabled) and gathered in candidate-major order before the
    /// stable sort, so ties rank the same either way.
    pub fn match_all_pairs(&self, candidates: &[Candidate], jobs: &[Job], top_n: Option<usize>) -> Vec<MatchSummary> {
        let top_n = top_n.unwrap_or(self.top_n);
        let score_row = |candidate: &Candidate| -> Vec<MatchSummary> {
            jobs.iter()
                .map(|job| MatchSummary::new(candidate, job, self.match_pair(candidate, job)))
                .collect()
        };

        let mut summaries: Vec<MatchSummary> = if self.parallel {
            candidates.par_iter().flat_map_iter(score_row).collect()
        } else {
            candidates.iter().flat_map(score_row).collect()
        };

        let total_pairs = summaries.len();
        rank_descending(&mut summaries, |summary| summary.match_score);
        summaries.truncate(top_n);

        tracing::debug!(
            candidates = candidates.len(),
            jobs = jobs.len(),
            total_pairs,
            top_n,
            parallel = self.parallel,
            "Ranked all candidate/job pairs"
        );

        summaries
    }

    /// Count, average, extremes and tier counts of a result set
    pub fn statistics(&self, matches: &[MatchResult]) -> MatchStatistics {
        if matches.is_empty() {
            return MatchStatistics::default();
        }

        let mut stats = MatchStatistics {
            count: matches.len(),
            min_score: f64::INFINITY,
            max_score: f64::NEG_INFINITY,
            ..MatchStatistics::default()
        };
        let mut total = 0.0;

        for score in matches.iter().map(MatchResult::match_score) {
            total += score;
            stats.min_score = stats.min_score.min(score);
            stats.max_score = stats.max_score.max(score);

            match MatchLevel::from_score(score) {
                MatchLevel::Excellent => stats.excellent_matches += 1,
                MatchLevel::Good => stats.good_matches += 1,
                MatchLevel::Fair => stats.fair_matches += 1,
                MatchLevel::Low => stats.low_matches += 1,
            }
        }

        stats.avg_score = total / matches.len() as f64;
        stats
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
