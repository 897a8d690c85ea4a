use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::domain::{Candidate, Job, ScoringWeights, DEFAULT_EDUCATION};

/// Errors converting loosely-typed external data into domain values
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown scoring weight: {0}")]
    UnknownWeight(String),
}

fn default_education() -> String {
    DEFAULT_EDUCATION.to_string()
}

/// Candidate record as supplied by a loader or API client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatePayload {
    #[validate(length(min = 1))]
    pub candidate_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default = "default_education")]
    pub education: String,
    #[serde(default)]
    pub preferred_location: String,
    #[serde(default)]
    pub expected_salary: u64,
    #[serde(default)]
    pub resume_text: String,
}

/// Job record as supplied by a loader or API client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_salary_range"))]
pub struct JobPayload {
    #[validate(length(min = 1))]
    pub job_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: u32,
    #[serde(default = "default_education")]
    pub education_required: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_min: u64,
    #[serde(default)]
    pub salary_max: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_remote: bool,
}

fn validate_salary_range(job: &JobPayload) -> Result<(), ValidationError> {
    if job.salary_min > 0 && job.salary_max > 0 && job.salary_min > job.salary_max {
        return Err(ValidationError::new("salary_min_exceeds_max"));
    }
    Ok(())
}

/// Optional per-request knobs: weight overrides, threshold, result limit
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchOptions {
    #[serde(default)]
    pub weights: Option<HashMap<String, f64>>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub min_threshold: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl MatchOptions {
    pub fn from_json(value: serde_json::Value) -> Result<Self, PayloadError> {
        let options: MatchOptions = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// `base` with any requested overrides applied
    pub fn weights_or(&self, base: ScoringWeights) -> Result<ScoringWeights, PayloadError> {
        match &self.weights {
            Some(overrides) => base.with_overrides(overrides),
            None => Ok(base),
        }
    }
}

impl ScoringWeights {
    /// Replace the named weights; the sum is not re-checked
    pub fn with_overrides(&self, overrides: &HashMap<String, f64>) -> Result<Self, PayloadError> {
        let mut weights = *self;
        for (name, value) in overrides {
            match name.as_str() {
                "skills" => weights.skills = *value,
                "experience" => weights.experience = *value,
                "salary" => weights.salary = *value,
                "location" => weights.location = *value,
                other => return Err(PayloadError::UnknownWeight(other.to_string())),
            }
        }
        Ok(weights)
    }
}

impl Candidate {
    /// Validate a payload and build the normalized candidate
    pub fn from_payload(payload: CandidatePayload) -> Result<Self, PayloadError> {
        payload.validate()?;

        Ok(Candidate::new(payload.candidate_id, payload.name, payload.email)
            .with_skills(&payload.skills)
            .with_years_experience(payload.years_experience)
            .with_education(&payload.education)
            .with_preferred_location(&payload.preferred_location)
            .with_expected_salary(payload.expected_salary)
            .with_resume_text(payload.resume_text))
    }
}

impl Job {
    /// Validate a payload and build the normalized job
    pub fn from_payload(payload: JobPayload) -> Result<Self, PayloadError> {
        payload.validate()?;

        Ok(Job::new(payload.job_id, &payload.title, &payload.company)
            .with_required_skills(&payload.required_skills)
            .with_min_experience(payload.min_experience)
            .with_education_required(&payload.education_required)
            .with_location(&payload.location)
            .with_salary_range(payload.salary_min, payload.salary_max)
            .with_description(payload.description)
            .with_remote(payload.is_remote))
    }
}

/// Build a candidate from arbitrary JSON, defaulting missing fields
pub fn parse_candidate(value: serde_json::Value) -> Result<Candidate, PayloadError> {
    let payload: CandidatePayload = serde_json::from_value(value)?;
    Candidate::from_payload(payload)
}

/// Build a job from arbitrary JSON, defaulting missing fields
pub fn parse_job(value: serde_json::Value) -> Result<Job, PayloadError> {
    let payload: JobPayload = serde_json::from_value(value)?;
    Job::from_payload(payload)
}
