use serde::Serialize;

/// Education assumed when a record does not state one
pub const DEFAULT_EDUCATION: &str = "Bachelor's";

fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|skill| skill.as_ref().trim().to_uppercase())
        .collect()
}

/// Job seeker profile
///
/// Built once through the `with_*` methods; each step is a pure transform that
/// trims free text and uppercases skills, so a finished value never needs
/// normalizing again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    candidate_id: String,
    name: String,
    email: String,
    skills: Vec<String>,
    years_experience: u32,
    education: String,
    preferred_location: String,
    expected_salary: u64,
    resume_text: String,
}

impl Candidate {
    pub fn new(
        candidate_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            skills: Vec::new(),
            years_experience: 0,
            education: DEFAULT_EDUCATION.to_string(),
            preferred_location: String::new(),
            expected_salary: 0,
            resume_text: String::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = normalize_skills(skills);
        self
    }

    pub fn with_years_experience(mut self, years: u32) -> Self {
        self.years_experience = years;
        self
    }

    pub fn with_education(mut self, education: impl AsRef<str>) -> Self {
        self.education = education.as_ref().trim().to_string();
        self
    }

    pub fn with_preferred_location(mut self, location: impl AsRef<str>) -> Self {
        self.preferred_location = location.as_ref().trim().to_string();
        self
    }

    /// Expected yearly salary, 0 when undisclosed
    pub fn with_expected_salary(mut self, salary: u64) -> Self {
        self.expected_salary = salary;
        self
    }

    pub fn with_resume_text(mut self, text: impl Into<String>) -> Self {
        self.resume_text = text.into();
        self
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn preferred_location(&self) -> &str {
        &self.preferred_location
    }

    pub fn expected_salary(&self) -> u64 {
        self.expected_salary
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Candidate({}): {}, {}yrs exp, {} skills",
            self.candidate_id,
            self.name,
            self.years_experience,
            self.skills.len()
        )
    }
}

/// Job posting
///
/// Same construction rules as [`Candidate`]. A salary range of `(0, 0)` means
/// the range is undisclosed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    job_id: String,
    title: String,
    company: String,
    required_skills: Vec<String>,
    min_experience: u32,
    education_required: String,
    location: String,
    salary_min: u64,
    salary_max: u64,
    description: String,
    is_remote: bool,
}

impl Job {
    pub fn new(
        job_id: impl Into<String>,
        title: impl AsRef<str>,
        company: impl AsRef<str>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            title: title.as_ref().trim().to_string(),
            company: company.as_ref().trim().to_string(),
            required_skills: Vec::new(),
            min_experience: 0,
            education_required: DEFAULT_EDUCATION.to_string(),
            location: String::new(),
            salary_min: 0,
            salary_max: 0,
            description: String::new(),
            is_remote: false,
        }
    }

    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required_skills = normalize_skills(skills);
        self
    }

    pub fn with_min_experience(mut self, years: u32) -> Self {
        self.min_experience = years;
        self
    }

    pub fn with_education_required(mut self, education: impl AsRef<str>) -> Self {
        self.education_required = education.as_ref().trim().to_string();
        self
    }

    pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
        self.location = location.as_ref().trim().to_string();
        self
    }

    pub fn with_salary_range(mut self, min: u64, max: u64) -> Self {
        self.salary_min = min;
        self.salary_max = max;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn min_experience(&self) -> u32 {
        self.min_experience
    }

    pub fn education_required(&self) -> &str {
        &self.education_required
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn salary_min(&self) -> u64 {
        self.salary_min
    }

    pub fn salary_max(&self) -> u64 {
        self.salary_max
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_remote(&self) -> bool {
        self.is_remote
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job({}): {} at {}", self.job_id, self.title, self.company)
    }
}

#[inline]
fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Outcome of evaluating one (candidate, job) pair
///
/// Every score is clamped to `[0, 100]` on construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    candidate_id: String,
    job_id: String,
    match_score: f64,
    skill_match: f64,
    experience_match: f64,
    location_match: f64,
    salary_match: f64,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
}

impl MatchResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        candidate_id: impl Into<String>,
        job_id: impl Into<String>,
        match_score: f64,
        skill_match: f64,
        experience_match: f64,
        location_match: f64,
        salary_match: f64,
        matched_skills: Vec<String>,
        missing_skills: Vec<String>,
    ) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            job_id: job_id.into(),
            match_score: clamp_percentage(match_score),
            skill_match: clamp_percentage(skill_match),
            experience_match: clamp_percentage(experience_match),
            location_match: clamp_percentage(location_match),
            salary_match: clamp_percentage(salary_match),
            matched_skills,
            missing_skills,
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Weighted overall score
    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    pub fn skill_match(&self) -> f64 {
        self.skill_match
    }

    pub fn experience_match(&self) -> f64 {
        self.experience_match
    }

    pub fn location_match(&self) -> f64 {
        self.location_match
    }

    pub fn salary_match(&self) -> f64 {
        self.salary_match
    }

    pub fn matched_skills(&self) -> &[String] {
        &self.matched_skills
    }

    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }

    pub fn match_level(&self) -> MatchLevel {
        MatchLevel::from_score(self.match_score)
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Match({}-{}): {:.1}%",
            self.candidate_id, self.job_id, self.match_score
        )
    }
}

/// Display tier of an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchLevel {
    pub const EXCELLENT_THRESHOLD: f64 = 70.0;
    pub const GOOD_THRESHOLD: f64 = 50.0;
    pub const FAIR_THRESHOLD: f64 = 30.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            MatchLevel::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            MatchLevel::Good
        } else if score >= Self::FAIR_THRESHOLD {
            MatchLevel::Fair
        } else {
            MatchLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Fair => "Fair Match",
            MatchLevel::Low => "Low Match",
        }
    }
}

/// One row of the all-pairs ranking, denormalized for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
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
}

impl MatchSummary {
    pub fn new(candidate: &Candidate, job: &Job, result: MatchResult) -> Self {
        Self {
            candidate_id: result.candidate_id,
            candidate_name: candidate.name().to_string(),
            job_id: result.job_id,
            job_title: job.title().to_string(),
            company: job.company().to_string(),
            match_score: result.match_score,
            skill_match: result.skill_match,
            experience_match: result.experience_match,
            location_match: result.location_match,
            salary_match: result.salary_match,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
        }
    }

    pub fn match_level(&self) -> MatchLevel {
        MatchLevel::from_score(self.match_score)
    }
}

/// Ranked jobs for a single candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatches {
    pub candidate_id: String,
    pub matches: Vec<MatchResult>,
}

/// Aggregate view over a set of match results
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchStatistics {
    pub count: usize,
    pub avg_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub excellent_matches: usize,
    pub good_matches: usize,
    pub fair_matches: usize,
    pub low_matches: usize,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub salary: f64,
    pub location: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.salary + self.location
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            salary: 0.20,
            location: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_normalized_on_construction() {
        let candidate = Candidate::new("C001", "  Alice ", "alice@test.com")
            .with_skills([" python", "Machine Learning "])
            .with_education(" Master's ")
            .with_preferred_location("  San Francisco, CA ");

        assert_eq!(candidate.name(), "Alice");
        assert_eq!(candidate.skills(), ["PYTHON", "MACHINE LEARNING"]);
        assert_eq!(candidate.education(), "Master's");
        assert_eq!(candidate.preferred_location(), "San Francisco, CA");
    }

    #[test]
    fn test_job_defaults() {
        let job = Job::new("J001", " ML Engineer ", " TechCorp ");

        assert_eq!(job.title(), "ML Engineer");
        assert_eq!(job.company(), "TechCorp");
        assert_eq!(job.education_required(), DEFAULT_EDUCATION);
        assert_eq!((job.salary_min(), job.salary_max()), (0, 0));
        assert!(!job.is_remote());
    }

    #[test]
    fn test_match_result_clamps_scores() {
        let result = MatchResult::new("C1", "J1", 120.0, -5.0, 100.0, f64::NAN, 55.5, vec![], vec![]);

        assert_eq!(result.match_score(), 100.0);
        assert_eq!(result.skill_match(), 0.0);
        assert_eq!(result.location_match(), 0.0);
        assert_eq!(result.salary_match(), 55.5);
    }

    #[test]
    fn test_match_level_thresholds() {
        assert_eq!(MatchLevel::from_score(70.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(69.99), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(50.0), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(30.0), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(29.99), MatchLevel::Low);
        assert_eq!(MatchLevel::Good.label(), "Good Match");
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }
}
