use crate::core::{
    experience::calculate_combined_experience_match,
    location::calculate_location_match,
    salary::calculate_salary_match,
    skills::calculate_skill_match,
};
use crate::models::{Candidate, Job, MatchResult, ScoringWeights};

/// Score one candidate against one job
///
/// Scoring formula:
/// score = (
///     skill_score * 0.40 +         # Exact + partial skill overlap
///     experience_score * 0.25 +    # Years (70%) and education (30%)
///     salary_score * 0.20 +        # Expectation vs offered range
///     location_score * 0.15        # City/state/region/remote tiers
/// )
///
/// The four dimensions are independent; the weights come from `weights` and
/// are used as given.
pub fn calculate_match_score(candidate: &Candidate, job: &Job, weights: &ScoringWeights) -> MatchResult {
    // Stage 1: Skills
    let skills = calculate_skill_match(candidate.skills(), job.required_skills());

    // Stage 2: Experience and education
    let experience_score = calculate_combined_experience_match(
        candidate.years_experience(),
        job.min_experience(),
        candidate.education(),
        job.education_required(),
    );

    // Stage 3: Location
    let location_score = calculate_location_match(
        candidate.preferred_location(),
        job.location(),
        job.is_remote(),
    );

    // Stage 4: Salary
    let salary_score = calculate_salary_match(
        candidate.expected_salary(),
        job.salary_min(),
        job.salary_max(),
    );

    let overall = weighted_score(skills.score, experience_score, salary_score, location_score, weights);

    tracing::trace!(
        candidate_id = candidate.candidate_id(),
        job_id = job.job_id(),
        overall,
        "Scored pair"
    );

    MatchResult::new(
        candidate.candidate_id(),
        job.job_id(),
        overall,
        skills.score,
        experience_score,
        location_score,
        salary_score,
        skills.matched,
        skills.missing,
    )
}

/// Weighted combination of the four dimension scores
#[inline]
pub fn weighted_score(
    skill: f64,
    experience: f64,
    salary: f64,
    location: f64,
    weights: &ScoringWeights,
) -> f64 {
    skill * weights.skills
        + experience * weights.experience
        + salary * weights.salary
        + location * weights.location
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_candidate() -> Candidate {
        Candidate::new("C001", "Alice", "alice@test.com")
            .with_skills(["Python", "Machine Learning", "SQL"])
            .with_years_experience(5)
            .with_education("Master's")
            .with_preferred_location("San Francisco, CA")
            .with_expected_salary(120_000)
    }

    fn create_test_job() -> Job {
        Job::new("J001", "ML Engineer", "TechCorp")
            .with_required_skills(["Python", "Machine Learning", "TensorFlow"])
            .with_min_experience(4)
            .with_education_required("Master's")
            .with_location("San Francisco, CA")
            .with_salary_range(130_000, 180_000)
    }

    #[test]
    fn test_calculate_match_score() {
        let result = calculate_match_score(&create_test_candidate(), &create_test_job(), &ScoringWeights::default());

        assert_eq!(result.candidate_id(), "C001");
        assert_eq!(result.job_id(), "J001");
        assert!((result.skill_match() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.experience_match(), 100.0);
        assert_eq!(result.location_match(), 100.0);
        assert!(result.salary_match() < 100.0 && result.salary_match() >= 70.0);

        let expected = weighted_score(
            result.skill_match(),
            result.experience_match(),
            result.salary_match(),
            result.location_match(),
            &ScoringWeights::default(),
        );
        assert!((result.match_score() - expected).abs() < 1e-9);
        assert_eq!(result.matched_skills(), ["PYTHON", "MACHINE LEARNING"]);
        assert_eq!(result.missing_skills(), ["TENSORFLOW"]);
    }

    #[test]
    fn test_weighted_score_uses_each_weight() {
        let weights = ScoringWeights::default();

        assert!((weighted_score(100.0, 0.0, 0.0, 0.0, &weights) - 40.0).abs() < 1e-9);
        assert!((weighted_score(0.0, 100.0, 0.0, 0.0, &weights) - 25.0).abs() < 1e-9);
        assert!((weighted_score(0.0, 0.0, 100.0, 0.0, &weights) - 20.0).abs() < 1e-9);
        assert!((weighted_score(0.0, 0.0, 0.0, 100.0, &weights) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_weights_change_overall() {
        let skills_only = ScoringWeights {
            skills: 1.0,
            experience: 0.0,
            salary: 0.0,
            location: 0.0,
        };

        let result = calculate_match_score(&create_test_candidate(), &create_test_job(), &skills_only);
        assert!((result.match_score() - result.skill_match()).abs() < 1e-9);
    }
}
