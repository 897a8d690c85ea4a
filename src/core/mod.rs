// Core algorithm exports
pub mod experience;
pub mod location;
pub mod matcher;
pub mod salary;
pub mod scoring;
pub mod skills;

pub use experience::{calculate_experience_match, calculate_education_match, calculate_combined_experience_match, EducationLevel};
pub use location::{parse_location, calculate_location_match, location_details, LocationDetails, LocationMatchType, ParsedLocation};
pub use matcher::MatchingEngine;
pub use salary::{calculate_salary_match, salary_details, salary_alignment, SalaryDetails, SalaryAlignment};
pub use scoring::calculate_match_score;
pub use skills::{calculate_skill_match, skill_gap_analysis, normalize_skill, SkillMatch, SkillGapAnalysis};
