use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Ordinal education level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EducationLevel {
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Doctorate = 5,
}

static EDUCATION_LEVELS: LazyLock<HashMap<&'static str, EducationLevel>> = LazyLock::new(|| {
    [
        ("high school", EducationLevel::HighSchool),
        ("associate", EducationLevel::Associate),
        ("bachelor's", EducationLevel::Bachelor),
        ("bachelors", EducationLevel::Bachelor),
        ("master's", EducationLevel::Master),
        ("masters", EducationLevel::Master),
        ("phd", EducationLevel::Doctorate),
        ("doctorate", EducationLevel::Doctorate),
    ]
    .into_iter()
    .collect()
});

impl EducationLevel {
    /// Map free text to a level; empty or unrecognized text is a bachelor's
    pub fn from_text(text: &str) -> Self {
        let key = text.trim().to_lowercase();
        EDUCATION_LEVELS
            .get(key.as_str())
            .copied()
            .unwrap_or(EducationLevel::Bachelor)
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Years-of-experience score (0-100)
///
/// Meeting the bar scores 100. The surplus bonus (2.5 per year, at most two
/// years) is computed but capped away. Each missing year costs 15 points down
/// to a floor of 30.
pub fn calculate_experience_match(years_experience: u32, min_experience: u32) -> f64 {
    if min_experience == 0 {
        return 100.0;
    }

    if years_experience >= min_experience {
        let excess = (years_experience - min_experience).min(2);
        let bonus = excess as f64 * 2.5;
        (100.0 + bonus).min(100.0)
    } else {
        let deficit = (min_experience - years_experience) as f64;
        (100.0 - deficit * 15.0).max(30.0)
    }
}

/// Education score (0-100): 25 points per missing level, floor 50
pub fn calculate_education_match(candidate_education: &str, education_required: &str) -> f64 {
    let candidate = EducationLevel::from_text(candidate_education);
    let required = EducationLevel::from_text(education_required);

    if candidate >= required {
        return 100.0;
    }

    let deficit = (required.ordinal() - candidate.ordinal()) as f64;
    (100.0 - deficit * 25.0).max(50.0)
}

/// Experience dimension: 70% years, 30% education
pub fn calculate_combined_experience_match(
    years_experience: u32,
    min_experience: u32,
    candidate_education: &str,
    education_required: &str,
) -> f64 {
    let experience = calculate_experience_match(years_experience, min_experience);
    let education = calculate_education_match(candidate_education, education_required);

    experience * 0.7 + education * 0.3
}
