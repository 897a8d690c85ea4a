use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

/// Share of the final skill score taken from exact overlap
const EXACT_WEIGHT: f64 = 0.7;
/// Share taken from TF-IDF partial similarity
const PARTIAL_WEIGHT: f64 = 0.3;

/// Abbreviation or synonym -> canonical skill name (uppercase keys)
static SKILL_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("ML", "MACHINE LEARNING"),
        ("DL", "DEEP LEARNING"),
        ("AI", "ARTIFICIAL INTELLIGENCE"),
        ("JS", "JAVASCRIPT"),
        ("TS", "TYPESCRIPT"),
        // Cloud providers
        ("AWS", "AMAZON WEB SERVICES"),
        ("GCP", "GOOGLE CLOUD PLATFORM"),
        ("AZURE", "MICROSOFT AZURE"),
        // Mobile frameworks collapse into one skill
        ("REACT NATIVE", "MOBILE DEVELOPMENT"),
        ("FLUTTER", "MOBILE DEVELOPMENT"),
        ("XAMARIN", "MOBILE DEVELOPMENT"),
        // Database engines
        ("POSTGRES", "POSTGRESQL"),
        ("MONGO", "MONGODB"),
        ("REST", "REST API"),
        ("CI/CD", "CI CD"),
        ("DATA ANALYTICS", "DATA ANALYSIS"),
    ]
    .into_iter()
    .collect()
});

/// Trim, uppercase and resolve aliases so equivalent skills compare equal
pub fn normalize_skill(skill: &str) -> String {
    let upper = skill.trim().to_uppercase();
    match SKILL_ALIASES.get(upper.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => upper,
    }
}

fn normalize_all<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills.iter().map(|s| normalize_skill(s.as_ref())).collect()
}

/// Skill dimension result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    /// 0-100
    pub score: f64,
    /// Required skills the candidate has, in required order
    pub matched: Vec<String>,
    /// Required skills the candidate lacks, in required order
    pub missing: Vec<String>,
}

/// Detailed breakdown of required vs offered skills
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    /// Exact overlap only, 100 when nothing is required
    pub match_percentage: f64,
    pub total_required: usize,
    pub total_matched: usize,
}

/// Reasons the similarity pass could not produce a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("empty vocabulary: no word tokens in any skill")]
    EmptyVocabulary,

    #[error("similarity computation produced a non-finite value")]
    NonFinite,
}

/// Split required skills into (matched, missing), deduplicated in required order
fn partition_required(candidate: &[String], required: &[String]) -> (Vec<String>, Vec<String>) {
    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        if !seen.insert(skill.as_str()) {
            continue;
        }
        if candidate_set.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    (matched, missing)
}

/// Calculate the skill score between a candidate's skills and a job's requirements
///
/// Scoring formula:
/// score = exact_pct * 0.7 + partial_pct * 0.3, capped at 100
///
/// `exact_pct` is the share of required skills the candidate holds verbatim
/// (after alias resolution). `partial_pct` credits related skills via TF-IDF
/// cosine similarity. When the similarity pass cannot run the exact
/// percentage is used alone.
pub fn calculate_skill_match<C, R>(candidate_skills: &[C], required_skills: &[R]) -> SkillMatch
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    let candidate = normalize_all(candidate_skills);
    let required = normalize_all(required_skills);

    if required.is_empty() {
        return SkillMatch {
            score: 100.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let (matched, missing) = partition_required(&candidate, &required);
    let exact_pct = matched.len() as f64 / required.len() as f64 * 100.0;

    let score = if candidate.is_empty() {
        exact_pct
    } else {
        match partial_similarity(&candidate, &required) {
            Ok(partial_pct) => exact_pct * EXACT_WEIGHT + partial_pct * PARTIAL_WEIGHT,
            Err(SimilarityError::EmptyVocabulary) => {
                tracing::debug!("Skill similarity skipped (empty vocabulary), using exact overlap");
                exact_pct
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    candidate_skills = candidate.len(),
                    required_skills = required.len(),
                    "Skill similarity failed, using exact overlap"
                );
                exact_pct
            }
        }
    };

    SkillMatch {
        score: score.min(100.0),
        matched,
        missing,
    }
}

/// Matched, missing and extra skills plus exact-overlap counts
pub fn skill_gap_analysis<C, R>(candidate_skills: &[C], required_skills: &[R]) -> SkillGapAnalysis
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    let candidate = normalize_all(candidate_skills);
    let required = normalize_all(required_skills);
    let (matched, missing) = partition_required(&candidate, &required);

    let required_set: HashSet<&str> = required.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let extra: Vec<String> = candidate
        .iter()
        .filter(|skill| !required_set.contains(skill.as_str()) && seen.insert(skill.as_str()))
        .cloned()
        .collect();

    let match_percentage = if required.is_empty() {
        100.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    SkillGapAnalysis {
        total_required: required.len(),
        total_matched: matched.len(),
        matched_skills: matched,
        missing_skills: missing,
        extra_skills: extra,
        match_percentage,
    }
}

/// Lowercased word tokens: maximal runs of alphanumerics or `_`
fn tokenize(skill: &str) -> Vec<String> {
    skill
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Unigrams followed by adjacent bigrams
fn terms(skill: &str) -> Vec<String> {
    let tokens = tokenize(skill);
    let bigrams: Vec<String> = tokens.windows(2).map(|pair| pair.join(" ")).collect();
    tokens.into_iter().chain(bigrams).collect()
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Mean over required skills of the best cosine similarity against any
/// candidate skill, as a percentage
///
/// Every skill is one document of a shared corpus. Terms are weighted by raw
/// count times smoothed IDF `ln((1 + n) / (1 + df)) + 1` and each row is L2
/// normalized, so a dot product is the cosine. Rows with no terms score 0.
pub fn partial_similarity(candidate: &[String], required: &[String]) -> Result<f64, SimilarityError> {
    if required.is_empty() {
        return Err(SimilarityError::EmptyVocabulary);
    }

    let documents: Vec<Vec<String>> = candidate.iter().chain(required).map(|s| terms(s)).collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();
    for document in &documents {
        let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
        for term in unique {
            let next = vocabulary.len();
            let index = *vocabulary.entry(term).or_insert(next);
            if index == document_frequency.len() {
                document_frequency.push(0);
            }
            document_frequency[index] += 1;
        }
    }

    if vocabulary.is_empty() {
        return Err(SimilarityError::EmptyVocabulary);
    }

    let n = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors: Vec<Vec<f64>> = documents
        .iter()
        .map(|document| {
            let mut row = vec![0.0; vocabulary.len()];
            for term in document {
                let index = vocabulary[term.as_str()];
                row[index] += idf[index];
            }
            let norm = dot(&row, &row).sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|x| *x /= norm);
            }
            row
        })
        .collect();

    let (candidate_rows, required_rows) = vectors.split_at(candidate.len());
    let total: f64 = required_rows
        .iter()
        .map(|req| {
            candidate_rows
                .iter()
                .map(|cand| dot(cand, req))
                .fold(0.0_f64, f64::max)
        })
        .sum();

    let mean = total / required_rows.len() as f64;
    if !mean.is_finite() {
        return Err(SimilarityError::NonFinite);
    }

    Ok(mean * 100.0)
}
