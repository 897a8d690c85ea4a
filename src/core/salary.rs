use serde::Serialize;

/// Largest penalty for expecting less than the offered minimum
const MAX_BELOW_PENALTY: f64 = 30.0;
/// Largest penalty for expecting more than the offered maximum
const MAX_ABOVE_PENALTY: f64 = 40.0;
const SCORE_FLOOR: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalaryStatus {
    NotSpecified,
    BelowRange,
    AboveRange,
    WithinRange,
}

impl SalaryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SalaryStatus::NotSpecified => "Not Specified",
            SalaryStatus::BelowRange => "Below Range",
            SalaryStatus::AboveRange => "Above Range",
            SalaryStatus::WithinRange => "Within Range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDetails {
    pub score: f64,
    pub status: SalaryStatus,
    pub expected_salary: u64,
    pub salary_range: String,
    pub salary_midpoint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Range or expectation undisclosed
    Neutral,
    BelowMarket,
    AboveMarket,
    MarketCompetitive,
}

/// Informational hiring view of a salary gap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryAlignment {
    pub alignment: Alignment,
    pub recommendation: &'static str,
    /// Percent of the midpoint the candidate sits below (+) or above (-) the range
    pub candidate_advantage: f64,
}

#[inline]
fn is_undisclosed(salary_min: u64, salary_max: u64) -> bool {
    salary_min == 0 && salary_max == 0
}

#[inline]
fn midpoint(salary_min: u64, salary_max: u64) -> f64 {
    (salary_min as f64 + salary_max as f64) / 2.0
}

/// Distance outside the range as a percentage of the range midpoint
#[inline]
fn percent_of_midpoint(diff: u64, salary_min: u64, salary_max: u64) -> f64 {
    diff as f64 / midpoint(salary_min, salary_max) * 100.0
}

/// Salary score (0-100)
///
/// Anything undisclosed or inside the range scores 100. Outside the range the
/// gap is measured against the midpoint: undershooting costs at most 30 points,
/// overshooting at most 40. Never below 30.
pub fn calculate_salary_match(expected_salary: u64, salary_min: u64, salary_max: u64) -> f64 {
    if is_undisclosed(salary_min, salary_max) || expected_salary == 0 {
        return 100.0;
    }

    if salary_min <= expected_salary && expected_salary <= salary_max {
        return 100.0;
    }

    let score = if expected_salary < salary_min {
        let pct = percent_of_midpoint(salary_min - expected_salary, salary_min, salary_max);
        100.0 - pct.min(MAX_BELOW_PENALTY)
    } else {
        let pct = percent_of_midpoint(expected_salary - salary_max, salary_min, salary_max);
        100.0 - pct.min(MAX_ABOVE_PENALTY)
    };

    score.max(SCORE_FLOOR)
}

/// "$1,234,567"
fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn salary_details(expected_salary: u64, salary_min: u64, salary_max: u64) -> SalaryDetails {
    let status = if is_undisclosed(salary_min, salary_max) {
        SalaryStatus::NotSpecified
    } else if expected_salary < salary_min {
        SalaryStatus::BelowRange
    } else if expected_salary > salary_max {
        SalaryStatus::AboveRange
    } else {
        SalaryStatus::WithinRange
    };

    let (salary_range, salary_midpoint) = if is_undisclosed(salary_min, salary_max) {
        ("Not Specified".to_string(), 0.0)
    } else {
        (
            format!("{} - {}", format_dollars(salary_min), format_dollars(salary_max)),
            midpoint(salary_min, salary_max),
        )
    };

    SalaryDetails {
        score: calculate_salary_match(expected_salary, salary_min, salary_max),
        status,
        expected_salary,
        salary_range,
        salary_midpoint,
    }
}

pub fn salary_alignment(expected_salary: u64, salary_min: u64, salary_max: u64) -> SalaryAlignment {
    if is_undisclosed(salary_min, salary_max) || expected_salary == 0 {
        return SalaryAlignment {
            alignment: Alignment::Neutral,
            recommendation: "Salary not disclosed - discuss during interview",
            candidate_advantage: 0.0,
        };
    }

    if expected_salary < salary_min {
        SalaryAlignment {
            alignment: Alignment::BelowMarket,
            recommendation: "Candidate may be undervalued - great hire value",
            candidate_advantage: percent_of_midpoint(salary_min - expected_salary, salary_min, salary_max),
        }
    } else if expected_salary > salary_max {
        SalaryAlignment {
            alignment: Alignment::AboveMarket,
            recommendation: "Candidate salary expectation exceeds budget",
            candidate_advantage: -percent_of_midpoint(expected_salary - salary_max, salary_min, salary_max),
        }
    } else {
        SalaryAlignment {
            alignment: Alignment::MarketCompetitive,
            recommendation: "Salary expectations align with offer range",
            candidate_advantage: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undisclosed_scores_full() {
        assert_eq!(calculate_salary_match(100_000, 0, 0), 100.0);
        assert_eq!(calculate_salary_match(0, 80_000, 120_000), 100.0);
    }

    #[test]
    fn test_within_range() {
        assert_eq!(calculate_salary_match(100_000, 80_000, 120_000), 100.0);
        assert_eq!(calculate_salary_match(80_000, 80_000, 120_000), 100.0);
        assert_eq!(calculate_salary_match(120_000, 80_000, 120_000), 100.0);
    }

    #[test]
    fn test_below_range() {
        // 10k under a 155k midpoint
        let score = calculate_salary_match(120_000, 130_000, 180_000);
        assert!((score - (100.0 - 10_000.0 / 155_000.0 * 100.0)).abs() < 1e-9);

        // penalty capped at 30
        assert_eq!(calculate_salary_match(10_000, 80_000, 120_000), 70.0);
    }

    #[test]
    fn test_above_range() {
        assert!((calculate_salary_match(150_000, 80_000, 120_000) - 70.0).abs() < 1e-9);
        // penalty capped at 40
        assert_eq!(calculate_salary_match(500_000, 80_000, 120_000), 60.0);
    }

    #[test]
    fn test_details() {
        let details = salary_details(150_000, 130_000, 180_000);
        assert_eq!(details.status, SalaryStatus::WithinRange);
        assert_eq!(details.salary_range, "$130,000 - $180,000");
        assert_eq!(details.salary_midpoint, 155_000.0);

        let details = salary_details(90_000, 0, 0);
        assert_eq!(details.status.label(), "Not Specified");
        assert_eq!(details.salary_range, "Not Specified");
    }

    #[test]
    fn test_alignment() {
        let below = salary_alignment(90_000, 100_000, 100_000);
        assert_eq!(below.alignment, Alignment::BelowMarket);
        assert!((below.candidate_advantage - 10.0).abs() < 1e-9);

        let above = salary_alignment(110_000, 100_000, 100_000);
        assert_eq!(above.alignment, Alignment::AboveMarket);
        assert!((above.candidate_advantage + 10.0).abs() < 1e-9);

        assert_eq!(salary_alignment(0, 100_000, 120_000).alignment, Alignment::Neutral);
        assert_eq!(salary_alignment(110_000, 100_000, 120_000).alignment, Alignment::MarketCompetitive);
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(1_000), "$1,000");
        assert_eq!(format_dollars(1_234_567), "$1,234,567");
    }
}
