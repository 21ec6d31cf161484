//! Grade calculator
//!
//! Pure GPA, academic standing and credit-limit rules. The free functions
//! hold the logic; `GradeCalculator` exposes them through `GradingPolicy`
//! so services can be tested against a substitute policy.

use crate::app::academic_config::{
    EARLY_ACTIVE_GPA, EARLY_STAGE_LAST_SEMESTER, GPA_DECIMALS, HIGH_CREDIT_GPA, LATE_ACTIVE_GPA,
    LOWER_CREDIT_GPA, MAX_CREDITS_HIGH, MAX_CREDITS_LOWER, MAX_CREDITS_MIN, MAX_CREDITS_UPPER,
    MAX_GPA, MID_ACTIVE_GPA, MID_STAGE_LAST_SEMESTER, MIN_GPA, PROBATION_FLOOR_GPA,
    UPPER_CREDIT_GPA,
};
use crate::domain::entities::{AcademicStatus, CourseGrade};
use crate::error::DomainError;

/// Grading rules consumed by the enrollment workflow
#[cfg_attr(test, mockall::automock)]
pub trait GradingPolicy: Send + Sync {
    /// Credit-weighted GPA, rounded to two decimals
    fn calculate_gpa(&self, grades: &[CourseGrade]) -> Result<f64, DomainError>;

    /// Standing for a GPA in a given semester
    fn determine_academic_status(
        &self,
        gpa: f64,
        semester: u32,
    ) -> Result<AcademicStatus, DomainError>;

    /// Maximum credit load allowed for a GPA
    fn calculate_max_credits(&self, gpa: f64) -> Result<u32, DomainError>;
}

/// The university's standard grading rules
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeCalculator;

impl GradeCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl GradingPolicy for GradeCalculator {
    fn calculate_gpa(&self, grades: &[CourseGrade]) -> Result<f64, DomainError> {
        calculate_gpa(Some(grades))
    }

    fn determine_academic_status(
        &self,
        gpa: f64,
        semester: u32,
    ) -> Result<AcademicStatus, DomainError> {
        determine_academic_status(gpa, semester)
    }

    fn calculate_max_credits(&self, gpa: f64) -> Result<u32, DomainError> {
        calculate_max_credits(gpa)
    }
}

/// Compute the credit-weighted GPA of a set of grades.
///
/// `None`, an empty slice, or grades that carry no credits all yield `0.0`.
/// Every grade point is validated before anything is summed.
pub fn calculate_gpa(grades: Option<&[CourseGrade]>) -> Result<f64, DomainError> {
    let grades = match grades {
        Some(g) if !g.is_empty() => g,
        _ => return Ok(0.0),
    };

    if let Some(invalid) = grades.iter().find(|g| !g.has_valid_grade_point()) {
        return Err(DomainError::InvalidGradePoint {
            course_code: invalid.course_code.clone(),
            grade_point: invalid.grade_point,
        });
    }

    let (points, credits) = grades
        .iter()
        .filter(|g| g.credits > 0)
        .fold((0.0_f64, 0_u64), |(points, credits), g| {
            (
                points + f64::from(g.credits) * g.grade_point,
                credits + u64::from(g.credits),
            )
        });

    if credits == 0 {
        return Ok(0.0);
    }

    Ok(round_half_up(points / credits as f64, GPA_DECIMALS))
}

/// Classify a student's standing from GPA and semester.
///
/// Semesters 1-2 never suspend; from semester 3 a GPA under 2.00 does.
pub fn determine_academic_status(gpa: f64, semester: u32) -> Result<AcademicStatus, DomainError> {
    ensure_gpa_in_range(gpa)?;
    if semester < 1 {
        return Err(DomainError::InvalidArgument(format!(
            "Semester must be at least 1, got {}",
            semester
        )));
    }

    let status = match semester {
        1..=EARLY_STAGE_LAST_SEMESTER => {
            if gpa >= EARLY_ACTIVE_GPA {
                AcademicStatus::Active
            } else {
                AcademicStatus::Probation
            }
        }
        _ => {
            let active_threshold = if semester <= MID_STAGE_LAST_SEMESTER {
                MID_ACTIVE_GPA
            } else {
                LATE_ACTIVE_GPA
            };

            if gpa >= active_threshold {
                AcademicStatus::Active
            } else if gpa >= PROBATION_FLOOR_GPA {
                AcademicStatus::Probation
            } else {
                AcademicStatus::Suspended
            }
        }
    };

    Ok(status)
}

/// Maximum credits a student may take in a term for the given GPA
pub fn calculate_max_credits(gpa: f64) -> Result<u32, DomainError> {
    ensure_gpa_in_range(gpa)?;

    let credits = if gpa >= HIGH_CREDIT_GPA {
        MAX_CREDITS_HIGH
    } else if gpa >= UPPER_CREDIT_GPA {
        MAX_CREDITS_UPPER
    } else if gpa >= LOWER_CREDIT_GPA {
        MAX_CREDITS_LOWER
    } else {
        MAX_CREDITS_MIN
    };

    Ok(credits)
}

fn ensure_gpa_in_range(gpa: f64) -> Result<(), DomainError> {
    if (MIN_GPA..=MAX_GPA).contains(&gpa) {
        Ok(())
    } else {
        Err(DomainError::InvalidArgument(format!(
            "GPA must be between {:.1} and {:.1}, got {}",
            MIN_GPA, MAX_GPA, gpa
        )))
    }
}

/// Half-up rounding for the non-negative values GPA math produces
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
