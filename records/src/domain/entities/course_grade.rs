use serde::{Deserialize, Serialize};

/// Lowest grade point on the 4.0 scale
pub const MIN_GRADE_POINT: f64 = 0.0;

/// Highest grade point on the 4.0 scale
pub const MAX_GRADE_POINT: f64 = 4.0;

/// A graded course used as GPA input. Not persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course_code: String,
    pub credits: u32,
    pub grade_point: f64,
}

impl CourseGrade {
    pub fn new(course_code: impl Into<String>, credits: u32, grade_point: f64) -> Self {
        Self {
            course_code: course_code.into(),
            credits,
            grade_point,
        }
    }

    /// Whether the grade point lies on the 0.0 - 4.0 scale
    pub fn has_valid_grade_point(&self) -> bool {
        (MIN_GRADE_POINT..=MAX_GRADE_POINT).contains(&self.grade_point)
    }
}
