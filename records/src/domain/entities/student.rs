//! Student domain entity
//!
//! Represents an admitted student and their current academic standing.

use serde::{Deserialize, Serialize};

/// Academic standing derived from GPA and semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicStatus {
    Active,
    Probation,
    Suspended,
}

impl std::fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcademicStatus::Active => write!(f, "ACTIVE"),
            AcademicStatus::Probation => write!(f, "PROBATION"),
            AcademicStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

impl std::str::FromStr for AcademicStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(AcademicStatus::Active),
            "PROBATION" => Ok(AcademicStatus::Probation),
            "SUSPENDED" => Ok(AcademicStatus::Suspended),
            _ => Err(format!("Unknown academic status: {}", s)),
        }
    }
}

/// A student enrolled at the university
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    /// Current semester, starting at 1
    pub semester: u32,
    /// Cumulative GPA on a 0.0 - 4.0 scale
    pub gpa: f64,
    pub academic_status: AcademicStatus,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        semester: u32,
        gpa: f64,
        academic_status: AcademicStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            semester,
            gpa,
            academic_status,
        }
    }

    /// Suspended students may not enroll in new courses
    pub fn is_suspended(&self) -> bool {
        self.academic_status == AcademicStatus::Suspended
    }
}
