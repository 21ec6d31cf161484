//! Enrollment domain entity
//!
//! Records a student's registration in a course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentId(pub Uuid);

impl EnrollmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EnrollmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EnrollmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Pending,
    Approved,
    Rejected,
    Dropped,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "PENDING"),
            EnrollmentStatus::Approved => write!(f, "APPROVED"),
            EnrollmentStatus::Rejected => write!(f, "REJECTED"),
            EnrollmentStatus::Dropped => write!(f, "DROPPED"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(EnrollmentStatus::Pending),
            "APPROVED" => Ok(EnrollmentStatus::Approved),
            "REJECTED" => Ok(EnrollmentStatus::Rejected),
            "DROPPED" => Ok(EnrollmentStatus::Dropped),
            _ => Err(format!("Unknown enrollment status: {}", s)),
        }
    }
}

/// A student's registration in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub student_id: String,
    pub course_code: String,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// An approved enrollment stamped with the current time
    pub fn approved(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            enrollment_id: EnrollmentId::new(),
            student_id: student_id.into(),
            course_code: course_code.into(),
            enrollment_date: Utc::now(),
            status: EnrollmentStatus::Approved,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            EnrollmentStatus::Pending | EnrollmentStatus::Approved
        )
    }
}
