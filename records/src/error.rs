//! Unified error types for the academic records core
//!
//! This module defines error types for each layer:
//! - `DomainError`: Grading rules and repository failures
//! - `NotificationError`: Notification sender failures
//! - `EnrollmentError`: Enrollment workflow errors (wraps domain errors)

use thiserror::Error;

/// Domain layer errors - pure business rule and persistence errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid grade point {grade_point} for course {course_code}")]
    InvalidGradePoint {
        course_code: String,
        grade_point: f64,
    },

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Notification sender errors
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Enrollment workflow errors - returned by `EnrollmentService`
#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Enrollment rejected: {0}")]
    Enrollment(String),

    #[error("Course {course_code} is full (capacity {capacity})")]
    CourseFull { course_code: String, capacity: i32 },

    #[error("Prerequisites for {course_code} not met by student {student_id}")]
    PrerequisiteNotMet {
        student_id: String,
        course_code: String,
    },

    #[error("{0}")]
    Domain(#[from] DomainError),
}
