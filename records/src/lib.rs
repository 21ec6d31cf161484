//! Campus academic records
//!
//! Student, course and grade records with the university's enrollment and
//! academic-standing rules. Uses hexagonal (ports & adapters) architecture:
//! services depend on repository and notification traits, adapters supply
//! the implementations.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use app::{EnrollmentService, GradeCalculator, GradingPolicy};
pub use config::Config;
pub use domain::entities::{
    AcademicStatus, Course, CourseGrade, Enrollment, EnrollmentId, EnrollmentStatus, Student,
};
pub use error::{DomainError, EnrollmentError, NotificationError};
