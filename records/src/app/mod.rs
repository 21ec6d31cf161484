//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and grading rules.

pub mod academic_config;
pub mod enrollment_service;
pub mod grade_calculator;

// Re-export policy constants for consumers
pub use academic_config::*;
pub use enrollment_service::{EnrollmentService, DROP_SUBJECT, ENROLLMENT_SUBJECT, STANDING_SUBJECT};
pub use grade_calculator::{
    calculate_gpa, calculate_max_credits, determine_academic_status, GradeCalculator,
    GradingPolicy,
};
