//! Repository port traits
//!
//! These traits define the interface for record persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use crate::domain::entities::{Course, Student};
use crate::error::DomainError;

/// Repository for Student records
pub trait StudentRepository: Send + Sync {
    /// Find a student by ID
    fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError>;

    /// Persist the mutable fields of an existing student
    fn update(&self, student: &Student) -> Result<(), DomainError>;
}

/// Repository for Course records
pub trait CourseRepository: Send + Sync {
    /// Find a course by its code
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError>;

    /// Check whether a student satisfies every prerequisite of a course
    fn is_prerequisite_met(&self, student_id: &str, course_code: &str)
        -> Result<bool, DomainError>;

    /// Persist the mutable fields of an existing course.
    /// Repeating the call with the same course is a no-op.
    fn update(&self, course: &Course) -> Result<(), DomainError>;
}
