//! In-memory adapters
//!
//! Implementations of repository traits backed by `RwLock`-guarded maps.

pub mod course_repo;
pub mod student_repo;

pub use course_repo::InMemoryCourseRepository;
pub use student_repo::InMemoryStudentRepository;

use crate::error::DomainError;

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Repository("store lock poisoned".to_string())
}
