//! In-memory adapter for CourseRepository

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use super::poisoned;
use crate::domain::entities::Course;
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

/// In-memory implementation of CourseRepository
///
/// Prerequisites are checked against each student's completed course codes.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<HashMap<String, Course>>,
    completed: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a course record.
    ///
    /// Like every `with_*` builder here, a poisoned lock is recovered and the
    /// record is always stored. The poison flag stays set for trait calls.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(course.course_code.clone(), course);
        self
    }

    /// Seed a completed course for a student
    pub fn with_completed_course(mut self, student_id: &str, course_code: &str) -> Self {
        self.completed
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(student_id.to_string())
            .or_default()
            .insert(course_code.to_string());
        self
    }

    /// Insert or replace a course
    pub fn insert(&self, course: Course) -> Result<(), DomainError> {
        self.courses
            .write()
            .map_err(poisoned)?
            .insert(course.course_code.clone(), course);
        Ok(())
    }

    /// Mark a course as completed by a student
    pub fn record_completion(&self, student_id: &str, course_code: &str) -> Result<(), DomainError> {
        self.completed
            .write()
            .map_err(poisoned)?
            .entry(student_id.to_string())
            .or_default()
            .insert(course_code.to_string());
        Ok(())
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError> {
        Ok(self.courses.read().map_err(poisoned)?.get(course_code).cloned())
    }

    fn is_prerequisite_met(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<bool, DomainError> {
        let courses = self.courses.read().map_err(poisoned)?;
        let Some(course) = courses.get(course_code) else {
            return Ok(false);
        };

        let completed = self.completed.read().map_err(poisoned)?;
        let done = completed.get(student_id);

        Ok(course
            .prerequisites
            .iter()
            .all(|code| done.is_some_and(|d| d.contains(code))))
    }

    fn update(&self, course: &Course) -> Result<(), DomainError> {
        let mut courses = self.courses.write().map_err(poisoned)?;
        let existing = courses.get_mut(&course.course_code).ok_or_else(|| {
            DomainError::Repository(format!("Course {} not found", course.course_code))
        })?;
        *existing = course.clone();
        Ok(())
    }
}
