//! In-memory adapter for StudentRepository

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::poisoned;
use crate::domain::entities::Student;
use crate::domain::ports::StudentRepository;
use crate::error::DomainError;

/// In-memory implementation of StudentRepository
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<HashMap<String, Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a student record.
    ///
    /// Seeding owns the repository, so a poisoned lock is recovered and the
    /// record is always stored. The poison flag stays set for trait calls.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(student.id.clone(), student);
        self
    }

    /// Insert or replace a student (admission)
    pub fn insert(&self, student: Student) -> Result<(), DomainError> {
        self.students
            .write()
            .map_err(poisoned)?
            .insert(student.id.clone(), student);
        Ok(())
    }

    /// Number of stored students, read through a poisoned lock if need be
    pub fn len(&self) -> usize {
        self.students
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self.students.read().map_err(poisoned)?.get(id).cloned())
    }

    fn update(&self, student: &Student) -> Result<(), DomainError> {
        let mut students = self.students.write().map_err(poisoned)?;
        let existing = students
            .get_mut(&student.id)
            .ok_or_else(|| DomainError::Repository(format!("Student {} not found", student.id)))?;
        *existing = student.clone();
        Ok(())
    }
}
