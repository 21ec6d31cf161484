//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and record calls so tests can verify behavior.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Course, Student};
use crate::domain::ports::{CourseRepository, NotificationSender, StudentRepository};
use crate::error::{DomainError, NotificationError};

// ============================================================================
// Recording Student Repository
// ============================================================================

#[derive(Default)]
pub struct RecordingStudentRepository {
    students: Arc<RwLock<HashMap<String, Student>>>,
    update_calls: Arc<RwLock<usize>>,
}

impl RecordingStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a student for testing
    pub fn with_student(self, student: Student) -> Self {
        self.students
            .write()
            .unwrap()
            .insert(student.id.clone(), student);
        self
    }

    /// Current stored copy of a student
    pub fn get(&self, id: &str) -> Option<Student> {
        self.students.read().unwrap().get(id).cloned()
    }

    pub fn update_calls(&self) -> usize {
        *self.update_calls.read().unwrap()
    }
}

impl StudentRepository for RecordingStudentRepository {
    fn find_by_id(&self, id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self.students.read().unwrap().get(id).cloned())
    }

    fn update(&self, student: &Student) -> Result<(), DomainError> {
        *self.update_calls.write().unwrap() += 1;
        let mut students = self.students.write().unwrap();
        match students.get_mut(&student.id) {
            Some(existing) => {
                *existing = student.clone();
                Ok(())
            }
            None => Err(DomainError::Repository(format!(
                "Student {} not found",
                student.id
            ))),
        }
    }
}

// ============================================================================
// Recording Course Repository
// ============================================================================

pub struct RecordingCourseRepository {
    courses: Arc<RwLock<HashMap<String, Course>>>,
    prerequisites_met: Arc<RwLock<bool>>,
    fail_updates: Arc<RwLock<bool>>,
    lookups: Arc<RwLock<usize>>,
    prerequisite_checks: Arc<RwLock<usize>>,
    update_calls: Arc<RwLock<usize>>,
}

impl Default for RecordingCourseRepository {
    fn default() -> Self {
        Self {
            courses: Arc::new(RwLock::new(HashMap::new())),
            prerequisites_met: Arc::new(RwLock::new(true)),
            fail_updates: Arc::new(RwLock::new(false)),
            lookups: Arc::new(RwLock::new(0)),
            prerequisite_checks: Arc::new(RwLock::new(0)),
            update_calls: Arc::new(RwLock::new(0)),
        }
    }
}

impl RecordingCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a course for testing
    pub fn with_course(self, course: Course) -> Self {
        self.courses
            .write()
            .unwrap()
            .insert(course.course_code.clone(), course);
        self
    }

    /// Fix the answer of every prerequisite check
    pub fn with_prerequisites_met(self, met: bool) -> Self {
        *self.prerequisites_met.write().unwrap() = met;
        self
    }

    /// Make every `update` call fail with a repository error
    pub fn failing_updates(self) -> Self {
        *self.fail_updates.write().unwrap() = true;
        self
    }

    /// Current stored copy of a course
    pub fn get(&self, course_code: &str) -> Option<Course> {
        self.courses.read().unwrap().get(course_code).cloned()
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.read().unwrap()
    }

    pub fn prerequisite_checks(&self) -> usize {
        *self.prerequisite_checks.read().unwrap()
    }

    pub fn update_calls(&self) -> usize {
        *self.update_calls.read().unwrap()
    }
}

impl CourseRepository for RecordingCourseRepository {
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError> {
        *self.lookups.write().unwrap() += 1;
        Ok(self.courses.read().unwrap().get(course_code).cloned())
    }

    fn is_prerequisite_met(
        &self,
        _student_id: &str,
        _course_code: &str,
    ) -> Result<bool, DomainError> {
        *self.prerequisite_checks.write().unwrap() += 1;
        Ok(*self.prerequisites_met.read().unwrap())
    }

    fn update(&self, course: &Course) -> Result<(), DomainError> {
        *self.update_calls.write().unwrap() += 1;
        if *self.fail_updates.read().unwrap() {
            return Err(DomainError::Repository("update failed".to_string()));
        }
        self.courses
            .write()
            .unwrap()
            .insert(course.course_code.clone(), course.clone());
        Ok(())
    }
}

// ============================================================================
// Recording Notification Sender
// ============================================================================

/// A captured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A notification sender that records every message it is asked to send
#[derive(Default)]
pub struct RecordingNotificationSender {
    sent: Arc<RwLock<Vec<SentEmail>>>,
    attempts: Arc<RwLock<usize>>,
    should_fail: bool,
}

impl RecordingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Successfully delivered messages, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().unwrap().clone()
    }

    /// Delivery attempts, including failed ones
    pub fn attempts(&self) -> usize {
        *self.attempts.read().unwrap()
    }
}

impl NotificationSender for RecordingNotificationSender {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        *self.attempts.write().unwrap() += 1;
        if self.should_fail {
            return Err(NotificationError::Delivery("mail server down".to_string()));
        }
        self.sent.write().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
