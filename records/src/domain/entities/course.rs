//! Course domain entity

use serde::{Deserialize, Serialize};

/// A course offering with a fixed seat capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub capacity: i32,
    /// Seats taken. Signed because drops are not floored at zero.
    pub enrolled_count: i32,
    pub lecturer: String,
    /// Course codes that must be satisfied first, in declaration order
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a course with no prerequisites
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        credits: u32,
        capacity: i32,
        enrolled_count: i32,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            credits,
            capacity,
            enrolled_count,
            lecturer: lecturer.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Append a prerequisite. Duplicates are kept.
    pub fn add_prerequisite(&mut self, course_code: impl Into<String>) {
        self.prerequisites.push(course_code.into());
    }

    pub fn with_prerequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    pub fn available_seats(&self) -> i32 {
        (self.capacity - self.enrolled_count).max(0)
    }
}
