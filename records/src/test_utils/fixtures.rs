//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid record that can be customized.

use crate::domain::entities::{AcademicStatus, Course, CourseGrade, Student};

/// Create a test student: semester 3, GPA 3.5, active
pub fn test_student() -> Student {
    Student::new(
        "S123",
        "Budi",
        "budi@mail.com",
        "Informatics",
        3,
        3.5,
        AcademicStatus::Active,
    )
}

/// Create a test student with a specific ID
pub fn test_student_with_id(id: &str) -> Student {
    Student {
        id: id.to_string(),
        email: format!("{}@mail.com", id.to_lowercase()),
        ..test_student()
    }
}

/// Create a test student with a specific academic status
pub fn test_student_with_status(status: AcademicStatus) -> Student {
    Student {
        academic_status: status,
        ..test_student()
    }
}

/// Create a test student with a specific GPA
pub fn test_student_with_gpa(gpa: f64) -> Student {
    Student {
        gpa,
        ..test_student()
    }
}

/// Create a test course: 3 credits, 30 of 40 seats taken, no prerequisites
pub fn test_course() -> Course {
    Course::new("CS101", "Basic Programming", 3, 40, 30, "Dr. Anita Dewi")
}

/// Create a test course with a specific code
pub fn test_course_with_code(code: &str) -> Course {
    Course {
        course_code: code.to_string(),
        course_name: format!("Course {}", code),
        ..test_course()
    }
}

/// Create a test course whose seats are all taken
pub fn test_full_course() -> Course {
    let mut course = test_course();
    course.enrolled_count = course.capacity;
    course
}

/// A two-course transcript with GPA 3.60
pub fn test_grades() -> Vec<CourseGrade> {
    vec![
        CourseGrade::new("MK1", 3, 4.0),
        CourseGrade::new("MK2", 2, 3.0),
    ]
}
