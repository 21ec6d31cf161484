//! Domain entities
//!
//! Plain records for students, courses, enrollments and grades.

pub mod course;
pub mod course_grade;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use course_grade::{CourseGrade, MAX_GRADE_POINT, MIN_GRADE_POINT};
pub use enrollment::{Enrollment, EnrollmentId, EnrollmentStatus};
pub use student::{AcademicStatus, Student};
