//! Enrollment service
//!
//! Runs the enroll / drop workflows and term-end standing updates.
//! Every check short-circuits before any record is mutated.

use std::sync::Arc;

use crate::app::grade_calculator::GradingPolicy;
use crate::domain::entities::{Course, CourseGrade, Enrollment, Student};
use crate::domain::ports::{CourseRepository, NotificationSender, StudentRepository};
use crate::error::EnrollmentError;

pub const ENROLLMENT_SUBJECT: &str = "Enrollment Confirmation";
pub const DROP_SUBJECT: &str = "Course Drop Confirmation";
pub const STANDING_SUBJECT: &str = "Academic Status Update";

/// Service for course enrollment workflows
pub struct EnrollmentService<SR, CR, NS, GP>
where
    SR: StudentRepository,
    CR: CourseRepository,
    NS: NotificationSender,
    GP: GradingPolicy,
{
    students: Arc<SR>,
    courses: Arc<CR>,
    notifications: Arc<NS>,
    grading: Arc<GP>,
}

impl<SR, CR, NS, GP> EnrollmentService<SR, CR, NS, GP>
where
    SR: StudentRepository,
    CR: CourseRepository,
    NS: NotificationSender,
    GP: GradingPolicy,
{
    pub fn new(
        students: Arc<SR>,
        courses: Arc<CR>,
        notifications: Arc<NS>,
        grading: Arc<GP>,
    ) -> Self {
        Self {
            students,
            courses,
            notifications,
            grading,
        }
    }

    /// Enroll a student in a course.
    ///
    /// Checks, in order: student exists, student is not suspended, course
    /// exists, course has a free seat, prerequisites are met. On success the
    /// course's enrolled count is incremented and persisted, and the student
    /// is notified.
    pub fn enroll_course(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<Enrollment, EnrollmentError> {
        let student = self.require_student(student_id)?;

        if student.is_suspended() {
            tracing::debug!(student_id = %student_id, "Enrollment rejected: student suspended");
            return Err(EnrollmentError::Enrollment(format!(
                "Student {} is suspended and cannot enroll",
                student_id
            )));
        }

        let mut course = self.require_course(course_code)?;

        if course.is_full() {
            tracing::debug!(
                course_code = %course_code,
                capacity = course.capacity,
                "Enrollment rejected: course full"
            );
            return Err(EnrollmentError::CourseFull {
                course_code: course.course_code,
                capacity: course.capacity,
            });
        }

        if !self.courses.is_prerequisite_met(student_id, course_code)? {
            tracing::debug!(
                student_id = %student_id,
                course_code = %course_code,
                "Enrollment rejected: prerequisites not met"
            );
            return Err(EnrollmentError::PrerequisiteNotMet {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        course.enrolled_count += 1;
        self.courses.update(&course)?;

        let enrollment = Enrollment::approved(student_id, course_code);

        self.notify(
            &student,
            ENROLLMENT_SUBJECT,
            &format!(
                "Dear {}, you have been enrolled in {} ({}).",
                student.name, course.course_name, course.course_code
            ),
        );

        tracing::info!(
            enrollment_id = %enrollment.enrollment_id,
            student_id = %student_id,
            course_code = %course_code,
            enrolled_count = course.enrolled_count,
            "Student enrolled"
        );

        Ok(enrollment)
    }

    /// Whether a student may take `requested_credits` this term
    pub fn validate_credit_limit(
        &self,
        student_id: &str,
        requested_credits: u32,
    ) -> Result<bool, EnrollmentError> {
        let student = self.require_student(student_id)?;
        let max_credits = self.grading.calculate_max_credits(student.gpa)?;

        Ok(requested_credits <= max_credits)
    }

    /// Drop a student from a course.
    ///
    /// Does not check that the student holds an enrollment, and does not
    /// floor the enrolled count at zero. The count saturates at `i32::MIN`.
    pub fn drop_course(&self, student_id: &str, course_code: &str) -> Result<(), EnrollmentError> {
        let student = self.require_student(student_id)?;
        let mut course = self.require_course(course_code)?;

        course.enrolled_count = course.enrolled_count.saturating_sub(1);
        if course.enrolled_count < 0 {
            tracing::warn!(
                course_code = %course_code,
                enrolled_count = course.enrolled_count,
                "Enrolled count dropped below zero"
            );
        }
        self.courses.update(&course)?;

        self.notify(
            &student,
            DROP_SUBJECT,
            &format!(
                "Dear {}, you have dropped {} ({}).",
                student.name, course.course_name, course.course_code
            ),
        );

        tracing::info!(
            student_id = %student_id,
            course_code = %course_code,
            enrolled_count = course.enrolled_count,
            "Student dropped course"
        );

        Ok(())
    }

    /// Recompute a student's GPA and standing from their grades and persist both.
    ///
    /// The student is notified only when the standing changes.
    pub fn recalculate_standing(
        &self,
        student_id: &str,
        grades: &[CourseGrade],
    ) -> Result<Student, EnrollmentError> {
        let mut student = self.require_student(student_id)?;

        let gpa = self.grading.calculate_gpa(grades)?;
        let status = self
            .grading
            .determine_academic_status(gpa, student.semester)?;

        let previous = student.academic_status;
        student.gpa = gpa;
        student.academic_status = status;
        self.students.update(&student)?;

        if previous != status {
            self.notify(
                &student,
                STANDING_SUBJECT,
                &format!(
                    "Dear {}, your academic status changed from {} to {} (GPA {:.2}).",
                    student.name, previous, status, gpa
                ),
            );
        }

        tracing::info!(
            student_id = %student_id,
            gpa = gpa,
            old_status = %previous,
            new_status = %status,
            "Academic standing recalculated"
        );

        Ok(student)
    }

    fn require_student(&self, student_id: &str) -> Result<Student, EnrollmentError> {
        self.students
            .find_by_id(student_id)?
            .ok_or_else(|| EnrollmentError::StudentNotFound(student_id.to_string()))
    }

    fn require_course(&self, course_code: &str) -> Result<Course, EnrollmentError> {
        self.courses
            .find_by_course_code(course_code)?
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_code.to_string()))
    }

    /// Best-effort delivery; a failure never undoes the workflow
    fn notify(&self, student: &Student, subject: &str, body: &str) {
        if let Err(e) = self.notifications.send_email(&student.email, subject, body) {
            tracing::warn!(
                student_id = %student.id,
                subject = subject,
                error = %e,
                "Failed to send notification"
            );
        }
    }
}
