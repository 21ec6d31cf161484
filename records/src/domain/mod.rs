//! Domain layer
//!
//! Contains pure business records with no external dependencies.
//! - `entities`: Students, courses, enrollments and grades
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;
