//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notification;
pub mod repositories;

pub use notification::NotificationSender;
pub use repositories::{CourseRepository, StudentRepository};
