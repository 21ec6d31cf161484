//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod notification;

pub use memory::{InMemoryCourseRepository, InMemoryStudentRepository};
pub use notification::{NoopNotificationSender, TracingNotificationSender};
