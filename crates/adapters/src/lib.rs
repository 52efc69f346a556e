//! Output adapters for the order service ports.
//!
//! - [`InMemoryOrderRepository`] — storage port backed by a process-local map
//! - [`LogNotificationService`] — notification port that writes to the log
//! - [`InMemoryNotificationService`] — recording notification port for tests
//!   and demos

pub mod memory;
pub mod notify;

pub use memory::InMemoryOrderRepository;
pub use notify::{InMemoryNotificationService, LogNotificationService, SentNotification};
