//! Error types surfaced at the use-case boundary.

use common::OrderId;
use domain::{OrderError, OrderStatus};
use thiserror::Error;

/// Error from a storage port implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage backend failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Error from a notification port implementation.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notification could not be delivered.
    #[error("notification delivery failure: {0}")]
    Delivery(String),
}

/// Errors that can occur while executing a use case.
///
/// Validation and guard failures are raised at the point of detection and
/// propagate unmodified; adapters map them to protocol-specific codes.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The create command is malformed or incomplete.
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: &'static str },

    /// Item validation or a transition guard failed in the aggregate.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The referenced order does not exist.
    #[error("order {order_id} not found")]
    NotFound { order_id: OrderId },

    /// The requested status is not a valid update target.
    #[error("{requested} is not a valid target status for an update")]
    InvalidStatus { requested: OrderStatus },

    /// The storage port failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The notification port failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
