//! Output port contracts consumed by the use-case orchestrators.

use async_trait::async_trait;
use common::OrderId;
use domain::{Money, Order};

use crate::error::{NotificationError, StorageError};

/// Contract for persisting and retrieving orders.
///
/// Implementations must be thread-safe and must guarantee that individual
/// operations on the same order ID do not corrupt the stored value.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Upserts an order by its identifier and returns the stored value.
    async fn save(&self, order: Order) -> Result<Order, StorageError>;

    /// Looks up an order by its identifier.
    async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, StorageError>;

    /// Returns all stored orders.
    async fn get_all(&self) -> Result<Vec<Order>, StorageError>;

    /// Removes an order if present; returns whether something was removed.
    async fn delete(&self, id: OrderId) -> Result<bool, StorageError>;
}

/// Contract for emitting order-lifecycle notifications.
///
/// No data flows back to the caller, but delivery completion is awaited
/// before the orchestrator itself completes.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Notifies the customer that their order was created.
    async fn send_order_confirmation(
        &self,
        email: &str,
        order_id: OrderId,
        total_amount: Money,
    ) -> Result<(), NotificationError>;

    /// Notifies the customer that their order was cancelled.
    async fn send_order_cancellation(
        &self,
        email: &str,
        order_id: OrderId,
    ) -> Result<(), NotificationError>;
}
