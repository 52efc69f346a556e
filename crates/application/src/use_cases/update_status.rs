//! Update-order-status use case.

use common::OrderId;
use domain::{Order, OrderStatus};

use crate::error::UseCaseError;
use crate::ports::{NotificationService, OrderRepository};

/// Loads an order, applies the requested status transition through the
/// aggregate's guarded operations, and persists the result.
pub struct UpdateOrderStatus<R, N> {
    repository: R,
    notifier: N,
}

impl<R: OrderRepository, N: NotificationService> UpdateOrderStatus<R, N> {
    /// Creates the use case with its injected ports.
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Executes the use case and returns the persisted order.
    ///
    /// `Pending` is not a valid target; guard rejections propagate as
    /// [`UseCaseError::Order`]. A successful cancellation emits exactly one
    /// cancellation notification, after the order has been persisted.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        order_id: OrderId,
        target: OrderStatus,
    ) -> Result<Order, UseCaseError> {
        let mut order = self
            .repository
            .get_by_id(order_id)
            .await?
            .ok_or(UseCaseError::NotFound { order_id })?;

        match target {
            OrderStatus::Confirmed => order.confirm()?,
            OrderStatus::Cancelled => order.cancel()?,
            OrderStatus::Delivered => order.mark_delivered()?,
            OrderStatus::Pending => {
                return Err(UseCaseError::InvalidStatus { requested: target });
            }
        }

        let saved = self.repository.save(order).await?;

        metrics::counter!("order_status_updates_total").increment(1);
        tracing::info!(order_id = %saved.id(), status = %saved.status(), "order status updated");

        if target == OrderStatus::Cancelled {
            if let Err(err) = self
                .notifier
                .send_order_cancellation(saved.customer_email(), saved.id())
                .await
            {
                tracing::warn!(
                    order_id = %saved.id(),
                    error = %err,
                    "order cancelled but cancellation notification failed"
                );
                return Err(err.into());
            }
        }

        Ok(saved)
    }
}
