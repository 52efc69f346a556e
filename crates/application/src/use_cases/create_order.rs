//! Create-order use case.

use domain::{Order, OrderItem};

use crate::commands::CreateOrderCommand;
use crate::error::UseCaseError;
use crate::ports::{NotificationService, OrderRepository};

/// Validates a create command, persists the new order, and sends the
/// confirmation notification.
pub struct CreateOrder<R, N> {
    repository: R,
    notifier: N,
}

impl<R: OrderRepository, N: NotificationService> CreateOrder<R, N> {
    /// Creates the use case with its injected ports.
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Executes the use case and returns the persisted order.
    ///
    /// Persistence happens before notification; if persistence fails no
    /// notification is attempted. A notification failure after a successful
    /// save is surfaced to the caller, but the order stays persisted.
    #[tracing::instrument(skip(self, command), fields(customer = %command.customer_name))]
    pub async fn execute(&self, command: CreateOrderCommand) -> Result<Order, UseCaseError> {
        if command.customer_name.trim().is_empty() {
            return Err(UseCaseError::InvalidCommand {
                reason: "customer name must not be blank",
            });
        }
        if command.customer_email.trim().is_empty() {
            return Err(UseCaseError::InvalidCommand {
                reason: "customer email must not be blank",
            });
        }
        if command.items.is_empty() {
            return Err(UseCaseError::InvalidCommand {
                reason: "order must contain at least one item",
            });
        }

        let items = command
            .items
            .into_iter()
            .map(|spec| {
                OrderItem::new(
                    spec.product_id,
                    spec.product_name,
                    spec.unit_price,
                    spec.quantity,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order::new(command.customer_name, command.customer_email, items);
        let saved = self.repository.save(order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %saved.id(), total = %saved.total_amount(), "order created");

        if let Err(err) = self
            .notifier
            .send_order_confirmation(saved.customer_email(), saved.id(), saved.total_amount())
            .await
        {
            tracing::warn!(
                order_id = %saved.id(),
                error = %err,
                "order persisted but confirmation notification failed"
            );
            return Err(err.into());
        }

        Ok(saved)
    }
}
