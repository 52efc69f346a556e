//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{Money, OrderError, OrderItem, OrderStatus};

/// Order aggregate root.
///
/// Owns its line items and enforces the status state machine. The total
/// amount is computed once at construction and never recomputed; items
/// cannot change after the order exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    customer_email: String,
    items: Vec<OrderItem>,
    total_amount: Money,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates a new pending order with a fresh identity.
    ///
    /// The total amount is the sum of the item subtotals. Name, email, and
    /// item-list validation is the caller's responsibility; item-level
    /// invariants are already guaranteed by [`OrderItem::new`].
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        let total_amount = items.iter().map(OrderItem::subtotal).sum();

        Self {
            id: OrderId::new(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Confirms a pending order.
    pub fn confirm(&mut self) -> Result<(), OrderError> {
        if !self.status.can_confirm() {
            return Err(OrderError::InvalidTransition {
                current: self.status,
                action: "confirm",
            });
        }

        self.status = OrderStatus::Confirmed;
        self.touch();
        Ok(())
    }

    /// Cancels the order.
    ///
    /// Allowed from every status except `Delivered`.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if !self.status.can_cancel() {
            return Err(OrderError::InvalidTransition {
                current: self.status,
                action: "cancel",
            });
        }

        self.status = OrderStatus::Cancelled;
        self.touch();
        Ok(())
    }

    /// Marks a confirmed order as delivered.
    pub fn mark_delivered(&mut self) -> Result<(), OrderError> {
        if !self.status.can_deliver() {
            return Err(OrderError::InvalidTransition {
                current: self.status,
                action: "mark delivered",
            });
        }

        self.status = OrderStatus::Delivered;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

// Query methods
impl Order {
    /// Returns the order identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the customer name.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer email.
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Returns the line items.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the total amount computed at construction.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the creation timestamp (UTC).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last status transition, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
