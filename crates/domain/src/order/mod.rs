//! Order aggregate and related types.

mod aggregate;
mod status;
mod value_objects;

pub use aggregate::Order;
pub use status::OrderStatus;
pub use value_objects::{Money, OrderItem, ProductId};

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Item quantity must be greater than zero.
    #[error("invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Item unit price must not be negative.
    #[error("invalid unit price: {price} (must not be negative)")]
    NegativePrice { price: Money },

    /// The requested transition is not allowed from the current status.
    #[error("cannot {action} an order in the {current} status")]
    InvalidTransition {
        current: OrderStatus,
        action: &'static str,
    },
}
