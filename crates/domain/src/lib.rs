//! Domain layer for the order service.
//!
//! This crate provides the core domain model:
//! - The Order aggregate with its guarded status transitions
//! - The OrderItem value object and Money value
//! - OrderError for item validation and transition guard failures
//!
//! It has no knowledge of storage, notifications, or transport protocols.

pub mod order;

pub use order::{Money, Order, OrderError, OrderItem, OrderStatus, ProductId};
