//! Application layer for the order service.
//!
//! This crate provides:
//! - Port contracts ([`OrderRepository`], [`NotificationService`]) that
//!   decouple the business logic from storage and delivery mechanisms
//! - The three use-case orchestrators (create, get, update-status)
//! - The [`UseCaseError`] taxonomy surfaced to protocol adapters
//!
//! Orchestrators are stateless; their only collaborators are the injected
//! port implementations.

pub mod commands;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use commands::{CreateOrderCommand, ItemSpec};
pub use error::{NotificationError, StorageError, UseCaseError};
pub use ports::{NotificationService, OrderRepository};
pub use use_cases::{CreateOrder, GetOrder, UpdateOrderStatus};
