//! Use-case orchestrators.
//!
//! Each orchestrator enforces the business rules that span beyond
//! single-entity invariants and coordinates calls across the ports.

mod create_order;
mod get_order;
mod update_status;

pub use create_order::CreateOrder;
pub use get_order::GetOrder;
pub use update_status::UpdateOrderStatus;
