//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ──confirm──► Confirmed ──mark_delivered──► Delivered
///    │                     │
///    └───────cancel────────┴──► Cancelled
/// ```
///
/// `cancel` is allowed from every status except `Delivered`; no other
/// transition leaves `Cancelled` or `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been created and awaits confirmation.
    #[default]
    Pending,

    /// Order has been confirmed and can be delivered.
    Confirmed,

    /// Order was cancelled.
    Cancelled,

    /// Order has been delivered (terminal).
    Delivered,
}

impl OrderStatus {
    /// Returns true if the order can be confirmed in this status.
    pub fn can_confirm(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns true if the order can be cancelled in this status.
    pub fn can_cancel(&self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }

    /// Returns true if the order can be marked delivered in this status.
    pub fn can_deliver(&self) -> bool {
        matches!(self, OrderStatus::Confirmed)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Looks up a status by name, case-insensitively.
    ///
    /// Returns None for unrecognized names.
    pub fn from_name(name: &str) -> Option<OrderStatus> {
        [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Cancelled,
            OrderStatus::Delivered,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
