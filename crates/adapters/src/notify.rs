//! Notification adapters.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use application::error::NotificationError;
use application::ports::NotificationService;
use common::OrderId;
use domain::Money;

/// Notification adapter that writes to the structured log.
///
/// Stands in for a real delivery channel (email, SMS, push); swapping it
/// out requires no change to the orchestrators.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationService;

impl LogNotificationService {
    /// Creates a new log-backed notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn send_order_confirmation(
        &self,
        email: &str,
        order_id: OrderId,
        total_amount: Money,
    ) -> Result<(), NotificationError> {
        tracing::info!(%email, %order_id, total = %total_amount, "order confirmation sent");
        Ok(())
    }

    async fn send_order_cancellation(
        &self,
        email: &str,
        order_id: OrderId,
    ) -> Result<(), NotificationError> {
        tracing::info!(%email, %order_id, "order cancellation sent");
        Ok(())
    }
}

/// A notification captured by [`InMemoryNotificationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    Confirmation {
        email: String,
        order_id: OrderId,
        total_amount: Money,
    },
    Cancellation {
        email: String,
        order_id: OrderId,
    },
}

/// Notification adapter that records every delivery in memory.
///
/// Clones share the same recording, which lets tests assert on what the
/// orchestrators emitted.
#[derive(Clone, Default)]
pub struct InMemoryNotificationService {
    sent: Arc<RwLock<Vec<SentNotification>>>,
}

impl InMemoryNotificationService {
    /// Creates a new empty recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything sent so far.
    pub async fn sent(&self) -> Vec<SentNotification> {
        self.sent.read().await.clone()
    }

    /// Returns the number of notifications sent.
    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationService {
    async fn send_order_confirmation(
        &self,
        email: &str,
        order_id: OrderId,
        total_amount: Money,
    ) -> Result<(), NotificationError> {
        self.sent.write().await.push(SentNotification::Confirmation {
            email: email.to_string(),
            order_id,
            total_amount,
        });
        Ok(())
    }

    async fn send_order_cancellation(
        &self,
        email: &str,
        order_id: OrderId,
    ) -> Result<(), NotificationError> {
        self.sent.write().await.push(SentNotification::Cancellation {
            email: email.to_string(),
            order_id,
        });
        Ok(())
    }
}
