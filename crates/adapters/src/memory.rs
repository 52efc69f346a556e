//! In-memory storage adapter.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use application::error::StorageError;
use application::ports::OrderRepository;
use common::OrderId;
use domain::Order;

/// In-memory order repository.
///
/// Stores orders in a map behind a `tokio` read-write lock; individual
/// save/get operations are atomic. The repository does not serialize
/// get-then-save sequences per identifier, so concurrent status updates on
/// the same order are last-writer-wins. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Clears all stored orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<Order, StorageError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id(), order.clone());
        Ok(order)
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }

    async fn delete(&self, id: OrderId) -> Result<bool, StorageError> {
        let mut orders = self.orders.write().await;
        Ok(orders.remove(&id).is_some())
    }
}
