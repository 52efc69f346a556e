//! Get-order use case.

use common::OrderId;
use domain::Order;

use crate::error::UseCaseError;
use crate::ports::OrderRepository;

/// Looks up a single order by its identifier.
pub struct GetOrder<R> {
    repository: R,
}

impl<R: OrderRepository> GetOrder<R> {
    /// Creates the use case with its injected repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the order, or `None` if no order has that identifier.
    ///
    /// Absence is a result, not a failure; callers decide how to surface it.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, order_id: OrderId) -> Result<Option<Order>, UseCaseError> {
        Ok(self.repository.get_by_id(order_id).await?)
    }
}
