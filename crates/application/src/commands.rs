//! Command types accepted by the use-case orchestrators.

use domain::{Money, ProductId};

/// Command to create a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<ItemSpec>,
}

impl CreateOrderCommand {
    /// Creates a new command.
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        items: Vec<ItemSpec>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items,
        }
    }
}

/// Descriptor for a single line item in a create command.
///
/// Item-level invariants (positive quantity, non-negative price) are
/// enforced when the descriptor is turned into an `OrderItem`.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl ItemSpec {
    /// Creates a new item descriptor.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            unit_price,
            quantity,
        }
    }
}
