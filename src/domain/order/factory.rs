use super::aggregate::Order;
use super::errors::OrderError;
use super::value_objects::{OrderClass, ShippingQuote};

// ============================================================================
// Order Factory
// ============================================================================
//
// Single creation point for orders: classification tag in, matching
// order variant out.
//
// ============================================================================

pub struct OrderFactory;

impl OrderFactory {
    pub fn create(class: OrderClass, order_id: impl Into<String>, amount: f64) -> Order {
        let order = Order::new(class, order_id, amount);

        tracing::debug!(
            order_id = %order.order_id(),
            class = %class,
            amount = amount,
            "Order created"
        );

        order
    }

    /// Create an order from a textual classification tag.
    ///
    /// Fails with [`OrderError::InvalidArgument`] carrying the tag when it
    /// names none of the known classes.
    pub fn create_order(tag: &str, order_id: impl Into<String>, amount: f64) -> Result<Order, OrderError> {
        let class = tag.parse::<OrderClass>().map_err(|e| {
            tracing::warn!(tag = %tag, "Rejected unknown order type");
            e
        })?;

        Ok(Self::create(class, order_id, amount))
    }

    /// Shipping terms of every order class for the same total
    pub fn quote_all(amount: f64) -> Vec<ShippingQuote> {
        OrderClass::ALL
            .into_iter()
            .map(|class| ShippingQuote::new(class, amount))
            .collect()
    }
}
