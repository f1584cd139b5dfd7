//! Order factory: builds standard, express and international orders from a
//! classification tag and computes their shipping cost and delivery time.

pub mod domain;
pub mod event_sourcing;

pub use domain::order::{Order, OrderClass, OrderError, OrderFactory, OrderStatus, ShippingQuote};
