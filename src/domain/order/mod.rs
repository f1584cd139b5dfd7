// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderClass, OrderStatus, ShippingQuote)
// - Events (OrderCreated, OrderProcessingStarted)
// - Commands (Create, Process)
// - Errors (OrderError)
// - Aggregate (Order with the per-class shipping rules)
// - Factory (OrderFactory)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod factory;

pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use factory::*;
