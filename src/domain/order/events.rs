use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::event_sourcing::core::DomainEvent;
use super::value_objects::OrderClass;

// ============================================================================
// Order Events - Domain Events for the Order Aggregate
// ============================================================================

/// Order Event - Union type for all order events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Created(OrderCreated),
    ProcessingStarted(OrderProcessingStarted),
}

impl OrderEvent {
    /// Name of the concrete event carried by this variant
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => OrderCreated::event_type(),
            OrderEvent::ProcessingStarted(_) => OrderProcessingStarted::event_type(),
        }
    }
}

impl DomainEvent for OrderEvent {
    fn event_type() -> &'static str { "OrderEvent" }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Order Created - Initial event in order lifecycle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderCreated {
    pub class: OrderClass,
    pub order_id: String,
    pub total_amount: f64,
}

impl DomainEvent for OrderCreated {
    fn event_type() -> &'static str { "OrderCreated" }
    fn event_version() -> i32 { 1 }
}

/// Order Processing Started - Order handed over for fulfillment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderProcessingStarted {
    pub started_at: DateTime<Utc>,
}

impl DomainEvent for OrderProcessingStarted {
    fn event_type() -> &'static str { "OrderProcessingStarted" }
    fn event_version() -> i32 { 1 }
}
