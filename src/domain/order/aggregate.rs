use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::Utc;

use crate::event_sourcing::core::{Aggregate, EventEnvelope};
use super::value_objects::{OrderClass, OrderStatus};
use super::events::*;
use super::commands::OrderCommand;
use super::errors::OrderError;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    class: OrderClass,
    total_amount: f64,
    status: OrderStatus,
    version: i64,

    #[serde(skip)]
    uncommitted: Vec<OrderEvent>,
}

impl Order {
    /// Build a fresh order in the `created` status.
    ///
    /// The amount is not validated; negative totals still evaluate through
    /// the shipping formulas.
    pub fn new(class: OrderClass, order_id: impl Into<String>, total_amount: f64) -> Self {
        let created = OrderCreated {
            class,
            order_id: order_id.into(),
            total_amount,
        };
        let mut order = Self::from_created(&created);
        order.uncommitted.push(OrderEvent::Created(created));
        order
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn class(&self) -> OrderClass {
        self.class
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn calculate_shipping(&self) -> f64 {
        self.class.shipping_cost(self.total_amount)
    }

    pub fn delivery_days(&self) -> u32 {
        self.class.delivery_days()
    }

    /// Move the order to `processing` and return a confirmation message.
    ///
    /// Repeated calls re-apply the same transition.
    pub fn process(&mut self) -> String {
        match self.execute(&OrderCommand::Process) {
            Ok(()) => tracing::info!(
                order_id = %self.order_id,
                class = %self.class,
                version = self.version,
                "Order processing started"
            ),
            Err(e) => tracing::error!(
                order_id = %self.order_id,
                error = %e,
                "Order processing failed"
            ),
        }

        format!("Order {} is being processed", self.order_id)
    }

    /// Run a command against this order, applying and recording the
    /// resulting events.
    pub fn execute(&mut self, command: &OrderCommand) -> Result<(), OrderError> {
        let events = self.handle_command(command)?;

        for event in events {
            self.apply_event(&event)?;
            self.uncommitted.push(event);
        }

        Ok(())
    }

    /// Events recorded since creation or the last drain
    pub fn uncommitted_events(&self) -> &[OrderEvent] {
        &self.uncommitted
    }

    pub fn take_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.uncommitted)
    }

    /// Drain recorded events wrapped in envelopes, numbered up to the
    /// current version.
    pub fn take_envelopes(&mut self, correlation_id: Uuid) -> Vec<EventEnvelope<OrderEvent>> {
        let events = self.take_events();
        let mut seq = self.version - events.len() as i64;

        events
            .into_iter()
            .map(|event| {
                seq += 1;
                EventEnvelope::new(
                    self.order_id.clone(),
                    seq,
                    event.name().to_string(),
                    event,
                    correlation_id,
                )
            })
            .collect()
    }

    fn from_created(created: &OrderCreated) -> Self {
        Self {
            order_id: created.order_id.clone(),
            class: created.class,
            total_amount: created.total_amount,
            status: OrderStatus::Created,
            version: 1,
            uncommitted: Vec::new(),
        }
    }

    fn mutate(&mut self, event: &OrderEvent) -> Result<(), OrderError> {
        match event {
            // Only valid as the first event
            OrderEvent::Created(_) => return Err(OrderError::AlreadyCreated(self.order_id.clone())),
            OrderEvent::ProcessingStarted(_) => {
                self.status = OrderStatus::Processing;
            }
        }
        self.version += 1;
        Ok(())
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for Order {
    type Event = OrderEvent;
    type Command = OrderCommand;
    type Error = OrderError;

    fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error> {
        match event {
            OrderEvent::Created(e) => Ok(Self::from_created(e)),
            _ => Err(OrderError::NotInitialized),
        }
    }

    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
        self.mutate(event)
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::Create { .. } => Err(OrderError::AlreadyCreated(self.order_id.clone())),
            OrderCommand::Process => Ok(vec![OrderEvent::ProcessingStarted(OrderProcessingStarted {
                started_at: Utc::now(),
            })]),
        }
    }

    fn aggregate_id(&self) -> &str {
        &self.order_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_order(class: OrderClass, amount: f64) -> Order {
        Order::new(class, "ORD014", amount)
    }

    #[test]
    fn test_new_order_is_created() {
        let order = create_test_order(OrderClass::Standard, 50.0);

        assert_eq!(order.order_id(), "ORD014");
        assert_eq!(order.class(), OrderClass::Standard);
        assert_eq!(order.total_amount(), 50.0);
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.version(), 1);
        assert_eq!(order.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_order_processing() {
        let mut order = create_test_order(OrderClass::Standard, 75.0);

        let result = order.process();

        assert_eq!(order.status(), OrderStatus::Processing);
        assert!(result.contains("ORD014"));
        assert!(result.contains("is being processed"));
    }

    #[test]
    fn test_repeated_processing_is_allowed() {
        let mut order = create_test_order(OrderClass::Express, 20.0);

        order.process();
        let second = order.process();

        assert_eq!(order.status(), OrderStatus::Processing);
        assert_eq!(second, "Order ORD014 is being processed");
        assert_eq!(order.version(), 3);
        assert_eq!(order.uncommitted_events().len(), 3);
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let order = create_test_order(OrderClass::International, -10.0);

        assert_eq!(order.total_amount(), -10.0);
        assert_eq!(order.calculate_shipping(), 24.0);
        assert_eq!(order.delivery_days(), 14);
    }

    #[test]
    fn test_take_events_drains() {
        let mut order = create_test_order(OrderClass::Standard, 10.0);
        order.process();

        let events = order.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], OrderEvent::Created(_)));
        assert!(matches!(events[1], OrderEvent::ProcessingStarted(_)));
        assert!(order.uncommitted_events().is_empty());
    }

    #[test]
    fn test_envelopes_are_sequenced() {
        let mut order = create_test_order(OrderClass::Standard, 10.0);
        let correlation_id = Uuid::new_v4();

        let first = order.take_envelopes(correlation_id);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].sequence_number, 1);
        assert_eq!(first[0].event_type, "OrderCreated");
        assert_eq!(first[0].aggregate_id, "ORD014");

        order.process();
        order.process();
        let next = order.take_envelopes(correlation_id);
        let sequences: Vec<_> = next.iter().map(|e| e.sequence_number).collect();
        assert_eq!(sequences, vec![2, 3]);
        assert!(next.iter().all(|e| e.event_type == "OrderProcessingStarted"));
        assert!(next.iter().all(|e| e.correlation_id == correlation_id));
    }

    #[test]
    fn test_load_from_events_replays_state() {
        let mut order = create_test_order(OrderClass::International, 150.0);
        order.process();
        let envelopes = order.take_envelopes(Uuid::new_v4());

        let restored = Order::load_from_events(envelopes).unwrap();

        assert_eq!(restored.order_id(), order.order_id());
        assert_eq!(restored.class(), OrderClass::International);
        assert_eq!(restored.total_amount(), 150.0);
        assert_eq!(restored.status(), OrderStatus::Processing);
        assert_eq!(restored.version(), order.version());
        assert!(restored.uncommitted_events().is_empty());
    }

    #[test]
    fn test_replay_of_concatenated_histories_fails() {
        let mut first = create_test_order(OrderClass::Standard, 50.0);
        first.process();
        let mut second = Order::new(OrderClass::International, "ORD015", 300.0);

        let mut history = first.take_envelopes(Uuid::new_v4());
        history.extend(second.take_envelopes(Uuid::new_v4()));

        let result = Order::load_from_events(history);
        assert!(result.is_err());
    }

    #[test]
    fn test_created_event_on_existing_order_rejected() {
        let mut order = create_test_order(OrderClass::Standard, 50.0);
        let event = OrderEvent::Created(OrderCreated {
            class: OrderClass::International,
            order_id: "ORD015".to_string(),
            total_amount: 300.0,
        });

        let result = order.apply_event(&event);
        assert!(matches!(result, Err(OrderError::AlreadyCreated(ref id)) if id == "ORD014"));
        assert_eq!(order.class(), OrderClass::Standard);
        assert_eq!(order.version(), 1);
    }

    #[test]
    fn test_execute_records_command_events() {
        let mut order = create_test_order(OrderClass::Express, 20.0);
        order.take_events();

        order.execute(&OrderCommand::Process).unwrap();

        assert_eq!(order.status(), OrderStatus::Processing);
        assert_eq!(order.version(), 2);
        assert!(matches!(order.uncommitted_events(), [OrderEvent::ProcessingStarted(_)]));
    }

    #[test]
    fn test_execute_create_leaves_order_untouched() {
        let mut order = create_test_order(OrderClass::Express, 20.0);
        let command = OrderCommand::Create {
            class: OrderClass::Standard,
            order_id: "ORD016".to_string(),
            amount: 10.0,
        };

        let result = order.execute(&command);

        assert!(matches!(result, Err(OrderError::AlreadyCreated(_))));
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_load_from_empty_history_fails() {
        let result = Order::load_from_events(Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_first_event_must_be_created() {
        let event = OrderEvent::ProcessingStarted(OrderProcessingStarted {
            started_at: Utc::now(),
        });

        let result = Order::apply_first_event(&event);
        assert!(matches!(result, Err(OrderError::NotInitialized)));
    }

    #[test]
    fn test_create_command_on_existing_order_rejected() {
        let order = create_test_order(OrderClass::Express, 99.0);
        let command = OrderCommand::Create {
            class: OrderClass::Express,
            order_id: "ORD014".to_string(),
            amount: 99.0,
        };

        let result = order.handle_command(&command);
        assert!(matches!(result, Err(OrderError::AlreadyCreated(ref id)) if id == "ORD014"));
    }

    #[test]
    fn test_process_command_emits_event() {
        let mut order = create_test_order(OrderClass::Standard, 120.0);

        let events = order.handle_command(&OrderCommand::Process).unwrap();
        assert_eq!(events.len(), 1);

        for event in &events {
            order.apply_event(event).unwrap();
        }
        assert_eq!(order.status(), OrderStatus::Processing);
    }

    #[test]
    fn test_order_serialization_skips_pending_events() {
        let order = create_test_order(OrderClass::Express, 200.0);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["class"], "express");
        assert_eq!(json["status"], "created");
        assert!(json.get("uncommitted").is_none());
    }
}
