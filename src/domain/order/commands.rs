use super::value_objects::OrderClass;

// ============================================================================
// Order Commands - Represent caller intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum OrderCommand {
    Create {
        class: OrderClass,
        order_id: String,
        amount: f64,
    },
    Process,
}
