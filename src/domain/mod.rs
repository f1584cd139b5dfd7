// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain aggregates, kept separate from the event sourcing infrastructure.
//
// ============================================================================

pub mod order;
