// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic event sourcing building blocks.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;

pub use self::core::*;
