// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Unknown order type: {0}")]
    InvalidArgument(String),

    #[error("Order {0} already exists")]
    AlreadyCreated(String),

    #[error("Aggregate not initialized")]
    NotInitialized,
}
