use thiserror::Error;

/// Failure of a single order screen operation.
///
/// Remote failures carry what the transport or the API reported; the
/// remaining variants are local precondition failures raised before any
/// request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("No product selected")]
    NoProductSelected,
    #[error("Line item {0} is not part of this order")]
    UnknownItem(String),
    #[error("Order still has line items")]
    OrderNotEmpty,
    #[error("Order has no line items")]
    OrderEmpty,
    #[error("Picker is not open")]
    PickerNotOpen,
    #[error("Order screen is no longer mounted")]
    Detached,
}

impl OrderError {
    /// True when the failure came from the remote API or the transport.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            OrderError::Network(_) | OrderError::Status { .. } | OrderError::Decode(_)
        )
    }
}
