//! # Order Error Types
//!
//! Typed error handling for strategy-cart.
//! All fallible order operations return `Result<T, OrderError>`.

use thiserror::Error;

/// Coarse classification of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric or structural input was out of range
    InvalidArgument,
    /// A required strategy was never set
    MissingConfiguration,
    /// A strategy refused to do its job
    StrategyFailed,
    /// Encoding or decoding failed
    Serialization,
}

/// Core error type for all order operations
#[derive(Debug, Error)]
pub enum OrderError {
    /// Negative price, out-of-range percentage and similar input errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Payment, delivery or discount strategy not set
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// Line item currency differs from the order currency
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Strategy name not registered in a selector
    #[error("Unknown {kind} strategy: {name}")]
    UnknownStrategy { kind: &'static str, name: String },

    /// Payment was declined by the payment method
    #[error("Payment declined by {method}: {reason}")]
    PaymentDeclined { method: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidArgument(_)
            | OrderError::CurrencyMismatch { .. }
            | OrderError::UnknownStrategy { .. } => ErrorKind::InvalidArgument,
            OrderError::MissingConfiguration(_) => ErrorKind::MissingConfiguration,
            OrderError::PaymentDeclined { .. } => ErrorKind::StrategyFailed,
            OrderError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Shorthand for `kind() == ErrorKind::MissingConfiguration`
    pub fn is_missing_configuration(&self) -> bool {
        self.kind() == ErrorKind::MissingConfiguration
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(err: serde_json::Error) -> Self {
        OrderError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for OrderError {
    fn from(err: toml::de::Error) -> Self {
        OrderError::Serialization(err.to_string())
    }
}

/// Result type alias for order operations
pub type OrderResult<T> = Result<T, OrderError>;
