//! # Payment Methods
//!
//! Strategy trait for taking payment for an order, plus the built-in
//! credit card, PayPal and bank transfer methods.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentMethod (trait)                     │
//! │  ├── process_payment()                                      │
//! │  ├── name()                                                 │
//! │  └── label()                                                │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │  CreditCard   │ │    PayPal     │ │ BankTransfer  │
//!  │   Payment     │ │   Payment     │ │   Payment     │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::OrderResult;
use crate::money::Price;
use crate::reporter::Reporter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Proof that a payment went through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Unique receipt ID (generated)
    pub receipt_id: String,

    /// Machine name of the payment method (e.g., "credit_card")
    pub method: String,

    /// Amount charged
    pub amount: Price,

    /// When the payment was processed
    pub processed_at: DateTime<Utc>,
}

impl PaymentReceipt {
    pub fn new(method: impl Into<String>, amount: Price) -> Self {
        Self {
            receipt_id: Uuid::new_v4().to_string(),
            method: method.into(),
            amount,
            processed_at: Utc::now(),
        }
    }

    /// Render as JSON
    pub fn to_json(&self) -> OrderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Core trait for payment method implementations.
///
/// Implementations report what they did through the given [`Reporter`]
/// and hand back a receipt.
pub trait PaymentMethod: Send + Sync {
    /// Charge `amount` and report it.
    fn process_payment(
        &self,
        amount: &Price,
        reporter: &dyn Reporter,
    ) -> OrderResult<PaymentReceipt> {
        tracing::debug!(method = self.name(), %amount, "processing payment");
        reporter.report(&format!(
            "Оплата {} обработана через {}.",
            amount,
            self.label()
        ));
        Ok(PaymentReceipt::new(self.name(), *amount))
    }

    /// Stable machine name, used for selection and logging.
    fn name(&self) -> &'static str;

    /// Human label substituted into the payment message.
    fn label(&self) -> &'static str;
}

/// Type alias for a shared payment method (dynamic dispatch)
pub type SharedPaymentMethod = Arc<dyn PaymentMethod>;

/// Payment by credit card
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn label(&self) -> &'static str {
        "кредитную карту"
    }
}

/// Payment through PayPal
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn name(&self) -> &'static str {
        "paypal"
    }

    fn label(&self) -> &'static str {
        "PayPal"
    }
}

/// Payment by bank transfer
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferPayment;

impl PaymentMethod for BankTransferPayment {
    fn name(&self) -> &'static str {
        "bank_transfer"
    }

    fn label(&self) -> &'static str {
        "банковский перевод"
    }
}
