//! # Order Types
//!
//! Line items, the order aggregate and the summary produced by processing it.

use crate::delivery::SharedDeliveryMethod;
use crate::error::{OrderError, OrderResult};
use crate::money::{Currency, Price};
use crate::payment::{PaymentReceipt, SharedPaymentMethod};
use crate::reporter::Reporter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl LineItem {
    /// Create a line item.
    ///
    /// Fails if `unit_price` is negative or the subtotal does not fit in a `Price`.
    pub fn new(name: impl Into<String>, unit_price: Price, quantity: u32) -> OrderResult<Self> {
        unit_price.ensure_non_negative("unit price")?;
        unit_price.checked_times(quantity)?;
        Ok(Self {
            name: name.into(),
            unit_price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity
    pub fn subtotal(&self) -> Price {
        // checked in `new`
        Price::from_minor(
            self.unit_price.amount * i64::from(self.quantity),
            self.unit_price.currency,
        )
    }
}

/// Result of a successfully processed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub total: Price,
    pub receipt: PaymentReceipt,
    /// Machine name of the delivery method used
    pub delivery: String,
}

impl OrderSummary {
    /// Render as JSON
    pub fn to_json(&self) -> OrderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// An order: line items plus the payment and delivery strategies to use.
///
/// Strategies are shared handles; the order never owns them exclusively,
/// so one `Arc<CreditCardPayment>` can serve any number of orders.
#[derive(Clone)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Currency every line item must use
    pub currency: Currency,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    line_items: Vec<LineItem>,
    payment: Option<SharedPaymentMethod>,
    delivery: Option<SharedDeliveryMethod>,
}

impl Order {
    /// Create an empty order with generated ID
    pub fn new(currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            currency,
            created_at: Utc::now(),
            line_items: Vec::new(),
            payment: None,
            delivery: None,
        }
    }

    /// Append a line item. Items keep insertion order.
    ///
    /// Fails if the item uses another currency or the order total would overflow.
    pub fn add_line_item(&mut self, item: LineItem) -> OrderResult<()> {
        let currency = item.unit_price().currency;
        if currency != self.currency {
            return Err(OrderError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: currency.to_string(),
            });
        }
        self.total_price().checked_add(&item.subtotal())?;
        self.line_items.push(item);
        Ok(())
    }

    /// Builder: append a line item
    pub fn with_line_item(mut self, item: LineItem) -> OrderResult<Self> {
        self.add_line_item(item)?;
        Ok(self)
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Sum of all line item subtotals; zero for an empty order
    pub fn total_price(&self) -> Price {
        // `add_line_item` keeps the running sum in range
        let amount: i64 = self.line_items.iter().map(|i| i.subtotal().amount).sum();
        Price::from_minor(amount, self.currency)
    }

    /// Replace the payment method
    pub fn set_payment_method(&mut self, payment: SharedPaymentMethod) {
        self.payment = Some(payment);
    }

    /// Replace the delivery method
    pub fn set_delivery_method(&mut self, delivery: SharedDeliveryMethod) {
        self.delivery = Some(delivery);
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Total number of units across all line items
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Pay for the order, then deliver it.
    ///
    /// Both strategies must be set before anything runs. Delivery is only
    /// attempted once payment has returned a receipt.
    pub fn process(&self, reporter: &dyn Reporter) -> OrderResult<OrderSummary> {
        let (payment, delivery) = match (&self.payment, &self.delivery) {
            (Some(payment), Some(delivery)) => (payment, delivery),
            (None, _) => {
                tracing::warn!(order_id = %self.id, "payment method not set");
                return Err(OrderError::MissingConfiguration(
                    "payment method not set".to_string(),
                ));
            }
            (_, None) => {
                tracing::warn!(order_id = %self.id, "delivery method not set");
                return Err(OrderError::MissingConfiguration(
                    "delivery method not set".to_string(),
                ));
            }
        };

        let total = self.total_price();
        let receipt = payment.process_payment(&total, reporter)?;
        delivery.deliver_order(self, reporter)?;

        tracing::info!(
            order_id = %self.id,
            %total,
            payment = payment.name(),
            delivery = delivery.name(),
            "order processed"
        );

        Ok(OrderSummary {
            order_id: self.id.clone(),
            created_at: self.created_at,
            total,
            receipt,
            delivery: delivery.name().to_string(),
        })
    }
}

impl std::fmt::Debug for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("currency", &self.currency)
            .field("created_at", &self.created_at)
            .field("line_items", &self.line_items)
            .field("payment", &self.payment.as_ref().map(|p| p.name()))
            .field("delivery", &self.delivery.as_ref().map(|d| d.name()))
            .finish()
    }
}
