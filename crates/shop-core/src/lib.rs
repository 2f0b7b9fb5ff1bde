//! # shop-core
//!
//! Order processing with pluggable strategies.
//!
//! This crate provides:
//! - `Order` and `LineItem` for the cart itself
//! - `PaymentMethod`, `DeliveryMethod`, `NotificationChannel` and
//!   `DiscountStrategy` traits with their built-in implementations
//! - `DiscountCalculator` for applying the selected discount
//! - `Reporter` as the sink for every human-readable message
//! - `StrategySelector` for picking strategies by name
//! - `OrderError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shop_core::{
//!     CourierDelivery, CreditCardPayment, Currency, LineItem, Order, Price, RecordingReporter,
//! };
//!
//! let mut order = Order::new(Currency::RUB);
//! order.add_line_item(LineItem::new("Мышь", Price::new(50.0, Currency::RUB)?, 2)?)?;
//! order.set_payment_method(Arc::new(CreditCardPayment));
//! order.set_delivery_method(Arc::new(CourierDelivery));
//!
//! let reporter = RecordingReporter::new();
//! let summary = order.process(&reporter)?;
//!
//! assert_eq!(summary.total.to_string(), "100.00");
//! assert_eq!(reporter.messages()[1], "Заказ доставлен курьером.");
//! # Ok::<(), shop_core::OrderError>(())
//! ```

pub mod cart;
pub mod delivery;
pub mod discount;
pub mod error;
pub mod money;
pub mod notification;
pub mod order;
pub mod payment;
pub mod reporter;
pub mod strategy;

// Re-exports for convenience
pub use cart::{CartConfig, CartEntry};
pub use delivery::{
    CourierDelivery, DeliveryMethod, PickupPointDelivery, PostDelivery, SharedDeliveryMethod,
};
pub use discount::{
    DiscountCalculator, DiscountStrategy, FivePercentDiscount, PercentageDiscount,
    SharedDiscountStrategy, TenPercentDiscount,
};
pub use error::{ErrorKind, OrderError, OrderResult};
pub use money::{Currency, Price};
pub use notification::{
    EmailNotification, NotificationChannel, SharedNotificationChannel, SmsNotification,
};
pub use order::{LineItem, Order, OrderSummary};
pub use payment::{
    BankTransferPayment, CreditCardPayment, PayPalPayment, PaymentMethod, PaymentReceipt,
    SharedPaymentMethod,
};
pub use reporter::{ConsoleReporter, RecordingReporter, Reporter, TracingReporter};
pub use strategy::StrategySelector;
