//! # Delivery Methods
//!
//! Strategy trait for handing a processed order to the customer.
//! The built-in methods report a fixed message and do not look at the
//! order contents.

use crate::error::OrderResult;
use crate::order::Order;
use crate::reporter::Reporter;
use std::sync::Arc;

/// Core trait for delivery method implementations.
pub trait DeliveryMethod: Send + Sync {
    /// Deliver `order` and report it.
    fn deliver_order(&self, order: &Order, reporter: &dyn Reporter) -> OrderResult<()>;

    /// Stable machine name, used for selection and logging.
    fn name(&self) -> &'static str;
}

fn announce(
    method: &'static str,
    message: &str,
    order: &Order,
    reporter: &dyn Reporter,
) -> OrderResult<()> {
    tracing::debug!(method, order_id = %order.id, "delivering order");
    reporter.report(message);
    Ok(())
}

/// Type alias for a shared delivery method (dynamic dispatch)
pub type SharedDeliveryMethod = Arc<dyn DeliveryMethod>;

/// Courier delivery
#[derive(Debug, Clone, Copy, Default)]
pub struct CourierDelivery;

impl DeliveryMethod for CourierDelivery {
    fn deliver_order(&self, order: &Order, reporter: &dyn Reporter) -> OrderResult<()> {
        announce(self.name(), "Заказ доставлен курьером.", order, reporter)
    }

    fn name(&self) -> &'static str {
        "courier"
    }
}

/// Delivery by post
#[derive(Debug, Clone, Copy, Default)]
pub struct PostDelivery;

impl DeliveryMethod for PostDelivery {
    fn deliver_order(&self, order: &Order, reporter: &dyn Reporter) -> OrderResult<()> {
        announce(self.name(), "Заказ доставлен почтой.", order, reporter)
    }

    fn name(&self) -> &'static str {
        "post"
    }
}

/// Customer collects the order at a pickup point
#[derive(Debug, Clone, Copy, Default)]
pub struct PickupPointDelivery;

impl DeliveryMethod for PickupPointDelivery {
    fn deliver_order(&self, order: &Order, reporter: &dyn Reporter) -> OrderResult<()> {
        announce(self.name(), "Заказ готов к самовывозу в пункте выдачи.", order, reporter)
    }

    fn name(&self) -> &'static str {
        "pickup_point"
    }
}
