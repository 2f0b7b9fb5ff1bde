//! # Demo Driver
//!
//! Builds the order, picks strategies by name and runs the demo sequence:
//! notify, show the discounted price, process, notify again.

use crate::config::DemoConfig;
use anyhow::Context;
use shop_core::{
    CartConfig, DeliveryMethod, DiscountCalculator, DiscountStrategy, NotificationChannel,
    OrderSummary, PaymentMethod, Reporter, StrategySelector,
};

/// Strategy registries the driver picks from
#[derive(Clone)]
pub struct Registries {
    pub payments: StrategySelector<dyn PaymentMethod>,
    pub deliveries: StrategySelector<dyn DeliveryMethod>,
    pub notifications: StrategySelector<dyn NotificationChannel>,
    pub discounts: StrategySelector<dyn DiscountStrategy>,
}

impl Registries {
    /// Every built-in strategy
    pub fn builtin() -> Self {
        Self {
            payments: StrategySelector::payment_methods(),
            deliveries: StrategySelector::delivery_methods(),
            notifications: StrategySelector::notification_channels(),
            discounts: StrategySelector::discount_strategies(),
        }
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Run the demo against `cart`, sending every message to `reporter`.
pub fn run(
    config: &DemoConfig,
    registries: &Registries,
    cart: &CartConfig,
    reporter: &dyn Reporter,
) -> anyhow::Result<OrderSummary> {
    let mut order = cart.to_order().context("building order from cart")?;
    order.set_payment_method(registries.payments.require(&config.payment_method)?);
    order.set_delivery_method(registries.deliveries.require(&config.delivery_method)?);

    let notification = registries
        .notifications
        .require(&config.notification_channel)?;
    notification.send_notification("Ваш заказ обрабатывается.", reporter)?;

    let mut calculator = DiscountCalculator::new();
    calculator.set_strategy(registries.discounts.require(&config.discount)?);
    let discounted = calculator.calculate(&order.total_price())?;
    reporter.report(&format!("Цена со скидкой: {discounted}"));

    let summary = order
        .process(reporter)
        .with_context(|| format!("processing order {}", order.id))?;

    notification.send_notification("Ваш заказ обработан.", reporter)?;

    tracing::debug!(summary = %summary.to_json()?, "demo finished");
    Ok(summary)
}
