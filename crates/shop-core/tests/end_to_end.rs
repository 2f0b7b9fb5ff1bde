//! The laptop-and-mice scenario, run through the public API only.

use shop_core::{
    CartConfig, CourierDelivery, CreditCardPayment, Currency, DiscountCalculator,
    EmailNotification, LineItem, NotificationChannel, Order, Price, RecordingReporter,
    StrategySelector, TenPercentDiscount,
};
use std::sync::Arc;

fn rub(amount: f64) -> Price {
    Price::new(amount, Currency::RUB).unwrap()
}

fn demo_order() -> Order {
    let mut order = Order::new(Currency::RUB);
    order
        .add_line_item(LineItem::new("Ноутбук", rub(1000.00), 1).unwrap())
        .unwrap();
    order
        .add_line_item(LineItem::new("Мышь", rub(50.00), 2).unwrap())
        .unwrap();
    order
}

#[test]
fn laptop_and_mice_total_and_discount() {
    let order = demo_order();
    assert_eq!(order.total_price(), rub(1100.00));

    let mut calculator = DiscountCalculator::new();
    calculator.set_strategy(Arc::new(TenPercentDiscount));
    let discounted = calculator.calculate(&order.total_price()).unwrap();

    assert_eq!(discounted, rub(990.00));
    assert_eq!(discounted.to_string(), "990.00");
}

#[test]
fn credit_card_then_courier() {
    let mut order = demo_order();
    order.set_payment_method(Arc::new(CreditCardPayment));
    order.set_delivery_method(Arc::new(CourierDelivery));

    let reporter = RecordingReporter::new();
    let summary = order.process(&reporter).unwrap();

    assert_eq!(
        reporter.messages(),
        vec![
            "Оплата 1100.00 обработана через кредитную карту.",
            "Заказ доставлен курьером.",
        ]
    );
    assert_eq!(summary.total, rub(1100.00));
    assert_eq!(summary.receipt.amount, order.total_price());
    assert_eq!(summary.order_id, order.id);
}

#[test]
fn full_demo_message_sequence() {
    let reporter = RecordingReporter::new();
    let mut order = CartConfig::demo().to_order().unwrap();
    order.set_payment_method(Arc::new(CreditCardPayment));
    order.set_delivery_method(Arc::new(CourierDelivery));

    let notification = EmailNotification;
    notification
        .send_notification("Ваш заказ обрабатывается.", &reporter)
        .unwrap();
    order.process(&reporter).unwrap();
    notification
        .send_notification("Ваш заказ обработан.", &reporter)
        .unwrap();

    assert_eq!(
        reporter.messages(),
        vec![
            "Email отправлен: Ваш заказ обрабатывается.",
            "Оплата 1100.00 обработана через кредитную карту.",
            "Заказ доставлен курьером.",
            "Email отправлен: Ваш заказ обработан.",
        ]
    );
}

#[test]
fn strategies_picked_by_name() {
    let payments = StrategySelector::payment_methods();
    let deliveries = StrategySelector::delivery_methods();
    let channels = StrategySelector::notification_channels();

    let mut order = demo_order();
    order.set_payment_method(payments.require("bank_transfer").unwrap());
    order.set_delivery_method(deliveries.require("pickup_point").unwrap());

    let reporter = RecordingReporter::new();
    order.process(&reporter).unwrap();
    channels
        .require("sms")
        .unwrap()
        .send_notification("Готово", &reporter)
        .unwrap();

    assert_eq!(
        reporter.messages(),
        vec![
            "Оплата 1100.00 обработана через банковский перевод.",
            "Заказ готов к самовывозу в пункте выдачи.",
            "SMS отправлено: Готово",
        ]
    );
}

#[test]
fn processing_twice_pays_twice() {
    let mut order = demo_order();
    order.set_payment_method(Arc::new(CreditCardPayment));
    order.set_delivery_method(Arc::new(CourierDelivery));

    let reporter = RecordingReporter::new();
    let first = order.process(&reporter).unwrap();
    let second = order.process(&reporter).unwrap();

    assert_eq!(reporter.len(), 4);
    assert_ne!(first.receipt.receipt_id, second.receipt.receipt_id);
}

#[test]
fn missing_strategies_report_nothing() {
    let reporter = RecordingReporter::new();

    let err = demo_order().process(&reporter).unwrap_err();
    assert!(err.is_missing_configuration());

    let err = DiscountCalculator::new().calculate(&rub(10.0)).unwrap_err();
    assert!(err.is_missing_configuration());

    assert!(reporter.is_empty());
}
