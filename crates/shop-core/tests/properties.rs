//! Property tests for totals, discounts and processing order.

use proptest::prelude::*;

use shop_core::{
    CourierDelivery, Currency, DiscountCalculator, DiscountStrategy, FivePercentDiscount,
    LineItem, Order, PaymentMethod, Price, RecordingReporter, TenPercentDiscount,
};
use std::sync::Arc;

const MAX_MINOR: i64 = 1_000_000_000;

fn line_item() -> impl Strategy<Value = (i64, u32)> {
    (0..MAX_MINOR, 0u32..1_000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: subtotal is unit price times quantity.
    #[test]
    fn property_subtotal_is_price_times_quantity((minor, quantity) in line_item()) {
        let item = LineItem::new("item", Price::from_minor(minor, Currency::RUB), quantity).unwrap();

        prop_assert_eq!(item.subtotal().amount, minor * i64::from(quantity));
        prop_assert!(item.subtotal().amount >= 0);
    }

    /// PROPERTY: order total is the sum of subtotals, in any insertion order.
    #[test]
    fn property_total_is_sum_of_subtotals(items in proptest::collection::vec(line_item(), 0..16)) {
        let mut order = Order::new(Currency::RUB);
        for (minor, quantity) in &items {
            order
                .add_line_item(LineItem::new("item", Price::from_minor(*minor, Currency::RUB), *quantity).unwrap())
                .unwrap();
        }

        let expected: i64 = order.line_items().iter().map(|i| i.subtotal().amount).sum();
        prop_assert_eq!(order.total_price().amount, expected);
        prop_assert_eq!(order.line_items().len(), items.len());
    }

    /// PROPERTY: fixed discounts match price × factor at minor-unit precision.
    #[test]
    fn property_discount_factors(minor in 0..MAX_MINOR) {
        let price = Price::from_minor(minor, Currency::RUB);

        let ten = TenPercentDiscount.apply(&price).unwrap().amount;
        let five = FivePercentDiscount.apply(&price).unwrap().amount;

        prop_assert!((ten as f64 - minor as f64 * 0.9).abs() <= 0.5 + 1e-6);
        prop_assert!((five as f64 - minor as f64 * 0.95).abs() <= 0.5 + 1e-6);
        prop_assert!(ten <= minor);
        prop_assert!(five <= minor);
    }

    /// PROPERTY: discounts are monotonic non-decreasing.
    #[test]
    fn property_discount_monotonic(a in 0..MAX_MINOR, b in 0..MAX_MINOR) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut calculator = DiscountCalculator::new();

        for strategy in [
            Arc::new(TenPercentDiscount) as Arc<dyn DiscountStrategy>,
            Arc::new(FivePercentDiscount) as Arc<dyn DiscountStrategy>,
        ] {
            calculator.set_strategy(strategy);
            let low = calculator.calculate(&Price::from_minor(low, Currency::RUB)).unwrap();
            let high = calculator.calculate(&Price::from_minor(high, Currency::RUB)).unwrap();
            prop_assert!(low <= high);
        }
    }

    /// PROPERTY: negative prices are always rejected.
    #[test]
    fn property_negative_rejected(minor in i64::MIN / 2..0) {
        let price = Price::from_minor(minor, Currency::RUB);

        prop_assert!(LineItem::new("item", price, 1).unwrap_err().is_invalid_argument());
        prop_assert!(TenPercentDiscount.apply(&price).unwrap_err().is_invalid_argument());
    }

    /// PROPERTY: process pays exactly the total, then delivers once.
    #[test]
    fn property_process_pays_total_then_delivers(items in proptest::collection::vec(line_item(), 0..8)) {
        let mut order = Order::new(Currency::RUB);
        for (minor, quantity) in &items {
            order
                .add_line_item(LineItem::new("item", Price::from_minor(*minor, Currency::RUB), *quantity).unwrap())
                .unwrap();
        }
        let payment = Arc::new(AmountRecorder::default());
        order.set_payment_method(payment.clone());
        order.set_delivery_method(Arc::new(CourierDelivery));

        let reporter = RecordingReporter::new();
        let summary = order.process(&reporter).unwrap();

        prop_assert_eq!(payment.amounts(), vec![order.total_price()]);
        prop_assert_eq!(summary.total, order.total_price());
        let messages = reporter.messages();
        prop_assert_eq!(messages.len(), 2);
        prop_assert!(messages[0].starts_with("paid "));
        prop_assert_eq!(messages[1].as_str(), "Заказ доставлен курьером.");
    }
}

#[derive(Default)]
struct AmountRecorder {
    amounts: std::sync::Mutex<Vec<Price>>,
}

impl AmountRecorder {
    fn amounts(&self) -> Vec<Price> {
        self.amounts.lock().unwrap().clone()
    }
}

impl PaymentMethod for AmountRecorder {
    fn process_payment(
        &self,
        amount: &Price,
        reporter: &dyn shop_core::Reporter,
    ) -> shop_core::OrderResult<shop_core::PaymentReceipt> {
        self.amounts.lock().unwrap().push(*amount);
        reporter.report(&format!("paid {amount}"));
        Ok(shop_core::PaymentReceipt::new(self.name(), *amount))
    }

    fn name(&self) -> &'static str {
        "recorder"
    }

    fn label(&self) -> &'static str {
        "recorder"
    }
}
