//! # Discounts
//!
//! Strategy trait for turning a price into a discounted price, and the
//! [`DiscountCalculator`] that holds the currently selected strategy.
//!
//! Percentages are applied in minor units and rounded half up, so a ten
//! percent discount on 1100.00 is exactly 990.00.

use crate::error::{OrderError, OrderResult};
use crate::money::Price;
use std::sync::Arc;

/// Core trait for discount implementations.
pub trait DiscountStrategy: Send + Sync {
    /// Return the discounted price. Negative prices are rejected.
    fn apply(&self, price: &Price) -> OrderResult<Price>;

    /// Stable machine name, used for selection and logging.
    fn name(&self) -> &'static str;
}

/// Type alias for a shared discount strategy (dynamic dispatch)
pub type SharedDiscountStrategy = Arc<dyn DiscountStrategy>;

/// Takes a fixed percentage off the price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percent: u8,
}

impl PercentageDiscount {
    /// Create a discount of `percent` (0..=100)
    pub fn new(percent: u8) -> OrderResult<Self> {
        if percent > 100 {
            return Err(OrderError::InvalidArgument(format!(
                "discount percent must be at most 100, got {percent}"
            )));
        }
        Ok(Self { percent })
    }

    fn discounted(&self, price: &Price) -> OrderResult<Price> {
        price.ensure_non_negative("discounted price")?;
        let keep = i128::from(100 - self.percent);
        let amount = (i128::from(price.amount) * keep + 50) / 100;
        // keep <= 100, so the result never exceeds the input
        Ok(Price::from_minor(amount as i64, price.currency))
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply(&self, price: &Price) -> OrderResult<Price> {
        self.discounted(price)
    }

    fn name(&self) -> &'static str {
        "percentage"
    }
}

/// 10% off: `price × 0.9`
#[derive(Debug, Clone, Copy, Default)]
pub struct TenPercentDiscount;

impl DiscountStrategy for TenPercentDiscount {
    fn apply(&self, price: &Price) -> OrderResult<Price> {
        PercentageDiscount { percent: 10 }.discounted(price)
    }

    fn name(&self) -> &'static str {
        "ten_percent"
    }
}

/// 5% off: `price × 0.95`
#[derive(Debug, Clone, Copy, Default)]
pub struct FivePercentDiscount;

impl DiscountStrategy for FivePercentDiscount {
    fn apply(&self, price: &Price) -> OrderResult<Price> {
        PercentageDiscount { percent: 5 }.discounted(price)
    }

    fn name(&self) -> &'static str {
        "five_percent"
    }
}

/// Applies whichever discount strategy is currently set.
#[derive(Clone, Default)]
pub struct DiscountCalculator {
    strategy: Option<SharedDiscountStrategy>,
}

impl DiscountCalculator {
    /// Create a calculator with no strategy
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Replace the current strategy
    pub fn set_strategy(&mut self, strategy: SharedDiscountStrategy) {
        self.strategy = Some(strategy);
    }

    /// Builder: set the strategy
    pub fn with_strategy(mut self, strategy: SharedDiscountStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Currently selected strategy, if any
    pub fn strategy(&self) -> Option<&SharedDiscountStrategy> {
        self.strategy.as_ref()
    }

    /// Discount `price` with the current strategy.
    pub fn calculate(&self, price: &Price) -> OrderResult<Price> {
        let strategy = self.strategy.as_ref().ok_or_else(|| {
            OrderError::MissingConfiguration("discount strategy not set".to_string())
        })?;
        let discounted = strategy.apply(price)?;
        tracing::debug!(
            strategy = strategy.name(),
            %price,
            %discounted,
            "discount applied"
        );
        Ok(discounted)
    }
}

impl std::fmt::Debug for DiscountCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscountCalculator")
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}
