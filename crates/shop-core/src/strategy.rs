//! # Strategy Selection
//!
//! Name-keyed registries for picking a strategy at runtime, e.g. from
//! configuration. One selector exists per strategy family.
//!
//! ```text
//! "credit_card" ──► StrategySelector<dyn PaymentMethod> ──► Arc<CreditCardPayment>
//! "courier"     ──► StrategySelector<dyn DeliveryMethod> ──► Arc<CourierDelivery>
//! ```

use crate::delivery::{
    CourierDelivery, DeliveryMethod, PickupPointDelivery, PostDelivery,
};
use crate::discount::{DiscountStrategy, FivePercentDiscount, TenPercentDiscount};
use crate::error::{OrderError, OrderResult};
use crate::notification::{EmailNotification, NotificationChannel, SmsNotification};
use crate::payment::{BankTransferPayment, CreditCardPayment, PayPalPayment, PaymentMethod};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of strategies of one family, keyed by machine name
pub struct StrategySelector<T: ?Sized> {
    kind: &'static str,
    strategies: BTreeMap<String, Arc<T>>,
    default_name: Option<String>,
}

impl<T: ?Sized> StrategySelector<T> {
    /// Create an empty selector for strategies of `kind` (used in errors)
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            strategies: BTreeMap::new(),
            default_name: None,
        }
    }

    /// Register a strategy under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, strategy: Arc<T>) {
        self.strategies.insert(name.into(), strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, name: impl Into<String>, strategy: Arc<T>) -> Self {
        self.register(name, strategy);
        self
    }

    /// Set the strategy returned when no name is given
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default_name = Some(name.into());
    }

    /// Builder: set the default strategy name
    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.set_default(name);
        self
    }

    /// Get a strategy by name
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.strategies.get(name).cloned()
    }

    /// Get the default strategy
    pub fn default_strategy(&self) -> Option<Arc<T>> {
        self.default_name.as_deref().and_then(|name| self.get(name))
    }

    /// Get strategy or fall back to default
    pub fn get_or_default(&self, name: Option<&str>) -> Option<Arc<T>> {
        match name {
            Some(n) => self.get(n).or_else(|| self.default_strategy()),
            None => self.default_strategy(),
        }
    }

    /// Get a strategy by name, failing with `UnknownStrategy`
    pub fn require(&self, name: &str) -> OrderResult<Arc<T>> {
        self.get(name).ok_or_else(|| OrderError::UnknownStrategy {
            kind: self.kind,
            name: name.to_string(),
        })
    }

    /// List all registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.strategies.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }
}

impl<T: ?Sized> Clone for StrategySelector<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            strategies: self.strategies.clone(),
            default_name: self.default_name.clone(),
        }
    }
}

impl StrategySelector<dyn PaymentMethod> {
    /// Selector with every built-in payment method, defaulting to credit card
    pub fn payment_methods() -> Self {
        let mut selector = Self::new("payment");
        let builtins: [Arc<dyn PaymentMethod>; 3] = [
            Arc::new(CreditCardPayment),
            Arc::new(PayPalPayment),
            Arc::new(BankTransferPayment),
        ];
        for method in builtins {
            selector.register(method.name(), method);
        }
        selector.with_default("credit_card")
    }
}

impl StrategySelector<dyn DeliveryMethod> {
    /// Selector with every built-in delivery method, defaulting to courier
    pub fn delivery_methods() -> Self {
        let mut selector = Self::new("delivery");
        let builtins: [Arc<dyn DeliveryMethod>; 3] = [
            Arc::new(CourierDelivery),
            Arc::new(PostDelivery),
            Arc::new(PickupPointDelivery),
        ];
        for method in builtins {
            selector.register(method.name(), method);
        }
        selector.with_default("courier")
    }
}

impl StrategySelector<dyn NotificationChannel> {
    /// Selector with every built-in notification channel, defaulting to email
    pub fn notification_channels() -> Self {
        let mut selector = Self::new("notification");
        let builtins: [Arc<dyn NotificationChannel>; 2] = [
            Arc::new(EmailNotification),
            Arc::new(SmsNotification),
        ];
        for channel in builtins {
            selector.register(channel.name(), channel);
        }
        selector.with_default("email")
    }
}

impl StrategySelector<dyn DiscountStrategy> {
    /// Selector with every built-in discount, defaulting to ten percent
    pub fn discount_strategies() -> Self {
        let mut selector = Self::new("discount");
        let builtins: [Arc<dyn DiscountStrategy>; 2] = [
            Arc::new(TenPercentDiscount),
            Arc::new(FivePercentDiscount),
        ];
        for discount in builtins {
            selector.register(discount.name(), discount);
        }
        selector.with_default("ten_percent")
    }
}
