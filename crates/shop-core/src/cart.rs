//! # Cart Configuration
//!
//! Cart contents described in TOML, e.g. `config/cart.toml`:
//!
//! ```toml
//! currency = "rub"
//!
//! [[items]]
//! name = "Ноутбук"
//! price = 1000.00
//! quantity = 1
//! ```

use crate::error::{OrderError, OrderResult};
use crate::money::{Currency, Price};
use crate::order::{LineItem, Order};
use serde::{Deserialize, Serialize};

/// One line of a configured cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    /// Unit price as a decimal amount
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Cart contents loaded from config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub items: Vec<CartEntry>,
}

impl CartConfig {
    /// The laptop-and-two-mice cart used by the demo
    pub fn demo() -> Self {
        Self {
            currency: Currency::RUB,
            items: vec![
                CartEntry {
                    name: "Ноутбук".to_string(),
                    price: 1000.00,
                    quantity: 1,
                },
                CartEntry {
                    name: "Мышь".to_string(),
                    price: 50.00,
                    quantity: 2,
                },
            ],
        }
    }

    /// Load cart from TOML string
    pub fn from_toml(toml_str: &str) -> OrderResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Fail unless the cart is priced in `expected`
    pub fn ensure_currency(&self, expected: Currency) -> OrderResult<()> {
        if self.currency != expected {
            return Err(OrderError::CurrencyMismatch {
                expected: expected.to_string(),
                found: self.currency.to_string(),
            });
        }
        Ok(())
    }

    /// Build an order holding every configured item, in file order
    pub fn to_order(&self) -> OrderResult<Order> {
        let mut order = Order::new(self.currency);
        for entry in &self.items {
            let price = Price::new(entry.price, self.currency)?;
            order.add_line_item(LineItem::new(entry.name.clone(), price, entry.quantity)?)?;
        }
        Ok(order)
    }
}
