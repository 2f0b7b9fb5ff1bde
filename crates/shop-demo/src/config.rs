//! # Demo Configuration
//!
//! Settings for the demo driver, read from environment variables
//! (and a `.env` file if present).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SHOP_PAYMENT_METHOD` | `credit_card` |
//! | `SHOP_DELIVERY_METHOD` | `courier` |
//! | `SHOP_NOTIFICATION_CHANNEL` | `email` |
//! | `SHOP_DISCOUNT` | `ten_percent` |
//! | `SHOP_CURRENCY` | `rub` (must match the cart file) |
//! | `SHOP_REPORTER` | `console` |
//! | `SHOP_CART_PATH` | `config/cart.toml` |

use serde::{Deserialize, Serialize};
use shop_core::{CartConfig, ConsoleReporter, Currency, Reporter, TracingReporter};
use std::path::PathBuf;

/// Where strategy messages go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    /// Plain lines on stdout
    Console,
    /// `tracing` events at info level
    Log,
}

impl ReporterKind {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "console" => Ok(ReporterKind::Console),
            "log" => Ok(ReporterKind::Log),
            other => anyhow::bail!("SHOP_REPORTER must be console or log, got {other}"),
        }
    }

    /// Build the matching reporter
    pub fn build(&self) -> Box<dyn Reporter> {
        match self {
            ReporterKind::Console => Box::new(ConsoleReporter),
            ReporterKind::Log => Box::new(TracingReporter),
        }
    }
}

/// Demo driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub payment_method: String,
    pub delivery_method: String,
    pub notification_channel: String,
    pub discount: String,
    pub currency: Currency,
    pub reporter: ReporterKind,
    pub cart_path: PathBuf,
}

impl DemoConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; missing keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            payment_method: get("SHOP_PAYMENT_METHOD", "credit_card"),
            delivery_method: get("SHOP_DELIVERY_METHOD", "courier"),
            notification_channel: get("SHOP_NOTIFICATION_CHANNEL", "email"),
            discount: get("SHOP_DISCOUNT", "ten_percent"),
            currency: Currency::parse(&get("SHOP_CURRENCY", "rub"))?,
            reporter: ReporterKind::parse(&get("SHOP_REPORTER", "console"))?,
            cart_path: PathBuf::from(get("SHOP_CART_PATH", "config/cart.toml")),
        })
    }

    /// Load the cart from `cart_path`, falling back to the built-in demo cart.
    ///
    /// A cart file that exists but does not parse, or is priced in a
    /// currency other than `currency`, is an error.
    pub fn load_cart(&self) -> anyhow::Result<CartConfig> {
        match std::fs::read_to_string(&self.cart_path) {
            Ok(content) => {
                let cart = CartConfig::from_toml(&content).map_err(|e| {
                    anyhow::anyhow!("Failed to parse {}: {}", self.cart_path.display(), e)
                })?;
                cart.ensure_currency(self.currency).map_err(|e| {
                    anyhow::anyhow!("Cart {} rejected: {}", self.cart_path.display(), e)
                })?;
                tracing::info!(
                    "Loaded {} cart items from {}",
                    cart.items.len(),
                    self.cart_path.display()
                );
                Ok(cart)
            }
            Err(_) => {
                tracing::warn!(
                    "No cart found at {}, using demo cart",
                    self.cart_path.display()
                );
                Ok(CartConfig {
                    currency: self.currency,
                    ..CartConfig::demo()
                })
            }
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            payment_method: "credit_card".to_string(),
            delivery_method: "courier".to_string(),
            notification_channel: "email".to_string(),
            discount: "ten_percent".to_string(),
            currency: Currency::RUB,
            reporter: ReporterKind::Console,
            cart_path: PathBuf::from("config/cart.toml"),
        }
    }
}
