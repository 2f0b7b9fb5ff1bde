//! # strategy-cart
//!
//! Runs the order demo and prints every strategy message.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export SHOP_PAYMENT_METHOD=paypal
//! export SHOP_DELIVERY_METHOD=pickup_point
//!
//! strategy-cart
//! ```

use shop_demo::{driver, DemoConfig, Registries};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Quiet by default so stdout only carries the demo messages
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = DemoConfig::from_env()?;
    let registries = Registries::builtin();
    let cart = config.load_cart()?;

    info!("Payment methods: {:?}", registries.payments.names());
    info!("Delivery methods: {:?}", registries.deliveries.names());

    let reporter = config.reporter.build();
    let summary = driver::run(&config, &registries, &cart, reporter.as_ref())?;

    info!(
        "Order {} created at {} processed for {}, receipt {}",
        summary.order_id,
        summary.created_at,
        summary.total.display(),
        summary.receipt.receipt_id
    );
    Ok(())
}
