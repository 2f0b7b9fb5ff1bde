//! # shop-demo
//!
//! Demo driver for strategy-cart.
//!
//! This crate provides:
//! - `DemoConfig` loaded from environment variables
//! - `Registries` of every built-in strategy
//! - `run`, the scripted demo sequence

pub mod config;
pub mod driver;

pub use config::{DemoConfig, ReporterKind};
pub use driver::{run, Registries};
