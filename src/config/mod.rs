//! Engine configuration.
//!
//! A single [`AmmConfig`] parameterises every pool the engine creates.
//! Pools themselves carry no configuration, so two pools of one engine
//! always price swaps identically.

mod amm_config;

pub use amm_config::{AmmConfig, DEFAULT_MINIMUM_LIQUIDITY, DEFAULT_PRICE_SCALE};
