//! Core components of `news-radar`.
//!
//! This module contains the foundational building blocks of the library:
//! - The primary [`RadarError`] type.
//! - The [`MarketClient`] used by the market-data pass-through, its builder and retry policy.
//! - Internal networking helpers.

/// The market-data client (`MarketClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`RadarError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::RadarError`
pub use client::{MarketClient, MarketClientBuilder};
pub use error::RadarError;
