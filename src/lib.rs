//! `Routecast` - route endpoint weather screening
//!
//! This library resolves a route's start and end coordinates against a
//! weather provider, fetches a one-day forecast for each point, and
//! classifies the conditions as favorable or unfavorable.

pub mod accuweather;
pub mod api;
pub mod assessment;
pub mod config;
pub mod error;
pub mod web;

// Re-export core types for public API
pub use accuweather::{AccuWeatherClient, DailyReadings};
pub use assessment::{Verdict, assess_conditions};
pub use config::RoutecastConfig;
pub use error::{RoutePoint, RoutecastError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RoutecastError>;
