//! GeoFix - cell-based geolocation search and result ranking.
//!
//! This library estimates a device's position by matching observed cell
//! tower identifiers against historical location databases. It owns the
//! decision logic for trusting one noisy, partial estimate over another:
//! the [`result`] model (position vs. region estimates, accuracy tiers,
//! agreement and ranking rules) and the two-tier cell/area search pipeline.
//!
//! # High-Level API
//!
//! Search strategies are constructed over trait ports (a [`gateway::CellStore`]
//! for record lookup, a [`region::Geocoder`] for mcc resolution) and run
//! against a [`query::Query`]:
//!
//! ```ignore
//! use geofix::cell::CellPositionStrategy;
//! use geofix::config::CellConfig;
//! use geofix::query::Query;
//! use geofix::result::DataSource;
//! use geofix::strategy::SearchStrategy;
//!
//! let strategy = CellPositionStrategy::new(store, DataSource::Internal, CellConfig::default());
//! let query = Query::new(cell_lookups, area_lookups);
//! if strategy.should_search(&query) {
//!     let result = strategy.search(&query);
//! }
//! ```
//!
//! The surrounding service folds results from multiple strategies with
//! [`strategy::fold_best`]; this crate performs no network I/O and persists
//! nothing.

pub mod cell;
pub mod config;
pub mod gateway;
pub mod geomath;
pub mod query;
pub mod region;
pub mod result;
pub mod strategy;
pub mod telemetry;

/// Version of the GeoFix library, injected from `Cargo.toml` at compile
/// time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
