//! # Launch Dashboard Backend
//!
//! Interactive dashboard over a static table of rocket launches.
//!
//! The table is loaded once at startup. Two view models turn the current
//! selection (launch site, payload mass range) into chart specs: a pie of
//! success counts and a scatter of payload mass against outcome. A small
//! binding layer owns the selection and re-runs the view models whose
//! controls changed. An axum server exposes the page and the JSON endpoints.
//!
//! ## Architecture
//!
//! - [`models`]: launch records, the loaded dataset, the selection state
//! - [`parsing`]: CSV loading with polars
//! - [`routes`]: chart, layout and control DTOs plus their route paths
//! - [`api`]: flat re-export of the DTOs
//! - [`services`]: view models and the binding layer
//! - [`config`]: server configuration (defaults, TOML file, environment)
//! - [`http`]: axum router, handlers and the dashboard page

pub mod api;
pub mod config;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
