//! Server crate for the film dashboard.
//!
//! This crate builds the dashboard once (fetch, aggregate, render, assemble)
//! and serves it over HTTP.

pub mod dashboard;
pub mod page;
pub mod routes;

pub use dashboard::Dashboard;
pub use page::{DEFAULT_TITLE, PageOptions, render_page};
pub use routes::{router, serve};
