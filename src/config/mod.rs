//! Configuration module for the option scope application.

mod api;

// Can't be private because we don't re-export it
pub mod plot;

pub use api::{ANALYTICS, AnalyticsApiConfig};
