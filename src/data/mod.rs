mod analytics_api;

pub use analytics_api::{
    AnalyticsProvider, FetchError, HttpAnalyticsClient, error_detail, normalize_symbol,
    request_url,
};
