/// Analytics backend endpoint configuration.
pub struct AnalyticsApiConfig {
    /// Scheme + host of the backend; overridable with `--api-base`.
    pub base_url: &'static str,
    /// Common path prefix for every analytics endpoint.
    pub path_prefix: &'static str,
    pub timeout_ms: u64,
    /// Symbol pre-filled on first launch.
    pub default_symbol: &'static str,
}

pub const ANALYTICS: AnalyticsApiConfig = AnalyticsApiConfig {
    base_url: "http://127.0.0.1:8000",
    path_prefix: "/api/v1/analytics",
    timeout_ms: 10_000,
    default_symbol: "RELIANCE",
};
