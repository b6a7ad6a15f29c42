use std::sync::LazyLock;

pub struct UiText {
    // --- CONTROLS ---
    pub label_analysis: String,
    pub label_symbol: String,
    pub symbol_hint: String,
    pub label_x_axis: String,
    pub label_y_axis: String,
    pub button_fetch: String,
    pub hover_symbol_required: String,

    // --- CHART ---
    pub label_calls: String,
    pub label_puts: String,
    pub label_total: String,
    pub placeholder_no_points: String,
    pub placeholder_idle: String,

    // --- TOOLTIP ---
    pub tip_strike: String,
    pub tip_type: String,
    pub tip_premium: String,
    pub tip_iv: String,
    pub tip_expiry: String,

    // --- STATUS ---
    pub status_loading: String,
    pub status_strikes: String,
    pub status_as_of: String,
    pub error_prefix: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| {
    UiText {
        label_analysis: "Analysis".to_string(),
        label_symbol: "Symbol".to_string(),
        symbol_hint: "e.g. RELIANCE".to_string(),
        label_x_axis: "X".to_string(),
        label_y_axis: "Y".to_string(),
        button_fetch: "Fetch".to_string(),
        hover_symbol_required: "This analysis needs a symbol".to_string(),

        label_calls: "CE".to_string(),
        label_puts: "PE".to_string(),
        label_total: "Total".to_string(),
        placeholder_no_points: "No valid data points to plot.".to_string(),
        placeholder_idle: "Pick an analysis and fetch to see the option chain.".to_string(),

        tip_strike: "Strike".to_string(),
        tip_type: "Type".to_string(),
        tip_premium: "Premium".to_string(),
        tip_iv: "IV".to_string(),
        tip_expiry: "Expiry".to_string(),

        status_loading: "Fetching…".to_string(),
        status_strikes: "strikes".to_string(),
        status_as_of: "as of".to_string(),
        error_prefix: "Error:".to_string(),
    }
});
