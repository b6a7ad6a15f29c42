mod analysis_mode;
mod option_record;
mod plot_field;
mod response;
mod scatter;

pub use {
    analysis_mode::AnalysisMode,
    option_record::{OptionRecord, OptionType},
    plot_field::{FormatPolicy, PlotField},
    response::AnalyticsEnvelope,
    scatter::{AxisDomain, ScatterPoint, ScatterSeries},
};
