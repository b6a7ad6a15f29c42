// src/app/state.rs

use crate::models::AnalysisMode;

/// Fetch lifecycle. Records and status text live on the App; this tracks
/// only where in the cycle the current request is.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Failure(String),
}

impl FetchState {
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Submission gate: one request in flight at a time, and symbol-taking
/// modes cannot fire with an empty symbol box.
pub(crate) fn can_submit(mode: AnalysisMode, symbol: &str, loading: bool) -> bool {
    !loading && (!mode.requires_symbol() || !symbol.trim().is_empty())
}
