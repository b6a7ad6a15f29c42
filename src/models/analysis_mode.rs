use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Which analytics endpoint a fetch targets.
///
/// `TopVolatileAll` scans every F&O instrument and is the only mode that
/// takes no symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum AnalysisMode {
    #[default]
    #[strum(to_string = "Top Volatile Options")]
    TopVolatile,

    #[strum(to_string = "Only Buyers")]
    OnlyBuyers,

    #[strum(to_string = "Top Volatile (All Instruments)")]
    TopVolatileAll,
}

impl AnalysisMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::TopVolatile => "top-volatile-options",
            Self::OnlyBuyers => "only-buyers",
            Self::TopVolatileAll => "top-volatile-options-all",
        }
    }

    pub fn requires_symbol(&self) -> bool {
        !matches!(self, Self::TopVolatileAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_the_scan_all_mode_skips_the_symbol() {
        assert!(AnalysisMode::TopVolatile.requires_symbol());
        assert!(AnalysisMode::OnlyBuyers.requires_symbol());
        assert!(!AnalysisMode::TopVolatileAll.requires_symbol());
    }

    #[test]
    fn endpoints_are_distinct() {
        let endpoints: Vec<_> = AnalysisMode::iter().map(|m| m.endpoint()).collect();
        let mut deduped = endpoints.clone();
        deduped.dedup();
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints, deduped);
    }
}
