use {
    crate::models::OptionRecord,
    serde::{Deserialize, Serialize},
    strum_macros::EnumIter,
};

/// How a field's values are rendered on axes and in the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    Percentage,
    Currency,
    PlainNumber,
}

/// The closed set of plottable strike fields.
///
/// Each variant carries its display label, its formatting policy, and how to
/// extract the value from a record. Fields not listed here cannot be
/// selected, so there is no "unknown field" rendering path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default,
)]
pub enum PlotField {
    #[default]
    StrikePrice,
    ImpliedVolatility,
    StrikeGapPercentage,
    PremiumPercentage,
    TotalTradedVolume,
    OpenInterest,
    LastPrice,
    StrikeGap,
}

impl PlotField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrikePrice => "Strike Price",
            Self::ImpliedVolatility => "Implied Volatility (%)",
            Self::StrikeGapPercentage => "Strike Gap (%)",
            Self::PremiumPercentage => "Premium (%)",
            Self::TotalTradedVolume => "Volume",
            Self::OpenInterest => "Open Interest",
            Self::LastPrice => "Last Price (₹)",
            Self::StrikeGap => "Strike Gap (₹)",
        }
    }

    pub fn policy(&self) -> FormatPolicy {
        match self {
            Self::ImpliedVolatility | Self::StrikeGapPercentage | Self::PremiumPercentage => {
                FormatPolicy::Percentage
            }
            Self::StrikePrice | Self::LastPrice | Self::StrikeGap => FormatPolicy::Currency,
            Self::TotalTradedVolume | Self::OpenInterest => FormatPolicy::PlainNumber,
        }
    }

    /// Pull this field's raw value off a record. `None` when the backend
    /// sent null or omitted it; the validator treats that like a
    /// non-finite value.
    pub fn extract(&self, record: &OptionRecord) -> Option<f64> {
        match self {
            Self::StrikePrice => Some(record.strike_price),
            Self::ImpliedVolatility => record.implied_volatility,
            Self::StrikeGapPercentage => record.strike_gap_percentage,
            Self::PremiumPercentage => record.premium_percentage,
            Self::TotalTradedVolume => Some(record.total_traded_volume as f64),
            Self::OpenInterest => Some(record.open_interest as f64),
            Self::LastPrice => Some(record.last_price),
            Self::StrikeGap => record.strike_gap,
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self.policy() {
            FormatPolicy::Percentage => format!("{value:.2}%"),
            FormatPolicy::Currency => format!("₹{value:.2}"),
            FormatPolicy::PlainNumber => group_thousands(value),
        }
    }
}

/// Comma-grouped rendering of a plain number. Integral values drop the
/// fractional part entirely; everything else keeps two decimals.
fn group_thousands(value: f64) -> String {
    let formatted = if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    };
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn percentage_fields_format_with_two_decimals() {
        assert_eq!(PlotField::ImpliedVolatility.format(12.345), "12.35%");
        assert_eq!(PlotField::StrikeGapPercentage.format(0.5), "0.50%");
        assert_eq!(PlotField::PremiumPercentage.format(-1.2), "-1.20%");
    }

    #[test]
    fn currency_fields_format_with_rupee_prefix() {
        assert_eq!(PlotField::LastPrice.format(1500.0), "₹1500.00");
        assert_eq!(PlotField::StrikePrice.format(1392.6), "₹1392.60");
        assert_eq!(PlotField::StrikeGap.format(7.4), "₹7.40");
    }

    #[test]
    fn plain_fields_format_with_thousands_grouping() {
        let rendered = PlotField::TotalTradedVolume.format(125000.0);
        assert_eq!(rendered, "125,000");
        assert!(!rendered.contains('₹'));
        assert!(!rendered.contains('%'));

        assert_eq!(PlotField::OpenInterest.format(1_234_567.0), "1,234,567");
        assert_eq!(PlotField::OpenInterest.format(999.0), "999");
    }

    #[test]
    fn grouping_keeps_fraction_and_sign() {
        assert_eq!(PlotField::TotalTradedVolume.format(1234.5), "1,234.50");
        assert_eq!(PlotField::TotalTradedVolume.format(-42000.0), "-42,000");
        assert_eq!(PlotField::TotalTradedVolume.format(999.999), "1,000.00");
    }

    #[test]
    fn every_field_has_a_label_and_policy() {
        for field in PlotField::iter() {
            assert!(!field.label().is_empty());
            // Exhaustive match in policy() guarantees this never panics
            let _ = field.policy();
        }
    }

    #[test]
    fn label_table_matches_display_contract() {
        assert_eq!(PlotField::StrikePrice.label(), "Strike Price");
        assert_eq!(PlotField::ImpliedVolatility.label(), "Implied Volatility (%)");
        assert_eq!(PlotField::StrikeGapPercentage.label(), "Strike Gap (%)");
        assert_eq!(PlotField::PremiumPercentage.label(), "Premium (%)");
        assert_eq!(PlotField::TotalTradedVolume.label(), "Volume");
        assert_eq!(PlotField::OpenInterest.label(), "Open Interest");
        assert_eq!(PlotField::LastPrice.label(), "Last Price (₹)");
        assert_eq!(PlotField::StrikeGap.label(), "Strike Gap (₹)");
    }

    #[test]
    fn extract_returns_none_for_absent_optionals() {
        let record = OptionRecord::default();
        assert_eq!(PlotField::ImpliedVolatility.extract(&record), None);
        assert_eq!(PlotField::StrikeGap.extract(&record), None);
        assert_eq!(PlotField::StrikePrice.extract(&record), Some(0.0));
    }
}
