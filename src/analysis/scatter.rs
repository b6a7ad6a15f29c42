use crate::models::{OptionRecord, OptionType, PlotField, ScatterPoint, ScatterSeries};

/// The validated, partitioned form of one fetched record list: zero, one, or
/// two series (CE first when present), rebuilt from scratch on every fetch
/// or field-selection change.
#[derive(Debug, Clone, Default)]
pub struct ScatterData {
    pub series: Vec<ScatterSeries>,
}

impl ScatterData {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn count_for(&self, option_type: OptionType) -> usize {
        self.series_for(option_type).map_or(0, |s| s.points.len())
    }

    pub fn series_for(&self, option_type: OptionType) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.option_type == option_type)
    }

    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.points.iter().map(|p| p.x))
    }

    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.points.iter().map(|p| p.y))
    }
}

/// Validate and partition one record list against the selected field pair.
///
/// A record is accepted iff both selected fields extract to finite numbers;
/// anything else is dropped without comment. Accepted records route by
/// contract type (unrecognized tags are dropped too), keeping input order
/// within each series and the raw-list index as identity. Values pass
/// through untransformed.
pub fn build_scatter(
    records: &[OptionRecord],
    x_field: PlotField,
    y_field: PlotField,
) -> ScatterData {
    let mut calls: Vec<ScatterPoint> = Vec::new();
    let mut puts: Vec<ScatterPoint> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Some((x, y)) = plot_values(record, x_field, y_field) else {
            continue;
        };
        let bucket = match record.option_type {
            OptionType::CE => &mut calls,
            OptionType::PE => &mut puts,
            OptionType::Other => continue,
        };
        bucket.push(ScatterPoint {
            x,
            y,
            index,
            strike: record.strike_price,
            symbol: record.underlying.clone(),
            option_type: record.option_type,
            expiry: record.expiry_date.clone(),
            iv: record.implied_volatility,
            premium: record.last_price,
            strike_gap: record.strike_gap,
            strike_gap_pct: record.strike_gap_percentage,
            premium_pct: record.premium_percentage,
        });
    }

    let mut series = Vec::with_capacity(2);
    if !calls.is_empty() {
        series.push(ScatterSeries {
            option_type: OptionType::CE,
            points: calls,
        });
    }
    if !puts.is_empty() {
        series.push(ScatterSeries {
            option_type: OptionType::PE,
            points: puts,
        });
    }
    ScatterData { series }
}

fn plot_values(record: &OptionRecord, x_field: PlotField, y_field: PlotField) -> Option<(f64, f64)> {
    let x = x_field.extract(record)?;
    let y = y_field.extract(record)?;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::padded_domain;

    fn ce(strike: f64, iv: Option<f64>) -> OptionRecord {
        OptionRecord {
            strike_price: strike,
            implied_volatility: iv,
            option_type: OptionType::CE,
            ..Default::default()
        }
    }

    fn pe(strike: f64, iv: Option<f64>) -> OptionRecord {
        OptionRecord {
            option_type: OptionType::PE,
            ..ce(strike, iv)
        }
    }

    #[test]
    fn non_finite_fields_exclude_the_record_regardless_of_type() {
        let records = vec![
            ce(100.0, None),
            ce(100.0, Some(f64::NAN)),
            ce(100.0, Some(f64::INFINITY)),
            pe(100.0, Some(f64::NEG_INFINITY)),
            pe(f64::NAN, Some(20.0)),
        ];
        let data = build_scatter(&records, PlotField::StrikePrice, PlotField::ImpliedVolatility);
        assert!(data.is_empty());
    }

    #[test]
    fn accepted_values_pass_through_exactly() {
        let records = vec![ce(1400.0, Some(24.5))];
        let data = build_scatter(&records, PlotField::StrikePrice, PlotField::ImpliedVolatility);
        let point = &data.series_for(OptionType::CE).unwrap().points[0];
        assert_eq!(point.x, 1400.0);
        assert_eq!(point.y, 24.5);
        assert_eq!(point.index, 0);
    }

    #[test]
    fn partition_is_stable_and_keeps_raw_indices() {
        let records = vec![
            ce(100.0, Some(10.0)),
            pe(110.0, Some(11.0)),
            ce(120.0, None), // rejected, index 2 skipped
            ce(130.0, Some(13.0)),
            pe(140.0, Some(14.0)),
        ];
        let data = build_scatter(&records, PlotField::StrikePrice, PlotField::ImpliedVolatility);

        let calls = &data.series_for(OptionType::CE).unwrap().points;
        let puts = &data.series_for(OptionType::PE).unwrap().points;
        assert_eq!(
            calls.iter().map(|p| (p.index, p.x)).collect::<Vec<_>>(),
            vec![(0, 100.0), (3, 130.0)]
        );
        assert_eq!(
            puts.iter().map(|p| (p.index, p.x)).collect::<Vec<_>>(),
            vec![(1, 110.0), (4, 140.0)]
        );
    }

    #[test]
    fn unrecognized_contract_type_is_dropped() {
        let records = vec![
            OptionRecord {
                strike_price: 100.0,
                implied_volatility: Some(20.0),
                option_type: OptionType::Other,
                ..Default::default()
            },
            ce(100.0, Some(20.0)),
        ];
        let data = build_scatter(&records, PlotField::StrikePrice, PlotField::ImpliedVolatility);
        assert_eq!(data.total_points(), 1);
        assert!(data.series_for(OptionType::PE).is_none());
    }

    #[test]
    fn scenario_one_valid_call_one_null_put() {
        let records = vec![ce(100.0, Some(20.0)), pe(110.0, None)];
        let data = build_scatter(&records, PlotField::StrikePrice, PlotField::ImpliedVolatility);

        assert_eq!(data.count_for(OptionType::CE), 1);
        assert!(data.series_for(OptionType::PE).is_none());
        let point = &data.series_for(OptionType::CE).unwrap().points[0];
        assert_eq!((point.x, point.y), (100.0, 20.0));

        let x_domain = padded_domain(data.x_values()).unwrap();
        assert!((x_domain.min - 95.0).abs() < 1e-9);
        assert!((x_domain.max - 105.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_no_series() {
        let data = build_scatter(&[], PlotField::StrikePrice, PlotField::ImpliedVolatility);
        assert!(data.is_empty());
        assert_eq!(data.total_points(), 0);
        assert!(padded_domain(data.x_values()).is_none());
    }
}
