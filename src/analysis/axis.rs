use crate::models::AxisDomain;

/// Outward padding applied to each axis: lower bound scaled down, upper
/// bound scaled up. Multiplicative, so it assumes the usual non-negative
/// option quantities (prices, volumes, percentages).
pub const DOMAIN_PAD_LOW: f64 = 0.95;
pub const DOMAIN_PAD_HIGH: f64 = 1.05;

/// Padded domain over the union of one axis' values across both series.
/// `None` for an empty set; the chart shows a placeholder instead of axes.
pub fn padded_domain(values: impl IntoIterator<Item = f64>) -> Option<AxisDomain> {
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(AxisDomain {
        min: min * DOMAIN_PAD_LOW,
        max: max * DOMAIN_PAD_HIGH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_min_down_and_max_up() {
        let domain = padded_domain([100.0, 250.0, 180.0]).unwrap();
        assert!((domain.min - 95.0).abs() < 1e-9);
        assert!((domain.max - 262.5).abs() < 1e-9);
    }

    #[test]
    fn single_value_still_gets_a_visible_range() {
        let domain = padded_domain([20.0]).unwrap();
        assert!((domain.min - 19.0).abs() < 1e-9);
        assert!((domain.max - 21.0).abs() < 1e-9);
        assert!(domain.min < domain.max);
    }

    #[test]
    fn empty_set_has_no_domain() {
        assert!(padded_domain(std::iter::empty()).is_none());
    }
}
