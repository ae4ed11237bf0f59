//! Compaction of dense traces into CSS `linear()` timing functions.
//!
//! A spring trace can run to hundreds of samples. The sampler keeps a
//! uniform stride of them plus every local peak and valley, so a bounce
//! apex is never skipped even when it falls between stride points.

use crate::config::SamplerOptions;

/// Format a number with three decimals, dropping trailing zeros and a
/// trailing decimal point.
///
/// ```rust
/// use easel::format_number;
///
/// assert_eq!(format_number(0.75), "0.75");
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.12345), "0.123");
/// ```
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Values kept from `points` for a `linear()` expression.
///
/// Short traces pass through unchanged. Longer ones keep the first and
/// last sample, every interior strict local maximum or minimum, and every
/// interior index on a stride of `len / target_count`. The target is a soft
/// budget: extrema are kept even if that exceeds it.
///
/// An empty trace yields the straight line `[0, 1]`.
pub fn compact(points: &[f64], options: &SamplerOptions) -> Vec<f64> {
    let total = points.len();
    if total == 0 {
        return vec![0.0, 1.0];
    }
    if total <= options.target_count {
        return points.to_vec();
    }

    let stride = (total / options.target_count.max(1)).max(1);
    let mut kept = Vec::with_capacity(options.target_count + 8);
    kept.push(points[0]);

    for (offset, window) in points.windows(3).enumerate() {
        let index = offset + 1;
        let (prev, curr, next) = (window[0], window[1], window[2]);
        let is_peak = curr > prev && curr > next;
        let is_valley = curr < prev && curr < next;
        if is_peak || is_valley || index % stride == 0 {
            kept.push(curr);
        }
    }

    kept.push(points[total - 1]);
    kept
}

/// Build a `linear(...)` timing function with the default budget of 50.
///
/// ```rust
/// use easel::points_to_linear;
///
/// assert_eq!(points_to_linear(&[0.0, 0.5, 1.0]), "linear(0, 0.5, 1)");
/// assert_eq!(points_to_linear(&[]), "linear(0, 1)");
/// ```
pub fn points_to_linear(points: &[f64]) -> String {
    points_to_linear_with(points, &SamplerOptions::default())
}

/// Build a `linear(...)` timing function with explicit options.
pub fn points_to_linear_with(points: &[f64], options: &SamplerOptions) -> String {
    let values: Vec<String> = compact(points, options)
        .into_iter()
        .map(format_number)
        .collect();
    format!("linear({})", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_strips_zeros() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.500_01), "0.5");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(0.0004), "0");
        assert_eq!(format_number(-0.0004), "0");
        assert_eq!(format_number(-0.55), "-0.55");
        assert_eq!(format_number(1.2), "1.2");
        assert_eq!(format_number(10.25), "10.25");
    }

    #[test]
    fn empty_is_straight_line() {
        assert_eq!(points_to_linear(&[]), "linear(0, 1)");
    }

    #[test]
    fn short_trace_passes_through() {
        assert_eq!(points_to_linear(&[0.0, 0.5, 1.0]), "linear(0, 0.5, 1)");
        let fifty: Vec<f64> = (0..50).map(|i| f64::from(i) / 49.0).collect();
        assert_eq!(compact(&fifty, &SamplerOptions::default()), fifty);
    }

    #[test]
    fn stride_keeps_endpoints() {
        let ramp: Vec<f64> = (0..=100).map(|i| f64::from(i) / 100.0).collect();
        let kept = compact(&ramp, &SamplerOptions::default());
        // 101 / 50 = stride 2: indices 2, 4, .., 98, plus 100 at the end.
        assert_eq!(kept.len(), 51);
        assert_eq!(kept[0], 0.0);
        assert_eq!(*kept.last().unwrap(), 1.0);
    }

    #[test]
    fn keeps_peak_off_stride() {
        let mut trace: Vec<f64> = (0..120).map(|i| f64::from(i) / 119.0).collect();
        // stride is 2; put a spike on an odd index
        trace[61] = 3.0;
        let linear = points_to_linear(&trace);
        assert!(linear.contains(", 3, "), "{linear}");
    }

    #[test]
    fn keeps_valley_off_stride() {
        let mut trace: Vec<f64> = (0..200).map(|i| f64::from(i) / 199.0).collect();
        // stride is 4
        trace[101] = -0.25;
        let kept = compact(&trace, &SamplerOptions::default());
        assert!(kept.contains(&-0.25));
    }

    #[test]
    fn custom_budget() {
        let ramp: Vec<f64> = (0..=40).map(|i| f64::from(i) / 40.0).collect();
        let options = SamplerOptions { target_count: 10 };
        let kept = compact(&ramp, &options);
        // stride 4: 4..36 interior (9 values) plus both ends
        assert_eq!(kept.len(), 11);
        assert_eq!(
            points_to_linear_with(&[0.0, 1.0], &options),
            "linear(0, 1)"
        );
    }
}
