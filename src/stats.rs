use std::fmt;

// ---------------------------------------------------------------------------
// Difference series and summary statistics
// ---------------------------------------------------------------------------

/// Element-wise `second[i] - first[i]` over the rows both series have.
pub fn difference(first: &[f64], second: &[f64]) -> Vec<f64> {
    first.iter().zip(second).map(|(a, b)| b - a).collect()
}

/// Summary of a difference series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffStats {
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub std: f64,
    pub max: f64,
    pub min: f64,
}

impl DiffStats {
    /// `None` for an empty series. `NaN` values propagate into every field.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let std = if values.len() < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        };

        // f64::max/min skip NaN; fold by hand so a NaN anywhere wins.
        let max = values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, |acc, v| if v.is_nan() || v > acc { v } else { acc });
        let min = values
            .iter()
            .copied()
            .fold(f64::INFINITY, |acc, v| if v.is_nan() || v < acc { v } else { acc });

        Some(DiffStats {
            mean,
            std,
            max,
            min,
        })
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mean Diff: {:.4}, Std: {:.4}, Max: {:.4}, Min: {:.4}",
            self.mean, self.std, self.max, self.min
        )
    }
}

/// Caption shared by both charts, e.g. `speed (Mean Diff: 0.1000, Std: ...)`.
pub fn caption(column: &str, stats: Option<&DiffStats>) -> String {
    match stats {
        Some(s) => format!("{column} ({s})"),
        None => format!("{column} (Mean Diff: n/a, Std: n/a, Max: n/a, Min: n/a)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn difference_is_second_minus_first() {
        let d = difference(&[1.0, 2.0, 3.0], &[1.5, 1.0, 3.0]);
        assert_eq!(d, vec![0.5, -1.0, 0.0]);
    }

    #[test]
    fn difference_stops_at_shorter_series() {
        assert_eq!(difference(&[1.0, 2.0, 3.0], &[2.0]), vec![1.0]);
    }

    #[test]
    fn stats_match_direct_recomputation() {
        let diff = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = DiffStats::compute(&diff).unwrap();

        let mean = diff.iter().sum::<f64>() / 8.0;
        let var = diff.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 7.0;
        assert!(close(s.mean, 5.0));
        assert!(close(s.mean, mean));
        assert!(close(s.std, var.sqrt()));
        assert_eq!(s.max, 9.0);
        assert_eq!(s.min, 2.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let s = DiffStats::compute(&[3.0]).unwrap();
        assert_eq!(s.mean, 3.0);
        assert!(s.std.is_nan());
        assert_eq!((s.max, s.min), (3.0, 3.0));
    }

    #[test]
    fn empty_series_has_no_stats() {
        assert_eq!(DiffStats::compute(&[]), None);
        assert_eq!(
            caption("a", None),
            "a (Mean Diff: n/a, Std: n/a, Max: n/a, Min: n/a)"
        );
    }

    #[test]
    fn nan_propagates() {
        let s = DiffStats::compute(&[1.0, f64::NAN, 3.0]).unwrap();
        assert!(s.mean.is_nan());
        assert!(s.std.is_nan());
        assert!(s.max.is_nan());
        assert!(s.min.is_nan());
    }

    #[test]
    fn caption_rounds_to_four_decimals() {
        let s = DiffStats {
            mean: 0.123456,
            std: 1.0,
            max: 2.00006,
            min: -3.0,
        };
        assert_eq!(
            caption("speed", Some(&s)),
            "speed (Mean Diff: 0.1235, Std: 1.0000, Max: 2.0001, Min: -3.0000)"
        );
    }
}
