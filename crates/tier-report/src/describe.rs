//! Summary statistics of a numeric sample.

use serde::Serialize;

/// Count, moments, and quartiles of a non-empty sample.
///
/// `std` is the sample standard deviation (n - 1 denominator) and is absent
/// for a single value. Quartiles interpolate linearly between the closest
/// ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Returns `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let squares: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn empty_sample() {
        assert_eq!(Describe::from_values(&[]), None);
    }

    #[test]
    fn single_value() {
        let stats = Describe::from_values(&[680.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, None);
        assert!(close(stats.mean, 680.0));
        assert!(close(stats.q25, 680.0));
        assert!(close(stats.max, 680.0));
    }

    #[test]
    fn quartiles_interpolate() {
        let stats = Describe::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert!(close(stats.mean, 2.5));
        assert!(close(stats.min, 1.0));
        assert!(close(stats.q25, 1.75));
        assert!(close(stats.median, 2.5));
        assert!(close(stats.q75, 3.25));
        assert!(close(stats.max, 4.0));
        assert!(close(stats.std.unwrap(), (5.0f64 / 3.0).sqrt()));
    }
}
