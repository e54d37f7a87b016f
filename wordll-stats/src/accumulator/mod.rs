// wordll-stats/src/accumulator/mod.rs
use crate::LogLikelihood;

/// Running sum and count of the log-likelihoods assigned to one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketStat {
    /// Sum of every value pushed into the bucket.
    pub sum: LogLikelihood,
    /// Number of positions that landed in the bucket.
    pub count: usize,
}

impl BucketStat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one position's value to the bucket.
    pub fn push(&mut self, value: LogLikelihood) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean of the pushed values.
    ///
    /// Returns `None` for an empty bucket. A zero here would be read as a
    /// (very confident) log-likelihood, so there is no numeric fallback.
    pub fn mean(&self) -> Option<LogLikelihood> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_empty_bucket_has_no_mean() {
        let stat = BucketStat::new();
        assert!(stat.is_empty());
        assert_eq!(stat.mean(), None);
    }

    #[test]
    fn test_mean_of_pushed_values() {
        let mut stat = BucketStat::new();
        stat.push(-2.0);
        stat.push(-4.0);
        assert_eq!(stat.count, 2);
        assert!((stat.mean().unwrap() - (-3.0)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_likelihood_is_not_confused_with_empty() {
        let mut stat = BucketStat::new();
        stat.push(0.0);
        assert_eq!(stat.mean(), Some(0.0));
    }
}
