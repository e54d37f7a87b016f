// wordll-stats/src/cutoffs/mod.rs

/// Finds the bucket a value belongs to, given ascending cutoffs.
///
/// With `n` cutoffs there are `n + 1` buckets. Bucket `0` holds values
/// `<= cutoffs[0]`, bucket `i` holds `cutoffs[i - 1] < value <= cutoffs[i]`
/// and bucket `n` holds everything above the last cutoff.
///
/// `cutoffs` must be strictly ascending (see [`is_strictly_ascending`]).
pub fn partition_index<T: PartialOrd>(cutoffs: &[T], value: &T) -> usize {
    cutoffs.partition_point(|cutoff| cutoff < value)
}

/// Returns true when every element is strictly greater than the one before it.
pub fn is_strictly_ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_bound_is_inclusive() {
        let cutoffs = [1u64, 2, 3];
        assert_eq!(partition_index(&cutoffs, &0), 0);
        assert_eq!(partition_index(&cutoffs, &1), 0);
        assert_eq!(partition_index(&cutoffs, &2), 1);
        assert_eq!(partition_index(&cutoffs, &3), 2);
        assert_eq!(partition_index(&cutoffs, &4), 3);
        assert_eq!(partition_index(&cutoffs, &1000), 3);
    }

    #[test]
    fn test_float_cutoffs() {
        let cutoffs = [0.25f64, 0.5, 0.75];
        assert_eq!(partition_index(&cutoffs, &-1.0), 0);
        assert_eq!(partition_index(&cutoffs, &0.25), 0);
        assert_eq!(partition_index(&cutoffs, &0.3), 1);
        assert_eq!(partition_index(&cutoffs, &0.75), 2);
        assert_eq!(partition_index(&cutoffs, &0.76), 3);
    }

    #[test]
    fn test_no_cutoffs_means_single_bucket() {
        let cutoffs: [u64; 0] = [];
        assert_eq!(partition_index(&cutoffs, &42), 0);
    }

    #[test]
    fn test_ascending_check() {
        assert!(is_strictly_ascending(&[1, 2, 3, 10]));
        assert!(is_strictly_ascending::<u64>(&[]));
        assert!(is_strictly_ascending(&[5]));
        assert!(!is_strictly_ascending(&[1, 1, 2]));
        assert!(!is_strictly_ascending(&[3, 2]));
        assert!(!is_strictly_ascending(&[0.5, f64::NAN]));
    }
}
