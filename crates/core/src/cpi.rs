//! Group CPI aggregation.
//!
//! A group's `average_cpi` is denormalized onto the group row and recomputed
//! from the member roster after every membership write. Member cgpa values are
//! snapshots taken when the member was added, not live student values.

/// Arithmetic mean of the given cgpa values; `0.0` for an empty roster.
pub fn average_cpi(cgpas: &[f64]) -> f64 {
    if cgpas.is_empty() {
        return 0.0;
    }
    cgpas.iter().sum::<f64>() / cgpas.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_is_zero() {
        let avg = average_cpi(&[]);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn test_single_member() {
        assert_eq!(average_cpi(&[7.5]), 7.5);
    }

    #[test]
    fn test_mean_of_members() {
        assert_eq!(average_cpi(&[8.0, 6.0, 7.0]), 7.0);
        assert_eq!(average_cpi(&[9.5, 8.5]), 9.0);
    }

    #[test]
    fn test_mean_is_order_independent() {
        let a = average_cpi(&[6.25, 9.0, 7.75, 8.0]);
        let b = average_cpi(&[8.0, 7.75, 9.0, 6.25]);
        assert_eq!(a, b);
        assert_eq!(a, 7.75);
    }
}
