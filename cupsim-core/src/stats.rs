/// Usage-percentage aggregation.
///
/// Both helpers return `Option<f64>` so callers decide how to present a
/// round with nothing in it instead of dividing by zero.

/// Percentage of a round's pairs that ended up matched:
/// `100 * used / (used + unused)`. `None` when the round saw no pairs.
pub fn usage_percentage(used: usize, unused: usize) -> Option<f64> {
    let total = used + unused;
    if total == 0 {
        return None;
    }
    Some(used as f64 * 100.0 / total as f64)
}

/// Arithmetic mean. `None` on an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percentage() {
        assert_eq!(usage_percentage(45, 55), Some(45.0));
        assert_eq!(usage_percentage(0, 10), Some(0.0));
        assert_eq!(usage_percentage(3, 0), Some(100.0));
    }

    #[test]
    fn test_usage_percentage_empty_round() {
        assert_eq!(usage_percentage(0, 0), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[7.5]), Some(7.5));
        assert_eq!(mean(&[]), None);
    }
}
