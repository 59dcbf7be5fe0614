/// Arithmetic mean; `None` for an empty column.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest and largest value; `None` for an empty column.
pub fn value_span(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let mut span = (first, first);
    for value in iter {
        span.0 = span.0.min(value);
        span.1 = span.1.max(value);
    }
    Some(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let result = mean(&[10.0, 20.0, 20.0, 30.0]).unwrap();
        assert!((result - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[7.5]), Some(7.5));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_value_span() {
        assert_eq!(value_span(&[12.4, 3.9, 25.0, 13.9]), Some((3.9, 25.0)));
        assert_eq!(value_span(&[5.0]), Some((5.0, 5.0)));
        assert_eq!(value_span(&[]), None);
    }
}
