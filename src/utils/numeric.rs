/// Arithmetic mean; an empty slice is 0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 0.5, 0.0, 0.5]), 0.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.8333, 2), 0.83);
        assert_eq!(round_to(57.5, 0), 58.0);
    }
}
