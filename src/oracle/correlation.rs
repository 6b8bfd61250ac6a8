//! Pearson correlation between the sentiment series and a reference series.

use crate::oracle::round2;
use anyhow::{bail, Result};

/// Linear correlation between two equal-length series, rounded to 2
/// decimals.
///
/// Unequal lengths are a domain error. Fewer than two paired observations,
/// or a series with no variance, carries no trend information and yields
/// 0.0 rather than an undefined coefficient.
pub fn pearson(sentiment_series: &[f64], reference_series: &[f64]) -> Result<f64> {
    if sentiment_series.len() != reference_series.len() {
        bail!(
            "sentiment series ({} values) and reference series ({} values) must be the same length",
            sentiment_series.len(),
            reference_series.len()
        );
    }

    if sentiment_series.len() < 2 {
        return Ok(0.0);
    }

    let n = sentiment_series.len() as f64;
    let mean_x = sentiment_series.iter().sum::<f64>() / n;
    let mean_y = reference_series.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in sentiment_series.iter().zip(reference_series) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(round2(covariance / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colinear_increasing_series_correlate_perfectly() {
        let correlation = pearson(&[0.1, 0.2, 0.3], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(correlation, 1.0);
    }

    #[test]
    fn opposed_series_correlate_negatively() {
        let correlation = pearson(&[0.3, 0.2, 0.1], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(correlation, -1.0);
    }

    #[test]
    fn short_series_yield_zero() {
        assert_eq!(pearson(&[], &[]).unwrap(), 0.0);
        assert_eq!(pearson(&[0.5], &[1.0]).unwrap(), 0.0);
    }

    #[test]
    fn unequal_lengths_are_a_domain_error() {
        let err = pearson(&[0.1, 0.2], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn flat_series_yield_zero() {
        // Zero variance leaves the coefficient undefined; the engine reads
        // it as no correlation.
        assert_eq!(pearson(&[0.3, 0.3], &[1.0, 2.0]).unwrap(), 0.0);
        assert_eq!(pearson(&[0.1, 0.2], &[5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn partial_correlation_rounds_to_two_decimals() {
        let correlation = pearson(&[0.1, 0.4, 0.2, 0.8], &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(correlation > 0.0 && correlation < 1.0);
        assert_eq!(correlation, round2(correlation));
    }
}
