//! Descriptive statistics used to summarize sequence lengths.
//!
//! These match the `fn(&[f64]) -> Result<f64>` shape accepted by
//! [`Collection::count_center_spread_with`](crate::Collection::count_center_spread_with),
//! so any of them can serve as a center or spread function.

use strand_core::{Result, StrandError};

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StrandError::InvalidInput(
            "mean: data must not be empty".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median (50th percentile), interpolating between the middle pair.
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StrandError::InvalidInput(
            "median: data must not be empty".into(),
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Variance with given degrees-of-freedom correction.
///
/// - `ddof = 0` → population variance
/// - `ddof = 1` → sample variance (Bessel's correction)
pub fn variance(data: &[f64], ddof: usize) -> Result<f64> {
    let n = data.len();
    if n <= ddof {
        return Err(StrandError::InvalidInput(format!(
            "variance: need more than {} observations (got {})",
            ddof, n,
        )));
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Ok(ss / (n - ddof) as f64)
}

/// Standard deviation with given degrees-of-freedom correction.
pub fn std_dev(data: &[f64], ddof: usize) -> Result<f64> {
    Ok(variance(data, ddof)?.sqrt())
}

/// Population standard deviation (`ddof = 0`).
pub fn population_std_dev(data: &[f64]) -> Result<f64> {
    std_dev(data, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn mean_basic() {
        assert!((mean(&[4.0, 6.0, 8.0]).unwrap() - 6.0).abs() < TOL);
    }

    #[test]
    fn mean_empty_errors() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn median_odd_and_even() {
        assert!((median(&[3.0, 1.0, 2.0]).unwrap() - 2.0).abs() < TOL);
        assert!((median(&[4.0, 1.0, 2.0, 3.0]).unwrap() - 2.5).abs() < TOL);
    }

    #[test]
    fn population_vs_sample() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((variance(&data, 0).unwrap() - 2.0).abs() < TOL);
        assert!((variance(&data, 1).unwrap() - 2.5).abs() < TOL);
    }

    #[test]
    fn std_dev_of_lengths() {
        // sqrt(8/3)
        let sd = population_std_dev(&[4.0, 6.0, 8.0]).unwrap();
        assert!((sd - (8.0f64 / 3.0).sqrt()).abs() < TOL);
    }

    #[test]
    fn sample_variance_needs_two() {
        assert!(variance(&[1.0], 1).is_err());
        assert!((variance(&[1.0], 0).unwrap()).abs() < TOL);
    }
}
