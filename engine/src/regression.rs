//! Ordinary least squares in integer arithmetic.
//!
//! No floating point anywhere: the journal digest must be bit-for-bit
//! reproducible across every environment the computation runs in, and
//! float rounding cannot guarantee that. All divisions truncate toward
//! zero, which is part of the committed arithmetic.

use crate::EngineError;

/// A fitted least-squares line over an integer series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regression {
    pub slope: i64,
    pub intercept: i64,
    /// Coefficient of determination scaled to [0, 100].
    pub confidence: u64,
}

impl Regression {
    /// Project the fitted line to a given x.
    pub fn project(&self, x: u64) -> i64 {
        self.slope * x as i64 + self.intercept
    }
}

/// Fit a least-squares line to `(x, y)` points.
///
/// Fails with [`EngineError::ZeroIndexVariance`] when the x dimension
/// carries no variance (empty series, or every x identical): the slope
/// denominator would be zero, and a series like that is a broken build
/// of the engine, not a runtime data condition.
pub fn fit(series: &[(u64, u64)]) -> Result<Regression, EngineError> {
    if series.is_empty() {
        return Err(EngineError::ZeroIndexVariance);
    }

    let n = series.len() as i64;
    let sum_x: i64 = series.iter().map(|(x, _)| *x as i64).sum();
    let sum_y: i64 = series.iter().map(|(_, y)| *y as i64).sum();
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut numerator = 0i64;
    let mut denominator = 0i64;
    let mut sum_squared_total = 0i64;

    for (x, y) in series {
        let x_diff = *x as i64 - mean_x;
        let y_diff = *y as i64 - mean_y;
        numerator += x_diff * y_diff;
        denominator += x_diff * x_diff;
        sum_squared_total += y_diff * y_diff;
    }

    if denominator == 0 {
        return Err(EngineError::ZeroIndexVariance);
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    // R² as an integer percentage, clamped to [0, 100].
    let mut sum_squared_errors = 0i64;
    for (x, y) in series {
        let predicted = slope * (*x as i64) + intercept;
        let error = *y as i64 - predicted;
        sum_squared_errors += error * error;
    }

    let confidence = if sum_squared_total > 0 {
        let ratio = (sum_squared_total - sum_squared_errors) * 100 / sum_squared_total;
        ratio.clamp(0, 100) as u64
    } else {
        // R² is undefined for a flat series; report no confidence.
        0
    };

    Ok(Regression {
        slope,
        intercept,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exact_line() {
        // y = 3x + 7 over x = 1..=9, so both means are exact integers
        let series: Vec<(u64, u64)> = (1..=9).map(|x| (x, 3 * x + 7)).collect();
        let reg = fit(&series).unwrap();

        assert_eq!(reg.slope, 3);
        assert_eq!(reg.intercept, 7);
        assert_eq!(reg.confidence, 100, "exact fit should score full confidence");
        assert_eq!(reg.project(10), 37);
    }

    #[test]
    fn flat_series_scores_zero_confidence() {
        let series: Vec<(u64, u64)> = (1..=5).map(|x| (x, 42)).collect();
        let reg = fit(&series).unwrap();

        assert_eq!(reg.slope, 0);
        assert_eq!(reg.intercept, 42);
        assert_eq!(reg.confidence, 0, "R² is undefined for a flat series");
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(fit(&[]), Err(EngineError::ZeroIndexVariance));
    }

    #[test]
    fn constant_index_is_rejected() {
        let series = [(5u64, 100u64), (5, 200), (5, 300)];
        assert_eq!(fit(&series), Err(EngineError::ZeroIndexVariance));
    }

    #[test]
    fn noisy_series_scores_below_full() {
        let series = [(1u64, 100u64), (2, 500), (3, 120), (4, 480), (5, 130)];
        let reg = fit(&series).unwrap();
        assert!(reg.confidence < 100, "noise must reduce confidence");
    }

    #[test]
    fn fit_is_deterministic() {
        let series: Vec<(u64, u64)> = (1..=20).map(|x| (x, 1000 + 13 * x % 77)).collect();
        assert_eq!(fit(&series).unwrap(), fit(&series).unwrap());
    }
}
