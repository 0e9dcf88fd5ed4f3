use crate::error::DetectError;

use super::types::FrequencyProfile;

/// Similarity between a base profile and the control profile.
///
/// Higher means the two letter-frequency distributions have a more similar
/// shape; it says nothing about closeness of the raw frequencies.
pub fn similarity(base: &FrequencyProfile, control: &FrequencyProfile) -> Result<f64, DetectError> {
    pearson(base.values(), control.values())
}

/// Pearson correlation coefficient between two equal-length vectors.
///
/// Fails with `DimensionMismatch` on unequal lengths and with
/// `UndefinedCorrelation` when either vector has zero variance, instead of
/// letting NaN leak into the ranking sort.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64, DetectError> {
    if xs.len() != ys.len() {
        return Err(DetectError::DimensionMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(DetectError::UndefinedCorrelation);
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return Err(DetectError::UndefinedCorrelation);
    }

    Ok(covariance / (variance_x.sqrt() * variance_y.sqrt()))
}
