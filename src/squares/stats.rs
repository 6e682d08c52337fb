use log::debug;

use crate::error::{Error, Result};

/// Weighted sum of squares: Σ wᵢ·xᵢ².
///
/// With `weights == None` every number has weight 1. This is a plain sum;
/// nothing is divided by the count or by the total weight.
///
/// ```
/// use numtools::squares::weighted_sum_of_squares;
///
/// assert_eq!(weighted_sum_of_squares(&[1.0, 2.0, 4.0], None).unwrap(), 21.0);
/// assert_eq!(weighted_sum_of_squares(&[2.0, 4.0], Some(&[1.0, 0.5])).unwrap(), 12.0);
/// ```
pub fn weighted_sum_of_squares(numbers: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    let total: f64 = match weights {
        Some(weights) => {
            if weights.len() != numbers.len() {
                return Err(Error::LengthMismatch {
                    numbers: numbers.len(),
                    weights: weights.len(),
                });
            }
            numbers
                .iter()
                .zip(weights)
                .map(|(&x, &w)| w * x * x)
                .sum()
        }
        None => numbers.iter().map(|&x| x * x).sum(),
    };
    debug!("sum of squares over {} values = {total}", numbers.len());
    Ok(total)
}

/// Arithmetic mean. An empty sequence is a division by zero.
pub fn mean(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(Error::DivisionByZero("mean requires at least one number"));
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Square root of a computed result. Negative input is a domain error
/// rather than NaN.
pub fn checked_sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "square root of negative result {value}"
        )));
    }
    Ok(value.sqrt())
}
