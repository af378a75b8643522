use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::{DecodedShare, ShamirError};

/// Evaluate at x = 0 the unique polynomial of degree < n passing through
/// the n given points, using the Lagrange form:
///
/// ```text
///              ---        ---      -x[j]
///   secret  =  \   y[i] · | |   -----------
///              /        j != i  x[i] - x[j]
///              ---
/// ```
///
/// Every basis product is carried as an exact rational; nothing is rounded
/// or truncated along the way. The sum must reduce to an integer for points
/// sampled from an integer polynomial; if it does not, the points are
/// inconsistent with any such polynomial and `NonIntegerResult` is returned
/// instead of a silently corrupted value.
pub fn interpolate_at_zero(points: &[DecodedShare]) -> Result<BigInt, ShamirError> {
    let mut secret = BigRational::zero();

    for (i, point) in points.iter().enumerate() {
        let mut basis = BigRational::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if point.x == other.x {
                return Err(ShamirError::DuplicateXCoordinate(point.x));
            }
            let numerator = -BigInt::from(other.x);
            let denominator = BigInt::from(point.x) - BigInt::from(other.x);
            basis *= BigRational::new(numerator, denominator);
        }
        secret += BigRational::from_integer(point.y.clone()) * basis;
    }

    if !secret.is_integer() {
        return Err(ShamirError::NonIntegerResult);
    }
    Ok(secret.to_integer())
}
