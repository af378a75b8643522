use num_bigint::BigInt;

use crate::{ShamirError, interpolate::interpolate_at_zero, radix::decode_radix};

/// One share as distributed: an x-coordinate and a value still encoded as a
/// digit string in some positional base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: u32,
    pub base: u32,
    pub raw: String,
}

/// A share whose value has been decoded into an exact integer, ready for
/// interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedShare {
    pub x: u32,
    pub y: BigInt,
}

impl Share {
    pub fn decode(&self) -> Result<DecodedShare, ShamirError> {
        let y = decode_radix(&self.raw, self.base)?;
        Ok(DecodedShare { x: self.x, y: BigInt::from(y) })
    }
}

fn validate_parameters(threshold: usize, share_count: usize) -> Result<(), ShamirError> {
    if threshold < 1 {
        return Err(ShamirError::InvalidThreshold);
    } else if share_count < threshold {
        return Err(ShamirError::InsufficientShares { needed: threshold, got: share_count });
    }
    Ok(())
}

/// Recover the secret from the first `threshold` shares in caller order.
///
/// Only those shares are consulted; any beyond the threshold are ignored, so
/// callers that want the "k lowest-indexed shares" behavior supply the slice
/// sorted by x. The x-coordinates of the selected shares must be pairwise
/// distinct.
pub fn recover_secret(shares: &[DecodedShare], threshold: usize) -> Result<BigInt, ShamirError> {
    validate_parameters(threshold, shares.len())?;
    interpolate_at_zero(&shares[..threshold])
}
