use num_bigint::BigInt;
use tracing::{debug, info};

use crate::error::{ReconstructError, Result};
use crate::radix::decode;
use crate::shamir::interpolate;
use crate::types::{Point, RawShare, ShareSet};

/// Decode one share into a point.
pub fn decode_share(share: &RawShare) -> Result<Point> {
    let y = decode(&share.value, share.base).map_err(|e| {
        debug!(x = %share.x, base = share.base, error = %e, "share failed to decode");
        e
    })?;
    debug!(x = %share.x, base = share.base, %y, "decoded share");
    Ok(Point {
        x: share.x.clone(),
        y,
    })
}

/// Recover P(0) from the first `threshold` shares, in the order given.
///
/// Shares beyond the threshold are never decoded.
pub fn reconstruct(threshold: usize, shares: &[RawShare]) -> Result<BigInt> {
    if shares.len() < threshold {
        return Err(ReconstructError::InsufficientPoints {
            needed: threshold,
            available: shares.len(),
        });
    }

    let points = shares[..threshold]
        .iter()
        .map(decode_share)
        .collect::<Result<Vec<_>>>()?;
    let constant = interpolate(&points)?;
    info!(threshold, "reconstructed constant term");
    Ok(constant)
}

impl ShareSet {
    pub fn reconstruct(&self) -> Result<BigInt> {
        reconstruct(self.threshold, &self.shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(x: i64, base: u32, value: &str) -> RawShare {
        RawShare {
            x: BigInt::from(x),
            base,
            value: value.to_string(),
        }
    }

    #[test]
    fn decodes_then_interpolates() {
        // P(x) = x^2 + 2x + 5
        let shares = vec![share(1, 2, "1000"), share(2, 16, "d"), share(3, 10, "20")];
        assert_eq!(reconstruct(3, &shares).unwrap(), BigInt::from(5));
    }

    #[test]
    fn extra_shares_are_ignored() {
        let shares = vec![
            share(1, 10, "10"),
            share(2, 10, "13"),
            share(3, 10, "999"),
            share(4, 10, "not digits"),
        ];
        assert_eq!(reconstruct(2, &shares).unwrap(), BigInt::from(7));
    }

    #[test]
    fn too_few_shares() {
        let shares = vec![share(1, 10, "10")];
        assert!(matches!(
            reconstruct(2, &shares),
            Err(ReconstructError::InsufficientPoints {
                needed: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn one_bad_share_aborts() {
        let shares = vec![share(1, 10, "10"), share(2, 2, "12")];
        assert!(matches!(
            reconstruct(2, &shares),
            Err(ReconstructError::DigitOutOfRange { digit: 2, base: 2 })
        ));
    }

    #[test]
    fn zero_threshold_has_nothing_to_interpolate() {
        assert!(matches!(
            reconstruct(0, &[]),
            Err(ReconstructError::EmptyPointSet)
        ));
    }

    #[test]
    fn share_set_method() {
        let set = ShareSet {
            threshold: 2,
            declared_total: None,
            shares: vec![share(1, 10, "10"), share(2, 10, "13")],
        };
        assert_eq!(set.reconstruct().unwrap(), BigInt::from(7));
    }
}
