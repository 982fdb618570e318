use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::error::{ReconstructError, Result};
use crate::types::Point;

/// Lagrange basis L_j(at) as an unreduced fraction (num, den):
/// num = Π_{i≠j} (at - x_i), den = Π_{i≠j} (x_j - x_i).
///
/// Panics if `j` is not an index into `xs`.
pub fn lagrange_basis(j: usize, xs: &[BigInt], at: &BigInt) -> (BigInt, BigInt) {
    let x_j = &xs[j];
    let mut num = BigInt::one();
    let mut den = BigInt::one();
    for (i, x_i) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        num *= at - x_i;
        den *= x_j - x_i;
    }
    (num, den)
}

fn ensure_distinct(points: &[Point]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !seen.insert(&p.x) {
            return Err(ReconstructError::DuplicateXValue(p.x.clone()));
        }
    }
    Ok(())
}

/// Exact running sum, kept reduced with a positive denominator.
struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    fn zero() -> Self {
        Fraction {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    // den must be non-zero
    fn add(&mut self, num: BigInt, den: BigInt) {
        let n = &self.num * &den + num * &self.den;
        let d = &self.den * den;
        let g = n.gcd(&d);
        let (mut n, mut d) = (n / &g, d / &g);
        if d.is_negative() {
            n = -n;
            d = -d;
        }
        self.num = n;
        self.den = d;
    }

    fn into_integer(self) -> Result<BigInt> {
        if self.den.is_one() {
            Ok(self.num)
        } else {
            Err(ReconstructError::NonIntegralTerm {
                numerator: self.num,
                denominator: self.den,
            })
        }
    }
}

/// Evaluate at `at` the unique polynomial of degree < points.len() through `points`.
///
/// Each term is y_j * num_j / den_j with the multiplication done first. Terms
/// are summed in point order as an exact fraction; a result that is not an
/// integer is reported instead of truncated.
pub fn interpolate_at(points: &[Point], at: &BigInt) -> Result<BigInt> {
    if points.is_empty() {
        return Err(ReconstructError::EmptyPointSet);
    }
    ensure_distinct(points)?;

    let xs: Vec<BigInt> = points.iter().map(|p| p.x.clone()).collect();
    let mut acc = Fraction::zero();
    for (j, p) in points.iter().enumerate() {
        let (num, den) = lagrange_basis(j, &xs, at);
        acc.add(&p.y * num, den);
    }
    debug!(points = points.len(), %at, "interpolated");
    acc.into_integer()
}

/// Constant term P(0).
pub fn interpolate(points: &[Point]) -> Result<BigInt> {
    interpolate_at(points, &BigInt::zero())
}
