use num_bigint::BigInt;

/// A decoded sample (x, y) of the polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A share as it arrives from the input document, before its value is decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawShare {
    pub x: BigInt,
    pub base: u32,
    pub value: String,
}

/// Threshold plus the candidate shares, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    pub threshold: usize,
    /// `n` from the metadata record, if the document declares one.
    pub declared_total: Option<usize>,
    pub shares: Vec<RawShare>,
}
