//! Exact reconstruction of a polynomial's constant term from threshold points.
//!
//! Share values are digit strings in a declared radix; they are decoded to
//! big integers and P(0) is recovered by Lagrange interpolation without any
//! rounding.

pub mod error;
pub mod input;
pub mod radix;
pub mod reconstruct;
pub mod shamir;
pub mod types;

pub use error::{ReconstructError, Result};
pub use radix::{decode, encode};
pub use reconstruct::reconstruct;
pub use shamir::{interpolate, interpolate_at};
pub use types::{Point, RawShare, ShareSet};
