//! Shared fixtures for unit tests: literal truth tables for the scenarios
//! named in this crate's test suite, plus small generators for
//! linear-equivalent variants of them.

use crate::gf::GfField;

/// The identity function on `GF(2^n)`.
pub fn identity(n: u32) -> Vec<u64> {
    (0..(1u64 << n)).collect()
}

/// `F(x) = x^3` over the standard field of dimension `n`.
///
/// For even `n = 4, 6`, this is the textbook canonical-triplicate,
/// almost-perfect-nonlinear cube function used throughout this crate's
/// test suite.
pub fn cube(n: u32) -> Vec<u64> {
    let field = GfField::standard(n).unwrap();
    (0..(1u64 << n)).map(|x| field.pow(x, 3)).collect()
}

/// `F(x) = x^-1` (with `F(0) = 0`) over the standard field of dimension
/// `n`.
pub fn inverse(n: u32) -> Vec<u64> {
    let field = GfField::standard(n).unwrap();
    (0..(1u64 << n))
        .map(|x| if x == 0 { 0 } else { field.inverse(x) })
        .collect()
}

/// `G(x) = scale_out * cube(scale_in * x)`, a linear-equivalent variant of
/// [`cube`] obtained by pre- and post-composing with scalar
/// multiplication -- itself an `F2`-linear bijection of the field for any
/// nonzero scalar.
///
/// Used to exercise the linear-equivalence search against a function that
/// is equivalent to, but not identical to, [`cube`].
pub fn scaled_cube(n: u32, scale_in: u64, scale_out: u64) -> Vec<u64> {
    assert_ne!(scale_in, 0);
    assert_ne!(scale_out, 0);
    let field = GfField::standard(n).unwrap();
    (0..(1u64 << n))
        .map(|x| {
            let shifted = field.multiply(scale_in, x);
            field.multiply(scale_out, field.pow(shifted, 3))
        })
        .collect()
}
