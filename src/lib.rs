//! Structural analysis of vectorial Boolean functions (VBFs) on `GF(2^n)`
//! for cryptographic design: field arithmetic, the algebraic-normal-form
//! (Möbius) transform, the standard cryptographic invariants (differential
//! uniformity / APN, k-to-1, algebraic degree, monomial, quadratic), the
//! ortho-derivative and its two spectra, canonical-triplicate (3-to-1)
//! decomposition, and a backtracking search deciding linear equivalence of
//! two canonical-triplicate functions.
//!
//! # Example
//!
//! ```
//! use vbf_analysis::{gf::GfField, truth_table::{Dimension, TruthTable}, triplicate};
//!
//! let dim = Dimension::new(4).unwrap();
//! let field = GfField::standard(4).unwrap();
//! let values: Vec<u64> = (0..16u64).map(|x| field.pow(x, 3)).collect();
//! let tt = TruthTable::new(dim, &values).unwrap();
//!
//! assert!(triplicate::is_canonical_triplicate(&tt));
//! ```

#![deny(missing_docs)]

use std::fmt;

pub mod anf;
pub mod equivalence;
pub mod gf;
pub mod invariants;
pub mod spectra;
pub mod triplicate;
pub mod truth_table;

#[cfg(test)]
mod prop_tests;
#[cfg(test)]
mod test_util;

use crate::{gf::GfField, triplicate::Triplicate, truth_table::TruthTable};

// ======================================================================
// Error - PUBLIC

/// Represents all possible errors that can occur in this library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Requested dimension `n` is outside the range this operation
    /// supports.
    DimensionUnsupported {
        /// The unsupported dimension.
        dimension: u32,
    },

    /// A truth table failed the canonical-triplicate precondition required
    /// by the linear-equivalence engine.
    NotCanonicalTriplicate {
        /// Which invariant failed, and the offending value if any.
        reason: NotTriplicateReason,
    },

    /// A truth-table entry was not a valid element of the claimed field.
    OutOfRangeValue {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: u64,
        /// Exclusive upper bound the value was required to satisfy.
        bound: u64,
    },

    /// Monomial detection was requested without a primitive polynomial,
    /// or for a dimension too large to search exhaustively.
    MissingPrimitivePolynomial {
        /// The dimension for which no usable polynomial was available.
        dimension: u32,
    },
}

/// The specific canonical-triplicate invariant that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotTriplicateReason {
    /// `F(0) != 0`.
    ZeroNotFixed,
    /// Two inputs mapped to the same output `output`, violating the
    /// one-row-per-output invariant.
    DuplicateOutput {
        /// The output claimed by more than one row.
        output: u64,
    },
    /// `input`'s triple (`input`, `input * beta`, their XOR) did not close:
    /// the three did not share a common output.
    TripleNotClosed {
        /// The input whose triple failed to close.
        input: u64,
    },
    /// The number of rows recovered did not match `(2^n - 1) / 3`.
    WrongOutputCount {
        /// Expected row count.
        expected: usize,
        /// Row count actually recovered before the function failed a
        /// different invariant.
        got: usize,
    },
}

// ======================================================================
// Error - IMPL DISPLAY

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionUnsupported { dimension } => {
                write!(f, "unsupported dimension: {}", dimension)
            }

            Error::NotCanonicalTriplicate { reason } => {
                write!(f, "not a canonical triplicate: {}", reason)
            }

            Error::OutOfRangeValue {
                index,
                value,
                bound,
            } => {
                write!(
                    f,
                    "value {} at index {} is out of range (must be < {})",
                    value, index, bound
                )
            }

            Error::MissingPrimitivePolynomial { dimension } => {
                write!(
                    f,
                    "no usable primitive polynomial for dimension {}",
                    dimension
                )
            }
        }
    }
}

impl fmt::Display for NotTriplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotTriplicateReason::ZeroNotFixed => write!(f, "F(0) != 0"),
            NotTriplicateReason::DuplicateOutput { output } => {
                write!(f, "duplicate output {}", output)
            }
            NotTriplicateReason::TripleNotClosed { input } => {
                write!(f, "triple for input {} did not close", input)
            }
            NotTriplicateReason::WrongOutputCount { expected, got } => {
                write!(f, "expected {} rows, recovered {}", expected, got)
            }
        }
    }
}

// ======================================================================
// Error - IMPL ERROR

impl std::error::Error for Error {}

// ======================================================================
// FUNCTIONS - PUBLIC - facade over the typed API

/// Returns `true` if `f` is a canonical triplicate (3-to-1) function.
///
/// See [`triplicate::is_canonical_triplicate`].
pub fn is_canonical_triplicate(f: &TruthTable<'_>) -> bool {
    triplicate::is_canonical_triplicate(f)
}

/// Decides whether `f` and `g` -- both canonical triplicates of the same
/// dimension -- are linearly equivalent.
///
/// Returns `false` (not an error) if either function is not a canonical
/// triplicate, or if they have different dimensions, matching this
/// operation's "negative result, not exception" error policy.
pub fn check_lin_eq_2x_uniform_3to1(f: &TruthTable<'_>, g: &TruthTable<'_>) -> bool {
    let (Ok(f_ct), Ok(g_ct)) = (Triplicate::build(f), Triplicate::build(g)) else {
        return false;
    };
    f_ct.check_linear_equivalence(&g_ct)
}

/// Computes the differential uniformity of `f`.
///
/// See [`invariants::differential_uniformity`].
pub fn differential_uniformity(f: &TruthTable<'_>) -> u64 {
    invariants::differential_uniformity(f)
}

/// Returns `true` if `f` is almost-perfect-nonlinear.
///
/// See [`invariants::is_apn`].
pub fn is_apn(f: &TruthTable<'_>) -> bool {
    invariants::is_apn(f)
}

/// Classifies `f` as k-to-1, or returns [`invariants::NOT_K_TO_1`].
///
/// See [`invariants::k_to_1`].
pub fn k_to_1(f: &TruthTable<'_>) -> i64 {
    invariants::k_to_1(f)
}

/// Computes the algebraic degree of `f`.
///
/// See [`invariants::algebraic_degree`].
pub fn algebraic_degree(f: &TruthTable<'_>) -> u32 {
    invariants::algebraic_degree(f)
}

/// Returns `true` if `f` has algebraic degree exactly 2.
///
/// See [`invariants::is_quadratic`].
pub fn is_quadratic(f: &TruthTable<'_>) -> bool {
    invariants::is_quadratic(f)
}

/// Decides whether `f(x) = a * x^d + b` for some `a`, `b`, `d` in the
/// field defined by `polynomial`.
///
/// # Errors
///
/// Returns [`Error::MissingPrimitivePolynomial`] if `polynomial` is
/// `None`, [`Error::OutOfRangeValue`] if it does not have bit `n` set,
/// and [`Error::DimensionUnsupported`] if `f`'s dimension exceeds 16.
pub fn is_monomial(f: &TruthTable<'_>, polynomial: Option<u64>) -> Result<bool, Error> {
    let Some(polynomial) = polynomial else {
        return Err(Error::MissingPrimitivePolynomial {
            dimension: f.dimension().get(),
        });
    };
    let field = GfField::new(f.dimension().get(), polynomial)?;
    invariants::is_monomial(f, &field)
}

/// Computes the ortho-derivative differential spectrum (ODDS) of `f`.
///
/// See [`spectra::differential_spectrum`].
pub fn compute_differential_spectrum(f: &TruthTable<'_>) -> Vec<u64> {
    spectra::differential_spectrum(f)
}

/// Computes the ortho-derivative extended Walsh spectrum (ODWS) of `f`.
///
/// See [`spectra::extended_walsh_spectrum`].
pub fn compute_extended_walsh_spectrum(f: &TruthTable<'_>) -> Vec<u64> {
    spectra::extended_walsh_spectrum(f)
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_util, truth_table::Dimension};

    #[test]
    fn facade_matches_typed_api_for_cube() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();

        assert!(is_canonical_triplicate(&tt));
        assert!(is_apn(&tt));
        assert_eq!(differential_uniformity(&tt), 2);
        assert_eq!(k_to_1(&tt), 3);
        assert_eq!(algebraic_degree(&tt), 2);
        assert!(is_quadratic(&tt));
        assert!(check_lin_eq_2x_uniform_3to1(&tt, &tt));
    }

    #[test]
    fn check_lin_eq_rejects_non_triplicate_inputs() {
        let dim = Dimension::new(4).unwrap();
        let identity = test_util::identity(4);
        let tt = TruthTable::new(dim, &identity).unwrap();
        assert!(!check_lin_eq_2x_uniform_3to1(&tt, &tt));
    }

    #[test]
    fn is_monomial_without_polynomial_is_missing_primitive_polynomial() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();
        assert_eq!(
            is_monomial(&tt, None),
            Err(Error::MissingPrimitivePolynomial { dimension: 4 })
        );
    }

    #[test]
    fn error_display_mentions_offending_dimension() {
        let err = Error::DimensionUnsupported { dimension: 42 };
        assert!(err.to_string().contains("42"));
    }
}
