//! Validated input types: [`Dimension`], [`Polynomial`] and [`TruthTable`].
//!
//! Every other module in this crate receives already-validated data through
//! these three types; they are the single place where caller-supplied bounds
//! are checked.

use std::fmt;

use crate::Error;

// ======================================================================
// Dimension - PUBLIC

/// A validated field dimension `n`, with `1 <= n <= 20`.
///
/// Some operations (the triplicate/equivalence engine, the monomial
/// detector) further restrict the supported range; those operations
/// validate the stricter bound themselves and return
/// [`Error::DimensionUnsupported`] when it is not met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension(u32);

impl Dimension {
    /// Maximum supported dimension.
    pub const MAX: u32 = 20;

    /// Validates `n` and returns a [`Dimension`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionUnsupported`] if `n == 0` or `n > 20`.
    pub fn new(n: u32) -> Result<Self, Error> {
        if n == 0 || n > Self::MAX {
            return Err(Error::DimensionUnsupported { dimension: n });
        }
        Ok(Self(n))
    }

    /// Returns `n`.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns `2^n`.
    pub fn size(self) -> usize {
        1usize << self.0
    }

    /// Returns `true` if `n` is even.
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ======================================================================
// Polynomial - PUBLIC

/// A validated irreducible-polynomial bitmask for `GF(2^n)`.
///
/// The library trusts the caller that the polynomial is actually
/// irreducible over `GF(2)` -- this is not checked, matching the trust
/// boundary of the reference implementation this crate is modeled on.
/// Only the bit layout (`bit n` set, no higher bit set) is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Polynomial {
    dimension: Dimension,
    bits: u64,
}

impl Polynomial {
    /// Validates `bits` against `dimension` and returns a [`Polynomial`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeValue`] if `bits` does not have bit `n`
    /// set, or has any bit above `n` set.
    pub fn new(dimension: Dimension, bits: u64) -> Result<Self, Error> {
        let n = dimension.get();
        let top = 1u64 << n;
        if bits & top == 0 || bits >= (top << 1) {
            return Err(Error::OutOfRangeValue {
                index: 0,
                value: bits,
                bound: top << 1,
            });
        }
        Ok(Self { dimension, bits })
    }

    /// Returns the dimension this polynomial was validated against.
    pub fn dimension(self) -> Dimension {
        self.dimension
    }

    /// Returns the raw bitmask.
    pub fn bits(self) -> u64 {
        self.bits
    }

    /// Looks up the bit-exact standard primitive polynomial for `dimension`.
    ///
    /// See the dimension-indexed constant table this crate carries for
    /// `n = 1..=20`.
    pub fn standard(dimension: Dimension) -> Result<Self, Error> {
        let bits = crate::gf::primitive_polynomial(dimension.get())?;
        Self::new(dimension, bits)
    }
}

// ======================================================================
// TruthTable - PUBLIC

/// A borrowed, validated view of a vectorial Boolean function's truth table.
///
/// `values[x]` is the image of `x` under the function; every entry must be
/// `< 2^n`. This is the entry point every other computation in this crate
/// receives its data through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruthTable<'a> {
    dimension: Dimension,
    values: &'a [u64],
}

impl<'a> TruthTable<'a> {
    /// Validates `values` against `dimension` and returns a [`TruthTable`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeValue`] if `values.len() != 2^n` or any
    /// entry is `>= 2^n`.
    pub fn new(dimension: Dimension, values: &'a [u64]) -> Result<Self, Error> {
        let size = dimension.size();
        if values.len() != size {
            return Err(Error::OutOfRangeValue {
                index: values.len(),
                value: values.len() as u64,
                bound: size as u64,
            });
        }
        let bound = size as u64;
        for (index, &value) in values.iter().enumerate() {
            if value >= bound {
                return Err(Error::OutOfRangeValue {
                    index,
                    value,
                    bound,
                });
            }
        }
        Ok(Self { dimension, values })
    }

    /// Returns the dimension `n`.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the length, `2^n`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this truth table has zero length -- never true for
    /// a validated table, kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `F(x)`.
    pub fn eval(&self, x: usize) -> u64 {
        self.values[x]
    }

    /// Returns the backing slice.
    pub fn values(&self) -> &'a [u64] {
        self.values
    }

    /// Computes the differential uniformity of this function.
    ///
    /// See [`crate::invariants::differential_uniformity`].
    pub fn differential_uniformity(&self) -> u64 {
        crate::invariants::differential_uniformity(self)
    }

    /// Returns `true` if this function is almost-perfect-nonlinear.
    ///
    /// See [`crate::invariants::is_apn`].
    pub fn is_apn(&self) -> bool {
        crate::invariants::is_apn(self)
    }

    /// Classifies this function as k-to-1, or returns
    /// [`crate::invariants::NOT_K_TO_1`].
    ///
    /// See [`crate::invariants::k_to_1`].
    pub fn k_to_1(&self) -> i64 {
        crate::invariants::k_to_1(self)
    }

    /// Computes the algebraic degree of this function.
    ///
    /// See [`crate::invariants::algebraic_degree`].
    pub fn algebraic_degree(&self) -> u32 {
        crate::invariants::algebraic_degree(self)
    }

    /// Returns `true` if this function has algebraic degree exactly 2.
    ///
    /// See [`crate::invariants::is_quadratic`].
    pub fn is_quadratic(&self) -> bool {
        crate::invariants::is_quadratic(self)
    }

    /// Decides whether this function equals `a * x^d + b` for some `a`,
    /// `b` and `d` in the field `polynomial` defines.
    ///
    /// See [`crate::invariants::is_monomial`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionUnsupported`] if this function's
    /// dimension exceeds 16.
    pub fn is_monomial(&self, polynomial: Polynomial) -> Result<bool, Error> {
        let field = crate::gf::GfField::new(polynomial.dimension().get(), polynomial.bits())?;
        crate::invariants::is_monomial(self, &field)
    }

    /// Computes the ortho-derivative differential spectrum (ODDS) of this
    /// function.
    ///
    /// See [`crate::spectra::differential_spectrum`].
    pub fn compute_differential_spectrum(&self) -> Vec<u64> {
        crate::spectra::differential_spectrum(self)
    }

    /// Computes the ortho-derivative extended Walsh spectrum (ODWS) of
    /// this function.
    ///
    /// See [`crate::spectra::extended_walsh_spectrum`].
    pub fn compute_extended_walsh_spectrum(&self) -> Vec<u64> {
        crate::spectra::extended_walsh_spectrum(self)
    }

    /// Attempts to build this function's canonical-triplicate
    /// decomposition.
    ///
    /// See [`crate::triplicate::Triplicate::build`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionUnsupported`] or
    /// [`Error::NotCanonicalTriplicate`] per
    /// [`crate::triplicate::Triplicate::build`].
    pub fn canonical_triplicate(&self) -> Result<crate::triplicate::Triplicate<'a>, Error> {
        crate::triplicate::Triplicate::build(self)
    }
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf::GfField;

    fn cube_n4() -> Vec<u64> {
        let field = GfField::standard(4).unwrap();
        (0..16u64).map(|x| field.pow(x, 3)).collect()
    }

    #[test]
    fn inherent_methods_match_free_functions() {
        let dim = Dimension::new(4).unwrap();
        let values = cube_n4();
        let tt = TruthTable::new(dim, &values).unwrap();

        assert_eq!(tt.differential_uniformity(), crate::differential_uniformity(&tt));
        assert_eq!(tt.is_apn(), crate::is_apn(&tt));
        assert_eq!(tt.k_to_1(), crate::k_to_1(&tt));
        assert_eq!(tt.algebraic_degree(), crate::algebraic_degree(&tt));
        assert_eq!(tt.is_quadratic(), crate::is_quadratic(&tt));

        let triplicate = tt.canonical_triplicate().unwrap();
        assert!(triplicate.check_linear_equivalence(&triplicate));
    }
}
