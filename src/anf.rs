//! Möbius transform: in-place truth-table to algebraic-normal-form (ANF)
//! conversion.

use fixedbitset::FixedBitSet;

/// Applies the Möbius transform in place to `f`, converting a Boolean
/// function given by its truth table into its algebraic normal form,
/// indexed by monomial support.
///
/// Runs in `O(n * 2^n)` for `f.len() == 2^n`. Involutive: applying this
/// function twice to the same vector restores the original input.
///
/// # Panics
///
/// Panics if `f.len()` is not a power of two.
pub fn mobius_transform_inplace(f: &mut [bool]) {
    let len = f.len();
    assert!(len.is_power_of_two(), "length must be a power of two");

    let mut step = 1;
    while step < len {
        let mut j = 0;
        while j < len {
            for i in j..j + step {
                f[i + step] ^= f[i];
            }
            j += step * 2;
        }
        step *= 2;
    }
}

/// [`FixedBitSet`]-backed variant of [`mobius_transform_inplace`], matching
/// the bit-vector representation [`crate::invariants`] extracts from a
/// truth table's coordinate functions.
pub fn mobius_transform_bitset_inplace(f: &mut FixedBitSet) {
    let len = f.len();
    assert!(len.is_power_of_two(), "length must be a power of two");

    let mut step = 1;
    while step < len {
        let mut j = 0;
        while j < len {
            for i in j..j + step {
                if f[i] {
                    let bit = f[i + step] ^ true;
                    f.set(i + step, bit);
                }
            }
            j += step * 2;
        }
        step *= 2;
    }
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_involutive() {
        let original = vec![true, false, true, true, false, false, true, false];
        let mut f = original.clone();
        mobius_transform_inplace(&mut f);
        mobius_transform_inplace(&mut f);
        assert_eq!(f, original);
    }

    #[test]
    fn zero_vector_is_fixed_point() {
        let mut f = vec![false; 16];
        mobius_transform_inplace(&mut f);
        assert!(f.iter().all(|&b| !b));
    }

    #[test]
    fn bitset_variant_matches_bool_variant() {
        let bits = [true, false, true, true, false, false, true, false];
        let mut a = bits.to_vec();
        mobius_transform_inplace(&mut a);

        let mut b = FixedBitSet::with_capacity(bits.len());
        for (i, &v) in bits.iter().enumerate() {
            b.set(i, v);
        }
        mobius_transform_bitset_inplace(&mut b);

        for (i, &v) in a.iter().enumerate() {
            assert_eq!(b[i], v, "mismatch at index {i}");
        }
    }
}
