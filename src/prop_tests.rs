//! Property-based tests for the invariants this crate claims hold for
//! every input, not just the literal fixtures exercised elsewhere.

use proptest::prelude::*;

use crate::{
    anf::mobius_transform_inplace,
    gf::GfField,
    test_util,
    truth_table::{Dimension, TruthTable},
};

proptest! {
    /// The Mobius transform is its own inverse for any Boolean vector.
    #[test]
    fn mobius_transform_is_involutive(bits in proptest::collection::vec(any::<bool>(), 1..=256)) {
        let n = (bits.len() as f64).log2().ceil() as u32;
        let size = 1usize << n;
        let mut f = vec![false; size];
        f[..bits.len()].copy_from_slice(&bits);

        let original = f.clone();
        mobius_transform_inplace(&mut f);
        mobius_transform_inplace(&mut f);
        prop_assert_eq!(f, original);
    }

    /// `GfField::standard` rebuilds identical log/antilog tables on every
    /// call for a given dimension: `pow` and `multiply` are deterministic.
    #[test]
    fn gf_field_tables_are_deterministic(n in 2u32..=10, x in 0u64..1024, y in 0u64..1024) {
        let field_a = GfField::standard(n).unwrap();
        let field_b = GfField::standard(n).unwrap();
        let order = field_a.order();
        let x = x % order;
        let y = y % order;

        prop_assert_eq!(field_a.multiply(x, y), field_b.multiply(x, y));
        prop_assert_eq!(field_a.pow(x, 5), field_b.pow(x, 5));
    }

    /// Linear equivalence is symmetric: if `F` is equivalent to `G` then
    /// `G` is equivalent to `F`.
    #[test]
    fn linear_equivalence_is_symmetric(scale_in in 1u64..16, scale_out in 1u64..16) {
        let dim = Dimension::new(4).unwrap();
        let f_values = test_util::cube(4);
        let f = TruthTable::new(dim, &f_values).unwrap();

        let g_values = test_util::scaled_cube(4, scale_in, scale_out);
        let g = TruthTable::new(dim, &g_values).unwrap();

        prop_assert_eq!(
            crate::check_lin_eq_2x_uniform_3to1(&f, &g),
            crate::check_lin_eq_2x_uniform_3to1(&g, &f)
        );
    }

    /// Every truth-table entry GfField::pow produces for a nonzero
    /// exponent is itself a valid element of the field (strictly below
    /// its order).
    #[test]
    fn gf_pow_stays_in_range(n in 2u32..=12, x in 1u64..4096, e in 0u64..20) {
        let field = GfField::standard(n).unwrap();
        let order = field.order();
        let x = x % order;
        prop_assert!(field.pow(x, e) < order);
    }
}
