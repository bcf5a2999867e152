//! Cryptographic invariants of a vectorial Boolean function: differential
//! uniformity, APN, k-to-1, algebraic degree, quadratic, monomial.

use fixedbitset::FixedBitSet;

use crate::{anf::mobius_transform_bitset_inplace, gf::GfField, truth_table::TruthTable, Error};

/// Sentinel returned by [`k_to_1`] when `f` is not uniformly k-to-1 for any
/// `k`.
pub const NOT_K_TO_1: i64 = -1;

/// Computes the differential uniformity of `f`:
/// `max_{a != 0, b} #{x : f(x) ^ f(x ^ a) == b}`.
///
/// Avoids materializing a full `2^n x 2^n` difference-distribution table:
/// a single length-`2^n` counter buffer is reused across every `a`.
pub fn differential_uniformity(f: &TruthTable<'_>) -> u64 {
    let size = f.len();
    let mut counts = vec![0u64; size];
    let mut max = 0u64;

    for a in 1..size {
        counts.iter_mut().for_each(|c| *c = 0);
        for x in 0..size {
            let diff = (f.eval(x) ^ f.eval(x ^ a)) as usize;
            counts[diff] += 1;
            if counts[diff] > max {
                max = counts[diff];
            }
        }
    }

    max
}

/// Returns `true` if `f` is almost-perfect-nonlinear, i.e. its differential
/// uniformity equals 2.
pub fn is_apn(f: &TruthTable<'_>) -> bool {
    differential_uniformity(f) == 2
}

/// Classifies `f` as k-to-1: `f(0) == 0` uniquely, and every nonzero output
/// that is attained is attained by exactly `k` distinct inputs.
///
/// Returns [`NOT_K_TO_1`] if this does not hold for any single `k`.
pub fn k_to_1(f: &TruthTable<'_>) -> i64 {
    let size = f.len();
    let mut freq = vec![0u64; size];
    for x in 0..size {
        freq[f.eval(x) as usize] += 1;
    }

    if freq[0] != 1 || f.eval(0) != 0 {
        return NOT_K_TO_1;
    }

    let mut k: Option<u64> = None;
    for &count in &freq[1..] {
        if count == 0 {
            continue;
        }
        match k {
            None => k = Some(count),
            Some(existing) if existing != count => return NOT_K_TO_1,
            _ => {}
        }
    }

    k.map(|k| k as i64).unwrap_or(NOT_K_TO_1)
}

/// Extracts coordinate `c` of `f` as a dense bit vector: `bit_c(f(x))` for
/// every `x`.
fn coordinate(f: &TruthTable<'_>, c: u32) -> FixedBitSet {
    let mut bits = FixedBitSet::with_capacity(f.len());
    for x in 0..f.len() {
        bits.set(x, (f.eval(x) >> c) & 1 == 1);
    }
    bits
}

/// Computes the algebraic degree of `f`: the maximum, over all `n`
/// coordinate functions, of the largest Hamming weight of a monomial with
/// nonzero ANF coefficient.
///
/// The all-zero and all-constant functions have degree 0.
pub fn algebraic_degree(f: &TruthTable<'_>) -> u32 {
    let n = f.dimension().get();
    let mut max_degree = 0u32;

    for c in 0..n {
        let mut anf = coordinate(f, c);
        mobius_transform_bitset_inplace(&mut anf);
        for index in anf.ones() {
            let weight = index.count_ones();
            if weight > max_degree {
                max_degree = weight;
            }
        }
    }

    max_degree
}

/// Returns `true` if `f` has algebraic degree exactly 2.
pub fn is_quadratic(f: &TruthTable<'_>) -> bool {
    algebraic_degree(f) == 2
}

/// Decides whether `f(x) = a * x^d + b` for some `a, b` in the field
/// defined by `polynomial` and some exponent `d` in `[0, 2^n - 1)`.
///
/// Requires `n <= 16`; larger dimensions make the exhaustive exponent sweep
/// impractical and are rejected up front.
///
/// # Errors
///
/// Returns [`Error::DimensionUnsupported`] if `n > 16`.
pub fn is_monomial(f: &TruthTable<'_>, field: &GfField) -> Result<bool, Error> {
    let n = f.dimension().get();
    if n > 16 {
        return Err(Error::DimensionUnsupported { dimension: n });
    }

    let size = f.len();
    let b = f.eval(0);

    // Constant function: not representable as a*x^d with a != 0 unless
    // trivially rejected, matching the reference implementation's policy.
    if (1..size).all(|x| f.eval(x) == b) {
        return Ok(false);
    }

    let modulus = field.order() - 1;

    for d in 0..modulus {
        let Some(x) = (1..size as u64).find(|&x| field.pow(x, d) != 0) else {
            continue;
        };

        let x_pow_d = field.pow(x, d);
        let inv_x_pow_d = field.pow(x_pow_d, modulus - 1);
        let a = field.multiply(f.eval(x as usize) ^ b, inv_x_pow_d);

        let matches_all = (0..size as u64).all(|x| {
            let candidate = field.multiply(a, field.pow(x, d)) ^ b;
            candidate == f.eval(x as usize)
        });

        if matches_all {
            return Ok(true);
        }
    }

    Ok(false)
}

// ======================================================================
// TESTS
