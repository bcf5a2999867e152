//! Ortho-derivative construction and its two spectra: ODDS (differential
//! spectrum) and ODWS (extended Walsh spectrum).
//!
//! Grounded on the ortho-derivative work of Nikolay Stoyanov Kaleyski
//! (`https://git.app.uib.no/Nikolay.Kaleyski/vectorial-boolean-functions`),
//! whose approach the reference implementation this crate is modeled on
//! adapts directly.

use crate::truth_table::TruthTable;

/// Bitwise-AND-then-parity inner product of `a` and `b`.
fn dot_bits(a: u64, b: u64) -> bool {
    (a & b).count_ones() % 2 == 1
}

/// The ortho-derivative of `f`, as an owned truth table of the same length.
///
/// `od(0) == 0`. For `a != 0`, `od(a)` is the smallest nonzero value `v`
/// such that `dot_bits(v, f(0) ^ f(a) ^ f(x) ^ f(x^a)) == false` for every
/// `x`. If no such value exists, `od(a) = 0`.
pub fn orthoderivative(f: &TruthTable<'_>) -> Vec<u64> {
    let size = f.len();
    let mut od = vec![0u64; size];

    for a in 1..size {
        for candidate in 1..size as u64 {
            let is_orthogonal = (0..size).all(|x| {
                let derivative = f.eval(0) ^ f.eval(a) ^ f.eval(x) ^ f.eval(x ^ a);
                !dot_bits(candidate, derivative)
            });
            if is_orthogonal {
                od[a] = candidate;
                break;
            }
        }
    }

    od
}

/// Computes the ortho-derivative differential spectrum (ODDS) of `f`.
///
/// Returns a histogram of length `f.len() + 1`: `result[m]` is the number
/// of `(a, value)` pairs, over all `a != 0`, for which exactly `m` inputs
/// `x` share the same `od(x) ^ od(x^a)`.
pub fn differential_spectrum(f: &TruthTable<'_>) -> Vec<u64> {
    let od = orthoderivative(f);
    let size = od.len();
    let mut spectrum = vec![0u64; size + 1];
    let mut solutions = vec![0u64; size];

    for a in 1..size {
        solutions.iter_mut().for_each(|s| *s = 0);
        for x in 0..size {
            let hit = (od[x] ^ od[x ^ a]) as usize;
            solutions[hit] += 1;
        }
        for &freq in &solutions {
            if (freq as usize) <= size {
                spectrum[freq as usize] += 1;
            }
        }
    }

    spectrum
}

/// Computes the signed Walsh transform coefficient of `f` at `(a, b)`.
fn walsh_transform(f: &[u64], a: u64, b: u64) -> i64 {
    let mut sum = 0i64;
    for (x, &value) in f.iter().enumerate() {
        let exponent = dot_bits(a, x as u64) ^ dot_bits(b, value);
        sum += if exponent { -1 } else { 1 };
    }
    sum
}

/// Computes the ortho-derivative extended Walsh spectrum (ODWS) of `f`.
///
/// Returns a histogram of length `f.len() + 1`: `result[w]` is the number
/// of `(a, b)` pairs, with `b != 0`, whose Walsh coefficient of `od` has
/// absolute value `w`.
pub fn extended_walsh_spectrum(f: &TruthTable<'_>) -> Vec<u64> {
    let od = orthoderivative(f);
    let size = od.len();
    let mut spectrum = vec![0u64; size + 1];

    for a in 0..size as u64 {
        for b in 1..size as u64 {
            let wc = walsh_transform(&od, a, b);
            let abs_wc = wc.unsigned_abs() as usize;
            if abs_wc <= size {
                spectrum[abs_wc] += 1;
            }
        }
    }

    spectrum
}

// ======================================================================
// TESTS
