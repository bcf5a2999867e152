//! Canonical-triplicate (3-to-1) decomposition check.

use crate::{gf::GfField, truth_table::TruthTable, Error, NotTriplicateReason};

/// A canonical-triplicate decomposition of a validated 3-to-1 truth table.
///
/// Holds the triple table `T` (one row per distinct output: the output and
/// its three preimages) and the output-lookup array `ol`, where
/// `ol[y] == 0` means `y` is not an attained output and `ol[y] == j + 1`
/// means row `j` of `T` has output `y`.
#[derive(Clone, Debug)]
pub struct Triplicate<'a> {
    tt: TruthTable<'a>,
    /// `rows[j] == (output, pre0, pre1, pre2)`.
    rows: Vec<(u64, u64, u64, u64)>,
    ol: Vec<u64>,
}

impl<'a> Triplicate<'a> {
    /// Attempts to build a canonical-triplicate decomposition of `f`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionUnsupported`] if `n` is odd or outside
    /// `4..=20`, and [`Error::NotCanonicalTriplicate`] if `f` fails any of
    /// the canonical-triplicate invariants.
    pub fn build(f: &TruthTable<'a>) -> Result<Self, Error> {
        let n = f.dimension().get();
        if n % 2 != 0 || !(4..=20).contains(&n) {
            return Err(Error::DimensionUnsupported { dimension: n });
        }

        if f.eval(0) != 0 {
            return Err(Error::NotCanonicalTriplicate {
                reason: NotTriplicateReason::ZeroNotFixed,
            });
        }

        let beta = crate::gf::beta(n)?;
        let field = GfField::for_dimension(f.dimension())?;
        let size = f.len();

        let mut visited = vec![false; size];
        let mut rows = Vec::with_capacity((size - 1) / 3);
        let mut ol = vec![0u64; size];

        visited[0] = true;

        for i in 1..size {
            if visited[i] {
                continue;
            }

            let output = f.eval(i);
            if output == 0 {
                return Err(Error::NotCanonicalTriplicate {
                    reason: NotTriplicateReason::TripleNotClosed { input: i as u64 },
                });
            }
            if ol[output as usize] != 0 {
                return Err(Error::NotCanonicalTriplicate {
                    reason: NotTriplicateReason::DuplicateOutput { output },
                });
            }

            let k = field.multiply(i as u64, beta) as usize;
            let third = k ^ i;

            if f.eval(k) != output || f.eval(third) != output {
                return Err(Error::NotCanonicalTriplicate {
                    reason: NotTriplicateReason::TripleNotClosed { input: i as u64 },
                });
            }

            let row_index = rows.len();
            rows.push((output, i as u64, k as u64, third as u64));
            ol[output as usize] = row_index as u64 + 1;

            visited[i] = true;
            visited[k] = true;
            visited[third] = true;
        }

        let expected_rows = (size - 1) / 3;
        if rows.len() != expected_rows {
            return Err(Error::NotCanonicalTriplicate {
                reason: NotTriplicateReason::WrongOutputCount {
                    expected: expected_rows,
                    got: rows.len(),
                },
            });
        }

        Ok(Self {
            tt: *f,
            rows,
            ol,
        })
    }

    /// Returns the dimension `n`.
    pub fn dimension(&self) -> u32 {
        self.tt.dimension().get()
    }

    /// Returns the underlying truth table this decomposition was built
    /// from.
    pub fn truth_table(&self) -> &TruthTable<'a> {
        &self.tt
    }

    /// Returns the number of rows, `(2^n - 1) / 3`.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns row `j` as `(output, pre0, pre1, pre2)`.
    pub fn row(&self, j: usize) -> (u64, u64, u64, u64) {
        self.rows[j]
    }

    /// Returns `1 + row index` whose output is `y`, or `0` if `y` is not an
    /// attained output.
    pub fn output_lookup(&self, y: u64) -> u64 {
        self.ol[y as usize]
    }

    /// Decides whether `self` and `other` are linearly equivalent: whether
    /// linear bijections `L1`, `L2` exist with
    /// `L1(self(L2(x))) = other(x)` for every `x`.
    pub fn check_linear_equivalence(&self, other: &Triplicate<'_>) -> bool {
        crate::equivalence::check_linear_equivalence(self, &self.tt, other, &other.tt)
    }
}

/// Convenience wrapper returning whether `f` is a canonical triplicate,
/// without retaining the decomposition.
pub fn is_canonical_triplicate(f: &TruthTable<'_>) -> bool {
    Triplicate::build(f).is_ok()
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_util, truth_table::Dimension};

    #[test]
    fn cube_n4_is_canonical_triplicate() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();

        let triplicate = Triplicate::build(&tt).unwrap();
        assert_eq!(triplicate.row_count(), 5);

        for j in 0..triplicate.row_count() {
            let (output, p0, p1, p2) = triplicate.row(j);
            assert_eq!(p0 ^ p1, p2);
            assert_eq!(triplicate.output_lookup(output), j as u64 + 1);
        }
    }

    #[test]
    fn identity_n4_is_not_canonical_triplicate() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::identity(4);
        let tt = TruthTable::new(dim, &values).unwrap();
        assert!(!is_canonical_triplicate(&tt));
    }

    #[test]
    fn odd_dimension_is_rejected() {
        let dim = Dimension::new(5).unwrap();
        let values: Vec<u64> = (0..32u64).collect();
        let tt = TruthTable::new(dim, &values).unwrap();
        assert!(matches!(
            Triplicate::build(&tt),
            Err(Error::DimensionUnsupported { dimension: 5 })
        ));
    }
}
