//! Linear-equivalence search for canonical 3-to-1 (triplicate) functions.
//!
//! Decides whether two canonical-triplicate functions `F`, `G` admit linear
//! bijections `L1`, `L2` with `L1(F(L2(x))) = G(x)` for every `x`, by
//! co-building `L1` (mapping `F`'s outputs to `G`'s outputs) and `L2`
//! (mapping `G`'s inputs to `F`'s inputs) triple by triple, with
//! constraint propagation pruning the search at every guess.
//!
//! Grounded directly on `alg1.c` (via
//! `check_lin_eq_2x_uniform_3to1.c`): `combine`/`generate`/`check` mirror
//! the three propagation passes there, and `assign`/`guess` mirror the
//! recursive backtracking structure, minus its single `g_equivalent`
//! global -- here, success is a `bool` returned up the call stack from
//! each frame, and every mutable buffer a branch may change is cloned on
//! descent and dropped on return, so no two branches can observe each
//! other's partial state.

use crate::{triplicate::Triplicate, truth_table::TruthTable};

// ======================================================================
// Plm - PRIVATE

/// A partial linear map as a pair of inverse arrays. Index `0` is always
/// `0` on both sides; elsewhere `0` means "unassigned".
#[derive(Clone)]
struct Plm {
    y: Vec<u64>,
    x: Vec<u64>,
}

impl Plm {
    fn new(size: usize) -> Self {
        Self {
            y: vec![0; size],
            x: vec![0; size],
        }
    }
}

// ======================================================================
// FGuesses - PRIVATE

/// Guess bookkeeping: committed `L1`-side output facts (`values`) and,
/// per fact, whether its `L2`-side triple has also been committed
/// (`configured`).
#[derive(Clone)]
struct FGuesses {
    values: Vec<u64>,
    configured: Vec<bool>,
}

impl FGuesses {
    fn new(size: usize) -> Self {
        Self {
            values: vec![0; size],
            configured: vec![false; size],
        }
    }
}

// ======================================================================
// FUNCTIONS - PRIVATE - configure

/// Writes one of the six `L2` assignments for the guessed pair of rows
/// `(f_row, g_row)`, selected by `cfg` (cyclic-orientation class) and
/// `xymc` (rotation within the class).
fn configure(
    f_ct: &Triplicate<'_>,
    g_ct: &Triplicate<'_>,
    l2: &mut Plm,
    f_row: usize,
    g_row: usize,
    xymc: u8,
    cfg: u8,
) {
    let (_, f0, f1, f2) = f_ct.row(f_row);
    let (_, g0, g1, g2) = g_ct.row(g_row);

    let (a, b, c) = match (cfg, xymc) {
        (1, 0) => (f0, f1, f2),
        (1, 1) => (f1, f2, f0),
        (1, 2) => (f2, f0, f1),
        (2, 0) => (f1, f0, f2),
        (2, 1) => (f2, f1, f0),
        (2, 2) => (f0, f2, f1),
        _ => return,
    };

    l2.y[g0 as usize] = a;
    l2.x[a as usize] = g0;
    l2.y[g1 as usize] = b;
    l2.x[b as usize] = g1;
    l2.y[g2 as usize] = c;
    l2.x[c as usize] = g2;
}

// ======================================================================
// FUNCTIONS - PRIVATE - combine

/// Extends `l2`'s closure with the nine pairwise sums of the newest
/// `G`-side triple (at `xgs[a..a+3]`, where `a = 2^(2*px) - 1`) against
/// every earlier triple, appending the new sums into `xgs` right after
/// the existing entries.
fn combine(l2: &mut Plm, xgs: &mut [u64], px: u32) {
    let a = (1usize << (2 * px)) - 1;
    let b = a + 3;

    const PAIRS: [(usize, usize); 9] = [
        (0, 0),
        (1, 1),
        (2, 2),
        (0, 1),
        (1, 2),
        (2, 0),
        (0, 2),
        (1, 0),
        (2, 1),
    ];

    let mut i = 0;
    while i < a {
        for (slot, &(q1, q2)) in PAIRS.iter().enumerate() {
            let xa = xgs[a + q1];
            let xi = xgs[i + q2];
            let combined = xa ^ xi;
            let sum = l2.y[xa as usize] ^ l2.y[xi as usize];
            l2.y[combined as usize] = sum;
            l2.x[sum as usize] = combined;
            xgs[b + 3 * i + slot] = combined;
        }
        i += 3;
    }
}

// ======================================================================
// FUNCTIONS - PRIVATE - generate

/// Infers new `L1` facts from the `L2` triples written by the most recent
/// [`combine`] call (the range `xgs[2^(2*px)+2 .. 2^(2*(px+1))-1)`,
/// stepping by 3).
///
/// Returns the index, within `fgs`, at which newly-added facts begin --
/// or `0` on contradiction (a zero/nonzero mismatch or a PLM disagreement).
fn generate(
    f: &TruthTable<'_>,
    g: &TruthTable<'_>,
    l1: &mut Plm,
    l2: &Plm,
    fgs: &mut FGuesses,
    xgs: &[u64],
    px: u32,
) -> usize {
    let low = (1usize << (2 * px)) + 2;
    let high = (1usize << (2 * (px + 1))) - 1;

    let mut n = 0;
    while fgs.values[n] != 0 {
        n += 1;
    }
    let start = n;

    let mut i = low;
    while i < high {
        let gval = g.eval(xgs[i] as usize);
        let fval = f.eval(l2.y[xgs[i] as usize] as usize);

        if (fval == 0) != (gval == 0) {
            return 0;
        }
        if l1.x[gval as usize] != 0 && l1.x[gval as usize] != fval {
            return 0;
        }
        if l1.y[fval as usize] != 0 && l1.y[fval as usize] != gval {
            return 0;
        }

        if l1.y[fval as usize] != 0 {
            if let Some(slot) = fgs.values[..n].iter().position(|&v| v == fval) {
                fgs.configured[slot] = true;
            }
        } else {
            fgs.values[n] = fval;
            fgs.configured[n] = true;
            n += 1;
            l1.y[fval as usize] = gval;
            l1.x[gval as usize] = fval;
        }

        i += 3;
    }

    start
}

// ======================================================================
// FUNCTIONS - PRIVATE - check

/// Closes `l1` under XOR: every pair of facts already committed at index
/// `< b` (the established prefix) and every pair involving a fact newly
/// committed at index `>= a` is cross-combined. New combinations that
/// land on both functions' canonical-triplicate outputs become fresh,
/// unconfigured guess points; combinations landing on neither become
/// purely derived (configured) facts. Combinations landing on exactly one
/// are a contradiction.
fn check(f_ct: &Triplicate<'_>, g_ct: &Triplicate<'_>, l1: &mut Plm, fgs: &mut FGuesses, a: usize) -> bool {
    let mut b = 0;
    while fgs.values[b] != 0 {
        b += 1;
    }
    let mut n = b;
    let mut k = b;

    for i in a..b {
        for j in 0..i {
            if !check_pair(f_ct, g_ct, l1, fgs, &mut k, i, j) {
                return false;
            }
        }
        for j in b..n {
            if !check_pair(f_ct, g_ct, l1, fgs, &mut k, i, j) {
                return false;
            }
        }
        n = k;
    }

    true
}

fn check_pair(
    f_ct: &Triplicate<'_>,
    g_ct: &Triplicate<'_>,
    l1: &mut Plm,
    fgs: &mut FGuesses,
    k: &mut usize,
    i: usize,
    j: usize,
) -> bool {
    let f = fgs.values[i] ^ fgs.values[j];
    let gv = l1.y[fgs.values[i] as usize] ^ l1.y[fgs.values[j] as usize];

    if (f == 0) != (gv == 0) {
        return false;
    }
    if l1.x[gv as usize] != 0 && l1.x[gv as usize] != f {
        return false;
    }
    if l1.y[f as usize] != 0 && l1.y[f as usize] != gv {
        return false;
    }

    if l1.y[f as usize] == 0 && f != 0 {
        let f_is_ct_output = f_ct.output_lookup(f) != 0;
        let g_is_ct_output = g_ct.output_lookup(gv) != 0;

        if f_is_ct_output && g_is_ct_output {
            fgs.values[*k] = f;
            *k += 1;
        } else if !f_is_ct_output && !g_is_ct_output {
            fgs.values[*k] = f;
            fgs.configured[*k] = true;
            *k += 1;
        } else {
            return false;
        }

        l1.y[f as usize] = gv;
        l1.x[gv as usize] = f;
    }

    true
}

// ======================================================================
// FUNCTIONS - PRIVATE - assign / guess

/// Tries each of the three `xymc` rotations for the guessed pair of rows
/// `(f_row, g_row)` under orientation class `cfg`: configure `L2`,
/// propagate with [`combine`]/[`generate`]/[`check`], and recurse into
/// [`guess`] on success.
#[allow(clippy::too_many_arguments)]
fn assign(
    f: &TruthTable<'_>,
    g: &TruthTable<'_>,
    f_ct: &Triplicate<'_>,
    g_ct: &Triplicate<'_>,
    l1: &Plm,
    mut l2: Plm,
    f_row: usize,
    g_row: usize,
    fgs: &FGuesses,
    xgs: &mut Vec<u64>,
    px: u32,
    cfg: u8,
) -> bool {
    for xymc in 0..3u8 {
        configure(f_ct, g_ct, &mut l2, f_row, g_row, xymc, cfg);

        let mut l1_branch = l1.clone();
        let mut l2_branch = l2.clone();
        let mut fgs_branch = fgs.clone();

        combine(&mut l2_branch, xgs, px);
        let start = generate(f, g, &mut l1_branch, &l2_branch, &mut fgs_branch, xgs, px);

        if start != 0
            && check(f_ct, g_ct, &mut l1_branch, &mut fgs_branch, start)
            && guess(
                f,
                g,
                f_ct,
                g_ct,
                l1_branch,
                l2_branch,
                fgs_branch,
                xgs,
                px + 1,
                cfg,
            )
        {
            return true;
        }
    }

    false
}

/// Finds the smallest fact lacking a committed `L2` triple and either
/// extends it (if its `L1` image is already known) or opens a fresh
/// root guess pairing an unmapped row of `F` against each unmapped row
/// of `G` in turn. Returns `true` as soon as every fact has a committed
/// `L2` triple -- a complete, consistent `(L1, L2)` pair has been found.
#[allow(clippy::too_many_arguments)]
fn guess(
    f: &TruthTable<'_>,
    g: &TruthTable<'_>,
    f_ct: &Triplicate<'_>,
    g_ct: &Triplicate<'_>,
    l1: Plm,
    l2: Plm,
    fgs: FGuesses,
    xgs: &mut Vec<u64>,
    px: u32,
    cfg: u8,
) -> bool {
    let size = f.len();

    let pf = match (0..size - 1).find(|&i| !fgs.configured[i]) {
        Some(pf) => pf,
        None => return true,
    };

    let n_off = (1usize << (2 * px)) - 1;

    if fgs.values[pf] != 0 {
        let f_row = (f_ct.output_lookup(fgs.values[pf]) - 1) as usize;
        let g_row = (g_ct.output_lookup(l1.y[fgs.values[pf] as usize]) - 1) as usize;

        let mut fgs_branch = fgs.clone();
        fgs_branch.configured[pf] = true;

        let (_, p0, p1, p2) = g_ct.row(g_row);
        xgs[n_off] = p0;
        xgs[n_off + 1] = p1;
        xgs[n_off + 2] = p2;

        assign(
            f, g, f_ct, g_ct, &l1, l2, f_row, g_row, &fgs_branch, xgs, px, cfg,
        )
    } else {
        let mut f_row = 0;
        while f_row < f_ct.row_count() && l1.y[f_ct.row(f_row).0 as usize] != 0 {
            f_row += 1;
        }

        let mut g_row = 0;
        while g_row < g_ct.row_count() && l1.x[g_ct.row(g_row).0 as usize] != 0 {
            g_row += 1;
        }

        while g_row < g_ct.row_count() {
            let mut l1_branch = l1.clone();
            let mut fgs_branch = fgs.clone();

            let f_out = f_ct.row(f_row).0;
            let g_out = g_ct.row(g_row).0;
            l1_branch.y[f_out as usize] = g_out;
            l1_branch.x[g_out as usize] = f_out;
            fgs_branch.values[pf] = f_out;

            if check(f_ct, g_ct, &mut l1_branch, &mut fgs_branch, pf) {
                fgs_branch.configured[pf] = true;

                let (_, p0, p1, p2) = g_ct.row(g_row);
                xgs[n_off] = p0;
                xgs[n_off + 1] = p1;
                xgs[n_off + 2] = p2;

                if assign(
                    f, g, f_ct, g_ct, &l1_branch, l2.clone(), f_row, g_row, &fgs_branch, xgs, px,
                    cfg,
                ) {
                    return true;
                }
            }

            g_row += 1;
            while g_row < g_ct.row_count() && l1.x[g_ct.row(g_row).0 as usize] != 0 {
                g_row += 1;
            }
        }

        false
    }
}

// ======================================================================
// FUNCTIONS - PUBLIC

/// Decides whether `f_ct` and `g_ct` -- canonical-triplicate
/// decompositions of `F` and `G` -- are linearly equivalent: whether
/// linear bijections `L1`, `L2` exist with `L1(F(L2(x))) = G(x)` for
/// every `x`.
///
/// Both functions must share the same dimension; mismatched dimensions
/// are reported as not equivalent.
pub fn check_linear_equivalence(
    f_ct: &Triplicate<'_>,
    f: &TruthTable<'_>,
    g_ct: &Triplicate<'_>,
    g: &TruthTable<'_>,
) -> bool {
    if f.dimension() != g.dimension() {
        log::debug!(
            "check_linear_equivalence: dimension mismatch ({} vs {})",
            f.dimension(),
            g.dimension()
        );
        return false;
    }

    let size = f.len();
    let mut xgs = vec![0u64; size];

    for g_row in 0..g_ct.row_count() {
        log::trace!("check_linear_equivalence: trying f_row=0 against g_row={g_row}");
        let f_row = 0;
        let mut l1 = Plm::new(size);
        let l2 = Plm::new(size);
        let mut fgs = FGuesses::new(size);

        let f_out = f_ct.row(f_row).0;
        let g_out = g_ct.row(g_row).0;
        l1.y[f_out as usize] = g_out;
        l1.x[g_out as usize] = f_out;
        fgs.values[0] = f_out;
        fgs.configured[0] = true;

        let (_, p0, p1, p2) = g_ct.row(g_row);
        xgs[0] = p0;
        xgs[1] = p1;
        xgs[2] = p2;

        if assign(
            f,
            g,
            f_ct,
            g_ct,
            &l1,
            l2.clone(),
            f_row,
            g_row,
            &fgs,
            &mut xgs,
            0,
            1,
        ) {
            log::debug!("check_linear_equivalence: found L1/L2 pair (g_row={g_row}, cfg=1)");
            return true;
        }
        if assign(
            f, g, f_ct, g_ct, &l1, l2, f_row, g_row, &fgs, &mut xgs, 0, 2,
        ) {
            log::debug!("check_linear_equivalence: found L1/L2 pair (g_row={g_row}, cfg=2)");
            return true;
        }
    }

    log::debug!("check_linear_equivalence: no equivalence found");
    false
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_util, truth_table::Dimension};

    #[test]
    fn cube_is_self_equivalent() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();
        let ct = Triplicate::build(&tt).unwrap();

        assert!(check_linear_equivalence(&ct, &tt, &ct, &tt));
    }

    #[test]
    fn affine_shifted_cube_is_equivalent() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();
        let ct = Triplicate::build(&tt).unwrap();

        let shifted = test_util::scaled_cube(4, 5, 9);
        let shifted_tt = TruthTable::new(dim, &shifted).unwrap();
        let shifted_ct = Triplicate::build(&shifted_tt).unwrap();

        assert!(check_linear_equivalence(&ct, &tt, &shifted_ct, &shifted_tt));
    }

    #[test]
    fn mismatched_dimensions_are_not_equivalent() {
        let dim4 = Dimension::new(4).unwrap();
        let values4 = test_util::cube(4);
        let tt4 = TruthTable::new(dim4, &values4).unwrap();
        let ct4 = Triplicate::build(&tt4).unwrap();

        let dim6 = Dimension::new(6).unwrap();
        let values6 = test_util::cube(6);
        let tt6 = TruthTable::new(dim6, &values6).unwrap();
        let ct6 = Triplicate::build(&tt6).unwrap();

        assert!(!check_linear_equivalence(&ct4, &tt4, &ct6, &tt6));
    }

    #[test]
    fn linear_equivalence_is_symmetric_for_self_pair() {
        let dim = Dimension::new(4).unwrap();
        let values = test_util::cube(4);
        let tt = TruthTable::new(dim, &values).unwrap();
        let ct = Triplicate::build(&tt).unwrap();

        assert_eq!(
            check_linear_equivalence(&ct, &tt, &ct, &tt),
            check_linear_equivalence(&ct, &tt, &ct, &tt)
        );
    }
}
