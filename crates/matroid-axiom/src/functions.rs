use std::collections::BTreeMap;

use matroid_core::sets::{power_set, tabulate, with_element};
use matroid_core::{Element, GirthFn, Set};
use serde::{Deserialize, Serialize};

use crate::reject;

/// Sub-conditions of the rank-function axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankAssumptions {
    /// Skip (R1): 0 ≤ r(X) ≤ |X|.
    pub bounded: bool,
    /// Skip (R2): X ⊆ Y ⇒ r(X) ≤ r(Y).
    pub monotone: bool,
    /// Skip (R3): r(X ∪ Y) + r(X ∩ Y) ≤ r(X) + r(Y).
    pub submodular: bool,
}

/// Looks `subset` up in a precomputed table, evaluating `f` for anything the
/// table does not hold.
fn lookup<T, V, F>(table: &BTreeMap<Set<T>, V>, f: &F, subset: &Set<T>) -> V
where
    T: Element,
    V: Clone,
    F: Fn(&Set<T>) -> V + ?Sized,
{
    table.get(subset).cloned().unwrap_or_else(|| f(subset))
}

/// Checks the rank-function axiom.
///
/// Monotonicity and submodularity are verified in their local forms
/// (`X ⊆ X ∪ {e}` and `X ∪ {e}`, `X ∪ {f}` over `X`), which are equivalent
/// to the global conditions for set functions on a finite lattice.
pub fn satisfies_rank_function_axiom<T, F>(
    ground: &Set<T>,
    rank: &F,
    assumptions: &RankAssumptions,
) -> bool
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    const AXIOM: &str = "rank-function";
    let table = tabulate(ground, |subset| rank(subset));
    let r = |subset: &Set<T>| lookup(&table, rank, subset);

    if !assumptions.bounded && table.iter().any(|(subset, value)| *value > subset.len()) {
        return reject(AXIOM, "bounded");
    }

    if !assumptions.monotone {
        for (subset, value) in &table {
            if ground
                .difference(subset)
                .any(|e| r(&with_element(subset, e)) < *value)
            {
                return reject(AXIOM, "monotone");
            }
        }
    }

    if !assumptions.submodular && !locally_submodular(ground, &table, &r) {
        return reject(AXIOM, "submodular");
    }
    true
}

/// `f(X ∪ e) + f(X ∪ g) ≥ f(X ∪ {e, g}) + f(X)` for all X and distinct e, g ∉ X.
fn locally_submodular<T, R>(ground: &Set<T>, table: &BTreeMap<Set<T>, usize>, f: &R) -> bool
where
    T: Element,
    R: Fn(&Set<T>) -> usize,
{
    for (subset, value) in table {
        let outside: Vec<&T> = ground.difference(subset).collect();
        for (idx, e) in outside.iter().enumerate() {
            let with_e = with_element(subset, e);
            for g in &outside[idx + 1..] {
                let with_g = with_element(subset, g);
                let with_both = with_element(&with_e, g);
                if f(&with_e) + f(&with_g) < f(&with_both) + value {
                    return false;
                }
            }
        }
    }
    true
}

/// Sub-conditions of the nullity-function axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullityAssumptions {
    /// Skip (N1): 0 ≤ n(X) ≤ |X|.
    pub bounded: bool,
    /// Skip (N2): X ⊆ Y ⇒ n(Y) − n(X) ≤ |Y − X|.
    pub increment_bounded: bool,
    /// Skip (N3): n(X) + n(Y) ≤ n(X ∪ Y) + n(X ∩ Y).
    pub supermodular: bool,
}

/// Checks the nullity-function axiom.
pub fn satisfies_nullity_function_axiom<T, F>(
    ground: &Set<T>,
    nullity: &F,
    assumptions: &NullityAssumptions,
) -> bool
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    const AXIOM: &str = "nullity-function";
    let table = tabulate(ground, |subset| nullity(subset));
    let n = |subset: &Set<T>| lookup(&table, nullity, subset);

    if !assumptions.bounded && table.iter().any(|(subset, value)| *value > subset.len()) {
        return reject(AXIOM, "bounded");
    }

    // Single-element steps telescope to the general inequality.
    if !assumptions.increment_bounded {
        for (subset, value) in &table {
            if ground
                .difference(subset)
                .any(|e| n(&with_element(subset, e)) > value + 1)
            {
                return reject(AXIOM, "increment-bounded");
            }
        }
    }

    if !assumptions.supermodular {
        // n is supermodular exactly when |X| − n(X) is submodular; |X| − n(X)
        // stays non-negative once (N1) holds, so saturate for the skipped case.
        let complement_table: BTreeMap<Set<T>, usize> = table
            .iter()
            .map(|(subset, value)| (subset.clone(), subset.len().saturating_sub(*value)))
            .collect();
        let r = |subset: &Set<T>| subset.len().saturating_sub(n(subset));
        if !locally_submodular(ground, &complement_table, &r) {
            return reject(AXIOM, "supermodular");
        }
    }
    true
}

/// Sub-conditions of the closure axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureAssumptions {
    /// Skip (CL1): X ⊆ cl(X).
    pub increasing: bool,
    /// Skip (CL2): X ⊆ cl(Y) ⇒ cl(X) ⊆ cl(Y).
    pub monotone: bool,
    /// Skip (CL3): the Mac Lane–Steinitz exchange property.
    pub mac_lane_steinitz: bool,
}

/// Checks the closure axiom.
///
/// (CL2) is verified as idempotence plus single-element monotonicity, which
/// together with (CL1) is equivalent to it. (CL3) reads: if
/// `y ∈ cl(X ∪ {x}) − cl(X)` then `x ∈ cl(X ∪ {y}) − cl(X)`.
pub fn satisfies_closure_axiom<T, F>(
    ground: &Set<T>,
    closure: &F,
    assumptions: &ClosureAssumptions,
) -> bool
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    const AXIOM: &str = "closure-function";
    let table = tabulate(ground, |subset| closure(subset));
    let cl = |subset: &Set<T>| lookup(&table, closure, subset);

    if table.values().any(|closed| !closed.is_subset(ground)) {
        return reject(AXIOM, "within-ground-set");
    }

    if !assumptions.increasing && table.iter().any(|(subset, closed)| !subset.is_subset(closed)) {
        return reject(AXIOM, "increasing");
    }

    if !assumptions.monotone {
        for (subset, closed) in &table {
            if cl(closed) != *closed {
                return reject(AXIOM, "idempotent");
            }
            if ground
                .difference(subset)
                .any(|e| !closed.is_subset(&cl(&with_element(subset, e))))
            {
                return reject(AXIOM, "monotone");
            }
        }
    }

    if !assumptions.mac_lane_steinitz {
        for (subset, closed) in &table {
            for x in ground {
                let through_x = cl(&with_element(subset, x));
                for y in through_x.difference(closed) {
                    let through_y = cl(&with_element(subset, y));
                    if !through_y.contains(x) || closed.contains(x) {
                        return reject(AXIOM, "mac-lane-steinitz");
                    }
                }
            }
        }
    }
    true
}

/// Sub-conditions of the girth-function axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GirthAssumptions {
    /// Skip (G1): g(X) < ∞ ⇒ some Y ⊆ X has g(X) = g(Y) = |Y|.
    pub decrementable: bool,
    /// Skip (G2): X ⊆ Y ⇒ g(X) ≥ g(Y).
    pub antitone: bool,
    /// Skip (G3): finiteness of g((X ∪ Y) − {e}) for distinct circuits X, Y.
    pub finite_elimination: bool,
}

/// Checks the girth-function axiom, where `None` stands for ∞.
///
/// Girth is a checker-only axiom system: no payload carries it.
pub fn satisfies_girth_function_axiom<T: Element>(
    ground: &Set<T>,
    girth: &GirthFn<T>,
    assumptions: &GirthAssumptions,
) -> bool {
    const AXIOM: &str = "girth-function";
    let table = tabulate(ground, |subset| girth(subset));
    let g = |subset: &Set<T>| lookup(&table, girth.as_ref(), subset);

    if !assumptions.decrementable {
        for (subset, value) in &table {
            let Some(length) = value else { continue };
            let witnessed = power_set(subset)
                .iter()
                .any(|inner| inner.len() == *length && g(inner) == Some(*length));
            if !witnessed {
                return reject(AXIOM, "decrementable");
            }
        }
    }

    if !assumptions.antitone {
        for (subset, value) in &table {
            if ground
                .difference(subset)
                .any(|e| exceeds(g(&with_element(subset, e)), *value))
            {
                return reject(AXIOM, "antitone");
            }
        }
    }

    if !assumptions.finite_elimination {
        let cycles: Vec<&Set<T>> = table
            .iter()
            .filter(|(subset, value)| **value == Some(subset.len()))
            .map(|(subset, _)| subset)
            .collect();
        for (idx, first) in cycles.iter().enumerate() {
            for second in &cycles[idx + 1..] {
                let join: Set<T> = first.union(second).cloned().collect();
                for shared in first.intersection(second) {
                    let mut remainder = join.clone();
                    remainder.remove(shared);
                    if g(&remainder).is_none() {
                        return reject(AXIOM, "finite-elimination");
                    }
                }
            }
        }
    }
    true
}

/// Whether girth `a` is strictly greater than `b`, with `None` as ∞.
fn exceeds(a: Option<usize>, b: Option<usize>) -> bool {
    match (a, b) {
        (None, None) => false,
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => a > b,
    }
}
