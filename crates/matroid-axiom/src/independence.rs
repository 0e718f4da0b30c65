use matroid_core::sets::{all_within, is_proper_subset, with_element, without_element};
use matroid_core::{Element, Family, Set};
use serde::{Deserialize, Serialize};

use crate::reject;

/// Sub-conditions of the independent-set axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndependentAssumptions {
    /// Skip (I1): ∅ ∈ Is.
    pub has_empty_set: bool,
    /// Skip (I2): subsets of independent sets are independent.
    pub hereditary: bool,
    /// Skip (I3): the augmentation property.
    pub augmentation: bool,
}

/// Checks the independent-set axiom.
///
/// (I1) ∅ ∈ Is; (I2) I ⊆ J ∈ Is ⇒ I ∈ Is; (I3) I, J ∈ Is with |I| < |J| ⇒
/// some e ∈ J − I has I ∪ {e} ∈ Is.
pub fn satisfies_independent_axiom<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
    assumptions: &IndependentAssumptions,
) -> bool {
    const AXIOM: &str = "independent-sets";
    if !all_within(ground, independent_sets) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.has_empty_set && !independent_sets.contains(&Set::new()) {
        return reject(AXIOM, "has-empty-set");
    }

    // Removing one element at a time reaches every subset because each
    // shrunken set is itself checked.
    if !assumptions.hereditary {
        let hereditary = independent_sets.iter().all(|independent| {
            independent
                .iter()
                .all(|element| independent_sets.contains(&without_element(independent, element)))
        });
        if !hereditary {
            return reject(AXIOM, "hereditary");
        }
    }

    if !assumptions.augmentation {
        for smaller in independent_sets {
            for larger in independent_sets.iter().filter(|j| j.len() > smaller.len()) {
                let augmentable = larger
                    .difference(smaller)
                    .any(|e| independent_sets.contains(&with_element(smaller, e)));
                if !augmentable {
                    return reject(AXIOM, "augmentation");
                }
            }
        }
    }
    true
}

/// Sub-conditions of the dependent-set axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentAssumptions {
    /// Skip (D1): ∅ ∉ Ds.
    pub lacks_empty_set: bool,
    /// Skip (D2): supersets of dependent sets are dependent.
    pub superset_closed: bool,
    /// Skip (D3): the intersection/elimination property.
    pub elimination: bool,
}

/// Checks the dependent-set axiom.
///
/// (D1) ∅ ∉ Ds; (D2) D ⊆ D' ⊆ E with D ∈ Ds ⇒ D' ∈ Ds; (D3) for distinct
/// D1, D2 ∈ Ds, either D1 ∩ D2 ∈ Ds or (D1 ∪ D2) − {e} ∈ Ds for every e ∈ E.
pub fn satisfies_dependent_axiom<T: Element>(
    ground: &Set<T>,
    dependent_sets: &Family<T>,
    assumptions: &DependentAssumptions,
) -> bool {
    const AXIOM: &str = "dependent-sets";
    if !all_within(ground, dependent_sets) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.lacks_empty_set && dependent_sets.contains(&Set::new()) {
        return reject(AXIOM, "lacks-empty-set");
    }

    if !assumptions.superset_closed {
        let closed = dependent_sets.iter().all(|dependent| {
            ground
                .difference(dependent)
                .all(|e| dependent_sets.contains(&with_element(dependent, e)))
        });
        if !closed {
            return reject(AXIOM, "superset-closed");
        }
    }

    if !assumptions.elimination {
        let members: Vec<&Set<T>> = dependent_sets.iter().collect();
        for (idx, first) in members.iter().enumerate() {
            for second in &members[idx + 1..] {
                let meet: Set<T> = first.intersection(second).cloned().collect();
                if dependent_sets.contains(&meet) {
                    continue;
                }
                let join: Set<T> = first.union(second).cloned().collect();
                if ground
                    .iter()
                    .any(|e| !dependent_sets.contains(&without_element(&join, e)))
                {
                    return reject(AXIOM, "elimination");
                }
            }
        }
    }
    true
}

/// Sub-conditions of the bases axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasesAssumptions {
    /// Skip (B1): the family is non-empty.
    pub non_empty: bool,
    /// Skip (B2): the basis exchange property.
    pub exchange: bool,
}

/// Checks the bases axiom.
///
/// (B1) Bs ≠ ∅; (B2) for B1, B2 ∈ Bs and b1 ∈ B1 − B2 some b2 ∈ B2 − B1 has
/// (B1 − {b1}) ∪ {b2} ∈ Bs. The family `{∅}` is accepted outright as the
/// bases of the rank-zero matroid.
pub fn satisfies_bases_axiom<T: Element>(
    ground: &Set<T>,
    bases: &Family<T>,
    assumptions: &BasesAssumptions,
) -> bool {
    const AXIOM: &str = "bases";
    if !assumptions.non_empty && bases.is_empty() {
        return reject(AXIOM, "non-empty");
    }

    if !all_within(ground, bases) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if bases.len() == 1 && bases.contains(&Set::new()) {
        return true;
    }

    let mut sizes = bases.iter().map(Set::len);
    if let Some(first) = sizes.next() {
        if sizes.any(|size| size != first) {
            return reject(AXIOM, "equicardinal");
        }
    }

    if !assumptions.exchange {
        for first in bases {
            for second in bases.iter().filter(|b| *b != first) {
                for removed in first.difference(second) {
                    let reduced = without_element(first, removed);
                    let exchangeable = second
                        .difference(first)
                        .any(|added| bases.contains(&with_element(&reduced, added)));
                    if !exchangeable {
                        return reject(AXIOM, "exchange");
                    }
                }
            }
        }
    }
    true
}

/// Sub-conditions of the circuit axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitsAssumptions {
    /// Skip (C1): ∅ ∉ Cs.
    pub lacks_empty_set: bool,
    /// Skip (C2): no circuit properly contains another.
    pub antichain: bool,
    /// Skip (C3): circuit elimination.
    pub elimination: bool,
}

/// Checks the circuit axiom.
///
/// (C1) ∅ ∉ Cs; (C2) C1 ⊆ C2 ⇒ C1 = C2; (C3) for distinct C1, C2 and
/// e ∈ C1 ∩ C2 some C3 ∈ Cs lies in (C1 ∪ C2) − {e}.
pub fn satisfies_circuits_axiom<T: Element>(
    ground: &Set<T>,
    circuits: &Family<T>,
    assumptions: &CircuitsAssumptions,
) -> bool {
    const AXIOM: &str = "circuits";
    if !all_within(ground, circuits) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.lacks_empty_set && circuits.contains(&Set::new()) {
        return reject(AXIOM, "lacks-empty-set");
    }

    if !assumptions.antichain {
        let nested = circuits
            .iter()
            .any(|low| circuits.iter().any(|high| is_proper_subset(low, high)));
        if nested {
            return reject(AXIOM, "antichain");
        }
    }

    if !assumptions.elimination {
        let members: Vec<&Set<T>> = circuits.iter().collect();
        for (idx, first) in members.iter().enumerate() {
            for second in &members[idx + 1..] {
                let join: Set<T> = first.union(second).cloned().collect();
                for shared in first.intersection(second) {
                    let remainder = without_element(&join, shared);
                    if !circuits.iter().any(|c| c.is_subset(&remainder)) {
                        return reject(AXIOM, "elimination");
                    }
                }
            }
        }
    }
    true
}
