use matroid_core::sets::{all_within, is_proper_subset, with_element, without_element};
use matroid_core::{Element, Family, Set};
use serde::{Deserialize, Serialize};

use crate::reject;

/// Sub-conditions of the flats axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatsAssumptions {
    /// Skip (F1): E ∈ Fs.
    pub has_ground_set: bool,
    /// Skip (F2): F1, F2 ∈ Fs ⇒ F1 ∩ F2 ∈ Fs.
    pub intersection_closed: bool,
}

/// Checks the flats axiom.
///
/// Only (F1) and (F2) are evaluated. The partition condition on the flats
/// covering a given flat is not checked, so families closed under
/// intersection that are not the flats of any matroid pass.
pub fn satisfies_flats_axiom<T: Element>(
    ground: &Set<T>,
    flats: &Family<T>,
    assumptions: &FlatsAssumptions,
) -> bool {
    const AXIOM: &str = "flats";
    if !all_within(ground, flats) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.has_ground_set && !flats.contains(ground) {
        return reject(AXIOM, "has-ground-set");
    }

    if !assumptions.intersection_closed {
        for first in flats {
            for second in flats.range(first..).skip(1) {
                let meet: Set<T> = first.intersection(second).cloned().collect();
                if !flats.contains(&meet) {
                    return reject(AXIOM, "intersection-closed");
                }
            }
        }
    }
    true
}

/// Sub-conditions of the open-sets axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSetsAssumptions {
    /// Skip (O1): ∅ ∈ Os.
    pub has_empty_set: bool,
    /// Skip (O2): O1, O2 ∈ Os ⇒ O1 ∪ O2 ∈ Os.
    pub union_closed: bool,
    /// Skip (O3): the sandwich condition.
    pub sandwich: bool,
}

/// Checks the open-sets axiom.
///
/// (O3): for distinct O1, O2 and o ∈ O1 ∩ O2 some O3 ∈ Os satisfies
/// `(O1 ∪ O2) − (O1 ∩ O2) ⊆ O3 ⊆ (O1 ∪ O2) − {o}`.
pub fn satisfies_open_sets_axiom<T: Element>(
    ground: &Set<T>,
    open_sets: &Family<T>,
    assumptions: &OpenSetsAssumptions,
) -> bool {
    const AXIOM: &str = "open-sets";
    if !all_within(ground, open_sets) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.has_empty_set && !open_sets.contains(&Set::new()) {
        return reject(AXIOM, "has-empty-set");
    }

    if !assumptions.union_closed {
        for first in open_sets {
            for second in open_sets.range(first..).skip(1) {
                let join: Set<T> = first.union(second).cloned().collect();
                if !open_sets.contains(&join) {
                    return reject(AXIOM, "union-closed");
                }
            }
        }
    }

    if !assumptions.sandwich {
        for first in open_sets {
            for second in open_sets.range(first..).skip(1) {
                let join: Set<T> = first.union(second).cloned().collect();
                let split: Set<T> = first.symmetric_difference(second).cloned().collect();
                for shared in first.intersection(second) {
                    let ceiling = without_element(&join, shared);
                    let sandwiched = open_sets
                        .iter()
                        .any(|third| split.is_subset(third) && third.is_subset(&ceiling));
                    if !sandwiched {
                        return reject(AXIOM, "sandwich");
                    }
                }
            }
        }
    }
    true
}

/// Sub-conditions of the hyperplanes axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperplanesAssumptions {
    /// Skip (H1): E ∉ Hs.
    pub lacks_ground_set: bool,
    /// Skip (H2): no hyperplane properly contains another.
    pub antichain: bool,
    /// Skip (H3): the covering condition.
    pub covering: bool,
}

/// Checks the hyperplanes axiom.
///
/// (H3): for distinct H1, H2 and e ∈ E − (H1 ∪ H2) some H3 ∈ Hs contains
/// `(H1 ∩ H2) ∪ {e}`.
pub fn satisfies_hyperplanes_axiom<T: Element>(
    ground: &Set<T>,
    hyperplanes: &Family<T>,
    assumptions: &HyperplanesAssumptions,
) -> bool {
    const AXIOM: &str = "hyperplanes";
    if !all_within(ground, hyperplanes) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.lacks_ground_set && hyperplanes.contains(ground) {
        return reject(AXIOM, "lacks-ground-set");
    }

    if !assumptions.antichain {
        let nested = hyperplanes
            .iter()
            .any(|low| hyperplanes.iter().any(|high| is_proper_subset(low, high)));
        if nested {
            return reject(AXIOM, "antichain");
        }
    }

    if !assumptions.covering {
        for first in hyperplanes {
            for second in hyperplanes.range(first..).skip(1) {
                let meet: Set<T> = first.intersection(second).cloned().collect();
                let covered = ground
                    .iter()
                    .filter(|e| !first.contains(e) && !second.contains(e))
                    .all(|e| {
                        let required = with_element(&meet, e);
                        hyperplanes.iter().any(|third| required.is_subset(third))
                    });
                if !covered {
                    return reject(AXIOM, "covering");
                }
            }
        }
    }
    true
}

/// Sub-conditions of the spanning-sets axiom the caller already knows to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningSetsAssumptions {
    /// Skip (S1): E ∈ Ss.
    pub has_ground_set: bool,
    /// Skip (S2): supersets of spanning sets are spanning.
    pub superset_closed: bool,
    /// Skip (S3): the shedding condition.
    pub shedding: bool,
}

/// Checks the spanning-sets axiom.
///
/// (S3): for S1, S2 ∈ Ss with |S1| < |S2| some s ∈ S2 − S1 leaves
/// `S2 − {s}` spanning.
pub fn satisfies_spanning_sets_axiom<T: Element>(
    ground: &Set<T>,
    spanning_sets: &Family<T>,
    assumptions: &SpanningSetsAssumptions,
) -> bool {
    const AXIOM: &str = "spanning-sets";
    if !all_within(ground, spanning_sets) {
        return reject(AXIOM, "members-within-ground-set");
    }

    if !assumptions.has_ground_set && !spanning_sets.contains(ground) {
        return reject(AXIOM, "has-ground-set");
    }

    if !assumptions.superset_closed {
        let closed = spanning_sets.iter().all(|spanning| {
            ground
                .difference(spanning)
                .all(|e| spanning_sets.contains(&with_element(spanning, e)))
        });
        if !closed {
            return reject(AXIOM, "superset-closed");
        }
    }

    if !assumptions.shedding {
        for smaller in spanning_sets {
            for larger in spanning_sets.iter().filter(|s| s.len() > smaller.len()) {
                let sheddable = larger
                    .difference(smaller)
                    .any(|s| spanning_sets.contains(&without_element(larger, s)));
                if !sheddable {
                    return reject(AXIOM, "shedding");
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set};

    fn ground() -> Set<u8> {
        set([1, 2, 3])
    }

    #[test]
    fn flats_of_uniform_rank_two_pass() {
        let flats = family([vec![], vec![1], vec![2], vec![3], vec![1u8, 2, 3]]);
        assert!(satisfies_flats_axiom(&ground(), &flats, &FlatsAssumptions::default()));
    }

    #[test]
    fn flats_missing_ground_set_or_meet_are_rejected() {
        let no_ground = family([vec![1u8]]);
        assert!(!satisfies_flats_axiom(&ground(), &no_ground, &FlatsAssumptions::default()));
        let no_meet = family([vec![1u8, 2], vec![2, 3], vec![1, 2, 3]]);
        assert!(!satisfies_flats_axiom(&ground(), &no_meet, &FlatsAssumptions::default()));
    }

    #[test]
    fn open_sets_of_uniform_rank_two_pass() {
        let open = family([vec![], vec![1u8, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]);
        assert!(satisfies_open_sets_axiom(&ground(), &open, &OpenSetsAssumptions::default()));
    }

    #[test]
    fn open_sets_without_sandwich_are_rejected() {
        // {1,2} and {1,3} share 1, but nothing sits between {2,3} and {2,3}.
        let open = family([vec![], vec![1u8, 2], vec![1, 3], vec![1, 2, 3]]);
        assert!(!satisfies_open_sets_axiom(&ground(), &open, &OpenSetsAssumptions::default()));
    }

    #[test]
    fn open_sets_must_be_union_closed() {
        let open = family([vec![], vec![1u8], vec![2]]);
        assert!(!satisfies_open_sets_axiom(&ground(), &open, &OpenSetsAssumptions::default()));
    }

    #[test]
    fn hyperplanes_of_free_matroid_pass() {
        let hyperplanes = family([vec![1u8, 2], vec![1, 3], vec![2, 3]]);
        assert!(satisfies_hyperplanes_axiom(
            &ground(),
            &hyperplanes,
            &HyperplanesAssumptions::default()
        ));
    }

    #[test]
    fn hyperplanes_rejects_ground_set_and_nesting() {
        let with_ground = family([vec![1u8, 2, 3]]);
        assert!(!satisfies_hyperplanes_axiom(
            &ground(),
            &with_ground,
            &HyperplanesAssumptions::default()
        ));
        let nested = family([vec![1u8], vec![1, 2]]);
        assert!(!satisfies_hyperplanes_axiom(
            &ground(),
            &nested,
            &HyperplanesAssumptions::default()
        ));
    }

    #[test]
    fn hyperplanes_must_cover() {
        // {1} and {2} meet in ∅; {3} is not inside any hyperplane.
        let hyperplanes = family([vec![1u8], vec![2]]);
        assert!(!satisfies_hyperplanes_axiom(
            &ground(),
            &hyperplanes,
            &HyperplanesAssumptions::default()
        ));
    }

    #[test]
    fn spanning_sets_of_uniform_rank_one_pass() {
        let spanning = family([
            vec![1u8],
            vec![2],
            vec![3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
            vec![1, 2, 3],
        ]);
        assert!(satisfies_spanning_sets_axiom(
            &ground(),
            &spanning,
            &SpanningSetsAssumptions::default()
        ));
    }

    #[test]
    fn spanning_sets_must_shed() {
        // {2,3} cannot shed an element toward the smaller spanning set {1}.
        let spanning = family([vec![1u8], vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]);
        assert!(!satisfies_spanning_sets_axiom(
            &ground(),
            &spanning,
            &SpanningSetsAssumptions::default()
        ));
    }
}
