//! Counts the families accepted by each family-valued checker on small
//! ground sets. Labelled matroids on 0..=4 points number 1, 2, 5, 16, 68.

use std::sync::Arc;

use matroid_axiom::{
    satisfies, satisfies_flats_axiom, satisfies_girth_function_axiom, FlatsAssumptions,
    GirthAssumptions,
};
use matroid_core::sets::{power_set, subsets_of_size};
use matroid_core::{family, set, Axiom, Family, GirthFn, Payload, Set};

const LABELLED_MATROIDS: [usize; 5] = [1, 2, 5, 16, 68];

fn all_families(members: &[Set<u8>]) -> impl Iterator<Item = Family<u8>> + '_ {
    (0u64..1 << members.len()).map(move |mask| {
        members
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & (1 << idx) != 0)
            .map(|(_, member)| member.clone())
            .collect()
    })
}

fn accepted(ground: &Set<u8>, axiom: Axiom, members: &[Set<u8>]) -> usize {
    all_families(members)
        .filter_map(|sets| Payload::from_family(axiom, sets))
        .filter(|payload| satisfies(ground, payload))
        .count()
}

#[test]
fn bases_checker_counts_labelled_matroids() {
    for (n, expected) in LABELLED_MATROIDS.iter().enumerate() {
        let ground = set(1..=n as u8);
        let count: usize = (0..=n)
            .map(|k| {
                let layer = subsets_of_size(&ground, k);
                all_families(&layer)
                    .filter(|sets| !sets.is_empty())
                    .filter(|sets| satisfies(&ground, &Payload::Bases(sets.clone())))
                    .count()
            })
            .sum();
        assert_eq!(count, *expected, "bases on {n} points");
    }
}

#[test]
fn set_system_checkers_count_labelled_matroids() {
    for n in 0..=3usize {
        let ground = set(1..=n as u8);
        let subsets = power_set(&ground);
        for axiom in [
            Axiom::IndependentSets,
            Axiom::DependentSets,
            Axiom::Circuits,
            Axiom::OpenSets,
            Axiom::Hyperplanes,
            Axiom::SpanningSets,
        ] {
            assert_eq!(
                accepted(&ground, axiom, &subsets),
                LABELLED_MATROIDS[n],
                "{axiom} on {n} points"
            );
        }
    }
}

#[test]
fn flats_checker_accepts_every_intersection_closed_family() {
    let ground = set([1u8, 2, 3]);
    // ∅ ⊂ {1} ⊂ E is closed under intersection but {2, 3} is missing for
    // the flats covering ∅ to partition the ground set.
    let chain = family([vec![], vec![1u8], vec![1, 2, 3]]);
    assert!(satisfies_flats_axiom(&ground, &chain, &FlatsAssumptions::default()));
    let missing_ground = family([vec![], vec![1u8]]);
    assert!(!satisfies(&ground, &Payload::Flats(missing_ground)));
}

#[test]
fn function_checkers_accept_uniform_matroids() {
    let ground = set([1u8, 2, 3, 4]);
    for k in 0..=4usize {
        assert!(satisfies(&ground, &Payload::rank_function(move |x: &Set<u8>| x.len().min(k))));
        assert!(satisfies(
            &ground,
            &Payload::nullity_function(move |x: &Set<u8>| x.len().saturating_sub(k))
        ));
        let closure_ground = ground.clone();
        assert!(satisfies(
            &ground,
            &Payload::closure_function(move |x: &Set<u8>| {
                if x.len() >= k {
                    closure_ground.clone()
                } else {
                    x.clone()
                }
            })
        ));
        // Every (k + 1)-subset is a circuit.
        let girth: GirthFn<u8> = Arc::new(move |x: &Set<u8>| (x.len() > k).then_some(k + 1));
        assert!(satisfies_girth_function_axiom(
            &ground,
            &girth,
            &GirthAssumptions::default()
        ));
    }
}
