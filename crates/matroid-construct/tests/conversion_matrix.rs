//! Every conversion, from every representation, on every matroid with at
//! most four elements.

use matroid_axiom::satisfies;
use matroid_construct::convert;
use matroid_core::sets::{power_set, subsets_of_size};
use matroid_core::{family, set, Axiom, Family, Payload, Set};

fn all_matroids(size: u8) -> Vec<(Set<u8>, Family<u8>)> {
    let ground = set(1..=size);
    let mut found = Vec::new();
    for rank in 0..=ground.len() {
        let layer = subsets_of_size(&ground, rank);
        for mask in 1u64..1 << layer.len() {
            let bases: Family<u8> = layer
                .iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .map(|(_, basis)| basis.clone())
                .collect();
            if satisfies(&ground, &Payload::Bases(bases.clone())) {
                found.push((ground.clone(), bases));
            }
        }
    }
    found
}

fn same_view(ground: &Set<u8>, left: &Payload<u8>, right: &Payload<u8>) -> bool {
    match (left, right) {
        (Payload::RankFunction(a), Payload::RankFunction(b))
        | (Payload::NullityFunction(a), Payload::NullityFunction(b)) => {
            power_set(ground).iter().all(|x| a(x) == b(x))
        }
        (Payload::ClosureFunction(a), Payload::ClosureFunction(b)) => {
            power_set(ground).iter().all(|x| a(x) == b(x))
        }
        _ => match (left.as_family(), right.as_family()) {
            (Some(a), Some(b)) => left.axiom() == right.axiom() && a == b,
            _ => false,
        },
    }
}

#[test]
fn matroid_counts_match_labelled_census() {
    let counts: Vec<usize> = (0..=4).map(|n| all_matroids(n).len()).collect();
    assert_eq!(counts, vec![1, 2, 5, 16, 68]);
}

#[test]
fn every_derived_view_satisfies_its_axiom() {
    for size in 0..=4 {
        for (ground, bases) in all_matroids(size) {
            let source = Payload::Bases(bases.clone());
            for target in Axiom::ALL {
                let view = convert(&ground, &source, target);
                assert_eq!(view.axiom(), target);
                assert!(satisfies(&ground, &view), "{target} of {bases:?}");
            }
        }
    }
}

#[test]
fn every_conversion_path_agrees() {
    for size in 0..=4 {
        for (ground, bases) in all_matroids(size) {
            let origin = Payload::Bases(bases.clone());
            let reference: Vec<Payload<u8>> = Axiom::ALL
                .iter()
                .map(|target| convert(&ground, &origin, *target))
                .collect();
            for source in &reference {
                for (target, expected) in Axiom::ALL.iter().zip(&reference) {
                    let derived = convert(&ground, source, *target);
                    assert!(
                        same_view(&ground, &derived, expected),
                        "{} -> {} on {bases:?}",
                        source.axiom(),
                        target
                    );
                }
            }
        }
    }
}

#[test]
fn free_matroid_on_three_points() {
    let ground = set([1u8, 2, 3]);
    let origin = Payload::Bases(family([vec![1u8, 2, 3]]));
    let circuits = convert(&ground, &origin, Axiom::Circuits);
    assert_eq!(circuits.as_family(), Some(&Family::new()));
    let dependent = convert(&ground, &origin, Axiom::DependentSets);
    assert_eq!(dependent.as_family(), Some(&Family::new()));
    let hyperplanes = convert(&ground, &origin, Axiom::Hyperplanes);
    assert_eq!(
        hyperplanes.as_family(),
        Some(&family([vec![1u8, 2], vec![1, 3], vec![2, 3]]))
    );
    let flats = convert(&ground, &origin, Axiom::Flats);
    assert_eq!(flats.as_family().map(Family::len), Some(8));
}

#[test]
fn uniform_rank_two_on_three_points_from_rank_function() {
    let ground = set([1u8, 2, 3]);
    let origin = Payload::rank_function(|x: &Set<u8>| x.len().min(2));
    let expected = [
        (Axiom::Bases, family([vec![1u8, 2], vec![1, 3], vec![2, 3]])),
        (Axiom::Circuits, family([vec![1u8, 2, 3]])),
        (Axiom::DependentSets, family([vec![1u8, 2, 3]])),
        (
            Axiom::Flats,
            family([vec![], vec![1u8], vec![2], vec![3], vec![1, 2, 3]]),
        ),
        (Axiom::Hyperplanes, family([vec![1u8], vec![2], vec![3]])),
        (
            Axiom::SpanningSets,
            family([vec![1u8, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]),
        ),
    ];
    for (target, sets) in expected {
        assert_eq!(convert(&ground, &origin, target).as_family(), Some(&sets), "{target}");
    }
    let Payload::ClosureFunction(closure) = convert(&ground, &origin, Axiom::ClosureFunction)
    else {
        panic!("closure target must produce a closure payload");
    };
    assert_eq!(closure(&set([1])), set([1]));
    assert_eq!(closure(&set([1, 2])), ground);
}
