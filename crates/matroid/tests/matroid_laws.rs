//! Structural identities checked on every matroid with at most four elements.

use matroid::{set, Family, Matroid, Payload, Set};
use matroid_core::sets::{complement, power_set, subsets_of_size};

fn all_matroids(size: u8) -> Vec<Matroid<u8>> {
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
            if let Ok(matroid) = Matroid::new(ground.clone(), Payload::Bases(bases)) {
                found.push(matroid);
            }
        }
    }
    found
}

fn every_matroid() -> impl Iterator<Item = Matroid<u8>> {
    (0..=4).flat_map(all_matroids)
}

#[test]
fn dual_is_an_involution() {
    for matroid in every_matroid() {
        let twice = matroid.dual().dual();
        assert!(twice.is_equal_to(&matroid), "{matroid:?}");
        assert_eq!(matroid.rank() + matroid.dual().rank(), matroid.size());
    }
}

#[test]
fn corank_matches_dual_rank() {
    for matroid in every_matroid() {
        let dual = matroid.dual();
        for subset in power_set(matroid.ground_set()) {
            assert_eq!(matroid.corank_of(&subset), dual.rank_of(&subset));
        }
    }
}

#[test]
fn bases_are_equicardinal_and_independent() {
    for matroid in every_matroid() {
        for basis in matroid.bases() {
            assert_eq!(basis.len(), matroid.rank());
            assert!(matroid.is_basis(basis));
        }
    }
}

#[test]
fn independent_sets_are_hereditary() {
    for matroid in every_matroid() {
        let independent = matroid.independent_sets();
        for member in independent {
            for subset in power_set(member) {
                assert!(independent.contains(&subset));
            }
        }
    }
}

#[test]
fn circuits_are_minimal_dependent_sets() {
    for matroid in every_matroid() {
        for circuit in matroid.circuits() {
            assert!(matroid.is_circuit(circuit));
            assert_eq!(matroid.rank_of(circuit) + 1, circuit.len());
        }
        let counted = power_set(matroid.ground_set())
            .iter()
            .filter(|subset| matroid.is_circuit(subset))
            .count();
        assert_eq!(counted, matroid.circuits().len());
    }
}

#[test]
fn cocircuits_are_complements_of_hyperplanes() {
    for matroid in every_matroid() {
        for cocircuit in matroid.cocircuits() {
            assert!(matroid.is_cocircuit(cocircuit));
            let hyperplane = complement(matroid.ground_set(), cocircuit);
            assert!(matroid.hyperplanes().contains(&hyperplane));
        }
    }
}

#[test]
fn contraction_rank_formula_holds() {
    for matroid in all_matroids(4) {
        for contracted in power_set(matroid.ground_set()) {
            let minor = matroid.contract(&contracted).unwrap();
            let base_rank = matroid.rank_of(&contracted);
            for subset in power_set(minor.ground_set()) {
                let joined: Set<u8> = subset.union(&contracted).copied().collect();
                assert_eq!(minor.rank_of(&subset), matroid.rank_of(&joined) - base_rank);
            }
        }
    }
}

#[test]
fn deletion_and_contraction_commute_with_duality() {
    for matroid in all_matroids(4) {
        for removed in power_set(matroid.ground_set()) {
            let deleted_dual = matroid.delete(&removed).unwrap().dual().clone();
            let contracted = matroid.dual().contract(&removed).unwrap();
            assert!(deleted_dual.is_equal_to(&contracted));
        }
    }
}

#[test]
fn direct_sum_rank_is_additive() {
    let left = all_matroids(2);
    let right: Vec<Matroid<u8>> = all_matroids(2)
        .into_iter()
        .map(|m| {
            let shifted: Set<u8> = m.ground_set().iter().map(|e| e + 10).collect();
            let bases: Family<u8> = m
                .bases()
                .iter()
                .map(|b| b.iter().map(|e| e + 10).collect())
                .collect();
            Matroid::new(shifted, Payload::Bases(bases)).unwrap()
        })
        .collect();
    for first in &left {
        for second in &right {
            let sum = first.direct_sum(second).unwrap();
            assert_eq!(sum.rank(), first.rank() + second.rank());
            let free = first.free_product(second).unwrap();
            assert_eq!(free.rank(), first.rank() + second.rank());
            assert!(matroid_axiom::satisfies(free.ground_set(), free.payload()));
            let joined = first.union(second);
            assert!(joined.is_equal_to(&sum));
        }
    }
}

#[test]
fn isomorphism_classes_on_three_points() {
    let matroids = all_matroids(3);
    let mut classes: Vec<&Matroid<u8>> = Vec::new();
    for matroid in &matroids {
        if !classes.iter().any(|rep| rep.is_isomorphic_to(matroid)) {
            classes.push(matroid);
        }
    }
    assert_eq!(classes.len(), 8);
}

#[test]
fn isomorphism_maps_bases_onto_bases() {
    for matroid in all_matroids(3) {
        for other in all_matroids(3) {
            if let Some(mapping) = matroid.isomorphism_to(&other) {
                for basis in matroid.bases() {
                    let image: Set<u8> = basis.iter().map(|e| mapping[e]).collect();
                    assert!(other.bases().contains(&image));
                }
            }
        }
    }
}
