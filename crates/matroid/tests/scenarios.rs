use matroid::{family, set, Axiom, Family, Matroid, MatroidError, Payload, Set};
use matroid_core::sets::power_set;

fn triangle() -> Matroid<u8> {
    Matroid::new(
        set([1u8, 2, 3]),
        Payload::Bases(family([vec![1u8, 2], vec![1, 3], vec![2, 3]])),
    )
    .unwrap()
}

#[test]
fn triangle_views_and_dual() {
    let matroid = triangle();
    assert_eq!(
        matroid.independent_sets(),
        &family([
            vec![],
            vec![1u8],
            vec![2],
            vec![3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3]
        ])
    );
    assert_eq!(matroid.circuits(), &family([vec![1u8, 2, 3]]));
    assert_eq!(matroid.rank_of(&Set::new()), 0);
    assert_eq!(matroid.rank_of(&set([1, 2, 3])), 2);
    assert_eq!(matroid.dual().bases(), &family([vec![1u8], vec![2], vec![3]]));
}

#[test]
fn free_matroid_has_no_dependencies() {
    let matroid = Matroid::new(set([1u8, 2, 3]), Payload::Bases(family([vec![1u8, 2, 3]])))
        .unwrap();
    assert!(matroid.dependent_sets().is_empty());
    assert!(matroid.circuits().is_empty());
    // Every flat is closed, so the 2-subsets are exactly the rank-2 flats.
    assert_eq!(
        matroid.hyperplanes(),
        &family([vec![1u8, 2], vec![1, 3], vec![2, 3]])
    );
    assert!(matroid.is_free());
}

#[test]
fn independent_sets_of_free_matroid_give_single_basis() {
    let independent: Family<u8> = power_set(&set([1u8, 2, 3])).into_iter().collect();
    let matroid = Matroid::new(set([1u8, 2, 3]), Payload::IndependentSets(independent)).unwrap();
    assert_eq!(matroid.bases(), &family([vec![1u8, 2, 3]]));
}

#[test]
fn mismatched_bases_raise_axiom_violation() {
    let result = Matroid::new(set([1u8, 2, 3]), Payload::Bases(family([vec![1u8], vec![2, 3]])));
    assert!(matches!(result, Err(MatroidError::AxiomViolation(_))));
}

#[test]
fn every_payload_variant_builds_the_triangle() {
    let reference = triangle();
    for axiom in Axiom::ALL {
        let rebuilt = Matroid::new(set([1u8, 2, 3]), reference.view(axiom)).unwrap();
        assert_eq!(rebuilt.axiom(), axiom);
        assert!(rebuilt.is_equal_to(&reference), "{axiom}");
    }
}
