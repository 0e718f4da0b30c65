//! Closure operators from every other representation.

use std::sync::Arc;

use matroid_core::sets::with_element;
use matroid_core::{ClosureFn, Element, Family, NullityFn, Payload, RankFn, Set};

use crate::tables::memoize;
use crate::{circuits, flats, rank_function};

/// cl(X) = {e ∈ E : r(X ∪ {e}) = r(X)}, together with X itself.
pub fn from_rank_function<T: Element>(ground: &Set<T>, rank: &RankFn<T>) -> ClosureFn<T> {
    let rank = Arc::clone(rank);
    let elements = ground.clone();
    memoize(ground, move |subset: &Set<T>| {
        let base = rank(subset);
        let mut closed = subset.clone();
        closed.extend(
            elements
                .iter()
                .filter(|e| !subset.contains(*e) && rank(&with_element(subset, e)) == base)
                .cloned(),
        );
        closed
    })
}

/// cl(X) = X ∪ {e : some circuit C has e ∈ C ⊆ X ∪ {e}}.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> ClosureFn<T> {
    let circuits = circuits.clone();
    memoize(ground, move |subset: &Set<T>| {
        let mut closed = subset.clone();
        for circuit in &circuits {
            let mut outside = circuit.difference(subset);
            if let (Some(e), None) = (outside.next(), outside.next()) {
                closed.insert(e.clone());
            }
        }
        closed
    })
}

/// cl(X) = ∩{F ∈ Fs : X ⊆ F}, or E when no flat contains X.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> ClosureFn<T> {
    let flats = flats.clone();
    let elements = ground.clone();
    memoize(ground, move |subset: &Set<T>| {
        flats
            .iter()
            .filter(|flat| subset.is_subset(flat))
            .fold(None, |meet: Option<Set<T>>, flat| {
                Some(match meet {
                    Some(meet) => meet.intersection(flat).cloned().collect(),
                    None => flat.clone(),
                })
            })
            .unwrap_or_else(|| elements.clone())
    })
}

/// Through the rank function.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> ClosureFn<T> {
    from_rank_function(
        ground,
        &rank_function::from_independent_sets(ground, independent_sets),
    )
}

/// Through the circuits, the minimal dependent sets.
pub fn from_dependent_sets<T: Element>(
    ground: &Set<T>,
    dependent_sets: &Family<T>,
) -> ClosureFn<T> {
    from_circuits(ground, &circuits::from_dependent_sets(ground, dependent_sets))
}

/// Through the rank function.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> ClosureFn<T> {
    from_rank_function(ground, &rank_function::from_bases(ground, bases))
}

/// Through the rank function.
pub fn from_nullity_function<T: Element>(
    ground: &Set<T>,
    nullity: &NullityFn<T>,
) -> ClosureFn<T> {
    from_rank_function(ground, &rank_function::from_nullity_function(ground, nullity))
}

/// Through the flats complementary to the open sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> ClosureFn<T> {
    from_flats(ground, &flats::from_open_sets(ground, open_sets))
}

/// Through the flats generated by the hyperplanes.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> ClosureFn<T> {
    from_flats(ground, &flats::from_hyperplanes(ground, hyperplanes))
}

/// Through the rank function.
pub fn from_spanning_sets<T: Element>(
    ground: &Set<T>,
    spanning_sets: &Family<T>,
) -> ClosureFn<T> {
    from_rank_function(
        ground,
        &rank_function::from_spanning_sets(ground, spanning_sets),
    )
}

/// Closure operator of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> ClosureFn<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => from_rank_function(ground, rank),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity),
        Payload::ClosureFunction(closure) => Arc::clone(closure),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::OpenSets(sets) => from_open_sets(ground, sets),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set};

    #[test]
    fn closure_from_circuits_adds_parallel_elements_and_loops() {
        let ground = set([1u8, 2, 3, 4]);
        // 4 is a loop and {1, 2} a parallel pair.
        let closure = from_circuits(&ground, &family([vec![4u8], vec![1, 2]]));
        assert_eq!(closure(&set([])), set([4]));
        assert_eq!(closure(&set([1])), set([1, 2, 4]));
        assert_eq!(closure(&set([3])), set([3, 4]));
    }

    #[test]
    fn closure_from_flats_defaults_to_ground_set() {
        let ground = set([1u8, 2]);
        let closure = from_flats(&ground, &family([vec![1u8]]));
        assert_eq!(closure(&set([1])), set([1]));
        assert_eq!(closure(&set([2])), ground);
    }
}
