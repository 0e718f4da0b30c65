//! Rank functions from every other representation.

use std::sync::Arc;

use matroid_core::sets::power_set;
use matroid_core::{ClosureFn, Element, Family, NullityFn, Payload, RankFn, Set};

use crate::tables::memoize;
use crate::{bases, closure_function, independent_sets};

/// r(X) = max{|I| : I ∈ Is, I ⊆ X}.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> RankFn<T> {
    let independent_sets = independent_sets.clone();
    memoize(ground, move |subset: &Set<T>| {
        independent_sets
            .iter()
            .filter(|independent| independent.is_subset(subset))
            .map(Set::len)
            .max()
            .unwrap_or(0)
    })
}

/// Through the independent sets.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> RankFn<T> {
    from_independent_sets(
        ground,
        &independent_sets::from_dependent_sets(ground, dependent_sets),
    )
}

/// r(X) = max{|B ∩ X| : B ∈ Bs}.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> RankFn<T> {
    let bases = bases.clone();
    memoize(ground, move |subset: &Set<T>| {
        bases
            .iter()
            .map(|basis| basis.intersection(subset).count())
            .max()
            .unwrap_or(0)
    })
}

/// Through the independent sets.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> RankFn<T> {
    from_independent_sets(ground, &independent_sets::from_circuits(ground, circuits))
}

/// r(X) = |X| − n(X).
pub fn from_nullity_function<T: Element>(ground: &Set<T>, nullity: &NullityFn<T>) -> RankFn<T> {
    let nullity = Arc::clone(nullity);
    memoize(ground, move |subset: &Set<T>| {
        subset.len().saturating_sub(nullity(subset))
    })
}

/// r(X) = min{|I| : I ⊆ X, X ⊆ cl(I)}.
pub fn from_closure_function<T: Element>(ground: &Set<T>, closure: &ClosureFn<T>) -> RankFn<T> {
    let closure = Arc::clone(closure);
    memoize(ground, move |subset: &Set<T>| {
        // The power set is ordered by size, so the first spanning subset is minimal.
        power_set(subset)
            .into_iter()
            .find(|inner| subset.is_subset(&closure(inner)))
            .map_or(subset.len(), |inner| inner.len())
    })
}

/// Through the closure induced by the flats.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> RankFn<T> {
    from_closure_function(ground, &closure_function::from_flats(ground, flats))
}

/// Through the closure induced by the open sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> RankFn<T> {
    from_closure_function(ground, &closure_function::from_open_sets(ground, open_sets))
}

/// Through the closure induced by the hyperplanes.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> RankFn<T> {
    from_closure_function(ground, &closure_function::from_hyperplanes(ground, hyperplanes))
}

/// Through the bases, the minimal spanning sets.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> RankFn<T> {
    from_bases(ground, &bases::from_spanning_sets(ground, spanning_sets))
}

/// Rank function of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> RankFn<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => Arc::clone(rank),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure),
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
    fn rank_from_bases_counts_best_overlap() {
        let ground = set([1u8, 2, 3]);
        let rank = from_bases(&ground, &family([vec![1u8, 2], vec![1, 3]]));
        assert_eq!(rank(&set([])), 0);
        assert_eq!(rank(&set([2, 3])), 1);
        assert_eq!(rank(&set([1, 2, 3])), 2);
    }

    #[test]
    fn rank_from_closure_matches_rank_from_bases() {
        let ground = set([1u8, 2, 3, 4]);
        let bases = family([vec![1u8, 2], vec![1, 3], vec![2, 3], vec![1, 4], vec![2, 4]]);
        let direct = from_bases(&ground, &bases);
        let closure = closure_function::from_rank_function(&ground, &direct);
        let recovered = from_closure_function(&ground, &closure);
        for subset in power_set(&ground) {
            assert_eq!(direct(&subset), recovered(&subset), "{subset:?}");
        }
    }
}
