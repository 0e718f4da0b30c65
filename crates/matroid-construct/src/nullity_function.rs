//! Nullity functions, n(X) = |X| − r(X), from every other representation.

use std::sync::Arc;

use matroid_core::{ClosureFn, Element, Family, NullityFn, Payload, RankFn, Set};

use crate::rank_function;
use crate::tables::memoize;

/// n(X) = |X| − r(X).
pub fn from_rank_function<T: Element>(ground: &Set<T>, rank: &RankFn<T>) -> NullityFn<T> {
    let rank = Arc::clone(rank);
    memoize(ground, move |subset: &Set<T>| {
        subset.len().saturating_sub(rank(subset))
    })
}

/// Through the rank function.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> NullityFn<T> {
    from_rank_function(
        ground,
        &rank_function::from_independent_sets(ground, independent_sets),
    )
}

/// Through the rank function.
pub fn from_dependent_sets<T: Element>(
    ground: &Set<T>,
    dependent_sets: &Family<T>,
) -> NullityFn<T> {
    from_rank_function(
        ground,
        &rank_function::from_dependent_sets(ground, dependent_sets),
    )
}

/// Through the rank function.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_bases(ground, bases))
}

/// Through the rank function.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_circuits(ground, circuits))
}

/// Through the rank function.
pub fn from_closure_function<T: Element>(
    ground: &Set<T>,
    closure: &ClosureFn<T>,
) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_closure_function(ground, closure))
}

/// Through the rank function.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_flats(ground, flats))
}

/// Through the rank function.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_open_sets(ground, open_sets))
}

/// Through the rank function.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> NullityFn<T> {
    from_rank_function(ground, &rank_function::from_hyperplanes(ground, hyperplanes))
}

/// Through the rank function.
pub fn from_spanning_sets<T: Element>(
    ground: &Set<T>,
    spanning_sets: &Family<T>,
) -> NullityFn<T> {
    from_rank_function(
        ground,
        &rank_function::from_spanning_sets(ground, spanning_sets),
    )
}

/// Nullity function of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> NullityFn<T> {
    match payload {
        Payload::NullityFunction(nullity) => Arc::clone(nullity),
        Payload::RankFunction(rank) => from_rank_function(ground, rank),
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::OpenSets(sets) => from_open_sets(ground, sets),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}
