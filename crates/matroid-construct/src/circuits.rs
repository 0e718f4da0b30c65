//! Circuits from every other representation.

use matroid_core::sets::{find_minimal_sets, without_element};
use matroid_core::{Element, Family, Payload, Set};

use crate::dependent_sets;
use crate::tables::select;

/// Minimal sets outside the independent sets.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_independent_sets(ground, independent_sets))
}

/// Minimal dependent sets.
pub fn from_dependent_sets<T: Element>(_ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    find_minimal_sets(dependent_sets)
}

/// Through the dependent sets.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_bases(ground, bases))
}

/// Non-empty C with r(C) = |C| − 1 = r(C − c) for every c ∈ C.
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| {
        let Some(size) = subset.len().checked_sub(1) else {
            return false;
        };
        rank(subset) == size
            && subset
                .iter()
                .all(|element| rank(&without_element(subset, element)) == size)
    })
}

/// Non-empty C with n(C) = 1 and n(C − c) = 0 for every c ∈ C.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| {
        !subset.is_empty()
            && nullity(subset) == 1
            && subset
                .iter()
                .all(|element| nullity(&without_element(subset, element)) == 0)
    })
}

/// Minimal non-empty sets each of whose elements lies in the closure of
/// the rest.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    let cyclic = select(ground, |subset| {
        !subset.is_empty()
            && subset
                .iter()
                .all(|element| closure(&without_element(subset, element)).contains(element))
    });
    find_minimal_sets(&cyclic)
}

/// Through the dependent sets.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_flats(ground, flats))
}

/// Through the dependent sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_open_sets(ground, open_sets))
}

/// Through the dependent sets.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_hyperplanes(ground, hyperplanes))
}

/// Through the dependent sets.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    find_minimal_sets(&dependent_sets::from_spanning_sets(ground, spanning_sets))
}

/// Circuits of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => sets.clone(),
        Payload::RankFunction(rank) => from_rank_function(ground, rank.as_ref()),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity.as_ref()),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure.as_ref()),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::OpenSets(sets) => from_open_sets(ground, sets),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}
