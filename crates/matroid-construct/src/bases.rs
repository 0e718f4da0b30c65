//! Bases from every other representation.

use matroid_core::sets::{find_maximal_sets, find_minimal_sets};
use matroid_core::{Element, Family, Payload, Set};

use crate::independent_sets;
use crate::tables::select;

/// Maximal independent sets.
pub fn from_independent_sets<T: Element>(
    _ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    find_maximal_sets(independent_sets)
}

/// Through the independent sets.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    find_maximal_sets(&independent_sets::from_dependent_sets(ground, dependent_sets))
}

/// Through the independent sets.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    find_maximal_sets(&independent_sets::from_circuits(ground, circuits))
}

/// Subsets with |B| = r(B) = r(E).
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    let full_rank = rank(ground);
    select(ground, |subset| {
        subset.len() == full_rank && rank(subset) == full_rank
    })
}

/// Subsets with n(B) = 0 and |B| = |E| − n(E).
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    let full_rank = ground.len().saturating_sub(nullity(ground));
    select(ground, |subset| subset.len() == full_rank && nullity(subset) == 0)
}

/// Through the independent sets.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    find_maximal_sets(&independent_sets::from_closure_function(ground, closure))
}

/// Through the independent sets.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    find_maximal_sets(&independent_sets::from_flats(ground, flats))
}

/// Through the independent sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    find_maximal_sets(&independent_sets::from_open_sets(ground, open_sets))
}

/// Through the independent sets.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    find_maximal_sets(&independent_sets::from_hyperplanes(ground, hyperplanes))
}

/// Minimal spanning sets.
pub fn from_spanning_sets<T: Element>(_ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    find_minimal_sets(spanning_sets)
}

/// Bases of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => sets.clone(),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => from_rank_function(ground, rank.as_ref()),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity.as_ref()),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure.as_ref()),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::OpenSets(sets) => from_open_sets(ground, sets),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}
