//! Spanning sets from every other representation.

use matroid_core::{Element, Family, Payload, Set};

use crate::bases;
use crate::tables::select;

/// Supersets of some basis.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    select(ground, |subset| bases.iter().any(|basis| basis.is_subset(subset)))
}

/// Sets with r(S) = r(E).
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    let full_rank = rank(ground);
    select(ground, |subset| rank(subset) == full_rank)
}

/// Sets with n(E) − n(S) = |E| − |S|.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    let full_nullity = nullity(ground);
    select(ground, |subset| {
        full_nullity + subset.len() == nullity(subset) + ground.len()
    })
}

/// Sets whose closure is E.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    select(ground, |subset| closure(subset) == *ground)
}

/// Sets contained in no hyperplane.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    select(ground, |subset| {
        !hyperplanes.iter().any(|hyperplane| subset.is_subset(hyperplane))
    })
}

/// Through the bases.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    from_bases(ground, &bases::from_independent_sets(ground, independent_sets))
}

/// Through the bases.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    from_bases(ground, &bases::from_dependent_sets(ground, dependent_sets))
}

/// Through the bases.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    from_bases(ground, &bases::from_circuits(ground, circuits))
}

/// Through the bases.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    from_bases(ground, &bases::from_flats(ground, flats))
}

/// Through the bases.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    from_bases(ground, &bases::from_open_sets(ground, open_sets))
}

/// Spanning sets of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => from_rank_function(ground, rank.as_ref()),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity.as_ref()),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure.as_ref()),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::OpenSets(sets) => from_open_sets(ground, sets),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => sets.clone(),
    }
}
