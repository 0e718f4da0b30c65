//! Independent sets from every other representation.

use matroid_core::sets::without_element;
use matroid_core::{Element, Family, Payload, Set};

use crate::tables::select;
use crate::{bases, closure_function, flats};

/// Is = 2^E − Ds.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    select(ground, |subset| !dependent_sets.contains(subset))
}

/// Subsets of some basis.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    select(ground, |subset| bases.iter().any(|basis| subset.is_subset(basis)))
}

/// Subsets containing no circuit.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    select(ground, |subset| !circuits.iter().any(|circuit| circuit.is_subset(subset)))
}

/// Subsets with r(I) = |I|.
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| rank(subset) == subset.len())
}

/// Subsets with n(I) = 0.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| nullity(subset) == 0)
}

/// Subsets where no element lies in the closure of the others.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    select(ground, |subset| {
        subset
            .iter()
            .all(|element| !closure(&without_element(subset, element)).contains(element))
    })
}

/// Through the closure induced by the flats.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    let closure = closure_function::from_flats(ground, flats);
    from_closure_function(ground, closure.as_ref())
}

/// Through the flats complementary to the open sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_open_sets(ground, open_sets))
}

/// Through the flats generated by the hyperplanes.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_hyperplanes(ground, hyperplanes))
}

/// Through the bases, the minimal spanning sets.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    from_bases(ground, &bases::from_spanning_sets(ground, spanning_sets))
}

/// Independent sets of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => sets.clone(),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
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
