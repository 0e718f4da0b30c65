//! Open sets, the complements of flats.

use matroid_core::sets::family_complements;
use matroid_core::{Element, Family, Payload, Set};

use crate::flats;

/// Complements of the flats.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    family_complements(ground, flats)
}

/// Open sets of the matroid `(ground, payload)`.
///
/// Every source other than the flats goes through the flats it induces.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::OpenSets(sets) => sets.clone(),
        Payload::Flats(sets) => from_flats(ground, sets),
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => from_rank_function(ground, rank.as_ref()),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity.as_ref()),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure.as_ref()),
        Payload::Hyperplanes(sets) => from_hyperplanes(ground, sets),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}

/// Through the flats.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    from_flats(ground, &flats::from_independent_sets(ground, independent_sets))
}

/// Through the flats.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_dependent_sets(ground, dependent_sets))
}

/// Through the flats.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_bases(ground, bases))
}

/// Through the flats.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_circuits(ground, circuits))
}

/// Through the flats.
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    from_flats(ground, &flats::from_rank_function(ground, rank))
}

/// Through the flats.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    from_flats(ground, &flats::from_nullity_function(ground, nullity))
}

/// Through the flats.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    from_flats(ground, &flats::from_closure_function(ground, closure))
}

/// Through the flats.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_hyperplanes(ground, hyperplanes))
}

/// Through the flats.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_spanning_sets(ground, spanning_sets))
}
