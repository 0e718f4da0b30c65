//! Dependent sets from every other representation.

use matroid_core::{Element, Family, Payload, Set};

use crate::tables::select;
use crate::{circuits, independent_sets};

/// Ds = 2^E − Is.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    select(ground, |subset| !independent_sets.contains(subset))
}

/// Through the independent sets.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    from_independent_sets(ground, &independent_sets::from_bases(ground, bases))
}

/// Subsets containing a circuit.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    select(ground, |subset| circuits.iter().any(|circuit| circuit.is_subset(subset)))
}

/// Subsets with r(D) < |D|.
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| rank(subset) < subset.len())
}

/// Subsets with n(D) > 0.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| nullity(subset) > 0)
}

/// Through the circuits, the minimal cyclic sets of the closure.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    from_circuits(ground, &circuits::from_closure_function(ground, closure))
}

/// Through the independent sets.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    from_independent_sets(ground, &independent_sets::from_flats(ground, flats))
}

/// Through the independent sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    from_independent_sets(ground, &independent_sets::from_open_sets(ground, open_sets))
}

/// Through the independent sets.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    from_independent_sets(ground, &independent_sets::from_hyperplanes(ground, hyperplanes))
}

/// Through the independent sets.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    from_independent_sets(
        ground,
        &independent_sets::from_spanning_sets(ground, spanning_sets),
    )
}

/// Dependent sets of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => sets.clone(),
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
