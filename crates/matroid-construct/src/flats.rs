//! Flats from every other representation.

use matroid_core::sets::{family_complements, with_element};
use matroid_core::{Element, Family, Payload, Set};

use crate::tables::select;
use crate::{closure_function, independent_sets, rank_function};

/// Fixed points of the closure.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    select(ground, |subset| closure(subset) == *subset)
}

/// Sets F with r(F ∪ {e}) = r(F) + 1 for every e ∈ E − F.
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    select(ground, |subset| {
        let base = rank(subset);
        ground
            .difference(subset)
            .all(|e| rank(&with_element(subset, e)) == base + 1)
    })
}

/// Complements of the open sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    family_complements(ground, open_sets)
}

/// Every intersection of hyperplanes, the empty intersection being E.
pub fn from_hyperplanes<T: Element>(ground: &Set<T>, hyperplanes: &Family<T>) -> Family<T> {
    let mut flats = Family::new();
    flats.insert(ground.clone());
    for hyperplane in hyperplanes {
        let meets: Vec<Set<T>> = flats
            .iter()
            .map(|flat| flat.intersection(hyperplane).cloned().collect())
            .collect();
        flats.extend(meets);
    }
    flats
}

/// Through the rank function.
pub fn from_independent_sets<T: Element>(
    ground: &Set<T>,
    independent_sets: &Family<T>,
) -> Family<T> {
    let rank = rank_function::from_independent_sets(ground, independent_sets);
    from_rank_function(ground, rank.as_ref())
}

/// Through the independent sets.
pub fn from_dependent_sets<T: Element>(ground: &Set<T>, dependent_sets: &Family<T>) -> Family<T> {
    from_independent_sets(
        ground,
        &independent_sets::from_dependent_sets(ground, dependent_sets),
    )
}

/// Through the rank function.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    let rank = rank_function::from_bases(ground, bases);
    from_rank_function(ground, rank.as_ref())
}

/// Through the closure.
pub fn from_circuits<T: Element>(ground: &Set<T>, circuits: &Family<T>) -> Family<T> {
    let closure = closure_function::from_circuits(ground, circuits);
    from_closure_function(ground, closure.as_ref())
}

/// Sets F with n(F ∪ {e}) = n(F) for every e ∈ E − F.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    from_rank_function(ground, &|subset: &Set<T>| {
        subset.len().saturating_sub(nullity(subset))
    })
}

/// Through the rank function.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    let rank = rank_function::from_spanning_sets(ground, spanning_sets);
    from_rank_function(ground, rank.as_ref())
}

/// Flats of the matroid `(ground, payload)`.
pub fn derive<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> Family<T> {
    match payload {
        Payload::IndependentSets(sets) => from_independent_sets(ground, sets),
        Payload::DependentSets(sets) => from_dependent_sets(ground, sets),
        Payload::Bases(sets) => from_bases(ground, sets),
        Payload::Circuits(sets) => from_circuits(ground, sets),
        Payload::RankFunction(rank) => from_rank_function(ground, rank.as_ref()),
        Payload::NullityFunction(nullity) => from_nullity_function(ground, nullity.as_ref()),
        Payload::ClosureFunction(closure) => from_closure_function(ground, closure.as_ref()),
        Payload::Flats(sets) => sets.clone(),
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
    fn hyperplane_intersections_generate_flats() {
        let ground = set([1u8, 2, 3]);
        let flats = from_hyperplanes(&ground, &family([vec![1u8, 2], vec![1, 3], vec![2, 3]]));
        assert_eq!(flats.len(), 8);
        let none = from_hyperplanes(&ground, &Family::new());
        assert_eq!(none, family([vec![1u8, 2, 3]]));
    }
}
