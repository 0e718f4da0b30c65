//! Hyperplanes from every other representation.

use matroid_core::sets::find_maximal_sets;
use matroid_core::{Element, Family, Payload, Set};

use crate::tables::select;
use crate::{bases, flats};

/// Maximal sets containing no basis.
pub fn from_bases<T: Element>(ground: &Set<T>, bases: &Family<T>) -> Family<T> {
    let non_spanning = select(ground, |subset| {
        !bases.iter().any(|basis| basis.is_subset(subset))
    });
    find_maximal_sets(&non_spanning)
}

/// Maximal flats other than E.
pub fn from_flats<T: Element>(ground: &Set<T>, flats: &Family<T>) -> Family<T> {
    let proper: Family<T> = flats.iter().filter(|flat| *flat != ground).cloned().collect();
    find_maximal_sets(&proper)
}

/// Maximal non-spanning sets.
pub fn from_spanning_sets<T: Element>(ground: &Set<T>, spanning_sets: &Family<T>) -> Family<T> {
    let non_spanning = select(ground, |subset| !spanning_sets.contains(subset));
    find_maximal_sets(&non_spanning)
}

/// Through the flats complementary to the open sets.
pub fn from_open_sets<T: Element>(ground: &Set<T>, open_sets: &Family<T>) -> Family<T> {
    from_flats(ground, &flats::from_open_sets(ground, open_sets))
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
pub fn from_rank_function<T, F>(ground: &Set<T>, rank: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    from_bases(ground, &bases::from_rank_function(ground, rank))
}

/// Through the bases.
pub fn from_nullity_function<T, F>(ground: &Set<T>, nullity: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> usize + ?Sized,
{
    from_bases(ground, &bases::from_nullity_function(ground, nullity))
}

/// Through the bases.
pub fn from_closure_function<T, F>(ground: &Set<T>, closure: &F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> Set<T> + ?Sized,
{
    from_bases(ground, &bases::from_closure_function(ground, closure))
}

/// Hyperplanes of the matroid `(ground, payload)`.
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
        Payload::Hyperplanes(sets) => sets.clone(),
        Payload::SpanningSets(sets) => from_spanning_sets(ground, sets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set};

    #[test]
    fn hyperplanes_of_every_matroid_on_three_points() {
        let ground = set([1u8, 2, 3]);
        let cases: [(Vec<Vec<u8>>, Vec<Vec<u8>>); 8] = [
            (vec![vec![]], vec![]),
            (vec![vec![1]], vec![vec![2, 3]]),
            (vec![vec![1], vec![2]], vec![vec![3]]),
            (vec![vec![1], vec![2], vec![3]], vec![vec![]]),
            (vec![vec![1, 2]], vec![vec![1, 3], vec![2, 3]]),
            (vec![vec![1, 2], vec![1, 3]], vec![vec![1], vec![2, 3]]),
            (vec![vec![1, 2], vec![1, 3], vec![2, 3]], vec![vec![1], vec![2], vec![3]]),
            (vec![vec![1, 2, 3]], vec![vec![1, 2], vec![1, 3], vec![2, 3]]),
        ];
        for (bases, expected) in cases {
            assert_eq!(from_bases(&ground, &family(bases)), family(expected));
        }
    }
}
