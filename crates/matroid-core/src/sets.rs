//! Finite set algebra used by every other component.
//!
//! Sets and families are ordered (`BTreeSet`), so duplicates collapse and
//! every enumeration is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

/// Finite subset of a ground set.
pub type Set<T> = BTreeSet<T>;

/// Family of subsets of a ground set.
pub type Family<T> = BTreeSet<Set<T>>;

/// Builds a set from any iterable of elements.
pub fn set<T: Ord, I: IntoIterator<Item = T>>(items: I) -> Set<T> {
    items.into_iter().collect()
}

/// Builds a family from any iterable of iterables.
pub fn family<T, S, I>(sets: I) -> Family<T>
where
    T: Ord,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = S>,
{
    sets.into_iter().map(set).collect()
}

/// Returns every subset of `ground`, ordered by size and then lexicographically.
pub fn power_set<T: Ord + Clone>(ground: &Set<T>) -> Vec<Set<T>> {
    ground
        .iter()
        .cloned()
        .powerset()
        .map(|subset| subset.into_iter().collect())
        .collect()
}

/// Returns every `k`-subset of `ground` in lexicographic order.
pub fn subsets_of_size<T: Ord + Clone>(ground: &Set<T>, k: usize) -> Vec<Set<T>> {
    ground
        .iter()
        .cloned()
        .combinations(k)
        .map(|subset| subset.into_iter().collect())
        .collect()
}

/// Returns whether `a` is a proper subset of `b`.
pub fn is_proper_subset<T: Ord>(a: &Set<T>, b: &Set<T>) -> bool {
    a.len() < b.len() && a.is_subset(b)
}

/// Returns whether no member of `family` is a proper subset of `candidate`.
pub fn is_minimal<T: Ord>(candidate: &Set<T>, family: &Family<T>) -> bool {
    !family
        .iter()
        .any(|member| is_proper_subset(member, candidate))
}

/// Returns whether no member of `family` is a proper superset of `candidate`.
pub fn is_maximal<T: Ord>(candidate: &Set<T>, family: &Family<T>) -> bool {
    !family
        .iter()
        .any(|member| is_proper_subset(candidate, member))
}

/// Filters a family down to its inclusion-minimal members.
pub fn find_minimal_sets<T: Ord + Clone>(family: &Family<T>) -> Family<T> {
    family
        .iter()
        .filter(|member| is_minimal(member, family))
        .cloned()
        .collect()
}

/// Filters a family down to its inclusion-maximal members.
pub fn find_maximal_sets<T: Ord + Clone>(family: &Family<T>) -> Family<T> {
    family
        .iter()
        .filter(|member| is_maximal(member, family))
        .cloned()
        .collect()
}

/// Returns `subset ∪ {element}`.
pub fn with_element<T: Ord + Clone>(subset: &Set<T>, element: &T) -> Set<T> {
    let mut extended = subset.clone();
    extended.insert(element.clone());
    extended
}

/// Returns `subset − {element}`.
pub fn without_element<T: Ord + Clone>(subset: &Set<T>, element: &T) -> Set<T> {
    let mut reduced = subset.clone();
    reduced.remove(element);
    reduced
}

/// Returns `ground − subset`.
pub fn complement<T: Ord + Clone>(ground: &Set<T>, subset: &Set<T>) -> Set<T> {
    ground.difference(subset).cloned().collect()
}

/// Maps every member of `family` to its complement in `ground`.
pub fn family_complements<T: Ord + Clone>(ground: &Set<T>, family: &Family<T>) -> Family<T> {
    family
        .iter()
        .map(|member| complement(ground, member))
        .collect()
}

/// Evaluates `f` on every subset of `ground`.
pub fn tabulate<T, V, F>(ground: &Set<T>, f: F) -> BTreeMap<Set<T>, V>
where
    T: Ord + Clone,
    F: Fn(&Set<T>) -> V,
{
    power_set(ground)
        .into_iter()
        .map(|subset| {
            let value = f(&subset);
            (subset, value)
        })
        .collect()
}

/// Returns whether every member of `family` is contained in `ground`.
pub fn all_within<T: Ord>(ground: &Set<T>, family: &Family<T>) -> bool {
    family.iter().all(|member| member.is_subset(ground))
}
