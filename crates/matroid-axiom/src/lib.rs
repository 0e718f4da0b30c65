#![deny(missing_docs)]
#![doc = "Axiom checkers deciding whether a (ground set, payload) pair is a matroid under a given \
cryptomorphic axiom system. Every predicate is exhaustive over the power set of the ground set."]

/// Flats, open sets, hyperplanes and spanning sets.
pub mod closed_sets;
/// Rank, nullity, closure and girth functions.
pub mod functions;
/// Independent sets, dependent sets, bases and circuits.
pub mod independence;

use matroid_core::{Element, Payload, Set};

pub use closed_sets::{
    satisfies_flats_axiom, satisfies_hyperplanes_axiom, satisfies_open_sets_axiom,
    satisfies_spanning_sets_axiom, FlatsAssumptions, HyperplanesAssumptions,
    OpenSetsAssumptions, SpanningSetsAssumptions,
};
pub use functions::{
    satisfies_closure_axiom, satisfies_girth_function_axiom, satisfies_nullity_function_axiom,
    satisfies_rank_function_axiom, ClosureAssumptions, GirthAssumptions, NullityAssumptions,
    RankAssumptions,
};
pub use independence::{
    satisfies_bases_axiom, satisfies_circuits_axiom, satisfies_dependent_axiom,
    satisfies_independent_axiom, BasesAssumptions, CircuitsAssumptions, DependentAssumptions,
    IndependentAssumptions,
};

/// Decides whether `payload` satisfies the axiom system it is tagged with,
/// checking every sub-condition.
#[tracing::instrument(level = "debug", skip_all, fields(axiom = payload.axiom().label(), size = ground.len()))]
pub fn satisfies<T: Element>(ground: &Set<T>, payload: &Payload<T>) -> bool {
    match payload {
        Payload::IndependentSets(sets) => {
            satisfies_independent_axiom(ground, sets, &IndependentAssumptions::default())
        }
        Payload::DependentSets(sets) => {
            satisfies_dependent_axiom(ground, sets, &DependentAssumptions::default())
        }
        Payload::Bases(sets) => satisfies_bases_axiom(ground, sets, &BasesAssumptions::default()),
        Payload::Circuits(sets) => {
            satisfies_circuits_axiom(ground, sets, &CircuitsAssumptions::default())
        }
        Payload::RankFunction(rank) => {
            satisfies_rank_function_axiom(ground, rank.as_ref(), &RankAssumptions::default())
        }
        Payload::NullityFunction(nullity) => satisfies_nullity_function_axiom(
            ground,
            nullity.as_ref(),
            &NullityAssumptions::default(),
        ),
        Payload::ClosureFunction(closure) => {
            satisfies_closure_axiom(ground, closure.as_ref(), &ClosureAssumptions::default())
        }
        Payload::Flats(sets) => satisfies_flats_axiom(ground, sets, &FlatsAssumptions::default()),
        Payload::OpenSets(sets) => {
            satisfies_open_sets_axiom(ground, sets, &OpenSetsAssumptions::default())
        }
        Payload::Hyperplanes(sets) => {
            satisfies_hyperplanes_axiom(ground, sets, &HyperplanesAssumptions::default())
        }
        Payload::SpanningSets(sets) => {
            satisfies_spanning_sets_axiom(ground, sets, &SpanningSetsAssumptions::default())
        }
    }
}

/// Logs the failed sub-condition and returns `false`.
pub(crate) fn reject(axiom: &'static str, condition: &'static str) -> bool {
    tracing::debug!(axiom, condition, "axiom check failed");
    false
}
