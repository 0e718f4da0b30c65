#![deny(missing_docs)]
#![doc = "Conversion engine between the eleven cryptomorphic matroid representations. \
Each target module derives its representation from every source; `convert` is the full matrix."]

pub mod bases;
pub mod circuits;
pub mod closure_function;
pub mod dependent_sets;
pub mod flats;
pub mod hyperplanes;
pub mod independent_sets;
pub mod nullity_function;
pub mod open_sets;
pub mod rank_function;
pub mod spanning_sets;
pub mod tables;

use matroid_core::{Axiom, Element, Payload, Set};

/// Derives the `target` representation of the matroid `(ground, payload)`.
///
/// The payload is assumed to satisfy its axiom; converting an invalid payload
/// yields an unspecified (but well-formed) result. Converting to the payload's
/// own axiom returns a clone.
#[tracing::instrument(level = "trace", skip_all, fields(source = payload.axiom().label(), target = target.label()))]
pub fn convert<T: Element>(ground: &Set<T>, payload: &Payload<T>, target: Axiom) -> Payload<T> {
    match target {
        Axiom::IndependentSets => Payload::IndependentSets(independent_sets::derive(ground, payload)),
        Axiom::DependentSets => Payload::DependentSets(dependent_sets::derive(ground, payload)),
        Axiom::Bases => Payload::Bases(bases::derive(ground, payload)),
        Axiom::Circuits => Payload::Circuits(circuits::derive(ground, payload)),
        Axiom::RankFunction => Payload::RankFunction(rank_function::derive(ground, payload)),
        Axiom::NullityFunction => {
            Payload::NullityFunction(nullity_function::derive(ground, payload))
        }
        Axiom::ClosureFunction => {
            Payload::ClosureFunction(closure_function::derive(ground, payload))
        }
        Axiom::Flats => Payload::Flats(flats::derive(ground, payload)),
        Axiom::OpenSets => Payload::OpenSets(open_sets::derive(ground, payload)),
        Axiom::Hyperplanes => Payload::Hyperplanes(hyperplanes::derive(ground, payload)),
        Axiom::SpanningSets => Payload::SpanningSets(spanning_sets::derive(ground, payload)),
    }
}
