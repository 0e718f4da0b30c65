//! Axiom-tagged payloads.
//!
//! The tag of a payload is its variant, so a payload can never exist without
//! the axiom system it is meant to satisfy.

use std::fmt;
use std::sync::Arc;

use crate::sets::{Family, Set};
use crate::types::Axiom;

/// Rank function `r : 2^E → ℕ`.
pub type RankFn<T> = Arc<dyn Fn(&Set<T>) -> usize + Send + Sync>;

/// Nullity function `n : 2^E → ℕ`.
pub type NullityFn<T> = Arc<dyn Fn(&Set<T>) -> usize + Send + Sync>;

/// Closure operator `cl : 2^E → 2^E`.
pub type ClosureFn<T> = Arc<dyn Fn(&Set<T>) -> Set<T> + Send + Sync>;

/// Girth function `g : 2^E → ℕ ∪ {∞}`; `None` stands for ∞.
pub type GirthFn<T> = Arc<dyn Fn(&Set<T>) -> Option<usize> + Send + Sync>;

/// Data defining a matroid under one axiom system.
#[derive(Clone)]
pub enum Payload<T> {
    /// Family of independent sets.
    IndependentSets(Family<T>),
    /// Family of dependent sets.
    DependentSets(Family<T>),
    /// Family of bases.
    Bases(Family<T>),
    /// Family of circuits.
    Circuits(Family<T>),
    /// Rank function.
    RankFunction(RankFn<T>),
    /// Nullity function.
    NullityFunction(NullityFn<T>),
    /// Closure function.
    ClosureFunction(ClosureFn<T>),
    /// Family of flats.
    Flats(Family<T>),
    /// Family of open sets.
    OpenSets(Family<T>),
    /// Family of hyperplanes.
    Hyperplanes(Family<T>),
    /// Family of spanning sets.
    SpanningSets(Family<T>),
}

impl<T> Payload<T> {
    /// Returns the axiom system this payload is tagged with.
    pub fn axiom(&self) -> Axiom {
        match self {
            Payload::IndependentSets(_) => Axiom::IndependentSets,
            Payload::DependentSets(_) => Axiom::DependentSets,
            Payload::Bases(_) => Axiom::Bases,
            Payload::Circuits(_) => Axiom::Circuits,
            Payload::RankFunction(_) => Axiom::RankFunction,
            Payload::NullityFunction(_) => Axiom::NullityFunction,
            Payload::ClosureFunction(_) => Axiom::ClosureFunction,
            Payload::Flats(_) => Axiom::Flats,
            Payload::OpenSets(_) => Axiom::OpenSets,
            Payload::Hyperplanes(_) => Axiom::Hyperplanes,
            Payload::SpanningSets(_) => Axiom::SpanningSets,
        }
    }

    /// Wraps a family under a family-valued axiom; `None` for function-valued ones.
    pub fn from_family(axiom: Axiom, sets: Family<T>) -> Option<Self> {
        let payload = match axiom {
            Axiom::IndependentSets => Payload::IndependentSets(sets),
            Axiom::DependentSets => Payload::DependentSets(sets),
            Axiom::Bases => Payload::Bases(sets),
            Axiom::Circuits => Payload::Circuits(sets),
            Axiom::Flats => Payload::Flats(sets),
            Axiom::OpenSets => Payload::OpenSets(sets),
            Axiom::Hyperplanes => Payload::Hyperplanes(sets),
            Axiom::SpanningSets => Payload::SpanningSets(sets),
            Axiom::RankFunction | Axiom::NullityFunction | Axiom::ClosureFunction => return None,
        };
        Some(payload)
    }

    /// Returns the family carried by a family-valued payload.
    pub fn as_family(&self) -> Option<&Family<T>> {
        match self {
            Payload::IndependentSets(sets)
            | Payload::DependentSets(sets)
            | Payload::Bases(sets)
            | Payload::Circuits(sets)
            | Payload::Flats(sets)
            | Payload::OpenSets(sets)
            | Payload::Hyperplanes(sets)
            | Payload::SpanningSets(sets) => Some(sets),
            Payload::RankFunction(_) | Payload::NullityFunction(_) | Payload::ClosureFunction(_) => {
                None
            }
        }
    }
}

impl<T: 'static> Payload<T> {
    /// Wraps a rank function.
    pub fn rank_function(rank: impl Fn(&Set<T>) -> usize + Send + Sync + 'static) -> Self {
        Payload::RankFunction(Arc::new(rank))
    }

    /// Wraps a nullity function.
    pub fn nullity_function(nullity: impl Fn(&Set<T>) -> usize + Send + Sync + 'static) -> Self {
        Payload::NullityFunction(Arc::new(nullity))
    }

    /// Wraps a closure operator.
    pub fn closure_function(closure: impl Fn(&Set<T>) -> Set<T> + Send + Sync + 'static) -> Self {
        Payload::ClosureFunction(Arc::new(closure))
    }
}

impl<T: fmt::Debug> fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_family() {
            Some(sets) => f.debug_tuple(self.axiom().label()).field(sets).finish(),
            None => f
                .debug_tuple(self.axiom().label())
                .field(&format_args!("<fn>"))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::{family, set};

    #[test]
    fn tag_follows_variant() {
        for axiom in Axiom::ALL {
            match Payload::from_family(axiom, family([vec![1u8]])) {
                Some(payload) => {
                    assert!(axiom.is_family_valued());
                    assert_eq!(payload.axiom(), axiom);
                }
                None => assert!(!axiom.is_family_valued()),
            }
        }
    }

    #[test]
    fn function_payloads_are_opaque_in_debug() {
        let payload: Payload<u8> = Payload::closure_function(|x: &Set<u8>| x.clone());
        assert_eq!(format!("{payload:?}"), "closure-function(<fn>)");
        assert!(payload.as_family().is_none());
        if let Payload::ClosureFunction(cl) = payload {
            assert_eq!(cl(&set([1])), set([1]));
        }
    }
}
