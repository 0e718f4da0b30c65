use std::fmt;

use serde::{Deserialize, Serialize};

/// Cryptomorphic axiom systems a matroid can be defined by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axiom {
    /// Independent sets.
    IndependentSets,
    /// Dependent sets.
    DependentSets,
    /// Bases.
    Bases,
    /// Circuits.
    Circuits,
    /// Rank function.
    RankFunction,
    /// Nullity function.
    NullityFunction,
    /// Closure function.
    ClosureFunction,
    /// Flats.
    Flats,
    /// Open sets.
    OpenSets,
    /// Hyperplanes.
    Hyperplanes,
    /// Spanning sets.
    SpanningSets,
}

impl Axiom {
    /// Every axiom system, in declaration order.
    pub const ALL: [Axiom; 11] = [
        Axiom::IndependentSets,
        Axiom::DependentSets,
        Axiom::Bases,
        Axiom::Circuits,
        Axiom::RankFunction,
        Axiom::NullityFunction,
        Axiom::ClosureFunction,
        Axiom::Flats,
        Axiom::OpenSets,
        Axiom::Hyperplanes,
        Axiom::SpanningSets,
    ];

    /// Returns whether payloads of this axiom are families of subsets.
    pub fn is_family_valued(self) -> bool {
        !matches!(
            self,
            Axiom::RankFunction | Axiom::NullityFunction | Axiom::ClosureFunction
        )
    }

    /// Short stable label used in error context and log fields.
    pub fn label(self) -> &'static str {
        match self {
            Axiom::IndependentSets => "independent-sets",
            Axiom::DependentSets => "dependent-sets",
            Axiom::Bases => "bases",
            Axiom::Circuits => "circuits",
            Axiom::RankFunction => "rank-function",
            Axiom::NullityFunction => "nullity-function",
            Axiom::ClosureFunction => "closure-function",
            Axiom::Flats => "flats",
            Axiom::OpenSets => "open-sets",
            Axiom::Hyperplanes => "hyperplanes",
            Axiom::SpanningSets => "spanning-sets",
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axiom::IndependentSets => "independent sets",
            Axiom::DependentSets => "dependent sets",
            Axiom::Bases => "bases",
            Axiom::Circuits => "circuits",
            Axiom::RankFunction => "a rank function",
            Axiom::NullityFunction => "a nullity function",
            Axiom::ClosureFunction => "a closure function",
            Axiom::Flats => "flats",
            Axiom::OpenSets => "open sets",
            Axiom::Hyperplanes => "hyperplanes",
            Axiom::SpanningSets => "spanning sets",
        };
        write!(f, "the axiom for {name}")
    }
}
