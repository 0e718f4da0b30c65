use std::fmt;
use std::sync::OnceLock;

use matroid_construct::{
    bases, circuits, closure_function, dependent_sets, flats, hyperplanes, independent_sets,
    nullity_function, open_sets, rank_function, spanning_sets,
};
use matroid_core::{
    Axiom, ClosureFn, Element, ErrorInfo, Family, MatroidError, NullityFn, Payload, RankFn, Set,
};

/// Write-once slots for every derived view.
#[derive(Clone)]
struct Views<T> {
    independent_sets: OnceLock<Family<T>>,
    dependent_sets: OnceLock<Family<T>>,
    bases: OnceLock<Family<T>>,
    circuits: OnceLock<Family<T>>,
    rank_function: OnceLock<RankFn<T>>,
    nullity_function: OnceLock<NullityFn<T>>,
    closure_function: OnceLock<ClosureFn<T>>,
    flats: OnceLock<Family<T>>,
    open_sets: OnceLock<Family<T>>,
    hyperplanes: OnceLock<Family<T>>,
    spanning_sets: OnceLock<Family<T>>,
}

impl<T> Default for Views<T> {
    fn default() -> Self {
        Self {
            independent_sets: OnceLock::new(),
            dependent_sets: OnceLock::new(),
            bases: OnceLock::new(),
            circuits: OnceLock::new(),
            rank_function: OnceLock::new(),
            nullity_function: OnceLock::new(),
            closure_function: OnceLock::new(),
            flats: OnceLock::new(),
            open_sets: OnceLock::new(),
            hyperplanes: OnceLock::new(),
            spanning_sets: OnceLock::new(),
        }
    }
}

/// Finite matroid defined by a ground set and a payload under one axiom system.
///
/// The value is logically immutable: the native payload never changes, and
/// every other representation is derived on first access and cached for the
/// lifetime of the instance. Concurrent first accesses are safe; the cache
/// keeps whichever equal value lands first.
#[derive(Clone)]
pub struct Matroid<T> {
    pub(crate) ground: Set<T>,
    payload: Payload<T>,
    views: Views<T>,
    pub(crate) dual: OnceLock<Box<Matroid<T>>>,
}

impl<T: Element> fmt::Debug for Matroid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matroid")
            .field("ground", &self.ground)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

impl<T: Element> Matroid<T> {
    /// Constructs a matroid, rejecting payloads that violate their axiom system.
    pub fn new(ground: Set<T>, payload: Payload<T>) -> Result<Self, MatroidError> {
        Self::with_validation(ground, payload, true)
    }

    /// Constructs a matroid, running the axiom checker only when `validate` is set.
    ///
    /// Skipping validation on a payload that is not a matroid makes every
    /// derived view unspecified.
    pub fn with_validation(
        ground: Set<T>,
        payload: Payload<T>,
        validate: bool,
    ) -> Result<Self, MatroidError> {
        let axiom = payload.axiom();
        if validate && !matroid_axiom::satisfies(&ground, &payload) {
            let info = ErrorInfo::new(
                "axiom-violation",
                format!("payload does not satisfy {axiom}"),
            )
            .with_context("axiom", axiom.label())
            .with_context("ground_size", ground.len().to_string())
            .with_hint("check the payload against the axiom system it is tagged with");
            return Err(MatroidError::AxiomViolation(info));
        }
        tracing::debug!(axiom = axiom.label(), size = ground.len(), validate, "constructed matroid");
        Ok(Self::from_trusted(ground, payload))
    }

    /// Wraps a payload already known to satisfy its axiom system.
    pub fn from_trusted(ground: Set<T>, payload: Payload<T>) -> Self {
        Self {
            ground,
            payload,
            views: Views::default(),
            dual: OnceLock::new(),
        }
    }

    /// Axiom system of the native payload.
    pub fn axiom(&self) -> Axiom {
        self.payload.axiom()
    }

    /// Ground set E.
    pub fn ground_set(&self) -> &Set<T> {
        &self.ground
    }

    /// |E|.
    pub fn size(&self) -> usize {
        self.ground.len()
    }

    /// Native payload the matroid was constructed from.
    pub fn payload(&self) -> &Payload<T> {
        &self.payload
    }

    fn cached<'a, V>(
        &'a self,
        slot: &'a OnceLock<V>,
        native: Option<&'a V>,
        target: Axiom,
        derive: fn(&Set<T>, &Payload<T>) -> V,
    ) -> &'a V {
        if let Some(value) = native {
            return value;
        }
        slot.get_or_init(|| {
            tracing::trace!(
                source = self.axiom().label(),
                target = target.label(),
                size = self.ground.len(),
                "deriving view"
            );
            derive(&self.ground, &self.payload)
        })
    }

    /// Independent sets.
    pub fn independent_sets(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::IndependentSets(sets) => Some(sets),
            _ => None,
        };
        self.cached(
            &self.views.independent_sets,
            native,
            Axiom::IndependentSets,
            independent_sets::derive,
        )
    }

    /// Dependent sets.
    pub fn dependent_sets(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::DependentSets(sets) => Some(sets),
            _ => None,
        };
        self.cached(
            &self.views.dependent_sets,
            native,
            Axiom::DependentSets,
            dependent_sets::derive,
        )
    }

    /// Bases.
    pub fn bases(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::Bases(sets) => Some(sets),
            _ => None,
        };
        self.cached(&self.views.bases, native, Axiom::Bases, bases::derive)
    }

    /// Circuits.
    pub fn circuits(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::Circuits(sets) => Some(sets),
            _ => None,
        };
        self.cached(&self.views.circuits, native, Axiom::Circuits, circuits::derive)
    }

    /// Rank function.
    pub fn rank_function(&self) -> &RankFn<T> {
        let native = match &self.payload {
            Payload::RankFunction(rank) => Some(rank),
            _ => None,
        };
        self.cached(
            &self.views.rank_function,
            native,
            Axiom::RankFunction,
            rank_function::derive,
        )
    }

    /// Nullity function.
    pub fn nullity_function(&self) -> &NullityFn<T> {
        let native = match &self.payload {
            Payload::NullityFunction(nullity) => Some(nullity),
            _ => None,
        };
        self.cached(
            &self.views.nullity_function,
            native,
            Axiom::NullityFunction,
            nullity_function::derive,
        )
    }

    /// Closure operator.
    pub fn closure_function(&self) -> &ClosureFn<T> {
        let native = match &self.payload {
            Payload::ClosureFunction(closure) => Some(closure),
            _ => None,
        };
        self.cached(
            &self.views.closure_function,
            native,
            Axiom::ClosureFunction,
            closure_function::derive,
        )
    }

    /// Flats.
    pub fn flats(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::Flats(sets) => Some(sets),
            _ => None,
        };
        self.cached(&self.views.flats, native, Axiom::Flats, flats::derive)
    }

    /// Open sets.
    pub fn open_sets(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::OpenSets(sets) => Some(sets),
            _ => None,
        };
        self.cached(&self.views.open_sets, native, Axiom::OpenSets, open_sets::derive)
    }

    /// Hyperplanes.
    pub fn hyperplanes(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::Hyperplanes(sets) => Some(sets),
            _ => None,
        };
        self.cached(
            &self.views.hyperplanes,
            native,
            Axiom::Hyperplanes,
            hyperplanes::derive,
        )
    }

    /// Spanning sets.
    pub fn spanning_sets(&self) -> &Family<T> {
        let native = match &self.payload {
            Payload::SpanningSets(sets) => Some(sets),
            _ => None,
        };
        self.cached(
            &self.views.spanning_sets,
            native,
            Axiom::SpanningSets,
            spanning_sets::derive,
        )
    }

    /// Derives the view under `target` as a standalone payload.
    pub fn view(&self, target: Axiom) -> Payload<T> {
        match target {
            Axiom::IndependentSets => Payload::IndependentSets(self.independent_sets().clone()),
            Axiom::DependentSets => Payload::DependentSets(self.dependent_sets().clone()),
            Axiom::Bases => Payload::Bases(self.bases().clone()),
            Axiom::Circuits => Payload::Circuits(self.circuits().clone()),
            Axiom::RankFunction => Payload::RankFunction(self.rank_function().clone()),
            Axiom::NullityFunction => Payload::NullityFunction(self.nullity_function().clone()),
            Axiom::ClosureFunction => Payload::ClosureFunction(self.closure_function().clone()),
            Axiom::Flats => Payload::Flats(self.flats().clone()),
            Axiom::OpenSets => Payload::OpenSets(self.open_sets().clone()),
            Axiom::Hyperplanes => Payload::Hyperplanes(self.hyperplanes().clone()),
            Axiom::SpanningSets => Payload::SpanningSets(self.spanning_sets().clone()),
        }
    }
}

/// Fails with `DomainViolation` unless `subset ⊆ ground`.
pub(crate) fn ensure_within<T: Element>(
    ground: &Set<T>,
    subset: &Set<T>,
    operation: &'static str,
) -> Result<(), MatroidError> {
    if subset.is_subset(ground) {
        return Ok(());
    }
    let outside: Vec<String> = subset
        .difference(ground)
        .map(|element| format!("{element:?}"))
        .collect();
    let info = ErrorInfo::new("not-within-ground-set", "set is not contained in the ground set")
        .with_context("operation", operation)
        .with_context("outside", outside.join(","));
    Err(MatroidError::DomainViolation(info))
}
