use matroid_core::sets::family_complements;
use matroid_core::{ClosureFn, Element, Family, NullityFn, Payload, RankFn};

use crate::Matroid;

impl<T: Element> Matroid<T> {
    /// Dual matroid on the same ground set, with bases {E − B}.
    ///
    /// Built once and cached; `dual().dual()` is equal to `self`.
    pub fn dual(&self) -> &Matroid<T> {
        self.dual.get_or_init(|| Box::new(self.build_dual()))
    }

    pub(crate) fn build_dual(&self) -> Matroid<T> {
        tracing::debug!(size = self.size(), "building dual matroid");
        let cobases = family_complements(&self.ground, self.bases());
        Matroid::from_trusted(self.ground.clone(), Payload::Bases(cobases))
    }

    /// Independent sets of the dual.
    pub fn coindependent_sets(&self) -> &Family<T> {
        self.dual().independent_sets()
    }

    /// Dependent sets of the dual.
    pub fn codependent_sets(&self) -> &Family<T> {
        self.dual().dependent_sets()
    }

    /// Bases of the dual.
    pub fn cobases(&self) -> &Family<T> {
        self.dual().bases()
    }

    /// Circuits of the dual (bonds).
    pub fn cocircuits(&self) -> &Family<T> {
        self.dual().circuits()
    }

    /// Rank function of the dual.
    pub fn corank_function(&self) -> &RankFn<T> {
        self.dual().rank_function()
    }

    /// Nullity function of the dual.
    pub fn conullity_function(&self) -> &NullityFn<T> {
        self.dual().nullity_function()
    }

    /// Closure operator of the dual.
    pub fn coclosure_function(&self) -> &ClosureFn<T> {
        self.dual().closure_function()
    }

    /// Flats of the dual.
    pub fn coflats(&self) -> &Family<T> {
        self.dual().flats()
    }

    /// Open sets of the dual.
    pub fn coopen_sets(&self) -> &Family<T> {
        self.dual().open_sets()
    }

    /// Hyperplanes of the dual.
    pub fn cohyperplanes(&self) -> &Family<T> {
        self.dual().hyperplanes()
    }

    /// Spanning sets of the dual.
    pub fn cospanning_sets(&self) -> &Family<T> {
        self.dual().spanning_sets()
    }
}
