use std::collections::BTreeMap;
use std::sync::Arc;

use matroid_core::sets::{complement, with_element};
use matroid_core::{Element, ErrorInfo, Family, GirthFn, MatroidError, Set};

use crate::Matroid;

impl<T: Element> Matroid<T> {
    /// r(E).
    pub fn rank(&self) -> usize {
        (self.rank_function())(&self.ground)
    }

    /// r(X). Elements outside the ground set are ignored.
    pub fn rank_of(&self, subset: &Set<T>) -> usize {
        let rank = self.rank_function();
        if subset.is_subset(&self.ground) {
            rank(subset)
        } else {
            rank(&self.restrict_set(subset))
        }
    }

    /// Rank of E in the dual, |E| − r(E).
    pub fn corank(&self) -> usize {
        self.size() - self.rank()
    }

    /// r*(X) = r(E − X) + |X| − r(E).
    pub fn corank_of(&self, subset: &Set<T>) -> usize {
        let inside = self.restrict_set(subset);
        let rest = complement(&self.ground, &inside);
        self.rank_of(&rest) + inside.len() - self.rank()
    }

    /// n(X) = |X| − r(X), over the part of X inside the ground set.
    pub fn nullity_of(&self, subset: &Set<T>) -> usize {
        let inside = self.restrict_set(subset);
        inside.len() - self.rank_of(&inside)
    }

    /// cl(X). Elements outside the ground set are ignored.
    pub fn closure(&self, subset: &Set<T>) -> Set<T> {
        let closure = self.closure_function();
        if subset.is_subset(&self.ground) {
            closure(subset)
        } else {
            closure(&self.restrict_set(subset))
        }
    }

    /// Whether cl(X) = X.
    pub fn is_closed(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.closure(subset) == *subset
    }

    /// The unique circuit inside `basis ∪ {element}`.
    ///
    /// Fails with `PreconditionViolation` when `element` is not in E − B, or
    /// when `basis` is not a basis.
    pub fn fundamental_circuit(&self, element: &T, basis: &Set<T>) -> Result<Set<T>, MatroidError> {
        if !self.ground.contains(element) || basis.contains(element) {
            let info = ErrorInfo::new(
                "element-not-outside-basis",
                "element must belong to the ground set but not to the basis",
            )
            .with_context("element", format!("{element:?}"));
            return Err(MatroidError::PreconditionViolation(info));
        }
        if !self.bases().contains(basis) {
            let info = ErrorInfo::new("not-a-basis", "set is not a basis of the matroid")
                .with_context("basis", format!("{basis:?}"));
            return Err(MatroidError::PreconditionViolation(info));
        }
        let extended = with_element(basis, element);
        self.circuits()
            .iter()
            .find(|circuit| circuit.is_subset(&extended))
            .cloned()
            .ok_or_else(|| {
                let info = ErrorInfo::new(
                    "missing-fundamental-circuit",
                    "no circuit found inside basis plus element",
                )
                .with_context("element", format!("{element:?}"))
                .with_hint("the matroid was probably built from an unvalidated payload");
                MatroidError::PreconditionViolation(info)
            })
    }

    /// Fundamental circuit of every element outside `basis`.
    pub fn fundamental_circuits(
        &self,
        basis: &Set<T>,
    ) -> Result<BTreeMap<T, Set<T>>, MatroidError> {
        complement(&self.ground, basis)
            .into_iter()
            .map(|element| {
                let circuit = self.fundamental_circuit(&element, basis)?;
                Ok((element, circuit))
            })
            .collect()
    }

    /// The unique cocircuit inside `(E − basis) ∪ {element}` for `element ∈ basis`.
    pub fn fundamental_cocircuit(
        &self,
        element: &T,
        basis: &Set<T>,
    ) -> Result<Set<T>, MatroidError> {
        if !basis.contains(element) {
            let info = ErrorInfo::new("element-not-in-basis", "element must belong to the basis")
                .with_context("element", format!("{element:?}"));
            return Err(MatroidError::PreconditionViolation(info));
        }
        let cobasis = complement(&self.ground, basis);
        if !self.bases().contains(basis) {
            let info = ErrorInfo::new("not-a-basis", "set is not a basis of the matroid")
                .with_context("basis", format!("{basis:?}"));
            return Err(MatroidError::PreconditionViolation(info));
        }
        self.dual().fundamental_circuit(element, &cobasis)
    }

    /// Fundamental cocircuit of every element of `basis`.
    pub fn fundamental_cocircuits(
        &self,
        basis: &Set<T>,
    ) -> Result<BTreeMap<T, Set<T>>, MatroidError> {
        basis
            .iter()
            .map(|element| {
                let cocircuit = self.fundamental_cocircuit(element, basis)?;
                Ok((element.clone(), cocircuit))
            })
            .collect()
    }

    /// g(X): size of the smallest circuit inside X, `None` when X is independent.
    pub fn girth_function(&self) -> GirthFn<T> {
        let circuits = self.circuits().clone();
        Arc::new(move |subset: &Set<T>| {
            circuits
                .iter()
                .filter(|circuit| circuit.is_subset(subset))
                .map(Set::len)
                .min()
        })
    }

    /// Whether `element ∈ cl(∅)`.
    pub fn is_loop(&self, element: &T) -> bool {
        self.loops().contains(element)
    }

    /// cl(∅).
    pub fn loops(&self) -> Set<T> {
        (self.closure_function())(&Set::new())
    }

    /// Whether `first = second` or `{first, second}` is a circuit.
    pub fn are_parallel(&self, first: &T, second: &T) -> bool {
        if first == second {
            return self.ground.contains(first);
        }
        let pair: Set<T> = [first.clone(), second.clone()].into_iter().collect();
        self.circuits().contains(&pair)
    }

    /// Maximal sets of pairwise parallel non-loop elements.
    pub fn parallel_classes(&self) -> Family<T> {
        let loops = self.loops();
        let mut classes = Family::new();
        let mut assigned = Set::new();
        for element in self.ground.iter().filter(|e| !loops.contains(*e)) {
            if assigned.contains(element) {
                continue;
            }
            let class: Set<T> = self
                .ground
                .iter()
                .filter(|other| !loops.contains(*other) && self.are_parallel(element, other))
                .cloned()
                .collect();
            assigned.extend(class.iter().cloned());
            classes.insert(class);
        }
        classes
    }

    /// Whether every parallel class is a singleton.
    pub fn parallel_classes_are_trivial(&self) -> bool {
        self.parallel_classes().iter().all(|class| class.len() == 1)
    }

    /// Whether `element` is a loop of the dual, i.e. lies in every basis.
    pub fn is_coloop(&self, element: &T) -> bool {
        self.dual().is_loop(element)
    }

    /// Elements lying in every basis.
    pub fn coloops(&self) -> Set<T> {
        self.dual().loops()
    }

    /// Whether the two elements are parallel in the dual.
    pub fn are_coparallel(&self, first: &T, second: &T) -> bool {
        self.dual().are_parallel(first, second)
    }

    /// No loops and no parallel pairs.
    pub fn is_simple(&self) -> bool {
        self.loops().is_empty() && self.parallel_classes_are_trivial()
    }

    /// Whether E itself is independent.
    pub fn is_free(&self) -> bool {
        self.rank() == self.size()
    }

    /// Whether the ground set is empty.
    pub fn is_empty(&self) -> bool {
        self.ground.is_empty()
    }

    fn restrict_set(&self, subset: &Set<T>) -> Set<T> {
        subset.intersection(&self.ground).cloned().collect()
    }
}
