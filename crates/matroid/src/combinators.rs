use std::sync::Arc;

use matroid_construct::tables::{memoize, select};
use matroid_core::sets::power_set;
use matroid_core::{Element, ErrorInfo, Family, MatroidError, Payload, Set};

use crate::Matroid;

fn ensure_disjoint<T: Element>(
    first: &Set<T>,
    second: &Set<T>,
    operation: &'static str,
) -> Result<(), MatroidError> {
    if first.is_disjoint(second) {
        return Ok(());
    }
    let shared: Vec<String> = first
        .intersection(second)
        .map(|element| format!("{element:?}"))
        .collect();
    let info = ErrorInfo::new("ground-sets-not-disjoint", "ground sets must be disjoint")
        .with_context("operation", operation)
        .with_context("shared", shared.join(","))
        .with_hint("relabel one of the matroids before combining them");
    Err(MatroidError::DomainViolation(info))
}

impl<T: Element> Matroid<T> {
    /// M1 ⊕ M2 on disjoint ground sets; its circuits are those of either side.
    pub fn direct_sum(&self, other: &Matroid<T>) -> Result<Matroid<T>, MatroidError> {
        ensure_disjoint(&self.ground, &other.ground, "direct-sum")?;
        let ground: Set<T> = self.ground.union(&other.ground).cloned().collect();
        let circuits: Family<T> = self
            .circuits()
            .iter()
            .chain(other.circuits())
            .cloned()
            .collect();
        tracing::debug!(left = self.size(), right = other.size(), "direct sum");
        Ok(Matroid::from_trusted(ground, Payload::Circuits(circuits)))
    }

    /// M1 ∨ M2 on E1 ∪ E2, whose independent sets are unions I1 ∪ I2.
    ///
    /// The rank is r(X) = min over Y ⊆ X of r1(Y ∩ E1) + r2(Y ∩ E2) + |X − Y|.
    /// The ground sets may overlap.
    pub fn union(&self, other: &Matroid<T>) -> Matroid<T> {
        let ground: Set<T> = self.ground.union(&other.ground).cloned().collect();
        let (left_ground, left_rank) = (self.ground.clone(), Arc::clone(self.rank_function()));
        let (right_ground, right_rank) = (other.ground.clone(), Arc::clone(other.rank_function()));
        let rank = memoize(&ground, move |subset: &Set<T>| {
            power_set(subset)
                .iter()
                .map(|part| {
                    let left: Set<T> = part.intersection(&left_ground).cloned().collect();
                    let right: Set<T> = part.intersection(&right_ground).cloned().collect();
                    left_rank(&left) + right_rank(&right) + subset.len() - part.len()
                })
                .min()
                .unwrap_or(0)
        });
        tracing::debug!(left = self.size(), right = other.size(), size = ground.len(), "matroid union");
        Matroid::from_trusted(ground, Payload::RankFunction(rank))
    }

    /// Free product M1 □ M2 on disjoint ground sets.
    ///
    /// A set B of size r1 + r2 is a basis when B ∩ E1 is independent in M1
    /// and B ∩ E2 spans M2.
    pub fn free_product(&self, other: &Matroid<T>) -> Result<Matroid<T>, MatroidError> {
        ensure_disjoint(&self.ground, &other.ground, "free-product")?;
        let ground: Set<T> = self.ground.union(&other.ground).cloned().collect();
        let size = self.rank() + other.rank();
        let left_rank = self.rank_function();
        let right_rank = other.rank_function();
        let right_full = other.rank();
        let bases = select(&ground, |candidate| {
            if candidate.len() != size {
                return false;
            }
            let left: Set<T> = candidate.intersection(&self.ground).cloned().collect();
            let right: Set<T> = candidate.intersection(&other.ground).cloned().collect();
            left_rank(&left) == left.len() && right_rank(&right) == right_full
        });
        tracing::debug!(left = self.size(), right = other.size(), bases = bases.len(), "free product");
        Ok(Matroid::from_trusted(ground, Payload::Bases(bases)))
    }
}
