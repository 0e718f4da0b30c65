use matroid_construct::bases;
use matroid_core::sets::complement;
use matroid_core::{Element, ErrorInfo, Family, MatroidError, Payload, Set};

use crate::matroid::ensure_within;
use crate::Matroid;

impl<T: Element> Matroid<T> {
    /// M|X: the circuits of M contained in X, on ground set X.
    pub fn restrict_to(&self, subset: &Set<T>) -> Result<Matroid<T>, MatroidError> {
        ensure_within(&self.ground, subset, "restrict")?;
        let kept: Family<T> = self
            .circuits()
            .iter()
            .filter(|circuit| circuit.is_subset(subset))
            .cloned()
            .collect();
        let restricted = bases::from_circuits(subset, &kept);
        tracing::debug!(from = self.size(), to = subset.len(), "restricted matroid");
        Ok(Matroid::from_trusted(subset.clone(), Payload::Bases(restricted)))
    }

    /// M \ X = M|(E − X).
    pub fn delete(&self, subset: &Set<T>) -> Result<Matroid<T>, MatroidError> {
        ensure_within(&self.ground, subset, "delete")?;
        self.restrict_to(&complement(&self.ground, subset))
    }

    /// M / X = (M* \ X)*.
    pub fn contract(&self, subset: &Set<T>) -> Result<Matroid<T>, MatroidError> {
        ensure_within(&self.ground, subset, "contract")?;
        Ok(self.dual().delete(subset)?.build_dual())
    }

    /// M|{e}.
    pub fn restrict_to_element(&self, element: &T) -> Result<Matroid<T>, MatroidError> {
        self.restrict_to(&Set::from([element.clone()]))
    }

    /// M \ {e}.
    pub fn delete_element(&self, element: &T) -> Result<Matroid<T>, MatroidError> {
        self.delete(&Set::from([element.clone()]))
    }

    /// M / {e}.
    pub fn contract_element(&self, element: &T) -> Result<Matroid<T>, MatroidError> {
        self.contract(&Set::from([element.clone()]))
    }

    /// M / C \ D for disjoint C, D ⊆ E.
    pub fn minor(
        &self,
        contracted: &Set<T>,
        deleted: &Set<T>,
    ) -> Result<Matroid<T>, MatroidError> {
        ensure_within(&self.ground, contracted, "minor")?;
        ensure_within(&self.ground, deleted, "minor")?;
        if !contracted.is_disjoint(deleted) {
            let info = ErrorInfo::new(
                "overlapping-minor-sets",
                "contracted and deleted sets must be disjoint",
            )
            .with_context("shared", contracted.intersection(deleted).count().to_string());
            return Err(MatroidError::DomainViolation(info));
        }
        self.contract(contracted)?.delete(deleted)
    }
}
