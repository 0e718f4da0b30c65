use matroid_core::sets::{complement, without_element};
use matroid_core::{Element, Set};

use crate::Matroid;

// Every test answers false for sets reaching outside the ground set.
impl<T: Element> Matroid<T> {
    /// r(X) = |X|.
    pub fn is_independent(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.rank_of(subset) == subset.len()
    }

    /// r(X) < |X|.
    pub fn is_dependent(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.rank_of(subset) < subset.len()
    }

    /// Independent and of full rank.
    pub fn is_basis(&self, subset: &Set<T>) -> bool {
        self.is_independent(subset) && subset.len() == self.rank()
    }

    /// Dependent, with every one-element deletion independent.
    pub fn is_circuit(&self, subset: &Set<T>) -> bool {
        self.is_dependent(subset)
            && subset
                .iter()
                .all(|element| self.is_independent(&without_element(subset, element)))
    }

    /// r(X) = r(E).
    pub fn is_spanning(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.rank_of(subset) == self.rank()
    }

    /// cl(X) = X.
    pub fn is_flat(&self, subset: &Set<T>) -> bool {
        self.is_closed(subset)
    }

    /// A flat of rank r(E) − 1.
    pub fn is_hyperplane(&self, subset: &Set<T>) -> bool {
        self.rank() > 0 && self.is_flat(subset) && self.rank_of(subset) + 1 == self.rank()
    }

    /// r(E − X) = r(E).
    pub fn is_coindependent(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground)
            && self.rank_of(&complement(&self.ground, subset)) == self.rank()
    }

    /// E − X is a basis.
    pub fn is_cobasis(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.is_basis(&complement(&self.ground, subset))
    }

    /// E − X is a hyperplane.
    pub fn is_cocircuit(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.is_hyperplane(&complement(&self.ground, subset))
    }

    /// E − X is independent.
    pub fn is_cospanning(&self, subset: &Set<T>) -> bool {
        subset.is_subset(&self.ground) && self.is_independent(&complement(&self.ground, subset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set, Payload};

    /// Rank 2 on {1..4}: 4 is a loop and {1, 2, 3} a triangle.
    fn sample() -> Matroid<u8> {
        Matroid::new(
            set([1u8, 2, 3, 4]),
            Payload::Circuits(family([vec![4u8], vec![1, 2, 3]])),
        )
        .unwrap()
    }

    #[test]
    fn rank_based_membership() {
        let matroid = sample();
        assert!(matroid.is_independent(&set([1, 2])));
        assert!(matroid.is_independent(&Set::new()));
        assert!(matroid.is_dependent(&set([4])));
        assert!(matroid.is_basis(&set([2, 3])));
        assert!(!matroid.is_basis(&set([2])));
        assert!(matroid.is_circuit(&set([1, 2, 3])));
        assert!(!matroid.is_circuit(&set([1, 2, 3, 4])));
        assert!(matroid.is_spanning(&set([1, 3, 4])));
    }

    #[test]
    fn closed_set_membership() {
        let matroid = sample();
        assert!(matroid.is_flat(&set([4])));
        assert!(!matroid.is_flat(&Set::new()));
        assert!(matroid.is_hyperplane(&set([1, 4])));
        assert!(!matroid.is_hyperplane(&set([1])));
    }

    #[test]
    fn dual_membership_through_complements() {
        let matroid = sample();
        assert!(matroid.is_coindependent(&set([1, 4])));
        assert!(!matroid.is_coindependent(&set([1, 2])));
        assert!(matroid.is_cobasis(&set([1, 4])));
        assert!(matroid.is_cocircuit(&set([2, 3])));
        assert!(matroid.is_cospanning(&set([2, 3, 4])));
        assert_eq!(
            matroid.cocircuits(),
            &family([vec![1u8, 2], vec![1, 3], vec![2, 3]])
        );
    }

    #[test]
    fn sets_outside_ground_set_are_never_members() {
        let matroid = sample();
        let outside = set([1, 9]);
        assert!(!matroid.is_independent(&outside));
        assert!(!matroid.is_dependent(&outside));
        assert!(!matroid.is_circuit(&outside));
        assert!(!matroid.is_spanning(&outside));
        assert!(!matroid.is_flat(&outside));
        assert!(!matroid.is_coindependent(&outside));
        assert!(!matroid.is_cospanning(&outside));
    }
}
