use std::collections::BTreeMap;

use itertools::Itertools;
use matroid_core::sets::subsets_of_size;
use matroid_core::{Element, Family, Set};

use crate::Matroid;

impl<T: Element> Matroid<T> {
    /// Rank-sized subsets of E that are not bases.
    pub fn non_bases(&self) -> Family<T> {
        let bases = self.bases();
        subsets_of_size(&self.ground, self.rank())
            .into_iter()
            .filter(|candidate| !bases.contains(candidate))
            .collect()
    }

    /// Same ground set, same rank and same non-bases.
    ///
    /// Comparing non-bases alone would confuse matroids such as U(1,2) and
    /// U(2,2), which both have none.
    pub fn is_equal_to(&self, other: &Matroid<T>) -> bool {
        self.ground == other.ground
            && self.rank() == other.rank()
            && self.non_bases() == other.non_bases()
    }

    /// First bijection E → E' in permutation order of E' that maps the
    /// non-bases of `self` onto those of `other`.
    #[tracing::instrument(level = "debug", skip_all, fields(size = self.size()))]
    pub fn isomorphism_to<U: Element>(&self, other: &Matroid<U>) -> Option<BTreeMap<T, U>> {
        if self.size() != other.size() || self.rank() != other.rank() {
            return None;
        }
        let source = self.non_bases();
        let target = other.non_bases();
        if source.len() != target.len() || self.loops().len() != other.loops().len() {
            return None;
        }
        if self.is_empty() {
            return Some(BTreeMap::new());
        }
        let domain: Vec<&T> = self.ground.iter().collect();
        let found = other
            .ground_set()
            .iter()
            .permutations(domain.len())
            .find(|image| {
                source.iter().all(|non_basis| {
                    let mapped: Set<U> = non_basis
                        .iter()
                        .map(|element| {
                            let idx = domain.partition_point(|probe| *probe < element);
                            image[idx].clone()
                        })
                        .collect();
                    target.contains(&mapped)
                })
            })?;
        tracing::debug!("found isomorphism");
        Some(
            domain
                .into_iter()
                .cloned()
                .zip(found.into_iter().cloned())
                .collect(),
        )
    }

    /// Whether some bijection of ground sets carries one matroid onto the other.
    pub fn is_isomorphic_to<U: Element>(&self, other: &Matroid<U>) -> bool {
        self.isomorphism_to(other).is_some()
    }
}
