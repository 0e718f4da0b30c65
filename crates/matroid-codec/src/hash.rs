use std::fmt::Display;

use matroid::Matroid;
use matroid_core::Element;
use sha2::{Digest, Sha256};

use crate::revlex::{encode, EncodeOpts};

/// SHA-256 over the size, rank and default RevLex code of `matroid`.
///
/// Two matroids share a fingerprint exactly when their bases agree after
/// relabelling both ground sets in increasing order onto {1..n}.
pub fn fingerprint<T: Element + Display>(matroid: &Matroid<T>) -> String {
    let code = encode(matroid, &EncodeOpts::default());
    let mut hasher = Sha256::new();
    hasher.update((matroid.size() as u64).to_le_bytes());
    hasher.update((matroid.rank() as u64).to_le_bytes());
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matroid_core::{family, set, Payload};

    #[test]
    fn fingerprint_ignores_labels_but_not_structure() {
        let numbers = Matroid::new(
            set([1u8, 2, 3]),
            Payload::Bases(family([vec![1u8, 2], vec![1, 3]])),
        )
        .unwrap();
        let shifted = Matroid::new(
            set([10u8, 20, 30]),
            Payload::Circuits(family([vec![20u8, 30]])),
        )
        .unwrap();
        assert_eq!(fingerprint(&numbers), fingerprint(&shifted));
        let triangle = Matroid::new(
            set([1u8, 2, 3]),
            Payload::Circuits(family([vec![1u8, 2, 3]])),
        )
        .unwrap();
        assert_ne!(fingerprint(&numbers), fingerprint(&triangle));
        assert_eq!(fingerprint(&triangle).len(), 64);
    }
}
