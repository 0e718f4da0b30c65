//! Textual and binary encodings of matroids.
//!
//! The RevLex-Index string marks every rank-sized subset of {1..n} as a
//! basis or a non-basis, with the subsets listed in reverse-lexicographic
//! order. JSON and binary forms store the ground set, rank and bases, and
//! revalidate on restore.

pub mod hash;
pub mod revlex;
pub mod serde;

pub use hash::fingerprint;
pub use revlex::{binomial, decode, encode, revlex_subsets, EncodeOpts};
pub use self::serde::{from_bytes, from_json, to_bytes, to_json};
