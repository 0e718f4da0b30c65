#![deny(missing_docs)]
#![doc = "Core set algebra, axiom tags, payload types and errors shared by the matroid kernel crates."]

use std::fmt::Debug;

pub mod errors;
pub mod payload;
pub mod sets;
mod types;

pub use errors::{ErrorInfo, MatroidError};
pub use payload::{ClosureFn, GirthFn, NullityFn, Payload, RankFn};
pub use sets::{family, set, Family, Set};
pub use types::Axiom;

/// Bound shared by every ground-set element type.
///
/// The total order drives deterministic enumeration (power sets, RevLex
/// ordering, permutation search); `Send + Sync + 'static` lets derived
/// function payloads capture elements behind an `Arc`.
pub trait Element: Ord + Clone + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Ord + Clone + Debug + Send + Sync + 'static {}
