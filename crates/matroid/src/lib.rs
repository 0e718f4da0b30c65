#![deny(missing_docs)]
#![doc = "Finite matroids constructed from any of eleven cryptomorphic axiom systems, with cached \
derived views, duality, minors, combinators and isomorphism testing."]

mod combinators;
mod dual;
mod isomorphism;
mod matroid;
mod membership;
mod minors;
mod queries;

pub use matroid::Matroid;
pub use matroid_core::{
    family, set, Axiom, ClosureFn, Element, ErrorInfo, Family, GirthFn, MatroidError, NullityFn,
    Payload, RankFn, Set,
};
