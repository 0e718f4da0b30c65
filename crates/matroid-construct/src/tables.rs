//! Subset tables backing every derived function payload.

use std::sync::Arc;

use matroid_core::sets::{power_set, tabulate};
use matroid_core::{Element, Family, Set};

/// Evaluates `f` once on every subset of `ground` and returns a lookup that
/// answers from the table, falling back to `f` for sets outside the power set.
///
/// Derived rank, nullity and closure functions are built on top of each
/// other; tabulating keeps a chain of conversions at one evaluation per
/// subset instead of multiplying the cost of every link.
pub fn memoize<T, V, F>(ground: &Set<T>, f: F) -> Arc<dyn Fn(&Set<T>) -> V + Send + Sync>
where
    T: Element,
    V: Clone + Send + Sync + 'static,
    F: Fn(&Set<T>) -> V + Send + Sync + 'static,
{
    let table = tabulate(ground, &f);
    tracing::trace!(entries = table.len(), "tabulated derived function");
    Arc::new(move |subset: &Set<T>| table.get(subset).cloned().unwrap_or_else(|| f(subset)))
}

/// Subsets of `ground` accepted by `keep`, in power-set order.
pub fn select<T, F>(ground: &Set<T>, keep: F) -> Family<T>
where
    T: Element,
    F: Fn(&Set<T>) -> bool,
{
    power_set(ground).into_iter().filter(|subset| keep(subset)).collect()
}
