//! The three abstract parameters of the diagram engine: the variable domain
//! (`V`), the value lattice (`L`), and the result semiring (`R`).
//!
//! The engine's functor-style instantiation is expressed in Rust as generic
//! type parameters bounded by these traits, rather than as a separate
//! module signature. Naming `Engine<V, L, R>` with concrete types *is*
//! instantiating the functor.

use std::hash::Hash;

/// A variable identifier.
///
/// Only [`Ord`] (branch ordering) and [`Hash`] (hash-consing) are used by
/// the engine itself; [`Clone`] lets nodes and assignment lists own their
/// keys instead of borrowing from the caller.
pub trait Variable: Clone + Eq + Ord + Hash {}

impl<T: Clone + Eq + Ord + Hash> Variable for T {}

/// A lattice of variable values, used as the predicate carried by a branch.
///
/// `subset_eq` is the containment order on extensions: `a.subset_eq(b)`
/// means every assignment satisfying `a` also satisfies `b`. `meet` and
/// `join` combine two elements that share a variable; with `tight: true`
/// they must return `None` not only when the combination is empty, but also
/// when it exists yet cannot be named by a single `Self` value. Callers
/// porting a lattice into this engine must preserve that two-level
/// distinction (see the design notes on the `tight` flag) or the `sum`/`prod`
/// overlap handling degrades to always treating overlaps as irreconcilable.
pub trait Lattice: Clone + Eq + Ord + Hash {
    /// Is every extension of `self` also an extension of `other`?
    fn subset_eq(&self, other: &Self) -> bool;

    /// Greatest lower bound of `self` and `other`, or `None` if disjoint, or
    /// (when `tight`) if the meet exists but isn't representable as a single
    /// `Self`.
    fn meet(&self, other: &Self, tight: bool) -> Option<Self>;

    /// Least upper bound of `self` and `other`, dual to [`meet`](Self::meet).
    fn join(&self, other: &Self, tight: bool) -> Option<Self>;
}

/// A semiring of results, lifted pointwise over diagrams by
/// [`Engine::sum`](crate::Engine::sum) and [`Engine::prod`](crate::Engine::prod).
///
/// Implementations are expected (not checked) to satisfy the usual semiring
/// laws: `sum`/`prod` associative and commutative, `zero` absorbing for
/// `prod` and the identity for `sum`, `one` the identity for `prod`.
pub trait Semiring: Clone + Eq + Ord + Hash {
    fn zero() -> Self;
    fn one() -> Self;
    fn sum(&self, other: &Self) -> Self;
    fn prod(&self, other: &Self) -> Self;
}
