//! A minimal concrete instantiation (`&'static str` variables, a Boolean
//! lattice, and an `i64` result semiring) used by the engine's own test
//! suite and by the `demos/` binaries.
//!
//! This is deliberately the *only* instantiation the crate ships. Richer
//! lattices, domain-specific operators, parsing, and pretty-printing beyond
//! the plain [`Engine::render`](crate::Engine::render) debugging aid are out
//! of scope for this crate.

use crate::traits::{Lattice, Semiring};
use crate::Engine;

/// A lattice of Booleans where the only extensions are the singleton sets
/// `{true}` and `{false}`: `subset_eq` is equality, and `meet`/`join` only
/// succeed when both sides agree.
///
/// This is the simplest possible `Lattice`: every pair of distinct elements
/// is disjoint, so the `tight` flag never matters here (the `meet`/`join`
/// overlap-but-not-equal handling in `sum`/`prod` is exercised by the
/// property tests using a richer interval lattice instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoolLattice(pub bool);

impl Lattice for BoolLattice {
    fn subset_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn meet(&self, other: &Self, _tight: bool) -> Option<Self> {
        (self.0 == other.0).then_some(*self)
    }

    fn join(&self, other: &Self, _tight: bool) -> Option<Self> {
        (self.0 == other.0).then_some(*self)
    }
}

impl Semiring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn sum(&self, other: &Self) -> Self {
        self + other
    }

    fn prod(&self, other: &Self) -> Self {
        self * other
    }
}

/// The engine specialised to `&'static str` variables, [`BoolLattice`]
/// predicates, and an `i64` result semiring: the instantiation exercised by
/// the integration tests' concrete scenarios.
pub type BoolEngine = Engine<&'static str, BoolLattice, i64>;
