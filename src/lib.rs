//! # rodd: reduced ordered decision diagrams
//!
//! A generic decision-diagram engine parameterized over three algebraic
//! inputs: a variable domain (`V`), a lattice of variable values (`L`), and
//! a result semiring (`R`). The engine represents functions from
//! assignments-of-variables-to-lattice-values into the semiring as
//! **reduced ordered decision diagrams**, kept in a **hash-consed** pool so
//! that structural equality of two diagrams reduces to integer equality of
//! their ids, and implements the core algebra over them: pointwise semiring
//! `sum` and `prod` lifted to diagrams, and `restrict` under a partial
//! assignment.
//!
//! ## What this crate is not
//!
//! `V`, `L`, and `R` are entirely the caller's concern. This crate ships
//! only the [`Variable`], [`Lattice`], and [`Semiring`] trait bounds plus
//! one minimal instantiation ([`instances::BoolEngine`]) used by its own
//! tests. There is no serialization, no parsing, no domain-specific
//! operators beyond `sum`/`prod`/`restrict`, and no I/O of any kind. The
//! engine is a synchronous, single-owned library, not a service.
//!
//! ## Quick start
//!
//! ```
//! use rodd::instances::{BoolEngine, BoolLattice};
//!
//! let mut engine = BoolEngine::new();
//!
//! // "if x then 1 else 0" + "if x then 2 else 0"
//! let a = engine.atom("x", BoolLattice(true), 1, 0);
//! let b = engine.atom("x", BoolLattice(true), 2, 0);
//! let sum = engine.sum(a, b);
//!
//! let when_true = engine.restrict(&[("x", BoolLattice(true))], sum);
//! assert_eq!(engine.peek(when_true), Some(3));
//!
//! let when_false = engine.restrict(&[("x", BoolLattice(false))], sum);
//! assert_eq!(engine.peek(when_false), Some(0));
//! ```
//!
//! ## Module map
//!
//! - [`traits`]: the `Variable`/`Lattice`/`Semiring` parameters.
//! - [`intern`]: the generic hash-consing interner.
//! - `node` (private): diagram nodes and their hash-consed store.
//! - [`Engine`]: the public algebra: `mk_leaf`/`const`, `mk_branch`, `atom`,
//!   `peek`, `fold`, `map_r`, `restrict`, `sum`, `prod`.
//! - [`error`]: the one fallible path (a stale or foreign [`intern::NodeId`]).
//! - [`instances`]: a minimal Boolean/`i64` instantiation for tests and demos.

mod display;
pub mod engine;
pub mod error;
pub mod instances;
pub mod intern;
mod node;
pub mod traits;

pub use engine::Engine;
pub use error::UnknownId;
pub use intern::NodeId;
pub use traits::{Lattice, Semiring, Variable};
