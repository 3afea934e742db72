//! A plain recursive pretty-printer.
//!
//! A classic if/then/else rendering of a diagram, built directly on
//! [`Engine::fold`], so it inherits fold's lack of memoization (a diagram
//! with heavy sharing is rendered once per path, not once per node). It has
//! no bearing on the engine's correctness; it exists for debugging and test
//! failure output only.

use std::fmt;

use crate::engine::Engine;
use crate::intern::NodeId;
use crate::traits::{Lattice, Semiring, Variable};

impl<V, L, R> Engine<V, L, R>
where
    V: Variable + fmt::Debug,
    L: Lattice + fmt::Debug,
    R: Semiring + fmt::Debug,
{
    /// Renders `u` as a parenthesized if/then/else expression, e.g.
    /// `if "x" ⊑ BoolLattice(true) then 5 else 7`.
    pub fn render(&self, u: NodeId) -> String {
        self.fold(
            |r| format!("{r:?}"),
            |v, l, t, f| format!("(if {v:?} \u{2291} {l:?} then {t} else {f})"),
            u,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::instances::{BoolEngine, BoolLattice};

    #[test]
    fn renders_a_leaf_as_its_value() {
        let mut engine = BoolEngine::new();
        let five = engine.constant(5);
        assert_eq!(engine.render(five), "5");
    }

    #[test]
    fn renders_a_branch_as_an_if_then_else() {
        let mut engine = BoolEngine::new();
        let u = engine.atom("x", BoolLattice(true), 5, 7);
        let rendered = engine.render(u);
        assert!(rendered.contains('x'));
        assert!(rendered.contains('5'));
        assert!(rendered.contains('7'));
        assert!(rendered.starts_with("(if"));
    }
}
