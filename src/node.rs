//! Diagram nodes and the node store that specializes the generic interner
//! to them.
//!
//! A node is either a terminal leaf or a decision branch, hash-consed
//! through a unique table keyed on node content, generalized from a fixed
//! `bool` variable/value domain to the engine's abstract `V`/`L`/`R`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::intern::{Interner, NodeId};
use crate::traits::{Lattice, Semiring, Variable};

/// A node in a reduced ordered decision diagram: either a constant leaf or a
/// branch testing one variable against one lattice element.
#[derive(Debug, Clone)]
pub(crate) enum Node<V, L, R> {
    Leaf(R),
    Branch(V, L, NodeId, NodeId),
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<V: Variable, L: Lattice, R: Semiring> PartialEq for Node<V, L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Branch(va, la, ta, fa), Node::Branch(vb, lb, tb, fb)) => {
                va == vb && la == lb && ta == tb && fa == fb
            }
            _ => false,
        }
    }
}

impl<V: Variable, L: Lattice, R: Semiring> Eq for Node<V, L, R> {}

/// The formula itself, kept separate from the `Hash` impl so it can be
/// tested directly: a `Hasher`'s `finish()` is free to mix further, which
/// would obscure the parity bit this formula exists to produce.
///
/// Leaves hash to an even number, branches to an odd one, so a single bit
/// separates the two variants before any field is inspected. `t`/`f`
/// (already-canonical child ids) are mixed in as integers; `V`/`L`/`R`'s own
/// `Hash` impls are each reduced to one `u64` via a throwaway
/// `DefaultHasher` and combined with the prime multipliers.
fn node_hash_value<V: Variable, L: Lattice, R: Semiring>(node: &Node<V, L, R>) -> u64 {
    match node {
        Node::Leaf(r) => hash_one(r).wrapping_shl(1),
        Node::Branch(v, l, t, f) => {
            let h = 1021u64
                .wrapping_mul(hash_one(v))
                .wrapping_add(1031u64.wrapping_mul(hash_one(l)))
                .wrapping_add(1033u64.wrapping_mul(t.index() as u64))
                .wrapping_add(1039u64.wrapping_mul(f.index() as u64));
            h | 1
        }
    }
}

// Hand-written rather than `#[derive(Hash)]` so that nodes hash via the
// formula above instead of a derived field-by-field mix.
impl<V: Variable, L: Lattice, R: Semiring> Hash for Node<V, L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(node_hash_value(self));
    }
}

/// Specialization of [`Interner`] to diagram nodes, with smart constructors
/// that maintain the reduction invariant (no branch with `t == f`).
pub(crate) struct NodeStore<V, L, R> {
    interner: Interner<Node<V, L, R>>,
}

impl<V: Variable, L: Lattice, R: Semiring> NodeStore<V, L, R> {
    pub(crate) fn new() -> Self {
        NodeStore {
            interner: Interner::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.interner.clear();
    }

    /// Looks up a node by id. Panics if `id` is foreign to this store: every
    /// engine operation only ever hands itself ids it minted, so a failure
    /// here means a caller passed in a stale or foreign `NodeId`, which is a
    /// contract violation rather than a recoverable condition (see
    /// `error.rs`).
    pub(crate) fn node(&self, id: NodeId) -> &Node<V, L, R> {
        self.interner
            .unget(id)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub(crate) fn mk_leaf(&mut self, r: R) -> NodeId {
        self.interner.get(Node::Leaf(r))
    }

    pub(crate) fn mk_branch(&mut self, v: V, l: L, t: NodeId, f: NodeId) -> NodeId {
        if t == f {
            return t;
        }
        self.interner.get(Node::Branch(v, l, t, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::BoolLattice;

    fn leaf(store: &mut NodeStore<&'static str, BoolLattice, i64>, r: i64) -> NodeId {
        store.mk_leaf(r)
    }

    #[test]
    fn mk_leaf_interns_equal_constants_to_the_same_id() {
        let mut store: NodeStore<&'static str, BoolLattice, i64> = NodeStore::new();
        assert_eq!(leaf(&mut store, 5), leaf(&mut store, 5));
        assert_ne!(leaf(&mut store, 5), leaf(&mut store, 7));
    }

    #[test]
    fn mk_branch_reduces_when_both_arms_agree() {
        let mut store: NodeStore<&'static str, BoolLattice, i64> = NodeStore::new();
        let t = leaf(&mut store, 1);
        let f = leaf(&mut store, 1);
        assert_eq!(t, f, "same constant interns to the same leaf");
        let branch = store.mk_branch("x", BoolLattice(true), t, f);
        assert_eq!(branch, t, "t == f must return that child, not a new branch");
    }

    #[test]
    fn mk_branch_interns_structurally_equal_branches() {
        let mut store: NodeStore<&'static str, BoolLattice, i64> = NodeStore::new();
        let t1 = leaf(&mut store, 1);
        let f1 = leaf(&mut store, 0);
        let b1 = store.mk_branch("x", BoolLattice(true), t1, f1);
        let b2 = store.mk_branch("x", BoolLattice(true), t1, f1);
        assert_eq!(b1, b2);
    }

    #[test]
    fn leaf_hash_is_even_and_branch_hash_is_odd() {
        let t = NodeId(0);
        let f = NodeId(1);
        let leaf_node: Node<&'static str, BoolLattice, i64> = Node::Leaf(3);
        let branch_node: Node<&'static str, BoolLattice, i64> =
            Node::Branch("x", BoolLattice(true), t, f);
        assert_eq!(node_hash_value(&leaf_node) % 2, 0);
        assert_eq!(node_hash_value(&branch_node) % 2, 1);
    }

    #[test]
    #[should_panic]
    fn node_panics_on_foreign_id() {
        let store: NodeStore<&'static str, BoolLattice, i64> = NodeStore::new();
        store.node(NodeId(0));
    }
}
