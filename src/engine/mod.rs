//! The diagram algebra, built on top of the node store.
//!
//! [`Engine`] is the functor-style instantiation point: naming concrete `V`,
//! `L`, `R` type arguments is what it means to instantiate the abstract
//! variable/lattice/semiring parameters. It owns its node store directly (no
//! `Arc`/`Mutex`/global singleton). The single-owner, no-concurrent-mutation
//! contract is deliberate, not an implementation shortcut: a globally
//! shared, lock-protected manager exists to let independently constructed
//! values share one table concurrently, and that is exactly the surface
//! this engine's design excludes.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::intern::NodeId;
use crate::node::{Node, NodeStore};
use crate::traits::{Lattice, Semiring, Variable};


/// Which semiring operator a call to the shared `apply` skeleton is lifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Sum,
    Prod,
}

/// A hash-consed pool of reduced ordered decision diagrams over variables
/// `V`, lattice `L`, and result semiring `R`.
///
/// `Engine` is the only public entry point; [`crate::intern::Interner`] and
/// the node store it specializes are implementation details reachable only
/// through these methods.
pub struct Engine<V, L, R> {
    store: NodeStore<V, L, R>,
    sum_cache: HashMap<(NodeId, NodeId), NodeId>,
    prod_cache: HashMap<(NodeId, NodeId), NodeId>,
}

impl<V: Variable, L: Lattice, R: Semiring> Engine<V, L, R> {
    pub fn new() -> Self {
        Engine {
            store: NodeStore::new(),
            sum_cache: HashMap::new(),
            prod_cache: HashMap::new(),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<V, L, R> {
        self.store.node(id)
    }

    /// Drops every interned node and resets the id counter to zero,
    /// effectively resetting the engine. Also drops the `sum`/`prod` memo
    /// tables, since their entries reference now-invalid ids. Outstanding
    /// `NodeId`s from before the call must not be used afterward; the
    /// engine does not detect continued use of one.
    pub fn clear_cache(&mut self) {
        self.store.clear();
        self.sum_cache.clear();
        self.prod_cache.clear();
    }

    /// Structural equality of two diagrams: integer equality of their ids.
    /// Sound because of interner uniqueness plus the reduction invariant.
    pub fn equal(&self, x: NodeId, y: NodeId) -> bool {
        x == y
    }

    /// Interns a constant leaf. Named `mk_leaf` rather than `const`, which
    /// is a reserved word in Rust; see [`Self::constant`] for an alias under
    /// the more conventional name.
    pub fn mk_leaf(&mut self, r: R) -> NodeId {
        self.store.mk_leaf(r)
    }

    /// Alias for [`Self::mk_leaf`] under the name `const` would have used.
    pub fn constant(&mut self, r: R) -> NodeId {
        self.mk_leaf(r)
    }

    /// Interns a branch node, applying the reduction rule: if `t == f`,
    /// returns `t` unchanged rather than allocating a redundant test.
    pub fn mk_branch(&mut self, v: V, l: L, t: NodeId, f: NodeId) -> NodeId {
        self.store.mk_branch(v, l, t, f)
    }

    /// The elementary diagram "if `v` satisfies `l` then `tr` else `fr`".
    pub fn atom(&mut self, v: V, l: L, tr: R, fr: R) -> NodeId {
        let t = self.mk_leaf(tr);
        let f = self.mk_leaf(fr);
        self.mk_branch(v, l, t, f)
    }

    /// `Some(r)` if `u` is a leaf with value `r`, `None` if it's a branch.
    pub fn peek(&self, u: NodeId) -> Option<R> {
        match self.node(u) {
            Node::Leaf(r) => Some(r.clone()),
            Node::Branch(..) => None,
        }
    }

    /// Catamorphism over a diagram: `g` handles leaves, `h` combines a
    /// branch's key with its already-folded `true`/`false` results.
    ///
    /// Performs no memoization (the contract doesn't require it); diagrams
    /// with heavy sharing are revisited once per path, not once per node.
    /// Recursion follows diagram depth directly rather than through an
    /// explicit work stack, which is fine since diagram depth is bounded by
    /// the number of distinct variables along a path, not by diagram size.
    pub fn fold<A, G, H>(&self, g: G, h: H, u: NodeId) -> A
    where
        G: Fn(&R) -> A,
        H: Fn(&V, &L, A, A) -> A,
    {
        self.fold_ref(&g, &h, u)
    }

    fn fold_ref<A, G, H>(&self, g: &G, h: &H, u: NodeId) -> A
    where
        G: Fn(&R) -> A,
        H: Fn(&V, &L, A, A) -> A,
    {
        match self.node(u) {
            Node::Leaf(r) => g(r),
            Node::Branch(v, l, t, f) => {
                let (v, l, t, f) = (v.clone(), l.clone(), *t, *f);
                let ta = self.fold_ref(g, h, t);
                let fa = self.fold_ref(g, h, f);
                h(&v, &l, ta, fa)
            }
        }
    }

    /// Rewrites only leaf values, by applying `g`. Conceptually
    /// `fold(|r| const(g(r)), |v, l, t, f| mk_branch(v, l, t, f), u)`, but
    /// implemented as its own mutating recursion rather than literally atop
    /// [`Self::fold`]: `fold`'s closures are pure (`&self`), while
    /// reconstructing branches here has to allocate through the hash-consed
    /// store (`&mut self`).
    pub fn map_r(&mut self, g: impl Fn(&R) -> R, u: NodeId) -> NodeId {
        self.map_r_rec(&g, u)
    }

    fn map_r_rec(&mut self, g: &impl Fn(&R) -> R, u: NodeId) -> NodeId {
        match self.node(u).clone() {
            Node::Leaf(r) => {
                let r2 = g(&r);
                self.mk_leaf(r2)
            }
            Node::Branch(v, l, t, f) => {
                let t2 = self.map_r_rec(g, t);
                let f2 = self.map_r_rec(g, f);
                self.mk_branch(v, l, t2, f2)
            }
        }
    }

    /// Specializes `u` by a partial assignment: a finite collection of
    /// `(v, l)` pairs giving a hard constraint `σ(v) ⊑ l` on each listed
    /// variable. For any total assignment consistent with every listed
    /// pair, the restricted diagram and `u` agree.
    pub fn restrict(&mut self, assignments: &[(V, L)], u: NodeId) -> NodeId {
        let mut sorted: Vec<(V, L)> = assignments.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        self.restrict_sorted(&sorted, u)
    }

    fn restrict_sorted(&mut self, assignments: &[(V, L)], u: NodeId) -> NodeId {
        if assignments.is_empty() {
            return u;
        }
        match self.node(u).clone() {
            Node::Leaf(_) => u,
            Node::Branch(v, l, t, f) => {
                let (head_v, head_l) = &assignments[0];
                match head_v.cmp(&v) {
                    // The head assignment targets a variable that doesn't
                    // occur at or below this branch's position; it can
                    // never bind here, so drop it and keep walking `u`.
                    Ordering::Less => self.restrict_sorted(&assignments[1..], u),
                    // Same variable: a subset-check true forces the true
                    // branch and consumes the assignment (it's fully
                    // accounted for); false forces the false branch but
                    // keeps the assignment, since `v` may recur deeper.
                    Ordering::Equal => {
                        if head_l.subset_eq(&l) {
                            self.restrict_sorted(&assignments[1..], t)
                        } else {
                            self.restrict_sorted(assignments, f)
                        }
                    }
                    // This branch's variable isn't constrained by the head
                    // assignment (it appears later in the order); recurse
                    // into both children with the full list and rebuild.
                    Ordering::Greater => {
                        let t2 = self.restrict_sorted(assignments, t);
                        let f2 = self.restrict_sorted(assignments, f);
                        self.mk_branch(v, l, t2, f2)
                    }
                }
            }
        }
    }

    /// Pointwise semiring sum, lifted to diagrams: `⟦sum(x,y)⟧σ =
    /// R.sum(⟦x⟧σ, ⟦y⟧σ)` for every assignment `σ`.
    pub fn sum(&mut self, x: NodeId, y: NodeId) -> NodeId {
        self.apply(Op::Sum, x, y)
    }

    /// Pointwise semiring product, lifted to diagrams: `⟦prod(x,y)⟧σ =
    /// R.prod(⟦x⟧σ, ⟦y⟧σ)` for every assignment `σ`.
    pub fn prod(&mut self, x: NodeId, y: NodeId) -> NodeId {
        self.apply(Op::Prod, x, y)
    }

    fn apply(&mut self, op: Op, x: NodeId, y: NodeId) -> NodeId {
        // sum/prod are commutative, so the memo key is normalized by
        // sorting the pair (§4.3.3): apply(x, y) and apply(y, x) share an
        // entry.
        let key = if x <= y { (x, y) } else { (y, x) };
        let cache = self.cache(op);
        if let Some(&cached) = cache.get(&key) {
            return cached;
        }
        let result = self.apply_uncached(op, x, y);
        self.cache_mut(op).insert(key, result);
        result
    }

    fn cache(&self, op: Op) -> &HashMap<(NodeId, NodeId), NodeId> {
        match op {
            Op::Sum => &self.sum_cache,
            Op::Prod => &self.prod_cache,
        }
    }

    fn cache_mut(&mut self, op: Op) -> &mut HashMap<(NodeId, NodeId), NodeId> {
        match op {
            Op::Sum => &mut self.sum_cache,
            Op::Prod => &mut self.prod_cache,
        }
    }

    fn apply_uncached(&mut self, op: Op, x: NodeId, y: NodeId) -> NodeId {
        if let Node::Leaf(r) = self.node(x).clone() {
            if let Some(result) = Self::leaf_shortcut(op, &r, x, y) {
                return result;
            }
            return self.map_r(|s| Self::combine(op, &r, s), y);
        }
        if let Node::Leaf(r) = self.node(y).clone() {
            if let Some(result) = Self::leaf_shortcut(op, &r, y, x) {
                return result;
            }
            return self.map_r(|s| Self::combine(op, s, &r), x);
        }

        let (vx, lx, tx, fx) = match self.node(x).clone() {
            Node::Branch(v, l, t, f) => (v, l, t, f),
            Node::Leaf(_) => unreachable!("leaf case handled above"),
        };
        let (vy, ly, ty, fy) = match self.node(y).clone() {
            Node::Branch(v, l, t, f) => (v, l, t, f),
            Node::Leaf(_) => unreachable!("leaf case handled above"),
        };

        match vx.cmp(&vy) {
            Ordering::Less => {
                let t = self.apply(op, tx, y);
                let f = self.apply(op, fx, y);
                self.mk_branch(vx, lx, t, f)
            }
            Ordering::Greater => {
                let t = self.apply(op, x, ty);
                let f = self.apply(op, x, fy);
                self.mk_branch(vy, ly, t, f)
            }
            Ordering::Equal => {
                let combined = match op {
                    Op::Prod => lx.meet(&ly, true),
                    Op::Sum => lx.join(&ly, true),
                };
                if let Some(l) = combined {
                    let t = self.apply(op, tx, ty);
                    let f = self.apply(op, fx, fy);
                    self.mk_branch(vx, l, t, f)
                } else {
                    match lx.cmp(&ly) {
                        Ordering::Less => {
                            let ry = self.restrict(&[(vx.clone(), lx.clone())], y);
                            let t = self.apply(op, tx, ry);
                            let f = self.apply(op, fx, y);
                            self.mk_branch(vx, lx, t, f)
                        }
                        Ordering::Greater => {
                            let rx = self.restrict(&[(vy.clone(), ly.clone())], x);
                            let t = self.apply(op, rx, ty);
                            let f = self.apply(op, x, fy);
                            self.mk_branch(vy, ly, t, f)
                        }
                        Ordering::Equal => panic!(
                            "lattice contract violated: meet/join reported lx == ly \
                             but refused to name the (tight) combination as a single \
                             element. `Lattice::meet`/`join` must return `Some` \
                             whenever the two operands are themselves equal"
                        ),
                    }
                }
            }
        }
    }

    /// The absorbing/identity special cases from the skeleton table, keyed
    /// on which operand (`leaf_id`) is the leaf holding `r`, and `other`
    /// being the (possibly branch) operand on the far side. `sum`/`prod`
    /// commute, so the same table serves both the `Leaf, _` and `_, Leaf`
    /// rows: whichever side is the zero/one, its own id or the other
    /// operand's id is returned untouched.
    fn leaf_shortcut(op: Op, r: &R, leaf_id: NodeId, other: NodeId) -> Option<NodeId> {
        match op {
            Op::Prod => {
                if *r == R::zero() {
                    return Some(leaf_id);
                }
                if *r == R::one() {
                    return Some(other);
                }
            }
            Op::Sum => {
                if *r == R::zero() {
                    return Some(other);
                }
            }
        }
        None
    }

    fn combine(op: Op, a: &R, b: &R) -> R {
        match op {
            Op::Sum => a.sum(b),
            Op::Prod => a.prod(b),
        }
    }
}

impl<V: Variable, L: Lattice, R: Semiring> Default for Engine<V, L, R> {
    fn default() -> Self {
        Self::new()
    }
}
