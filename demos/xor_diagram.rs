//! Example: building a 2-input XOR as a decision diagram
//!
//! Shows the classic XOR truth table, built here as a sum of two
//! single-variable atoms rather than as a two-level cover.

use rodd::instances::{BoolEngine, BoolLattice};

fn main() {
    println!("=== XOR as a decision diagram ===\n");

    // XOR truth table:
    // A B | F
    // ----+---
    // 0 0 | 0
    // 0 1 | 1
    // 1 0 | 1
    // 1 1 | 0
    //
    // F = A*!B + !A*B, built here via sum/prod over atoms rather than a cover.
    let mut engine = BoolEngine::new();

    let a_true = engine.atom("a", BoolLattice(true), 1, 0);
    let a_false = engine.atom("a", BoolLattice(false), 1, 0);
    let b_true = engine.atom("b", BoolLattice(true), 1, 0);
    let b_false = engine.atom("b", BoolLattice(false), 1, 0);

    let a_and_not_b = engine.prod(a_true, b_false);
    let not_a_and_b = engine.prod(a_false, b_true);
    let xor = engine.sum(a_and_not_b, not_a_and_b);

    println!("Diagram: {}", engine.render(xor));
    println!();
    println!("  A B | F");
    println!("  ----+---");
    for &a in &[true, false] {
        for &b in &[true, false] {
            let restricted = engine.restrict(&[("a", BoolLattice(a)), ("b", BoolLattice(b))], xor);
            let f = engine.peek(restricted).expect("fully restricted to a constant");
            println!("  {} {} | {}", a as i64, b as i64, f);
        }
    }
}
