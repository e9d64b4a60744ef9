/*!
This crate builds Reduced Ordered Binary Decision Diagrams (ROBDDs) for
Boolean functions given in disjunctive normal form (DNF) over
single-letter propositional variables `a`-`z`.

Given a function's text and a variable ordering, [`create_bdd`] produces
a shared, reduced decision DAG ([`Bdd`]) that answers point queries
([`evaluate`]) and reports its own size ([`Bdd::node_count`]).
[`create_bdd_best_order`] searches a small neighborhood of rotations of
the given order and keeps the smallest resulting diagram.

# What this is not

This crate does not implement general Boolean-algebra simplification
beyond what Shannon cofactoring discovers, logical operations *between*
two already-built ROBDDs (no `apply`/`ite`/negation/conjunction across
diagrams), dynamic variable reordering (sifting), persistence of
diagrams, or concurrent access to one [`Bdd`].

# Example

```rust
use dnf_robdd::{create_bdd, evaluate};

// XNOR of a and b.
let bdd = create_bdd("ab+!a!b", "ab");
assert_eq!(bdd.node_count(), 3);
assert!(evaluate(&bdd, "00").unwrap());
assert!(!evaluate(&bdd, "01").unwrap());
```

# Searching orderings

```rust
use dnf_robdd::create_bdd_best_order;

let bdd = create_bdd_best_order("abc+cd+f+aef+bd", "abcdef");
println!("smallest rotation found: {} nodes", bdd.node_count());
```
*/
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates
)]

pub mod bdd;
pub mod builder;
pub mod cofactor;
pub mod datatypes;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod order_search;
pub mod parser;

pub use bdd::{create_bdd, Bdd};
pub use error::EvalError;
pub use evaluator::evaluate;
pub use order_search::create_bdd_best_order;

#[cfg(test)]
mod test;
