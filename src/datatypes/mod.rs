//! Core datatypes shared across the crate: [`Var`], [`Term`], and the
//! crate-private [`BddNode`][node::BddNode].
mod node;
mod term;
mod var;

pub(crate) use node::BddNode;
pub use term::Term;
pub use var::Var;
