//! The internal-node representation stored in a [`Bdd`][crate::bdd::Bdd]'s unique table.
use std::fmt::Display;

use super::{Term, Var};

/// One internal node `(var, lo, hi)`: if `var` is assigned `0`, follow
/// `lo`; if assigned `1`, follow `hi`.
///
/// Mirrors `adf_bdd::datatypes::bdd::BddNode`, but keyed on a [`Var`]
/// (a single character) rather than a positional index, since a DNF
/// ROBDD's variables already have stable single-letter identities.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub(crate) struct BddNode {
    var: Var,
    lo: Term,
    hi: Term,
}

impl BddNode {
    /// Creates a new node. Does not itself enforce reduction — that is
    /// the unique table's job (see [`Bdd::node`][crate::bdd::Bdd::node]).
    pub(crate) fn new(var: Var, lo: Term, hi: Term) -> Self {
        Self { var, lo, hi }
    }

    pub(crate) fn var(self) -> Var {
        self.var
    }

    pub(crate) fn lo(self) -> Term {
        self.lo
    }

    pub(crate) fn hi(self) -> Term {
        self.hi
    }
}

impl Display for BddNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BddNode: {}, lo: {}, hi: {}", self.var, self.lo, self.hi)
    }
}
