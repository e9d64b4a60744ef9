//! Product terms: conjunctions of signed literals.
use std::fmt::Display;

use crate::datatypes::Var;

use super::literal::Literal;

/// A conjunction of signed literals, i.e. one DNF term.
///
/// An empty, non-[`falsified`][Product::falsified] term evaluates to ⊤;
/// a term containing a literal and its complement is `falsified` and
/// evaluates to ⊥. Duplicate same-polarity literals are idempotent (the
/// second `add_literal` call is a no-op), matching the original C
/// `add_letter`'s same-polarity handling — unlike that original, a
/// complementary literal *does* falsify the term (see spec.md §9).
#[derive(Debug, Clone, Default)]
pub struct Product {
    literals: Vec<Literal>,
    falsified: bool,
}

impl Product {
    /// An empty, non-falsified product term (denotes ⊤ on its own).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `lit` to this term.
    ///
    /// - If an identical literal is already present, this is a no-op.
    /// - If the complementary literal is already present, the term is
    ///   marked [`falsified`][Product::falsified].
    /// - Otherwise `lit` is appended.
    pub fn add_literal(&mut self, lit: Literal) {
        if self.literals.iter().any(|&l| l == lit) {
            return;
        }
        if self.literals.iter().any(|&l| l.is_complementary_to(lit)) {
            self.falsified = true;
            return;
        }
        self.literals.push(lit);
    }

    /// `true` if this term contains a literal and its complement.
    pub fn falsified(&self) -> bool {
        self.falsified
    }

    /// Marks this term falsified directly (used by the cofactor engine).
    pub(crate) fn set_falsified(&mut self) {
        self.falsified = true;
    }

    /// `true` if this (non-falsified) term has no remaining literals,
    /// i.e. it denotes ⊤.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literals making up this term.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Removes the literal equal to `lit`, if present.
    pub(crate) fn remove_literal(&mut self, lit: Literal) {
        self.literals.retain(|&l| l != lit);
    }

    /// `true` if some literal of this term refers to `var`, in either polarity.
    pub fn mentions(&self, var: Var) -> bool {
        self.literals.iter().any(|l| l.var() == var)
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "<empty>");
        }
        for lit in &self.literals {
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}
