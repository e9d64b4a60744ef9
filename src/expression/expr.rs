//! The in-memory DNF expression model: a disjunction of [`Product`] terms.
use std::fmt::Display;

use super::product::Product;

/// A DNF expression: an ordered list of [`Product`] terms, disjoined,
/// plus two mutually exclusive flags that short-circuit the denotation
/// to a constant regardless of the term list.
///
/// Term order is irrelevant to semantics but preserved for deterministic
/// traversal (and thus deterministic BDD construction).
#[derive(Debug, Clone, Default)]
pub struct Expression {
    terms: Vec<Product>,
    is_const_false: bool,
    is_const_true: bool,
}

impl Expression {
    /// The constant ⊥ expression (also what empty input parses to).
    pub fn constant_false() -> Self {
        Self {
            terms: Vec::new(),
            is_const_false: true,
            is_const_true: false,
        }
    }

    /// The constant ⊤ expression.
    pub fn constant_true() -> Self {
        Self {
            terms: Vec::new(),
            is_const_false: false,
            is_const_true: true,
        }
    }

    /// An expression built from a fresh list of terms, with no constant
    /// flag set; callers (the parser, the cofactor engine) are
    /// responsible for promoting it to a constant where the semantics
    /// call for it.
    pub(crate) fn from_terms(terms: Vec<Product>) -> Self {
        Self {
            terms,
            is_const_false: false,
            is_const_true: false,
        }
    }

    /// `true` if this expression denotes ⊥.
    pub fn is_const_false(&self) -> bool {
        self.is_const_false
    }

    /// `true` if this expression denotes ⊤.
    pub fn is_const_true(&self) -> bool {
        self.is_const_true
    }

    /// Marks this expression ⊤, dropping the falsity flag.
    pub(crate) fn promote_to_true(&mut self) {
        self.is_const_true = true;
        self.is_const_false = false;
    }

    /// Marks this expression ⊥, dropping the truth flag.
    pub(crate) fn promote_to_false(&mut self) {
        self.is_const_false = true;
        self.is_const_true = false;
    }

    /// The term list. Meaningless once a constant flag is set.
    pub fn terms(&self) -> &[Product] {
        &self.terms
    }

    pub(crate) fn terms_mut(&mut self) -> &mut Vec<Product> {
        &mut self.terms
    }

    /// `true` if some non-falsified term has no remaining literals,
    /// i.e. the expression evaluates to ⊤ under the empty assignment
    /// left once every variable has been cofactored away.
    pub fn has_vacuous_true_term(&self) -> bool {
        self.terms.iter().any(|t| !t.falsified() && t.is_empty())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_const_true {
            return write!(f, "1");
        }
        if self.is_const_false {
            return write!(f, "0");
        }
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let rendered: Vec<String> = self.terms.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", rendered.join("+"))
    }
}
