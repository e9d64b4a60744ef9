//! The [`Bdd`] type: a shared, reduced decision DAG plus its unique table.
use std::collections::HashMap;
use std::fmt::Display;

use crate::datatypes::{BddNode, Term, Var};
use crate::parser;

/// A reduced ordered binary decision diagram, built under a fixed
/// variable order and owning every internal node reachable from its
/// root.
///
/// Mirrors `adf_bdd::obdd::Bdd`'s `nodes` arena + `cache` hash-cons map,
/// generalised from an index-keyed `Var` to a character-keyed one and
/// trimmed to the single operation this crate needs from the unique
/// table: [`Bdd::node`]. There is no `apply`/`and`/`or`/`not` here —
/// spec.md's Non-goals rule out BDD-to-BDD operations; the only way to
/// grow a [`Bdd`] is [`crate::builder::build`] interning nodes as it
/// walks a [`crate::expression::Expression`].
#[derive(Debug)]
pub struct Bdd {
    nodes: Vec<BddNode>,
    cache: HashMap<BddNode, Term>,
    order: Vec<Var>,
    root: Term,
}

impl Bdd {
    fn empty(order: Vec<Var>) -> Self {
        Self {
            nodes: Vec::new(),
            cache: HashMap::new(),
            order,
            root: Term::BOT,
        }
    }

    /// The variable order this BDD was built under, lower-cased.
    pub fn order(&self) -> &[Var] {
        &self.order
    }

    /// The root [`Term`]: either a terminal or a reference into this
    /// BDD's node arena.
    pub fn root(&self) -> Term {
        self.root
    }

    /// The number of interned internal nodes (terminals excluded) —
    /// the canonical size metric (spec.md §6).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node_at(&self, term: Term) -> Option<&BddNode> {
        if term.is_terminal() {
            None
        } else {
            self.nodes.get(term.value() - 2)
        }
    }

    /// Finds `var`'s position in this BDD's order, if present.
    pub(crate) fn position_of(&self, var: Var) -> Option<usize> {
        self.order.iter().position(|&v| v == var)
    }

    /// Interns `(var, lo, hi)`, returning the [`Term`] that represents
    /// it: `lo` itself if `lo == hi` (reduction-1, no node created), the
    /// existing node's `Term` on a cache hit, or a freshly-pushed node
    /// on a miss (reduction-2: every distinct triple gets exactly one
    /// node). Grounded on `adf_bdd::obdd::Bdd::node`.
    pub(crate) fn node(&mut self, var: Var, lo: Term, hi: Term) -> Term {
        if lo == hi {
            return lo;
        }
        let candidate = BddNode::new(var, lo, hi);
        if let Some(&existing) = self.cache.get(&candidate) {
            return existing;
        }
        let term = Term(self.nodes.len() + 2);
        self.nodes.push(candidate);
        self.cache.insert(candidate, term);
        log::debug!("new node {term}: {candidate}");
        term
    }
}

impl Display for Bdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "order: {:?}, root: {}", self.order, self.root)?;
        for (idx, node) in self.nodes.iter().enumerate() {
            writeln!(f, "{} {}", idx + 2, node)?;
        }
        Ok(())
    }
}

/// Normalises a `var_order` string to a lower-cased, deduplicated
/// sequence of [`Var`]s, skipping anything outside `a..=z`.
fn normalize_order(var_order: &str) -> Vec<Var> {
    let mut seen = Vec::new();
    for c in var_order.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            let v = Var::new(lower);
            if !seen.contains(&v) {
                seen.push(v);
            }
        }
    }
    seen
}

/// Builds a [`Bdd`] for `expr_text` under `var_order` (spec.md §6.1).
///
/// `var_order` is case-insensitively normalized to lowercase. Variables
/// occurring in `expr_text` but absent from `var_order` are projected
/// away: the builder never tests them, so they never appear at any
/// level of the resulting diagram.
pub fn create_bdd(expr_text: &str, var_order: &str) -> Bdd {
    let order = normalize_order(var_order);
    let expr = parser::parse(expr_text);
    let mut bdd = Bdd::empty(order.clone());

    if order.is_empty() {
        // spec.md §9's resolution of the empty-order corner case:
        // evaluate the expression against the empty assignment.
        bdd.root = if expr.is_const_true() || expr.has_vacuous_true_term() {
            Term::TOP
        } else {
            Term::BOT
        };
        return bdd;
    }

    bdd.root = crate::builder::build(&expr, &order, 0, &mut bdd);
    bdd
}
