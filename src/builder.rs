//! The Shannon-decomposition recursion that turns an [`Expression`] into
//! a reduced, ordered decision DAG.
use crate::bdd::Bdd;
use crate::cofactor::cofactor;
use crate::datatypes::{Term, Var};
use crate::expression::{Expression, Literal};

/// Builds the BDD node representing `expr` at `order[level..]`, interning
/// every internal node it creates into `bdd`.
///
/// The seven steps below are spec.md §4.4 verbatim, grounded on
/// `bdd.c:build_bdd`:
///
/// 1. A constant expression returns the matching terminal directly.
/// 2. Once every variable in `order` has been decided (`level ==
///    order.len()`), the residual expression can only be the constant
///    left over after cofactoring every decided variable away: ⊤ iff
///    some non-falsified term has no literals left.
/// 3. If `order[level]` doesn't occur in any live term, it's
///    projected away: skip straight to `level + 1` without branching.
/// 4-6. Otherwise cofactor on both polarities of `order[level]`,
///    recurse on each cofactor, and release them (in Rust: let them
///    drop at the end of the match arm).
/// 7. [`Bdd::node`] performs reduction-1 (eliminate `lo == hi`) and
///    reduction-2 (hash-cons the triple) in one call.
pub fn build(expr: &Expression, order: &[Var], level: usize, bdd: &mut Bdd) -> Term {
    if expr.is_const_false() {
        return Term::BOT;
    }
    if expr.is_const_true() {
        return Term::TOP;
    }

    if level == order.len() {
        return if expr.has_vacuous_true_term() {
            Term::TOP
        } else {
            Term::BOT
        };
    }

    let var = order[level];
    let used = expr.terms().iter().any(|t| !t.falsified() && t.mentions(var));
    if !used {
        return build(expr, order, level + 1, bdd);
    }

    let expr_high = cofactor(expr, Literal::positive(var));
    let expr_low = cofactor(expr, Literal::negated(var));

    let high = build(&expr_high, order, level + 1, bdd);
    let low = build(&expr_low, order, level + 1, bdd);

    if high == low {
        return high;
    }
    bdd.node(var, low, high)
}
