//! Searches a small neighborhood of variable orderings for a smaller BDD.
use crate::bdd::{create_bdd, Bdd};

/// Builds `n = |vars|` candidate BDDs under the rotations of `vars`
/// (`vars`, `vars[1:] + vars[0]`, `vars[2:] + vars[:2]`, ...) and returns
/// the smallest by [`Bdd::node_count`]. Ties keep the earliest candidate,
/// so the identity rotation — tried first — wins unless a later one is
/// strictly smaller; this guarantees
/// `create_bdd_best_order(..).node_count() <= create_bdd(..).node_count()`
/// (spec.md §8, property 6).
///
/// Deliberately a small neighborhood, not a full permutation search
/// (spec.md §4.6/§9): `n` rotations, not `n!` permutations. `n == 0`
/// returns the parse-time constant BDD, matching
/// `bdd.c:create_BDD_with_best_order`'s empty-`var_seq` branch.
pub fn create_bdd_best_order(expr_text: &str, vars: &str) -> Bdd {
    let chars: Vec<char> = vars.chars().collect();
    let n = chars.len();
    if n == 0 {
        return create_bdd(expr_text, vars);
    }

    let mut best: Option<Bdd> = None;
    for i in 0..n {
        let rotated: String = chars[i..].iter().chain(chars[..i].iter()).collect();
        let candidate = create_bdd(expr_text, &rotated);
        log::debug!(
            "order_search: rotation {i} ({rotated}) -> {} nodes",
            candidate.node_count()
        );
        let replace = match &best {
            None => true,
            Some(current) => candidate.node_count() < current.node_count(),
        };
        if replace {
            best = Some(candidate);
        }
    }
    best.expect("n > 0 guarantees at least one candidate was built")
}
