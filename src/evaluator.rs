//! Walks a [`Bdd`] against a bit assignment.
use crate::bdd::Bdd;
use crate::datatypes::Term;
use crate::error::EvalError;

/// Bit strings longer than this are rejected (spec.md §6).
pub const MAX_BITS: usize = 26;

/// Evaluates `bdd` against `bits`, where `bits[i]` is the assignment for
/// `bdd.order()[i]`.
///
/// This indexes each internal node's variable by its **position in
/// `bdd.order()`**, not by `var - 'a'` — the correction spec.md §9
/// prescribes over the original C evaluator, which silently equated
/// variable `a` with `bits[0]` regardless of the actual order.
pub fn evaluate(bdd: &Bdd, bits: &str) -> Result<bool, EvalError> {
    if bits.len() > MAX_BITS {
        return Err(EvalError::TooManyBits {
            max: MAX_BITS,
            found: bits.len(),
        });
    }
    let bit_values: Vec<bool> = bits
        .chars()
        .enumerate()
        .map(|(index, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(EvalError::InvalidBit { index, found }),
        })
        .collect::<Result<_, _>>()?;

    let mut term = bdd.root();
    loop {
        if term == Term::TOP {
            return Ok(true);
        }
        if term == Term::BOT {
            return Ok(false);
        }
        let node = bdd
            .node_at(term)
            .expect("non-terminal Term must resolve to a node in this BDD's arena");
        let position = bdd
            .position_of(node.var())
            .expect("every node's variable comes from this BDD's own order");
        let assignment = *bit_values.get(position).ok_or(EvalError::TooFewBits {
            needed: position,
            found: bit_values.len(),
        })?;
        term = if assignment { node.hi() } else { node.lo() };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bdd::create_bdd;

    #[test]
    fn single_variable() {
        let bdd = create_bdd("a", "a");
        assert!(!evaluate(&bdd, "0").unwrap());
        assert!(evaluate(&bdd, "1").unwrap());
    }

    #[test]
    fn tautology_ignores_bits() {
        let bdd = create_bdd("a+!a", "a");
        assert!(evaluate(&bdd, "0").unwrap());
        assert!(evaluate(&bdd, "1").unwrap());
    }

    #[test]
    fn xnor_truth_table() {
        let bdd = create_bdd("ab+!a!b", "ab");
        assert!(evaluate(&bdd, "00").unwrap());
        assert!(!evaluate(&bdd, "01").unwrap());
        assert!(!evaluate(&bdd, "10").unwrap());
        assert!(evaluate(&bdd, "11").unwrap());
    }

    #[test]
    fn empty_expression_is_always_false() {
        let bdd = create_bdd("", "a");
        assert!(!evaluate(&bdd, "0").unwrap());
        assert!(!evaluate(&bdd, "1").unwrap());
    }

    #[test]
    fn invalid_bit_character_errors() {
        let bdd = create_bdd("a", "a");
        assert_eq!(
            evaluate(&bdd, "2"),
            Err(EvalError::InvalidBit { index: 0, found: '2' })
        );
    }

    #[test]
    fn too_few_bits_errors() {
        let bdd = create_bdd("ab", "ab");
        assert_eq!(
            evaluate(&bdd, "1"),
            Err(EvalError::TooFewBits { needed: 1, found: 1 })
        );
    }

    #[test]
    fn too_many_bits_errors() {
        let bdd = create_bdd("a", "a");
        let bits = "0".repeat(MAX_BITS + 1);
        assert_eq!(
            evaluate(&bdd, &bits),
            Err(EvalError::TooManyBits {
                max: MAX_BITS,
                found: MAX_BITS + 1
            })
        );
    }

    #[test]
    fn order_position_is_used_not_letter_offset() {
        // Variable `a` is tested, but it sits at position 1 in the
        // order "ba" — bits[1] must decide it, not bits[0].
        let bdd = create_bdd("a", "ba");
        assert!(evaluate(&bdd, "01").unwrap());
        assert!(!evaluate(&bdd, "00").unwrap());
        // The bit at position 0 (variable `b`) is irrelevant to `a`'s BDD.
        assert!(evaluate(&bdd, "11").unwrap());
    }
}
