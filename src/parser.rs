//! A permissive parser from DNF text to an [`Expression`].
//!
//! The grammar is informal and forgiving by design (spec.md §4.1): a
//! `+` starts a new term, a `!` negates the following letter, and any
//! byte outside `{a-z, !, +}` is noise and is dropped before the
//! structural grammar ever sees it — equivalent to, but easier to read
//! than, the original C parser's char-by-char `switch` that silently
//! `continue`s on unrecognised bytes. The parser never fails:
//! malformed input yields a best-effort [`Expression`].
use nom::{
    character::complete::{char, satisfy},
    multi::{many0, separated_list0},
    IResult,
};

use crate::datatypes::Var;
use crate::expression::{Expression, Literal, Product};

/// Parses `expr_text` into an [`Expression`]. Empty input denotes ⊥.
pub fn parse(expr_text: &str) -> Expression {
    if expr_text.is_empty() {
        return Expression::constant_false();
    }
    let cleaned: String = expr_text
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '!' || *c == '+')
        .collect();
    // `separated_list0` on an empty or all-`+` cleaned string still
    // yields one (or more) empty, ⊤-denoting terms, reproducing the
    // leading/trailing-`+` quirk from spec.md §4.1.
    let (_, terms) = parse_terms(&cleaned).unwrap_or(("", vec![Product::new()]));
    Expression::from_terms(terms)
}

/// `term ("+" term)*`
fn parse_terms(input: &str) -> IResult<&str, Vec<Product>> {
    separated_list0(char('+'), parse_term)(input)
}

/// `literal*`, collecting into one [`Product`].
fn parse_term(input: &str) -> IResult<&str, Product> {
    let (rest, literals) = many0(parse_literal)(input)?;
    let mut term = Product::new();
    for lit in literals {
        term.add_literal(lit);
    }
    Ok((rest, term))
}

/// `"!"* letter`. Consecutive `!`s toggle polarity (`!!x` is `x`); a
/// trailing run of `!` with no following letter fails to parse a
/// literal and is simply dropped by the enclosing `many0`.
fn parse_literal(input: &str) -> IResult<&str, Literal> {
    let (rest, bangs) = many0(char('!'))(input)?;
    let (rest, letter) = satisfy(|c: char| c.is_ascii_lowercase())(rest)?;
    let negated = bangs.len() % 2 == 1;
    let var = Var::new(letter);
    Ok((
        rest,
        if negated {
            Literal::negated(var)
        } else {
            Literal::positive(var)
        },
    ))
}
