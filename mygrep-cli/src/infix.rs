//! Infix regex syntax → the postfix token string [`regexen::parser::parse`]
//! consumes. Outside the core by design: the core assumes well-formed
//! postfix input and leaves conversion to its caller.
//!
//! The grammar (alternation over sequence over a postfix-quantified atom) and
//! the combinator style are carried over directly from the infix regex
//! parser this project is grounded on, only retargeted to emit a postfix
//! token string instead of building an AST node directly.

use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete::char as char_tag;
use nom::combinator::{all_consuming, map, opt, value, verify};
use nom::multi::{many1, separated_list1};
use nom::sequence::{delimited, preceded};
use nom::{Finish, IResult};
use regexen::alphabet::Alphabet;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expr {
    Literal(char),
    Wildcard,
    Concat(Box<Expr>, Box<Expr>),
    Union(Box<Expr>, Box<Expr>),
    Star(Box<Expr>),
    Optional(Box<Expr>),
}

/// Converts an infix regex string into the `@ | * ? .`-token postfix form
/// `regexen` consumes, over `alphabet`.
///
/// Every literal character (plain or escaped) is checked against `alphabet`
/// before being emitted: the postfix grammar reserves `@ | * ? .` as operator
/// tokens with no escape mechanism of its own, so a literal character equal
/// to one of them could not be told apart from the operator once emitted.
/// Rejecting any literal outside `alphabet` up front, which for the default
/// alphanumeric alphabet already excludes all five operator characters,
/// rules that collision out rather than silently misreading a literal `@`
/// as concatenation.
pub fn to_postfix(input: &str, alphabet: &Alphabet) -> Result<String, String> {
    let (_, expr) = all_consuming(expression)(input.trim())
        .finish()
        .map_err(|e| format!("invalid pattern near {:?}", e.input))?;
    let mut out = String::new();
    emit_postfix(&expr, alphabet, &mut out)?;
    Ok(out)
}

fn emit_postfix(expr: &Expr, alphabet: &Alphabet, out: &mut String) -> Result<(), String> {
    match expr {
        Expr::Literal(c) => {
            if !alphabet.contains(*c) {
                return Err(format!("character {c:?} is not in the matcher's alphabet"));
            }
            out.push(*c);
        }
        Expr::Wildcard => out.push('.'),
        Expr::Concat(left, right) => {
            emit_postfix(left, alphabet, out)?;
            emit_postfix(right, alphabet, out)?;
            out.push('@');
        }
        Expr::Union(left, right) => {
            emit_postfix(left, alphabet, out)?;
            emit_postfix(right, alphabet, out)?;
            out.push('|');
        }
        Expr::Star(child) => {
            emit_postfix(child, alphabet, out)?;
            out.push('*');
        }
        Expr::Optional(child) => {
            emit_postfix(child, alphabet, out)?;
            out.push('?');
        }
    }
    Ok(())
}

fn expression(input: &str) -> IResult<&str, Expr> {
    alternation(input)
}

fn alternation(input: &str) -> IResult<&str, Expr> {
    map(separated_list1(char_tag('|'), sequence), fold_binary(Expr::Union))(input)
}

fn sequence(input: &str) -> IResult<&str, Expr> {
    map(many1(alt((par_expr, atom))), fold_binary(Expr::Concat))(input)
}

fn fold_binary(f: impl Fn(Box<Expr>, Box<Expr>) -> Expr) -> impl Fn(Vec<Expr>) -> Expr {
    move |items| {
        let mut items = items.into_iter();
        let first = items.next().expect("separated_list1/many1 always yield >= 1");
        items.fold(first, |acc, next| f(Box::new(acc), Box::new(next)))
    }
}

fn par_expr(input: &str) -> IResult<&str, Expr> {
    map(
        delimited(char_tag('('), expression, char_tag(')')).and(opt(quantifier)),
        apply_quantifier,
    )(input)
}

fn atom(input: &str) -> IResult<&str, Expr> {
    map(regex_char.and(opt(quantifier)), apply_quantifier)(input)
}

fn quantifier(input: &str) -> IResult<&str, char> {
    nom::character::complete::one_of("*+?")(input)
}

fn apply_quantifier((expr, quant): (Expr, Option<char>)) -> Expr {
    match quant {
        Some('*') => Expr::Star(Box::new(expr)),
        Some('+') => Expr::Concat(Box::new(expr.clone()), Box::new(Expr::Star(Box::new(expr)))),
        Some('?') => Expr::Optional(Box::new(expr)),
        None => expr,
        Some(other) => unreachable!("quantifier() only yields *, + or ?, got {other:?}"),
    }
}

fn regex_char(input: &str) -> IResult<&str, Expr> {
    alt((wildcard, escaped_char, normal_char))(input)
}

fn wildcard(input: &str) -> IResult<&str, Expr> {
    value(Expr::Wildcard, char_tag('.'))(input)
}

fn escaped_char(input: &str) -> IResult<&str, Expr> {
    map(preceded(char_tag('\\'), take(1usize)), one_char)(input)
}

fn normal_char(input: &str) -> IResult<&str, Expr> {
    verify(map(take(1usize), one_char), |expr| match expr {
        Expr::Literal(c) => !is_reserved_char(*c),
        Expr::Wildcard => false,
        _ => unreachable!(),
    })(input)
}

fn one_char(s: &str) -> Expr {
    let mut chars = s.chars();
    let c = chars.next().expect("take(1) yields exactly one char");
    debug_assert!(chars.next().is_none(), "take(1) should take only 1 character");
    Expr::Literal(c)
}

fn is_reserved_char(c: char) -> bool {
    ['(', ')', '.', '|', '*', '+', '?', '\\'].contains(&c)
}
