//! Postfix regex string → [`Ast`].
//!
//! The token alphabet is `@` (concat), `|` (union), `*` (star), `?`
//! (optional), `.` (wildcard); every other character is a literal. Infix
//! syntax, and conversion from it, is not this parser's concern. See the
//! CLI crate for that front end.

use crate::alphabet::Alphabet;
use crate::ast::Ast;
use crate::error::ParseError;

/// Parses a postfix regex string into an [`Ast`] over `alphabet`.
///
/// Scans left to right maintaining a stack of partially built trees: nullary
/// tokens push a leaf, unary tokens pop one operand, binary tokens pop two
/// (right first, then left). A binary/unary token seen with too few operands
/// on the stack, or more than one tree left over once the string is
/// consumed, is a malformed regex.
pub fn parse(postfix: &str, alphabet: &Alphabet) -> Result<Ast, ParseError> {
    if postfix.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut stack: Vec<Ast> = Vec::with_capacity(postfix.len());

    for (position, token) in postfix.chars().enumerate() {
        let node = match token {
            '@' => {
                let right = pop(&mut stack, token, position)?;
                let left = pop(&mut stack, token, position)?;
                Ast::concat(left, right)
            }
            '|' => {
                let right = pop(&mut stack, token, position)?;
                let left = pop(&mut stack, token, position)?;
                Ast::union(left, right)
            }
            '*' => {
                let child = pop(&mut stack, token, position)?;
                Ast::star(child)
            }
            '?' => {
                let child = pop(&mut stack, token, position)?;
                Ast::union(Ast::EmptyString, child)
            }
            '.' => Ast::char_group(alphabet.symbols().to_vec()),
            literal => Ast::char_group(vec![literal]),
        };
        stack.push(node);
    }

    match stack.len() {
        1 => Ok(stack.pop().expect("stack has exactly one element")),
        0 => Err(ParseError::EmptyInput),
        leftover => Err(ParseError::LeftoverOperands { leftover }),
    }
}

fn pop(stack: &mut Vec<Ast>, operator: char, position: usize) -> Result<Ast, ParseError> {
    stack.pop().ok_or(ParseError::StackUnderflow {
        operator,
        position,
        stack_len: stack.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::alphanumeric()
    }

    #[test]
    fn literal_concat() {
        let ast = parse("ab@", &alphabet()).unwrap();
        assert_eq!(
            ast,
            Ast::concat(Ast::char_group(['a']), Ast::char_group(['b']))
        );
    }

    #[test]
    fn star_over_concat() {
        let ast = parse("ab@*", &alphabet()).unwrap();
        assert_eq!(
            ast,
            Ast::star(Ast::concat(
                Ast::char_group(['a']),
                Ast::char_group(['b'])
            ))
        );
    }

    #[test]
    fn union() {
        let ast = parse("ab|", &alphabet()).unwrap();
        assert_eq!(
            ast,
            Ast::union(Ast::char_group(['a']), Ast::char_group(['b']))
        );
    }

    #[test]
    fn wildcard_desugars_to_whole_alphabet() {
        let ast = parse(".", &alphabet()).unwrap();
        assert_eq!(ast, Ast::char_group(alphabet().symbols().to_vec()));
    }

    #[test]
    fn optional_desugars_to_union_with_empty_string() {
        let ast = parse("a?", &alphabet()).unwrap();
        assert_eq!(
            ast,
            Ast::union(Ast::EmptyString, Ast::char_group(['a']))
        );
    }

    #[test]
    fn stack_underflow_on_binary_operator() {
        let err = parse("a@", &alphabet()).unwrap_err();
        assert!(matches!(err, ParseError::StackUnderflow { .. }));
    }

    #[test]
    fn stack_underflow_on_unary_operator() {
        let err = parse("*", &alphabet()).unwrap_err();
        assert!(matches!(err, ParseError::StackUnderflow { .. }));
    }

    #[test]
    fn leftover_operands_rejected() {
        let err = parse("ab", &alphabet()).unwrap_err();
        assert_eq!(err, ParseError::LeftoverOperands { leftover: 2 });
    }

    #[test]
    fn empty_input_rejected() {
        let err = parse("", &alphabet()).unwrap_err();
        assert_eq!(err, ParseError::EmptyInput);
    }
}
