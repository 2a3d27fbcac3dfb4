//! Errors surfaced synchronously at the call site.
//!
//! Only malformed input is reported through `Result`. Broken internal
//! invariants (the `InvalidOperation`/`CapacityError` categories) are
//! programming errors and terminate the process via `panic!`/`debug_assert!`
//! rather than being threaded through the public API as recoverable values.

use thiserror::Error;

/// A postfix regex string that does not parse to a single, well-formed AST.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed regex: unexpected operator '{operator}' at token {position} (stack had {stack_len} operand(s))")]
    StackUnderflow {
        operator: char,
        position: usize,
        stack_len: usize,
    },
    #[error("malformed regex: {leftover} operand(s) left on the stack after parsing")]
    LeftoverOperands { leftover: usize },
    #[error("malformed regex: empty input")]
    EmptyInput,
}
