//! Regular expression matching by classical automata construction.
//!
//! A postfix pattern is parsed into an [`ast::Ast`], compiled to an
//! [`nfa::Nfa`] by Thompson's construction, determinized to a [`dfa::Dfa`] by
//! subset construction, and minimized by Brzozowski's double-reversal
//! algorithm. [`compile::Regex`] wires the pipeline together into a single
//! `compile`/`accepts` matcher.
//!
//! The crate only answers whole-string membership: no capture groups,
//! anchors, lookaround, or partial/streaming matching. Infix regex syntax,
//! file I/O, and CLI argument handling live in the `mygrep` binary, not here.

pub mod alphabet;
pub mod ast;
pub mod compile;
pub mod dfa;
pub mod error;
pub mod nfa;
pub mod parser;

pub use alphabet::Alphabet;
pub use ast::Ast;
pub use compile::{minimize, Regex};
pub use dfa::Dfa;
pub use error::ParseError;
pub use nfa::Nfa;
