//! The compiler pipeline: Thompson, subset construction, Brzozowski
//! minimization, and the [`Regex`] facade that ties them together.

use crate::alphabet::Alphabet;
use crate::dfa::{self, Dfa};
use crate::error::ParseError;
use crate::nfa::thompson;
use crate::parser::parse;

/// Minimizes `dfa` via Brzozowski's double-reversal algorithm:
/// `minimal = subset(reverse(subset(reverse(dfa))))`.
///
/// Each `reverse` turns a DFA into a (generally nondeterministic) NFA
/// accepting the reverse language; each `subset` redeterminizes it. Running
/// the pair twice yields a canonical minimal DFA.
pub fn minimize(dfa: &Dfa) -> Dfa {
    let once = dfa::subset_construct(&dfa.reverse());
    dfa::subset_construct(&once.reverse())
}

/// A regular expression and its lifecycle: uncompiled, successfully compiled
/// to a minimal DFA, or the `ParseError` a compile attempt failed with.
/// `Failed` is carried as the `Err` of [`Regex::compile`] rather than as a
/// variant of this type. `Released` is simply `Regex`'s `Drop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    dfa: Dfa,
}

impl Regex {
    /// Parses `postfix` over `alphabet`, compiles it through the full
    /// pipeline, and returns a `Ready` matcher, or the `ParseError` that
    /// prevented one from being built.
    pub fn compile(postfix: &str, alphabet: Alphabet) -> Result<Regex, ParseError> {
        let ast = parse(postfix, &alphabet)?;
        let nfa = thompson(&ast, alphabet);
        let dfa = dfa::subset_construct(&nfa);
        let dfa = minimize(&dfa);
        Ok(Regex { dfa })
    }

    /// Compiles `postfix` over the default 62-symbol alphanumeric alphabet.
    pub fn compile_default(postfix: &str) -> Result<Regex, ParseError> {
        Regex::compile(postfix, Alphabet::default())
    }

    /// Whether `w` belongs to this pattern's language.
    pub fn accepts(&self, w: &str) -> bool {
        self.dfa.accepts(w)
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(postfix: &str, accepted: &[&str], rejected: &[&str]) {
        let regex = Regex::compile_default(postfix).unwrap();
        for &w in accepted {
            assert!(regex.accepts(w), "expected {postfix:?} to accept {w:?}");
        }
        for &w in rejected {
            assert!(!regex.accepts(w), "expected {postfix:?} to reject {w:?}");
        }
    }

    #[test]
    fn scenario_ab() {
        matches("ab@", &["ab"], &["", "a", "abc"]);
    }

    #[test]
    fn scenario_ab_star() {
        matches("ab@*", &["", "ab", "abab"], &["a", "aba"]);
    }

    #[test]
    fn scenario_a_or_b() {
        matches("ab|", &["a", "b"], &["", "ab"]);
    }

    #[test]
    fn scenario_any_star() {
        let regex = Regex::compile_default(".*").unwrap();
        assert!(regex.accepts(""));
        for &c in Alphabet::default().symbols() {
            assert!(regex.accepts(&c.to_string()));
        }
    }

    #[test]
    fn scenario_a_star_b() {
        matches("a*b@", &["b", "ab", "aaab"], &["", "a", "ba"]);
    }

    #[test]
    fn scenario_optional_a_then_b() {
        matches("a?b@", &["b", "ab"], &["", "aab"]);
    }

    #[test]
    fn minimized_a_star_b_has_two_non_trap_states() {
        // A trap is a non-accepting state every one of whose transitions
        // loops back to itself; after minimization the only such states left
        // are collapsed into (at most) one shared sink.
        let regex = Regex::compile_default("a*b@").unwrap();
        let dfa = regex.dfa();
        let is_trap = |s: usize| {
            !dfa.is_accepting(s)
                && dfa
                    .alphabet()
                    .symbols()
                    .iter()
                    .all(|&c| dfa.step(s, c) == Some(s))
        };
        let non_trap = (0..dfa.state_count()).filter(|&s| !is_trap(s)).count();
        assert_eq!(non_trap, 2, "expected exactly the loop state and the accepting state");
    }

    #[test]
    fn minimize_is_idempotent_up_to_state_count() {
        let regex = Regex::compile_default("ab@*|a*b@|").unwrap();
        let once = regex.dfa().clone();
        let twice = minimize(&once);
        assert_eq!(once.state_count(), twice.state_count());
    }

    #[test]
    fn malformed_pattern_reports_parse_error() {
        let err = Regex::compile_default("a@").unwrap_err();
        assert!(matches!(err, ParseError::StackUnderflow { .. }));
    }
}
