//! A small regular-expression engine with explicit concatenation.
//!
//! Patterns are compiled to an NFA by Thompson construction and matched by
//! simulating a set of simultaneously active states, so matching never
//! backtracks. The pattern language is deliberately tiny:
//!
//! | Symbol         | Meaning                                    |
//! |----------------|--------------------------------------------|
//! | any other char | literal match of that character            |
//! | `.`            | concatenation operator (explicit, required)|
//! | `\|`           | alternation, lowest precedence             |
//! | `*`            | zero or more of the preceding atom         |
//! | `+`            | one or more of the preceding atom          |
//! | `( … )`        | grouping                                   |
//!
//! Concatenation is an explicit operator, not adjacency: `"a.b"` matches
//! the text `ab`, while the pattern `"ab"` is a syntax error. There are no
//! escapes, classes, or anchors, and a match always covers the whole input.

pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod parser;

pub use compiler::CompileError;
pub use nfa::Nfa;
pub use parser::SyntaxError;

use thiserror::Error;

/// Any failure while turning a pattern into an automaton.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// A compiled pattern, ready for any number of matches.
///
/// Compilation is all-or-nothing: on error nothing is retained. The
/// automaton's states live in a single arena owned by this value and are
/// released together when it is dropped. `is_match` takes `&self`, so one
/// `Regex` may serve concurrent or interleaved matches freely.
#[derive(Debug, Clone)]
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    /// Compile `pattern` into an automaton.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        let postfix = parser::parse(pattern)?;
        let nfa = compiler::compile(&postfix)?;
        Ok(Regex { nfa })
    }

    /// Test whether the whole of `input` is in the pattern's language.
    pub fn is_match(&self, input: &str) -> bool {
        matcher::is_match(&self.nfa, input)
    }
}

/// Compile `pattern` and test `input` in one step.
pub fn is_match(pattern: &str, input: &str) -> Result<bool, Error> {
    Ok(Regex::new(pattern)?.is_match(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_helper() {
        assert_eq!(is_match("a.b", "ab"), Ok(true));
        assert_eq!(is_match("a.b", "ba"), Ok(false));
        assert!(is_match("ab", "ab").is_err());
    }

    #[test]
    fn test_errors_surface_by_kind() {
        assert_eq!(
            Regex::new("(a").unwrap_err(),
            Error::Syntax(SyntaxError::UnclosedGroup)
        );
        assert_eq!(
            Regex::new("").unwrap_err(),
            Error::Syntax(SyntaxError::UnexpectedEnd)
        );
    }
}
