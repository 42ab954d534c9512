use thiserror::Error;

/// Errors produced while parsing a pattern.
///
/// Parsing is all-or-nothing: on any of these the parser aborts immediately
/// and no postfix output is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected {0:?} where an atom was expected")]
    UnexpectedChar(char),
    #[error("unexpected end of pattern")]
    UnexpectedEnd,
    #[error("unclosed group '(' in pattern")]
    UnclosedGroup,
    #[error("trailing characters after pattern")]
    TrailingInput,
}

/// Parse an infix pattern into its postfix token string.
///
/// The grammar, precedence low to high:
///
/// ```text
/// union  := concat ('|' concat)*
/// concat := repeat ('.' repeat)*
/// repeat := atom ('*' | '+')?
/// atom   := '(' union ')' | <any char except . * + | ( )>
/// ```
///
/// `.` is an explicit, mandatory concatenation operator: `"ab"` is rejected,
/// `"a.b"` is the two-character sequence. The whole input must be consumed
/// by the top-level union.
///
/// Examples:
/// - Pattern: `a.b`     → `ab.`
/// - Pattern: `a.b|c.d` → `ab.cd.|`
/// - Pattern: `(a.b)*`  → `ab.*`
pub fn parse(pattern: &str) -> Result<String, SyntaxError> {
    let mut p = Parser::new(pattern);
    let postfix = p.parse()?;
    if p.peek().is_some() {
        return Err(SyntaxError::TrailingInput);
    }
    Ok(postfix)
}

/// Recursive descent parser emitting postfix tokens.
///
/// The `Parser` struct holds the pattern, the current position, and the
/// output buffer. Every input character is emitted at most once and every
/// consumed operator emits exactly one token, so the output never exceeds
/// the input length.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
    out: String,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            pos: 0,
            out: String::with_capacity(pattern.len()),
        }
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Expect a specific character and advance if it matches.
    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Parse one full union production and return the postfix emitted so far.
    ///
    /// Callers wanting whole-input validation should use the free [`parse`]
    /// function, which also rejects trailing characters.
    pub fn parse(&mut self) -> Result<String, SyntaxError> {
        self.parse_union()?;
        Ok(std::mem::take(&mut self.out))
    }

    /// Parse alternation (`|`), the lowest-precedence operator.
    ///
    /// Example:
    /// - Pattern: `a|b|c` → `ab|c|`
    fn parse_union(&mut self) -> Result<(), SyntaxError> {
        self.parse_concat()?;
        while self.expect('|') {
            self.parse_concat()?;
            self.out.push('|');
        }
        Ok(())
    }

    /// Parse explicit concatenation (`.`).
    ///
    /// Example:
    /// - Pattern: `a.b.c` → `ab.c.`
    fn parse_concat(&mut self) -> Result<(), SyntaxError> {
        self.parse_repeat()?;
        while self.expect('.') {
            self.parse_repeat()?;
            self.out.push('.');
        }
        Ok(())
    }

    /// Parse an atom with an optional `*` or `+` postfix quantifier.
    ///
    /// Example:
    /// - Pattern: `a*` → `a*`
    fn parse_repeat(&mut self) -> Result<(), SyntaxError> {
        self.parse_atom()?;
        if let Some(op @ ('*' | '+')) = self.peek() {
            self.advance();
            self.out.push(op);
        }
        Ok(())
    }

    /// Parse a single atom: a parenthesised group or one literal character.
    ///
    /// Metacharacters and end-of-input at an atom position are syntax errors;
    /// there is no escape mechanism, so metacharacters can never be literals.
    fn parse_atom(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some('(') => {
                self.advance();
                self.parse_union()?;
                if !self.expect(')') {
                    return Err(SyntaxError::UnclosedGroup);
                }
                Ok(())
            }
            Some(c @ ('.' | '*' | '+' | '|' | ')')) => Err(SyntaxError::UnexpectedChar(c)),
            Some(c) => {
                self.advance();
                self.out.push(c);
                Ok(())
            }
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(s: &str) -> String {
        parse(s).expect("parse should succeed")
    }
    fn parse_err(s: &str) -> SyntaxError {
        parse(s).expect_err("parse should fail")
    }

    #[test]
    fn test_single_literal() {
        assert_eq!(parse_ok("a"), "a");
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(parse_ok("a.b"), "ab.");
        assert_eq!(parse_ok("a.b.c"), "ab.c.");
    }

    #[test]
    fn test_union() {
        assert_eq!(parse_ok("a|b"), "ab|");
        assert_eq!(parse_ok("a.b|c.d"), "ab.cd.|");
    }

    #[test]
    fn test_repetition() {
        assert_eq!(parse_ok("a*"), "a*");
        assert_eq!(parse_ok("a+"), "a+");
        assert_eq!(parse_ok("a.b*"), "ab*.");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(parse_ok("(a.b)*"), "ab.*");
        assert_eq!(parse_ok("(a|b).c"), "ab|c.");
        assert_eq!(parse_ok("((a))"), "a");
    }

    #[test]
    fn test_precedence() {
        // '*' binds tighter than '.', which binds tighter than '|'.
        assert_eq!(parse_ok("a.b*|c"), "ab*.c|");
        assert_eq!(parse_ok("a|b.c"), "abc.|");
    }

    #[test]
    fn test_metacharacter_at_atom_position() {
        assert_eq!(parse_err("*a"), SyntaxError::UnexpectedChar('*'));
        assert_eq!(parse_err("a.+"), SyntaxError::UnexpectedChar('+'));
        assert_eq!(parse_err("a|.b"), SyntaxError::UnexpectedChar('.'));
    }

    #[test]
    fn test_implicit_concatenation_rejected() {
        // Adjacency is not concatenation in this language.
        assert_eq!(parse_err("ab"), SyntaxError::TrailingInput);
        assert_eq!(parse_err("a(b)"), SyntaxError::TrailingInput);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(parse_err(""), SyntaxError::UnexpectedEnd);
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(parse_err("(a"), SyntaxError::UnclosedGroup);
        assert_eq!(parse_err("(a.b"), SyntaxError::UnclosedGroup);
        // A group containing adjacent literals never reaches its ')'.
        assert_eq!(parse_err("(ab)"), SyntaxError::UnclosedGroup);
    }

    #[test]
    fn test_stray_close_paren() {
        assert_eq!(parse_err("a)"), SyntaxError::TrailingInput);
        assert_eq!(parse_err(")"), SyntaxError::UnexpectedChar(')'));
    }

    #[test]
    fn test_dangling_operators() {
        assert_eq!(parse_err("a|"), SyntaxError::UnexpectedEnd);
        assert_eq!(parse_err("a."), SyntaxError::UnexpectedEnd);
    }

    #[test]
    fn test_output_never_longer_than_input() {
        for pat in ["a.b|c.d", "(a.b)*", "a+|b*", "((a|b).c)+"] {
            assert!(parse_ok(pat).len() <= pat.len());
        }
    }
}
