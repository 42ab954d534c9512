use minire::{CompileError, Error, Regex, SyntaxError};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern should compile")
}

#[test]
fn test_explicit_concatenation() {
    let re = regex("a.b");
    assert!(re.is_match("ab"));
    assert!(!re.is_match("a"));
    assert!(!re.is_match("ab "));
}

#[test]
fn test_adjacency_is_not_concatenation() {
    assert!(Regex::new("ab").is_err());
}

#[test]
fn test_zero_or_more() {
    let re = regex("a*");
    assert!(re.is_match(""));
    assert!(re.is_match("aaaa"));
    assert!(!re.is_match("b"));
}

#[test]
fn test_one_or_more() {
    let re = regex("a+");
    assert!(!re.is_match(""));
    assert!(re.is_match("a"));
    assert!(re.is_match("aa"));
}

#[test]
fn test_alternation_of_sequences() {
    let re = regex("a.b|c.d");
    assert!(re.is_match("ab"));
    assert!(re.is_match("cd"));
    assert!(!re.is_match("ac"));
}

#[test]
fn test_invalid_patterns() {
    assert!(Regex::new("(a").is_err());
    assert!(Regex::new("").is_err());
}

#[test]
fn test_compound_patterns() {
    let re = regex("(a|b)+.c");
    assert!(re.is_match("ac"));
    assert!(re.is_match("babac"));
    assert!(!re.is_match("c"));
    assert!(!re.is_match("abab"));

    let re = regex("x.(y.z)*");
    assert!(re.is_match("x"));
    assert!(re.is_match("xyzyz"));
    assert!(!re.is_match("xyz y"));
}

#[test]
fn test_interleaved_matches_share_one_regex() {
    let a = regex("a+");
    let b = regex("(a|b)*");
    assert!(a.is_match("aaa"));
    assert!(b.is_match("ab"));
    assert!(!a.is_match("ab"));
    assert!(b.is_match(""));
    assert!(a.is_match("a"));
}

#[test]
fn test_capacity_error_is_reported() {
    let mut pattern = String::from("a");
    for _ in 0..200 {
        pattern = format!("a.({pattern})");
    }
    assert!(matches!(
        Regex::new(&pattern),
        Err(Error::Compile(CompileError::StackOverflow))
    ));
}

#[test]
fn test_syntax_error_kinds() {
    assert!(matches!(
        Regex::new("a|"),
        Err(Error::Syntax(SyntaxError::UnexpectedEnd))
    ));
    assert!(matches!(
        Regex::new("ab"),
        Err(Error::Syntax(SyntaxError::TrailingInput))
    ));
}
