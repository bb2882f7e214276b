use super::*;

#[test]
fn regex_matches_anywhere_in_line() {
    let regex = Regex::new("http").unwrap();
    assert!(regex.matches("// see https://example.com"));
    assert!(!regex.matches("// nothing here"));
}

#[test]
fn anchored_regex_only_matches_at_start() {
    let regex = Regex::new("^AAA").unwrap();
    assert!(regex.matches("AAA 123456"));
    assert!(!regex.matches(" AAA 123456"));
}

#[test]
fn slice_matches_if_any_matcher_matches() {
    let regexes = [Regex::new("^foo").unwrap(), Regex::new("bar$").unwrap()];
    assert!(regexes.as_slice().matches("foo 1"));
    assert!(regexes.as_slice().matches("1 bar"));
    assert!(!regexes.as_slice().matches("baz"));
}

#[test]
fn empty_slice_never_matches() {
    let regexes: [Regex; 0] = [];
    assert!(!regexes.as_slice().matches(""));
    assert!(!regexes.as_slice().matches("anything"));
}

#[test]
fn compile_keeps_valid_and_reports_invalid() {
    let (patterns, rejected) = IgnorePatterns::compile(&["^AAA", "(unclosed", "http"]);

    assert_eq!(patterns.len(), 2);
    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        &rejected[0],
        BiteSizedError::InvalidRegex { pattern, .. } if pattern == "(unclosed"
    ));
}

#[test]
fn compile_preserves_order() {
    let (patterns, _) = IgnorePatterns::compile(&["b", "a", "c"]);
    let sources: Vec<&str> = patterns.iter().map(Regex::as_str).collect();
    assert_eq!(sources, vec!["b", "a", "c"]);
}

#[test]
fn empty_patterns_never_match() {
    let patterns = IgnorePatterns::empty();
    assert!(patterns.is_empty());
    assert!(!patterns.matches("AAA"));
}

#[test]
fn display_joins_sources_with_spaces() {
    let (patterns, _) = IgnorePatterns::compile(&["^AAA", "^\\s*using "]);
    assert_eq!(patterns.to_string(), "^AAA ^\\s*using ");
}

#[test]
fn display_of_empty_is_empty() {
    assert_eq!(IgnorePatterns::empty().to_string(), "");
}
