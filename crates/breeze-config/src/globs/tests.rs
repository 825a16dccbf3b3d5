//! Tests for brace expansion and glob validation.

use super::*;
use super::expand::{MAX_EXPANSIONS, MAX_GROUPS};

#[test]
fn plain_pattern_expands_to_itself() {
    assert_eq!(expand_braces("./src/**/*.rs").unwrap(), vec!["./src/**/*.rs"]);
}

#[test]
fn expands_single_group() {
    assert_eq!(
        expand_braces("src/**/*.{html,js}").unwrap(),
        vec!["src/**/*.html", "src/**/*.js"]
    );
}

#[test]
fn expands_multiple_and_nested_groups() {
    let expanded = expand_braces("{app,lib}/*.{rs,{ht,x}ml}").unwrap();
    assert_eq!(
        expanded,
        vec![
            "app/*.rs",
            "app/*.html",
            "app/*.xml",
            "lib/*.rs",
            "lib/*.html",
            "lib/*.xml",
        ]
    );
}

#[test]
fn group_without_comma_expands_to_its_body() {
    assert_eq!(expand_braces("a{b}c").unwrap(), vec!["abc"]);
}

#[test]
fn unpaired_braces_stay_literal() {
    assert_eq!(expand_braces("src/*.{html,js").unwrap(), vec!["src/*.{html,js"]);
    assert_eq!(expand_braces("a}.html").unwrap(), vec!["a}.html"]);
    assert_eq!(expand_braces("}{").unwrap(), vec!["}{"]);
    assert_eq!(
        expand_braces("{a,{b,c}.rs").unwrap(),
        vec!["{a,b.rs", "{a,c.rs"]
    );
}

#[test]
fn braces_inside_character_class_are_literal() {
    assert_eq!(expand_braces("src/[{]*.html").unwrap(), vec!["src/[{]*.html"]);
    assert_eq!(
        expand_braces("{lib,src}/[!{}]*.rs").unwrap(),
        vec!["lib/[!{}]*.rs", "src/[!{}]*.rs"]
    );
    // `]` first in a class is a member, so the class still hides the comma.
    assert_eq!(expand_braces("{[],]x,y}").unwrap(), vec!["[],]x", "y"]);
}

#[test]
fn expansion_is_capped() {
    // 2^11 alternatives
    let pattern = "{a,b}".repeat(11);
    let err = expand_braces(&pattern).unwrap_err();
    assert!(err.contains(&MAX_EXPANSIONS.to_string()));
}

#[test]
fn too_many_groups_fail_cleanly() {
    let flat = "{a}".repeat(50_000);
    let err = expand_braces(&flat).unwrap_err();
    assert!(err.contains(&MAX_GROUPS.to_string()));

    let nested = format!("{}a{}", "{".repeat(200_000), "}".repeat(200_000));
    assert!(expand_braces(&nested).is_err());
    assert!(matches!(
        validate_pattern(&nested),
        Err(ConfigError::GlobSyntaxError { .. })
    ));

    let at_limit = "{a}".repeat(MAX_GROUPS);
    assert_eq!(expand_braces(&at_limit).unwrap(), vec!["a".repeat(MAX_GROUPS)]);
}

#[test]
fn accepts_common_content_patterns() {
    for pattern in [
        "*.html",
        "./src/**/*.rs",
        "./templates/**/*.{html,hbs}",
        "!./src/generated/**",
        "src/[abc]*.js",
        "src/[{]*.html",
        "a}.html",
        "./src/**/*.{html",
    ] {
        assert!(validate_pattern(pattern).is_ok(), "{pattern} should be valid");
    }
}

#[test]
fn rejects_unterminated_character_class() {
    let err = validate_pattern("src/[abc").unwrap_err();
    match err {
        ConfigError::GlobSyntaxError { pattern, .. } => assert_eq!(pattern, "src/[abc"),
        other => panic!("expected GlobSyntaxError, got {other:?}"),
    }
}

#[test]
fn rejects_misplaced_recursive_wildcard() {
    assert!(matches!(
        validate_pattern("src/a**/*.rs"),
        Err(ConfigError::GlobSyntaxError { .. })
    ));
}

#[test]
fn rejects_invalid_alternative_inside_braces() {
    let err = validate_pattern("src/*.{html,[js}").unwrap_err();
    assert!(matches!(err, ConfigError::GlobSyntaxError { .. }));
}

#[test]
fn rejects_empty_and_bare_negation() {
    assert!(matches!(
        validate_pattern(""),
        Err(ConfigError::GlobSyntaxError { .. })
    ));
    assert!(matches!(
        validate_pattern("!"),
        Err(ConfigError::GlobSyntaxError { .. })
    ));
}

#[test]
fn error_reports_original_pattern() {
    let err = validate_pattern("!src/*.{rs,[js}").unwrap_err();
    assert!(err.to_string().contains("!src/*.{rs,[js}"));
}
