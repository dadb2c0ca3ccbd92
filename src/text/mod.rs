//! Small text helpers shared by crawler definitions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `$action(arguments)` template expressions embedded in crawler
/// definition strings.
pub static ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\$)([\w\d_\-]+)([(\s]+)([\w'_"\-.\d, ]+)([)\s]+)"#)
        .expect("action pattern must compile")
});

/// One `$action(args)` expression extracted from a definition string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCall {
    pub name: String,
    pub raw_args: String,
}

/// Extracts the first action expression from `text`, if any. Arguments are
/// returned as the raw, untrimmed-of-quotes argument string.
pub fn parse_action(text: &str) -> Option<ActionCall> {
    ACTION_PATTERN.captures(text).map(|caps| ActionCall {
        name: caps[2].to_string(),
        raw_args: caps[4].trim().to_string(),
    })
}

/// Converts CamelCase to snake_case. The first character is lowercased
/// without a leading underscore.
pub fn un_camel(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 4);
    for (index, c) in text.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if index > 0 {
                output.push('_');
            }
            output.push(c.to_ascii_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}
