//! Text-level rewrite of a manifest's version declaration.
//!
//! The manifest is never parsed as TOML. The first line of the form
//! `version = "<value>"` has its value swapped and every other byte is left
//! exactly as it was.

use crate::error::Result;
use regex::{Captures, Regex};

/// Matches a line-level `version = "..."` assignment, including dotted keys
/// such as `project.version` and a leading byte order mark.
///
/// Groups: 1 = BOM, indentation, key, `=` and opening quote; 2 = value;
/// 3 = closing quote.
const VERSION_DECLARATION: &str = r#"(?m)^(\x{FEFF}?[ \t]*(?:[A-Za-z0-9_-]+[ \t]*\.[ \t]*)*version[ \t]*=[ \t]*")([^"\r\n]*)(")"#;

/// Result of rewriting a manifest's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRewrite {
    /// Document text after the substitution.
    pub text: String,
    /// Value that was replaced, `None` if no declaration matched.
    pub previous: Option<String>,
}

impl VersionRewrite {
    pub fn matched(&self) -> bool {
        self.previous.is_some()
    }
}

/// Replaces the value of the first version declaration in `text`.
///
/// `new_version` is inserted verbatim; `$` has no special meaning. Later
/// declarations are left untouched. Without a match the text is returned
/// unchanged.
pub fn rewrite_version(text: &str, new_version: &str) -> Result<VersionRewrite> {
    let pattern = Regex::new(VERSION_DECLARATION)?;

    let previous = pattern.captures(text).map(|caps| caps[2].to_string());
    if previous.is_none() {
        return Ok(VersionRewrite {
            text: text.to_string(),
            previous,
        });
    }

    let text = pattern
        .replacen(text, 1, |caps: &Captures| {
            format!("{}{}{}", &caps[1], new_version, &caps[3])
        })
        .into_owned();

    Ok(VersionRewrite { text, previous })
}
