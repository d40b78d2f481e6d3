//! Comment Preservation
//!
//! Comments are not part of the source grammar, so the front-end attaches them
//! to the nearest statement or member as [`Trivia`]. The converter carries that
//! trivia across and rewrites each comment into destination syntax.

use serde::{Deserialize, Serialize};

/// Comments attached to a statement or member.
///
/// Source trivia holds raw comment text (`' note`, `REM note`); destination
/// trivia holds already-rewritten text (`// note`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    /// Whole-line comments placed before the node, in source order.
    #[serde(default)]
    pub leading: Vec<String>,
    /// A comment on the same line, after the node.
    #[serde(default)]
    pub trailing: Option<String>,
}

impl Trivia {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_none()
    }

    /// Trivia with only a trailing comment.
    pub fn trailing(text: impl Into<String>) -> Self {
        Trivia {
            leading: Vec::new(),
            trailing: Some(text.into()),
        }
    }

    /// Rewrite every comment from source syntax to destination syntax.
    pub fn convert(&self) -> Trivia {
        Trivia {
            leading: self.leading.iter().map(|c| convert_comment(c)).collect(),
            trailing: self.trailing.as_deref().map(convert_comment),
        }
    }
}

/// Rewrite a single source comment into a destination line comment.
///
/// `'''` documentation comments become `///`, `'` and `REM` comments become
/// `//`. Text that is not recognizably a source comment is wrapped as-is.
pub fn convert_comment(text: &str) -> String {
    let trimmed = text.trim_start();

    if let Some(rest) = trimmed.strip_prefix("'''") {
        return format!("///{rest}");
    }
    if let Some(rest) = trimmed.strip_prefix('\'') {
        return format!("//{rest}");
    }
    // `REM` must be followed by whitespace or end the line to be a comment.
    if let Some(keyword) = trimmed.get(..3)
        && keyword.eq_ignore_ascii_case("rem")
    {
        let rest = &trimmed[3..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return format!("//{rest}");
        }
    }
    if trimmed.starts_with("//") || trimmed.starts_with("/*") {
        return trimmed.to_string();
    }
    format!("// {trimmed}")
}

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod tests;
