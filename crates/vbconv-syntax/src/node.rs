use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a source node, the key for every semantic model query.
///
/// Ids are assigned by the front-end and are unique within one translation
/// unit. They carry no structural meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An identifier with optional type arguments: `List`, `List(Of T)`.
///
/// Used for simple names in expressions, the right side of qualified names
/// and member accesses, and the named part of generic types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleName {
    pub id: NodeId,
    /// Identifier text as written, possibly bracket-escaped (`[Class]`).
    pub identifier: String,
    #[serde(default)]
    pub type_arguments: Vec<crate::TypeSyntax>,
}

impl SimpleName {
    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// Identifier text without source escaping brackets.
    pub fn unescaped(&self) -> &str {
        unescape_identifier(&self.identifier)
    }
}

/// Strip the `[...]` escaping the source language uses for keyword identifiers.
pub fn unescape_identifier(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
}
