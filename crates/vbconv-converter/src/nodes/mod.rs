//! Declaration and expression visitor.
//!
//! `NodesVisitor` converts everything that is not a statement: the
//! compilation unit, namespaces, types, members, type syntax, attributes,
//! parameters, and expressions. Statement bodies are handed to a
//! [`MethodBodyVisitor`](crate::MethodBodyVisitor) created per body, which
//! calls back into this visitor for every expression it meets.
//!
//! # State
//!
//! One visitor converts one translation unit. It owns:
//!
//! - the stack of enclosing type blocks (modifier contexts, destructor names)
//! - the implicit-receiver stack shared with every statement visitor
//! - a recursion depth counter shared by both visitors
//!
//! # Module Organization
//!
//! - `declarations`: compilation unit, imports, namespaces, types, enums, delegates
//! - `members`: fields, properties, methods, constructors, operators, events
//! - `types`: names, type syntax, attributes, parameters, type parameters
//! - `variables`: declarator splitting shared by fields and locals
//! - `expressions`: every expression form

use crate::error::{ConversionError, ConversionResult};
use crate::options::ConvertOptions;
use crate::receiver::ImplicitReceiverStack;
use crate::semantic::SemanticHelper;
use crate::tokens::TokenContext;
use smallvec::SmallVec;
use std::rc::Rc;
use vbconv_common::Trivia;
use vbconv_common::limits::MAX_CONVERSION_DEPTH;
use vbconv_csharp as cs;
use vbconv_semantic::SemanticModel;
use vbconv_syntax as vb;

mod declarations;
mod expressions;
mod members;
mod types;
mod variables;

pub use variables::DeclaratorSite;
pub(crate) use types::symbol_type_syntax;

/// Left on a `null` whose destination type is unknown.
pub(crate) const UNKNOWN_NOTHING_COMMENT: &str =
    "TODO Change to default(_) if this is not a reference type";

/// One converted member plus the sibling declarations it expands into,
/// emitted in order right after it.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberConversion {
    pub primary: cs::Member,
    pub extras: SmallVec<[cs::Member; 1]>,
}

impl MemberConversion {
    pub fn single(primary: cs::Member) -> Self {
        MemberConversion {
            primary,
            extras: SmallVec::new(),
        }
    }

    pub fn with_extra(mut self, extra: cs::Member) -> Self {
        self.extras.push(extra);
        self
    }

    /// Primary first, then extras.
    pub fn into_members(self) -> impl Iterator<Item = cs::Member> {
        std::iter::once(self.primary).chain(self.extras)
    }
}

#[derive(Clone, Debug)]
struct Container {
    identifier: String,
    kind: vb::TypeBlockKind,
}

pub struct NodesVisitor<'a> {
    semantic: SemanticHelper<'a>,
    options: ConvertOptions,
    receivers: Rc<ImplicitReceiverStack>,
    containers: Vec<Container>,
    depth: u32,
    /// Set while converting the right side of `a?.b`: the first receiverless
    /// access there binds to `a` instead of a `With` temporary.
    pending_binding: bool,
}

impl<'a> NodesVisitor<'a> {
    pub fn new(model: &'a dyn SemanticModel, options: ConvertOptions) -> Self {
        NodesVisitor {
            semantic: SemanticHelper::new(model),
            options,
            receivers: ImplicitReceiverStack::new(),
            containers: Vec::new(),
            depth: 0,
            pending_binding: false,
        }
    }

    pub fn semantic(&self) -> &SemanticHelper<'a> {
        &self.semantic
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn receivers(&self) -> &Rc<ImplicitReceiverStack> {
        &self.receivers
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    pub(crate) fn enter(&mut self, kind: &str) -> ConversionResult<()> {
        if self.depth >= MAX_CONVERSION_DEPTH {
            return Err(ConversionError::unsupported(
                kind,
                format!("nesting deeper than {MAX_CONVERSION_DEPTH} levels"),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // =========================================================================
    // Enclosing type blocks
    // =========================================================================

    fn push_container(&mut self, identifier: &str, kind: vb::TypeBlockKind) {
        self.containers.push(Container {
            identifier: identifier.to_string(),
            kind,
        });
    }

    fn pop_container(&mut self) {
        self.containers.pop();
    }

    /// Modifier context for a member of the innermost type block.
    fn member_context(&self) -> TokenContext {
        self.containers
            .last()
            .map(|container| TokenContext::for_container(container.kind))
            .unwrap_or(TokenContext::Member)
    }

    fn in_module(&self) -> bool {
        self.containers
            .last()
            .is_some_and(|container| container.kind == vb::TypeBlockKind::Module)
    }

    fn container_identifier(&self) -> Option<&str> {
        self.containers.last().map(|c| c.identifier.as_str())
    }
}

// =============================================================================
// Comment attachment
// =============================================================================

fn join_trailing(existing: Option<String>, added: Option<String>) -> Option<String> {
    match (existing, added) {
        (Some(existing), Some(added)) => Some(format!("{existing} {added}")),
        (existing, added) => existing.or(added),
    }
}

fn add_member_trivia(member: cs::Member, leading: Vec<String>, trailing: Option<String>) -> cs::Member {
    match member {
        cs::Member::Commented { trivia, member } => {
            let mut all_leading = leading;
            all_leading.extend(trivia.leading);
            cs::Member::Commented {
                trivia: Trivia {
                    leading: all_leading,
                    trailing: join_trailing(trivia.trailing, trailing),
                },
                member,
            }
        }
        other => other.with_trivia(Trivia { leading, trailing }),
    }
}

fn add_statement_trivia(
    statement: cs::Statement,
    leading: Vec<String>,
    trailing: Option<String>,
) -> cs::Statement {
    match statement {
        cs::Statement::Commented { trivia, statement } => {
            let mut all_leading = leading;
            all_leading.extend(trivia.leading);
            cs::Statement::Commented {
                trivia: Trivia {
                    leading: all_leading,
                    trailing: join_trailing(trivia.trailing, trailing),
                },
                statement,
            }
        }
        other => other.with_trivia(Trivia { leading, trailing }),
    }
}

/// Put a source node's comments on the nodes it converted to: leading
/// comments on the first, the trailing comment on the last.
pub(crate) fn attach_member_trivia(members: Vec<cs::Member>, trivia: &Trivia) -> Vec<cs::Member> {
    if trivia.is_empty() {
        return members;
    }
    let converted = trivia.convert();
    let last = members.len().saturating_sub(1);
    members
        .into_iter()
        .enumerate()
        .map(|(index, member)| {
            let leading = if index == 0 {
                converted.leading.clone()
            } else {
                Vec::new()
            };
            let trailing = if index == last {
                converted.trailing.clone()
            } else {
                None
            };
            add_member_trivia(member, leading, trailing)
        })
        .collect()
}

pub(crate) fn attach_statement_trivia(
    statements: Vec<cs::Statement>,
    trivia: &Trivia,
) -> Vec<cs::Statement> {
    if trivia.is_empty() {
        return statements;
    }
    let converted = trivia.convert();
    let last = statements.len().saturating_sub(1);
    statements
        .into_iter()
        .enumerate()
        .map(|(index, statement)| {
            let leading = if index == 0 {
                converted.leading.clone()
            } else {
                Vec::new()
            };
            let trailing = if index == last {
                converted.trailing.clone()
            } else {
                None
            };
            add_statement_trivia(statement, leading, trailing)
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/nodes_tests.rs"]
mod tests;
