//! Implicit receivers of `With` blocks.
//!
//! Inside `With expr ... End With`, a member access without a receiver
//! (`.Name`) refers to `expr`. The converter stores `expr` in a uniquely
//! named temporary and substitutes that name. Nested blocks form a stack;
//! the innermost temporary wins.
//!
//! The stack is shared by every visitor of a unit. A push returns a
//! [`ReceiverGuard`] that pops on drop, so the stack is balanced on every
//! exit path, including early returns through `?`.

use crate::error::{ConversionError, ConversionResult};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::rc::Rc;
use vbconv_common::limits::MAX_UNIQUE_NAME_ATTEMPTS;

#[derive(Debug, Default)]
pub struct ImplicitReceiverStack {
    names: RefCell<Vec<String>>,
}

impl ImplicitReceiverStack {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Make `name` the innermost receiver until the guard is dropped.
    pub fn push(self: &Rc<Self>, name: impl Into<String>) -> ReceiverGuard {
        self.names.borrow_mut().push(name.into());
        ReceiverGuard {
            stack: Rc::clone(self),
        }
    }

    /// Innermost receiver, if any block is active.
    pub fn top(&self) -> Option<String> {
        self.names.borrow().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.names.borrow().len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.borrow().iter().any(|n| n == name)
    }

    /// `base`, or `base1`, `base2`, ... : the first candidate that is neither
    /// an active receiver nor in `reserved`. Comparison is case-sensitive.
    pub fn unique_name(&self, base: &str, reserved: &FxHashSet<String>) -> ConversionResult<String> {
        let is_free = |candidate: &str| !self.contains(candidate) && !reserved.contains(candidate);
        if is_free(base) {
            return Ok(base.to_string());
        }
        for suffix in 1..=MAX_UNIQUE_NAME_ATTEMPTS {
            let candidate = format!("{base}{suffix}");
            if is_free(&candidate) {
                return Ok(candidate);
            }
        }
        Err(ConversionError::unsupported(
            "WithBlock",
            format!("no free name for the {base} temporary"),
        ))
    }
}

/// Pops its receiver when dropped.
#[must_use = "the receiver is popped as soon as the guard is dropped"]
pub struct ReceiverGuard {
    stack: Rc<ImplicitReceiverStack>,
}

impl Drop for ReceiverGuard {
    fn drop(&mut self) {
        self.stack.names.borrow_mut().pop();
    }
}

#[cfg(test)]
#[path = "tests/receiver_tests.rs"]
mod tests;
