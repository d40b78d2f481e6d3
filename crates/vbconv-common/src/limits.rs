//! Centralized limits and thresholds for the converter.
//!
//! Both visitors recurse once per nested node, so pathological inputs
//! (thousands of nested parentheses or `If` blocks) could otherwise exhaust
//! the stack. Exceeding a limit fails the unit instead.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for expressions and statements in a single unit.
///
/// Counted across both visitors: an expression inside a lambda inside a
/// `With` block inside a loop contributes one level for each of them.
pub const MAX_CONVERSION_DEPTH: u32 = 500;

// =============================================================================
// Operation Counts
// =============================================================================

/// Maximum number of numbered candidates tried when synthesizing a unique
/// temporary name (`withBlock`, `withBlock1`, ...).
pub const MAX_UNIQUE_NAME_ATTEMPTS: u32 = 10_000;
