/// Infix operator evaluation.
///
/// Implements evaluation for all binary operations (integer arithmetic and
/// comparison, string concatenation, identity equality) and for index
/// accesses.
pub mod binary;

/// The builtin function table.
///
/// Declares the native functions user programs can call by name, currently
/// `längd`.
pub mod builtin;

/// Core evaluation logic.
///
/// Contains the main tree walk: program, statement, block and expression
/// dispatch, together with conditional evaluation and identifier
/// resolution.
pub mod core;

/// Function call evaluation.
///
/// Handles callee and argument evaluation, closure application in an
/// enclosed environment, and builtin invocation.
pub mod function;

/// Prefix operator evaluation.
///
/// Implements the two unary operations, truthiness negation (`!`) and
/// arithmetic negation (`-`).
pub mod unary;
