/// Parser state and the top-level parse loop.
///
/// Contains the `Parser` struct with its token cursor and error list, the
/// operator precedence table, and `parse_program` with its per-statement
/// error recovery.
pub mod core;

/// Expression parsing.
///
/// Implements the Pratt (precedence climbing) expression grammar: one
/// prefix rule per token that can start an expression, and infix rules for
/// binary operators, calls and index accesses.
pub mod expression;

/// Statement parsing.
///
/// Implements `låt` and `tillbaka` statements, expression statements, and
/// brace-delimited blocks.
pub mod statement;
