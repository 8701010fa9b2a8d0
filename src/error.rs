/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// abstract syntax tree. Parse errors accumulate inside the parser instead
/// of stopping it, so a single pass can report every broken statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors short-circuit the evaluation they occur in and surface to the
/// driver unchanged.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
