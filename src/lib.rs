//! # apa
//!
//! apa is an interpreter for a small, dynamically typed,
//! expression-oriented programming language with Swedish keywords (`låt`,
//! `funktion`, `om`, `annars`, `tillbaka`, `sant`, `falskt`). Source text
//! is lexed, parsed into an abstract syntax tree, and evaluated directly
//! against a lexically scoped environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::environment::Environment,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expression` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Renders every node back to a canonical textual form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors accumulate in the parser; runtime errors
/// short-circuit evaluation and surface to the driver.
///
/// # Responsibilities
/// - Defines error enums for both failure regimes.
/// - Renders each error as the message the REPL and CLI print.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the environment to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, reports parse errors or prints the evaluated
/// result, and keeps bindings alive across the session.
pub mod repl;

/// Parses and evaluates a whole source string.
///
/// All statements run against a fresh environment. If execution succeeds
/// this returns `Ok(())`; otherwise it returns the first parse error or
/// the runtime error that stopped evaluation.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use apa::get_result;
///
/// // Simple program: the result is calculated and no error occurs.
/// let source = "låt svar = 6 * 7; svar;";
/// assert!(get_result(source, false).is_ok());
///
/// // Example with an intentional error ('x' is not defined).
/// assert!(get_result("x + 1", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    match eval_program(&program, &Environment::new()) {
        Ok(result) => {
            if auto_print && let Some(value) = result {
                println!("{value}");
            }
            Ok(())
        },
        Err(error) => Err(Box::new(error)),
    }
}
