/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, evaluates expressions and
/// statements against an environment, and produces runtime values. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages bindings, closures and the `tillbaka` control flow.
/// - Reports runtime errors such as type mismatches or unbound names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// keywords, identifiers, literals, operators, and delimiters. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles the Swedish keyword set and multi-byte identifiers.
/// - Carries unrecognized input as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. Operator precedence is resolved here, so later phases
/// see an unambiguous tree.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Resolves operator precedence with a Pratt parser.
/// - Accumulates parse errors and recovers at statement boundaries.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced during execution, such as
/// integers, booleans, strings, arrays, functions, and builtins, together
/// with the environment that holds name bindings.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides type tags, truthiness and the inspect rendering.
/// - Implements the lexically scoped, shareable environment chain.
pub mod value;
