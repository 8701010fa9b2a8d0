/// Runtime value representation.
///
/// Defines the `Value` enum covering every type a program can produce, the
/// type tags used in error messages, and the inspect rendering shown by the
/// REPL.
pub mod core;
/// Lexical scope chain.
///
/// Defines the `Environment` holding name bindings, with an optional outer
/// frame. Environments are shared between closures through reference
/// counting, so a frame lives as long as any function value that captured
/// it.
pub mod environment;
