use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the evaluation that produced it and propagates to
/// the nearest driver unchanged; user programs cannot observe or catch it.
pub enum RuntimeError {
    /// Tried to use an unbound identifier.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to a same-typed pair it does not
    /// support.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left: &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// Type tag of the callee.
        type_name: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type tag of the indexed value.
        type_name: &'static str,
    },
    /// A builtin rejected the type of its argument.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type tag of the rejected argument.
        type_name: &'static str,
    },
    /// A call supplied the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got: usize,
        /// How many the function declares.
        want: usize,
    },
    /// An expression form the evaluator has no rule for (hash literals).
    UnknownExpression {
        /// The printed form of the expression.
        rendering: String,
    },
    /// Integer division with a zero divisor.
    DivisionByZero {
        /// The dividend.
        left: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` not supported, got={type_name}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnknownExpression { rendering } => write!(f, "unknown expression: {rendering}"),
            Self::DivisionByZero { left } => write!(f, "division by zero: {left} / 0"),
        }
    }
}

impl std::error::Error for RuntimeError {}
