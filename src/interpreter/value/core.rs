use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    error::RuntimeError,
    interpreter::value::environment::Env,
};

/// Signature shared by native functions exposed to user programs.
///
/// A builtin receives the evaluated argument values and returns a value or
/// a runtime error.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// A named native function exposed to user programs.
///
/// Builtins live in a static table owned by the evaluator; values refer to
/// them by `'static` reference, so two occurrences of the same builtin are
/// always the same instance.
#[derive(Debug)]
pub struct Builtin {
    /// The name programs call the builtin by.
    pub name: &'static str,
    /// The exact number of arguments the builtin accepts.
    pub arity: usize,
    /// The native implementation.
    pub func: BuiltinFn,
}

/// A user-defined function together with the environment it closed over.
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body: BlockStatement,
    /// The environment in effect at the definition site.
    pub env: Env,
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The captured environment may contain this very function, so it is
        // elided to keep Debug output finite.
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`sant` or `falskt`). Produced by the boolean
    /// literals and by comparison operators.
    Bool(bool),
    /// A string value.
    Str(String),
    /// The absence of a value, e.g. an `om` whose condition fails with no
    /// `annars` branch.
    Null,
    /// An array of values. Reference counted so that bindings alias one
    /// array rather than copying it.
    Array(Rc<Vec<Value>>),
    /// A user-defined function capturing its defining environment.
    Function(Rc<FunctionValue>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
    /// Transport wrapper produced by `tillbaka`. It passes through block
    /// boundaries untouched and is unwrapped at the enclosing function or
    /// program boundary, so user programs never observe it.
    Return(Box<Value>),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl Value {
    /// Returns the closed type tag of the value, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN",
        }
    }

    /// Tests the value as a condition.
    ///
    /// `falskt` and null are the only falsy values; every integer
    /// (including zero), string, array and function is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            _ => true,
        }
    }
}

/// Equality on values is the language's identity comparison.
///
/// Integers, booleans, strings and null compare by content (enum variants
/// are their own canonical instances, so content equality on booleans and
/// null is identity). Arrays and functions compare by reference: two
/// bindings are equal only when they alias the same underlying object.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => std::ptr::eq(*left, *right),
            (Self::Return(left), Self::Return(right)) => left == right,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{}", if *value { "sant" } else { "falskt" }),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(
                    f,
                    "funktion({}) {{\n{}\n}}",
                    function.parameters.join(", "),
                    function.body
                )
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
