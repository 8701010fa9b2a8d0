use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Builtin, Value},
    },
};

/// The builtin function table.
///
/// Identifier resolution falls back to this table after the environment
/// chain, so a binding named like a builtin shadows it.
static BUILTINS: &[Builtin] = &[Builtin { name: "längd", arity: 1, func: length }];

/// Looks up a builtin by name.
pub(crate) fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// `längd`: the length of a value.
///
/// Returns the byte length of a string or the element count of an array.
/// Any other argument type is rejected. The arity is checked by the
/// caller before the builtin runs.
fn length(arguments: &[Value]) -> EvalResult<Value> {
    match arguments {
        [Value::Str(value)] => Ok(Value::Integer(to_count(value.len()))),
        [Value::Array(elements)] => Ok(Value::Integer(to_count(elements.len()))),
        [other] => Err(RuntimeError::UnsupportedArgument {
            builtin: "längd",
            type_name: other.type_name(),
        }),
        _ => Err(RuntimeError::WrongArgumentCount { got: arguments.len(), want: 1 }),
    }
}

/// Converts a host length to a language integer. Lengths beyond the
/// integer range cannot occur for real inputs; saturate if they somehow do.
fn to_count(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}
