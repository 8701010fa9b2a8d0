use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: truthiness negation. `!sant` is `falskt`, `!null` is `sant`,
///   and every other value (integers included) negates to `falskt`.
/// - `Negate`: arithmetic negation of an integer. Overflow wraps, so
///   negating the smallest integer yields itself.
///
/// # Parameters
/// - `operator`: The prefix operator.
/// - `right`: The evaluated operand.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Errors
/// `UnknownPrefixOperator` when `-` is applied to anything but an integer.
pub(in crate::interpreter::evaluator) fn eval_prefix(
    operator: PrefixOperator,
    right: &Value,
) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator, right: right.type_name() }),
        },
    }
}
