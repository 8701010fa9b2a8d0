use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operation on two values.
///
/// The rules apply in order:
/// 1. Two integers: full arithmetic and comparison.
/// 2. Two strings: `+` concatenates; every other operator is unknown.
/// 3. `==` / `!=` on anything else: identity comparison. Booleans and null
///    compare as their canonical selves; arrays and functions are equal
///    only when both operands alias the same object. Operands of
///    different types are simply unequal.
/// 4. Different type tags: a type mismatch error.
/// 5. Anything else: an unknown operator error.
///
/// # Parameters
/// - `operator`: The infix operator.
/// - `left`, `right`: The evaluated operands.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
pub(in crate::interpreter::evaluator) fn eval_infix(
    operator: InfixOperator,
    left: &Value,
    right: &Value,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ if operator == InfixOperator::Eq => Ok(Value::Bool(left == right)),
        _ if operator == InfixOperator::NotEq => Ok(Value::Bool(left != right)),
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name(),
            operator,
            right: right.type_name(),
        }),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: left.type_name(),
            operator,
            right: right.type_name(),
        }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow (host 64-bit semantics) and division
/// truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { left });
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        },
        InfixOperator::Lt => Ok(Value::Bool(left < right)),
        InfixOperator::Gt => Ok(Value::Bool(left > right)),
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
    }
}

/// String operations. Concatenation is the only one.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING", operator, right: "STRING" }),
    }
}

/// Evaluates an index access.
///
/// An integer index into an array yields the element, or null when the
/// index falls outside `0..len`. Indexing anything else reports the
/// indexed value's type.
pub(in crate::interpreter::evaluator) fn eval_index(
    left: &Value,
    index: &Value,
) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let element = usize::try_from(*position).ok().and_then(|i| elements.get(i));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { type_name: left.type_name() }),
    }
}
