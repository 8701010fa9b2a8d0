use std::rc::Rc;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{eval_block, eval_expression, eval_expressions, EvalResult},
        value::{core::Value, environment::{Env, Environment}},
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; a
/// failing argument aborts the call and discards the values produced so
/// far. The evaluated callee decides whether this is a closure application
/// or a builtin invocation.
///
/// # Errors
/// - `NotAFunction` when the callee is not callable.
/// - `WrongArgumentCount` when the argument count does not match.
/// - Any error from evaluating the callee, the arguments or the body.
pub(in crate::interpreter::evaluator) fn eval_call(
    function: &Expression,
    arguments: &[Expression],
    env: &Env,
) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    let arguments = eval_expressions(arguments, env)?;

    apply(&callee, arguments)
}

/// Applies a callable value to already-evaluated arguments.
///
/// A user-defined function runs its body in a fresh environment enclosed
/// by the one it captured at its definition site, with parameters bound
/// positionally. A `tillbaka` value coming out of the body is unwrapped
/// here: the function boundary is where the wrapper stops.
fn apply(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount {
                    got: arguments.len(),
                    want: function.parameters.len(),
                });
            }

            let local = Environment::new_enclosed(Rc::clone(&function.env));
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                local.borrow_mut().set(parameter.clone(), argument);
            }

            match eval_block(&function.body, &local)? {
                Some(Value::Return(value)) => Ok(*value),
                Some(value) => Ok(value),
                None => Ok(Value::Null),
            }
        },
        Value::Builtin(builtin) => {
            if arguments.len() != builtin.arity {
                return Err(RuntimeError::WrongArgumentCount {
                    got: arguments.len(),
                    want: builtin.arity,
                });
            }
            (builtin.func)(&arguments)
        },
        _ => Err(RuntimeError::NotAFunction { type_name: callee.type_name() }),
    }
}
