use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, function, unary},
        value::{
            core::{FunctionValue, Value},
            environment::Env,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is what carries
/// an error from the sub-expression that produced it straight to the
/// driver, without any rule in between consuming it.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in order. A `tillbaka` value reaching this level is
/// unwrapped and ends the program, which is how a top-level `tillbaka`
/// (or one escaping an `om` block) produces the program's result.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment bindings accumulate in; the REPL passes the
///   same one for every line of a session.
///
/// # Returns
/// The last statement's value, or `None` when the program is empty or ends
/// in a binding.
///
/// # Errors
/// The first `RuntimeError` any statement produces.
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(value)) => return Ok(Some(*value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// # Returns
/// `Some(value)` for `tillbaka` and expression statements, `None` for a
/// `låt` binding (bindings produce no printable value).
///
/// # Errors
/// Propagates any error from the contained expression; a failed `låt`
/// leaves the environment untouched.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expression } => eval_expression(expression, env).map(Some),
    }
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a `tillbaka` value is passed up still wrapped.
/// The wrapper must survive every block boundary between the `tillbaka`
/// and the enclosing function call so that a return inside nested `om`
/// blocks escapes the whole function, not just the innermost block.
pub(in crate::interpreter::evaluator) fn eval_block(
    block: &BlockStatement,
    env: &Env,
) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        match eval_statement(statement, env)? {
            wrapped @ Some(Value::Return(_)) => return Ok(wrapped),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates an expression to a value.
///
/// This is the central dispatch of the tree walk; each variant either
/// constructs a value directly or delegates to the operator, call or
/// builtin rules.
///
/// # Errors
/// Any `RuntimeError` from the expression itself or its sub-expressions.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier { name } => eval_identifier(name, env),
        Expression::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral { value } => Ok(Value::Bool(*value)),
        Expression::StringLiteral { value } => Ok(Value::Str(value.clone())),
        Expression::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::from(elements))
        },
        Expression::HashLiteral { .. } => {
            Err(RuntimeError::UnknownExpression { rendering: expression.to_string() })
        },
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*operator, &right)
        },
        Expression::Infix { left, operator, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*operator, &left, &right)
        },
        Expression::If { condition, consequence, alternative } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue {
                parameters: parameters.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            })))
        },
        Expression::Call { function, arguments } => function::eval_call(function, arguments, env),
        Expression::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            binary::eval_index(&left, &index)
        },
    }
}

/// Evaluates a list of expressions left to right.
///
/// Used for array elements and call arguments. The first failing element
/// aborts the whole list; values produced before it are discarded.
pub(in crate::interpreter::evaluator) fn eval_expressions(
    expressions: &[Expression],
    env: &Env,
) -> EvalResult<Vec<Value>> {
    expressions
        .iter()
        .map(|expression| eval_expression(expression, env))
        .collect()
}

/// Resolves an identifier against the environment chain, falling back to
/// the builtin table.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates an `om` expression.
///
/// The condition is truthy unless it is `falskt` or null. A falsy
/// condition with no `annars` branch yields null.
fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Env,
) -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        Ok(eval_block(consequence, env)?.unwrap_or(Value::Null))
    } else if let Some(alternative) = alternative {
        Ok(eval_block(alternative, env)?.unwrap_or(Value::Null))
    } else {
        Ok(Value::Null)
    }
}
