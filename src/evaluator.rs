//! The tree-walking evaluator for the Pig programming language.
//!
//! Evaluation dispatches recursively on the AST node variant and returns a
//! [`ValueRef`]. It never panics on well-formed input; every operator and
//! statement that recursively evaluates an operand checks
//! [`Value::is_error`] first and short-circuits, so a runtime error
//! surfaces exactly once, at the point it was produced.
//!
//! # Return-value unwrapping asymmetry
//!
//! [`eval_program`] unwraps a [`Value::ReturnValue`] it encounters;
//! [`eval_block_statement`] and function application preserve one
//! unchanged. This is what lets `return` inside a nested `if`/block escape
//! every enclosing block at once and stop exactly at the nearest
//! function-call or program boundary.

use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::object::{self, singletons, EnvRef, FunctionValue, Value, ValueRef};

/// Evaluates a top-level program against `env`, returning its value.
///
/// `Program` and every other AST node share this entry point by recursing
/// through [`eval_statement`] / [`eval_expression`].
pub fn eval_program(program: &Program, env: &EnvRef) -> ValueRef {
    let mut result = singletons::null();

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result.as_ref() {
            Value::ReturnValue(inner) => return Rc::clone(inner),
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_block_statement(block: &BlockStatement, env: &EnvRef) -> ValueRef {
    let mut result = singletons::null();

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result.as_ref(), Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &EnvRef) -> ValueRef {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.return_value, env);
            if value.is_error() {
                return value;
            }
            Rc::new(Value::ReturnValue(value))
        }
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.value.clone(), value);
            singletons::null()
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expression: &Expression, env: &EnvRef) -> ValueRef {
    match expression {
        Expression::IntegerLiteral(lit) => Rc::new(Value::Integer(lit.value)),
        Expression::Boolean(b) => singletons::native_bool(b.value),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, &right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, &left, &right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Function(lit) => Rc::new(Value::Function(FunctionValue {
            parameters: lit.parameters.clone(),
            body: lit.body.clone(),
            env: Rc::clone(env),
        })),
        Expression::Call(expr) => eval_call_expression(expr, env),
    }
}

fn eval_identifier(name: &str, env: &EnvRef) -> ValueRef {
    match env.borrow().get(name) {
        Some(value) => value,
        None => error(format!("identifier not found: {name}")),
    }
}

fn eval_prefix_expression(operator: &str, right: &Value) -> ValueRef {
    match operator {
        "!" => eval_bang_operator(right),
        "-" => eval_minus_prefix_operator(right),
        _ => error(format!("unknown operator: {operator}{}", right.type_tag())),
    }
}

fn eval_bang_operator(right: &Value) -> ValueRef {
    match right {
        Value::Boolean(true) => singletons::falsehood(),
        Value::Boolean(false) => singletons::truth(),
        Value::Null => singletons::truth(),
        _ => singletons::falsehood(),
    }
}

fn eval_minus_prefix_operator(right: &Value) -> ValueRef {
    match right {
        Value::Integer(v) => Rc::new(Value::Integer(v.wrapping_neg())),
        _ => error(format!("unknown operator: -{}", right.type_tag())),
    }
}

fn eval_infix_expression(operator: &str, left: &ValueRef, right: &ValueRef) -> ValueRef {
    match (left.as_ref(), right.as_ref()) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        (_, _) if operator == "==" => singletons::native_bool(Rc::ptr_eq(left, right)),
        (_, _) if operator == "!=" => singletons::native_bool(!Rc::ptr_eq(left, right)),
        (_, _) if left.type_tag() != right.type_tag() => error(format!(
            "type mismatch: {} {} {}",
            left.type_tag(),
            operator,
            right.type_tag()
        )),
        _ => error(format!(
            "unknown operator: {} {} {}",
            left.type_tag(),
            operator,
            right.type_tag()
        )),
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> ValueRef {
    match operator {
        "+" => Rc::new(Value::Integer(left.wrapping_add(right))),
        "-" => Rc::new(Value::Integer(left.wrapping_sub(right))),
        "*" => Rc::new(Value::Integer(left.wrapping_mul(right))),
        "/" => Rc::new(Value::Integer(left / right)),
        "<" => singletons::native_bool(left < right),
        "<=" => singletons::native_bool(left <= right),
        ">" => singletons::native_bool(left > right),
        ">=" => singletons::native_bool(left >= right),
        "==" => singletons::native_bool(left == right),
        "!=" => singletons::native_bool(left != right),
        _ => error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_if_expression(expr: &crate::ast::IfExpression, env: &EnvRef) -> ValueRef {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        singletons::null()
    }
}

/// `null` and `false` are falsy; everything else, including `0`, is truthy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}

fn eval_call_expression(expr: &crate::ast::CallExpression, env: &EnvRef) -> ValueRef {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let mut arguments = Vec::with_capacity(expr.arguments.len());
    for arg in &expr.arguments {
        let value = eval_expression(arg, env);
        if value.is_error() {
            return value;
        }
        arguments.push(value);
    }

    apply_function(&function, arguments)
}

fn apply_function(function: &Value, arguments: Vec<ValueRef>) -> ValueRef {
    let Value::Function(f) = function else {
        return error(format!("not a function: {}", function.type_tag()));
    };

    let call_env = object::Environment::new_enclosed(Rc::clone(&f.env));
    for (param, arg) in f.parameters.iter().zip(arguments) {
        call_env.borrow_mut().set(param.value.clone(), arg);
    }

    let evaluated = eval_block_statement(&f.body, &call_env);
    unwrap_return_value(evaluated)
}

/// Calls are, like `Program`, an unwinding boundary: a `return` inside the
/// function body must not keep propagating once the call itself returns.
fn unwrap_return_value(value: ValueRef) -> ValueRef {
    match value.as_ref() {
        Value::ReturnValue(inner) => Rc::clone(inner),
        _ => value,
    }
}

fn error(message: String) -> ValueRef {
    Rc::new(Value::Error(message))
}
