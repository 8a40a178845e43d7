//! Binary operator evaluation.
//!
//! Operands arrive already evaluated, so `&&` and `||` here are the eager
//! forms; the interpreter short-circuits before calling in.

use gaz_ir::{BinaryOp, Span};

use crate::{EvalError, EvalResult, Value};

/// Checked integer arithmetic: `None` from the checked op becomes
/// `IntegerOverflow` tagged with the operation name.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp, span: Span) -> EvalResult {
    result.map(Value::Int).ok_or(EvalError::IntegerOverflow {
        op: op.description(),
        span,
    })
}

/// Both operands as integers, or a type error naming the operation.
fn int_operands(left: &Value, right: &Value, op: BinaryOp, span: Span) -> EvalResult<(i64, i64)> {
    match (left.as_int(), right.as_int()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EvalError::TypeError {
            op: op.description(),
            span,
        }),
    }
}

/// Evaluate `left op right`. `span` locates the whole expression for errors.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp, span: Span) -> EvalResult {
    match op {
        BinaryOp::Add if left.is_str() || right.is_str() => {
            let mut text = match left {
                Value::Str(s) => s,
                other => other.to_display_string(),
            };
            text.push_str(&right.to_display_string());
            Ok(Value::Str(text))
        }
        BinaryOp::Add => {
            let (a, b) = int_operands(&left, &right, op, span)?;
            checked_arith(a.checked_add(b), op, span)
        }
        BinaryOp::Sub => {
            let (a, b) = int_operands(&left, &right, op, span)?;
            checked_arith(a.checked_sub(b), op, span)
        }
        BinaryOp::Mul => {
            let (a, b) = int_operands(&left, &right, op, span)?;
            checked_arith(a.checked_mul(b), op, span)
        }
        BinaryOp::Div => {
            let (a, b) = int_operands(&left, &right, op, span)?;
            if b == 0 {
                return Err(EvalError::DivisionByZero { span });
            }
            // Truncates toward zero; only i64::MIN / -1 overflows.
            checked_arith(a.checked_div(b), op, span)
        }
        BinaryOp::Eq => Ok(Value::Int(i64::from(left.loose_eq(&right)))),
        BinaryOp::NotEq => Ok(Value::Int(i64::from(!left.loose_eq(&right)))),
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}
