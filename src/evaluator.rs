use crate::ast::{BinOp, Expr};

/// Error produced during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluate an expression tree to a numeric result.
///
/// Operands evaluate left to right. Division is true division, so
/// `7 / 2` evaluates to `3.5`.
///
/// # Errors
///
/// Returns `EvalError::DivisionByZero` when the right operand of a
/// division evaluates to zero.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Literal { value } => Ok(*value as f64),
        Expr::Binary { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            match op {
                BinOp::Add => Ok(left + right),
                BinOp::Sub => Ok(left - right),
                BinOp::Mul => Ok(left * right),
                BinOp::Div => {
                    if right == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(left / right)
                    }
                }
            }
        }
    }
}
