use thiserror::Error;
use tracing::trace;

use crate::ast::Expr;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EvalError {
    #[error("`{lhs} {op} {rhs}` does not fit in a 64-bit integer")]
    Overflow { op: char, lhs: i64, rhs: i64 },
}
pub type Result<T> = std::result::Result<T, EvalError>;

fn checked(lhs: i64, op: char, rhs: i64, f: fn(i64, i64) -> Option<i64>) -> Result<i64> {
    f(lhs, rhs).ok_or(EvalError::Overflow { op, lhs, rhs })
}

/// Evaluates `expr` bottom-up, left operand first.
///
/// Arithmetic is checked: the first sum or product that overflows `i64`
/// aborts the evaluation.
pub fn evaluate(expr: &Expr) -> Result<i64> {
    use Expr::*;
    let value = match expr {
        Const(value) => return Ok(*value),
        Sum(lhs, rhs) => checked(evaluate(lhs)?, '+', evaluate(rhs)?, i64::checked_add)?,
        Mul(lhs, rhs) => checked(evaluate(lhs)?, '*', evaluate(rhs)?, i64::checked_mul)?,
    };
    trace!(%expr, value, "evaluated");
    Ok(value)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        ast::{arb, Expr::*},
        parser::parse,
    };

    #[test]
    fn test() {
        assert_eq!(
            evaluate(&Mul(Sum(Const(3).into(), Const(5).into()).into(), Const(2).into())),
            Ok(16)
        );
        assert_eq!(evaluate(&Const(-4)), Ok(-4));
        assert_eq!(
            evaluate(&Sum(Const(10).into(), Mul(Const(-2).into(), Const(3).into()).into())),
            Ok(4)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            evaluate(&Sum(Const(i64::MAX).into(), Const(1).into())),
            Err(EvalError::Overflow {
                op: '+',
                lhs: i64::MAX,
                rhs: 1
            })
        );
        assert_eq!(
            evaluate(&Mul(Const(i64::MIN).into(), Const(-1).into())),
            Err(EvalError::Overflow {
                op: '*',
                lhs: i64::MIN,
                rhs: -1
            })
        );
        let big = Mul(Const(1 << 32).into(), Const(1 << 32).into());
        assert!(matches!(
            evaluate(&Sum(Const(0).into(), big.into())),
            Err(EvalError::Overflow { op: '*', .. })
        ));
        assert_eq!(
            evaluate(&Sum(Const(i64::MAX).into(), Const(i64::MIN).into())),
            Ok(-1)
        );
    }

    #[test]
    fn test_overflow_message() {
        let e = evaluate(&Sum(Const(i64::MAX).into(), Const(1).into())).unwrap_err();
        assert_eq!(
            e.to_string(),
            "`9223372036854775807 + 1` does not fit in a 64-bit integer"
        );
    }

    fn reference(expr: &Expr) -> Option<i128> {
        match expr {
            Const(value) => Some(i128::from(*value)),
            Sum(lhs, rhs) => reference(lhs)?.checked_add(reference(rhs)?),
            Mul(lhs, rhs) => reference(lhs)?.checked_mul(reference(rhs)?),
        }
    }

    proptest! {
        #[test]
        fn matches_rendered_arithmetic(expr in arb::expr(0..10i64)) {
            let value = evaluate(&expr).unwrap();
            prop_assert_eq!(Some(i128::from(value)), reference(&expr));
            prop_assert_eq!(evaluate(&parse(&expr.to_string()).unwrap()), Ok(value));
        }

        #[test]
        fn sum_and_product_commute(l in arb::expr(0..10i64), r in arb::expr(0..10i64)) {
            prop_assert_eq!(
                evaluate(&Sum(l.clone().into(), r.clone().into())),
                evaluate(&Sum(r.clone().into(), l.clone().into()))
            );
            prop_assert_eq!(
                evaluate(&Mul(l.clone().into(), r.clone().into())),
                evaluate(&Mul(r.into(), l.into()))
            );
        }

        #[test]
        fn checked_results_are_exact(expr in arb::expr(any::<i64>())) {
            if let Ok(value) = evaluate(&expr) {
                prop_assert_eq!(Some(i128::from(value)), reference(&expr));
            }
        }
    }
}
