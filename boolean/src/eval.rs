use tracing::trace;

use crate::ast::BoolExpr;

/// Evaluates `expr` by structural recursion.
///
/// Both operands of `AND` and `OR` are always evaluated, left first, even
/// when the left one already decides the result.
pub fn evaluate(expr: &BoolExpr) -> bool {
    use BoolExpr::*;
    let value = match expr {
        True => return true,
        False => return false,
        And(lhs, rhs) => evaluate(lhs) & evaluate(rhs),
        Or(lhs, rhs) => evaluate(lhs) | evaluate(rhs),
        Not(operand) => !evaluate(operand),
    };
    trace!(%expr, value, "evaluated");
    value
}
