/// A boolean expression tree. Composite nodes own their operands.
#[derive(PartialEq, Eq, Clone, Debug, derive_more::Display)]
pub enum BoolExpr {
    #[display(fmt = "True")]
    True,
    #[display(fmt = "False")]
    False,
    #[display(fmt = "({} AND {})", "_0", "_1")]
    And(Box<BoolExpr>, Box<BoolExpr>),
    #[display(fmt = "({} OR {})", "_0", "_1")]
    Or(Box<BoolExpr>, Box<BoolExpr>),
    /// Rendered without parentheses of its own.
    #[display(fmt = "NOT {}", "_0")]
    Not(Box<BoolExpr>),
}

impl From<bool> for BoolExpr {
    fn from(b: bool) -> Self {
        if b {
            BoolExpr::True
        } else {
            BoolExpr::False
        }
    }
}

pub fn render(expr: &BoolExpr) -> String {
    expr.to_string()
}
