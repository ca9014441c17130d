#[derive(PartialEq, Eq, Clone, Debug, derive_more::Display)]
pub enum Expr {
    #[display(fmt = "{}", "_0")]
    Const(i64),
    #[display(fmt = "({} + {})", "_0", "_1")]
    Sum(Box<Expr>, Box<Expr>),
    #[display(fmt = "({} * {})", "_0", "_1")]
    Mul(Box<Expr>, Box<Expr>),
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Const(value)
    }
}

pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

#[cfg(test)]
pub(crate) mod arb {
    use proptest::prelude::*;

    use super::Expr::{self, *};

    /// Trees of at most eight leaves drawn from `leaf`.
    pub fn expr(leaf: impl Strategy<Value = i64> + 'static) -> impl Strategy<Value = Expr> {
        leaf.prop_map(Const).prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Sum(l.into(), r.into())),
                (inner.clone(), inner).prop_map(|(l, r)| Mul(l.into(), r.into())),
            ]
        })
    }
}
