//! Integer arithmetic expressions built from constants, `+` and `*`.
//!
//! ```
//! use arith::{evaluate, render, Expr::*};
//!
//! let expr = Mul(Sum(Const(3).into(), Const(5).into()).into(), Const(2).into());
//! assert_eq!(render(&expr), "((3 + 5) * 2)");
//! assert_eq!(evaluate(&expr), Ok(16));
//! ```

pub mod ast;
pub mod eval;
pub mod parser;

pub use ast::{render, Expr};
pub use eval::{evaluate, EvalError};
