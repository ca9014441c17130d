//! Boolean expressions over the constants `True` and `False` combined with
//! `AND`, `OR` and `NOT`.
//!
//! ```
//! use boolean::{evaluate, render, BoolExpr::*};
//!
//! let expr = And(Or(True.into(), False.into()).into(), Not(False.into()).into());
//! assert_eq!(render(&expr), "((True OR False) AND NOT False)");
//! assert!(evaluate(&expr));
//! ```

pub mod ast;
pub mod eval;
pub mod parser;

pub use ast::{render, BoolExpr};
pub use eval::evaluate;
