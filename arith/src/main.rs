use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use arith::{evaluate, parser, EvalError, Expr};
use chumsky::{error::Simple, Parser as _};
use clap::Parser;
use tracing::debug;
use util::{
    cli::{self, Mode, Options},
    repl, report,
    span::{self, Spanned},
};

/// Evaluates integer expressions built from constants, `+` and `*`.
#[derive(Parser, Debug)]
#[command(name = "arith", version, about)]
struct Cli {
    #[command(flatten)]
    options: Options,
}

fn demo() -> Expr {
    use Expr::*;
    Mul(Sum(Const(3).into(), Const(5).into()).into(), Const(2).into())
}

fn show(expr: &Expr) -> Result<(), EvalError> {
    println!("Evaluating expression: {expr}");
    let value = evaluate(expr)?;
    println!("Result: {value}");
    Ok(())
}

fn exec(input: &str) -> Result<(), (&str, Vec<Simple<String>>)> {
    if let Some(input) = input.strip_prefix("tokenize") {
        let tokens = parser::lexer()
            .parse(input)
            .map_err(|es| (input, span::stringify(es)))?
            .iter()
            .map(Spanned::value)
            .copied()
            .collect::<Vec<_>>();
        println!("{tokens:?}")
    } else if let Some(input) = input.strip_prefix("parse") {
        let expr = parser::parse(input).map_err(|es| (input, es))?;
        println!("{expr:?}")
    } else if let Some(input) = input.strip_prefix("render") {
        let expr = parser::parse(input).map_err(|es| (input, es))?;
        println!("{expr}")
    } else if let Some(input) = input.strip_prefix("eval") {
        let expr = parser::parse(input).map_err(|es| (input, es))?;
        if let Err(e) = show(&expr) {
            eprintln!("Error: {e}")
        }
    } else if !input.trim().is_empty() {
        eprintln!("Unknown command; expected one of tokenize, parse, render, eval")
    }
    Ok(())
}

struct Session {
    history: Option<PathBuf>,
}

impl repl::Repl for Session {
    type Error = anyhow::Error;

    fn history(&self) -> Option<&Path> {
        self.history.as_deref()
    }

    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        debug!(%input, "evaluating command");
        if let Err((input, es)) = exec(&input) {
            report::eprint_reports(input, es)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let Cli { options } = Cli::parse();
    cli::init_logging(options.log_level());
    match options.mode() {
        Mode::Demo => show(&demo())?,
        Mode::Eval(source) => match parser::parse(source) {
            Ok(expr) => show(&expr)?,
            Err(es) => {
                report::eprint_reports(source, es)?;
                bail!("Could not parse `{source}`");
            }
        },
        Mode::Repl => repl::start_repl(Session {
            history: options.history.clone(),
        })?,
    }
    Ok(())
}
