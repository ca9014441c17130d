use std::path::PathBuf;

use clap::{ArgAction, Args};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Options shared by the expression binaries.
#[derive(Args, Clone, Debug, Default)]
pub struct Options {
    /// Evaluate this expression and exit instead of starting the REPL.
    #[arg(short, long, value_name = "EXPR", conflicts_with = "demo")]
    pub eval: Option<String>,

    /// Evaluate the built-in demonstration expression and exit.
    #[arg(long)]
    pub demo: bool,

    /// Load REPL history from this file and save it back after each command.
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(PartialEq, Eq, Debug)]
pub enum Mode<'a> {
    Eval(&'a str),
    Demo,
    Repl,
}

impl Options {
    pub fn mode(&self) -> Mode<'_> {
        if let Some(source) = &self.eval {
            Mode::Eval(source)
        } else if self.demo {
            Mode::Demo
        } else {
            Mode::Repl
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` directives apply on top of `level`.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
