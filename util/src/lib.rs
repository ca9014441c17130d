pub mod cli;
pub mod repl;
pub mod report;
pub mod span;
