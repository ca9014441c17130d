use std::path::Path;

use rustyline::{error::ReadlineError, Editor};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error(transparent)]
    Readline(ReadlineError),
    #[error("Eval failed: {0:?}")]
    EvalError(E),
}

pub trait Repl {
    type Error: std::fmt::Debug;
    fn history(&self) -> Option<&Path> {
        None
    }
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error>;
}

/// Input being accumulated across lines that end in `\`.
#[derive(Default, Debug)]
struct Pending(Option<String>);

impl Pending {
    /// Returns the whole input once `line` does not continue onto the next one.
    fn push(&mut self, mut line: String) -> Option<String> {
        if line.ends_with('\\') {
            line.pop();
            line.push('\n');
            if let Some(input) = self.0.as_mut() {
                input.push_str(line.as_str());
            } else {
                self.0 = Some(line);
            }
            None
        } else if let Some(mut input) = self.0.take() {
            input.push_str(line.as_str());
            Some(input)
        } else {
            Some(line)
        }
    }
}

pub fn start_repl<R: Repl>(mut repl: R) -> Result<(), Error<R::Error>> {
    let mut editor = Editor::<()>::new();
    if let Some(history) = repl.history() {
        if let Err(e) = editor.load_history(history) {
            debug!(path = %history.display(), "history not loaded: {e}");
        }
    }
    let mut pending = Pending::default();
    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let Some(input) = pending.push(line) else {
                    continue;
                };
                editor.add_history_entry(input.as_str());
                repl.evaluate(input).map_err(Error::EvalError)?;
                if let Some(history) = repl.history() {
                    editor.save_history(history).map_err(Error::Readline)?;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break Ok(());
            }
            Err(e) => break Err(Error::Readline(e)),
        }
    }
}
