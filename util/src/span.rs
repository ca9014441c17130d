use std::{fmt::Display, hash::Hash};

use chumsky::prelude::*;

pub type Span = std::ops::Range<usize>;
#[derive(derive_more::Deref, Clone, Debug)]
pub struct Spanned<T>(#[deref] pub T, pub Span);
impl<T> Spanned<T> {
    pub fn forget(self) -> T {
        self.0
    }
    pub fn value(&self) -> &T {
        &self.0
    }
    pub fn span(&self) -> Span {
        self.1.clone()
    }
}
impl<T> From<Spanned<T>> for (T, Span) {
    fn from(Spanned(value, span): Spanned<T>) -> Self {
        (value, span)
    }
}

pub trait SimpleParser<I: Clone + Hash, O>: Parser<I, O, Error = Simple<I>> {}
impl<I: Clone + Hash, O, T> SimpleParser<I, O> for T where T: Parser<I, O, Error = Simple<I>> {}

/// Replaces the tokens inside parse errors by their printed form, so that
/// lexer and parser errors can be reported the same way.
pub fn stringify<T: Display + Hash + Eq>(es: Vec<Simple<T>>) -> Vec<Simple<String>> {
    es.into_iter().map(|e| e.map(|t| t.to_string())).collect()
}

/// Runs `lexer` over `s`, then `parser` over the resulting token stream.
pub fn parse_tokens<T, O>(
    s: &str,
    lexer: impl SimpleParser<char, Vec<Spanned<T>>>,
    parser: impl SimpleParser<T, O>,
) -> Result<O, Vec<Simple<String>>>
where
    T: Clone + Hash + Eq + Display,
{
    let len = s.chars().count();
    let eoi = len..len + 1;
    let tokens = lexer.parse(s).map_err(stringify)?;
    parser
        .parse(chumsky::Stream::from_iter(
            eoi,
            tokens.into_iter().map(<(T, Span)>::from),
        ))
        .map_err(stringify)
}
