use chumsky::prelude::*;
use util::span::{self, SimpleParser, Spanned};

use crate::ast::BoolExpr;

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Token {
    #[display(fmt = "(")]
    LParen,
    #[display(fmt = ")")]
    RParen,
    #[display(fmt = "True")]
    True,
    #[display(fmt = "False")]
    False,
    #[display(fmt = "AND")]
    And,
    #[display(fmt = "OR")]
    Or,
    #[display(fmt = "NOT")]
    Not,
}

pub fn lexer() -> impl SimpleParser<char, Vec<Spanned<Token>>> {
    let token = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        text::keyword("True").to(Token::True),
        text::keyword("False").to(Token::False),
        text::keyword("AND").to(Token::And),
        text::keyword("OR").to(Token::Or),
        text::keyword("NOT").to(Token::Not),
    ));
    token
        .map_with_span(Spanned)
        .padded()
        .repeated()
        .then_ignore(end())
}

/// `NOT` binds tighter than `AND`, which binds tighter than `OR`. Binary
/// operators associate to the left.
fn expr_parser() -> impl SimpleParser<Token, BoolExpr> {
    use BoolExpr::*;
    recursive(|expr: Recursive<Token, BoolExpr, Simple<Token>>| {
        let atom = choice((
            just(Token::True).to(True),
            just(Token::False).to(False),
            expr.delimited_by(just(Token::LParen), just(Token::RParen)),
        ))
        .labelled("atom");

        let negation = just(Token::Not)
            .repeated()
            .then(atom)
            .foldr(|_, operand| Not(operand.into()))
            .labelled("negation");

        let conjunction = negation
            .clone()
            .then(just(Token::And).ignore_then(negation).repeated())
            .foldl(|lhs, rhs| And(lhs.into(), rhs.into()))
            .labelled("conjunction");

        conjunction
            .clone()
            .then(just(Token::Or).ignore_then(conjunction).repeated())
            .foldl(|lhs, rhs| Or(lhs.into(), rhs.into()))
    })
    .labelled("expression")
    .then_ignore(end())
}

pub fn parse(s: &str) -> Result<BoolExpr, Vec<Simple<String>>> {
    span::parse_tokens(s, lexer(), expr_parser())
}
