use chumsky::prelude::*;
use util::span::{self, SimpleParser, Spanned};

use crate::ast::Expr;

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Token {
    #[display(fmt = "(")]
    LParen,
    #[display(fmt = ")")]
    RParen,
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "{}", "_0")]
    Int(i64),
}

pub fn lexer() -> impl SimpleParser<char, Vec<Spanned<Token>>> {
    let int = just('-')
        .or_not()
        .then(text::int(10))
        .try_map(|(minus, digits): (Option<char>, String), span| {
            let literal = match minus {
                Some(_) => format!("-{digits}"),
                None => digits,
            };
            literal.parse().map(Token::Int).map_err(|e| {
                Simple::custom(span, format!("Invalid integer literal `{literal}`: {e}"))
            })
        })
        .labelled("integer");
    let token = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('+').to(Token::Plus),
        just('*').to(Token::Star),
        int,
    ));
    token
        .map_with_span(Spanned)
        .padded()
        .repeated()
        .then_ignore(end())
}

/// `*` binds tighter than `+`; both associate to the left.
fn expr_parser() -> impl SimpleParser<Token, Expr> {
    use Expr::*;
    recursive(|expr: Recursive<Token, Expr, Simple<Token>>| {
        let atom = choice((
            select! { Token::Int(value) => Const(value) },
            expr.delimited_by(just(Token::LParen), just(Token::RParen)),
        ))
        .labelled("atom");

        let product = atom
            .clone()
            .then(just(Token::Star).ignore_then(atom).repeated())
            .foldl(|lhs, rhs| Mul(lhs.into(), rhs.into()))
            .labelled("product");

        product
            .clone()
            .then(just(Token::Plus).ignore_then(product).repeated())
            .foldl(|lhs, rhs| Sum(lhs.into(), rhs.into()))
    })
    .labelled("expression")
    .then_ignore(end())
}

pub fn parse(s: &str) -> Result<Expr, Vec<Simple<String>>> {
    span::parse_tokens(s, lexer(), expr_parser())
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::ast::{arb, render, Expr::*};

    fn lex(s: &str) -> Result<Vec<Token>, Vec<Simple<char>>> {
        Ok(lexer()
            .parse(s)?
            .iter()
            .map(Spanned::value)
            .copied()
            .collect::<Vec<_>>())
    }

    #[test]
    fn test_lexer() {
        assert_eq!(
            lex("((3 + 5) * 2)").unwrap(),
            vec![
                Token::LParen,
                Token::LParen,
                Token::Int(3),
                Token::Plus,
                Token::Int(5),
                Token::RParen,
                Token::Star,
                Token::Int(2),
                Token::RParen
            ]
        );
        assert_eq!(
            lex("1+-2").unwrap(),
            vec![Token::Int(1), Token::Plus, Token::Int(-2)]
        );
        assert_eq!(
            lex("-9223372036854775808").unwrap(),
            vec![Token::Int(i64::MIN)]
        );
        assert!(lex("9223372036854775808").is_err());
        assert!(lex("1 - 2").is_err());
        assert!(lex("x").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("42").unwrap(), Const(42));
        assert_eq!(
            parse("((3 + 5) * 2)").unwrap(),
            Mul(Sum(Const(3).into(), Const(5).into()).into(), Const(2).into())
        );
        assert_eq!(parse(" ( ( 7 ) ) ").unwrap(), Const(7));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("1 + 2 * 3").unwrap(),
            Sum(Const(1).into(), Mul(Const(2).into(), Const(3).into()).into())
        );
        assert_eq!(
            parse("1 + 2 + 3").unwrap(),
            Sum(Sum(Const(1).into(), Const(2).into()).into(), Const(3).into())
        );
        assert_eq!(
            parse("2 * 3 * 4").unwrap(),
            Mul(Mul(Const(2).into(), Const(3).into()).into(), Const(4).into())
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse("").is_err());
        assert!(parse("(1 + 2").is_err());
        assert!(parse("1 2").is_err());
        assert!(parse("+ 1").is_err());
        assert!(parse("1 *").is_err());
        assert!(parse("99999999999999999999").is_err());
    }

    proptest! {
        #[test]
        fn parses_own_rendering(expr in arb::expr(any::<i64>())) {
            prop_assert_eq!(parse(&render(&expr)).unwrap(), expr);
        }
    }
}
