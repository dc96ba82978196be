//! Parser for the fully-parenthesized formula notation.
//!
//! # Grammar
//!
//! ```text
//! formula := var | 'T' | 'F' | '~' formula | '(' formula binop formula ')'
//! binop   := '&' | '|' | '+' | '->' | '<->' | '-&' | '-|'
//! var     := [a-z][0-9]*
//! ```
//!
//! Whitespace between tokens is ignored. Every binary application carries its
//! own pair of parentheses, so there is no precedence to resolve.
//!
//! # Examples
//!
//! ```
//! use basis_rs::formula::Formula;
//!
//! let f = Formula::parse("((p->q)<->~r12)").unwrap();
//! assert_eq!(f.to_string(), "((p->q)<->~r12)");
//! assert!(Formula::parse("(p&q").is_err());
//! ```

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::operator::BinaryOp;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq)]
enum Token<'a> {
    LParen,
    RParen,
    Not,
    Binary(BinaryOp),
    Const(bool),
    Var(&'a str),
}

#[derive(Debug)]
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Returns the next token together with its start offset, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<(usize, Token<'a>)>> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = &self.input[start..];
        let Some(c) = rest.chars().next() else {
            return Ok(None);
        };

        const MULTI: [(&str, BinaryOp); 4] = [
            ("<->", BinaryOp::Iff),
            ("->", BinaryOp::Implies),
            ("-&", BinaryOp::Nand),
            ("-|", BinaryOp::Nor),
        ];
        for (text, op) in MULTI {
            if rest.starts_with(text) {
                self.pos += text.len();
                return Ok(Some((start, Token::Binary(op))));
            }
        }

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '~' => Token::Not,
            '&' => Token::Binary(BinaryOp::And),
            '|' => Token::Binary(BinaryOp::Or),
            '+' => Token::Binary(BinaryOp::Xor),
            'T' => Token::Const(true),
            'F' => Token::Const(false),
            'a'..='z' => {
                let len = 1 + rest[1..].bytes().take_while(u8::is_ascii_digit).count();
                self.pos += len;
                return Ok(Some((start, Token::Var(&rest[..len]))));
            }
            _ => return Err(Error::syntax(start, format!("unknown symbol '{}'", c))),
        };
        self.pos += c.len_utf8();
        Ok(Some((start, token)))
    }
}

#[derive(Debug)]
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn expect_token(&mut self) -> Result<(usize, Token<'a>)> {
        let end = self.lexer.input.len();
        self.lexer
            .next_token()?
            .ok_or_else(|| Error::syntax(end, "unexpected end of input"))
    }

    fn parse_formula(&mut self) -> Result<Formula> {
        let (pos, token) = self.expect_token()?;
        match token {
            Token::Var(name) => Ok(Formula::from_var(Var::new(name))),
            Token::Const(value) => Ok(Formula::constant(value)),
            Token::Not => Ok(Formula::not(self.parse_formula()?)),
            Token::LParen => {
                let lhs = self.parse_formula()?;
                let (pos, token) = self.expect_token()?;
                let Token::Binary(op) = token else {
                    return Err(Error::syntax(pos, format!("expected binary operator, found {:?}", token)));
                };
                let rhs = self.parse_formula()?;
                match self.expect_token()? {
                    (_, Token::RParen) => Ok(Formula::binary(op, lhs, rhs)),
                    (pos, token) => Err(Error::syntax(pos, format!("expected ')', found {:?}", token))),
                }
            }
            Token::RParen | Token::Binary(_) => Err(Error::syntax(pos, format!("missing operand before {:?}", token))),
        }
    }
}

/// Parses a whole string into a formula.
///
/// Fails with [`Error::Syntax`] on unbalanced parentheses, unknown symbols,
/// missing operands or trailing input.
pub fn parse(text: &str) -> Result<Formula> {
    let mut parser = Parser { lexer: Lexer::new(text) };
    let formula = parser.parse_formula()?;
    if let Some((pos, token)) = parser.lexer.next_token()? {
        return Err(Error::syntax(pos, format!("unexpected trailing {:?}", token)));
    }
    log::trace!("parsed '{}' into {}", text, formula);
    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::operator::Symbol;

    fn syntax_position(text: &str) -> usize {
        match parse(text) {
            Err(Error::Syntax { position, .. }) => position,
            other => panic!("expected syntax error for '{}', got {:?}", text, other),
        }
    }

    #[test]
    fn test_parse_leaves() {
        assert_eq!(parse("p").unwrap(), Formula::var("p"));
        assert_eq!(parse("x42").unwrap(), Formula::var("x42"));
        assert_eq!(parse("T").unwrap(), Formula::tt());
        assert_eq!(parse("F").unwrap(), Formula::ff());
    }

    #[test]
    fn test_parse_every_binary_operator() {
        for op in BinaryOp::ALL {
            let text = format!("(p{}q)", op);
            let f = parse(&text).unwrap();
            assert_eq!(f.root(), Some(Symbol::Binary(op)));
            assert_eq!(f.to_string(), text);
        }
    }

    #[test]
    fn test_parse_nested() {
        let f = parse("~((p1&~T)<->(q-|r))").unwrap();
        let expected = Formula::not(Formula::iff(
            Formula::and(Formula::var("p1"), Formula::not(Formula::tt())),
            Formula::nor(Formula::var("q"), Formula::var("r")),
        ));
        assert_eq!(f, expected);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse(" ( p -> ~ q ) ").unwrap().to_string(), "(p->~q)");
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["~~p", "((p+q)->F)", "((p<->q)-&(r-|T))"] {
            let f = parse(text).unwrap();
            assert_eq!(parse(&f.to_string()).unwrap(), f);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(syntax_position(""), 0);
        assert_eq!(syntax_position("(p&q"), 4);
        assert_eq!(syntax_position("(p&q))"), 5);
        assert_eq!(syntax_position("(p q)"), 3);
        assert_eq!(syntax_position("(&q)"), 1);
        assert_eq!(syntax_position("(p=q)"), 2);
        assert_eq!(syntax_position("~"), 1);
        assert_eq!(syntax_position("P"), 0);
        assert_eq!(syntax_position("p&q"), 1);
        assert_eq!(syntax_position("pq"), 1);
        assert_eq!(syntax_position("(p-q)"), 2);
    }
}
