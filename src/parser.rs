//! Recursive-descent parser for RQL.
//!
//! # Grammar
//!
//! ```text
//! query       ::= comparison | combinator | sort | limit | membership
//! comparison  ::= ("eq"|"ne"|"lt"|"gt"|"lte"|"gte"|"like") "(" property "," value ")"
//! combinator  ::= ("and"|"or") "(" query ("," query)* ")"
//! sort        ::= "sort" "(" ["+"|"-"] property ("," ["+"|"-"] property)* [")"]
//! limit       ::= "limit" "(" integer ["," integer] [")"]
//! membership  ::= ("in"|"out") "(" property "," "[" [value ("," value)*] "]" ")"
//! value       ::= string | integer | float | ("+"|"-") (integer | float)
//! ```
//!
//! `sort` and `limit` also accept end of input in place of the closing `)`.
//!
//! # Example
//!
//! ```rust
//! use rql_parser::{parse, ComparisonOp, Literal, Node};
//!
//! let node = parse("eq(name,Foo)").unwrap();
//! assert_eq!(
//!     node,
//!     Node::Comparison {
//!         operator: ComparisonOp::Eq,
//!         property: "name".to_string(),
//!         value: Literal::Text("Foo".to_string()),
//!     }
//! );
//! ```

use crate::{
    ast::{CombinatorOp, ComparisonOp, Node, SetOp, SortDirection, SortField, Token, TokenKind},
    dispatch::{Rule, rule_for},
    error::{ErrorKind, SyntaxError},
    lexer::Lexer,
    value::Literal,
};

/// Parse a complete query string into its root node.
pub fn parse(input: &str) -> Result<Node, SyntaxError> {
    Parser::new(Lexer::new(input)).parse()
}

/// Single-lookahead parser. Each instance parses one input and is consumed.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    pub fn parse_str(input: &'a str) -> Result<Node, SyntaxError> {
        Parser::new(Lexer::new(input)).parse()
    }

    /// Parse one root operation and require the input to end after it.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        let result = self.parse_query().and_then(|node| match &self.current_token {
            Some(token) => Err(SyntaxError::new(
                ErrorKind::TrailingInput,
                format!("unexpected {token} after end of query"),
                token.position,
            )),
            None => Ok(node),
        });

        match &result {
            Ok(node) => tracing::debug!(operation = node.operation(), depth = node.depth(), "parsed query"),
            Err(err) => tracing::debug!(kind = ?err.kind, position = err.position, "query rejected: {}", err.message),
        }
        result
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.as_ref().is_some_and(|t| t.is(kind))
    }

    /// Take the current token and move to the next one.
    fn bump(&mut self) -> Option<Token> {
        let token = self.current_token.take();
        self.advance();
        token
    }

    fn position(&self) -> usize {
        self.current_token
            .as_ref()
            .map_or(self.lexer.input_len(), |t| t.position)
    }

    fn error(&self, kind: ErrorKind, expected: &str) -> SyntaxError {
        let message = match &self.current_token {
            Some(token) => format!("expected {expected}, found {token}"),
            None => format!("expected {expected}, found end of input"),
        };
        SyntaxError::new(kind, message, self.position())
    }

    fn expect(&mut self, kind: TokenKind, error: ErrorKind) -> Result<Token, SyntaxError> {
        if !self.check(kind) {
            return Err(self.error(error, kind.describe()));
        }
        self.bump().ok_or_else(|| self.error(error, kind.describe()))
    }

    /// Parse one operation, dispatching on its leading keyword.
    pub fn parse_query(&mut self) -> Result<Node, SyntaxError> {
        let Some(token) = &self.current_token else {
            return Err(SyntaxError::new(
                ErrorKind::UnexpectedEndOfInput,
                "unexpected end of input",
                self.lexer.input_len(),
            ));
        };

        let Some(rule) = rule_for(token.kind) else {
            return Err(SyntaxError::new(
                ErrorKind::UnknownOperation,
                format!("unknown operation {token}"),
                token.position,
            ));
        };

        tracing::debug!(?rule, position = token.position, "dispatch");
        self.advance(); // consume keyword

        match rule {
            Rule::Comparison(op) => self.parse_comparison(op),
            Rule::Combinator(op) => self.parse_combinator(op),
            Rule::Sort => self.parse_sort(),
            Rule::Limit => self.parse_limit(),
            Rule::SetMembership(op) => self.parse_membership(op),
        }
    }

    fn parse_comparison(&mut self, operator: ComparisonOp) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::OpenParen, ErrorKind::MissingOpenParen)?;
        let property = self.parse_property()?;
        self.expect(TokenKind::Comma, ErrorKind::MissingComma)?;
        let value = self.parse_value()?;
        self.expect(TokenKind::CloseParen, ErrorKind::MissingCloseParen)?;

        Ok(Node::Comparison {
            operator,
            property,
            value,
        })
    }

    fn parse_combinator(&mut self, operator: CombinatorOp) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::OpenParen, ErrorKind::MissingOpenParen)?;

        let mut operands = vec![self.parse_query()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            operands.push(self.parse_query()?);
        }

        if !self.check(TokenKind::CloseParen) {
            return Err(self.error(ErrorKind::MissingCloseParen, "',' or ')'"));
        }
        self.advance();

        Ok(Node::BooleanCombinator { operator, operands })
    }

    fn parse_sort(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::OpenParen, ErrorKind::MissingOpenParen)?;

        let mut fields = vec![];
        loop {
            let direction = if self.check(TokenKind::Minus) {
                self.advance();
                SortDirection::Desc
            } else {
                if self.check(TokenKind::Plus) {
                    self.advance();
                }
                SortDirection::Asc
            };

            let property = self.parse_property()?;
            fields.push(SortField { property, direction });

            match self.current_token.as_ref().map(|t| t.kind) {
                None => break,
                Some(TokenKind::CloseParen) => {
                    self.advance();
                    break;
                }
                Some(TokenKind::Comma) => self.advance(),
                Some(_) => return Err(self.error(ErrorKind::MissingComma, "',' or ')'")),
            }
        }

        Ok(Node::Sort { fields })
    }

    fn parse_limit(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::OpenParen, ErrorKind::MissingOpenParen)?;

        if self.current_token.is_none() || self.check(TokenKind::CloseParen) {
            return Err(SyntaxError::new(
                ErrorKind::MissingLimit,
                "limit requires at least one integer argument",
                self.position(),
            ));
        }

        let limit = self.parse_count()?;
        let mut skip = 0;

        if self.check(TokenKind::Comma) {
            self.advance();
            skip = self.parse_count()?;
        } else if self.current_token.is_some() && !self.check(TokenKind::CloseParen) {
            return Err(self.error(ErrorKind::MissingComma, "',' or ')'"));
        }

        if self.current_token.is_some() {
            self.expect(TokenKind::CloseParen, ErrorKind::MissingCloseParen)?;
        }

        Ok(Node::Limit { limit, skip })
    }

    fn parse_membership(&mut self, operator: SetOp) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::OpenParen, ErrorKind::MissingOpenParen)?;
        let property = self.parse_property()?;
        self.expect(TokenKind::Comma, ErrorKind::MissingComma)?;
        self.expect(TokenKind::OpenBracket, ErrorKind::MissingOpenBracket)?;

        let mut values = vec![];
        if self.check(TokenKind::CloseBracket) {
            self.advance();
        } else {
            loop {
                values.push(self.parse_value()?);

                if self.check(TokenKind::Comma) {
                    self.advance();
                } else if self.check(TokenKind::CloseBracket) {
                    self.advance();
                    break;
                } else {
                    return Err(self.error(ErrorKind::MissingCloseBracket, "',' or ']'"));
                }
            }
        }

        self.expect(TokenKind::CloseParen, ErrorKind::MissingCloseParen)?;

        Ok(Node::SetMembership {
            operator,
            property,
            values,
        })
    }

    fn parse_property(&mut self) -> Result<String, SyntaxError> {
        let token = self.expect(TokenKind::StringLiteral, ErrorKind::ExpectedProperty)?;
        Ok(token.text)
    }

    /// Parse a literal value, folding a leading sign into a number.
    fn parse_value(&mut self) -> Result<Literal, SyntaxError> {
        match self.current_token.as_ref().map(|t| t.kind) {
            Some(TokenKind::StringLiteral | TokenKind::Integer | TokenKind::Float) => {
                self.parse_literal()
            }
            Some(sign @ (TokenKind::Plus | TokenKind::Minus)) => {
                self.advance();
                if !self.check(TokenKind::Integer) && !self.check(TokenKind::Float) {
                    return Err(self.error(ErrorKind::ExpectedValue, "number after sign"));
                }
                let number = self.parse_literal()?;
                Ok(if sign == TokenKind::Minus {
                    number.negated()
                } else {
                    number
                })
            }
            _ => Err(self.error(ErrorKind::ExpectedValue, "value")),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal, SyntaxError> {
        let position = self.position();
        let Some(token) = self.bump() else {
            return Err(SyntaxError::new(
                ErrorKind::UnexpectedEndOfInput,
                "unexpected end of input",
                position,
            ));
        };

        let invalid = |token: &Token| {
            SyntaxError::new(
                ErrorKind::ExpectedValue,
                format!("invalid number {token}"),
                token.position,
            )
        };

        match token.kind {
            TokenKind::Integer => token
                .text
                .parse::<i64>()
                .map(Literal::Integer)
                .map_err(|_| invalid(&token)),
            TokenKind::Float => token
                .text
                .parse::<f64>()
                .map(Literal::Float)
                .map_err(|_| invalid(&token)),
            _ => Ok(Literal::Text(token.text)),
        }
    }

    fn parse_count(&mut self) -> Result<u64, SyntaxError> {
        let token = self.expect(TokenKind::Integer, ErrorKind::ExpectedValue)?;
        token.text.parse::<u64>().map_err(|_| {
            SyntaxError::new(
                ErrorKind::ExpectedValue,
                format!("invalid count {token}"),
                token.position,
            )
        })
    }
}
