//! Expression lexing and precedence-climbing parser
//!
//! ```text
//! binary  ::= unary (OP unary)*      OP by Operation::precedence, left assoc
//! unary   ::= ('-' | '+') unary | primary
//! primary ::= NUMBER | '(' binary ')'
//! NUMBER  ::= digits ['.' digits] [('e' | 'E') ['+' | '-'] digits]
//! ```
//!
//! Running out of tokens where an operand or `)` is due yields
//! [`CalcError::UnexpectedEnd`], so half-typed input is distinguishable
//! from malformed input.

use std::iter::Peekable;
use std::str::CharIndices;
use std::vec::IntoIter;

use crate::core::{CalcError, CalcResult, Operation};

/// Maximum nesting of parentheses and unary signs
pub const MAX_DEPTH: usize = 256;

/// Lexical unit of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator symbol, binary or unary depending on position
    Operator(Operation),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// `left op right`
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary minus
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Literal node
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Binary node
    #[must_use]
    pub fn binary(left: Self, op: Operation, right: Self) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Negation node
    #[must_use]
    pub fn negate(inner: Self) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Streams tokens out of an expression string
///
/// Whitespace is skipped. A bad character is consumed before its error is
/// yielded, so iteration always makes progress.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer over `input`
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Collects every token, stopping at the first error
    pub fn tokenize(self) -> CalcResult<Vec<Token>> {
        self.collect()
    }

    // "3." and ".5" are accepted; a lone "." is not. An exponent such as
    // "e-7" or "E21" is part of the literal only when digits follow it.
    fn number(&mut self, start: usize) -> CalcResult<Token> {
        let mut seen_dot = self.input[start..].starts_with('.');

        while let Some(&(_, ch)) = self.chars.peek() {
            let take = ch.is_ascii_digit() || (ch == '.' && !seen_dot);
            if !take {
                break;
            }
            seen_dot |= ch == '.';
            self.chars.next();
        }

        if let Some(after_exponent) = self.exponent() {
            self.chars = after_exponent;
        }

        let end = self.chars.peek().map_or(self.input.len(), |&(idx, _)| idx);
        let literal = &self.input[start..end];
        literal
            .parse()
            .map(Token::Number)
            .map_err(|_| CalcError::parse(format!("Invalid number: '{literal}'")))
    }

    /// Scans `[eE][+-]?digits` ahead without consuming; returns the
    /// position past it
    fn exponent(&self) -> Option<Peekable<CharIndices<'a>>> {
        let mut ahead = self.chars.clone();
        ahead.next_if(|&(_, ch)| ch == 'e' || ch == 'E')?;
        ahead.next_if(|&(_, ch)| ch == '+' || ch == '-');
        ahead.next_if(|&(_, ch)| ch.is_ascii_digit())?;
        while ahead.next_if(|&(_, ch)| ch.is_ascii_digit()).is_some() {}
        Some(ahead)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = CalcResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, ch) = loop {
            let (idx, ch) = self.chars.next()?;
            if !ch.is_whitespace() {
                break (idx, ch);
            }
        };

        let token = match ch {
            '0'..='9' | '.' => return Some(self.number(idx)),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => match Operation::from_symbol(ch) {
                Some(op) => Token::Operator(op),
                None => {
                    return Some(Err(CalcError::parse(format!(
                        "Unexpected character: '{ch}'"
                    ))))
                }
            },
        };
        Some(Ok(token))
    }
}

/// Builds an [`AstNode`] from a token sequence
#[derive(Debug)]
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    depth: usize,
}

impl Parser {
    /// Parser over already lexed tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            depth: 0,
        }
    }

    /// Lexes and parses `input`
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        Self::new(Tokenizer::new(input).tokenize()?).parse()
    }

    /// Parses the whole token sequence
    ///
    /// No tokens at all is [`CalcError::EmptyExpression`]; tokens left
    /// after a complete expression are a parse error.
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.peek().is_none() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.binary(0)?;
        match self.tokens.next() {
            None => Ok(ast),
            Some(extra) => Err(CalcError::parse(format!(
                "Unexpected {extra:?} after complete expression"
            ))),
        }
    }

    fn peek_operator(&mut self) -> Option<Operation> {
        match self.tokens.peek() {
            Some(Token::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> CalcResult<T>) -> CalcResult<T> {
        if self.depth == MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    fn binary(&mut self, min_precedence: u8) -> CalcResult<AstNode> {
        let mut left = self.unary()?;

        while let Some(op) = self
            .peek_operator()
            .filter(|op| op.precedence() >= min_precedence)
        {
            self.tokens.next();
            let right = self.binary(op.precedence() + 1)?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn unary(&mut self) -> CalcResult<AstNode> {
        match self.peek_operator() {
            Some(Operation::Subtract) => {
                self.tokens.next();
                self.nested(Self::unary).map(AstNode::negate)
            }
            Some(Operation::Add) => {
                self.tokens.next();
                self.nested(Self::unary)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> CalcResult<AstNode> {
        match self.tokens.next() {
            None => Err(CalcError::UnexpectedEnd),
            Some(Token::Number(n)) => Ok(AstNode::number(n)),
            Some(Token::LeftParen) => {
                let inner = self.nested(|p| p.binary(0))?;
                match self.tokens.next() {
                    Some(Token::RightParen) => Ok(inner),
                    Some(other) => Err(CalcError::parse(format!("Expected ')', got {other:?}"))),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(other) => Err(CalcError::parse(format!("Expected a number, got {other:?}"))),
        }
    }
}
