//! Lexer/tokenizer for the selection language
//!
//! Converts selection strings into a stream of tokens using nom combinators.
//! Every token remembers its byte offset so parse errors can point back into
//! the input.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{opt, recognize, value},
    sequence::{pair, preceded},
};

use crate::error::SelectionError;

/// Token types for the selection language
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Slash for macro notation
    Slash,
    /// Plus for value lists
    Plus,
    /// Minus for ranges
    Minus,
    /// Asterisk wildcard
    Asterisk,
    /// Question mark wildcard
    Question,
    /// Ampersand for AND
    Ampersand,
    /// Pipe for OR
    Pipe,
    /// Caret for XOR
    Caret,
    /// Exclamation for NOT
    Exclamation,
    /// Less than
    LessThan,
    /// Less than or equal
    LessOrEqual,
    /// Greater than
    GreaterThan,
    /// Greater than or equal
    GreaterOrEqual,
    /// Integer literal
    Integer(i32),
    /// Float literal
    Float(f32),
    /// Identifier (keyword or atom/residue name)
    Ident(String),
    /// End of input
    Eof,
}

type LexResult<'a, T> = IResult<&'a str, T>;

/// Parse comparison operators (two-char forms before one-char forms)
fn comparison(input: &str) -> LexResult<'_, Token> {
    alt((
        value(Token::LessOrEqual, tag("<=")),
        value(Token::GreaterOrEqual, tag(">=")),
        value(Token::LessThan, char('<')),
        value(Token::GreaterThan, char('>')),
    ))(input)
}

/// Parse a number (integer or float) - does NOT consume a leading minus
fn number(input: &str) -> LexResult<'_, Token> {
    let (input, int_part) = digit1(input)?;
    let (input, frac_part) = opt(preceded(char('.'), digit1))(input)?;

    match frac_part {
        Some(frac) => {
            let s = format!("{}.{}", int_part, frac);
            let f: f32 = s.parse().unwrap_or(0.0);
            Ok((input, Token::Float(f)))
        }
        None => {
            let i: i32 = int_part.parse().unwrap_or(0);
            Ok((input, Token::Integer(i)))
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Parse an identifier
fn ident(input: &str) -> LexResult<'_, Token> {
    let (input, s) = recognize(pair(
        take_while1(is_ident_start),
        take_while(is_ident_char),
    ))(input)?;
    Ok((input, Token::Ident(s.to_string())))
}

/// Parse an identifier that starts with a digit (atom names like "1H", "2HG")
fn digit_ident(input: &str) -> LexResult<'_, Token> {
    let (input, s) = recognize(pair(
        digit1,
        take_while1(|c: char| c.is_alphabetic() || c == '\''),
    ))(input)?;
    Ok((input, Token::Ident(s.to_string())))
}

/// Parse a single token (no leading whitespace)
fn token(input: &str) -> LexResult<'_, Token> {
    alt((
        // Multi-char operators first
        comparison,
        // Single-char tokens
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
        value(Token::Slash, char('/')),
        value(Token::Plus, char('+')),
        value(Token::Minus, char('-')),
        value(Token::Asterisk, char('*')),
        value(Token::Question, char('?')),
        value(Token::Ampersand, char('&')),
        value(Token::Pipe, char('|')),
        value(Token::Caret, char('^')),
        value(Token::Exclamation, char('!')),
        // Identifiers starting with a digit - must come before number
        digit_ident,
        // Numbers (no leading minus)
        number,
        // Regular identifiers
        ident,
    ))(input)
}

/// Tokenize an entire selection string into (token, byte offset) pairs.
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, SelectionError> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0::<_, nom::error::Error<&str>>(remaining)
            .map_err(|_| SelectionError::new("unexpected end of input"))?;
        remaining = rest;

        let offset = input.len() - remaining.len();
        if remaining.is_empty() {
            tokens.push((Token::Eof, offset));
            break;
        }

        match token(remaining) {
            Ok((rest, tok)) => {
                tokens.push((tok, offset));
                remaining = rest;
            }
            Err(_) => {
                let snippet: String = remaining.chars().take(10).collect();
                return Err(SelectionError::at(
                    format!("unexpected character sequence: {:?}", snippet),
                    offset,
                ));
            }
        }
    }

    Ok(tokens)
}

/// A token stream cursor for parsing, with position save/restore for
/// backtracking.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl TokenStream {
    /// Tokenize a selection string into a stream.
    pub fn from_input(input: &str) -> Result<Self, SelectionError> {
        Ok(TokenStream {
            tokens: tokenize(input)?,
            pos: 0,
        })
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .map(|(t, _)| t)
            .unwrap_or(&Token::Eof)
    }

    /// Consume and return the current token.
    pub fn next(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Byte offset of the current token in the original input.
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.pos.min(self.tokens.len().saturating_sub(1)))
            .map(|(_, o)| *o)
            .unwrap_or(0)
    }

    /// Check if the stream is exhausted.
    pub fn is_eof(&self) -> bool {
        matches!(self.peek(), Token::Eof)
    }
}
