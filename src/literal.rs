//! Textual literals for nested structures
//!
//! Grammar (whitespace insignificant, trailing commas allowed):
//!   node   := list | tuple | set | scalar
//!   list   := '[' items ']'
//!   tuple  := '(' ')' | '(' node ',' items ')' | '(' node ')'   -- last one is grouping
//!   set    := '{' items '}'
//!   scalar := integer | quoted string | bare word
//!
//! Brackets nest at most [`MAX_DEPTH`] deep.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::nested::Node;

/// Deepest bracket nesting a literal may use
pub const MAX_DEPTH: usize = 256;

/// Leaf value of a parsed literal
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// Signed integer
    Int(i64),

    /// Quoted string or bare word
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Str(text) => {
                f.write_str("'")?;
                for ch in text.chars() {
                    if ch == '\'' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("'")
            }
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Str(text.to_string())
    }
}

/// Error returned when a literal cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    /// A character that cannot start or continue the current construct
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset within the literal
        offset: usize,
    },

    /// Input ended inside an open construct
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A complete literal was followed by more input
    #[error("trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first extra character
        offset: usize,
    },

    /// Integer literal outside the `i64` range
    #[error("integer '{literal}' at offset {offset} is out of range")]
    IntegerOverflow {
        /// Digits as written
        literal: String,
        /// Byte offset of the literal
        offset: usize,
    },

    /// Brackets nested deeper than [`MAX_DEPTH`]
    #[error("nesting deeper than {limit} at offset {offset}")]
    TooDeep {
        /// Byte offset of the first bracket past the limit
        offset: usize,
        /// Maximum nesting depth
        limit: usize,
    },

    /// Quoted string without a closing quote
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        offset: usize,
    },
}

impl FromStr for Node<Scalar> {
    type Err = LiteralError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            src,
            pos: 0,
            depth: 0,
        };
        let node = parser.node()?;
        parser.skip_whitespace();
        if parser.pos < src.len() {
            return Err(LiteralError::TrailingInput { offset: parser.pos });
        }
        Ok(node)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.' | ':' | '+')
}

/// Recursive-descent parser over a literal
struct Parser<'s> {
    src: &'s str,
    pos: usize,

    /// Brackets currently open
    depth: usize,
}

impl<'s> Parser<'s> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(ch) => LiteralError::UnexpectedChar {
                ch,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd,
        }
    }

    /// Consume an opening bracket unless that would exceed `MAX_DEPTH`
    fn open(&mut self) -> Result<(), LiteralError> {
        if self.depth == MAX_DEPTH {
            return Err(LiteralError::TooDeep {
                offset: self.pos,
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        self.bump();
        Ok(())
    }

    fn node(&mut self) -> Result<Node<Scalar>, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            Some(open @ ('[' | '{' | '(')) => {
                self.open()?;
                let node = match open {
                    '[' => self.items(']').map(Node::List),
                    '{' => self.items('}').map(Node::set),
                    _ => self.tuple_or_group(),
                };
                self.depth -= 1;
                node
            }
            Some('\'') | Some('"') => self.quoted(),
            Some(ch) if is_word_char(ch) => self.word(),
            _ => Err(self.unexpected()),
        }
    }

    /// Comma-separated nodes up to `close`; the opener is already consumed
    fn items(&mut self, close: char) -> Result<Vec<Node<Scalar>>, LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(items);
            }
            items.push(self.node()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(ch) if ch == close => {
                    self.bump();
                    return Ok(items);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn tuple_or_group(&mut self) -> Result<Node<Scalar>, LiteralError> {
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(Node::Tuple(Vec::new()));
        }

        let first = self.node()?;
        self.skip_whitespace();
        match self.peek() {
            // `(x)` only groups
            Some(')') => {
                self.bump();
                Ok(first)
            }
            Some(',') => {
                self.bump();
                let mut items = vec![first];
                items.extend(self.items(')')?);
                Ok(Node::Tuple(items))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn quoted(&mut self) -> Result<Node<Scalar>, LiteralError> {
        let offset = self.pos;
        let quote = self.bump().ok_or(LiteralError::UnexpectedEnd)?;
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(LiteralError::UnterminatedString { offset }),
                Some('\\') => match self.bump() {
                    Some(escaped) => text.push(escaped),
                    None => return Err(LiteralError::UnterminatedString { offset }),
                },
                Some(ch) if ch == quote => return Ok(Node::Leaf(Scalar::Str(text))),
                Some(ch) => text.push(ch),
            }
        }
    }

    fn word(&mut self) -> Result<Node<Scalar>, LiteralError> {
        let offset = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.bump();
        }
        let word = &self.src[offset..self.pos];

        let digits = word.strip_prefix('-').unwrap_or(word);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return word
                .parse::<i64>()
                .map(|value| Node::Leaf(Scalar::Int(value)))
                .map_err(|_| LiteralError::IntegerOverflow {
                    literal: word.to_string(),
                    offset,
                });
        }

        Ok(Node::Leaf(Scalar::Str(word.to_string())))
    }
}
