// SPDX-License-Identifier: Apache-2.0

//! Growable in-memory token sequence.
//!
//! [`TokenBuffer`] is both halves of the stream vocabulary at once: writes
//! append to the sequence, reads consume it from the front through a cursor.
//! A real embedding would back [`TokenRead`] with a streaming tokenizer and
//! [`TokenWrite`] with an output sink; this buffer is the reference
//! implementation and the round-trip oracle the tests run against.

use core::convert::Infallible;

use crate::error::{CodecError, Malformed};
use crate::token::{Token, TokenKind, TokenRead, TokenWrite};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a buffer with a pre-built token sequence, cursor at the front.
    pub fn from_tokens(tokens: impl Into<Vec<Token>>) -> Self {
        Self {
            tokens: tokens.into(),
            cursor: 0,
        }
    }

    /// Every token written so far, in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True once the cursor has consumed every token.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    fn take(&mut self) -> Result<Token, CodecError<Infallible>> {
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(Malformed::UnexpectedEnd)?;
        self.cursor += 1;
        Ok(token)
    }

    fn structural(&mut self, expected: TokenKind) -> Result<(), CodecError<Infallible>> {
        let found = self.peek()?;
        if found != expected {
            return Err(Malformed::UnexpectedToken { expected, found }.into());
        }
        self.cursor += 1;
        Ok(())
    }
}

impl TokenRead for TokenBuffer {
    type Error = Infallible;

    fn begin_object(&mut self) -> Result<(), CodecError<Infallible>> {
        self.structural(TokenKind::BeginObject)
    }

    fn end_object(&mut self) -> Result<(), CodecError<Infallible>> {
        self.structural(TokenKind::EndObject)
    }

    fn begin_array(&mut self) -> Result<(), CodecError<Infallible>> {
        self.structural(TokenKind::BeginArray)
    }

    fn end_array(&mut self) -> Result<(), CodecError<Infallible>> {
        self.structural(TokenKind::EndArray)
    }

    fn has_next(&mut self) -> Result<bool, CodecError<Infallible>> {
        Ok(!matches!(
            self.peek()?,
            TokenKind::EndObject | TokenKind::EndArray
        ))
    }

    fn next_name(&mut self) -> Result<String, CodecError<Infallible>> {
        match self.take()? {
            Token::Name(name) => Ok(name),
            other => Err(Malformed::UnexpectedToken {
                expected: TokenKind::Name,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn next_string(&mut self) -> Result<String, CodecError<Infallible>> {
        match self.take()? {
            Token::Str(value) => Ok(value),
            other => Err(Malformed::UnexpectedToken {
                expected: TokenKind::Str,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn next_int(&mut self) -> Result<i32, CodecError<Infallible>> {
        match self.take()? {
            Token::Int(value) => Ok(value),
            other => Err(Malformed::UnexpectedToken {
                expected: TokenKind::Int,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn peek(&mut self) -> Result<TokenKind, CodecError<Infallible>> {
        self.tokens
            .get(self.cursor)
            .map(Token::kind)
            .ok_or(CodecError::Malformed(Malformed::UnexpectedEnd))
    }
}

impl TokenWrite for TokenBuffer {
    type Error = Infallible;

    fn begin_object(&mut self) -> Result<(), Infallible> {
        self.tokens.push(Token::BeginObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Infallible> {
        self.tokens.push(Token::EndObject);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), Infallible> {
        self.tokens.push(Token::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Infallible> {
        self.tokens.push(Token::EndArray);
        Ok(())
    }

    fn name(&mut self, name: &str) -> Result<(), Infallible> {
        self.tokens.push(Token::Name(name.to_owned()));
        Ok(())
    }

    fn string_value(&mut self, value: &str) -> Result<(), Infallible> {
        self.tokens.push(Token::Str(value.to_owned()));
        Ok(())
    }

    fn int_value(&mut self, value: i32) -> Result<(), Infallible> {
        self.tokens.push(Token::Int(value));
        Ok(())
    }
}
