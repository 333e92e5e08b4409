// SPDX-License-Identifier: Apache-2.0

//! The bounded token vocabulary and the cursor traits the codecs are
//! written against.

use core::fmt;

use crate::error::{CodecError, Malformed};

/// One structural or scalar JSON token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The start of an object (`{`).
    BeginObject,
    /// The end of an object (`}`).
    EndObject,
    /// The start of an array (`[`).
    BeginArray,
    /// The end of an array (`]`).
    EndArray,
    /// An object member name (`"isbn":`).
    Name(String),
    /// A string scalar.
    Str(String),
    /// An integer scalar.
    Int(i32),
}

impl Token {
    /// The payload-free kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::BeginObject => TokenKind::BeginObject,
            Token::EndObject => TokenKind::EndObject,
            Token::BeginArray => TokenKind::BeginArray,
            Token::EndArray => TokenKind::EndArray,
            Token::Name(_) => TokenKind::Name,
            Token::Str(_) => TokenKind::Str,
            Token::Int(_) => TokenKind::Int,
        }
    }
}

/// Payload-free mirror of [`Token`], reported by [`TokenRead::peek`] and
/// named in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Name,
    Str,
    Int,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::BeginObject => "begin-object",
            TokenKind::EndObject => "end-object",
            TokenKind::BeginArray => "begin-array",
            TokenKind::EndArray => "end-array",
            TokenKind::Name => "member name",
            TokenKind::Str => "string scalar",
            TokenKind::Int => "integer scalar",
        })
    }
}

/// Cursor-based reader half of a token stream.
///
/// Calls are strictly nested and order-sensitive: a caller descends into a
/// container with `begin_*`, drains it guided by [`has_next`], and leaves
/// with `end_*`. There is no rewinding, and a single stream is exclusively
/// owned (`&mut`) by one decode call for its whole duration.
///
/// [`has_next`]: TokenRead::has_next
pub trait TokenRead {
    /// Transport error of the underlying stream.
    type Error;

    /// Consumes the begin-object token under the cursor.
    fn begin_object(&mut self) -> Result<(), CodecError<Self::Error>>;
    /// Consumes the end-object token under the cursor.
    fn end_object(&mut self) -> Result<(), CodecError<Self::Error>>;
    /// Consumes the begin-array token under the cursor.
    fn begin_array(&mut self) -> Result<(), CodecError<Self::Error>>;
    /// Consumes the end-array token under the cursor.
    fn end_array(&mut self) -> Result<(), CodecError<Self::Error>>;

    /// True while more members or elements remain before the current
    /// container's end token.
    fn has_next(&mut self) -> Result<bool, CodecError<Self::Error>>;

    /// Consumes and returns the next member name. Object contexts only.
    fn next_name(&mut self) -> Result<String, CodecError<Self::Error>>;
    /// Consumes and returns the next string scalar.
    fn next_string(&mut self) -> Result<String, CodecError<Self::Error>>;
    /// Consumes and returns the next integer scalar.
    fn next_int(&mut self) -> Result<i32, CodecError<Self::Error>>;

    /// Reports the kind of the token under the cursor without consuming it.
    fn peek(&mut self) -> Result<TokenKind, CodecError<Self::Error>>;

    /// Consumes one complete value, scalar or arbitrarily nested container,
    /// without interpreting it.
    ///
    /// This is how the keyed-object codecs tolerate member names they do not
    /// recognize: the whole member value is discarded structurally instead of
    /// being misread as a scalar.
    fn skip_value(&mut self) -> Result<(), CodecError<Self::Error>> {
        match self.peek()? {
            TokenKind::Str => {
                self.next_string()?;
            }
            TokenKind::Int => {
                self.next_int()?;
            }
            TokenKind::BeginObject => {
                self.begin_object()?;
                while self.has_next()? {
                    self.next_name()?;
                    self.skip_value()?;
                }
                self.end_object()?;
            }
            TokenKind::BeginArray => {
                self.begin_array()?;
                while self.has_next()? {
                    self.skip_value()?;
                }
                self.end_array()?;
            }
            found => return Err(Malformed::ExpectedValue(found).into()),
        }
        Ok(())
    }
}

/// Mirrored writer half of the token vocabulary.
///
/// Writers have no malformed-input failure mode: every method either succeeds
/// or surfaces the transport error unchanged.
pub trait TokenWrite {
    /// Transport error of the underlying sink.
    type Error;

    /// Emits a begin-object token.
    fn begin_object(&mut self) -> Result<(), Self::Error>;
    /// Emits an end-object token.
    fn end_object(&mut self) -> Result<(), Self::Error>;
    /// Emits a begin-array token.
    fn begin_array(&mut self) -> Result<(), Self::Error>;
    /// Emits an end-array token.
    fn end_array(&mut self) -> Result<(), Self::Error>;
    /// Emits a member name. Object contexts only.
    fn name(&mut self, name: &str) -> Result<(), Self::Error>;
    /// Emits a string scalar.
    fn string_value(&mut self, value: &str) -> Result<(), Self::Error>;
    /// Emits an integer scalar.
    fn int_value(&mut self, value: i32) -> Result<(), Self::Error>;
}
