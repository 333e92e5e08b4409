// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::token::TokenKind;

/// Ways a token sequence can fail to match the expected wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The cursor sat on a different kind of token than the wire shape
    /// called for.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// The token sequence ended in the middle of a value.
    #[error("unexpected end of token stream")]
    UnexpectedEnd,
    /// A structural skip started on a token that cannot begin a value.
    #[error("expected a value, found {0}")]
    ExpectedValue(TokenKind),
    /// An author id arrived with no name following it.
    #[error("unpaired trailing element in author pair list")]
    UnpairedElement,
}

/// Error type shared by every codec strategy and by [`TokenRead`] itself.
///
/// `E` is the transport error of the underlying stream. It is propagated
/// unchanged; nothing in this crate inspects it.
///
/// [`TokenRead`]: crate::token::TokenRead
#[derive(Debug, PartialEq, Error)]
pub enum CodecError<E> {
    /// The input does not follow the expected wire shape. Decoding does not
    /// recover from this; the stream position is unspecified afterwards.
    #[error("malformed input: {0}")]
    Malformed(#[from] Malformed),
    /// The underlying stream failed.
    #[error("token stream failure")]
    Io(#[source] E),
}

impl<E> CodecError<E> {
    /// True for the malformed-input kind, false for transport failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::Malformed(_))
    }
}
