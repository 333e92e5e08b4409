// SPDX-License-Identifier: Apache-2.0

//! The shared encode/decode contract and the four wire-format strategies.
//!
//! The strategies deliberately stay four separate implementations rather
//! than one parameterized codec: each encodes a materially different wire
//! shape (keyed object vs positional array, flat vs nested, joined scalar
//! vs id/name pairs), and folding them together would bury exactly the
//! differences a reader needs to see.

mod joined;
mod name_array;
mod nested;
mod paired_array;

pub use joined::JoinedAuthors;
pub use name_array::NameArray;
pub use nested::NestedAuthors;
pub use paired_array::PairedArray;

use crate::error::CodecError;
use crate::token::{TokenRead, TokenWrite};

/// One wire-format strategy for book records.
///
/// `decode` consumes exactly one complete value from the reader: no tokens
/// of that value are left dangling and no tokens of the next value are
/// touched. `encode` writes exactly one complete value in a fixed,
/// strategy-specific order.
///
/// For every strategy `S` and every `S::Value` expressible in its wire
/// shape, decoding an encoding of the value yields an equal value (the
/// round-trip law). Strategies are stateless; sharing one across threads is
/// free, but a single stream must be exclusively owned by one call.
pub trait BookCodec {
    /// The record shape this strategy reads and writes.
    type Value;

    /// Reads one complete value from a stream positioned immediately before
    /// it. Fails with [`CodecError::Malformed`] when the token sequence does
    /// not follow this strategy's wire shape.
    fn decode<R: TokenRead>(&self, reader: &mut R) -> Result<Self::Value, CodecError<R::Error>>;

    /// Writes one complete value. The only failure mode is the writer's own
    /// transport error, propagated unchanged.
    fn encode<W: TokenWrite>(&self, writer: &mut W, book: &Self::Value) -> Result<(), W::Error>;
}
