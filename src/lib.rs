// SPDX-License-Identifier: Apache-2.0

//! Streaming JSON codecs for book catalog records.
//!
//! Each codec reads and writes a [`Book`] directly against a cursor-based
//! token stream; nothing is materialized into an intermediate value tree.
//! Four wire formats of the same logical record are supported:
//!
//! - [`JoinedAuthors`]: `{"isbn": ..., "title": ..., "authors": "a;b"}`
//! - [`NameArray`]: `["isbn", "title", "a", "b"]`
//! - [`PairedArray`]: `["isbn", "title", 1, "a", 2, "b"]`
//! - [`NestedAuthors`]: `{"isbn": ..., "title": ..., "authors": [{"id": 1, "name": "a"}]}`
//!
//! The tokenizer itself is an external collaborator: anything implementing
//! [`TokenRead`] / [`TokenWrite`] over the small vocabulary in [`Token`] can
//! back a codec. [`TokenBuffer`] is the in-memory reference implementation.
//!
//! ```
//! use bookstax::{Book, BookCodec, NameArray, TokenBuffer};
//!
//! let book = Book::new(
//!     "978-0321356680",
//!     "Effective Java (2nd Edition)",
//!     vec!["Joshua Bloch".to_owned()],
//! );
//!
//! let mut stream = TokenBuffer::new();
//! NameArray.encode(&mut stream, &book)?;
//! assert_eq!(NameArray.decode(&mut stream)?, book);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod book;
mod buffer;
mod codec;
mod error;
mod token;

pub use book::{Author, Book};
pub use buffer::TokenBuffer;
pub use codec::{BookCodec, JoinedAuthors, NameArray, NestedAuthors, PairedArray};
pub use error::{CodecError, Malformed};
pub use token::{Token, TokenKind, TokenRead, TokenWrite};
