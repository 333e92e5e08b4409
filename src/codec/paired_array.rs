// SPDX-License-Identifier: Apache-2.0

use super::BookCodec;
use crate::book::{Author, Book};
use crate::error::{CodecError, Malformed};
use crate::token::{TokenRead, TokenWrite};

/// Positional array with each author flattened to two consecutive elements:
/// `[isbn, title, id, name, id, name, ...]`.
///
/// After isbn and title the remaining element count must be even: an id
/// commits the stream to a following name. A stream that ends after an id is
/// rejected as an unpaired trailing element, never silently truncated to one
/// author fewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairedArray;

impl BookCodec for PairedArray {
    type Value = Book<Author>;

    fn decode<R: TokenRead>(&self, reader: &mut R) -> Result<Book<Author>, CodecError<R::Error>> {
        reader.begin_array()?;
        let isbn = reader.next_string()?;
        let title = reader.next_string()?;
        let mut authors = Vec::new();
        while reader.has_next()? {
            let id = reader.next_int()?;
            if !reader.has_next()? {
                return Err(Malformed::UnpairedElement.into());
            }
            let name = reader.next_string()?;
            authors.push(Author { id, name });
        }
        reader.end_array()?;

        Ok(Book {
            isbn,
            title,
            authors,
        })
    }

    fn encode<W: TokenWrite>(&self, writer: &mut W, book: &Book<Author>) -> Result<(), W::Error> {
        writer.begin_array()?;
        writer.string_value(&book.isbn)?;
        writer.string_value(&book.title)?;
        for author in &book.authors {
            writer.int_value(author.id)?;
            writer.string_value(&author.name)?;
        }
        writer.end_array()?;
        Ok(())
    }
}
