// SPDX-License-Identifier: Apache-2.0

use log::debug;

use super::BookCodec;
use crate::book::Book;
use crate::error::CodecError;
use crate::token::{TokenRead, TokenWrite};

/// Join delimiter between author names on the wire.
const DELIMITER: &str = ";";

/// Keyed object with the author names flattened into one delimited string:
/// `{"isbn": ..., "title": ..., "authors": "name;name"}`.
///
/// The `;` delimiter has no escape mechanism: a name that itself contains
/// `;` is split apart again on decode. This mirrors the wire format as
/// deployed and is a documented round-trip hazard, not something this codec
/// papers over. Callers who cannot rule such names out want one of the
/// positional formats instead. For the same reason an empty author list
/// encodes as the empty string, which decodes back as one empty name.
///
/// Members may arrive in any order; members other than `isbn`, `title` and
/// `authors` are structurally skipped. A member that never arrives leaves
/// its field at the zero value rather than failing, which keeps old readers
/// working against newer writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinedAuthors;

impl BookCodec for JoinedAuthors {
    type Value = Book<String>;

    fn decode<R: TokenRead>(&self, reader: &mut R) -> Result<Book<String>, CodecError<R::Error>> {
        let mut book = Book::default();

        reader.begin_object()?;
        while reader.has_next()? {
            match reader.next_name()?.as_str() {
                "isbn" => book.isbn = reader.next_string()?,
                "title" => book.title = reader.next_string()?,
                "authors" => {
                    let joined = reader.next_string()?;
                    book.authors = joined.split(DELIMITER).map(str::to_owned).collect();
                }
                other => {
                    debug!("skipping unrecognized member {other:?}");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        Ok(book)
    }

    fn encode<W: TokenWrite>(&self, writer: &mut W, book: &Book<String>) -> Result<(), W::Error> {
        writer.begin_object()?;
        writer.name("isbn")?;
        writer.string_value(&book.isbn)?;
        writer.name("title")?;
        writer.string_value(&book.title)?;
        writer.name("authors")?;
        writer.string_value(&book.authors.join(DELIMITER))?;
        writer.end_object()?;
        Ok(())
    }
}
