// SPDX-License-Identifier: Apache-2.0

use log::debug;

use super::BookCodec;
use crate::book::{Author, Book};
use crate::error::CodecError;
use crate::token::{TokenRead, TokenWrite};

/// Keyed object with authors as a nested array of keyed objects:
/// `{"isbn": ..., "title": ..., "authors": [{"id": 1, "name": ...}, ...]}`.
///
/// The structurally richest of the four formats, and the only one where both
/// id and name round-trip under member names at every level. Unrecognized
/// members are structurally skipped in the outer object and inside each
/// author object alike; members that never arrive leave their field at the
/// zero value, matching the joined format's tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedAuthors;

fn decode_authors<R: TokenRead>(reader: &mut R) -> Result<Vec<Author>, CodecError<R::Error>> {
    let mut authors = Vec::new();

    reader.begin_array()?;
    while reader.has_next()? {
        reader.begin_object()?;
        let mut id = 0;
        let mut name = String::new();
        while reader.has_next()? {
            match reader.next_name()?.as_str() {
                "id" => id = reader.next_int()?,
                "name" => name = reader.next_string()?,
                other => {
                    debug!("skipping unrecognized author member {other:?}");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;
        authors.push(Author { id, name });
    }
    reader.end_array()?;

    Ok(authors)
}

impl BookCodec for NestedAuthors {
    type Value = Book<Author>;

    fn decode<R: TokenRead>(&self, reader: &mut R) -> Result<Book<Author>, CodecError<R::Error>> {
        let mut book = Book::default();

        reader.begin_object()?;
        while reader.has_next()? {
            match reader.next_name()?.as_str() {
                "isbn" => book.isbn = reader.next_string()?,
                "title" => book.title = reader.next_string()?,
                "authors" => book.authors = decode_authors(reader)?,
                other => {
                    debug!("skipping unrecognized member {other:?}");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        Ok(book)
    }

    fn encode<W: TokenWrite>(&self, writer: &mut W, book: &Book<Author>) -> Result<(), W::Error> {
        writer.begin_object()?;
        writer.name("isbn")?;
        writer.string_value(&book.isbn)?;
        writer.name("title")?;
        writer.string_value(&book.title)?;
        writer.name("authors")?;
        writer.begin_array()?;
        for author in &book.authors {
            writer.begin_object()?;
            writer.name("id")?;
            writer.int_value(author.id)?;
            writer.name("name")?;
            writer.string_value(&author.name)?;
            writer.end_object()?;
        }
        writer.end_array()?;
        writer.end_object()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TokenBuffer;
    use crate::token::Token;
    use test_log::test;

    fn puzzlers() -> Book<Author> {
        Book::new(
            "978-0321336781",
            "Java Puzzlers: Traps, Pitfalls, and Corner Cases",
            vec![Author::new(1, "Joshua Bloch"), Author::new(2, "Neal Gafter")],
        )
    }

    #[test]
    fn encodes_authors_as_array_of_objects() {
        let mut stream = TokenBuffer::new();
        NestedAuthors.encode(&mut stream, &puzzlers()).unwrap();

        assert_eq!(
            stream.tokens(),
            &[
                Token::BeginObject,
                Token::Name("isbn".into()),
                Token::Str("978-0321336781".into()),
                Token::Name("title".into()),
                Token::Str("Java Puzzlers: Traps, Pitfalls, and Corner Cases".into()),
                Token::Name("authors".into()),
                Token::BeginArray,
                Token::BeginObject,
                Token::Name("id".into()),
                Token::Int(1),
                Token::Name("name".into()),
                Token::Str("Joshua Bloch".into()),
                Token::EndObject,
                Token::BeginObject,
                Token::Name("id".into()),
                Token::Int(2),
                Token::Name("name".into()),
                Token::Str("Neal Gafter".into()),
                Token::EndObject,
                Token::EndArray,
                Token::EndObject,
            ]
        );
    }

    #[test]
    fn round_trip_preserves_ids_and_order() {
        let book = puzzlers();
        let mut stream = TokenBuffer::new();
        NestedAuthors.encode(&mut stream, &book).unwrap();
        assert_eq!(NestedAuthors.decode(&mut stream).unwrap(), book);
        assert!(stream.is_exhausted());
    }

    #[test]
    fn unrecognized_member_between_isbn_and_title_is_tolerated() {
        let mut stream = TokenBuffer::from_tokens(vec![
            Token::BeginObject,
            Token::Name("isbn".into()),
            Token::Str("978-0321336781".into()),
            Token::Name("edition".into()),
            Token::Str("2nd".into()),
            Token::Name("title".into()),
            Token::Str("Java Puzzlers: Traps, Pitfalls, and Corner Cases".into()),
            Token::Name("authors".into()),
            Token::BeginArray,
            Token::BeginObject,
            Token::Name("id".into()),
            Token::Int(1),
            Token::Name("name".into()),
            Token::Str("Joshua Bloch".into()),
            Token::EndObject,
            Token::BeginObject,
            Token::Name("id".into()),
            Token::Int(2),
            Token::Name("name".into()),
            Token::Str("Neal Gafter".into()),
            Token::EndObject,
            Token::EndArray,
            Token::EndObject,
        ]);
        assert_eq!(NestedAuthors.decode(&mut stream).unwrap(), puzzlers());
    }

    #[test]
    fn unrecognized_member_inside_an_author_is_tolerated() {
        let mut stream = TokenBuffer::from_tokens(vec![
            Token::BeginObject,
            Token::Name("authors".into()),
            Token::BeginArray,
            Token::BeginObject,
            Token::Name("name".into()),
            Token::Str("Joshua Bloch".into()),
            Token::Name("homepage".into()),
            Token::Str("https://example.com".into()),
            Token::Name("id".into()),
            Token::Int(1),
            Token::EndObject,
            Token::EndArray,
            Token::EndObject,
        ]);
        let book = NestedAuthors.decode(&mut stream).unwrap();
        assert_eq!(book.authors, vec![Author::new(1, "Joshua Bloch")]);
    }

    #[test]
    fn author_member_missing_leaves_zero_value() {
        let mut stream = TokenBuffer::from_tokens(vec![
            Token::BeginObject,
            Token::Name("authors".into()),
            Token::BeginArray,
            Token::BeginObject,
            Token::Name("name".into()),
            Token::Str("Joshua Bloch".into()),
            Token::EndObject,
            Token::EndArray,
            Token::EndObject,
        ]);
        let book = NestedAuthors.decode(&mut stream).unwrap();
        assert_eq!(book.authors, vec![Author::new(0, "Joshua Bloch")]);
    }

    #[test]
    fn empty_object_decodes_to_zero_book() {
        let mut stream = TokenBuffer::from_tokens(vec![Token::BeginObject, Token::EndObject]);
        assert_eq!(NestedAuthors.decode(&mut stream).unwrap(), Book::default());
    }
}
