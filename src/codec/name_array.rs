// SPDX-License-Identifier: Apache-2.0

use super::BookCodec;
use crate::book::Book;
use crate::error::CodecError;
use crate::token::{TokenRead, TokenWrite};

/// Positional array of scalars: `[isbn, title, name, name, ...]`.
///
/// Meaning is carried by element position. The first two elements are isbn
/// and title; every further element is one author name, in order, until the
/// array ends. There is no length prefix; a two-element array simply has no
/// authors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameArray;

impl BookCodec for NameArray {
    type Value = Book<String>;

    fn decode<R: TokenRead>(&self, reader: &mut R) -> Result<Book<String>, CodecError<R::Error>> {
        reader.begin_array()?;
        let isbn = reader.next_string()?;
        let title = reader.next_string()?;
        let mut authors = Vec::new();
        while reader.has_next()? {
            authors.push(reader.next_string()?);
        }
        reader.end_array()?;

        Ok(Book {
            isbn,
            title,
            authors,
        })
    }

    fn encode<W: TokenWrite>(&self, writer: &mut W, book: &Book<String>) -> Result<(), W::Error> {
        writer.begin_array()?;
        writer.string_value(&book.isbn)?;
        writer.string_value(&book.title)?;
        for name in &book.authors {
            writer.string_value(name)?;
        }
        writer.end_array()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TokenBuffer;
    use crate::error::Malformed;
    use crate::token::{Token, TokenKind};
    use test_log::test;

    #[test]
    fn one_author_encodes_to_three_elements() {
        let book = Book::new(
            "978-0321356680",
            "Effective Java (2nd Edition)",
            vec!["Joshua Bloch".to_owned()],
        );
        let mut stream = TokenBuffer::new();
        NameArray.encode(&mut stream, &book).unwrap();

        assert_eq!(
            stream.tokens(),
            &[
                Token::BeginArray,
                Token::Str("978-0321356680".into()),
                Token::Str("Effective Java (2nd Edition)".into()),
                Token::Str("Joshua Bloch".into()),
                Token::EndArray,
            ]
        );
    }

    #[test]
    fn two_element_array_means_no_authors() {
        let mut stream = TokenBuffer::from_tokens(vec![
            Token::BeginArray,
            Token::Str("978-0321356680".into()),
            Token::Str("Effective Java (2nd Edition)".into()),
            Token::EndArray,
        ]);
        let book = NameArray.decode(&mut stream).unwrap();
        assert_eq!(book.isbn, "978-0321356680");
        assert_eq!(book.title, "Effective Java (2nd Edition)");
        assert!(book.authors.is_empty());
    }

    #[test]
    fn round_trip_with_many_authors_keeps_order() {
        let book = Book::new(
            "978-0321336781",
            "Java Puzzlers: Traps, Pitfalls, and Corner Cases",
            vec!["Joshua Bloch".to_owned(), "Neal Gafter".to_owned()],
        );
        let mut stream = TokenBuffer::new();
        NameArray.encode(&mut stream, &book).unwrap();
        assert_eq!(NameArray.decode(&mut stream).unwrap(), book);
        assert!(stream.is_exhausted());
    }

    #[test]
    fn object_where_array_expected_is_malformed() {
        let mut stream = TokenBuffer::from_tokens(vec![Token::BeginObject, Token::EndObject]);
        assert_eq!(
            NameArray.decode(&mut stream),
            Err(CodecError::Malformed(Malformed::UnexpectedToken {
                expected: TokenKind::BeginArray,
                found: TokenKind::BeginObject,
            }))
        );
    }

    #[test]
    fn missing_title_is_malformed() {
        let mut stream = TokenBuffer::from_tokens(vec![
            Token::BeginArray,
            Token::Str("978-0321356680".into()),
            Token::EndArray,
        ]);
        assert_eq!(
            NameArray.decode(&mut stream),
            Err(CodecError::Malformed(Malformed::UnexpectedToken {
                expected: TokenKind::Str,
                found: TokenKind::EndArray,
            }))
        );
    }
}
