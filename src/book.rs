// SPDX-License-Identifier: Apache-2.0

//! Domain entities: the catalog record and its two author shapes.

use core::fmt;

/// A book catalog record, generic over the author shape `A`.
///
/// Two shapes occur on the wire: `Book<String>`, where an author is just a
/// name (the joined and name-array formats), and `Book<Author>`, where an
/// author carries a numeric id as well (the paired-array and nested-object
/// formats). Keeping the shapes distinct avoids an id field that is only
/// sometimes meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book<A> {
    /// Opaque ISBN-like identifier. The codecs never validate its format.
    pub isbn: String,
    /// Opaque title.
    pub title: String,
    /// Authors in document order. Ordering is significant and survives an
    /// encode/decode round trip unchanged.
    pub authors: Vec<A>,
}

impl<A> Book<A> {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, authors: Vec<A>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            authors,
        }
    }
}

impl<A> Default for Book<A> {
    fn default() -> Self {
        Self {
            isbn: String::new(),
            title: String::new(),
            authors: Vec::new(),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Book<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]\nWritten by:", self.title, self.isbn)?;
        for author in &self.authors {
            write!(f, "\n  >> {author}")?;
        }
        Ok(())
    }
}

/// An author with a stable numeric id alongside the name.
///
/// Equality is structural: both id and name must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Author {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)
    }
}
