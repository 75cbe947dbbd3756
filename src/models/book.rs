//! Book model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Book identifier (not checked for uniqueness)
    pub id: String,
    /// Title of the book
    #[serde(rename = "book_name")]
    pub name: String,
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
        }
    }

    /// Decode a book from a request body.
    ///
    /// Only the first JSON value is read and anything after it is ignored.
    /// `null` yields an empty book, and object keys match field names
    /// regardless of case.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        let value = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Err(serde::de::Error::custom("EOF")))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => {
                let folded: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| (key.to_lowercase(), value))
                    .collect();
                serde_json::from_value(Value::Object(folded))
            }
            other => serde_json::from_value(other),
        }
    }
}

/// Query string carrying the target book id for update/delete
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}

/// Books the catalog starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "The India Story", "Bimal Jalal"),
        Book::new("2", "Wealth of Nations", "Adam Smith"),
        Book::new("3", "Malgudi day", "R K Narayan"),
        Book::new("5", "jungle_book", "akshay savant"),
        Book::new("6", "animal farm", "George Orwell"),
        Book::new("7", "war and peace", "leo toistoy"),
        Book::new("8", "politics", "aristole"),
    ]
}
