use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::pb::Student;

impl Student {
    pub fn new(name: impl Into<String>, age: u64, height: f64) -> Self {
        Self {
            name: name.into(),
            age,
            height,
            books: vec![],
        }
    }

    /// append to the repeated `books` field, keeping insertion order
    pub fn add_book(&mut self, book: impl Into<String>) {
        self.books.push(book.into());
    }

    pub fn books_size(&self) -> usize {
        self.books.len()
    }

    /// Parse a record from YAML. Values of the wrong type are rejected rather
    /// than coerced, e.g. `age: 8.5`, `height: tall` or `name: 5`.
    pub fn from_yaml(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("Failed to parse student record")
    }
}

/// Only a YAML string is text; numbers and booleans are not stringified.
pub(crate) fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    into_text(Value::deserialize(deserializer)?)
}

pub(crate) fn texts<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(into_text)
        .collect()
}

fn into_text<E: serde::de::Error>(value: Value) -> std::result::Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(E::custom(format!("expected a string, found {:?}", other))),
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name = {}; age = {}, ", self.name, self.age)?;
        if self.height.is_nan() {
            write!(f, "height = nan")?;
        } else {
            write!(f, "height = {:.2}", self.height)?;
        }
        for book in &self.books {
            write!(f, "\nbook = {}", book)?;
        }
        Ok(())
    }
}
