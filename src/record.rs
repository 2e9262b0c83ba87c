//! Row representation shared by the parser and the writer.
//!
//! A [`Header`] is parsed once and shared by every [`Record`] through an
//! `Arc`, so a record only owns its own field values.

use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::RowError;

/// Ordered column names taken from the first CSV record.
///
/// Duplicate names are accepted. Each distinct name keeps the position of
/// its first occurrence and takes its value from its last occurrence, so a
/// record built from a header with duplicates has fewer keys than columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    /// `(name index, value index)` for every distinct name, in output order.
    columns: Vec<(usize, usize)>,
}

impl Header {
    /// Build a header from the raw column names.
    pub fn new(names: Vec<String>) -> Self {
        let columns = {
            let mut slot_of: HashMap<&str, usize> = HashMap::with_capacity(names.len());
            let mut columns: Vec<(usize, usize)> = Vec::with_capacity(names.len());
            for (idx, name) in names.iter().enumerate() {
                match slot_of.get(name.as_str()) {
                    Some(&slot) => columns[slot].1 = idx,
                    None => {
                        slot_of.insert(name.as_str(), columns.len());
                        columns.push((idx, idx));
                    }
                }
            }
            columns
        };

        Self { names, columns }
    }

    /// Number of columns a data row must have.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in input order, duplicates included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct keys a record built from this header carries.
    pub fn effective_len(&self) -> usize {
        self.columns.len()
    }

    pub fn has_duplicates(&self) -> bool {
        self.columns.len() != self.names.len()
    }

    /// Names that occur more than once, each reported once, in first-occurrence order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(name_idx, _)| {
                let name = &self.names[*name_idx];
                self.names.iter().filter(|n| *n == name).count() > 1
            })
            .map(|(name_idx, _)| self.names[*name_idx].as_str())
            .collect()
    }

    fn keys(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns
            .iter()
            .map(|&(name_idx, value_idx)| (self.names[name_idx].as_str(), value_idx))
    }
}

/// One data row keyed by the header's column names.
///
/// A record always holds exactly one field per header column; rows with a
/// different field count are rejected by [`Record::from_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    header: Arc<Header>,
    fields: Vec<String>,
}

impl Record {
    /// Pair `fields` with the columns of `header` by position.
    pub fn from_fields(header: &Arc<Header>, fields: Vec<String>) -> Result<Self, RowError> {
        if fields.len() != header.len() {
            return Err(RowError::ColumnCount {
                expected: header.len(),
                found: fields.len(),
            });
        }

        Ok(Self {
            header: Arc::clone(header),
            fields,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Value for `name`, honouring last-duplicate-wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.header
            .keys()
            .find(|(key, _)| *key == name)
            .map(|(_, value_idx)| self.fields[value_idx].as_str())
    }

    /// Key/value pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.header
            .keys()
            .map(|(key, value_idx)| (key, self.fields[value_idx].as_str()))
    }

    /// Number of keys, which is less than the column count when the header has duplicates.
    pub fn len(&self) -> usize {
        self.header.effective_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
