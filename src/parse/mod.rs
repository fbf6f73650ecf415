// src/parse/mod.rs

use serde::Deserialize;
use std::{fmt, str::FromStr};

pub mod quoted;
pub mod split;

pub use quoted::parse_quoted;
pub use split::parse_split;

/// One data line keyed by the header row, fields in header order.
///
/// Only positions that actually had a value are present; a short line leaves
/// its trailing keys absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Zip `values` positionally onto `headers`.
    ///
    /// Headers are not deduplicated: a repeated header overwrites the earlier
    /// value in place, and when the repeat has no value of its own the key is
    /// dropped.
    pub fn from_row<S: AsRef<str>>(headers: &[String], values: &[S]) -> Self {
        let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let slot = fields.iter().position(|(k, _)| k == header);
            match (values.get(i), slot) {
                (Some(v), Some(at)) => fields[at].1 = v.as_ref().to_string(),
                (Some(v), None) => fields.push((header.clone(), v.as_ref().to_string())),
                (None, Some(at)) => {
                    fields.remove(at);
                }
                (None, None) => {}
            }
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// How the CSV text is split into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Plain comma split, no quoting. A comma inside a value mis-splits.
    #[default]
    Split,
    /// RFC 4180 quoting via the `csv` crate.
    Quoted,
}

impl ParseMode {
    pub fn parse(self, text: &str) -> Vec<Record> {
        match self {
            ParseMode::Split => parse_split(text),
            ParseMode::Quoted => parse_quoted(text),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "split" => Ok(ParseMode::Split),
            "quoted" => Ok(ParseMode::Quoted),
            other => Err(format!("unknown parse mode {:?}", other)),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Split => f.write_str("split"),
            ParseMode::Quoted => f.write_str("quoted"),
        }
    }
}

/// Parse with the default (split) mode.
pub fn parse_csv(text: &str) -> Vec<Record> {
    ParseMode::default().parse(text)
}
