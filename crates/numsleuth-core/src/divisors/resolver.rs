//! Factor → label resolution.
//!
//! A query resolves to the label of the first divisor, scanned from largest
//! to smallest, that has an entry in the [`Mapping`]. Queries with no mapped
//! divisor resolve to their own decimal form.
use crate::divisors::sequence::divisors;
use crate::error::ConfigError;
use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Immutable factor → label table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    labels: HashMap<u64, CompactString>,
}

impl Mapping {
    /// An empty mapping; every query resolves to its decimal form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference mapping:
    /// `{7 → mere, 8 → pere, 3 → capsuni, 21 → gutui}`.
    pub fn reference() -> Self {
        [(7, "mere"), (8, "pere"), (3, "capsuni"), (21, "gutui")]
            .into_iter()
            .collect()
    }

    /// Parse a `FACTOR=LABEL` entry as given on the command line.
    pub fn parse_entry(entry: &str) -> Result<(u64, CompactString), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidMapping {
            entry: entry.to_string(),
            reason: reason.to_string(),
        };

        let (factor, label) = entry
            .split_once('=')
            .ok_or_else(|| invalid("expected FACTOR=LABEL"))?;
        let factor: u64 = factor
            .trim()
            .parse()
            .map_err(|_| invalid("factor is not a positive integer"))?;
        if factor == 0 {
            return Err(invalid("factor must be at least 1"));
        }
        Ok((factor, CompactString::new(label)))
    }

    /// Build a mapping from `FACTOR=LABEL` entries. Later entries win.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = Self::new();
        for entry in entries {
            let (factor, label) = Self::parse_entry(entry.as_ref())?;
            mapping.labels.insert(factor, label);
        }
        Ok(mapping)
    }

    /// Reject factor 0, which can never divide a valid query.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.labels.get(&0) {
            Some(label) => Err(ConfigError::InvalidMapping {
                entry: format!("0={label}"),
                reason: "factor must be at least 1".to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, factor: u64) -> Option<&CompactString> {
        self.labels.get(&factor)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve a single query.
    pub fn resolve(&self, query: u64) -> CompactString {
        if self.labels.is_empty() {
            return query.to_compact_string();
        }
        divisors(query)
            .into_iter()
            .find_map(|d| self.labels.get(&d).cloned())
            .unwrap_or_else(|| query.to_compact_string())
    }
}

impl<S: Into<CompactString>> FromIterator<(u64, S)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (u64, S)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

/// A closed, validated range of queries `start..=end` with `start >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct QueryRange {
    start: u64,
    end: u64,
}

impl QueryRange {
    pub const REFERENCE_START: u64 = 1;
    pub const REFERENCE_END: u64 = 10_000;

    pub fn new(start: u64, end: u64) -> Result<Self, ConfigError> {
        if start == 0 || start > end {
            return Err(ConfigError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// `1..=10000`.
    pub fn reference() -> Self {
        Self {
            start: Self::REFERENCE_START,
            end: Self::REFERENCE_END,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of queries in the range; at least 1.
    pub fn query_count(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl Default for QueryRange {
    fn default() -> Self {
        Self::reference()
    }
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: u64,
    end: u64,
}

impl TryFrom<RawRange> for QueryRange {
    type Error = ConfigError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<QueryRange> for RawRange {
    fn from(range: QueryRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Resolve every query in `range`, in ascending query order.
pub fn solve(range: QueryRange, mapping: &Mapping) -> Vec<CompactString> {
    let out: Vec<CompactString> = range.iter().map(|q| mapping.resolve(q)).collect();
    tracing::debug!(
        "Resolved {} queries in {}..={} against {} mapped factors",
        out.len(),
        range.start,
        range.end,
        mapping.len()
    );
    out
}
