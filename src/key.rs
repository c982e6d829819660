use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Upper-bound sentinel. Sorts after every geohash character, so `prefix + '~'`
/// bounds every completion of `prefix`.
pub const RANGE_SENTINEL: char = '~';

/// A half-open key range `[start, end)` over geohash-sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    pub start: String,
    pub end: String,
}

impl KeyRange {
    #[inline]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Range covering every key that starts with `prefix`.
    pub fn prefix(prefix: &str) -> Self {
        let mut end = String::with_capacity(prefix.len() + 1);
        end.push_str(prefix);
        end.push(RANGE_SENTINEL);
        Self::new(prefix, end)
    }

    /// Whether the upper bound is a sentinel rather than a geohash.
    #[inline]
    pub fn is_open_ended(&self) -> bool {
        self.end.ends_with(RANGE_SENTINEL)
    }

    #[inline]
    pub fn contains<K: Borrow<str> + ?Sized>(&self, key: &K) -> bool {
        let key = key.borrow();
        key >= self.start.as_str() && key < self.end.as_str()
    }

    /// The range as a `[start, end]` pair.
    pub fn as_pair(&self) -> [&str; 2] {
        [self.start.as_str(), self.end.as_str()]
    }
}

impl From<(String, String)> for KeyRange {
    fn from((start, end): (String, String)) -> Self {
        Self { start, end }
    }
}

impl From<(&str, &str)> for KeyRange {
    fn from((start, end): (&str, &str)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Drops exact duplicates, keeping the first occurrence of each range in place.
pub fn dedup_ranges<I>(ranges: I) -> Vec<KeyRange>
where
    I: IntoIterator<Item = KeyRange>,
{
    let mut unique: Vec<KeyRange> = Vec::new();
    for range in ranges {
        if !unique.contains(&range) {
            unique.push(range);
        }
    }
    unique
}
