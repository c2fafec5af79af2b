//! Dedupe record - every full name issued this session

use rustc_hash::{FxHashMap, FxHashSet};

/// Map from first name to the last names already issued with it.
///
/// A (first, last) pair appears at most once. The record only grows
/// during normal use; `clear` exists for the self-test.
#[derive(Clone, Debug, Default)]
pub struct DedupeRecord {
    by_first: FxHashMap<String, FxHashSet<String>>,
    len: usize,
}

impl DedupeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this exact full name has been issued
    pub fn contains(&self, first: &str, last: &str) -> bool {
        self.by_first
            .get(first)
            .is_some_and(|lasts| lasts.contains(last))
    }

    /// True if any full name with this first name has been issued
    pub fn contains_first(&self, first: &str) -> bool {
        self.by_first.contains_key(first)
    }

    /// Last names issued with `first`, in no particular order
    pub fn last_names<'a>(&'a self, first: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_first
            .get(first)
            .into_iter()
            .flat_map(|lasts| lasts.iter().map(String::as_str))
    }

    /// Record a full name. Returns false if it was already present.
    pub fn record(&mut self, first: &str, last: &str) -> bool {
        let inserted = self
            .by_first
            .entry(first.to_string())
            .or_default()
            .insert(last.to_string());
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Number of full names recorded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.by_first.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_contains() {
        let mut record = DedupeRecord::new();
        assert!(record.is_empty());
        assert!(record.record("Jane", "Doe"));
        assert!(record.contains("Jane", "Doe"));
        assert!(!record.contains("Jane", "Smith"));
        assert!(record.contains_first("Jane"));
        assert!(!record.contains_first("John"));
    }

    #[test]
    fn test_duplicate_not_counted() {
        let mut record = DedupeRecord::new();
        assert!(record.record("Jane", "Doe"));
        assert!(!record.record("Jane", "Doe"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_same_first_keeps_both_lasts() {
        let mut record = DedupeRecord::new();
        record.record("Jane", "Doe");
        record.record("Jane", "Smith");
        let mut lasts: Vec<&str> = record.last_names("Jane").collect();
        lasts.sort();
        assert_eq!(lasts, vec!["Doe", "Smith"]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut record = DedupeRecord::new();
        record.record("John", "Doe");
        record.clear();
        assert!(record.is_empty());
        assert!(!record.contains("John", "Doe"));
        assert_eq!(record.last_names("John").count(), 0);
    }
}
