//! Key normalization and duplicate grouping

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalize a key value for comparison: trim surrounding whitespace and
/// lowercase. Display always uses the original value.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A group of values sharing one normalized key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Normalized key shared by the group
    pub normalized: String,
    /// First original value seen for this key
    pub representative: String,
    /// Number of occurrences
    pub count: usize,
}

/// Group raw values by normalized key and keep the keys that occur more than
/// once, in first-appearance order.
pub fn duplicate_groups<'a, I>(values: I) -> Vec<DuplicateGroup>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: IndexMap<String, DuplicateGroup> = IndexMap::new();

    for value in values {
        let normalized = normalize(value);
        groups
            .entry(normalized.clone())
            .and_modify(|g| g.count += 1)
            .or_insert_with(|| DuplicateGroup {
                normalized,
                representative: value.to_string(),
                count: 1,
            });
    }

    groups.into_values().filter(|g| g.count > 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello "), "hello");
        assert_eq!(normalize("ÄPFEL"), "äpfel");
        assert_eq!(normalize("plain"), "plain");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_duplicate_groups_counts_and_order() {
        let values = ["Apple", "cherry", " apple ", "Banana", "APPLE", "banana"];
        let groups = duplicate_groups(values);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].normalized, "apple");
        assert_eq!(groups[0].representative, "Apple");
        assert_eq!(groups[0].count, 3);
        assert_eq!(groups[1].normalized, "banana");
        assert_eq!(groups[1].representative, "Banana");
        assert_eq!(groups[1].count, 2);
    }

    #[test]
    fn test_duplicate_groups_empty_when_all_unique() {
        assert!(duplicate_groups(["a", "b", "c"]).is_empty());
        assert!(duplicate_groups([]).is_empty());
    }
}
