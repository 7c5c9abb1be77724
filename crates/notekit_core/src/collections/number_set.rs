use std::collections::BTreeSet;

/// Deduplicated set of integers.
///
/// Iteration visits each element exactly once in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSet {
    values: BTreeSet<i64>,
}

impl NumberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`; returns `false` when it was already present.
    pub fn add(&mut self, value: i64) -> bool {
        self.values.insert(value)
    }

    pub fn has(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Removes `value`; returns `false` when it was absent.
    pub fn delete(&mut self, value: i64) -> bool {
        self.values.remove(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl FromIterator<i64> for NumberSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumberSet;

    #[test]
    fn seed_with_duplicates_collapses_to_unique_values() {
        let set: NumberSet = [1, 2, 2, 3, 4, 4, 5].into_iter().collect();
        assert_eq!(set.len(), 5);
        assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn add_and_delete_are_noops_when_redundant() {
        let mut set: NumberSet = [1, 2, 3].into_iter().collect();
        assert!(!set.add(2));
        assert!(set.add(6));
        assert!(set.delete(2));
        assert!(!set.delete(2));
        assert!(set.has(3));
        assert_eq!(set.to_vec(), vec![1, 3, 6]);
    }
}
