use indexmap::IndexMap;

/// Category name to product name association.
///
/// Iteration follows insertion order; overwriting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: IndexMap<String, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `category`, returning the previous product name.
    pub fn set(
        &mut self,
        category: impl Into<String>,
        product: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(category.into(), product.into())
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visits every entry in insertion order as `(product, category)`.
    pub fn for_each(&self, mut f: impl FnMut(&str, &str)) {
        for (category, product) in &self.entries {
            f(product, category);
        }
    }

    /// Iterates `(category, product)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(category, product)| (category.as_str(), product.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (category, product) in iter {
            map.set(category, product);
        }
        map
    }
}
