use std::collections::HashMap;

/// A case-sensitive name → entry mapping.
///
/// Tables are either created empty with [`SymbolTable::root`] or copied from
/// a parent with [`SymbolTable::derive`]. A derived table never consults its
/// parent again: lookups only see local entries, which start out as a copy.
#[derive(Debug, Clone)]
pub struct SymbolTable<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<T: Clone> SymbolTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a table seeded with a copy of every entry in `parent`.
    ///
    /// # Example
    /// ```
    /// use condex::interpreter::symbols::SymbolTable;
    ///
    /// let mut parent = SymbolTable::root();
    /// parent.put("speed", 1);
    ///
    /// let mut child = SymbolTable::derive(&parent);
    /// child.put("speed", 2);
    /// child.put("depth", 3);
    ///
    /// assert_eq!(parent.get("speed"), Some(&1));
    /// assert_eq!(parent.get("depth"), None);
    /// assert_eq!(child.get("speed"), Some(&2));
    /// ```
    #[must_use]
    pub fn derive(parent: &Self) -> Self {
        parent.clone()
    }

    /// Looks up an entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Inserts or replaces an entry, returning the entry it shadowed.
    pub fn put(&mut self, name: impl Into<String>, entry: T) -> Option<T> {
        self.entries.insert(name.into(), entry)
    }

    /// Whether an entry with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over entry names in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entry names in ascending order.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys = self.entries.keys().cloned().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
