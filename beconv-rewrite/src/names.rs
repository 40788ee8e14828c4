use indexmap::IndexSet;

/// Bare declaration names discovered in one file, in declaration order.
///
/// Names are unique: inserting a name twice keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: IndexSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bare name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names sorted by descending length; equal lengths keep declaration order.
    ///
    /// Matching in this order means a name never claims a prefix of a longer one.
    pub fn longest_first(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
