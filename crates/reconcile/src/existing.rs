use std::collections::HashMap;

/// Tracks already in the catalog, as `title → id`.
///
/// Iteration follows insertion order, which is also the order deletions are
/// reported in. Inserting a title that is already present replaces its id in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingTracks {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}
impl ExistingTracks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous id when the title was already known.
    pub fn insert(&mut self, title: impl Into<String>, id: impl Into<String>) -> Option<String> {
        let title = title.into();
        let id = id.into();
        match self.index.get(&title) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, id)),
            None => {
                self.index.insert(title.clone(), self.entries.len());
                self.entries.push((title, id));
                None
            },
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.index.get(title).map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// `(title, id)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(title, id)| (title.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl<T: Into<String>, I: Into<String>> FromIterator<(T, I)> for ExistingTracks {
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut existing = Self::new();
        for (title, id) in iter {
            existing.insert(title, id);
        }
        existing
    }
}
