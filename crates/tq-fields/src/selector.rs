//! Requested field names.

use std::collections::BTreeSet;

/// The set of field names a function object was asked to publish.
///
/// Duplicates collapse; iteration is in name order so that logging and
/// writes are reproducible. Names are not checked against a catalog here:
/// which names are valid depends on the model family active at execute time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    names: BTreeSet<String>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        selection.configure(names);
        selection
    }

    /// Replace the whole selection.
    pub fn configure<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
