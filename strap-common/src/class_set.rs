//! Ordered class-name sets

/// Insertion-ordered mapping of class name to enabled flag.
///
/// Inserting a name that is already present keeps its original position and
/// overwrites the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    entries: Vec<(String, bool)>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, enabled: bool) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = enabled,
            None => self.entries.push((name, enabled)),
        }
    }

    /// Builder form of [`ClassSet::insert`].
    pub fn with(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.insert(name, enabled);
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, enabled)| n == name && *enabled)
    }

    /// Enabled class names, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(name, enabled)| *enabled && !name.is_empty())
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<(String, bool)> for ClassSet {
    fn extend<T: IntoIterator<Item = (String, bool)>>(&mut self, iter: T) {
        for (name, enabled) in iter {
            self.insert(name, enabled);
        }
    }
}

impl IntoIterator for ClassSet {
    type Item = (String, bool);
    type IntoIter = std::vec::IntoIter<(String, bool)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Join a caller-supplied class string with the enabled names of `set`.
///
/// The caller's classes come first. Blank input contributes nothing.
pub fn class_names(extra: Option<&str>, set: &ClassSet) -> String {
    extra
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .into_iter()
        .chain(set.enabled())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut set = ClassSet::new();
        set.insert("a", true);
        set.insert("b", true);
        set.insert("a", false);
        set.insert("a", true);
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_disabled_entries_skipped() {
        let set = ClassSet::new().with("checkbox", true).with("disabled", false);
        assert_eq!(class_names(None, &set), "checkbox");
        assert!(!set.is_enabled("disabled"));
    }

    #[test]
    fn test_caller_class_first() {
        let set = ClassSet::new().with("checkbox", true).with("has-error", true);
        assert_eq!(class_names(Some("x y"), &set), "x y checkbox has-error");
    }

    #[test]
    fn test_blank_caller_class() {
        let set = ClassSet::new().with("checkbox", true);
        assert_eq!(class_names(Some("   "), &set), "checkbox");
        assert_eq!(class_names(Some(""), &ClassSet::new()), "");
    }

    #[test]
    fn test_extend_merges() {
        let mut set = ClassSet::new().with("checkbox", true);
        set.extend(vec![("checkbox".to_string(), false), ("lg".to_string(), true)]);
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec!["lg"]);
    }
}
