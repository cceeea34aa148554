//! Goodbye messages keyed by the logical module that is asking.

use std::collections::BTreeMap;

/// Message printed on a normal exit when no module entry matches.
pub const DEFAULT_FAREWELL: &str = "Thanks for using!";
/// Message printed on an error exit when none is given.
pub const DEFAULT_ERROR_REPORT: &str = "Something went wrong!";

/// Read-only mapping from module id to farewell message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarewellTable {
    entries: BTreeMap<String, String>,
}

impl FarewellTable {
    #[must_use]
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Message for `module`, or `fallback` when there is no module or no
    /// entry for it.
    #[must_use]
    pub fn lookup<'a>(&'a self, module: Option<&str>, fallback: &'a str) -> &'a str {
        module
            .and_then(|m| self.entries.get(m))
            .map_or(fallback, String::as_str)
    }

    #[must_use]
    pub fn get(&self, module: &str) -> Option<&str> {
        self.entries.get(module).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FarewellTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FarewellTable {
        [("grade_calculator", "Thanks for using the grade calculator!")]
            .into_iter()
            .collect()
    }

    #[test]
    fn lookup_prefers_module_entry() {
        assert_eq!(
            table().lookup(Some("grade_calculator"), DEFAULT_FAREWELL),
            "Thanks for using the grade calculator!"
        );
    }

    #[test]
    fn lookup_falls_back() {
        let table = table();
        assert_eq!(table.lookup(Some("unknown"), "Bye"), "Bye");
        assert_eq!(table.lookup(None, DEFAULT_FAREWELL), DEFAULT_FAREWELL);
        assert_eq!(
            FarewellTable::default().lookup(Some("grade_calculator"), "Bye"),
            "Bye"
        );
    }

    #[test]
    fn accessors() {
        let table = table();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.iter().count(), 1);
    }
}
