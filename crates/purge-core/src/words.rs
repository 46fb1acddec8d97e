//! Word list and needle matching
//!
//! Needles are literal substrings. A needle does not respect word boundaries:
//! `"alcohol"` also catches `"alcoholic"`, and `"ass "` catches `"class "`.
//! Authors of a word list embed spaces in a needle (`" ass "`) when a partial
//! word must not match.

/// First needle found in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The needle that matched, as stored in the list
    pub needle: &'a str,
    /// Byte offset of the match in the lowercased text
    pub position: usize,
}

/// Ordered, read-only list of needles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    needles: Vec<String>,
}

impl WordList {
    /// Build a word list. Needles are lowercased; empty needles are dropped.
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = needles
            .into_iter()
            .map(|n| n.as_ref().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { needles }
    }

    /// A list that matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.needles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Needles in list order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.needles.iter().map(String::as_str)
    }

    /// Find the first needle, in list order, contained in `text`.
    ///
    /// The text is lowercased before comparison.
    pub fn find(&self, text: &str) -> Option<Match<'_>> {
        if self.needles.is_empty() {
            return None;
        }
        let haystack = text.to_lowercase();
        self.needles.iter().find_map(|needle| {
            haystack.find(needle.as_str()).map(|position| Match {
                needle: needle.as_str(),
                position,
            })
        })
    }

    /// Whether any needle occurs in `text`
    pub fn is_naughty(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}
