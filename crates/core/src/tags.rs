//! Tag editing for draft forms.
//!
//! Tags are normalized (trimmed, lower-cased) on entry and kept unique in
//! insertion order. There is no size or character-set limit.

use serde::{Deserialize, Serialize};

/// Key that confirms the pending tag input.
pub const CONFIRM_KEY: &str = "Enter";

/// Normalize raw tag input. Returns `None` for blank input.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// An ordered, de-duplicated list of normalized tags.
///
/// Deserialization goes through [`TagList::from_raw`], so lists arriving
/// from clients are normalized the same way as typed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagList(Vec<String>);

impl From<Vec<String>> for TagList {
    fn from(raw: Vec<String>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<TagList> for Vec<String> {
    fn from(tags: TagList) -> Self {
        tags.0
    }
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list by adding each raw value in turn.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for value in raw {
            list.add(value.as_ref());
        }
        list
    }

    /// Add a tag. Returns `true` if the list changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove the entry equal to `tag`. Returns `true` if one was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.0.iter().any(|t| t.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// A tag list plus the text currently typed into its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEditor {
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub tags: TagList,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, text: &str) {
        self.pending = text.to_string();
    }

    /// Commit the pending input. The input is cleared only when a tag was
    /// added; duplicates and blank input leave it as typed.
    pub fn confirm(&mut self) -> bool {
        let added = self.tags.add(&self.pending);
        if added {
            self.pending.clear();
        }
        added
    }

    /// Handle a key press while the tag input has focus. Returns `true` when
    /// the key was consumed (the confirm key), whether or not a tag was added.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == CONFIRM_KEY {
            self.confirm();
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.tags.clear();
    }
}
