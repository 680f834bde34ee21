use std::collections::HashMap;

use crate::{catalog::COMMIT_TRANSLATIONS, error::TableError};

/// One reviewed commit: where the message came from and what it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Short commit hash. Documentation only, never used for matching.
    pub id: String,
    /// Exact first line as it appears in history.
    pub original: String,
    /// Conventional-commit replacement for `original`.
    pub reformatted: String,
}

impl TranslationEntry {
    pub fn new(
        id: impl Into<String>,
        original: impl Into<String>,
        reformatted: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            original: original.into(),
            reformatted: reformatted.into(),
        }
    }
}

/// Ordered, validated, read-only list of translations.
///
/// Lookups are keyed by the original first line. Several entries may share an
/// original as long as they agree on the replacement; they then behave as a
/// single rule. Entries that share an original but disagree are rejected by
/// [`TranslationTable::new`] instead of letting one silently win.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
    // original -> index of its first entry
    index: HashMap<String, usize>,
}

impl TranslationTable {
    /// Validates `entries` and builds the lookup index.
    ///
    /// # Errors
    ///
    /// * [`TableError::EmptyOriginal`] if an entry has an empty original.
    /// * [`TableError::ConflictingDuplicate`] if two entries share an original
    ///   but map it to different replacements.
    pub fn new(entries: Vec<TranslationEntry>) -> Result<Self, TableError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if entry.original.is_empty() {
                return Err(TableError::EmptyOriginal {
                    id: entry.id.clone(),
                });
            }

            match index.get(&entry.original) {
                Some(&first) => {
                    let prev = &entries[first];
                    if prev.reformatted != entry.reformatted {
                        return Err(TableError::ConflictingDuplicate {
                            original: entry.original.clone(),
                            first_id: prev.id.clone(),
                            first: prev.reformatted.clone(),
                            second_id: entry.id.clone(),
                            second: entry.reformatted.clone(),
                        });
                    }
                }
                None => {
                    index.insert(entry.original.clone(), i);
                }
            }
        }

        Ok(Self { entries, index })
    }

    /// Loads the compiled-in translations.
    pub fn builtin() -> Result<Self, TableError> {
        let entries = COMMIT_TRANSLATIONS
            .iter()
            .map(|(id, original, reformatted)| TranslationEntry::new(*id, *original, *reformatted))
            .collect();
        Self::new(entries)
    }

    /// Every entry in definition order, duplicates included.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Unique `(original, reformatted)` pairs in first-definition order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, e)| self.index.get(&e.original) == Some(i))
            .map(|(_, e)| (e.original.as_str(), e.reformatted.as_str()))
    }

    /// Replacement for an exact original first line, if any.
    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&i| self.entries[i].reformatted.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
