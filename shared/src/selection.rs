use std::collections::HashMap;

use thiserror::Error;

use crate::raid::{Mode, RaidRecord, SelectionKey, gate_count_of};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("gate {index} out of range for {path} ({mode:?}, {gates} gates)")]
    GateOutOfRange {
        path: String,
        mode: Mode,
        index: usize,
        gates: usize,
    },
}

/// Completed gates per `(raid, mode)`. Entries live for the owner's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    entries: HashMap<SelectionKey, Vec<bool>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every catalog raid to all-unchecked under its own mode.
    ///
    /// Keys of raids that have left the catalog are kept; they resolve to no
    /// raid when totals are computed and contribute nothing.
    pub fn initialize(&mut self, catalog: &[RaidRecord]) {
        for raid in catalog {
            self.entries
                .insert(raid.key(), vec![false; raid.gate_count()]);
        }
    }

    pub fn gates(&self, key: &SelectionKey) -> Option<&[bool]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SelectionKey, &[bool])> {
        self.entries.iter().map(|(key, gates)| (key, gates.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flip one gate and return its new value.
    ///
    /// A missing entry is created all-false, sized from the catalog, before
    /// flipping. An index past the end is rejected and leaves the store as is.
    pub fn toggle_gate(
        &mut self,
        catalog: &[RaidRecord],
        path: &str,
        mode: Mode,
        index: usize,
    ) -> Result<bool, SelectionError> {
        let key = SelectionKey::new(path, mode);
        let gates = match self.entries.get(&key) {
            Some(existing) => existing.len(),
            None => gate_count_of(catalog, path),
        };
        if index >= gates {
            return Err(SelectionError::GateOutOfRange {
                path: path.to_string(),
                mode,
                index,
                gates,
            });
        }

        let entry = self.entries.entry(key).or_insert_with(|| vec![false; gates]);
        entry[index] = !entry[index];
        Ok(entry[index])
    }

    /// Check every gate unless all are already checked, in which case clear them.
    /// Returns the value written.
    ///
    /// Toggling normal mode rewrites the normal entry at full catalog length
    /// and also pushes the new value into an existing hard entry for the same
    /// path. Toggling hard mode never touches the normal entry.
    pub fn toggle_all(&mut self, catalog: &[RaidRecord], path: &str, mode: Mode) -> bool {
        let key = SelectionKey::new(path, mode);
        let all_checked = self
            .entries
            .get(&key)
            .is_none_or(|gates| gates.iter().all(|checked| *checked));
        let value = !all_checked;

        match mode {
            Mode::Normal => {
                let hard_key = SelectionKey::new(path, Mode::Hard);
                if let Some(hard) = self.entries.get_mut(&hard_key) {
                    hard.fill(value);
                }
                self.entries
                    .insert(key, vec![value; gate_count_of(catalog, path)]);
            }
            Mode::Hard => {
                self.entries.entry(key).or_default().fill(value);
            }
        }
        value
    }
}

/// Which `(raid, mode)` gate lists are expanded. Absent means collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashMap<SelectionKey, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, path: &str, mode: Mode) -> bool {
        let open = self.open.entry(SelectionKey::new(path, mode)).or_insert(false);
        *open = !*open;
        *open
    }

    pub fn is_expanded(&self, key: &SelectionKey) -> bool {
        self.open.get(key).copied().unwrap_or(false)
    }
}
