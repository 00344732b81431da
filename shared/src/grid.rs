use crate::raid::{Mode, RaidRecord, SelectionKey};
use crate::selection::{ExpansionState, SelectionError, SelectionState};
use crate::view::{self, CheckState, GroupRow};

/// The two stores behind one gold grid instance.
///
/// The catalog is not owned: it is passed to every operation that needs it,
/// and `initialize` must be re-run whenever it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoldGrid {
    pub selection: SelectionState,
    pub expansion: ExpansionState,
}

impl GoldGrid {
    pub fn new(catalog: &[RaidRecord]) -> Self {
        let mut grid = Self::default();
        grid.initialize(catalog);
        grid
    }

    pub fn initialize(&mut self, catalog: &[RaidRecord]) {
        self.selection.initialize(catalog);
    }

    pub fn toggle_gate(
        &mut self,
        catalog: &[RaidRecord],
        path: &str,
        mode: Mode,
        index: usize,
    ) -> Result<bool, SelectionError> {
        self.selection.toggle_gate(catalog, path, mode, index)
    }

    pub fn toggle_all(&mut self, catalog: &[RaidRecord], path: &str, mode: Mode) -> bool {
        self.selection.toggle_all(catalog, path, mode)
    }

    pub fn toggle_expanded(&mut self, path: &str, mode: Mode) -> bool {
        self.expansion.toggle(path, mode)
    }

    pub fn check_state(&self, path: &str, mode: Mode) -> CheckState {
        CheckState::of(self.selection.gates(&SelectionKey::new(path, mode)))
    }

    pub fn is_expanded(&self, path: &str, mode: Mode) -> bool {
        self.expansion.is_expanded(&SelectionKey::new(path, mode))
    }

    pub fn total_gold(&self, catalog: &[RaidRecord]) -> u64 {
        view::total_gold(&self.selection, catalog)
    }

    pub fn rows(&self, catalog: &[RaidRecord]) -> Vec<GroupRow> {
        view::build_rows(catalog, &self.selection, &self.expansion)
    }
}
