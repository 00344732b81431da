use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::raid::{Mode, RaidRecord, find_raid};
use crate::selection::{ExpansionState, SelectionState};

/// Tri-state of a raid's aggregate checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// An existing but empty gate list is `Checked` (every gate is done).
    pub fn of(gates: Option<&[bool]>) -> Self {
        let Some(gates) = gates else {
            return Self::Unchecked;
        };
        if gates.iter().all(|checked| *checked) {
            Self::Checked
        } else if gates.iter().any(|checked| *checked) {
            Self::Indeterminate
        } else {
            Self::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

/// Raids sharing one label, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidGroup<'a> {
    pub label: &'a str,
    pub raids: Vec<&'a RaidRecord>,
}

/// Partition the catalog by label. Groups appear in first-seen order.
pub fn group_by_label(catalog: &[RaidRecord]) -> Vec<RaidGroup<'_>> {
    let mut groups: Vec<RaidGroup<'_>> = Vec::new();
    let mut index_by_label: HashMap<&str, usize> = HashMap::new();
    for raid in catalog {
        let idx = *index_by_label.entry(raid.label.as_str()).or_insert_with(|| {
            groups.push(RaidGroup {
                label: raid.label.as_str(),
                raids: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].raids.push(raid);
    }
    groups
}

/// Sum of gold over every checked gate. Keys whose path is not in the
/// catalog contribute nothing.
pub fn total_gold(selection: &SelectionState, catalog: &[RaidRecord]) -> u64 {
    selection
        .iter()
        .filter_map(|(key, gates)| {
            let raid = find_raid(catalog, &key.path)?;
            Some(
                raid.gate_gold
                    .iter()
                    .zip(gates)
                    .filter(|(_, checked)| **checked)
                    .map(|(gold, _)| u64::from(*gold))
                    .sum::<u64>(),
            )
        })
        .sum()
}

pub fn gate_label(index: usize) -> String {
    format!("Gate {}", index + 1)
}

/// One gate checkbox in the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateCell {
    pub index: usize,
    pub label: String,
    pub gold: u32,
    pub checked: bool,
}

/// One raid entry inside a group row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidRow {
    pub path: String,
    pub mode: Mode,
    pub state: CheckState,
    pub expanded: bool,
    pub gates: Vec<GateCell>,
}

/// A rendered group: its label and every raid that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub label: String,
    pub raids: Vec<RaidRow>,
}

pub fn build_rows(
    catalog: &[RaidRecord],
    selection: &SelectionState,
    expansion: &ExpansionState,
) -> Vec<GroupRow> {
    group_by_label(catalog)
        .into_iter()
        .map(|group| GroupRow {
            label: group.label.to_string(),
            raids: group
                .raids
                .into_iter()
                .map(|raid| raid_row(raid, selection, expansion))
                .collect(),
        })
        .collect()
}

fn raid_row(raid: &RaidRecord, selection: &SelectionState, expansion: &ExpansionState) -> RaidRow {
    let key = raid.key();
    let checks = selection.gates(&key);
    let gates = raid
        .gate_gold
        .iter()
        .enumerate()
        .map(|(index, gold)| GateCell {
            index,
            label: gate_label(index),
            gold: *gold,
            checked: checks.and_then(|c| c.get(index)).copied().unwrap_or(false),
        })
        .collect();
    RaidRow {
        path: raid.path.clone(),
        mode: key.mode,
        state: CheckState::of(checks),
        expanded: expansion.is_expanded(&key),
        gates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_state_follows_gate_values() {
        assert_eq!(CheckState::of(None), CheckState::Unchecked);
        assert_eq!(CheckState::of(Some(&[false, false][..])), CheckState::Unchecked);
        assert_eq!(CheckState::of(Some(&[true, false][..])), CheckState::Indeterminate);
        assert_eq!(CheckState::of(Some(&[true, true][..])), CheckState::Checked);
        assert_eq!(CheckState::of(Some(&[][..])), CheckState::Checked);
    }

    #[test]
    fn group_by_label_keeps_first_seen_order() {
        let catalog = vec![
            RaidRecord::new("L1", "a", vec![1]),
            RaidRecord::new("L2", "b", vec![2]),
            RaidRecord::new("L1", "c", vec![3]),
        ];
        let groups = group_by_label(&catalog);
        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["L1", "L2"]);
        let l1: Vec<&str> = groups[0].raids.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(l1, vec!["a", "c"]);
        assert_eq!(groups[1].raids.len(), 1);
    }

    #[test]
    fn group_by_label_of_empty_catalog_is_empty() {
        assert!(group_by_label(&[]).is_empty());
    }

    #[test]
    fn total_gold_sums_checked_gates() {
        let catalog = vec![
            RaidRecord::new("A", "a", vec![100, 200]),
            RaidRecord::new("B", "b", vec![50]),
        ];
        let mut selection = SelectionState::new();
        selection.initialize(&catalog);
        selection.toggle_gate(&catalog, "a", Mode::Normal, 0).unwrap();
        selection.toggle_gate(&catalog, "b", Mode::Normal, 0).unwrap();

        assert_eq!(total_gold(&selection, &catalog), 150);
    }

    #[test]
    fn total_gold_ignores_raids_missing_from_catalog() {
        let catalog = vec![RaidRecord::new("A", "a", vec![100, 200])];
        let mut selection = SelectionState::new();
        selection.initialize(&catalog);
        selection.toggle_all(&catalog, "a", Mode::Normal);
        assert_eq!(total_gold(&selection, &catalog), 300);

        assert_eq!(total_gold(&selection, &[]), 0);
        let other = vec![RaidRecord::new("B", "b", vec![5])];
        assert_eq!(total_gold(&selection, &other), 0);
    }

    #[test]
    fn total_gold_does_not_confuse_paths_containing_mode_words() {
        let catalog = vec![
            RaidRecord::new("Normal Dungeon", "/raids/normal-dungeon-hard", vec![10]),
            RaidRecord::new("Normal Dungeon", "/raids/normal-dungeon", vec![1]),
        ];
        let mut selection = SelectionState::new();
        selection.initialize(&catalog);
        selection
            .toggle_gate(&catalog, "/raids/normal-dungeon-hard", Mode::Hard, 0)
            .unwrap();
        assert_eq!(total_gold(&selection, &catalog), 10);
    }

    #[test]
    fn build_rows_exposes_gate_labels_and_state() {
        let catalog = vec![
            RaidRecord::new("Valtan", "/raids/valtan-normal", vec![500, 700]),
            RaidRecord::new("Valtan", "/raids/valtan-hard", vec![700, 1100]),
        ];
        let mut selection = SelectionState::new();
        selection.initialize(&catalog);
        selection
            .toggle_gate(&catalog, "/raids/valtan-hard", Mode::Hard, 1)
            .unwrap();
        let mut expansion = ExpansionState::new();
        expansion.toggle("/raids/valtan-hard", Mode::Hard);

        let rows = build_rows(&catalog, &selection, &expansion);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Valtan");

        let normal = &rows[0].raids[0];
        assert_eq!(normal.mode, Mode::Normal);
        assert_eq!(normal.state, CheckState::Unchecked);
        assert!(!normal.expanded);

        let hard = &rows[0].raids[1];
        assert_eq!(hard.mode, Mode::Hard);
        assert_eq!(hard.state, CheckState::Indeterminate);
        assert!(hard.expanded);
        assert_eq!(
            hard.gates,
            vec![
                GateCell {
                    index: 0,
                    label: "Gate 1".to_string(),
                    gold: 700,
                    checked: false,
                },
                GateCell {
                    index: 1,
                    label: "Gate 2".to_string(),
                    gold: 1100,
                    checked: true,
                },
            ]
        );
    }
}
