use serde::{Deserialize, Serialize};

/// Difficulty variant of a raid. Each catalog entry belongs to exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normal,
    Hard,
}

impl Mode {
    /// Token that marks a raid path as belonging to this mode.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Derive the mode embedded in a raid path.
    ///
    /// The path is split on every non-alphanumeric character and a raid is
    /// hard mode iff one of the resulting tokens is `hard`. Substrings inside
    /// a longer word (`hardcore`, `diehard`) do not count.
    pub fn from_path(path: &str) -> Self {
        let hard = path
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| token.eq_ignore_ascii_case(Self::Hard.marker()));
        if hard { Self::Hard } else { Self::Normal }
    }
}

/// One raid encounter definition as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidRecord {
    /// Display group; raids sharing a label render as one row.
    pub label: String,
    /// Unique identifier, also the page path of the raid.
    pub path: String,
    /// Gold awarded per gate, in gate order.
    #[serde(alias = "gateGold")]
    pub gate_gold: Vec<u32>,
}

impl RaidRecord {
    pub fn new(label: impl Into<String>, path: impl Into<String>, gate_gold: Vec<u32>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            gate_gold,
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_path(&self.path)
    }

    pub fn gate_count(&self) -> usize {
        self.gate_gold.len()
    }

    pub fn key(&self) -> SelectionKey {
        SelectionKey::new(self.path.clone(), self.mode())
    }
}

/// Composite `(path, mode)` key for the selection and expansion stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionKey {
    pub path: String,
    pub mode: Mode,
}

impl SelectionKey {
    pub fn new(path: impl Into<String>, mode: Mode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

pub fn find_raid<'a>(catalog: &'a [RaidRecord], path: &str) -> Option<&'a RaidRecord> {
    catalog.iter().find(|raid| raid.path == path)
}

/// Gate count of the raid at `path`, or zero when the catalog does not know it.
pub fn gate_count_of(catalog: &[RaidRecord], path: &str) -> usize {
    find_raid(catalog, path).map_or(0, RaidRecord::gate_count)
}
