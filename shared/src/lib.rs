pub mod catalog;
pub mod colors;
pub mod grid;
pub mod raid;
pub mod reset;
pub mod selection;
pub mod view;

pub use catalog::{CatalogError, default_catalog, group_slug, parse_catalog};
pub use colors::group_accent;
pub use grid::GoldGrid;
pub use raid::{Mode, RaidRecord, SelectionKey};
pub use selection::{ExpansionState, SelectionError, SelectionState};
pub use view::{CheckState, GateCell, GroupRow, RaidGroup, RaidRow, group_by_label, total_gold};
