//! Playlist entries and the reconciliation core.
//!
//! This module owns the entry record, the sort strategy and the merge
//! algorithm that keeps an external playlist aligned with a directory scan.

mod model;
mod reconcile;
mod sort;

pub use model::PlaylistEntry;
pub use reconcile::reconcile;
pub use sort::{SortMode, SortSpec, sort_entries};
