//! Day-view layout pipeline.
//!
//! Clusterer → column packer → geometry. Each stage is usable on its own;
//! [`process_events`] runs all three.
//!
//! # Algorithm
//!
//! 1. Sort events by start ascending, longest first on ties.
//! 2. Split the sorted run into clusters of transitively overlapping events.
//! 3. Pack each cluster into columns, reusing idle gaps before opening a
//!    new column.
//! 4. Express every event's placement as fractions of its cluster span.
//!
//! The packing is greedy, not optimal: column counts stay at or near the
//! peak overlap of each cluster (see [`LayoutSummary`]).
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//!   (interval graphs)

pub mod cluster;
pub mod geometry;
pub mod packer;
mod summary;

pub use cluster::{cluster_events, sort_events, Cluster};
pub use geometry::layout_group;
pub use packer::{ColumnPacker, FreeRect};
pub use summary::{group_peak_overlap, LayoutSummary};

use log::debug;

use crate::models::{Event, LayoutGroup};

/// Lays out events for rendering.
///
/// Returns one [`LayoutGroup`] per cluster in ascending time order. The
/// input is only borrowed; every output item refers back to its event.
///
/// # Example
///
/// ```
/// use u_event_layout::{process_events, Event};
///
/// let events = vec![
///     Event::new("standup", 0.0, 2.0),
///     Event::new("review", 1.0, 3.0),
///     Event::new("lunch", 2.0, 4.0),
/// ];
/// let groups = process_events(&events);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].column_count, 2);
/// assert_eq!((groups[0].start, groups[0].end), (0.0, 4.0));
/// ```
pub fn process_events(events: &[Event]) -> Vec<LayoutGroup<'_>> {
    let sorted = sort_events(events);
    let clusters = cluster_events(&sorted);

    let groups: Vec<LayoutGroup<'_>> = clusters
        .iter()
        .map(|cluster| layout_group(&ColumnPacker::pack(cluster)))
        .collect();

    debug!(
        "laid out {} events into {} groups",
        events.len(),
        groups.len()
    );
    groups
}
