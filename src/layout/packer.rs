//! Column packing with free-rectangle reuse.
//!
//! Assigns each event of a cluster to a column such that no two events in
//! the same column overlap. Instead of only checking whether a column's
//! *last* event has ended, the packer keeps a list of idle rectangles
//! (time span × column) and fills them first, so gaps left next to long
//! events are reclaimed by later short ones.
//!
//! # Algorithm (per event, in layout order)
//!
//! 1. First-fit over the free-rectangle list; a rectangle fits when it
//!    covers the event. The consumed rectangle is removed, shrunk, or split.
//! 2. On a miss, rebuild the rectangle list from the column contents over
//!    the cluster span *including* the incoming event, then retry.
//! 3. Still no fit: open a new column. Its idle tail is not recorded; the
//!    next rebuild discovers it.
//! 4. Extend the running span.
//!
//! # Complexity
//! A rebuild is O(events × columns); worst case one rebuild per event.

use log::{debug, trace};

use super::cluster::Cluster;
use crate::models::{Event, Span};

/// An idle time span within an opened column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    /// Idle interval.
    pub span: Span,
    /// Column the interval belongs to.
    pub column: usize,
}

impl FreeRect {
    fn new(start: f64, end: f64, column: usize) -> Self {
        Self {
            span: Span::new(start, end),
            column,
        }
    }
}

/// Per-cluster packing state.
///
/// Feed events with [`ColumnPacker::insert`] in layout order (start
/// ascending, longest first), or build one from a [`Cluster`] with
/// [`ColumnPacker::pack`].
#[derive(Debug, Clone)]
pub struct ColumnPacker<'a> {
    span: Span,
    columns: Vec<Vec<&'a Event>>,
    free: Vec<FreeRect>,
}

impl<'a> ColumnPacker<'a> {
    /// Creates an empty packer.
    pub fn new() -> Self {
        Self {
            span: Span::empty(),
            columns: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Packs every event of a cluster.
    pub fn pack(cluster: &Cluster<'a>) -> Self {
        let mut packer = Self::new();
        for &event in cluster.events() {
            packer.insert(event);
        }
        packer
    }

    /// Places an event and returns its column index.
    pub fn insert(&mut self, event: &'a Event) -> usize {
        let target = event.span();

        let column = match self.place_in_free(event) {
            Some(column) => column,
            None => {
                let bound = self.span.union(&target);
                self.free = self.scan_gaps(bound);
                trace!(
                    "event {}: rebuilt {} free rects over [{}, {})",
                    event.id,
                    self.free.len(),
                    bound.start,
                    bound.end
                );

                match self.place_in_free(event) {
                    Some(column) => column,
                    None => {
                        self.columns.push(vec![event]);
                        debug!(
                            "event {}: opened column {}",
                            event.id,
                            self.columns.len() - 1
                        );
                        self.columns.len() - 1
                    }
                }
            }
        };

        self.span = self.span.union(&target);
        column
    }

    /// First-fit placement into the current free-rectangle list.
    fn place_in_free(&mut self, event: &'a Event) -> Option<usize> {
        let target = event.span();
        let index = self.free.iter().position(|r| r.span.covers(&target))?;
        let rect = self.free[index];

        self.columns[rect.column].push(event);

        let starts_flush = rect.span.start == target.start;
        let ends_flush = rect.span.end == target.end;
        match (starts_flush, ends_flush) {
            (true, true) => {
                self.free.remove(index);
            }
            (true, false) => self.free[index].span.start = target.end,
            (false, true) => self.free[index].span.end = target.start,
            (false, false) => {
                self.free[index].span.end = target.start;
                self.free.insert(
                    index + 1,
                    FreeRect::new(target.end, rect.span.end, rect.column),
                );
            }
        }

        Some(rect.column)
    }

    /// Idle spans of every column within `bound`, column-major.
    fn scan_gaps(&self, bound: Span) -> Vec<FreeRect> {
        let mut gaps = Vec::new();

        for (column, events) in self.columns.iter().enumerate() {
            let mut cursor = bound.start;
            for event in events {
                if event.start > cursor {
                    gaps.push(FreeRect::new(cursor, event.start, column));
                }
                cursor = cursor.max(event.end);
            }
            if cursor < bound.end {
                gaps.push(FreeRect::new(cursor, bound.end, column));
            }
        }

        gaps
    }

    /// Running span (min start / max end) of the inserted events.
    ///
    /// [`Span::empty`] before the first insert.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Events per column, chronological within each column.
    pub fn columns(&self) -> &[Vec<&'a Event>] {
        &self.columns
    }

    /// Number of opened columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The current free-rectangle working list.
    pub fn free_rects(&self) -> &[FreeRect] {
        &self.free
    }
}

impl Default for ColumnPacker<'_> {
    fn default() -> Self {
        Self::new()
    }
}
