//! Normalized geometry for a packed cluster.
//!
//! Pure function of a [`ColumnPacker`]: each event's vertical placement is
//! expressed as a fraction of the cluster span. A zero span (a lone
//! zero-length event) maps every fraction to `0.0` rather than NaN.

use super::packer::ColumnPacker;
use crate::models::{EventLayout, LayoutGroup};

/// `value / total`, or `0.0` when `total` is exactly zero.
#[inline]
fn fraction(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total
    }
}

/// Builds the output group for a packed cluster.
///
/// Items are column-major: all of column 0 (chronological), then column 1.
pub fn layout_group<'a>(packer: &ColumnPacker<'a>) -> LayoutGroup<'a> {
    let span = packer.span();
    let total = span.length();

    let items = packer
        .columns()
        .iter()
        .enumerate()
        .flat_map(|(column, events)| {
            events.iter().map(move |&event| EventLayout {
                event,
                column,
                top: fraction(event.start - span.start, total),
                bottom: fraction(span.end - event.end, total),
                height: fraction(event.end - event.start, total),
            })
        })
        .collect();

    LayoutGroup {
        start: span.start,
        end: span.end,
        column_count: packer.column_count(),
        items,
    }
}
