//! Flat numeric buffer interface.
//!
//! For FFI and wasm hosts that exchange plain `f64` arrays instead of
//! structured values. Event ids are numeric on this boundary.
//!
//! # Layout
//!
//! Input, [`EVENT_FIELDS`] values per event:
//!
//! ```text
//! [id, start, end] [id, start, end] ...
//! ```
//!
//! Output, per group a [`LAYOUT_GROUP_FIELDS`] header followed by
//! `item_count` records of [`EVENT_LAYOUT_FIELDS`] values:
//!
//! ```text
//! [start, end, column_count, item_count]
//!     [top, bottom, height, column, id, start, end] × item_count
//! ```

use crate::error::{LayoutError, LayoutResult};
use crate::layout::process_events;
use crate::models::{Event, LayoutGroup};

/// Values per input event.
pub const EVENT_FIELDS: usize = 3;
/// Values per group header.
pub const LAYOUT_GROUP_FIELDS: usize = 4;
/// Values per event layout record.
pub const EVENT_LAYOUT_FIELDS: usize = 7;

/// Decodes `[id, start, end]*` into events.
///
/// Ids are rendered with `f64`'s `Display`, so `7.0` becomes `"7"`.
/// Every value must be finite.
pub fn decode_events(buffer: &[f64]) -> LayoutResult<Vec<Event>> {
    if buffer.len() % EVENT_FIELDS != 0 {
        return Err(LayoutError::InvalidLength {
            len: buffer.len(),
            fields: EVENT_FIELDS,
        });
    }

    if let Some(index) = buffer.iter().position(|v| !v.is_finite()) {
        return Err(LayoutError::NonFiniteValue { index });
    }

    Ok(buffer
        .chunks_exact(EVENT_FIELDS)
        .map(|chunk| Event::new(chunk[0].to_string(), chunk[1], chunk[2]))
        .collect())
}

/// Number of values [`encode_groups`] will produce.
pub fn encoded_len(groups: &[LayoutGroup<'_>]) -> usize {
    groups
        .iter()
        .map(|g| LAYOUT_GROUP_FIELDS + g.items.len() * EVENT_LAYOUT_FIELDS)
        .sum()
}

/// Encodes groups into the flat output layout.
///
/// Fails if any event id does not parse as a number.
pub fn encode_groups(groups: &[LayoutGroup<'_>]) -> LayoutResult<Vec<f64>> {
    let mut buffer = Vec::with_capacity(encoded_len(groups));

    for group in groups {
        buffer.extend_from_slice(&[
            group.start,
            group.end,
            group.column_count as f64,
            group.items.len() as f64,
        ]);

        for item in &group.items {
            let id = numeric_id(&item.event.id)?;
            buffer.extend_from_slice(&[
                item.top,
                item.bottom,
                item.height,
                item.column as f64,
                id,
                item.event.start,
                item.event.end,
            ]);
        }
    }

    Ok(buffer)
}

fn numeric_id(id: &str) -> LayoutResult<f64> {
    id.parse::<f64>()
        .map_err(|_| LayoutError::NonNumericId { id: id.to_string() })
}

/// Decodes, lays out, and re-encodes a flat event buffer.
pub fn process_flat(buffer: &[f64]) -> LayoutResult<Vec<f64>> {
    let events = decode_events(buffer)?;
    let groups = process_events(&events);
    encode_groups(&groups)
}
