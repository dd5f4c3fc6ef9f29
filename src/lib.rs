//! Day-view event layout for the U-Engine ecosystem.
//!
//! Turns a flat list of time-interval events into render-ready columns:
//! overlapping events are clustered, each cluster is packed into as few
//! columns as the greedy gap-reusing packer finds, and every event gets
//! `top`/`bottom`/`height` as fractions of its cluster's span.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Event`, `Span`, `LayoutGroup`, `EventLayout`
//! - **`layout`**: The pipeline: clustering, column packing, geometry, summary
//! - **`validation`**: Input integrity checks (duplicate IDs, inverted or
//!   non-finite intervals)
//! - **`codec`**: Flat `f64` buffer interface for FFI/wasm hosts
//!
//! # Architecture
//!
//! Pure, synchronous, allocation-light. No I/O, no shared state; inputs are
//! borrowed and never mutated, and outputs refer back to them.

pub mod codec;
mod error;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::{LayoutError, LayoutResult};
pub use layout::process_events;
pub use models::{Event, EventLayout, LayoutGroup, Span};
