//! Event layout domain models.
//!
//! Input events, the half-open spans they occupy, and the per-cluster
//! layout records handed to a renderer.
//!
//! # Domain Mappings
//!
//! | u-event-layout | Calendar day view | Gantt lane | Log timeline |
//! |----------------|-------------------|------------|--------------|
//! | Event | Appointment | Bar | Request |
//! | LayoutGroup | Overlap block | Swimlane block | Burst |
//! | Column | Side-by-side slot | Sub-row | Track |

mod event;
mod group;
mod span;

pub use event::Event;
pub use group::{EventLayout, LayoutGroup};
pub use span::Span;
