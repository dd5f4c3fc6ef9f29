//! Event model.
//!
//! An event is the input unit of a layout: an identifier plus a
//! [start, end) interval. Zero-length events (`start == end`) are valid.
//!
//! # Contract
//! `end >= start` is expected but not checked. Inverted events flow through
//! the layout unchanged and may produce negative geometry; use
//! [`crate::validation::validate_events`] to reject them up front.

use serde::{Deserialize, Serialize};

use super::Span;

/// A time-interval event to be laid out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Caller-supplied identifier, unique within one layout call.
    pub id: String,
    /// Interval start (inclusive).
    pub start: f64,
    /// Interval end (exclusive).
    pub end: f64,
}

impl Event {
    /// Creates a new event.
    pub fn new(id: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// The event's interval.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Duration (`end - start`).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two events overlap (half-open).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.span().overlaps(&other.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_new() {
        let e = Event::new("standup", 9.0, 9.25);
        assert_eq!(e.id, "standup");
        assert_eq!(e.duration(), 0.25);
        assert_eq!(e.span(), Span::new(9.0, 9.25));
    }

    #[test]
    fn test_event_overlap() {
        let a = Event::new("a", 0.0, 2.0);
        let b = Event::new("b", 1.0, 3.0);
        let c = Event::new("c", 2.0, 4.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&c));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_event_deserializes_from_js_shape() {
        let e: Event = serde_json::from_str(r#"{"id":"1","start":0,"end":1.5}"#).unwrap();
        assert_eq!(e, Event::new("1", 0.0, 1.5));
    }
}
