//! Half-open interval model.
//!
//! Coordinates are plain `f64` values on a caller-defined axis (minutes
//! since midnight, epoch milliseconds, pixels). The layout never interprets
//! them as calendar time.

use serde::{Deserialize, Serialize};

/// An interval [start, end).
///
/// Half-open: includes start, excludes end. Two spans that merely touch
/// (`a.end == b.start`) do not overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Span {
    /// Interval start (inclusive).
    pub start: f64,
    /// Interval end (exclusive).
    pub end: f64,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The identity of [`Span::union`]: contains nothing, absorbs anything.
    pub fn empty() -> Self {
        Self {
            start: f64::INFINITY,
            end: f64::NEG_INFINITY,
        }
    }

    /// Length of this span. Negative for inverted spans.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two spans overlap (half-open).
    ///
    /// A zero-length span never overlaps a span that starts or ends at the
    /// same instant, including itself.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this span.
    #[inline]
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
