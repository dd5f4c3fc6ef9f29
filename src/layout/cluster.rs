//! Overlap clustering.
//!
//! # Algorithm
//!
//! 1. Sort events by start ascending, ties by end descending (longest first).
//! 2. Scan left to right, keeping the running span of the current cluster.
//! 3. An event that overlaps the running span (not just the previous event)
//!    joins the cluster and extends it; any other event closes the cluster
//!    and seeds a new one.
//!
//! Overlap is half-open, so chaining is transitive: `[0,2)`, `[1,3)`, `[2,4)`
//! form one cluster even though the first and last never touch.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.

use std::cmp::Ordering;

use crate::models::{Event, Span};

/// A maximal run of overlap-connected events.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a> {
    span: Span,
    events: Vec<&'a Event>,
}

impl<'a> Cluster<'a> {
    fn seed(event: &'a Event) -> Self {
        Self {
            span: event.span(),
            events: vec![event],
        }
    }

    fn absorb(&mut self, event: &'a Event) {
        self.span = self.span.union(&event.span());
        self.events.push(event);
    }

    /// Min start / max end over the member events.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Member events in sorted order.
    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    /// Number of member events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always `false` for clusters built by [`cluster_events`].
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Layout order: start ascending, then end descending.
pub fn layout_order(a: &Event, b: &Event) -> Ordering {
    a.start
        .total_cmp(&b.start)
        .then_with(|| b.end.total_cmp(&a.end))
}

/// Sorts events into layout order without touching the input.
///
/// The sort is stable, so events with identical intervals keep their
/// input order.
pub fn sort_events(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| layout_order(a, b));
    sorted
}

/// Groups time-sorted events into clusters.
///
/// Expects `events` in [`layout_order`]; the clusters come back in the
/// same order and cover every event exactly once.
pub fn cluster_events<'a>(events: &[&'a Event]) -> Vec<Cluster<'a>> {
    let mut clusters: Vec<Cluster<'a>> = Vec::new();

    for &event in events {
        match clusters.last_mut() {
            Some(current) if current.span.overlaps(&event.span()) => current.absorb(event),
            _ => clusters.push(Cluster::seed(event)),
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: &str, start: f64, end: f64) -> Event {
        Event::new(id, start, end)
    }

    fn ids<'a>(cluster: &Cluster<'a>) -> Vec<&'a str> {
        cluster.events().iter().map(|&e| e.id.as_str()).collect()
    }

    #[test]
    fn test_sort_longest_first_on_tie() {
        let events = vec![ev("short", 1.0, 2.0), ev("late", 3.0, 4.0), ev("long", 1.0, 5.0)];
        let sorted: Vec<&str> = sort_events(&events).into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(sorted, vec!["long", "short", "late"]);
    }

    #[test]
    fn test_sort_is_stable_for_identical_intervals() {
        let events = vec![ev("x", 0.0, 1.0), ev("y", 0.0, 1.0), ev("z", 0.0, 1.0)];
        let sorted: Vec<&str> = sort_events(&events).into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(sorted, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(cluster_events(&[]).is_empty());
    }

    #[test]
    fn test_single_event() {
        let events = vec![ev("a", 1.0, 2.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].span(), Span::new(1.0, 2.0));
        assert_eq!(clusters[0].len(), 1);
    }

    #[test]
    fn test_touching_events_are_separate() {
        let events = vec![ev("a", 0.0, 1.0), ev("b", 1.0, 2.0), ev("c", 2.0, 3.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 3);
    }

    #[test]
    fn test_chained_overlap_is_one_cluster() {
        let events = vec![ev("a", 0.0, 2.0), ev("b", 1.0, 3.0), ev("c", 2.0, 4.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].span(), Span::new(0.0, 4.0));
        assert_eq!(ids(&clusters[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_overlap_checked_against_running_span() {
        // "c" misses "b" but still falls inside the span opened by "a".
        let events = vec![ev("a", 0.0, 10.0), ev("b", 1.0, 2.0), ev("c", 5.0, 6.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 1);
        assert_eq!(ids(&clusters[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let events = vec![ev("late", 6.0, 8.0), ev("b", 1.0, 4.0), ev("a", 0.0, 3.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), vec!["a", "b"]);
        assert_eq!(ids(&clusters[1]), vec!["late"]);
    }

    #[test]
    fn test_zero_length_events_are_singletons() {
        let events = vec![ev("a", 1.0, 1.0), ev("b", 1.0, 1.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_zero_length_event_inside_straddling_event() {
        let events = vec![ev("day", 0.0, 10.0), ev("ping", 5.0, 5.0)];
        let clusters = cluster_events(&sort_events(&events));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 2);
    }
}
