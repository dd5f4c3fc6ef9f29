//! Layout quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Group count | Number of independent clusters |
//! | Event count | Events across all groups |
//! | Max columns | Widest group |
//! | Avg columns | Mean column count per group |
//! | Peak overlap | Most events active at one instant in any group |
//! | Excess columns | Σ (column count − peak overlap of the group) |
//!
//! Peak overlap is the lower bound on columns for a group (the clique
//! number of its interval graph). Excess columns measure how far the greedy
//! packing lands from that bound; it is `0` for most real calendars.

use crate::models::LayoutGroup;

/// Aggregate statistics over a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// Number of groups.
    pub group_count: usize,
    /// Total number of laid-out events.
    pub event_count: usize,
    /// Largest column count of any group.
    pub max_column_count: usize,
    /// Mean column count per group (0.0 for an empty layout).
    pub avg_column_count: f64,
    /// Largest number of simultaneously active events in any group.
    pub peak_overlap: usize,
    /// Columns opened beyond each group's peak overlap, summed.
    pub excess_columns: usize,
}

impl LayoutSummary {
    /// Computes the summary of a finished layout.
    pub fn calculate(groups: &[LayoutGroup<'_>]) -> Self {
        let group_count = groups.len();
        let event_count = groups.iter().map(LayoutGroup::len).sum();
        let max_column_count = groups.iter().map(|g| g.column_count).max().unwrap_or(0);
        let total_columns: usize = groups.iter().map(|g| g.column_count).sum();

        let mut peak_overlap = 0;
        let mut excess_columns = 0;
        for group in groups {
            let peak = group_peak_overlap(group);
            peak_overlap = peak_overlap.max(peak);
            excess_columns += group.column_count.saturating_sub(peak);
        }

        let avg_column_count = if group_count > 0 {
            total_columns as f64 / group_count as f64
        } else {
            0.0
        };

        Self {
            group_count,
            event_count,
            max_column_count,
            avg_column_count,
            peak_overlap,
            excess_columns,
        }
    }
}

/// Maximum number of events active at one instant within a group.
///
/// Sweep over endpoints; ends sort before starts at the same coordinate
/// (half-open). Zero-length events occupy a column but no time, so a
/// non-empty group always reports at least 1.
pub fn group_peak_overlap(group: &LayoutGroup<'_>) -> usize {
    let mut points: Vec<(f64, i32)> = group
        .events()
        .filter(|e| e.end > e.start)
        .flat_map(|e| [(e.start, 1), (e.end, -1)])
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut active: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in points {
        active += delta;
        peak = peak.max(active);
    }

    let peak = peak as usize;
    if group.is_empty() {
        0
    } else {
        peak.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::process_events;
    use crate::models::Event;

    #[test]
    fn test_empty_layout() {
        let summary = LayoutSummary::calculate(&[]);
        assert_eq!(summary.group_count, 0);
        assert_eq!(summary.event_count, 0);
        assert_eq!(summary.max_column_count, 0);
        assert_eq!(summary.avg_column_count, 0.0);
        assert_eq!(summary.peak_overlap, 0);
        assert_eq!(summary.excess_columns, 0);
    }

    #[test]
    fn test_summary_of_two_groups() {
        let events = vec![
            Event::new("1", 0.0, 3.0),
            Event::new("2", 1.0, 4.0),
            Event::new("3", 2.0, 5.0),
            Event::new("4", 6.0, 8.0),
            Event::new("5", 7.0, 9.0),
            Event::new("6", 8.0, 10.0),
        ];
        let groups = process_events(&events);
        let summary = LayoutSummary::calculate(&groups);

        assert_eq!(summary.group_count, 2);
        assert_eq!(summary.event_count, 6);
        assert_eq!(summary.max_column_count, 3);
        assert!((summary.avg_column_count - 2.5).abs() < 1e-12);
        assert_eq!(summary.peak_overlap, 3);
        assert_eq!(summary.excess_columns, 0);
    }

    #[test]
    fn test_touching_events_do_not_overlap() {
        let events = vec![
            Event::new("a", 0.0, 2.0),
            Event::new("b", 1.0, 2.0),
            Event::new("c", 2.0, 3.0),
            Event::new("d", 1.5, 3.0),
        ];
        let groups = process_events(&events);
        assert_eq!(groups.len(), 1);
        assert_eq!(group_peak_overlap(&groups[0]), 3);
    }

    #[test]
    fn test_zero_length_group_counts_one() {
        let events = vec![Event::new("instant", 1.0, 1.0)];
        let groups = process_events(&events);
        assert_eq!(group_peak_overlap(&groups[0]), 1);
        assert_eq!(LayoutSummary::calculate(&groups).excess_columns, 0);
    }
}
