//! Layout output model.
//!
//! A [`LayoutGroup`] is one independently laid-out cluster; each
//! [`EventLayout`] places one input event inside it. Geometry is expressed
//! as fractions of the group's span so a renderer can scale it to any
//! pixel height.

use serde::Serialize;

use super::{Event, Span};

/// Placement of a single event within its group.
///
/// `top`, `bottom` and `height` are fractions of the group span:
/// - `top = (event.start - group.start) / span`
/// - `height = (event.end - event.start) / span`
/// - `bottom = (group.end - event.end) / span`
///
/// All three are `0.0` when the group span is zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout<'a> {
    /// The input event this layout refers to.
    pub event: &'a Event,
    /// Zero-based column within the group.
    pub column: usize,
    /// Offset from the group start.
    pub top: f64,
    /// Offset from the group end.
    pub bottom: f64,
    /// Fraction of the group span covered by the event.
    pub height: f64,
}

/// One cluster of overlapping events, laid out in columns.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGroup<'a> {
    /// Earliest start over all member events.
    pub start: f64,
    /// Latest end over all member events.
    pub end: f64,
    /// Number of columns opened for this group.
    pub column_count: usize,
    /// Per-event layouts, column-major (column 0 first, chronological within).
    pub items: Vec<EventLayout<'a>>,
}

impl<'a> LayoutGroup<'a> {
    /// The group's bounding span.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Number of events in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no events.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Layouts assigned to `column`, in chronological order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &EventLayout<'a>> + '_ {
        self.items.iter().filter(move |item| item.column == column)
    }

    /// The member events, in output order.
    pub fn events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.items.iter().map(|item| item.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group(events: &[Event]) -> LayoutGroup<'_> {
        LayoutGroup {
            start: 0.0,
            end: 4.0,
            column_count: 2,
            items: vec![
                EventLayout {
                    event: &events[0],
                    column: 0,
                    top: 0.0,
                    bottom: 0.5,
                    height: 0.5,
                },
                EventLayout {
                    event: &events[1],
                    column: 1,
                    top: 0.25,
                    bottom: 0.25,
                    height: 0.5,
                },
            ],
        }
    }

    #[test]
    fn test_group_accessors() {
        let events = vec![Event::new("a", 0.0, 2.0), Event::new("b", 1.0, 3.0)];
        let group = sample_group(&events);

        assert_eq!(group.span(), Span::new(0.0, 4.0));
        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(group.column(1).count(), 1);
        assert_eq!(group.column(1).next().map(|l| l.event.id.as_str()), Some("b"));
        let ids: Vec<&str> = group.events().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_group_serializes_camel_case() {
        let events = vec![Event::new("a", 0.0, 2.0), Event::new("b", 1.0, 3.0)];
        let json = serde_json::to_value(sample_group(&events)).unwrap();

        assert_eq!(json["columnCount"], 2);
        assert_eq!(json["items"][1]["event"]["id"], "b");
        assert_eq!(json["items"][1]["column"], 1);
        assert_eq!(json["items"][0]["height"], 0.5);
    }
}
