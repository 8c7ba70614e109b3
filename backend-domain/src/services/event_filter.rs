// Client-side style text filter over the in-memory event list

use crate::entities::Event;

/// Case-insensitive substring match against any of the five text fields.
/// A blank query returns the input unchanged; matching is stable, the
/// original order is preserved.
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let term = query.trim();
    if term.is_empty() {
        return events.to_vec();
    }
    let lower = term.to_lowercase();
    events
        .iter()
        .filter(|event| {
            [
                &event.name,
                &event.location,
                &event.date,
                &event.time,
                &event.description,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&lower))
        })
        .cloned()
        .collect()
}
