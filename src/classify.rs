use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::event::Event;

/// Categories that make up the combined feed. Everything else still gets
/// its own per-type feed.
pub const COMBINED_TYPES: &[&str] = &[
    "community-day",
    "raid-day",
    "raid-hour",
    "pokemon-spotlight-hour",
    "event",
];

/// Exact partition of the input by `event_type`, each group ordered
/// ascending by start. The sort is stable, so equal starts keep their
/// upstream order.
pub fn group_by_type(events: &[Event]) -> BTreeMap<String, Vec<Event>> {
    let mut groups = events.iter().fold(
        BTreeMap::<String, Vec<Event>>::new(),
        |mut groups, event| {
            groups
                .entry(event.event_type.clone())
                .or_default()
                .push(event.clone());
            groups
        },
    );

    for group in groups.values_mut() {
        group.sort_by_key(|event| event.start);
    }

    groups
}

/// Every event whose `[start, end]` interval contains `now`.
pub fn current(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut current = events
        .iter()
        .filter(|event| event.start <= now && now <= event.end)
        .cloned()
        .collect::<Vec<_>>();

    current.sort_by_key(|event| event.start);
    current
}

/// At most one event: the earliest-starting one happening right now.
pub fn current_headline(events: &[Event], now: DateTime<Utc>) -> Option<Event> {
    current(events, now).into_iter().next()
}

pub fn upcoming(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut upcoming = events
        .iter()
        .filter(|event| event.start > now)
        .cloned()
        .collect::<Vec<_>>();

    upcoming.sort_by_key(|event| event.start);
    upcoming
}

pub fn combined(events: &[Event]) -> Vec<Event> {
    let mut combined = events
        .iter()
        .filter(|event| COMBINED_TYPES.contains(&event.event_type.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    combined.sort_by_key(|event| event.start);
    combined
}
