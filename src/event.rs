use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::ValidationError;

/// Record as served by the upstream feed. Nothing about the shape is
/// guaranteed, so every field is optional and read defensively.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub name: Option<String>,
    #[serde(rename = "eventType")]
    pub event_type: Option<String>,
    // The feed has used both spellings for the identifier over time.
    #[serde(rename = "eventID", alias = "id")]
    pub event_id: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub event_type: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub link: String,
    pub image_url: Option<String>,
}

impl Event {
    pub fn from_raw(raw: RawEvent) -> Result<Event, ValidationError> {
        let name = match raw.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationError::MissingName),
        };

        let start = match raw.start {
            Some(start) => parse_timestamp(&start)?,
            None => return Err(ValidationError::MissingStart),
        };

        // Only `name` and `start` are structurally mandatory; an event
        // without a usable end is treated as instantaneous.
        let end = match raw.end {
            Some(end) => parse_timestamp(&end).unwrap_or(start),
            None => start,
        };

        if start > end {
            return Err(ValidationError::StartAfterEnd { start, end });
        }

        let event_type = match raw.event_type {
            Some(kind) if !kind.is_empty() => kind,
            _ => "unknown".to_string(),
        };

        Ok(Event {
            id: raw.event_id.unwrap_or_default(),
            name,
            event_type,
            start,
            end,
            link: raw.link.unwrap_or_default(),
            image_url: raw.image.filter(|image| !image.is_empty()),
        })
    }
}

/// The upstream serves both full RFC 3339 timestamps and naive ones without
/// an offset. Naive timestamps are read as UTC, the same clock the pubDate
/// formatter writes out.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::BadTimestamp(s.to_string()))
}
