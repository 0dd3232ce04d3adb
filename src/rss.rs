use chrono::{DateTime, Utc};

use crate::event::Event;

/// Fixed channel link of the upstream event listing.
pub const CHANNEL_LINK: &str = "https://leekduck.com/events/";

pub struct Channel<'a> {
    pub title: String,
    pub description: String,
    pub items: &'a [Event],
}

impl Channel<'_> {
    /// Renders a complete RSS 2.0 document. Items appear in the order given;
    /// ordering is the classifier's job.
    #[must_use]
    pub fn to_rss(&self, now: DateTime<Utc>) -> String {
        let mut rss = String::new();

        rss.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        rss.push_str("<rss version=\"2.0\">\n");
        rss.push_str("  <channel>\n");
        rss.push_str(&format!(
            "    <title>{}</title>\n",
            escape_xml(&self.title)
        ));
        rss.push_str(&format!("    <link>{CHANNEL_LINK}</link>\n"));
        rss.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&self.description)
        ));

        for item in self.items {
            rss.push_str(&item.to_rss_item(now));
        }

        rss.push_str("  </channel>\n");
        rss.push_str("</rss>\n");

        rss
    }
}

impl Event {
    #[must_use]
    pub fn to_rss_item(&self, now: DateTime<Utc>) -> String {
        let description = format!("{} – {}", self.event_type, relative_phrase(self, now));

        let mut item = String::new();
        item.push_str("    <item>\n");
        item.push_str(&format!(
            "      <title>{}</title>\n",
            escape_xml(&self.name)
        ));
        item.push_str(&format!("      <link>{}</link>\n", escape_xml(&self.link)));
        item.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(&description)
        ));
        item.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            format_rss_date(self.start)
        ));
        item.push_str(&format!(
            "      <guid isPermaLink=\"false\">{}</guid>\n",
            escape_xml(&self.id)
        ));

        if let Some(image_url) = &self.image_url {
            item.push_str(&format!(
                "      <enclosure url=\"{}\" type=\"image/png\" />\n",
                escape_xml(image_url)
            ));
        }

        item.push_str("    </item>\n");
        item
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }

    escaped
}

/// RFC 2822 style date, always in GMT. Event timestamps are carried as UTC
/// internally, so no offset arithmetic happens here.
pub fn format_rss_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn relative_phrase(event: &Event, now: DateTime<Utc>) -> String {
    if event.start <= now && now <= event.end {
        let ends_in = rounded_hours(now, event.end);
        return format!("Happening now – ends in ~{ends_in}h");
    }

    // Signed, so events that already ended read "Starts in -N days".
    match rounded_days(now, event.start) {
        0 => "Starts today".to_string(),
        1 => "Starts tomorrow".to_string(),
        days => format!("Starts in {days} days"),
    }
}

fn rounded_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    ((to - from).num_seconds() as f64 / 3600.0).round() as i64
}

fn rounded_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    ((to - from).num_seconds() as f64 / 86_400.0).round() as i64
}
