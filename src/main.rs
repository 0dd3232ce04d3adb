use std::env;
use std::process;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use pogo_rss::classify;
use pogo_rss::cli::{self, Args};
use pogo_rss::error::FeedError;
use pogo_rss::event::Event;
use pogo_rss::publish::{feed_path, publish, sanitize_type, Artifact};
use pogo_rss::rss::Channel;
use pogo_rss::source::EventSource;

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    let args = cli::parse(env::args().skip(1).collect());

    // One wall-clock read per run; every filter and phrase uses this value.
    let now = Utc::now();

    if let Err(err) = run(&args, now).await {
        error!("{err}");
        process::exit(1);
    }
}

async fn run(args: &Args, now: DateTime<Utc>) -> Result<(), FeedError> {
    let source = EventSource::new(args.source_url.clone(), args.timeout)?;
    let raw_events = source.fetch().await?;
    let total = raw_events.len();

    let mut events = Vec::with_capacity(total);
    for raw in raw_events {
        match Event::from_raw(raw) {
            Ok(event) => events.push(event),
            Err(err) => warn!("dropping record: {err}"),
        }
    }

    if events.len() < total {
        warn!("kept {} of {total} records", events.len());
    }

    let groups = classify::group_by_type(&events);
    info!(
        "found event types: {}",
        groups.keys().cloned().collect::<Vec<_>>().join(", ")
    );

    let mut artifacts = Vec::new();

    for (event_type, group) in &groups {
        artifacts.push(Artifact {
            path: feed_path(&args.output_dir, &sanitize_type(event_type)),
            content: Channel {
                title: format!("Pokémon GO Events - {event_type}"),
                description: format!("All events with eventType \"{event_type}\"."),
                items: group,
            }
            .to_rss(now),
        });
    }

    let combined = classify::combined(&events);
    artifacts.push(Artifact {
        path: feed_path(&args.output_dir, "combined"),
        content: Channel {
            title: "Pokémon GO Events - Combined".to_string(),
            description: "Major events across all headline categories.".to_string(),
            items: &combined,
        }
        .to_rss(now),
    });

    let current = classify::current(&events, now);
    artifacts.push(Artifact {
        path: feed_path(&args.output_dir, "current"),
        content: Channel {
            title: "Pokémon GO Events - Current".to_string(),
            description: "Events happening right now.".to_string(),
            items: &current,
        }
        .to_rss(now),
    });

    let headline = classify::current_headline(&events, now)
        .into_iter()
        .collect::<Vec<_>>();
    artifacts.push(Artifact {
        path: feed_path(&args.output_dir, "now"),
        content: Channel {
            title: "Pokémon GO Events - Now".to_string(),
            description: "The earliest-starting event happening right now.".to_string(),
            items: &headline,
        }
        .to_rss(now),
    });

    let upcoming = classify::upcoming(&events, now);
    artifacts.push(Artifact {
        path: feed_path(&args.output_dir, "upcoming"),
        content: Channel {
            title: "Pokémon GO Events - Upcoming".to_string(),
            description: "Events that have not started yet.".to_string(),
            items: &upcoming,
        }
        .to_rss(now),
    });

    for artifact in &artifacts {
        publish(artifact)?;
    }

    info!(
        "wrote {} feeds to {}",
        artifacts.len(),
        args.output_dir.display()
    );

    Ok(())
}
