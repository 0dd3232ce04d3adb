pub mod classify;
pub mod cli;
pub mod error;
pub mod event;
pub mod publish;
pub mod rss;
pub mod source;

pub use error::{FeedError, ValidationError};
pub use event::{Event, RawEvent};
pub use rss::Channel;
pub use source::EventSource;
