pub mod api;
pub mod poll;

pub use api::VIDEO_FEED_PATH;
pub use poll::{POLL_INTERVAL_MS, Poller};
