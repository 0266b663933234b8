pub mod app;
pub mod direction_pad;
pub mod grid_canvas;
pub mod stats_panel;
pub mod video_feed;

pub use app::App;
