mod components;
mod model;
mod net;
mod render;
mod state;
mod util;

use components::App;

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);
}

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}
