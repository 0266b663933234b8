pub mod grid;
pub mod settings;

pub use grid::GridConfig;
pub use settings::Settings;
