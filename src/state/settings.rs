// Startup settings persisted in localStorage.
use serde::{Deserialize, Serialize};

use super::grid::GridVariant;

pub const SETTINGS_KEY: &str = "gt_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridVariant,
    pub show_video: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridVariant::Fine,
            show_video: true,
        }
    }
}

impl Settings {
    /// Parses a stored blob; anything unreadable falls back to defaults.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed settings: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// A `grid` query parameter wins over the stored variant for this page load.
    pub fn with_query_override(mut self, grid_param: Option<&str>) -> Self {
        if let Some(v) = grid_param.and_then(GridVariant::parse) {
            self.grid = v;
        }
        self
    }

    pub fn load() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let stored = win
            .local_storage()
            .ok()
            .flatten()
            .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten());
        let grid_param = win
            .location()
            .search()
            .ok()
            .and_then(|q| web_sys::UrlSearchParams::new_with_str(&q).ok())
            .and_then(|params| params.get("grid"));
        Self::from_stored(stored.as_deref()).with_query_override(grid_param.as_deref())
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    report_write(store.set_item(SETTINGS_KEY, &s));
                }
            }
        }
    }
}

/// Quota or private-mode failures only cost persistence; log and carry on.
fn report_write<E: std::fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not save settings: {e:?}");
            false
        }
    }
}
