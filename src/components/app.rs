use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    direction_pad::DirectionPad, grid_canvas::GridCanvas, stats_panel::StatsPanel,
    video_feed::VideoFeed,
};
use crate::model::{Direction, ViewAction, ViewState};
use crate::net::{POLL_INTERVAL_MS, Poller};
use crate::state::Settings;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the grid stays fixed for the lifetime of the page.
    let settings = use_state(Settings::load);
    let grid = use_memo((), {
        let variant = settings.grid;
        move |_| variant.config()
    });
    let view = use_reducer(ViewState::default);
    let poller = use_memo((), {
        let dispatcher = view.dispatcher();
        move |_| Poller::new(Callback::from(move |action: ViewAction| dispatcher.dispatch(action)))
    });

    // Immediate refresh, then one per interval until unmount.
    {
        let poller = poller.clone();
        use_effect_with((), move |_| {
            log::info!("polling every {POLL_INTERVAL_MS}ms");
            poller.refresh();
            let tick = {
                let poller = poller.clone();
                Interval::new(POLL_INTERVAL_MS, move || poller.refresh())
            };
            move || drop(tick)
        });
    }

    // Arrow keys / WASD
    {
        let poller = poller.clone();
        use_effect_with((), move |_| {
            let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.repeat() {
                    return;
                }
                if let Some(dir) = Direction::from_key(&e.key()) {
                    e.prevent_default();
                    poller.send_direction(dir);
                }
            }) as Box<dyn FnMut(_)>);
            let window = web_sys::window();
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("keyboard control unavailable");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }
                drop(keydown);
            }
        });
    }

    let on_direction = {
        let poller = poller.clone();
        Callback::from(move |dir: Direction| poller.send_direction(dir))
    };
    let toggle_video = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let next = Settings {
                show_video: !settings.show_video,
                ..(*settings).clone()
            };
            next.save();
            settings.set(next);
        })
    };

    html! {<div style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif; padding:16px; box-sizing:border-box;">
        <div id="top-bar" style="font-size:20px; font-weight:600; margin-bottom:12px;">{"Grid Tracker"}</div>
        <div style="display:flex; flex-wrap:wrap; gap:16px; align-items:flex-start;">
            <GridCanvas point={view.point} config={(*grid).clone()} />
            <div style="display:flex; flex-direction:column; gap:12px;">
                <StatsPanel stats={view.stats.clone()} />
                <DirectionPad {on_direction} />
            </div>
            <VideoFeed show={settings.show_video} on_toggle={toggle_video} />
        </div>
    </div>}
}
