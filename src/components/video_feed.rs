use yew::prelude::*;

use crate::net::VIDEO_FEED_PATH;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoFeedProps {
    pub show: bool,
    pub on_toggle: Callback<()>,
}

/// MJPEG stream from the backend; the browser keeps the `<img>` updating on its own.
#[function_component(VideoFeed)]
pub fn video_feed(props: &VideoFeedProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if props.show { "Hide video" } else { "Show video" };
    html! {<div style="display:flex; flex-direction:column; gap:6px;">
        <button onclick={toggle_cb} style="align-self:flex-start; padding:4px 10px; font-size:12px;">{ label }</button>
        { if props.show {
            html!{ <img src={VIDEO_FEED_PATH} alt="video feed" style="width:500px; max-width:100%; border:1px solid #30363d; border-radius:8px; background:#000;" /> }
        } else { html!{} } }
    </div>}
}
