use yew::prelude::*;

use crate::model::StatsDisplay;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub stats: StatsDisplay,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500; opacity:0.8;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"FPS"}</span>
                <span id="fps" style={format!("{} color:#3fb950;", value_style)}>{ props.stats.fps.clone() }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Total frames"}</span>
                <span id="totalFrames" style={format!("{} color:#58a6ff;", value_style)}>{ props.stats.total_frames.clone() }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Last update"}</span>
                <span id="lastUpdate" style={format!("{} color:#d29922;", value_style)}>{ props.stats.last_update.clone() }</span>
            </div>
        </div>
    }
}
