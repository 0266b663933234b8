use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::Point;
use crate::render::render;
use crate::state::GridConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct GridCanvasProps {
    pub point: Point,
    pub config: GridConfig,
}

#[function_component(GridCanvas)]
pub fn grid_canvas(props: &GridCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Repaint whenever the point or grid changes; the canvas is cleared each time.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.point, props.config.clone()), move |(point, config)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(config.canvas_px());
                canvas.set_height(config.canvas_px());
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                match ctx {
                    Some(mut ctx) => {
                        render(&mut ctx, *point, config);
                    }
                    None => log::error!("2d context unavailable"),
                }
            }
            || ()
        });
    }

    let size = props.config.canvas_px().to_string();
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:6px;">
        <canvas
            id="coordsCanvas"
            ref={canvas_ref}
            width={size.clone()}
            height={size}
            style="border:1px solid #30363d; border-radius:4px;"
        />
        <div style="font-size:14px;">
            <span style="opacity:0.7;">{"Position "}</span>
            <span id="coordsText" style="font-weight:600; font-variant-numeric:tabular-nums;">{ props.point.label() }</span>
        </div>
    </div>}
}
