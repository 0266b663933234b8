use yew::prelude::*;

use crate::model::Direction;

#[derive(Properties, PartialEq, Clone)]
pub struct DirectionPadProps {
    pub on_direction: Callback<Direction>,
}

// 3x3 layout, arrows on the cross
fn grid_area(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "grid-column:2; grid-row:1;",
        Direction::Left => "grid-column:1; grid-row:2;",
        Direction::Right => "grid-column:3; grid-row:2;",
        Direction::Down => "grid-column:2; grid-row:3;",
    }
}

#[function_component]
pub fn DirectionPad(props: &DirectionPadProps) -> Html {
    let buttons = Direction::ALL.iter().map(|&dir| {
        let cb = props.on_direction.clone();
        let onclick = Callback::from(move |_| cb.emit(dir));
        html! {
            <button
                key={dir.token()}
                title={dir.token()}
                {onclick}
                style={format!("{} width:48px; height:48px; font-size:18px;", grid_area(dir))}
            >{ dir.arrow() }</button>
        }
    });
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style="display:grid; grid-template-columns:repeat(3, 48px); grid-template-rows:repeat(3, 48px); gap:4px;">
            { for buttons }
        </div>
        <div style="font-size:11px; opacity:0.7;">{"Keys: arrows or WASD"}</div>
    </div>}
}
