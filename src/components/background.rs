use yew::prelude::*;

use crate::motion::parallax::use_parallax_offset;

/// Fixed gradient layer that drifts down as the reader scrolls.
#[function_component(ParallaxBackground)]
pub fn parallax_background() -> Html {
    let offset = use_parallax_offset();

    html! {
        <div class="parallax-background" style={format!("transform: translateY({:.2}%);", offset)}>
            <div class="bg-base"></div>
            <div class="bg-glow-center"></div>
            <div class="bg-glow-corner"></div>
        </div>
    }
}

pub const STYLE: &str = r#"
    .parallax-background {
        position: fixed;
        inset: 0;
        z-index: 0;
        pointer-events: none;
        will-change: transform;
    }

    .parallax-background > div {
        position: absolute;
        inset: 0;
    }

    .bg-base {
        background: linear-gradient(to bottom right, #000, #111827, #000);
    }

    .bg-glow-center {
        background: radial-gradient(circle at 50% 50%, rgba(0, 255, 255, 0.1), transparent 70%);
    }

    .bg-glow-corner {
        background: radial-gradient(circle at 80% 20%, rgba(147, 51, 234, 0.1), transparent 50%);
    }
"#;
