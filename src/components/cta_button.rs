use yew::prelude::*;

use crate::content::Icon;
use crate::motion::interaction::{use_interaction, InteractionHandle};

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: String,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let InteractionHandle {
        state,
        onpointerenter,
        onpointerleave,
        onpointerdown,
        onpointerup,
    } = use_interaction();

    html! {
        <button
            class={classes!("cta-button", state.class())}
            onpointerenter={onpointerenter}
            onpointerleave={onpointerleave}
            onpointerdown={onpointerdown}
            onpointerup={onpointerup}
        >
            {&props.label}
            <span class="cta-arrow">{Icon::ArrowRight.glyph()}</span>
        </button>
    }
}

pub const STYLE: &str = r#"
    .cta-button {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin: 0 auto;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        background: linear-gradient(to right, #06b6d4, #a855f7);
        color: #fff;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }

    .cta-button.is-hovered {
        transform: scale(1.05);
        box-shadow: 0 20px 40px rgba(0, 255, 255, 0.4);
    }

    .cta-button.is-pressed {
        transform: scale(0.95);
    }
"#;
