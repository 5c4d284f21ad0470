use yew::prelude::*;

use crate::motion::interaction::{use_interaction, InteractionHandle};

#[derive(Properties, PartialEq)]
pub struct GlowCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Bordered card that lifts and glows while the pointer is on it.
#[function_component(GlowCard)]
pub fn glow_card(props: &GlowCardProps) -> Html {
    let InteractionHandle {
        state,
        onpointerenter,
        onpointerleave,
        onpointerdown,
        onpointerup,
    } = use_interaction();

    html! {
        <div
            class={classes!(
                "glow-card",
                state.class(),
                state.is_active().then(|| "is-emphasized"),
                props.class.clone()
            )}
            onpointerenter={onpointerenter}
            onpointerleave={onpointerleave}
            onpointerdown={onpointerdown}
            onpointerup={onpointerup}
        >
            <div class="glow-overlay"></div>
            <div class="glow-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}

pub const STYLE: &str = r#"
    .glow-card {
        position: relative;
        background: rgba(17, 24, 39, 0.5);
        backdrop-filter: blur(4px);
        border: 1px solid #1f2937;
        border-radius: 12px;
        padding: 1.5rem;
        transition: transform 0.3s ease, box-shadow 0.3s ease, border-color 0.3s ease;
    }

    .glow-card.is-emphasized {
        border-color: rgba(6, 182, 212, 0.5);
    }

    .glow-card.is-hovered,
    .glow-card.is-pressed {
        transform: scale(1.05);
        box-shadow: 0 20px 40px rgba(0, 255, 255, 0.3), 0 0 60px rgba(0, 255, 255, 0.2);
    }

    .glow-overlay {
        position: absolute;
        inset: 0;
        border-radius: 12px;
        background: linear-gradient(to right, rgba(6, 182, 212, 0.1), rgba(168, 85, 247, 0.1));
        opacity: 0;
        transition: opacity 0.3s ease;
        pointer-events: none;
    }

    .glow-card.is-emphasized .glow-overlay {
        opacity: 1;
    }

    .glow-content {
        position: relative;
        z-index: 1;
    }
"#;
