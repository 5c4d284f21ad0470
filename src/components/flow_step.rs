use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::IconItem;
use crate::motion::interaction::{use_interaction, InteractionHandle};
use crate::motion::reveal::RevealMotion;

#[derive(Properties, PartialEq)]
pub struct FlowStepProps {
    pub step: IconItem,
    pub index: usize,
    #[prop_or_default]
    pub is_last: bool,
}

/// One row of the user journey; every row but the last draws a connector down
/// to the next icon.
#[function_component(FlowStep)]
pub fn flow_step(props: &FlowStepProps) -> Html {
    let InteractionHandle {
        state,
        onpointerenter,
        onpointerleave,
        onpointerdown,
        onpointerup,
    } = use_interaction();
    let delay = props.index as f64 * config::JOURNEY_STEP_STAGGER;

    html! {
        <Reveal
            class={classes!("flow-step")}
            motion={RevealMotion::alternating(props.index)}
            duration={config::JOURNEY_STEP_DURATION}
            delay={delay}
        >
            <div class="flow-icon-slot">
                <div
                    class={classes!("flow-icon", state.class())}
                    onpointerenter={onpointerenter}
                    onpointerleave={onpointerleave}
                    onpointerdown={onpointerdown}
                    onpointerup={onpointerup}
                >
                    {props.step.icon.glyph()}
                </div>
            </div>
            <div class="flow-text">
                <h3>{&props.step.title}</h3>
                <p>{&props.step.description}</p>
            </div>
            {
                if !props.is_last {
                    html! {
                        <Reveal
                            class={classes!("flow-connector")}
                            motion={RevealMotion::Extend}
                            delay={delay + config::JOURNEY_CONNECTOR_DELAY}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </Reveal>
    }
}

pub const STYLE: &str = r#"
    .flow-list {
        display: flex;
        flex-direction: column;
        gap: 4rem;
    }

    .flow-step {
        position: relative;
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .flow-icon-slot {
        flex-shrink: 0;
    }

    .flow-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        background: linear-gradient(to right, #06b6d4, #a855f7);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
        transition: transform 0.5s ease;
    }

    .flow-icon.is-hovered,
    .flow-icon.is-pressed {
        transform: scale(1.1) rotate(360deg);
    }

    .flow-text {
        flex: 1;
    }

    .flow-text h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }

    .flow-text p {
        color: #d1d5db;
    }

    .flow-connector {
        position: absolute;
        bottom: -2rem;
        left: 2rem;
        width: 2px;
        height: 4rem;
        background: linear-gradient(to bottom, #06b6d4, #a855f7);
    }
"#;
