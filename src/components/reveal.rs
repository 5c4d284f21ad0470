use yew::prelude::*;

use crate::config;
use crate::motion::reveal::{transition_style, use_reveal, RevealMotion};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(config::SECTION_REVEAL_DURATION)]
    pub duration: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Block that settles into place the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.motion.class(), state.class(), props.class.clone())}
            style={transition_style(props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <section
            ref={node}
            class={classes!(
                "page-section",
                "reveal",
                RevealMotion::Rise.class(),
                state.class(),
                props.class.clone()
            )}
            style={transition_style(config::SECTION_REVEAL_DURATION, props.delay)}
        >
            { for props.children.iter() }
        </section>
    }
}
