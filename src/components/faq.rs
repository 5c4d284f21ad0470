use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{FaqEntry, Icon};
use crate::motion::accordion::Accordion;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let len = props.entries.len();
    let accordion = use_reducer(move || Accordion::new(len));

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let is_open = accordion.is_expanded(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.dispatch(index);
                        })
                    };

                    html! {
                        <Reveal
                            key={entry.question.clone()}
                            duration={config::FAQ_ROW_DURATION}
                            delay={index as f64 * config::FAQ_ROW_STAGGER}
                        >
                            <div class={classes!("faq-item", is_open.then(|| "open"))}>
                                <button
                                    class="faq-question"
                                    onclick={toggle}
                                    aria-expanded={is_open.to_string()}
                                >
                                    <span class="question-text">{&entry.question}</span>
                                    <span class="toggle-icon">{Icon::ChevronDown.glyph()}</span>
                                </button>
                                <div class="faq-answer">
                                    <p>{&entry.answer}</p>
                                </div>
                            </div>
                        </Reveal>
                    }
                })
            }
        </div>
    }
}

pub const STYLE: &str = r#"
    .faq-list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .faq-item {
        border: 1px solid #1f2937;
        border-radius: 8px;
        overflow: hidden;
    }

    .faq-question {
        width: 100%;
        padding: 1.5rem;
        background: rgba(17, 24, 39, 0.5);
        border: none;
        color: #fff;
        font-size: 1.125rem;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
        display: flex;
        justify-content: space-between;
        align-items: center;
        transition: background 0.3s ease;
    }

    .faq-question:hover {
        background: rgba(31, 41, 55, 0.5);
    }

    .toggle-icon {
        color: #22d3ee;
        font-size: 1.25rem;
        transition: transform 0.3s ease;
    }

    .faq-item.open .toggle-icon {
        transform: rotate(180deg);
    }

    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease;
        background: rgba(31, 41, 55, 0.3);
    }

    .faq-item.open .faq-answer {
        max-height: 600px;
    }

    .faq-answer p {
        padding: 1.5rem;
        color: #d1d5db;
        margin: 0;
    }
"#;
