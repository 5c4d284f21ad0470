use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod motion {
    pub mod accordion;
    pub mod interaction;
    pub mod parallax;
    pub mod reveal;
}
mod components {
    pub mod background;
    pub mod cta_button;
    pub mod faq;
    pub mod flow_step;
    pub mod glow_card;
    pub mod hero;
    pub mod reveal;
    pub mod team_card;
}
mod pages {
    pub mod privana;
}

use content::SiteContent;
use pages::privana::PrivanaPage;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <PrivanaPage content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            gloo_console::error!(format!("Site content unavailable: {}", err));
        }
    }
}
