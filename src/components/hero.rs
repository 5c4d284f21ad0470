use yew::prelude::*;

use crate::content::{Brand, Icon};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: Brand,
}

/// Opening screen. Plays its staged entrance once on mount, independent of
/// scrolling.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let brand = &props.brand;

    html! {
        <header class="hero">
            <div class="hero-content">
                <div class="hero-monogram">{&brand.monogram}</div>
                <h1 class="hero-title">{&brand.name}</h1>
                <p class="hero-tagline">{&brand.tagline}</p>
                <p class="hero-subtitle">{&brand.subtitle}</p>
                <div class="hero-scroll-hint">
                    <span>{Icon::ChevronDown.glyph()}</span>
                </div>
            </div>
        </header>
    }
}

pub const STYLE: &str = r#"
    @keyframes heroSpinIn {
        from { transform: scale(0) rotate(-180deg); }
        to { transform: scale(1) rotate(0deg); }
    }
    @keyframes heroRise {
        from { opacity: 0; transform: translateY(var(--rise, 50px)); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes heroFade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes heroBounce {
        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }

    .hero {
        position: relative;
        z-index: 10;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0 1rem;
        text-align: center;
    }

    .hero-content {
        max-width: 56rem;
        margin: 0 auto;
    }

    .hero-monogram {
        width: 5rem;
        height: 5rem;
        margin: 0 auto 2rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.875rem;
        font-weight: 700;
        background: linear-gradient(to right, #06b6d4, #a855f7);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.5);
        animation: heroSpinIn 1s ease-out both;
    }

    .hero-title {
        font-size: clamp(3.75rem, 10vw, 6rem);
        font-weight: 700;
        line-height: 1.25;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #22d3ee, #c084fc, #22d3ee);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: heroRise 1s ease-out 0.5s both;
    }

    .hero-tagline {
        --rise: 30px;
        font-size: clamp(1.5rem, 4vw, 1.875rem);
        font-weight: 300;
        color: #d1d5db;
        margin-bottom: 2rem;
        animation: heroRise 1s ease-out 0.8s both;
    }

    .hero-subtitle {
        font-size: 1.125rem;
        color: #9ca3af;
        max-width: 42rem;
        margin: 0 auto 3rem;
        animation: heroFade 1s ease-out 1.1s both;
    }

    .hero-scroll-hint {
        --rise: 20px;
        color: #22d3ee;
        font-size: 2rem;
        animation: heroRise 0.8s ease-out 1.4s both;
    }

    .hero-scroll-hint span {
        display: inline-block;
        animation: heroBounce 1s infinite 2.2s;
    }
"#;
