use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::{
    background::{self, ParallaxBackground},
    cta_button::{self, CtaButton},
    faq::{self, FaqAccordion},
    flow_step::{self, FlowStep},
    glow_card::{self, GlowCard},
    hero::{self, Hero},
    reveal::{AnimatedSection, Reveal},
    team_card::{self, TeamCard},
};
use crate::config;
use crate::content::{list_separator, Icon, SiteContent};
use crate::motion::reveal::{self, RevealMotion};

#[derive(Properties, PartialEq)]
pub struct PrivanaPageProps {
    pub content: Rc<SiteContent>,
}

#[function_component(PrivanaPage)]
pub fn privana_page(props: &PrivanaPageProps) -> Html {
    info!("Rendering Privana page");
    let content = &props.content;
    let problem = &content.problem;
    let highlight_count = problem.highlights.len();
    let step_count = content.journey.steps.len();

    let styles = [
        PAGE_STYLE,
        reveal::STYLE,
        background::STYLE,
        hero::STYLE,
        glow_card::STYLE,
        flow_step::STYLE,
        team_card::STYLE,
        faq::STYLE,
        cta_button::STYLE,
    ]
    .concat();

    html! {
        <div class="privana-page">
            <ParallaxBackground />

            <Hero brand={content.brand.clone()} />

            // Problem
            <AnimatedSection>
                <div class="narrow centered">
                    <Reveal motion={RevealMotion::FromLeft}>
                        <h2 class="section-title problem-title">{&problem.title}</h2>
                    </Reveal>
                    <Reveal motion={RevealMotion::FromRight} delay={config::SECONDARY_REVEAL_DELAY}>
                        <p class="problem-statement">
                            {&problem.lead}{" "}
                            {
                                for problem.highlights.iter().enumerate().map(|(i, word)| html! {
                                    <>
                                        <span class="highlight">{word}</span>
                                        {list_separator(i, highlight_count)}
                                    </>
                                })
                            }
                            {" "}{&problem.tail}
                        </p>
                    </Reveal>
                </div>
            </AnimatedSection>

            // Pain points
            <AnimatedSection>
                <div class="wide">
                    <Reveal>
                        <h2 class="section-heading">{&content.pain_points.title}</h2>
                    </Reveal>
                    <div class="card-grid">
                        {
                            for content.pain_points.items.iter().map(|item| html! {
                                <GlowCard>
                                    <div class="pain-point">
                                        <div class="pain-icon">{item.icon.glyph()}</div>
                                        <h3>{&item.title}</h3>
                                        <p>{&item.description}</p>
                                    </div>
                                </GlowCard>
                            })
                        }
                    </div>
                </div>
            </AnimatedSection>

            // Solution
            <AnimatedSection class={classes!("tinted", "tinted-cyan")}>
                <div class="wide">
                    <Reveal motion={RevealMotion::FromLeft} class={classes!("centered", "solution-header")}>
                        <h2 class="section-title gradient-text">{&content.solution.title}</h2>
                        <p class="solution-summary">{&content.solution.summary}</p>
                    </Reveal>
                    <div class="two-columns">
                        <Reveal motion={RevealMotion::NudgeLeft} class={classes!("benefit-list")}>
                            {
                                for content.solution.benefits.iter().map(|benefit| html! {
                                    <div class="benefit">
                                        <span class="benefit-check">{Icon::CheckCircle.glyph()}</span>
                                        <div>
                                            <h3>{&benefit.title}</h3>
                                            <p>{&benefit.description}</p>
                                        </div>
                                    </div>
                                })
                            }
                        </Reveal>
                        <Reveal motion={RevealMotion::NudgeRight} delay={config::SECONDARY_REVEAL_DELAY}>
                            <div class="wallet-panel">
                                <div class="wallet-icon">{content.solution.wallet.icon.glyph()}</div>
                                <h3>{&content.solution.wallet.title}</h3>
                                <p>{&content.solution.wallet.caption}</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </AnimatedSection>

            // User journey
            <AnimatedSection>
                <div class="narrow">
                    <Reveal>
                        <h2 class="section-heading">{&content.journey.title}</h2>
                    </Reveal>
                    <div class="flow-list">
                        {
                            for content.journey.steps.iter().enumerate().map(|(index, step)| html! {
                                <FlowStep
                                    key={step.title.clone()}
                                    step={step.clone()}
                                    index={index}
                                    is_last={index + 1 == step_count}
                                />
                            })
                        }
                    </div>
                </div>
            </AnimatedSection>

            // Why now / why blockchain
            <AnimatedSection class={classes!("tinted", "tinted-purple")}>
                <div class="wide">
                    <Reveal motion={RevealMotion::Grow}>
                        <h2 class="section-heading">{&content.why.title}</h2>
                    </Reveal>
                    <div class="two-columns">
                        {
                            for content.why.columns.iter().enumerate().map(|(index, column)| {
                                let (motion, delay) = if index % 2 == 0 {
                                    (RevealMotion::NudgeLeft, 0.0)
                                } else {
                                    (RevealMotion::NudgeRight, config::SECONDARY_REVEAL_DELAY)
                                };
                                html! {
                                    <Reveal motion={motion} delay={delay} class={classes!("why-column", column.accent.class())}>
                                        <h3>{&column.title}</h3>
                                        <ul>
                                            {
                                                for column.points.iter().map(|point| html! {
                                                    <li>
                                                        <span class="why-icon">{point.icon.glyph()}</span>
                                                        <span>{&point.text}</span>
                                                    </li>
                                                })
                                            }
                                        </ul>
                                    </Reveal>
                                }
                            })
                        }
                    </div>
                </div>
            </AnimatedSection>

            // Team
            <AnimatedSection>
                <div class="wide">
                    <Reveal>
                        <h2 class="section-heading">{&content.team.title}</h2>
                    </Reveal>
                    <div class="card-grid">
                        {
                            for content.team.members.iter().map(|member| html! {
                                <TeamCard key={member.name.clone()} member={member.clone()} />
                            })
                        }
                    </div>
                </div>
            </AnimatedSection>

            // Q&A
            <AnimatedSection class={classes!("tinted", "tinted-gray")}>
                <div class="narrow">
                    <Reveal>
                        <h2 class="section-heading">{&content.faq.title}</h2>
                    </Reveal>
                    <FaqAccordion entries={content.faq.entries.clone()} />
                </div>
            </AnimatedSection>

            // Call to action
            <AnimatedSection>
                <div class="narrow centered">
                    <Reveal motion={RevealMotion::Grow}>
                        <h2 class="section-title gradient-text">{&content.cta.title}</h2>
                    </Reveal>
                    <Reveal delay={config::SECONDARY_REVEAL_DELAY}>
                        <p class="cta-body">{&content.cta.body}</p>
                    </Reveal>
                    <Reveal delay={config::SECONDARY_REVEAL_DELAY}>
                        <CtaButton label={content.cta.button.clone()} />
                    </Reveal>
                </div>
            </AnimatedSection>

            <footer class="page-footer">
                <div class="footer-monogram">{&content.brand.monogram}</div>
                <p class="footer-copyright">{&content.footer.copyright}</p>
                <p class="footer-tagline">{&content.footer.tagline}</p>
            </footer>

            <style>{styles}</style>
        </div>
    }
}

const PAGE_STYLE: &str = r#"
    .privana-page {
        background: #000;
        color: #fff;
        font-family: 'Inter', sans-serif;
        overflow-x: hidden;
        min-height: 100vh;
    }

    .privana-page * {
        box-sizing: border-box;
    }

    .page-section {
        position: relative;
        z-index: 10;
        padding: 5rem 1rem;
    }

    .tinted-cyan {
        background: linear-gradient(to right, rgba(22, 78, 99, 0.2), rgba(88, 28, 135, 0.2));
    }

    .tinted-purple {
        background: linear-gradient(to right, rgba(88, 28, 135, 0.2), rgba(22, 78, 99, 0.2));
    }

    .tinted-gray {
        background: linear-gradient(to right, rgba(17, 24, 39, 0.5), rgba(0, 0, 0, 0.5));
    }

    .narrow {
        max-width: 56rem;
        margin: 0 auto;
    }

    .wide {
        max-width: 72rem;
        margin: 0 auto;
    }

    .centered {
        text-align: center;
    }

    .section-title {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 2rem;
    }

    .section-heading {
        font-size: 2.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 4rem;
    }

    .gradient-text {
        background: linear-gradient(to right, #22d3ee, #c084fc);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }

    .problem-title,
    .highlight {
        color: #f87171;
    }

    .highlight {
        font-weight: 600;
    }

    .problem-statement {
        font-size: 1.5rem;
        line-height: 1.625;
        color: #d1d5db;
    }

    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
    }

    .pain-point {
        text-align: center;
    }

    .pain-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        background: rgba(239, 68, 68, 0.2);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
    }

    .pain-point h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }

    .pain-point p,
    .benefit p,
    .wallet-panel p,
    .cta-body,
    .solution-summary {
        color: #d1d5db;
    }

    .solution-header {
        margin-bottom: 4rem;
    }

    .solution-summary {
        font-size: 1.25rem;
        max-width: 48rem;
        margin: 0 auto;
    }

    .two-columns {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 3rem;
        align-items: center;
    }

    .benefit-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .benefit {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }

    .benefit-check {
        color: #4ade80;
        font-size: 1.25rem;
    }

    .benefit h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin-bottom: 0.5rem;
    }

    .wallet-panel {
        text-align: center;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(6, 182, 212, 0.3);
        background: linear-gradient(to right, rgba(6, 182, 212, 0.2), rgba(168, 85, 247, 0.2));
        backdrop-filter: blur(4px);
    }

    .wallet-icon {
        font-size: 3.5rem;
        margin-bottom: 1rem;
    }

    .wallet-panel h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }

    .why-column h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .why-column ul {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        color: #d1d5db;
    }

    .why-column li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }

    .accent-cyan h3 { color: #22d3ee; }
    .accent-purple h3 { color: #c084fc; }

    .cta-body {
        font-size: 1.25rem;
        max-width: 42rem;
        margin: 0 auto 3rem;
    }

    .page-footer {
        position: relative;
        z-index: 10;
        padding: 3rem 1rem;
        border-top: 1px solid #1f2937;
        text-align: center;
    }

    .footer-monogram {
        width: 3rem;
        height: 3rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
        font-weight: 700;
        background: linear-gradient(to right, #06b6d4, #a855f7);
    }

    .footer-copyright {
        color: #9ca3af;
        margin-bottom: 1rem;
    }

    .footer-tagline {
        color: #6b7280;
        font-size: 0.875rem;
    }

    @media (max-width: 768px) {
        .section-title {
            font-size: 2.25rem;
        }

        .section-heading {
            font-size: 1.875rem;
        }
    }
"#;
