use yew::prelude::*;

use crate::components::glow_card::GlowCard;
use crate::content::TeamMember;

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: TeamMember,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let member = &props.member;

    html! {
        <GlowCard class={classes!("team-card")}>
            <div class="team-avatar">{member.initial()}</div>
            <h3>{&member.name}</h3>
            <p class="team-role">{&member.role}</p>
            <p class="team-description">{&member.description}</p>
        </GlowCard>
    }
}

pub const STYLE: &str = r#"
    .team-card {
        text-align: center;
    }

    .team-avatar {
        width: 6rem;
        height: 6rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        font-weight: 700;
        background: linear-gradient(to right, #06b6d4, #a855f7);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
        transition: transform 0.6s ease;
    }

    /* the avatar flips while its card is under the pointer */
    .team-card.is-hovered .team-avatar,
    .team-card.is-pressed .team-avatar {
        transform: rotateY(180deg);
    }

    .team-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }

    .team-role {
        color: #22d3ee;
        margin-bottom: 0.75rem;
    }

    .team-description {
        color: #d1d5db;
        font-size: 0.875rem;
    }
"#;
