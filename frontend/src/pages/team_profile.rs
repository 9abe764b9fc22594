use log::warn;
use yew::prelude::*;

use crate::i18n::Locale;
use crate::state::SiteAction;

#[derive(Properties, PartialEq)]
pub struct TeamProfileProps {
    pub locale: Locale,
    pub member_id: &'static str,
    pub on_action: Callback<SiteAction>,
}

#[function_component(TeamProfile)]
pub fn team_profile(props: &TeamProfileProps) -> Html {
    let locale = props.locale;
    let team = &locale.content().team;

    let go_back = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::BackToTeam))
    };

    let back_button = html! {
        <button class="profile-back" onclick={go_back}>
            {locale.back_arrow()}{" "}{team.back}
        </button>
    };

    let Some(member) = team.member(props.member_id) else {
        warn!("Unknown team member {}", props.member_id);
        return html! { <main class="profile-page">{back_button}</main> };
    };

    html! {
        <main class="profile-page">
            {back_button}
            <article class="profile-card">
                <img class="profile-photo" src={member.image} alt={member.name} />
                <div class="profile-body">
                    <h1>{member.name}</h1>
                    <p class="profile-role">{member.role}</p>
                    <p class="profile-bio">{member.bio}</p>
                    <h2>{team.expertise_title}</h2>
                    <ul class="profile-expertise">
                        { for member.expertise.iter().map(|area| html! { <li>{*area}</li> }) }
                    </ul>
                </div>
            </article>

            <style>
                {r#"
                .profile-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 4rem;
                    background: #f8fafc;
                    max-width: 1000px;
                    margin: 0 auto;
                    box-sizing: border-box;
                }
                .profile-back {
                    background: none;
                    border: none;
                    color: #1d4ed8;
                    font-weight: 500;
                    cursor: pointer;
                    margin-bottom: 2rem;
                    font-size: 1rem;
                }
                .profile-card {
                    display: flex;
                    gap: 3rem;
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                }
                .profile-photo {
                    width: 320px;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 12px;
                }
                .profile-body h1 { margin: 0; color: #0f172a; }
                .profile-role { color: #d97706; font-weight: 600; }
                .profile-bio { color: #475569; line-height: 1.7; }
                .profile-body h2 { font-size: 1.1rem; color: #0f172a; margin-top: 2rem; }
                .profile-expertise { padding-inline-start: 1.25rem; color: #334155; }
                .profile-expertise li { margin-bottom: 0.5rem; }
                @media (max-width: 768px) {
                    .profile-card { flex-direction: column; }
                    .profile-photo { width: 100%; }
                }
                "#}
            </style>
        </main>
    }
}
