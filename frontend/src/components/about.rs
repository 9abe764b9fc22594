use yew::prelude::*;

use crate::config::CHAIRMAN_IMAGE;
use crate::i18n::Locale;
use crate::state::SiteAction;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub locale: Locale,
    pub on_action: Callback<SiteAction>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let locale = props.locale;
    let t = locale.content();

    html! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-portrait-wrap">
                    <div class="about-portrait">
                        <img src={CHAIRMAN_IMAGE} alt={t.about.chairman_name} loading="lazy" />
                        <div class="about-portrait-caption">
                            <h4>{t.about.chairman_name}</h4>
                            <p>{t.about.role}</p>
                        </div>
                    </div>
                    <div class="about-quote">
                        <p>{"\""}{t.about.quote1}</p>
                        <p>{t.about.quote2}{"\""}</p>
                    </div>
                </div>
                <div class="about-text">
                    <h2>{t.about.title}</h2>
                    <p class="about-intro">{t.about.intro}</p>
                    <p>{t.about.desc}</p>
                    <div id="expertise" class="about-points">
                        <h3>{t.about.expertise_title}</h3>
                        { for t.about.points.iter().map(|point| html! {
                            <div class="about-point">
                                <span class="about-check">{"✓"}</span>
                                <span>{*point}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <TeamGrid locale={locale} on_action={props.on_action.clone()} />

            <style>
                {r#"
                .about-section { padding: 6rem 1.5rem; background: white; }
                .about-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }
                .about-portrait-wrap { position: relative; flex: 1; }
                .about-portrait {
                    aspect-ratio: 4 / 5;
                    border-radius: 8px;
                    overflow: hidden;
                    position: relative;
                }
                .about-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease-in-out;
                }
                .about-portrait:hover img { transform: scale(1.05); }
                .about-portrait-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    padding: 2rem;
                    box-sizing: border-box;
                    background: linear-gradient(to top, rgba(15, 23, 42, 0.9), transparent);
                }
                .about-portrait-caption h4 { color: white; font-size: 1.25rem; margin: 0; }
                .about-portrait-caption p { color: #fbbf24; font-size: 0.875rem; margin: 0.25rem 0 0; }
                .about-quote {
                    position: absolute;
                    bottom: -1.5rem;
                    inset-inline-end: -1.5rem;
                    background: #f59e0b;
                    padding: 2rem;
                    border-radius: 8px;
                    box-shadow: 0 20px 25px rgba(15, 23, 42, 0.15);
                }
                .about-quote p { color: #0f172a; font-weight: 700; font-size: 1.5rem; margin: 0; }
                .about-text { flex: 1; }
                .about-text h2 { font-size: 2.25rem; color: #0f172a; margin: 0 0 1.5rem; }
                .about-text p { color: #475569; line-height: 1.7; margin-bottom: 1.5rem; }
                .about-intro { font-size: 1.1rem; }
                .about-points h3 { font-size: 1.1rem; color: #0f172a; }
                .about-point { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; font-weight: 500; color: #1e293b; }
                .about-check {
                    background: #dcfce7;
                    color: #16a34a;
                    border-radius: 50%;
                    width: 1.5rem;
                    height: 1.5rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.8rem;
                }
                @media (max-width: 768px) {
                    .about-grid { flex-direction: column; }
                    .about-quote { display: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TeamGridProps {
    locale: Locale,
    on_action: Callback<SiteAction>,
}

#[function_component(TeamGrid)]
fn team_grid(props: &TeamGridProps) -> Html {
    let t = &props.locale.content().team;

    html! {
        <div id="team" class="team-block">
            <div class="section-heading">
                <h2 class="section-eyebrow">{t.header}</h2>
                <h3>{t.title}</h3>
                <p>{t.desc}</p>
            </div>
            <div class="team-grid">
                { for t.members.iter().map(|member| {
                    let open = {
                        let on_action = props.on_action.clone();
                        let id = member.id;
                        Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::OpenProfile(id)))
                    };
                    html! {
                        <div key={member.id} class="team-card">
                            <img src={member.image} alt={member.name} loading="lazy" />
                            <h4>{member.name}</h4>
                            <p>{member.role}</p>
                            <button class="team-profile-button" onclick={open}>{t.view_profile}</button>
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
                .team-block { max-width: 1200px; margin: 6rem auto 0; }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .team-card {
                    background: #f8fafc;
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .team-card img {
                    width: 100%;
                    aspect-ratio: 1;
                    object-fit: cover;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                }
                .team-card h4 { margin: 0; color: #0f172a; }
                .team-card p { color: #64748b; font-size: 0.9rem; }
                .team-profile-button {
                    background: #1e3a8a;
                    color: white;
                    border: none;
                    border-radius: 4px;
                    padding: 0.5rem 1.25rem;
                    cursor: pointer;
                }
                .team-profile-button:hover { background: #1e40af; }
                "#}
            </style>
        </div>
    }
}
