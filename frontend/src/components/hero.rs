use yew::prelude::*;

use crate::i18n::Locale;
use crate::state::SiteAction;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub locale: Locale,
    pub on_action: Callback<SiteAction>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let locale = props.locale;
    let t = locale.content();

    let go_to = |anchor: &'static str| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::SelectSection(anchor)))
    };

    html! {
        <>
            <section id="home" class={classes!("hero", locale.is_rtl().then(|| "rtl"))}>
                <div class="hero-shape hero-shape-slant"></div>
                <div class="hero-shape hero-shape-glow"></div>
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-icon">{"🏅"}</span>
                        <span>{t.hero.established}</span>
                    </div>
                    <h1>
                        {t.hero.title1}{" "}
                        <span class="highlight-gold">{t.hero.title1_highlight}</span>
                        <br />
                        {t.hero.title2}{" "}
                        <span class="highlight-blue">{t.hero.title2_highlight}</span>
                    </h1>
                    <p class="hero-desc">{t.hero.desc}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={go_to("services")}>
                            {t.hero.btn_service}{" "}{locale.forward_arrow()}
                        </button>
                        <button class="hero-secondary" onclick={go_to("about")}>
                            {t.hero.btn_about}
                        </button>
                    </div>
                </div>
            </section>

            <div class="stats-band">
                <div class="stats-grid">
                    { for t.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-number" dir="ltr">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: #0f172a;
                    overflow: hidden;
                }
                .hero-shape { position: absolute; pointer-events: none; }
                .hero-shape-slant {
                    top: 0;
                    inset-inline-end: 0;
                    width: 50%;
                    height: 100%;
                    background: rgba(30, 64, 175, 0.2);
                    transform: skewX(12deg) translateX(5rem);
                }
                .hero.rtl .hero-shape-slant { transform: skewX(-12deg) translateX(-5rem); }
                .hero-shape-glow {
                    bottom: 0;
                    inset-inline-start: 0;
                    width: 33%;
                    height: 50%;
                    background: rgba(245, 158, 11, 0.1);
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem 0;
                    width: 100%;
                    box-sizing: border-box;
                }
                .hero-badge {
                    display: inline-flex;
                    gap: 0.5rem;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(30, 64, 175, 0.5);
                    border: 1px solid rgba(29, 78, 216, 0.5);
                    color: #bfdbfe;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    color: white;
                    line-height: 1.15;
                    margin: 0 0 1.5rem;
                    max-width: 48rem;
                }
                .highlight-gold {
                    background: linear-gradient(to right, #fbbf24, #fde68a);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .highlight-blue {
                    background: linear-gradient(to right, #60a5fa, #bfdbfe);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-desc { font-size: 1.25rem; color: #cbd5e1; line-height: 1.7; max-width: 42rem; margin-bottom: 2.5rem; }
                .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1rem; }
                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 4px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-cta { background: #f59e0b; color: white; border: none; }
                .hero-cta:hover { background: #d97706; }
                .hero-secondary { background: transparent; color: white; border: 1px solid #475569; }
                .hero-secondary:hover { background: rgba(255, 255, 255, 0.05); }
                .stats-band { background: #1e3a8a; padding: 3rem 1.5rem; border-bottom: 1px solid #1e40af; }
                .stats-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number { font-size: 2.25rem; font-weight: 700; color: white; }
                .stat-label { color: #93c5fd; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }
                @media (max-width: 768px) {
                    .stats-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </>
    }
}
