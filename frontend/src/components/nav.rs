use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config::NAV_SCROLL_THRESHOLD;
use crate::i18n::Locale;
use crate::state::SiteAction;

pub const NAV_SECTIONS: [&str; 5] = ["home", "services", "about", "expertise", "contact"];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
    pub menu_open: bool,
    pub on_action: Callback<SiteAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { locale, menu_open, on_action } = props;
    let t = locale.content();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let go_to = |anchor: &'static str| {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(SiteAction::SelectSection(anchor));
        })
    };

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(SiteAction::ToggleMenu);
        })
    };

    let toggle_language = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::ToggleLanguage))
    };

    let section_links = |class: &'static str| -> Html {
        NAV_SECTIONS
            .iter()
            .map(|&anchor| html! {
                <button key={anchor} class={class} onclick={go_to(anchor)}>
                    { t.nav.label(anchor) }
                </button>
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to("home")}>
                    <span class="nav-logo-mark">{"⚖"}</span>
                    <span class="nav-logo-text">
                        <span class="nav-logo-name">{t.brand.name}</span>
                        <span class="nav-logo-tagline">{t.brand.tagline}</span>
                    </span>
                </a>

                <div class="nav-right">
                    { section_links("nav-link") }
                    <button class="nav-lang" onclick={toggle_language.clone()}>
                        {"🌐 "}{locale.switch_label()}
                    </button>
                    <button class="nav-cta" onclick={go_to("contact")}>{t.nav.cta}</button>
                </div>

                <div class="nav-mobile-controls">
                    <button class="nav-lang" onclick={toggle_language}>
                        { if locale.is_rtl() { "En" } else { locale.switch_label() } }
                    </button>
                    <button class="burger-menu" aria-label={t.nav.menu} onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { section_links("mobile-link") }
                            <button class="mobile-cta" onclick={go_to("contact")}>{t.nav.quote}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-logo-mark {
                    background: #1e3a8a;
                    color: white;
                    padding: 0.4rem 0.6rem;
                    border-radius: 4px;
                    font-size: 1.2rem;
                }
                .nav-logo-text { display: flex; flex-direction: column; }
                .nav-logo-name { font-weight: 700; font-size: 1.25rem; color: white; line-height: 1; }
                .nav-logo-tagline { font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; color: #cbd5e1; }
                .top-nav.scrolled .nav-logo-name { color: #0f172a; }
                .top-nav.scrolled .nav-logo-tagline { color: #64748b; }
                .nav-right { display: flex; align-items: center; gap: 2rem; }
                .nav-link, .nav-lang {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #e2e8f0;
                }
                .nav-link:hover { color: #f59e0b; }
                .nav-lang { border: 1px solid #64748b; border-radius: 999px; padding: 0.25rem 0.75rem; }
                .top-nav.scrolled .nav-link, .top-nav.scrolled .nav-lang { color: #334155; }
                .nav-cta {
                    background: #f59e0b;
                    color: white;
                    border: none;
                    border-radius: 4px;
                    padding: 0.6rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .nav-cta:hover { background: #d97706; }
                .nav-mobile-controls { display: none; align-items: center; gap: 1rem; }
                .burger-menu {
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    color: white;
                    cursor: pointer;
                }
                .top-nav.scrolled .burger-menu { color: #0f172a; }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: white;
                    box-shadow: 0 12px 24px rgba(15, 23, 42, 0.15);
                    padding: 1rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    box-sizing: border-box;
                }
                .mobile-link {
                    background: none;
                    border: none;
                    border-bottom: 1px solid #f1f5f9;
                    text-align: start;
                    padding: 0.5rem 0;
                    color: #475569;
                    font-weight: 500;
                }
                .mobile-cta {
                    background: #1e3a8a;
                    color: white;
                    border: none;
                    border-radius: 4px;
                    padding: 0.75rem;
                    font-weight: 500;
                }
                @media (max-width: 768px) {
                    .nav-right { display: none; }
                    .nav-mobile-controls { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
