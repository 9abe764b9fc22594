use log::{debug, info, warn};
use yew::prelude::*;

mod config;
mod content;
mod i18n;
mod mailto;
mod scroll;
mod state;
mod tax;

mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod services;
}
mod pages {
    pub mod home;
    pub mod tax_calculator;
    pub mod team_profile;
}

use components::{footer::Footer, nav::Nav};
use pages::{home::Home, tax_calculator::TaxCalculator, team_profile::TeamProfile};
use state::{SiteAction, SiteState, View};

fn render_view(site: &SiteState, on_action: Callback<SiteAction>) -> Html {
    let locale = site.locale;
    match site.view {
        View::Main => {
            debug!("Rendering main view");
            html! {
                <Home
                    locale={locale}
                    requested_service={site.requested_service}
                    on_action={on_action}
                />
            }
        }
        View::Profile(member_id) => {
            debug!("Rendering profile of {}", member_id);
            html! { <TeamProfile locale={locale} member_id={member_id} on_action={on_action} /> }
        }
        View::TaxCalculator => {
            debug!("Rendering tax calculator");
            html! { <TaxCalculator locale={locale} on_action={on_action} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_reducer(SiteState::default);

    // Runs after the view switch has rendered, so the target anchor is mounted.
    {
        let target = site.scroll;
        use_effect_with_deps(move |_| {
            if let Some(target) = target {
                if let Err(err) = scroll::perform(target) {
                    warn!("Scroll to {:?} failed: {}", target, err);
                }
            }
            || ()
        }, site.scroll_seq);
    }

    use_effect_with_deps(move |locale| {
        i18n::apply_to_document(*locale);
        || ()
    }, site.locale);

    let on_action = {
        let site = site.clone();
        Callback::from(move |action: SiteAction| site.dispatch(action))
    };

    let locale = site.locale;

    html! {
        <div dir={locale.dir()} lang={locale.code()} class={classes!("site", locale.is_rtl().then(|| "font-arabic"))}>
            <Nav locale={locale} menu_open={site.menu_open} on_action={on_action.clone()} />
            { render_view(&site, on_action) }
            <Footer locale={locale} />
            <style>
                {r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: white;
                }
                .site {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1e293b;
                    -webkit-font-smoothing: antialiased;
                }
                .site.font-arabic {
                    font-family: "Noto Kufi Arabic", "Segoe UI", Tahoma, sans-serif;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
