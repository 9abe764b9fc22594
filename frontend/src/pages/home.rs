use yew::prelude::*;

use crate::components::{about::About, contact::ContactSection, hero::Hero, services::Services};
use crate::i18n::Locale;
use crate::state::{ServiceRequest, SiteAction};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
    pub requested_service: Option<ServiceRequest>,
    pub on_action: Callback<SiteAction>,
}

/// The brochure: every anchor the navbar can scroll to lives in here.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main class="landing-page">
            <Hero locale={props.locale} on_action={props.on_action.clone()} />
            <Services locale={props.locale} on_action={props.on_action.clone()} />
            <About locale={props.locale} on_action={props.on_action.clone()} />
            <ContactSection locale={props.locale} requested_service={props.requested_service} />
        </main>
    }
}
