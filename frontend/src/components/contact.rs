use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::i18n::Locale;
use crate::mailto::{open_mail_client, ContactRequest};
use crate::state::ServiceRequest;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub locale: Locale,
    /// Option preselected from a service card, if any.
    pub requested_service: Option<ServiceRequest>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let t = &props.locale.content().contact;
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);
    // Kept as an index so the choice survives a language switch.
    let service = use_state(|| props.requested_service.map_or(0, |r| r.option));

    {
        let service = service.clone();
        use_effect_with_deps(move |requested| {
            if let Some(request) = *requested {
                service.set(request.option);
            }
            || ()
        }, props.requested_service);
    }

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(idx) = usize::try_from(select.selected_index()) {
                service.set(idx);
            }
        })
    };

    let on_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let company = company.clone();
        let message = message.clone();
        let service = service.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = ContactRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                company: (*company).clone(),
                service: t.options.get(*service).copied().unwrap_or_default().to_string(),
                message: (*message).clone(),
            };
            let link = request.mailto_link(config::get_contact_email(), t);
            info!("Opening mail client for a {} request", request.service);
            if let Err(err) = open_mail_client(&link) {
                warn!("Could not open mail client: {}", err);
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-decor contact-decor-blue"></div>
            <div class="contact-decor contact-decor-gold"></div>
            <div class="contact-grid">
                <div class="contact-info">
                    <h2>{t.title}</h2>
                    <p class="contact-desc">{t.desc}</p>

                    <div class="contact-item">
                        <div class="contact-icon">{"📍"}</div>
                        <div>
                            <h4>{t.labels.head_office}</h4>
                            <p>{config::OFFICE_ADDRESS[0]}<br />{config::OFFICE_ADDRESS[1]}</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-icon">{"📞"}</div>
                        <div>
                            <h4>{t.labels.phone}</h4>
                            <p dir="ltr">{config::CONTACT_PHONE}</p>
                            <p class="contact-muted" dir="ltr">{config::OFFICE_HOURS}</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-icon">{"✉"}</div>
                        <div>
                            <h4>{t.labels.email}</h4>
                            <p>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL_DISPLAY)}>
                                    {config::CONTACT_EMAIL_DISPLAY}
                                </a>
                            </p>
                        </div>
                    </div>
                </div>

                <form class="contact-form" onsubmit={on_submit}>
                    <h3>{t.labels.form_title}</h3>
                    <div class="form-row">
                        <label>
                            {t.labels.first_name}
                            <input type="text" required=true
                                placeholder={t.placeholders.first_name}
                                value={(*first_name).clone()}
                                oninput={text_input(&first_name)} />
                        </label>
                        <label>
                            {t.labels.last_name}
                            <input type="text" required=true
                                placeholder={t.placeholders.last_name}
                                value={(*last_name).clone()}
                                oninput={text_input(&last_name)} />
                        </label>
                    </div>
                    <label>
                        {t.labels.company}
                        <input type="text"
                            placeholder={t.placeholders.company}
                            value={(*company).clone()}
                            oninput={text_input(&company)} />
                    </label>
                    <label>
                        {t.labels.service}
                        <select required=true onchange={on_service}>
                            { for t.options.iter().enumerate().map(|(idx, option)| html! {
                                <option key={idx} selected={idx == *service}>{*option}</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        {t.labels.message}
                        <textarea required=true
                            placeholder={t.placeholders.message}
                            value={(*message).clone()}
                            oninput={on_message} />
                    </label>
                    <button type="submit" class="contact-submit">{t.labels.submit}</button>
                </form>
            </div>

            <style>
                {r#"
                .contact-section {
                    position: relative;
                    padding: 6rem 1.5rem;
                    background: #0f172a;
                    overflow: hidden;
                }
                .contact-decor { position: absolute; border-radius: 50%; filter: blur(64px); opacity: 0.2; }
                .contact-decor-blue { top: 2.5rem; left: 2.5rem; width: 16rem; height: 16rem; background: #3b82f6; }
                .contact-decor-gold { bottom: 2.5rem; right: 2.5rem; width: 20rem; height: 20rem; background: #d97706; }
                .contact-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-info h2 { color: white; font-size: 2.25rem; margin: 0 0 1.5rem; }
                .contact-desc { color: #cbd5e1; font-size: 1.1rem; margin-bottom: 2.5rem; }
                .contact-item { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
                .contact-icon { background: rgba(255, 255, 255, 0.1); padding: 0.75rem; border-radius: 8px; color: #fbbf24; }
                .contact-item h4 { color: white; margin: 0; }
                .contact-item p { color: #94a3b8; margin: 0.25rem 0 0; }
                .contact-item a { color: #94a3b8; }
                .contact-muted { font-size: 0.875rem; color: #64748b; }
                .contact-form {
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .contact-form h3 { font-size: 1.5rem; color: #0f172a; margin: 0; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .contact-form label { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem; font-weight: 500; color: #334155; }
                .contact-form input, .contact-form select, .contact-form textarea {
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font: inherit;
                    background: white;
                }
                .contact-form textarea { height: 8rem; resize: vertical; }
                .contact-submit {
                    background: #f59e0b;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .contact-submit:hover { background: #d97706; }
                @media (max-width: 768px) {
                    .contact-grid, .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
