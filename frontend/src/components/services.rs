use yew::prelude::*;

use crate::i18n::Locale;
use crate::state::SiteAction;

const SERVICE_ICONS: [(&str, &str); 6] = [
    ("🛡", "#f59e0b"),
    ("⚖", "#2563eb"),
    ("📊", "#10b981"),
    ("📄", "#a855f7"),
    ("🏢", "#6366f1"),
    ("✔", "#06b6d4"),
];

/// Contact form option preselected by each card's "Learn more".
const CONTACT_OPTION_FOR_SERVICE: [usize; 6] = [0, 2, 3, 1, 4, 4];

/// Card that also links to the corporate tax estimator.
const TAX_SERVICE: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub locale: Locale,
    pub on_action: Callback<SiteAction>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let locale = props.locale;
    let t = &locale.content().services;

    let cards = t.items.iter().enumerate().map(|(idx, service)| {
        let (icon, color) = SERVICE_ICONS[idx % SERVICE_ICONS.len()];
        let option = CONTACT_OPTION_FOR_SERVICE[idx % CONTACT_OPTION_FOR_SERVICE.len()];
        let learn_more = {
            let on_action = props.on_action.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_action.emit(SiteAction::RequestService(option));
            })
        };
        let open_calculator = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::OpenTaxCalculator))
        };

        html! {
            <div key={idx} class="service-card">
                <div class="service-icon" style={format!("color: {};", color)}>{icon}</div>
                <h4>{service.title}</h4>
                <p>{service.desc}</p>
                <div class="service-actions">
                    <a href="#contact" class="service-link" onclick={learn_more}>
                        {t.learn_more}{" "}{locale.forward_arrow()}
                    </a>
                    {
                        if idx == TAX_SERVICE {
                            html! {
                                <button class="service-tax-button" onclick={open_calculator}>
                                    {"🧮 "}{t.estimate_tax}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        }
    });

    html! {
        <section id="services" class="services-section">
            <div class="section-heading">
                <h2 class="section-eyebrow">{t.header}</h2>
                <h3>{t.title}</h3>
                <p>{t.desc}</p>
            </div>
            <div class="services-grid">
                { for cards }
            </div>

            <style>
                {r#"
                .services-section { padding: 6rem 1.5rem; background: #f8fafc; }
                .section-heading { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
                .section-eyebrow {
                    color: #d97706;
                    font-size: 1rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .section-heading h3 { font-size: 2.25rem; color: #0f172a; margin: 0 0 1rem; }
                .section-heading p { color: #475569; font-size: 1.1rem; }
                .services-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: white;
                    padding: 2rem;
                    border-radius: 12px;
                    border: 1px solid #f1f5f9;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    transition: box-shadow 0.2s ease;
                }
                .service-card:hover { box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1); }
                .service-icon {
                    font-size: 2.25rem;
                    background: #f8fafc;
                    width: fit-content;
                    padding: 0.75rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                }
                .service-card h4 { font-size: 1.25rem; color: #0f172a; margin: 0 0 0.75rem; }
                .service-card p { color: #475569; line-height: 1.7; margin-bottom: 1rem; }
                .service-actions { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; }
                .service-link { color: #1d4ed8; font-weight: 500; text-decoration: none; }
                .service-link:hover { color: #1e40af; }
                .service-tax-button {
                    background: #eff6ff;
                    color: #1e3a8a;
                    border: 1px solid #bfdbfe;
                    border-radius: 999px;
                    padding: 0.35rem 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                @media (max-width: 900px) {
                    .services-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
