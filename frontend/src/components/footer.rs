use chrono::Datelike;
use yew::prelude::*;

use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub locale: Locale,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let t = props.locale.content();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-mark">{"⚖"}</span>
                    <span>{t.brand.name}</span>
                </div>
                <div class="footer-legal">
                    <p>{format!("© {} {}", year, t.footer.rights)}</p>
                    <p class="footer-tagline">{t.footer.tagline}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer { background: #020617; color: #94a3b8; padding: 3rem 1.5rem; border-top: 1px solid #1e293b; }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-brand { display: flex; gap: 0.5rem; align-items: center; color: white; font-weight: 700; font-size: 1.1rem; }
                .footer-mark { color: #3b82f6; }
                .footer-legal { font-size: 0.875rem; text-align: end; }
                .footer-tagline { font-size: 0.75rem; margin-top: 0.5rem; }
                "#}
            </style>
        </footer>
    }
}
