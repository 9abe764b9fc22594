use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{TAX_RATE, TAX_THRESHOLD};
use crate::i18n::Locale;
use crate::state::SiteAction;
use crate::tax::{format_aed, format_rate, TaxEstimator};

#[derive(Properties, PartialEq)]
pub struct TaxCalculatorProps {
    pub locale: Locale,
    pub on_action: Callback<SiteAction>,
}

#[function_component(TaxCalculator)]
pub fn tax_calculator(props: &TaxCalculatorProps) -> Html {
    let locale = props.locale;
    let t = &locale.content().tax;
    let estimator = use_state(TaxEstimator::default);

    let on_input = {
        let estimator = estimator.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*estimator).clone();
            if next.set_input(&input.value()) {
                estimator.set(next);
            } else {
                // Put the last accepted value back into the field.
                input.set_value(estimator.input());
            }
        })
    };

    let on_calculate = {
        let estimator = estimator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*estimator).clone();
            next.calculate();
            estimator.set(next);
        })
    };

    let go_back = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(SiteAction::BackToServices))
    };

    let result = match estimator.result() {
        Some(b) => html! {
            <div class="tax-result">
                <h3>{t.result_title}</h3>
                <table>
                    <tr><td>{t.total_profit}</td><td dir="ltr">{format_aed(b.total_profit, locale)}</td></tr>
                    <tr><td>{t.exempt_amount}</td><td dir="ltr">{format_aed(b.exempt_amount, locale)}</td></tr>
                    <tr><td>{t.taxable_amount}</td><td dir="ltr">{format_aed(b.taxable_amount, locale)}</td></tr>
                    <tr class="tax-due"><td>{t.tax_due}</td><td dir="ltr">{format_aed(b.tax_due, locale)}</td></tr>
                </table>
            </div>
        },
        None => html! { <p class="tax-hint">{t.empty_hint}</p> },
    };

    html! {
        <main class="tax-page">
            <button class="tax-back" onclick={go_back}>
                {locale.back_arrow()}{" "}{t.back}
            </button>
            <div class="tax-card">
                <h2 class="section-eyebrow">{t.header}</h2>
                <h1>{t.title}</h1>
                <p>{t.desc}</p>
                <ul class="tax-rules">
                    <li>{t.rule_exempt}{" ("}<span dir="ltr">{format_aed(TAX_THRESHOLD, locale)}</span>{")"}</li>
                    <li>{t.rule_taxable}{" "}<span dir="ltr">{format_rate(TAX_RATE)}</span></li>
                </ul>
                <form class="tax-form" onsubmit={on_calculate}>
                    <label>
                        {t.input_label}
                        <input type="text" inputmode="decimal"
                            placeholder={t.placeholder}
                            value={estimator.input().to_string()}
                            oninput={on_input} />
                    </label>
                    <button type="submit" class="tax-submit">{t.calculate}</button>
                </form>
                {result}
                <p class="tax-disclaimer">{t.disclaimer}</p>
            </div>

            <style>
                {r#"
                .tax-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 4rem;
                    background: #f8fafc;
                    max-width: 800px;
                    margin: 0 auto;
                    box-sizing: border-box;
                }
                .tax-back {
                    background: none;
                    border: none;
                    color: #1d4ed8;
                    font-weight: 500;
                    cursor: pointer;
                    margin-bottom: 2rem;
                    font-size: 1rem;
                }
                .tax-card {
                    background: white;
                    border-radius: 16px;
                    padding: 2.5rem;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                }
                .tax-card h1 { color: #0f172a; margin: 0 0 1rem; }
                .tax-card p { color: #475569; }
                .tax-rules { color: #334155; padding-inline-start: 1.25rem; }
                .tax-form { display: flex; gap: 1rem; align-items: flex-end; margin: 2rem 0; flex-wrap: wrap; }
                .tax-form label { flex: 1; display: flex; flex-direction: column; gap: 0.25rem; font-weight: 500; color: #334155; }
                .tax-form input { border: 1px solid #cbd5e1; border-radius: 8px; padding: 0.75rem 1rem; font: inherit; }
                .tax-submit {
                    background: #f59e0b;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 0.8rem 2rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .tax-result table { width: 100%; border-collapse: collapse; }
                .tax-result td { padding: 0.75rem 0; border-bottom: 1px solid #f1f5f9; }
                .tax-result td:last-child { text-align: end; font-variant-numeric: tabular-nums; }
                .tax-due td { font-weight: 700; color: #1e3a8a; font-size: 1.1rem; }
                .tax-hint { font-style: italic; }
                .tax-disclaimer { font-size: 0.8rem; color: #94a3b8; margin-top: 2rem; }
                "#}
            </style>
        </main>
    }
}
