use crate::domain::a002_commission_rule::api::CommissionRuleForm;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::ui::Input;
use crate::shared::remote_form::RemoteForm;
use contracts::domain::a002_commission_rule::aggregate::CommissionRule;
use leptos::prelude::*;

/// `% porcentaje | inicio - fin`
fn rule_label(rule: &CommissionRule) -> String {
    format!(
        "% {} | {} - {}",
        rule.percentage, rule.period_start, rule.period_end
    )
}

#[component]
#[allow(non_snake_case)]
pub fn CommissionRuleList() -> impl IntoView {
    let form = RemoteForm::<CommissionRuleForm>::new();
    form.load();

    let busy = form.is_busy();
    let items = form.items();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div class="page" id="a002_commission_rule--list">
            <PageHeader title="Reglas de Comisión"/>

            <form class="details-form" on:submit=on_submit>
                <Input
                    id="porcentaje"
                    label="Porcentaje (%):"
                    input_type="number"
                    min="0"
                    max="100"
                    step="0.01"
                    placeholder="Porcentaje de comisión"
                    required=true
                    value=form.field(|f| f.percentage.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.percentage = v))
                />
                <Input
                    id="fechaInicio"
                    label="Fecha Inicio:"
                    input_type="date"
                    placeholder="Seleccione la fecha de inicio"
                    required=true
                    value=form.field(|f| f.period_start.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.period_start = v))
                />
                <Input
                    id="fechaFin"
                    label="Fecha Fin:"
                    input_type="date"
                    placeholder="Seleccione la fecha de fin"
                    required=true
                    value=form.field(|f| f.period_end.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.period_end = v))
                />
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    "Agregar"
                </button>
            </form>

            <ErrorBox error=form.error() />

            <h2>"Lista de Reglas"</h2>
            {move || if busy.get() {
                view! { <p class="loading">"Cargando..."</p> }.into_any()
            } else {
                view! {
                    <ul class="entity-list">
                        {items.get().iter().map(|rule| view! {
                            <li>{rule_label(rule)}</li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
