use super::api::CalculateCommission;
use crate::domain::a001_sales_agent::api::AgentOptions;
use crate::domain::a001_sales_agent::ui::picker::SalesAgentSelect;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::ui::Input;
use crate::shared::date_utils::format_money;
use crate::shared::remote_form::{RemoteForm, RemoteList};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CalculateCommissionView() -> impl IntoView {
    let agents = RemoteList::<AgentOptions>::new();
    agents.load();
    let form = RemoteForm::<CalculateCommission>::new();

    let busy = form.is_busy();
    let result = form.result();
    let form_error = form.error();
    let agents_error = agents.error();
    let error = Signal::derive(move || form_error.get().or_else(|| agents_error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        agents.clear_error();
        form.submit();
    };

    view! {
        <div class="page" id="u501_calculate_commission--usecase">
            <PageHeader title="Calcular Comisión"/>

            <form class="details-form" on:submit=on_submit>
                <SalesAgentSelect
                    agents=agents.items()
                    value=form.field(|f| f.agent_id.clone())
                    on_change=Callback::new(move |v: String| form.set_field(move |f| f.agent_id = v))
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
                    "Calcular"
                </button>
            </form>

            <ErrorBox error=error />

            {move || result.get().map(|value| view! {
                <div class="commission-result">
                    <strong>"Comisión calculada:"</strong>
                    " "
                    {format_money(value)}
                </div>
            })}
        </div>
    }
}
