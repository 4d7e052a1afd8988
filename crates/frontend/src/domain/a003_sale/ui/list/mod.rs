use crate::domain::a001_sales_agent::api::AgentOptions;
use crate::domain::a001_sales_agent::ui::picker::SalesAgentSelect;
use crate::domain::a003_sale::api::SaleForm;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::ui::Input;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::remote_form::{RemoteForm, RemoteList};
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;

fn sale_label(sale: &Sale) -> String {
    format!(
        "Vendedor: {} | Fecha: {} | Monto: {}",
        sale.agent_id,
        format_date(&sale.date),
        format_money(sale.amount)
    )
}

/// Sales page. Only sales recorded in this session are listed; they are
/// gone after a reload.
#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    let agents = RemoteList::<AgentOptions>::new();
    agents.load();
    let form = RemoteForm::<SaleForm>::new();

    let busy = form.is_busy();
    let items = form.items();
    let form_error = form.error();
    let agents_error = agents.error();
    // a submit outcome is newer than the one-off agents load
    let error = Signal::derive(move || form_error.get().or_else(|| agents_error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        agents.clear_error();
        form.submit();
    };

    view! {
        <div class="page" id="a003_sale--list">
            <PageHeader title="Registrar Venta"/>

            <form class="details-form" on:submit=on_submit>
                <SalesAgentSelect
                    agents=agents.items()
                    value=form.field(|f| f.agent_id.clone())
                    on_change=Callback::new(move |v: String| form.set_field(move |f| f.agent_id = v))
                />
                <Input
                    id="fecha"
                    label="Fecha:"
                    input_type="date"
                    placeholder="Seleccione la fecha"
                    required=true
                    value=form.field(|f| f.date.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.date = v))
                />
                <Input
                    id="monto"
                    label="Monto:"
                    input_type="number"
                    min="0"
                    step="0.01"
                    placeholder="Monto de la venta"
                    required=true
                    value=form.field(|f| f.amount.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.amount = v))
                />
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    "Registrar"
                </button>
            </form>

            <ErrorBox error=error />

            <h2>"Ventas Registradas"</h2>
            {move || {
                let sales = items.get();
                if sales.is_empty() {
                    view! { <p>"No hay ventas registradas en esta sesión."</p> }.into_any()
                } else {
                    view! {
                        <ul class="entity-list">
                            {sales.iter().map(|sale| view! {
                                <li>{sale_label(sale)}</li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
