use crate::domain::a001_sales_agent::api::SalesAgentForm;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::ui::Input;
use crate::shared::remote_form::RemoteForm;
use leptos::prelude::*;

/// Agents page: create form plus the server list, re-read after each create
#[component]
#[allow(non_snake_case)]
pub fn SalesAgentList() -> impl IntoView {
    let form = RemoteForm::<SalesAgentForm>::new();
    form.load();

    let busy = form.is_busy();
    let items = form.items();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div class="page" id="a001_sales_agent--list">
            <PageHeader title="Vendedores"/>

            <form class="details-form" on:submit=on_submit>
                <Input
                    id="nombre"
                    label="Nombre:"
                    placeholder="Nombre del vendedor"
                    required=true
                    value=form.field(|f| f.name.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.name = v))
                />
                <Input
                    id="email"
                    label="Email:"
                    input_type="email"
                    placeholder="Email del vendedor"
                    required=true
                    value=form.field(|f| f.email.clone())
                    on_input=Callback::new(move |v: String| form.set_field(move |f| f.email = v))
                />
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    "Agregar"
                </button>
            </form>

            <ErrorBox error=form.error() />

            <h2>"Lista de Vendedores"</h2>
            {move || if busy.get() {
                view! { <p class="loading">"Cargando..."</p> }.into_any()
            } else {
                view! {
                    <ul class="entity-list">
                        {items.get().into_iter().map(|agent| view! {
                            <li>{agent.display_name()}</li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
