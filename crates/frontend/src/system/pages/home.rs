use leptos::prelude::*;
use leptos_router::components::A;

/// Sections reachable from the landing page: `(path, title)`
pub const SECTIONS: [(&str, &str); 4] = [
    ("/vendedores", "Vendedores"),
    ("/reglas", "Reglas de Comisión"),
    ("/ventas", "Ventas"),
    ("/comisiones", "Calcular Comisión"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1>"Bienvenido a MINICORE"</h1>
            <p>
                "Sistema de gestión de comisiones. Usa el menú para navegar entre las secciones principales."
            </p>
            <nav class="home-nav">
                {SECTIONS.iter().map(|(path, title)| view! {
                    <A href=*path attr:class="button button--primary">{*title}</A>
                }).collect_view()}
            </nav>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Página no encontrada"</h1>
            <A href="/">"Volver al inicio"</A>
        </div>
    }
}
