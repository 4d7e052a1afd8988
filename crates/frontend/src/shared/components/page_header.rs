use leptos::prelude::*;

/// Page title bar
#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                </div>
            </div>
        </div>
    }
}

/// Inline error box; renders nothing while there is no error
#[component]
pub fn ErrorBox(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box warning-box--error" role="alert">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}
