use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every page reads the backend location from context.
    let config = ApiConfig::from_environment();
    log::info!("API base: {}", config.base_url());
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
