use super::controller;
use super::schema::{FormSchema, Resource};
use super::state::{FormState, ListState, Status};
use super::transport::GlooTransport;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

/// Reactive handle of a form page.
///
/// Holds the page state in a signal and runs the shared request lifecycle
/// against the configured API through the browser transport.
pub struct RemoteForm<S: FormSchema> {
    pub state: RwSignal<FormState<S>>,
    config: StoredValue<ApiConfig>,
}

impl<S: FormSchema> Clone for RemoteForm<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: FormSchema> Copy for RemoteForm<S> {}

impl<S: FormSchema> RemoteForm<S> {
    /// Must be called inside a component: reads [`ApiConfig`] from context.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::default()),
            config: StoredValue::new(expect_context::<ApiConfig>()),
        }
    }

    pub fn load(&self) {
        let state = self.state;
        let config = self.config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            controller::load_form::<S, _, _>(&GlooTransport, &config, &state).await;
        });
    }

    pub fn submit(&self) {
        // submit button is disabled while busy; also guard against Enter
        if self.state.with_untracked(|s| s.is_busy()) {
            return;
        }
        let state = self.state;
        let config = self.config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            controller::submit::<S, _, _>(&GlooTransport, &config, &state).await;
        });
    }

    /// Reactive read of one input
    pub fn field<R: 'static>(&self, f: fn(&S::Fields) -> R) -> Signal<R>
    where
        R: Send + Sync,
    {
        let state = self.state;
        Signal::derive(move || state.with(|s| f(&s.fields)))
    }

    pub fn set_field(&self, f: impl FnOnce(&mut S::Fields)) {
        self.state.update(|s| f(&mut s.fields));
    }

    pub fn items(&self) -> Signal<Vec<S::Item>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn result(&self) -> Signal<Option<f64>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.result))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_busy()))
    }
}

/// Reactive read-only list, e.g. agents offered in a selector
pub struct RemoteList<R: Resource> {
    pub state: RwSignal<ListState<R::Item>>,
    config: StoredValue<ApiConfig>,
}

impl<R: Resource> Clone for RemoteList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for RemoteList<R> {}

impl<R: Resource> RemoteList<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            config: StoredValue::new(expect_context::<ApiConfig>()),
        }
    }

    pub fn load(&self) {
        let state = self.state;
        let config = self.config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            controller::load_resource::<R, _, _, _>(&GlooTransport, &config, &state).await;
        });
    }

    /// Drop a stale load error, e.g. when the user starts a new action
    pub fn clear_error(&self) {
        self.state.update(|s| {
            if s.status.error().is_some() {
                s.status = Status::Idle;
            }
        });
    }

    pub fn items(&self) -> Signal<Vec<R::Item>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)))
    }
}
