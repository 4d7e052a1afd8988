//! Request lifecycle shared by every form page:
//! validate → submit → refresh, append or store → surface error.
//!
//! One attempt per user action; failures end up as a message in the page
//! status and are never retried.

use super::schema::{FormSchema, Resource, Submitted};
use super::state::{FormState, Listing, StateCell};
use super::transport::{ApiError, HttpTransport};
use crate::shared::api_utils::ApiConfig;
use serde::de::DeserializeOwned;

/// `GET` a JSON array into any listing.
///
/// Every failure is reported with `load_error`; the previous items stay.
pub async fn load_into<I, L, T, C>(transport: &T, url: &str, load_error: &str, cell: &C)
where
    I: DeserializeOwned,
    L: Listing<I>,
    T: HttpTransport + ?Sized,
    C: StateCell<L>,
{
    cell.modify(|state| state.begin_load());
    log::debug!("GET {}", url);

    let outcome = fetch_list::<I, T>(transport, url).await.map_err(|e| {
        log::warn!("GET {} failed: {}", url, e);
        load_error.to_string()
    });
    cell.modify(|state| state.finish_load(outcome));
}

async fn fetch_list<I, T>(transport: &T, url: &str) -> Result<Vec<I>, ApiError>
where
    I: DeserializeOwned,
    T: HttpTransport + ?Sized,
{
    let body = transport.get(url).await?.into_success()?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

/// Load a read-only resource, e.g. the agents behind a selector
pub async fn load_resource<R, L, T, C>(transport: &T, config: &ApiConfig, cell: &C)
where
    R: Resource,
    L: Listing<R::Item>,
    T: HttpTransport + ?Sized,
    C: StateCell<L>,
{
    load_into::<R::Item, L, T, C>(transport, &config.url(R::PATH), R::LOAD_ERROR, cell).await;
}

/// Load the list shown next to a form. No-op for forms without a listing.
pub async fn load_form<S, T, C>(transport: &T, config: &ApiConfig, cell: &C)
where
    S: FormSchema,
    T: HttpTransport + ?Sized,
    C: StateCell<FormState<S>>,
{
    let Some(path) = S::LIST_PATH else {
        return;
    };
    load_into::<S::Item, FormState<S>, T, C>(transport, &config.url(path), S::LOAD_ERROR, cell)
        .await;
}

/// Validate and post the form, then apply the outcome.
///
/// A refresh is only issued after the create response has arrived.
pub async fn submit<S, T, C>(transport: &T, config: &ApiConfig, cell: &C)
where
    S: FormSchema,
    T: HttpTransport + ?Sized,
    C: StateCell<FormState<S>>,
{
    let mut request = None;
    cell.modify(|state| request = state.begin_submit());
    let Some(request) = request else {
        return;
    };

    let url = config.url(S::SUBMIT_PATH);
    log::debug!("POST {}", url);

    let outcome = post::<S, T>(transport, &url, &request).await.map_err(|e| {
        log::warn!("POST {} failed: {}", url, e);
        e.user_message(S::SUBMIT_ERROR)
    });
    let refresh = matches!(outcome, Ok(Submitted::Refresh));
    cell.modify(|state| state.finish_submit(outcome));

    if refresh {
        load_form::<S, T, C>(transport, config, cell).await;
    }
}

async fn post<S, T>(transport: &T, url: &str, request: &S::Request) -> Result<Submitted<S::Item>, ApiError>
where
    S: FormSchema,
    T: HttpTransport + ?Sized,
{
    let body = serde_json::to_value(request).map_err(ApiError::Encode)?;
    let reply = transport.post_json(url, &body).await?.into_success()?;
    S::on_success(&reply).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_form::mock::{MockTransport, Note, NoteForm, Notes};
    use crate::shared::remote_form::state::{ListState, Status};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn config() -> ApiConfig {
        ApiConfig::new("http://api.test")
    }

    fn form_cell() -> Rc<RefCell<FormState<NoteForm>>> {
        Rc::new(RefCell::new(FormState::default()))
    }

    #[test]
    fn test_load_replaces_items_and_clears_error() {
        let transport = MockTransport::new();
        transport.reply(
            "GET",
            "http://api.test/api/notes",
            200,
            r#"[{"id":1,"text":"a"}]"#,
        );
        let cell = form_cell();
        cell.borrow_mut().status = Status::Failed("old".into());

        block_on(load_form::<NoteForm, _, _>(&transport, &config(), &cell));

        let state = cell.borrow();
        assert_eq!(state.items, vec![Note { id: 1, text: "a".into() }]);
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_load_failure_uses_generic_message() {
        let transport = MockTransport::new();
        transport.reply("GET", "http://api.test/api/notes", 503, "maintenance");
        let cell = form_cell();
        cell.borrow_mut().items.push(Note { id: 5, text: "kept".into() });

        block_on(load_form::<NoteForm, _, _>(&transport, &config(), &cell));

        let state = cell.borrow();
        assert_eq!(state.status.error(), Some("No se pudieron cargar las notas"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_load_network_failure_and_bad_json() {
        let transport = MockTransport::new();
        let cell = Rc::new(RefCell::new(ListState::<Note>::default()));
        // no reply registered: the mock fails like an unreachable host
        block_on(load_resource::<Notes, _, _, _>(&transport, &config(), &cell));
        assert_eq!(cell.borrow().status.error(), Some("No se pudieron cargar las notas"));

        transport.reply("GET", "http://api.test/api/notes", 200, "not json");
        block_on(load_resource::<Notes, _, _, _>(&transport, &config(), &cell));
        assert_eq!(cell.borrow().status.error(), Some("No se pudieron cargar las notas"));
        assert!(cell.borrow().items.is_empty());
    }

    #[test]
    fn test_invalid_form_makes_no_request() {
        let transport = MockTransport::new();
        let cell = form_cell();

        block_on(submit::<NoteForm, _, _>(&transport, &config(), &cell));

        assert!(transport.calls().is_empty());
        assert_eq!(cell.borrow().status.error(), Some("El texto es obligatorio"));
    }

    #[test]
    fn test_refresh_runs_after_create() {
        let transport = MockTransport::new();
        transport.reply("POST", "http://api.test/api/notes", 201, "{}");
        transport.reply("GET", "http://api.test/api/notes", 200, r#"[{"id":2,"text":"b"}]"#);
        let cell = form_cell();
        cell.borrow_mut().fields.text = "b".into();

        block_on(submit::<NoteForm, _, _>(&transport, &config(), &cell));

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].body, Some(json!({"text": "b"})));
        assert_eq!(calls[1].method, "GET");

        let state = cell.borrow();
        assert_eq!(state.items, vec![Note { id: 2, text: "b".into() }]);
        assert_eq!(state.fields.text, "");
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_server_error_keeps_list_and_fields() {
        let transport = MockTransport::new();
        transport.reply("POST", "http://api.test/api/notes", 500, "");
        let cell = form_cell();
        {
            let mut state = cell.borrow_mut();
            state.fields.text = "c".into();
            state.items.push(Note { id: 1, text: "a".into() });
        }

        block_on(submit::<NoteForm, _, _>(&transport, &config(), &cell));

        let state = cell.borrow();
        assert_eq!(state.status.error(), Some("Error al crear nota"));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.fields.text, "c");
        assert_eq!(transport.calls().len(), 1);
    }
}
