//! In-memory transport and a tiny schema for exercising remote forms natively.

use super::schema::{FormSchema, Resource, Submitted};
use super::transport::{ApiError, HttpReply, HttpTransport};
use async_trait::async_trait;
use contracts::shared::validation::require_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// One request seen by [`MockTransport`]
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Replies are queued per `(method, url)`; a call with nothing queued fails
/// as a network error.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(String, String), VecDeque<HttpReply>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, method: &str, url: &str, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(HttpReply::new(status, body));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer(&self, method: &'static str, url: &str, body: Option<Value>) -> Result<HttpReply, ApiError> {
        self.calls.borrow_mut().push(Call {
            method,
            url: url.to_string(),
            body,
        });
        self.replies
            .borrow_mut()
            .get_mut(&(method.to_string(), url.to_string()))
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| ApiError::Network(format!("no route to {}", url)))
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        self.answer("GET", url, None)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, ApiError> {
        self.answer("POST", url, Some(body.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteFields {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NoteRequest {
    pub text: String,
}

/// Refresh-mode form over `/api/notes`
pub struct NoteForm;

impl FormSchema for NoteForm {
    type Fields = NoteFields;
    type Request = NoteRequest;
    type Item = Note;

    const SUBMIT_PATH: &'static str = "/api/notes";
    const SUBMIT_ERROR: &'static str = "Error al crear nota";
    const LIST_PATH: Option<&'static str> = Some(Notes::PATH);
    const LOAD_ERROR: &'static str = Notes::LOAD_ERROR;

    fn validate(fields: &NoteFields) -> Result<(), String> {
        require_all(&[&fields.text], "El texto es obligatorio")
    }

    fn build_request(fields: &NoteFields) -> Result<NoteRequest, String> {
        Ok(NoteRequest {
            text: fields.text.clone(),
        })
    }

    fn on_success(_body: &str) -> Result<Submitted<Note>, serde_json::Error> {
        Ok(Submitted::Refresh)
    }
}

pub struct Notes;

impl Resource for Notes {
    type Item = Note;

    const PATH: &'static str = "/api/notes";
    const LOAD_ERROR: &'static str = "No se pudieron cargar las notas";
}
