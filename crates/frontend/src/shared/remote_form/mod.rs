//! Form bound to a remote collection.
//!
//! - schema.rs: what a page declares (endpoint, fields, validation, success mode)
//! - state.rs: page state and its transitions
//! - transport.rs: HTTP client trait and the browser implementation
//! - controller.rs: the async request lifecycle
//! - hook.rs: Leptos signals around the lifecycle

pub mod controller;
pub mod hook;
pub mod schema;
pub mod state;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use hook::{RemoteForm, RemoteList};
pub use schema::{FormSchema, Resource, Submitted};
pub use state::{FormState, ListState, Status};
pub use transport::{ApiError, GlooTransport, HttpReply, HttpTransport};
