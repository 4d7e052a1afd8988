use serde::de::DeserializeOwned;
use serde::Serialize;

/// What a successful submit does to the page
#[derive(Clone, Debug, PartialEq)]
pub enum Submitted<I> {
    /// Re-read the whole list from the server.
    Refresh,
    /// Add the created entity to the session-local list.
    Append(I),
    /// Show a single computed value; the list and the form stay as they are.
    Computed(f64),
}

impl<I> Submitted<I> {
    /// Computed results keep the inputs so the user can tweak and recalculate.
    pub fn clears_form(&self) -> bool {
        !matches!(self, Submitted::Computed(_))
    }
}

/// A read-only collection endpoint (`GET` returning a JSON array)
pub trait Resource: 'static {
    type Item: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Path under the API base, e.g. `/api/vendedores`
    const PATH: &'static str;

    /// Message shown for any failed load
    const LOAD_ERROR: &'static str;
}

/// A form bound to a remote endpoint.
///
/// Fields hold raw input text; [`FormSchema::build_request`] turns them into
/// the typed body that is posted to [`FormSchema::SUBMIT_PATH`].
pub trait FormSchema: 'static {
    type Fields: Clone + Default + PartialEq + Send + Sync + 'static;
    type Request: Serialize;
    type Item: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Endpoint receiving the `POST`
    const SUBMIT_PATH: &'static str;

    /// Fallback message when a submit fails without a server explanation
    const SUBMIT_ERROR: &'static str;

    /// Listing of `Item`s shown next to the form, if the backend has one
    const LIST_PATH: Option<&'static str> = None;

    /// Message shown for a failed listing
    const LOAD_ERROR: &'static str = "No se pudo cargar la lista";

    /// Presence and ordering checks; no side effects.
    fn validate(fields: &Self::Fields) -> Result<(), String>;

    /// Parse the raw fields into the request body. Runs after `validate`.
    fn build_request(fields: &Self::Fields) -> Result<Self::Request, String>;

    /// Interpret the body of a 2xx reply.
    fn on_success(body: &str) -> Result<Submitted<Self::Item>, serde_json::Error>;
}
