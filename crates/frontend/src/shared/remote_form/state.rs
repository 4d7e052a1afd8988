use super::schema::{FormSchema, Submitted};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use leptos::prelude::*;

/// Request lifecycle of a page.
///
/// A single value instead of separate loading/error flags, so a page can
/// never be loading and failed at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Anything that holds a list fed by `GET`.
pub trait Listing<I> {
    fn status_mut(&mut self) -> &mut Status;

    fn items_mut(&mut self) -> &mut Vec<I>;

    fn begin_load(&mut self) {
        *self.status_mut() = Status::Loading;
    }

    /// A failed load keeps whatever was shown before.
    fn finish_load(&mut self, outcome: Result<Vec<I>, String>) {
        match outcome {
            Ok(items) => {
                *self.items_mut() = items;
                *self.status_mut() = Status::Idle;
            }
            Err(msg) => *self.status_mut() = Status::Failed(msg),
        }
    }
}

/// Read-only list, used to fill selectors
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<I> {
    pub items: Vec<I>,
    pub status: Status,
}

impl<I> Default for ListState<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: Status::Idle,
        }
    }
}

impl<I> Listing<I> for ListState<I> {
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    fn items_mut(&mut self) -> &mut Vec<I> {
        &mut self.items
    }
}

/// Everything a form page shows: inputs, list, computed result and status
pub struct FormState<S: FormSchema> {
    pub fields: S::Fields,
    pub items: Vec<S::Item>,
    pub result: Option<f64>,
    pub status: Status,
    _schema: PhantomData<fn() -> S>,
}

impl<S: FormSchema> Default for FormState<S> {
    fn default() -> Self {
        Self {
            fields: S::Fields::default(),
            items: Vec::new(),
            result: None,
            status: Status::Idle,
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> Clone for FormState<S> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            items: self.items.clone(),
            result: self.result,
            status: self.status.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> FormState<S> {
    pub fn is_busy(&self) -> bool {
        self.status.is_loading()
    }

    /// Clear the previous error and result, then validate and build the body.
    ///
    /// Returns `None` when the form was rejected; the reason is in `status`.
    pub fn begin_submit(&mut self) -> Option<S::Request> {
        self.status = Status::Idle;
        self.result = None;

        let request = S::validate(&self.fields).and_then(|_| S::build_request(&self.fields));
        match request {
            Ok(request) => {
                self.status = Status::Loading;
                Some(request)
            }
            Err(msg) => {
                self.status = Status::Failed(msg);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<Submitted<S::Item>, String>) {
        match outcome {
            Ok(submitted) => {
                if submitted.clears_form() {
                    self.fields = S::Fields::default();
                }
                match submitted {
                    Submitted::Refresh => {}
                    Submitted::Append(item) => self.items.push(item),
                    Submitted::Computed(value) => self.result = Some(value),
                }
                self.status = Status::Idle;
            }
            Err(msg) => self.status = Status::Failed(msg),
        }
    }
}

impl<S: FormSchema> Listing<S::Item> for FormState<S> {
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    fn items_mut(&mut self) -> &mut Vec<S::Item> {
        &mut self.items
    }
}

/// Shared mutable home of a page state.
///
/// The async workflow only touches state through short closures, so no
/// borrow is ever held across an `.await`.
pub trait StateCell<T> {
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
