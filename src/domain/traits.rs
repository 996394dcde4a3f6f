use std::future::Future;
use std::time::Duration;

use futures::Stream;

use crate::domain::{Credentials, Error, Event, TransferRequest};

pub trait EventStream {
    type Events: Stream<Item = Result<Event, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Events;
}

/// Holds the single "is this session authenticated" flag between runs.
pub trait SessionStorage {
    fn load(&self) -> Result<bool, Error>;
    fn store(&mut self, authenticated: bool) -> Result<(), Error>;
}

/// Stand-in for elapsed time so simulated network calls can resolve instantly in tests.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

pub trait AuthService {
    /// Startup check of a previously stored session.
    fn restore(&self, stored: bool) -> impl Future<Output = bool>;
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), Error>>;
    fn biometric(&self) -> impl Future<Output = Result<(), Error>>;
}

pub trait TransferService {
    fn submit(&self, request: &TransferRequest) -> impl Future<Output = Result<(), Error>>;
}

pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Where rendered views, toasts and reported errors end up.
pub trait Screen {
    fn show(&mut self, view: &str) -> Result<(), Error>;
    fn toast(&mut self, toast: &Toast);
    fn report(&mut self, error: &Error);
}
