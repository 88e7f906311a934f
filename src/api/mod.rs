pub mod auth;
pub mod catalog;
pub mod client;
pub mod transport;
pub mod entities;
pub mod error;
pub mod sync;

#[cfg(test)]
pub(crate) mod mock;

pub use auth::{AuthApi, Credentials};
pub use catalog::{CatalogApi, CatalogItem};
pub use client::{event_channel, ApiClient, ApiEvent, ApiEventStream};
pub use transport::{FetchTransport, Http, HttpRequest, HttpResponse, Method, Transport};
pub use entities::{EntityPage, EntityRecord, Pagination};
pub use error::{ApiError, ErrorKind};
pub use sync::SyncRequest;
