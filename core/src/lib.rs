//! Client core for the user-records service.
//!
//! # Overview
//! Everything needed to drive a CRUD frontend for the `/users` REST
//! resource: DTOs, an `HttpRequest`/`HttpResponse` builder-parser client,
//! the form draft state machine, a pure list projection, and the root
//! coordinator that owns the in-memory collection.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url`. Each remote
//!   operation is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit and the core
//!   stays deterministic.
//! - Actual I/O happens behind the async [`Transport`] trait; the
//!   coordinator is generic over it, which is also how the tests script
//!   network outcomes.
//! - The collection lives only in [`App`]: replaced wholesale on fetch,
//!   patched by id after each successful mutation. There is no retry and
//!   no cache beyond that.

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod types;

pub use app::{App, FormMode};
pub use client::UserClient;
pub use error::{ApiError, TransportError};
pub use form::{FieldError, UserForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list::{project, ConfirmDelete, ListView, UserRow};
pub use types::{User, UserDraft};
