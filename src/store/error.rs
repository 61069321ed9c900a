//! Store error taxonomy
//!
//! One enum covers every way a store operation can fail, so callers can
//! exhaustively match: configuration mistakes caught before I/O, transport
//! failures carried verbatim, the distinguished not-found case, structured
//! errors the API server returns, and the generic status-plus-body fallback.

use serde::{Deserialize, Serialize};

use crate::rest::envelope::EnvelopeError;

/// Transport failures are opaque to this layer and carried as-is.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One field-level cause inside a structured API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorCause {
    pub field: String,
    pub message: String,
}

/// Structured error payload the control plane returns on 4xx/5xx responses.
///
/// Only treated as authoritative when both `title` and `details` are
/// non-empty; anything else falls through to the generic HTTP error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{title}: {details}")]
pub struct ApiError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub causes: Vec<ApiErrorCause>,
}

impl ApiError {
    /// Whether the payload is complete enough to surface to callers.
    pub fn is_well_formed(&self) -> bool {
        !self.title.is_empty() && !self.details.is_empty()
    }
}

/// Everything a store operation can return instead of success.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The resource type has no entry in the API descriptor. Surfaced before
    /// any request is built.
    #[error("unknown resource type {0:?}")]
    UnknownType(String),

    /// The resolved path did not combine with the base URL.
    #[error("failed to construct request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network/IO failure from the transport, carried verbatim.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered 404 for a get or delete.
    #[error("resource not found: type={resource_type:?} name={name:?} mesh={mesh:?}")]
    NotFound {
        resource_type: String,
        name: String,
        mesh: String,
    },

    /// Structured error payload from the API server, causes preserved.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Unexpected status with no recoverable structured payload.
    #[error("({status}): {body}")]
    Http { status: u16, body: String },

    /// The response or request body failed envelope encoding/decoding.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Update called on a resource that has never been stamped with meta.
    #[error("resource has no meta: create it or get it before updating")]
    MissingMeta,
}

impl StoreError {
    pub(crate) fn not_found(resource_type: &str, name: &str, mesh: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            mesh: mesh.to_string(),
        }
    }

    /// Predicate for idempotent-delete and create-if-absent flows.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
