//! REST surface of the control-plane API
//!
//! - [`api`] - Resolves a resource type to the URL path scheme addressing it
//! - [`envelope`] - Encodes/decodes the flattened JSON envelope that merges
//!   identity fields (`type`, `name`, `mesh`) with spec fields at one object
//!   level

pub mod api;
pub mod envelope;

pub use api::{ApiDescriptor, ResourceApi};
pub use envelope::EnvelopeError;
