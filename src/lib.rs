//! meshstore - client-side resource store for a mesh control plane
//!
//! A uniform, storage-agnostic interface for creating, reading, updating,
//! listing, and deleting named, mesh-scoped configuration resources, with a
//! remote implementation that speaks JSON over HTTP to a control-plane API.
//!
//! # Architecture
//!
//! - [`model`] - Generic resource envelope: identity meta plus a typed spec
//! - [`rest`] - API descriptor (type tag to URL path) and the flattened JSON
//!   envelope codec
//! - [`store`] - The store contract, per-verb options, and the error taxonomy
//! - [`remote`] - The HTTP-backed store and its pluggable transport
//!
//! # Example
//!
//! ```no_run
//! use meshstore::model::{ResourceSpec, TypedResource};
//! use meshstore::remote::RemoteStore;
//! use meshstore::rest::{ApiDescriptor, ResourceApi};
//! use meshstore::store::{GetOptions, ResourceStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! struct TrafficRoute {
//!     path: String,
//! }
//!
//! impl ResourceSpec for TrafficRoute {
//!     const TYPE: &'static str = "TrafficRoute";
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiDescriptor::new()
//!     .register("TrafficRoute", ResourceApi::mesh_scoped("traffic-routes"))
//!     .register("Mesh", ResourceApi::global("meshes"));
//! let store = RemoteStore::connect(api, "http://localhost:5681".parse()?)?;
//!
//! let mut route = TypedResource::<TrafficRoute>::default();
//! store.get(&mut route, GetOptions::by_key("route-1", "default")).await?;
//! println!("{}", route.spec.path);
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod remote;
pub mod rest;
pub mod store;
