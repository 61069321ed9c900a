//! API Descriptor - resolve resource types to URL paths
//!
//! Every resource kind is addressed by a collection segment; mesh-scoped
//! kinds nest under `/meshes/{mesh}`, global kinds (the mesh object itself)
//! sit at the top level. Whether a kind nests is a property of the kind, not
//! of the call site.

use std::collections::HashMap;

/// Path scheme for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceApi {
    collection: String,
    mesh_scoped: bool,
}

impl ResourceApi {
    /// A kind that nests under a mesh, e.g. `/meshes/{mesh}/traffic-routes`.
    pub fn mesh_scoped(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            mesh_scoped: true,
        }
    }

    /// A kind addressed at the top level, e.g. `/meshes`. The mesh argument
    /// to [`ResourceApi::item`] and [`ResourceApi::list`] is ignored.
    pub fn global(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            mesh_scoped: false,
        }
    }

    /// Path addressing a single item, for GET/PUT/DELETE.
    pub fn item(&self, mesh: &str, name: &str) -> String {
        if self.mesh_scoped {
            format!("/meshes/{}/{}/{}", mesh, self.collection, name)
        } else {
            format!("/{}/{}", self.collection, name)
        }
    }

    /// Path addressing the collection, for list GETs.
    pub fn list(&self, mesh: &str) -> String {
        if self.mesh_scoped {
            format!("/meshes/{}/{}", mesh, self.collection)
        } else {
            format!("/{}", self.collection)
        }
    }
}

/// Registry mapping resource type tags to their path schemes.
///
/// Lookups of unregistered types fail before any request is built, so a
/// misconfigured caller never reaches the network.
#[derive(Debug, Clone, Default)]
pub struct ApiDescriptor {
    resources: HashMap<String, ResourceApi>,
}

impl ApiDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind, replacing any previous registration for the tag.
    pub fn register(mut self, resource_type: impl Into<String>, api: ResourceApi) -> Self {
        self.resources.insert(resource_type.into(), api);
        self
    }

    /// Resolve a type tag to its path scheme.
    pub fn resource_api(&self, resource_type: &str) -> Option<&ResourceApi> {
        self.resources.get(resource_type)
    }
}
