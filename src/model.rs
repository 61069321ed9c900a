//! Resource model
//!
//! Generic envelope types shared by every resource kind: a [`ResourceMeta`]
//! carrying identity (name, mesh scope, version), an object-safe [`Resource`]
//! contract the store operates through, and typed envelopes
//! ([`TypedResource`] / [`TypedResourceList`]) so concrete kinds are plain
//! serde structs implementing [`ResourceSpec`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::rest::envelope::EnvelopeError;

/// Identity of a resource: its name, the mesh it is scoped to, and an opaque
/// version token.
///
/// The version is reserved for optimistic concurrency; the remote store
/// always stamps it empty on write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMeta {
    pub name: String,
    pub mesh: String,
    pub version: String,
}

impl ResourceMeta {
    /// Meta with the given name and mesh and an empty version.
    pub fn new(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
            version: String::new(),
        }
    }
}

/// A concrete resource kind: a serde-serializable spec payload plus the type
/// tag it is registered under.
///
/// Spec fields are serialized at the same JSON object level as `type`,
/// `name`, and `mesh` (the flattened envelope), so specs must serialize to a
/// JSON object (or to `null` for kinds with an empty spec).
pub trait ResourceSpec:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    /// Type tag identifying this kind, e.g. `"TrafficRoute"`.
    const TYPE: &'static str;
}

/// Object-safe contract the store operates through.
///
/// Implemented by [`TypedResource`]; the store never inspects spec contents,
/// only moves them in and out as JSON.
pub trait Resource: Send {
    /// Type tag of this resource kind; immutable for a given value.
    fn resource_type(&self) -> &str;

    /// Server-confirmed identity, if this resource has been stamped by a
    /// successful store operation (or populated by the caller).
    fn meta(&self) -> Option<&ResourceMeta>;

    /// Stamp identity onto this resource. Called by the store on success.
    fn set_meta(&mut self, meta: ResourceMeta);

    /// Spec payload as a JSON value.
    fn spec_json(&self) -> Result<Value, EnvelopeError>;

    /// Replace the spec payload from a JSON value.
    fn set_spec_json(&mut self, spec: Value) -> Result<(), EnvelopeError>;
}

/// Object-safe contract for collections; insertion order is the server
/// response order and is never changed client-side.
pub trait ResourceList: Send {
    /// Type tag of contained items.
    fn item_type(&self) -> &str;

    /// Append one item decoded from a list response.
    fn push_item(&mut self, meta: ResourceMeta, spec: Value) -> Result<(), EnvelopeError>;
}

/// Generic resource envelope parameterized by a spec kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedResource<S: ResourceSpec> {
    pub meta: Option<ResourceMeta>,
    pub spec: S,
}

impl<S: ResourceSpec> TypedResource<S> {
    pub fn new(spec: S) -> Self {
        Self { meta: None, spec }
    }

    /// Resource with identity already attached, e.g. for update calls.
    pub fn with_meta(meta: ResourceMeta, spec: S) -> Self {
        Self {
            meta: Some(meta),
            spec,
        }
    }
}

impl<S: ResourceSpec> Resource for TypedResource<S> {
    fn resource_type(&self) -> &str {
        S::TYPE
    }

    fn meta(&self) -> Option<&ResourceMeta> {
        self.meta.as_ref()
    }

    fn set_meta(&mut self, meta: ResourceMeta) {
        self.meta = Some(meta);
    }

    fn spec_json(&self) -> Result<Value, EnvelopeError> {
        Ok(serde_json::to_value(&self.spec)?)
    }

    fn set_spec_json(&mut self, spec: Value) -> Result<(), EnvelopeError> {
        self.spec = serde_json::from_value(spec)?;
        Ok(())
    }
}

/// Generic list envelope parameterized by the item spec kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedResourceList<S: ResourceSpec> {
    pub items: Vec<TypedResource<S>>,
}

impl<S: ResourceSpec> TypedResourceList<S> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<S: ResourceSpec> ResourceList for TypedResourceList<S> {
    fn item_type(&self) -> &str {
        S::TYPE
    }

    fn push_item(&mut self, meta: ResourceMeta, spec: Value) -> Result<(), EnvelopeError> {
        let mut item = TypedResource::<S>::default();
        item.set_spec_json(spec)?;
        item.set_meta(meta);
        self.items.push(item);
        Ok(())
    }
}
