//! Shared fixtures for integration tests: the sample resource kinds the
//! store is exercised with, the descriptor registering them, and transport
//! doubles for tests that must never reach the network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use meshstore::model::ResourceSpec;
use meshstore::remote::{HttpRequest, HttpResponse, RemoteStore, Transport};
use meshstore::rest::{ApiDescriptor, ResourceApi};
use meshstore::store::BoxError;

/// Mesh-scoped sample kind with a single spec field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleTrafficRoute {
    pub path: String,
}

impl ResourceSpec for SampleTrafficRoute {
    const TYPE: &'static str = "SampleTrafficRoute";
}

/// The global mesh kind; its spec is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {}

impl ResourceSpec for MeshSpec {
    const TYPE: &'static str = "Mesh";
}

/// A kind deliberately left out of [`sample_api`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnregisteredSpec {}

impl ResourceSpec for UnregisteredSpec {
    const TYPE: &'static str = "Unregistered";
}

pub fn sample_api() -> ApiDescriptor {
    ApiDescriptor::new()
        .register(
            SampleTrafficRoute::TYPE,
            ResourceApi::mesh_scoped("traffic-routes"),
        )
        .register(MeshSpec::TYPE, ResourceApi::global("meshes"))
}

/// Store talking to a mock server through the stock transport.
pub fn store_for(uri: &str) -> RemoteStore {
    RemoteStore::connect(sample_api(), uri.parse().expect("mock server uri"))
        .expect("build transport")
}

/// Transport double that counts invocations and answers 200 with an empty
/// object, for asserting that an operation never sends a request.
pub struct SpyTransport {
    calls: AtomicUsize,
}

impl SpyTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse {
            status: 200,
            body: b"{}".to_vec(),
        })
    }
}

/// Transport double that fails every exchange at the connection level.
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
