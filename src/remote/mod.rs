//! Remote store
//!
//! Implements the store contract by mapping each verb to a JSON-over-HTTP
//! exchange against the control-plane API: resolve the resource type through
//! the [`ApiDescriptor`], render the path, run the request through the
//! injected [`Transport`], and classify the outcome into the store error
//! taxonomy before any verb-specific success handling.

mod transport;

pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::model::{Resource, ResourceList, ResourceMeta};
use crate::rest::envelope;
use crate::rest::{ApiDescriptor, ResourceApi};
use crate::store::{
    ApiError, CreateOptions, DeleteOptions, GetOptions, ListOptions, ResourceStore, StoreError,
    UpdateOptions,
};

/// Maximum length of response body to log (to avoid logging noise and
/// potentially sensitive payloads)
const MAX_LOG_BODY_LENGTH: usize = 200;

fn body_for_log(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > MAX_LOG_BODY_LENGTH {
        let truncated: String = text.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", truncated, body.len())
    } else {
        text.into_owned()
    }
}

/// Store implementation backed by a remote control-plane API.
///
/// Stateless across calls: the transport and descriptor are shared read-only
/// configuration, so one instance serves any number of concurrent callers.
pub struct RemoteStore {
    transport: Arc<dyn Transport>,
    api: ApiDescriptor,
    base_url: Url,
}

/// Outcome of one HTTP exchange, before verb-specific classification.
struct Exchange {
    status: u16,
    body: Vec<u8>,
    /// Structured payload recovered from a 4xx/5xx body, when well-formed.
    api_error: Option<ApiError>,
}

impl Exchange {
    /// Classify against the verb's expected success statuses: a recovered
    /// structured error wins over the generic fallback, and anything outside
    /// the success set becomes `(<code>): <body>`.
    fn expect_success(self, success: &[u16]) -> Result<Vec<u8>, StoreError> {
        if let Some(err) = self.api_error {
            return Err(err.into());
        }
        if !success.contains(&self.status) {
            return Err(StoreError::Http {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            });
        }
        Ok(self.body)
    }
}

impl RemoteStore {
    pub fn new(transport: Arc<dyn Transport>, api: ApiDescriptor, base_url: Url) -> Self {
        Self {
            transport,
            api,
            base_url,
        }
    }

    /// Store using the stock reqwest-backed transport.
    pub fn connect(api: ApiDescriptor, base_url: Url) -> Result<Self, reqwest::Error> {
        Ok(Self::new(Arc::new(ReqwestTransport::new()?), api, base_url))
    }

    fn resolve(&self, resource_type: &str) -> Result<&ResourceApi, StoreError> {
        self.api
            .resource_api(resource_type)
            .ok_or_else(|| StoreError::UnknownType(resource_type.to_string()))
    }

    /// Execute a request and pre-classify the response. Every verb funnels
    /// through here so the error translation is identical across operations.
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<Exchange, StoreError> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!("{} {}", method, url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(StoreError::Transport)?;

        let api_error = if response.status / 100 >= 4 {
            tracing::debug!(
                "API error: {} - {}",
                response.status,
                body_for_log(&response.body)
            );
            serde_json::from_slice::<ApiError>(&response.body)
                .ok()
                .filter(ApiError::is_well_formed)
        } else {
            None
        };

        Ok(Exchange {
            status: response.status,
            body: response.body,
            api_error,
        })
    }

    /// Create and update share the same wire behavior: PUT the flattened
    /// envelope to the item path, then stamp the confirmed identity (with an
    /// empty version) back onto the handle.
    async fn upsert(
        &self,
        resource: &mut dyn Resource,
        meta: ResourceMeta,
    ) -> Result<(), StoreError> {
        let resource_type = resource.resource_type().to_string();
        let path = self.resolve(&resource_type)?.item(&meta.mesh, &meta.name);

        let body = envelope::marshal(&resource_type, &meta, resource.spec_json()?)?;
        let exchange = self.do_request(Method::PUT, &path, &[], Some(body)).await?;
        exchange.expect_success(&[200, 201])?;

        resource.set_meta(meta);
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for RemoteStore {
    async fn create(
        &self,
        resource: &mut dyn Resource,
        opts: CreateOptions,
    ) -> Result<(), StoreError> {
        // A new resource has no meta yet; the target comes from the options.
        self.upsert(resource, ResourceMeta::new(opts.name, opts.mesh))
            .await
    }

    async fn update(
        &self,
        resource: &mut dyn Resource,
        _opts: UpdateOptions,
    ) -> Result<(), StoreError> {
        let meta = resource.meta().cloned().ok_or(StoreError::MissingMeta)?;
        self.upsert(resource, ResourceMeta::new(meta.name, meta.mesh))
            .await
    }

    async fn get(&self, resource: &mut dyn Resource, opts: GetOptions) -> Result<(), StoreError> {
        let resource_type = resource.resource_type().to_string();
        let path = self.resolve(&resource_type)?.item(&opts.mesh, &opts.name);

        let exchange = self.do_request(Method::GET, &path, &[], None).await?;
        if exchange.status == 404 {
            return Err(StoreError::not_found(&resource_type, &opts.name, &opts.mesh));
        }
        let body = exchange.expect_success(&[200])?;

        let (meta, spec) = envelope::unmarshal(&body, &resource_type)?;
        resource.set_spec_json(spec)?;
        resource.set_meta(meta);
        Ok(())
    }

    async fn list(
        &self,
        list: &mut dyn ResourceList,
        opts: ListOptions,
    ) -> Result<(), StoreError> {
        let item_type = list.item_type().to_string();
        let path = self.resolve(&item_type)?.list(&opts.mesh);

        // Pagination parameters are emitted only when set, so a server never
        // sees size=0 and mistakes it for an empty page request.
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(offset) = &opts.page_offset {
            query.push(("offset", offset.clone()));
        }
        if let Some(size) = opts.page_size {
            query.push(("size", size.to_string()));
        }

        let exchange = self.do_request(Method::GET, &path, &query, None).await?;
        let body = exchange.expect_success(&[200])?;

        for (meta, spec) in envelope::unmarshal_list(&body, &item_type)? {
            list.push_item(meta, spec)?;
        }
        Ok(())
    }

    async fn delete(
        &self,
        resource: &mut dyn Resource,
        opts: DeleteOptions,
    ) -> Result<(), StoreError> {
        let resource_type = resource.resource_type().to_string();
        let path = self.resolve(&resource_type)?.item(&opts.mesh, &opts.name);

        let exchange = self.do_request(Method::DELETE, &path, &[], None).await?;
        if exchange.status == 404 {
            return Err(StoreError::not_found(&resource_type, &opts.name, &opts.mesh));
        }
        exchange.expect_success(&[200])?;
        Ok(())
    }
}
