//! Collection API Client
//!
//! [`CollectionClient`] translates high-level collection operations into
//! HTTP calls against the versioned base URL. Every operation is a thin
//! composition of route construction, one request, one response transform,
//! and error normalization: one outbound request, one terminal outcome.
//!
//! The client holds only immutable configuration plus the injected
//! `reqwest::Client`; concurrent calls are fully independent. Dropping a
//! pending future abandons interest in its result; no cleanup is tied to
//! cancellation.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use fuel_domain::constants::PRIVATE_TOKEN_HEADER;
use fuel_domain::value_objects::{
    Collection, CollectionForm, FuelResource, Model, Page, Thumbnailed, World,
};
use fuel_domain::{Error, Result};
use url::Url;

use crate::config::ClientConfig;
use crate::{response, routes};

/// Client for the Fuel server's collection API.
///
/// Receives its HTTP client via constructor injection; callers sharing one
/// pooled `reqwest::Client` across components can pass it through
/// [`CollectionClient::with_http_client`].
#[derive(Debug, Clone)]
pub struct CollectionClient {
    config: ClientConfig,
    http: Client,
}

impl CollectionClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("fuel-collections/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Create a client around an externally managed `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List public collections, optionally filtered by a search term.
    pub async fn list(&self, search: Option<&str>) -> Result<Page<Collection>> {
        let mut url = routes::collections(&self.config)?;
        if let Some(term) = search {
            routes::apply_search(&mut url, term);
        }
        self.fetch_page(url).await
    }

    /// List collections the current identity may extend, optionally
    /// filtered by a search term.
    pub async fn list_extensible(&self, search: Option<&str>) -> Result<Page<Collection>> {
        let mut url = routes::collections(&self.config)?;
        routes::apply_extend(&mut url);
        if let Some(term) = search {
            routes::apply_search(&mut url, term);
        }
        self.fetch_page(url).await
    }

    /// List the collections owned by a user or organization.
    pub async fn list_by_owner(&self, owner: &str) -> Result<Page<Collection>> {
        self.fetch_page(routes::owner_collections(&self.config, owner)?)
            .await
    }

    /// List the collections containing the given asset.
    pub async fn list_containing(&self, resource: &FuelResource) -> Result<Page<Collection>> {
        self.fetch_page(routes::resource_collections(&self.config, resource)?)
            .await
    }

    /// Fetch a single collection.
    pub async fn get(&self, owner: &str, name: &str) -> Result<Collection> {
        let url = routes::collection(&self.config, owner, name)?;
        self.fetch_entity(self.request(Method::GET, url)).await
    }

    /// List the models inside a collection.
    pub async fn models(&self, owner: &str, name: &str) -> Result<Page<Model>> {
        self.fetch_page(routes::collection_models(&self.config, owner, name)?)
            .await
    }

    /// List the worlds inside a collection.
    pub async fn worlds(&self, owner: &str, name: &str) -> Result<Page<World>> {
        self.fetch_page(routes::collection_worlds(&self.config, owner, name)?)
            .await
    }

    /// Create a collection from an arbitrary JSON payload.
    pub async fn create(&self, payload: &serde_json::Value) -> Result<Collection> {
        let url = routes::collections(&self.config)?;
        self.fetch_entity(self.request(Method::POST, url).json(payload))
            .await
    }

    /// Partially update a collection. Absent form fields are left untouched
    /// on the server.
    pub async fn edit(&self, owner: &str, name: &str, form: &CollectionForm) -> Result<Collection> {
        let url = routes::collection(&self.config, owner, name)?;
        self.fetch_entity(self.request(Method::PATCH, url).form(form))
            .await
    }

    /// Delete a collection.
    pub async fn delete(&self, owner: &str, name: &str) -> Result<()> {
        let url = routes::collection(&self.config, owner, name)?;
        self.fetch_ack(self.request(Method::DELETE, url)).await
    }

    /// Add an asset to a collection. The asset's identity travels in the
    /// JSON body.
    pub async fn add_asset(
        &self,
        owner: &str,
        name: &str,
        resource: &FuelResource,
    ) -> Result<()> {
        let url = routes::collection_assets(&self.config, owner, name, resource.kind)?;
        let payload = serde_json::json!({
            "name": resource.name,
            "owner": resource.owner,
        });
        self.fetch_ack(self.request(Method::POST, url).json(&payload))
            .await
    }

    /// Remove an asset from a collection. The asset's identity travels in
    /// the query string.
    pub async fn remove_asset(
        &self,
        owner: &str,
        name: &str,
        resource: &FuelResource,
    ) -> Result<()> {
        let url = routes::collection_asset_removal(&self.config, owner, name, resource)?;
        self.fetch_ack(self.request(Method::DELETE, url)).await
    }

    /// Fetch the page after `page`.
    ///
    /// Rejects a page whose cursor is already exhausted: continuing past
    /// the terminal page is a caller error, surfaced as
    /// [`Error::Pagination`] rather than another request.
    pub async fn next_page<T>(&self, page: &Page<T>) -> Result<Page<T>>
    where
        T: DeserializeOwned + Thumbnailed,
    {
        let Some(url) = page.next_page.clone() else {
            return Err(Error::pagination("page has no next cursor"));
        };
        self.fetch_page(url).await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "issuing request");
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.config.private_token() {
            builder = builder.header(PRIVATE_TOKEN_HEADER, token);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        builder.send().await.map_err(response::transport_error)
    }

    async fn fetch_page<T>(&self, url: Url) -> Result<Page<T>>
    where
        T: DeserializeOwned + Thumbnailed,
    {
        let response = self.send(self.request(Method::GET, url)).await?;
        response::page(self.config.host(), self.config.base_url(), response).await
    }

    async fn fetch_entity<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned + Thumbnailed,
    {
        let response = self.send(builder).await?;
        let mut entity: T = response::entity(response).await?;
        entity.resolve_thumbnails(self.config.base_url());
        Ok(entity)
    }

    async fn fetch_ack(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.send(builder).await?;
        response::check(response).await?;
        Ok(())
    }
}
