//! Remote catalog backend: a hosted `products` table behind a REST API.
//!
//! The hosted variant of the storefront keeps the catalog in a
//! backend-as-a-service table (PostgREST-style row endpoints). Reads and
//! writes are whole-row upserts and deletes; no multi-row transactional
//! guarantees are assumed. A failed call surfaces as [`RemoteError`] with a
//! message for the UI layer - it is not retried and it never mutates state
//! the caller already holds in memory.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use sdfm_core::{Product, ProductId};

const TABLE_PATH: &str = "rest/v1/products";

/// Errors from the remote catalog service.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service error ({status}): {message}")]
    Service {
        status: StatusCode,
        message: String,
    },

    /// The endpoint URL in configuration is not a valid base.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

/// Wire row for the hosted `products` table.
///
/// Field names follow the table's columns, which differ from the in-memory
/// [`Product`] only in the image column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRow {
    id: String,
    name: String,
    price: Decimal,
    image_url: String,
    hover_image_url: String,
    #[serde(default)]
    stock: u32,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image.clone(),
            hover_image_url: product.hover_image.clone(),
            stock: product.stock,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            price: row.price,
            image: row.image_url,
            hover_image: row.hover_image_url,
            stock: row.stock,
        }
    }
}

/// Async client for the hosted catalog table.
///
/// The API key lives only in the client's default headers, both marked
/// sensitive, so `Debug` output never contains it.
#[derive(Debug)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base: url::Url,
}

impl RemoteCatalog {
    /// Build a client for a service endpoint and API key.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::InvalidUrl`] if the endpoint cannot be used
    /// as a base URL, or an HTTP error if the client cannot be constructed.
    pub fn new(endpoint: &str, api_key: &SecretString) -> Result<Self, RemoteError> {
        let base = url::Url::parse(endpoint)
            .map_err(|e| RemoteError::InvalidUrl(format!("{endpoint}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RemoteError::InvalidUrl(endpoint.to_string()));
        }

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|_| RemoteError::InvalidUrl("API key contains invalid bytes".into()))?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| RemoteError::InvalidUrl("API key contains invalid bytes".into()))?;
        bearer.set_sensitive(true);
        headers.insert("apikey", key);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { client, base })
    }

    fn table_url(&self) -> Result<url::Url, RemoteError> {
        self.base
            .join(TABLE_PATH)
            .map_err(|e| RemoteError::InvalidUrl(e.to_string()))
    }

    /// Append an `id=eq.<id>` row filter. Ids are arbitrary merchant
    /// strings, so the value is percent-encoded; a raw `&` or `=` would
    /// corrupt the filter.
    fn append_id_filter(url: &mut url::Url, id: &ProductId) {
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"));
    }

    /// Fetch every row of the catalog table.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network or service failure.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, RemoteError> {
        let mut url = self.table_url()?;
        url.set_query(Some("select=*"));
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        let rows: Vec<ProductRow> = response.json().await?;
        debug!(count = rows.len(), "Fetched remote catalog");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Fetch a single row by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network or service failure.
    pub async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RemoteError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("select", "*");
        Self::append_id_filter(&mut url, id);
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        let mut rows: Vec<ProductRow> = response.json().await?;
        Ok(rows.pop().map(Product::from))
    }

    /// Upsert a whole product row.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network or service failure.
    pub async fn upsert(&self, product: &Product) -> Result<(), RemoteError> {
        let url = self.table_url()?;
        let response = self
            .client
            .post(url)
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[ProductRow::from(product)])
            .send()
            .await?;
        check_status(response).await?;
        info!(id = %product.id, "Upserted remote product");
        Ok(())
    }

    /// Delete a row by id. Deleting an absent row succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network or service failure.
    pub async fn delete(&self, id: &ProductId) -> Result<(), RemoteError> {
        let mut url = self.table_url()?;
        Self::append_id_filter(&mut url, id);
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        info!(%id, "Deleted remote product");
        Ok(())
    }

    /// Apply a stock adjustment as a read-clamp-upsert of the whole row.
    ///
    /// Unknown ids are a no-op, matching the local store's policy. There is
    /// no row lock; the clamp is optimistic, like the rest of the stock
    /// handling.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network or service failure; the row is
    /// left as it was.
    pub async fn adjust_stock(&self, id: &ProductId, delta: i64) -> Result<(), RemoteError> {
        let Some(mut product) = self.fetch(id).await? else {
            debug!(%id, delta, "Remote stock adjustment ignored: unknown product");
            return Ok(());
        };
        let adjusted = i64::from(product.stock).saturating_add(delta).max(0);
        product.stock = u32::try_from(adjusted).unwrap_or(u32::MAX);
        self.upsert(&product).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "(no response body)".to_string());
    Err(RemoteError::Service { status, message })
}
