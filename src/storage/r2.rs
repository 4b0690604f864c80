use std::collections::BTreeMap;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::R2Config;

use super::error::{StorageError, StorageResult};
use super::traits::{ObjectStore, PutOptions};

const API_BASE: &str = "https://api.cloudflare.com/client/v4/accounts";
const APP_VERSION: &str = "1.0";
/// CDN reads may serve content up to this many seconds stale.
const CDN_MAX_AGE_SECS: u64 = 3600;

/// Cloudflare R2 object-store client. Reads take the CDN fast path and
/// fall back to the authenticated API; writes always go through the API.
pub struct R2Client {
    config: R2Config,
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct PutPayload<'a> {
    key: &'a str,
    data: String,
    metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u64>,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    objects: Vec<ListObject>,
}

#[derive(Deserialize)]
struct ListObject {
    key: String,
}

impl R2Client {
    pub fn new(config: R2Config) -> Self {
        let base_url = format!(
            "{}/{}/r2/buckets/{}/objects",
            API_BASE, config.account_id, config.bucket
        );
        R2Client {
            config,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(key))
    }

    fn cdn_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.config.cdn_url.trim_end_matches('/'),
            urlencoding::encode(key)
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.config.access_key_id)
            .header("X-Auth-Email", &self.config.secret_access_key)
            .header("X-Timestamp", Utc::now().timestamp().to_string())
    }

    async fn status_error(response: reqwest::Response) -> StorageError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        StorageError::Http { status, message }
    }
}

/// Reversible text encoding applied to large bodies. Not real
/// compression; a stand-in that keeps the payload opaque to caches.
fn encode_body(data: &str) -> String {
    BASE64.encode(data)
}

/// JSON bodies always start with `{` or `[`, so anything else that
/// decodes cleanly is treated as encoded.
fn is_encoded(data: &str) -> bool {
    let trimmed = data.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return false;
    }
    BASE64.decode(data.trim()).is_ok()
}

fn decode_body(data: &str) -> String {
    if !is_encoded(data) {
        return data.to_string();
    }
    match BASE64.decode(data.trim()) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| data.to_string()),
        Err(_) => data.to_string(),
    }
}

#[async_trait]
impl ObjectStore for R2Client {
    async fn put(&self, key: &str, body: String, options: &PutOptions) -> StorageResult<String> {
        let data = if options.encode {
            encode_body(&body)
        } else {
            body
        };

        let mut metadata = BTreeMap::new();
        metadata.insert("content-type".to_string(), "application/json".to_string());
        metadata.insert("skylist-version".to_string(), APP_VERSION.to_string());
        metadata.insert("created-at".to_string(), Utc::now().to_rfc3339());
        for (name, value) in &options.metadata {
            metadata.insert(name.clone(), value.clone());
        }

        let payload = PutPayload {
            key,
            data,
            metadata,
            ttl: options.ttl,
        };

        let response = self
            .authed(self.http.put(self.object_url(key)))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(self.cdn_url(key))
    }

    async fn get(&self, key: &str) -> StorageResult<String> {
        // CDN fast path; any non-success falls through to the API.
        let cdn = self
            .http
            .get(self.cdn_url(key))
            .header("Cache-Control", format!("max-age={}", CDN_MAX_AGE_SECS))
            .send()
            .await;
        if let Ok(response) = cdn {
            if response.status().is_success() {
                let raw = response.text().await?;
                return Ok(decode_body(&raw));
            }
        }

        let response = self.authed(self.http.get(self.object_url(key))).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(key.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let raw = response.text().await?;
        Ok(decode_body(&raw))
    }

    async fn delete(&self, key: &str) -> StorageResult<bool> {
        let response = self
            .authed(self.http.delete(self.object_url(key)))
            .send()
            .await?;

        // Already absent counts as deleted.
        if !response.status().is_success()
            && response.status() != reqwest::StatusCode::NOT_FOUND
        {
            return Err(Self::status_error(response).await);
        }

        Ok(true)
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let response = self
            .authed(self.http.get(&self.base_url).query(&[("prefix", prefix)]))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let listing: ListResponse = response.json().await?;
        Ok(listing.objects.into_iter().map(|o| o.key).collect())
    }

    fn shareable_url(&self, key: &str, expires_in: u64) -> StorageResult<String> {
        let expires = Utc::now().timestamp() + expires_in as i64;
        Ok(format!("{}?expires={}", self.cdn_url(key), expires))
    }
}
