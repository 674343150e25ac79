use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::client::FioSource;
use crate::error::{Result, ShippingError};
use crate::models::responses::{MaterialData, ProductionLineData, StorageData};
use crate::models::{Material, ProductionLine, Storage};

const USER_AGENT: &str = concat!("fio-shipping/", env!("CARGO_PKG_VERSION"));

/// FIO REST client scoped to one user's planets.
#[derive(Clone)]
pub struct FioClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    username: String,
}

impl FioClient {
    pub fn new(base_url: &str, api_key: &str, username: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(FioClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            username: username.to_string(),
        })
    }

    async fn send(&self, path: &str, auth: bool) -> Result<(String, Response)> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("🌐 API: GET {}", url);

        let mut request = self.client.get(&url);
        if auth {
            let value = HeaderValue::from_str(&self.api_key)
                .map_err(|_| ShippingError::Config("FIO API key is not a valid header value".to_string()))?;
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await?;
        Ok((url, response))
    }

    /// Strict request: any non-success status is an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, auth: bool) -> Result<T> {
        let (url, response) = self.send(path, auth).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShippingError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Lenient request for per-planet data: FIO answers 204 or an error status
    /// when a planet has nothing recorded, which reads as "no data".
    async fn get_optional_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let (url, response) = self.send(path, true).await?;
        let status = response.status();
        if status.as_u16() >= 300 {
            tracing::debug!("FIO returned {} for {}, treating as empty", status, url);
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[async_trait]
impl FioSource for FioClient {
    async fn get_all_materials(&self) -> Result<Vec<Material>> {
        let data: Vec<MaterialData> = self.get_json("/material/allmaterials", false).await?;
        Ok(data.into_iter().map(Material::from).collect())
    }

    async fn get_player_planets(&self) -> Result<Vec<String>> {
        let path = format!("/production/planets/{}", self.username);
        self.get_json(&path, true).await
    }

    async fn get_production_lines(&self, planet: &str) -> Result<Vec<ProductionLine>> {
        let path = format!("/production/{}/{}", self.username, planet);
        let data: Option<Vec<ProductionLineData>> = self.get_optional_json(&path).await?;
        Ok(data
            .unwrap_or_default()
            .into_iter()
            .map(ProductionLine::from)
            .collect())
    }

    async fn get_storage(&self, planet: &str) -> Result<Storage> {
        let path = format!("/storage/{}/{}", self.username, planet);
        let data: Option<StorageData> = self.get_optional_json(&path).await?;
        Ok(data.map(Storage::from).unwrap_or_default())
    }
}
