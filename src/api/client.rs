//! Thin JSON client over the browser fetch API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{extract_error_message, ApiError};

/// Client for the backend REST API.
///
/// Callers pass already-validated parameters; the client only handles
/// transport, status classification and JSON decoding.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the same origin the app was served from.
    pub fn new() -> Self {
        Self::with_base_url("/api")
    }

    /// Client against an explicit base URL (used when the backend runs on
    /// another origin during development).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with the given query parameters and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = Request::get(&self.url(path));
        if !params.is_empty() {
            builder = builder.query(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            let message = match response.json::<serde_json::Value>().await {
                Ok(body) => extract_error_message(&body)
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
                Err(_) => format!("Request failed with status {status}"),
            };
            log::warn!("backend error {status}: {message}");
            return Err(ApiError::Backend { status, message });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        let client = ApiClient::new();
        assert_eq!(client.url("/products/"), "/api/products/");
    }

    #[test]
    fn trailing_slashes_on_base_are_dropped() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(
            client.url("/products/17/"),
            "http://localhost:8000/api/products/17/"
        );
    }
}
