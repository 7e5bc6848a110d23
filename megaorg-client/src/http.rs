/// Envelope-aware HTTP wrapper
///
/// `ApiClient` owns the reqwest client and the base URL, and funnels every
/// request through one place so error handling and logging stay
/// centralized: each failed operation is logged exactly once here, and the
/// typed error travels up to the caller untouched.

use reqwest::multipart::Form;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use megaorg_shared::envelope::{Envelope, ErrorBody};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Thin HTTP wrapper with a fixed base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the configured base URL
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(ApiClient {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET returning the unwrapped envelope payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.http.get(self.url(path));
        self.unwrap_envelope(path, request).await
    }

    /// POST with a JSON body, returning the unwrapped envelope payload
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.http.post(self.url(path)).json(body);
        self.unwrap_envelope(path, request).await
    }

    /// PUT with a JSON body, returning the unwrapped envelope payload
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.http.put(self.url(path)).json(body);
        self.unwrap_envelope(path, request).await
    }

    /// POST with a multipart body, returning the unwrapped envelope payload
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let request = self.http.post(self.url(path)).multipart(form);
        self.unwrap_envelope(path, request).await
    }

    /// PUT with a multipart body, returning the unwrapped envelope payload
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let request = self.http.put(self.url(path)).multipart(form);
        self.unwrap_envelope(path, request).await
    }

    /// DELETE, discarding the response body
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let result = async {
            let response = self.http.delete(self.url(path)).send().await?;
            Self::check_status(response).await?;
            Ok(())
        }
        .await;
        self.traced(path, result)
    }

    /// Sends the request, checks the status, and unwraps `{success, data}`
    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = async {
            let response = request.send().await?;
            let response = Self::check_status(response).await?;
            // Two-stage decode: a rejected envelope carries null data, so the
            // success flag has to be read before data is given its real type.
            let envelope: Envelope<serde_json::Value> = response.json().await?;
            if !envelope.success {
                return Err(ClientError::Rejected {
                    message: envelope.message,
                });
            }
            Ok(serde_json::from_value(envelope.data)?)
        }
        .await;
        self.traced(path, result)
    }

    /// Converts a failure status into `ClientError::Status`, consuming the
    /// optional `{message}` body for the notification layer
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: body.message,
        })
    }

    /// Logs every failed operation exactly once
    fn traced<T>(&self, path: &str, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(err) = &result {
            tracing::error!(path, error = %err, "API error");
        }
        result
    }
}
