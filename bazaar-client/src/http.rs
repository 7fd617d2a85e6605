//! HTTP client for the storefront backend
//!
//! Covers the three order endpoints the core consumes: order details,
//! the customer's order list, and the status mutation used by the
//! cancel/reschedule flow.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::Order;
use shared::order::StatusUpdateRequest;

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Self::decode(&body)
    }

    /// Decode a successful response body
    fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Map non-2xx responses to typed errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(Self::error_for_status(status, text))
    }

    fn error_for_status(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            _ => ClientError::Internal(text),
        }
    }

    // ========== Order API ==========

    /// Fetch full order details
    pub async fn order_details(&self, order_id: &str) -> ClientResult<Order> {
        tracing::debug!(order_id, "fetching order details");
        self.get(&format!("order/details?orderId={order_id}")).await
    }

    /// Fetch one page of the customer's orders
    pub async fn user_orders(&self, page_no: u32) -> ClientResult<Vec<Order>> {
        tracing::debug!(page_no, "fetching user orders");
        self.get(&format!("orders/user?pageNo={page_no}")).await
    }

    /// Submit a cancel or reschedule status mutation
    ///
    /// Single attempt, no retry. On failure the caller re-fetches the
    /// order instead of mutating local state.
    pub async fn update_order_status(&self, request: &StatusUpdateRequest) -> ClientResult<()> {
        tracing::debug!(
            order_id = %request.order_id,
            status = %request.status,
            "updating order status"
        );
        let response = self
            .request(Method::PUT, "order/status")
            .json(request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
