use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, error};

use crate::api::dto::NotificationPageDto;
use crate::api::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::models::NotificationPage;

/// Thin wrapper around the notification REST endpoints. Every surface goes
/// through this seam; tests substitute their own implementation.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch the current user's notifications.
    async fn list_notifications(&self) -> ApiResult<NotificationPage>;

    /// Mark one notification read. Idempotent server-side; the client does
    /// not special-case an already-read id.
    async fn mark_read(&self, id: &str) -> ApiResult<()>;

    /// Mark every currently-unread notification read.
    async fn mark_all_read(&self) -> ApiResult<()>;
}

/// HTTP implementation over reqwest. Single attempt per call: no retries,
/// no caching, no backoff. Errors bubble to the caller.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: Client::new(),
            base_url,
            auth_token: auth_token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone(), config.auth_token.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<Response> {
        let response = request
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.auth_token),
            )
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = status.as_u16(), body = %body, "notification API call failed");
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Auth),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(body)),
            _ => Err(ApiError::Server {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[async_trait]
impl NotificationGateway for HttpGateway {
    async fn list_notifications(&self) -> ApiResult<NotificationPage> {
        let response = self
            .execute(self.client.get(self.endpoint("notifications/")))
            .await?;
        let page = response
            .json::<NotificationPageDto>()
            .await
            .map_err(ApiError::Decode)?;
        debug!(count = page.count, "fetched notifications");
        Ok(page.into())
    }

    async fn mark_read(&self, id: &str) -> ApiResult<()> {
        self.execute(
            self.client
                .post(self.endpoint(&format!("notifications/{}/read/", id))),
        )
        .await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> ApiResult<()> {
        self.execute(
            self.client
                .post(self.endpoint("notifications/mark-all-read/")),
        )
        .await?;
        Ok(())
    }
}
