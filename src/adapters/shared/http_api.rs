use crate::config::PollerConfig;
use crate::domain::notifications::{ApiError, Notification, NotificationError, NotificationId};
use crate::ports::NotificationApiPort;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};

const UNREAD_PATH: &str = "/notifications/unread";

/// Storefront notification endpoints over HTTP.
///
/// In the browser reqwest goes through `fetch`, so cookies and CORS follow the
/// page's rules. No request timeout is set.
pub struct HttpNotificationApi {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpNotificationApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, NotificationError> {
        let client = Client::builder()
            .build()
            .map_err(|e| NotificationError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    pub fn from_config(config: &PollerConfig) -> Result<Self, NotificationError> {
        config.validate()?;
        let api = Self::new(config.api_base_url.as_str())?;
        Ok(match &config.bearer_token {
            Some(token) => api.with_bearer_token(token.as_str()),
            None => api,
        })
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl NotificationApiPort for HttpNotificationApi {
    async fn fetch_unread(&self) -> Result<Vec<Notification>, ApiError> {
        let response = self
            .authorize(self.client.get(self.url(UNREAD_PATH)))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Notification>>()
            .await
            .map_err(|e| ApiError::Network(format!("Invalid unread notifications payload: {e}")))
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        let response = self
            .authorize(self.client.patch(self.url(&format!("/notifications/{id}/read"))))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        // 409: already read by another admin session.
        if status.is_success() || status == StatusCode::CONFLICT {
            Ok(())
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpNotificationApi::new("https://shop.example/api/").unwrap();
        assert_eq!(api.base_url(), "https://shop.example/api");
        assert_eq!(
            api.url(UNREAD_PATH),
            "https://shop.example/api/notifications/unread"
        );
    }

    #[test]
    fn test_from_config_rejects_empty_url() {
        let config = PollerConfig::new("");
        assert!(matches!(
            HttpNotificationApi::from_config(&config),
            Err(NotificationError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_carries_token() {
        let config = PollerConfig::new("https://shop.example/api").with_bearer_token("secret");
        let api = HttpNotificationApi::from_config(&config).unwrap();
        assert_eq!(api.bearer_token.as_deref(), Some("secret"));
    }
}
