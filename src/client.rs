//! Deliver a [Message] to an incoming-webhook URL.

use crate::error::SendError;
use crate::message::Message;
use tracing::{debug, error};
use url::Url;

/// A client bound to one incoming-webhook URL.
///
/// Holds a [reqwest::Client] and hence a connection pool internally, so
/// cloning is cheap and a single client can serve any number of concurrent
/// sends.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    webhook_url: Url,
    http: reqwest::Client,
}

impl WebhookClient {
    /// A client using a default HTTP transport.
    pub fn new(webhook_url: Url) -> Self {
        Self::with_http_client(webhook_url, reqwest::Client::new())
    }

    /// A client using the given transport, for callers that need their own
    /// timeouts, proxying or TLS configuration.
    pub fn with_http_client(webhook_url: Url, http: reqwest::Client) -> Self {
        WebhookClient { webhook_url, http }
    }

    /// Post the message. Any status below 300 counts as delivered; anything
    /// else surfaces as [SendError::Rejected]. There are no retries.
    pub async fn send(&self, message: &Message) -> Result<(), SendError> {
        debug!(url = %self.webhook_url, "posting webhook message");

        let res = self
            .http
            .post(self.webhook_url.clone())
            .json(message)
            .send()
            .await?;

        let status = res.status();
        if status.as_u16() >= 300 {
            // The body read can itself fail after a rejection; the status
            // alone is still worth surfacing.
            let body = res.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "webhook rejected the message");
            return Err(SendError::Rejected { status, body });
        }

        Ok(())
    }
}

/// Post a message in one call, without holding on to a client.
///
/// Parses `webhook_url` up front, so an empty or malformed URL fails before
/// any request is made.
pub async fn send(webhook_url: &str, message: &Message) -> Result<(), SendError> {
    let url = Url::parse(webhook_url)?;
    WebhookClient::new(url).send(message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    async fn server() -> mockito::ServerGuard {
        mockito::Server::new_async().await
    }

    #[tokio::test]
    async fn test_send_success() {
        let mut srv = server().await;

        let mock = srv
            .mock("POST", "/services/T00/B00/XXX")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(r#"{"text":"Hello World!"}"#.into()))
            .expect(1)
            .create_async()
            .await;

        let msg = Message {
            text: Some("Hello World!".into()),
            ..Message::default()
        };

        let res = send(&format!("{}/services/T00/B00/XXX", srv.url()), &msg).await;

        mock.assert_async().await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let mut srv = server().await;

        let mock = srv
            .mock("POST", "/webhook")
            .with_status(400)
            .with_body("invalid_payload")
            .create_async()
            .await;

        let err = send(&format!("{}/webhook", srv.url()), &Message::default())
            .await
            .unwrap_err();

        mock.assert_async().await;

        match &err {
            SendError::Rejected { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body, "invalid_payload");
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[tokio::test]
    async fn test_send_server_error() {
        let mut srv = server().await;

        let mock = srv
            .mock("POST", "/webhook")
            .with_status(500)
            .with_body("rollup_error")
            .create_async()
            .await;

        let err = send(&format!("{}/webhook", srv.url()), &Message::default())
            .await
            .unwrap_err();

        mock.assert_async().await;

        let (status, body) = err.rejection().expect("wanted a rejection");
        assert_eq!(status.as_u16(), 500);
        assert_eq!(body, "rollup_error");
    }

    #[tokio::test]
    async fn test_send_empty_url() {
        let err = send("", &Message::default()).await.unwrap_err();

        assert!(matches!(err, SendError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        // Port 0 is never routable, so the request fails in the transport.
        let err = send("http://127.0.0.1:0/webhook", &Message::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SendError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_injected_http_client() {
        let mut srv = server().await;

        let mock = srv
            .mock("POST", "/webhook")
            .match_body(Matcher::JsonString(r#"{"mrkdwn":false}"#.into()))
            .create_async()
            .await;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let url = Url::parse(&format!("{}/webhook", srv.url())).unwrap();

        let msg = Message {
            mrkdwn: Some(false),
            ..Message::default()
        };

        let res = WebhookClient::with_http_client(url, http).send(&msg).await;

        mock.assert_async().await;
        assert!(res.is_ok());
    }
}
