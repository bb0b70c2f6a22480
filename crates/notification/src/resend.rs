//! Resend transactional email API transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, Email, Mailer};

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(timeout).build()?;
        let api_url = api_url.into().trim_end_matches('/').to_owned();

        Ok(Self {
            client,
            api_url,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &Email) -> Result<(), DeliveryError> {
        let request = SendEmailRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            text: email.text.as_deref(),
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // a 2xx is delivery; the id is only used for logging
        match response.json::<SendEmailResponse>().await {
            Ok(SendEmailResponse { id }) => tracing::info!(id = %id, "Email accepted by Resend"),
            Err(err) => tracing::warn!(err = %err, "Email accepted by Resend without a readable id"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
    };
    use serde_json::{Value, json};

    use super::*;

    #[derive(Clone, Default)]
    struct Provider {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
        reject: bool,
        empty_body: bool,
    }

    async fn emails(
        State(provider): State<Provider>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        provider.requests.lock().unwrap().push((auth, body));

        if provider.reject {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"name": "validation_error", "message": "domain not verified"})),
            )
                .into_response();
        }

        if provider.empty_body {
            return StatusCode::OK.into_response();
        }

        Json(json!({"id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c"})).into_response()
    }

    async fn spawn_provider(provider: Provider) -> String {
        let app = Router::new()
            .route("/emails", post(emails))
            .with_state(provider);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        format!("http://{addr}/")
    }

    fn email() -> Email {
        Email {
            from: "Marketside <noreply@marketside.agency>".to_owned(),
            to: "jane@example.com".to_owned(),
            reply_to: None,
            subject: "Hello".to_owned(),
            html: "<p>Hello</p>".to_owned(),
            text: Some("Hello".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_send_posts_json_with_bearer_token() {
        let provider = Provider::default();
        let url = spawn_provider(provider.clone()).await;
        let mailer = ResendMailer::new(url, "re_test", Duration::from_secs(5)).unwrap();

        mailer.send(&email()).await.unwrap();

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer re_test"));
        assert_eq!(body["to"], json!(["jane@example.com"]));
        assert_eq!(body["subject"], "Hello");
        assert_eq!(body["text"], "Hello");
        assert!(body.get("reply_to").is_none());
    }

    #[tokio::test]
    async fn test_accepted_send_without_id_is_success() {
        let provider = Provider {
            empty_body: true,
            ..Default::default()
        };
        let url = spawn_provider(provider.clone()).await;
        let mailer = ResendMailer::new(url, "re_test", Duration::from_secs(5)).unwrap();

        mailer.send(&email()).await.unwrap();

        assert_eq!(provider.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_rejection_is_reported() {
        let provider = Provider {
            reject: true,
            ..Default::default()
        };
        let url = spawn_provider(provider).await;
        let mailer = ResendMailer::new(url, "re_test", Duration::from_secs(5)).unwrap();

        match mailer.send(&email()).await {
            Err(DeliveryError::Rejected { status, body }) => {
                assert_eq!(status, 422);
                assert!(body.contains("domain not verified"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
