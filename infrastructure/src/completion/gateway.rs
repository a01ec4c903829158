//! HTTP implementation of the completion gateway.

use super::wire::{CompletionRequest, parse_completion};
use crate::config::FileCompletionConfig;
use crate::error::InfraError;
use crate::http::{build_client, status_error, transport_error};
use assistant_application::{CompletionGateway, GatewayError, Service};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Sends single-turn requests to an OpenAI-compatible chat-completions URL.
pub struct OpenAiCompletionGateway {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    api_key: Option<String>,
}

impl OpenAiCompletionGateway {
    pub fn new(config: &FileCompletionConfig, api_key: Option<String>) -> Result<Self, InfraError> {
        Ok(Self {
            http: build_client()?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Build from config, resolving the key from the config or environment.
    pub fn from_config(config: &FileCompletionConfig) -> Result<Self, InfraError> {
        Self::new(config, config.resolve_api_key())
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>, GatewayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GatewayError::NotConfigured(Service::Completion));
        };

        let request =
            CompletionRequest::single_turn(&self.model, prompt, self.temperature, self.max_tokens);
        debug!("POST {} (model: {})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            warn!("Completion request failed with status {}", status);
            let fallback = format!("Failed to get response from ChatGPT (Status: {status})");
            return Err(status_error(Service::Completion, status, &body, &fallback));
        }

        parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{closed_url, serve_after, serve_once};
    use std::time::Duration;

    fn config(endpoint: &str) -> FileCompletionConfig {
        FileCompletionConfig {
            endpoint: endpoint.to_string(),
            ..FileCompletionConfig::default()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_sends_nothing() {
        let gateway = OpenAiCompletionGateway::new(&config("http://127.0.0.1:9/"), None).unwrap();
        assert!(!gateway.is_configured());
        assert_eq!(
            gateway.complete("hi").await,
            Err(GatewayError::NotConfigured(Service::Completion))
        );

        let blank =
            OpenAiCompletionGateway::new(&config("http://127.0.0.1:9/"), Some("  ".into())).unwrap();
        assert!(!blank.is_configured());
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_request_and_parses_reply() {
        let (url, request) = serve_once(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"We open at 9am."}}]}"#,
        )
        .await;
        let gateway = OpenAiCompletionGateway::new(&config(&url), Some("sk-test".into())).unwrap();

        let reply = gateway.complete("When do you open?").await.unwrap();
        assert_eq!(reply.as_deref(), Some("We open at 9am."));

        let raw = request.await.unwrap();
        assert!(raw.starts_with("POST / "));
        assert!(raw.to_lowercase().contains("authorization: bearer sk-test"));
        let body = raw.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 150);
        assert_eq!(json["messages"][0]["content"], "When do you open?");
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (url, _request) =
            serve_once(401, r#"{"error":{"message":"Incorrect API key provided"}}"#).await;
        let gateway = OpenAiCompletionGateway::new(&config(&url), Some("bad".into())).unwrap();

        let err = gateway.complete("hi").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Unauthorized {
                service: Service::Completion,
                status: 401
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_status_uses_fallback_message() {
        let (url, _request) = serve_once(500, "oops").await;
        let gateway = OpenAiCompletionGateway::new(&config(&url), Some("sk".into())).unwrap();

        let err = gateway.complete("hi").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 500,
                message: "Failed to get response from ChatGPT (Status: 500)".into()
            }
        );
    }

    #[tokio::test]
    async fn test_slow_reply_is_still_delivered() {
        let (url, _request) = serve_after(
            Duration::from_secs(31),
            200,
            r#"{"choices":[{"message":{"content":"late answer"}}]}"#,
        )
        .await;
        let gateway = OpenAiCompletionGateway::new(&config(&url), Some("sk".into())).unwrap();

        assert_eq!(
            gateway.complete("hi").await,
            Ok(Some("late answer".to_string()))
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let url = closed_url().await;
        let gateway = OpenAiCompletionGateway::new(&config(&url), Some("sk".into())).unwrap();

        let err = gateway.complete("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::Connection(_)));
        assert!(!err.is_configuration());
    }
}
