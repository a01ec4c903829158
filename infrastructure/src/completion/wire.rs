//! Request and response shapes for the chat-completions endpoint.

use assistant_application::GatewayError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [RequestMessage<'a>; 1],
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct RequestMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> CompletionRequest<'a> {
    /// A single-turn request; earlier conversation turns are not sent.
    pub fn single_turn(model: &'a str, prompt: &'a str, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model,
            messages: [RequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's text.
///
/// A body without a `choices` sequence is malformed. An empty `choices` list,
/// or a first choice without text, is `Ok(None)`.
pub(super) fn parse_completion(body: &str) -> Result<Option<String>, GatewayError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("completion response: {e}")))?;

    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = CompletionRequest::single_turn("gpt-4", "Hello there", 0.7, 150);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "Hello there"}],
                "temperature": 0.7,
                "max_tokens": 150
            })
        );
    }

    #[test]
    fn test_parse_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Sure, happy to help."}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        assert_eq!(
            parse_completion(body).unwrap().as_deref(),
            Some("Sure, happy to help.")
        );
    }

    #[test]
    fn test_parse_empty_choices_is_none() {
        assert_eq!(parse_completion(r#"{"choices": []}"#).unwrap(), None);
    }

    #[test]
    fn test_parse_missing_or_empty_content_is_none() {
        assert_eq!(
            parse_completion(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap(),
            None
        );
        assert_eq!(
            parse_completion(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap(),
            None
        );
        assert_eq!(
            parse_completion(r#"{"choices": [{"message": {"content": ""}}]}"#).unwrap(),
            None
        );
        assert_eq!(parse_completion(r#"{"choices": [{}]}"#).unwrap(), None);
    }

    #[test]
    fn test_parse_without_choices_is_malformed() {
        assert!(matches!(
            parse_completion(r#"{"object": "chat.completion"}"#),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion("not json"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
