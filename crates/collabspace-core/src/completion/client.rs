//! HTTP client for the remote AI completion service.
//!
//! Wire shapes live here and nowhere else; the host and the widget toolkit
//! only ever see [`CompletionContext`] and [`CompletionItem`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, limits};
use crate::editor::widget::{CompletionContext, CompletionItem};
use crate::error::Result;

/// Thin JSON client for the completion endpoint. Cheap to clone; every host
/// holds its own copy while all of them share the same stateless service.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request candidates for a cursor position. No retry, no backoff: a
    /// failed request means no suggestions for that keystroke.
    pub async fn complete(
        &self,
        language: &str,
        context: &CompletionContext,
    ) -> Result<Vec<CompletionItem>> {
        let request = CompletionRequest::new(language, context);
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<CompletionResponse>()
            .await?;

        Ok(response
            .completions
            .into_iter()
            .map(|c| CompletionItem {
                insert_text: c.insert_text.unwrap_or_else(|| c.label.clone()),
                label: c.label,
                detail: c.detail,
            })
            .collect())
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    language: String,
    context: RequestContext,
}

#[derive(Debug, Serialize)]
struct RequestContext {
    text_before_cursor: String,
    text_after_cursor: String,
    line: u32,
    column: u32,
}

impl CompletionRequest {
    /// Ships a bounded window around the cursor, not the whole buffer.
    fn new(language: &str, context: &CompletionContext) -> Self {
        Self {
            language: language.to_string(),
            context: RequestContext {
                text_before_cursor: tail_chars(
                    &context.text_before_cursor,
                    limits::MAX_CONTEXT_BEFORE_CHARS,
                ),
                text_after_cursor: head_chars(
                    &context.text_after_cursor,
                    limits::MAX_CONTEXT_AFTER_CHARS,
                ),
                line: context.line,
                column: context.column,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    completions: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    insert_text: Option<String>,
    detail: Option<String>,
}

fn tail_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    text.chars().skip(count - max).collect()
}

fn head_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(before: &str, after: &str) -> CompletionContext {
        CompletionContext {
            text_before_cursor: before.to_string(),
            text_after_cursor: after.to_string(),
            line: 0,
            column: before.len() as u32,
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let request = CompletionRequest::new("javascript", &context("let x = ", ";"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["language"], "javascript");
        assert_eq!(value["context"]["text_before_cursor"], "let x = ");
        assert_eq!(value["context"]["text_after_cursor"], ";");
    }

    #[test]
    fn test_response_defaults_to_empty() {
        let response: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.completions.is_empty());
    }

    #[test]
    fn test_candidate_falls_back_to_label() {
        let json = r#"{"completions": [{"label": "println!"}]}"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        let item = &response.completions[0];
        assert!(item.insert_text.is_none());
        assert_eq!(item.label, "println!");
    }

    #[test]
    fn test_context_window_is_bounded() {
        let before = "x".repeat(limits::MAX_CONTEXT_BEFORE_CHARS + 100);
        let after = "y".repeat(limits::MAX_CONTEXT_AFTER_CHARS + 100);
        let request = CompletionRequest::new("rust", &context(&before, &after));
        assert_eq!(
            request.context.text_before_cursor.chars().count(),
            limits::MAX_CONTEXT_BEFORE_CHARS
        );
        assert_eq!(
            request.context.text_after_cursor.chars().count(),
            limits::MAX_CONTEXT_AFTER_CHARS
        );
    }
}
