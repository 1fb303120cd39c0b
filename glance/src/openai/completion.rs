//! One-shot chat completion.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::content::ContentBlock;
use crate::error::{Error, Result};
use crate::outcome::CompletionOutcome;

use super::client::OpenAI;
use super::types::CompletionResponse;

impl OpenAI {
    /// Send one user turn and classify the result.
    ///
    /// Never fails: transport errors, non-200 statuses and malformed bodies all
    /// come back as [`CompletionOutcome::Failure`].
    pub async fn complete(&self, blocks: &[ContentBlock]) -> CompletionOutcome {
        let outcome = CompletionOutcome::from(self.try_complete(blocks).await);
        if let CompletionOutcome::Failure { kind, diagnostic } = &outcome {
            warn!(?kind, %diagnostic, "completion failed");
        }
        outcome
    }

    /// Send one user turn and return the reply text.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be completed.
    /// - [`Error::Remote`] for any status other than 200.
    /// - [`Error::MalformedResponse`] if a 200 body lacks
    ///   `choices[0].message.content`.
    pub async fn try_complete(&self, blocks: &[ContentBlock]) -> Result<String> {
        let url = self.config.chat_url();
        let body = self.build_request(blocks);

        debug!(
            url = %url,
            model = %body.model,
            max_tokens = body.max_tokens,
            parts = blocks.len(),
            "sending chat completion request"
        );

        let response = self.authorized_post(&url).json(&body).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "remote returned an error");
            debug!(body = %error_text, "remote error body");
            return Err(Error::remote(status.as_u16()));
        }

        let response_text = response.text().await?;
        Self::parse_response(&response_text)
    }

    /// Extract `choices[0].message.content` from a 200 body.
    pub(crate) fn parse_response(body: &str) -> Result<String> {
        let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| {
            Error::malformed_response("valid OpenAI response", format!("parse error: {e}"))
        })?;

        let choice = parsed
            .choices
            .and_then(|choices| choices.into_iter().next())
            .ok_or_else(|| Error::malformed_response("at least one choice", "no choices"))?;

        let message = choice
            .message
            .ok_or_else(|| Error::malformed_response("choices[0].message", "no message"))?;

        match message.content {
            Some(content) => {
                debug!(
                    finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
                    model = parsed.model.as_deref().unwrap_or("unknown"),
                    "received completion"
                );
                Ok(content)
            }
            None => Err(Error::malformed_response(
                "choices[0].message.content",
                message
                    .refusal
                    .map_or_else(|| "no content".to_owned(), |r| format!("refusal: {r}")),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_response_success() {
        let body = r#"{"choices":[{"message":{"content":"a cat"}}]}"#;
        assert_eq!(OpenAI::parse_response(body), Ok("a cat".to_owned()));
    }

    #[test]
    fn test_parse_response_missing_paths() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            "not json",
            r#"{"choices":[{"message":{"content":42}}]}"#,
        ] {
            let err = OpenAI::parse_response(body).expect_err(body);
            assert_eq!(err.kind(), ErrorKind::MalformedResponse, "body: {body}");
        }
    }

    #[test]
    fn test_parse_response_reports_refusal() {
        let body = r#"{"choices":[{"message":{"content":null,"refusal":"cannot help"}}]}"#;
        let err = OpenAI::parse_response(body).expect_err("refusal has no content");
        assert!(err.to_string().contains("cannot help"));
    }
}
