use std::collections::VecDeque;

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt, stream, stream::BoxStream};
use serde_json::json;

use crate::domain::{
    chat::{
        entities::CompletionParams,
        ports::{CompletionClient, TokenStream},
    },
    common::entities::app_errors::CoreError,
};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Streaming client for the OpenAI Chat Completions API. Tokens are the
/// `delta.content` fragments of the SSE response.
pub struct OpenAiCompletionClient {
    http: reqwest::Client,
    api_key: String,
    default_model: String,
}

impl OpenAiCompletionClient {
    pub fn new(api_key: String, default_model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            default_model,
        }
    }
}

impl CompletionClient for OpenAiCompletionClient {
    async fn stream_chat(&self, params: CompletionParams) -> Result<TokenStream, CoreError> {
        let model = params
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());
        tracing::debug!(%model, "starting completion stream");

        let mut messages = Vec::new();
        if let Some(system) = &params.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        for message in &params.messages {
            messages.push(json!({ "role": message.role, "content": message.content }));
        }

        let mut body = json!({
            "model": model,
            "messages": messages,
            "stream": true,
        });
        if let Some(temperature) = params.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| CoreError::ExternalServiceError(err.to_string()))?;
        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "completion request failed");
            return Err(CoreError::ExternalServiceError(format!(
                "completion request failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes_stream()
            .map_err(|err| CoreError::ExternalServiceError(err.to_string()))
            .boxed();
        Ok(decode_sse(bytes))
    }
}

/// Turns a raw SSE byte stream into a stream of content tokens, ending at
/// the `[DONE]` sentinel. Chunk boundaries may fall mid-line, so lines are
/// reassembled through a carry-over buffer.
fn decode_sse(bytes: BoxStream<'static, Result<Bytes, CoreError>>) -> TokenStream {
    let decoder = SseDecoder {
        inner: bytes,
        buffer: String::new(),
        pending: VecDeque::new(),
        finished: false,
    };
    Box::pin(stream::unfold(decoder, |mut decoder| async move {
        decoder.next_token().await.map(|token| (token, decoder))
    }))
}

struct SseDecoder {
    inner: BoxStream<'static, Result<Bytes, CoreError>>,
    buffer: String,
    pending: VecDeque<String>,
    finished: bool,
}

impl SseDecoder {
    async fn next_token(&mut self) -> Option<Result<String, CoreError>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }
            match self.inner.next().await {
                Some(Ok(chunk)) => {
                    self.buffer.push_str(&String::from_utf8_lossy(&chunk));
                    self.drain_lines();
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => self.finished = true,
            }
        }
    }

    fn drain_lines(&mut self) {
        while let Some(pos) = self.buffer.find('\n') {
            let line = self.buffer[..pos].trim().to_string();
            self.buffer.drain(..=pos);

            let Some(payload) = line.strip_prefix("data: ") else {
                continue;
            };
            if payload == "[DONE]" {
                self.finished = true;
                self.buffer.clear();
                return;
            }
            if let Ok(event) = serde_json::from_str::<serde_json::Value>(payload)
                && let Some(delta) = event["choices"][0]["delta"]["content"].as_str()
                && !delta.is_empty()
            {
                self.pending.push_back(delta.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunked(parts: &[&str]) -> BoxStream<'static, Result<Bytes, CoreError>> {
        let items: Vec<Result<Bytes, CoreError>> = parts
            .iter()
            .map(|p| Ok(Bytes::copy_from_slice(p.as_bytes())))
            .collect();
        stream::iter(items).boxed()
    }

    #[tokio::test]
    async fn decodes_content_deltas_until_done() {
        let bytes = chunked(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"안녕\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"하세요\"}}]}\n\n",
            "data: [DONE]\n\n",
        ]);
        let tokens: Vec<String> = decode_sse(bytes).try_collect().await.unwrap();
        assert_eq!(tokens, vec!["안녕".to_string(), "하세요".to_string()]);
    }

    #[tokio::test]
    async fn reassembles_lines_split_across_chunks() {
        let bytes = chunked(&[
            "data: {\"choices\":[{\"delta\":",
            "{\"content\":\"to\"}}]}\ndata: {\"choices\":[{\"delta\":{\"content\":\"ken\"}}]}\n",
            "data: [DONE]\n",
        ]);
        let tokens: Vec<String> = decode_sse(bytes).try_collect().await.unwrap();
        assert_eq!(tokens.concat(), "token");
    }

    #[tokio::test]
    async fn skips_empty_deltas_and_role_frames() {
        let bytes = chunked(&[
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\n",
            "data: [DONE]\n",
        ]);
        let tokens: Vec<String> = decode_sse(bytes).try_collect().await.unwrap();
        assert_eq!(tokens, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn transport_error_is_yielded_then_the_stream_ends() {
        let items: Vec<Result<Bytes, CoreError>> = vec![
            Ok(Bytes::from_static(
                b"data: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\n",
            )),
            Err(CoreError::ExternalServiceError("connection reset".to_string())),
            Ok(Bytes::from_static(
                b"data: {\"choices\":[{\"delta\":{\"content\":\"b\"}}]}\n",
            )),
        ];
        let tokens: Vec<Result<String, CoreError>> =
            decode_sse(stream::iter(items).boxed()).collect().await;
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].as_deref(), Ok("a"));
        assert!(matches!(
            tokens[1],
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn nothing_after_done_is_decoded() {
        let bytes = chunked(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\n",
            "data: [DONE]\ndata: {\"choices\":[{\"delta\":{\"content\":\"b\"}}]}\n",
        ]);
        let tokens: Vec<String> = decode_sse(bytes).try_collect().await.unwrap();
        assert_eq!(tokens, vec!["a".to_string()]);
    }
}
