use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;
use crate::error::AppError;
use crate::services::generation::TextGenerator;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: std::time::Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, AppError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        tracing::debug!(model = %request.model, messages = request.messages.len(), "OpenAI chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Upstream(format!("Request timed out: {}", e))
                } else {
                    AppError::Upstream(format!("Request error: {}", e))
                }
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::error!("OpenAI API error ({}): {}", status, response_text);
            return Err(AppError::Upstream(format!(
                "API error ({}): {}",
                status, response_text
            )));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::Upstream(format!("Failed to decode response: {}", e)))?;

        if let Some(usage) = &completion.usage {
            tracing::info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI usage"
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }];

        let completion = self.create_chat_completion(messages).await?;

        completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream("No text content in completion response".to_string()))
    }

    fn model_name(&self) -> &str {
        self.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn test_response_decoding() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"slides\": []}"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"slides\": []}")
        );
        assert_eq!(response.usage.unwrap().completion_tokens, 5);
    }
}
