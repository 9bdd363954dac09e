use std::time::Instant;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Single-shot text completion: one prompt in, one text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base_url) = &config.openai_base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.user_prompt)
                    .build()?
                    .into(),
            ])
            .max_completion_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build()?;

        let started = Instant::now();
        let response = self.client.chat().create(chat_request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::UpstreamError("Model returned an empty completion".to_string())
            })?;

        log::info!(
            "completion from {} took {}ms ({} chars)",
            self.model,
            started.elapsed().as_millis(),
            content.len()
        );

        Ok(content)
    }
}
