use std::sync::Arc;

use crate::{
    constants::question_prompt::{
        QUESTIONS_PER_SET, QUESTION_GENERATION_PROMPT, QUESTION_SYSTEM_PROMPT,
    },
    errors::{AppError, AppResult},
    models::domain::{PrerequisiteSet, QuestionRecord},
    parsers::parse_question_blocks,
    services::model_service::{CompletionClient, CompletionRequest},
};

/// Challenge sets are only composed from at least this many quiz sets.
pub const MIN_PREREQUISITE_SETS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDifficulty {
    Standard,
    Challenging,
}

impl QuestionDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionDifficulty::Standard => "standard",
            QuestionDifficulty::Challenging => "challenging",
        }
    }
}

pub struct QuestionService {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
    temperature: f32,
}

impl QuestionService {
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client,
            max_tokens,
            temperature,
        }
    }

    /// Quiz questions drawn from extracted slide text.
    pub async fn generate_quiz(&self, slide_text: &str) -> AppResult<Vec<QuestionRecord>> {
        if slide_text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Slide text must not be empty".to_string(),
            ));
        }

        self.generate(slide_text, QuestionDifficulty::Standard).await
    }

    /// Harder questions built on the content of earlier quiz sets.
    pub async fn generate_challenge(
        &self,
        prerequisite_sets: &[PrerequisiteSet],
    ) -> AppResult<Vec<QuestionRecord>> {
        if prerequisite_sets.len() < MIN_PREREQUISITE_SETS {
            return Err(AppError::ValidationError(format!(
                "Select at least {} prerequisite quiz sets",
                MIN_PREREQUISITE_SETS
            )));
        }

        let context = challenge_context(prerequisite_sets);
        if context.is_empty() {
            return Err(AppError::ValidationError(
                "Could not find questions for the selected prerequisite sets".to_string(),
            ));
        }

        self.generate(&context, QuestionDifficulty::Challenging).await
    }

    async fn generate(
        &self,
        content: &str,
        difficulty: QuestionDifficulty,
    ) -> AppResult<Vec<QuestionRecord>> {
        let request = CompletionRequest {
            system_prompt: QUESTION_SYSTEM_PROMPT.to_string(),
            user_prompt: question_prompt(content, difficulty),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let completion = self.client.complete(request).await?;
        let questions = parse_question_blocks(&completion);

        if questions.is_empty() {
            log::warn!(
                "{} completion ({} chars) contained no question blocks",
                difficulty.as_str(),
                completion.len()
            );
        } else {
            log::info!(
                "generated {} {} questions",
                questions.len(),
                difficulty.as_str()
            );
        }

        Ok(questions)
    }
}

pub fn question_prompt(content: &str, difficulty: QuestionDifficulty) -> String {
    QUESTION_GENERATION_PROMPT
        .replace("{count}", &QUESTIONS_PER_SET.to_string())
        .replace("{difficulty}", difficulty.as_str())
        .replace("{content}", content)
}

/// Every prerequisite question rendered as a block, in set order.
pub fn challenge_context(prerequisite_sets: &[PrerequisiteSet]) -> String {
    prerequisite_sets
        .iter()
        .flat_map(|set| set.questions.iter())
        .map(|question| question.context_block())
        .collect()
}
