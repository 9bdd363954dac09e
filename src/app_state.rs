use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        model_service::{CompletionClient, OpenAiCompletionClient},
        question_service::QuestionService,
        tournament_service::TournamentService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub tournament_service: Arc<TournamentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate_for_production()?;

        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        Ok(Self::with_client(config, client))
    }

    /// Wires the services around any completion backend.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let question_service = Arc::new(QuestionService::new(
            Arc::clone(&client),
            config.quiz_max_tokens,
            config.temperature,
        ));
        let tournament_service = Arc::new(TournamentService::new(
            client,
            config.tournament_max_tokens,
            config.temperature,
        ));

        Self {
            question_service,
            tournament_service,
            config: Arc::new(config),
        }
    }
}
