use std::sync::Arc;

use chrono::Duration;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        generation_client::{GeminiClient, GenerationClient},
        session_store::SessionStore,
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(GeminiClient::new(&config)?);
        log::info!("Using Gemini model {}", config.gemini_model);

        Ok(Self::with_client(config, client))
    }

    /// State backed by an arbitrary generation client.
    pub fn with_client(config: Config, client: Arc<dyn GenerationClient>) -> Self {
        Self {
            study_service: Arc::new(StudyService::new(client)),
            sessions: Arc::new(SessionStore::with_idle_timeout(Duration::minutes(
                config.session_idle_minutes,
            ))),
            config: Arc::new(config),
        }
    }
}
