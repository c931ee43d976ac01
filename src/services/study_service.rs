use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Feature, Flashcard, PromptOptions, QuizQuestion, QuizType, SummaryLength},
    services::{
        extractor::{extract, Extracted},
        generation_client::GenerationClient,
        prompt_builder::build_prompt,
    },
};

/// Runs one user action: build the prompt, make a single generation call,
/// extract the result. Holds no state of its own.
pub struct StudyService {
    client: Arc<dyn GenerationClient>,
}

impl StudyService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn run(
        &self,
        feature: Feature,
        input_text: &str,
        options: &PromptOptions,
    ) -> AppResult<Extracted> {
        let prompt = build_prompt(feature, input_text, options);
        log::info!(
            "Generating {} ({} prompt chars)",
            feature.noun(),
            prompt.len()
        );

        let raw = self.client.generate(&prompt).await.map_err(|e| match e {
            AppError::ServiceError(cause) => {
                log::error!("Error generating {}: {}", feature.noun(), cause);
                AppError::ServiceError(format!("Error generating {}: {}", feature.noun(), cause))
            }
            other => other,
        })?;

        extract(feature, &raw).map_err(|failure| {
            log::warn!(
                "Extraction failed for {} ({}): {}",
                feature.noun(),
                failure.reason,
                failure.detail
            );
            failure.into_app_error(feature)
        })
    }

    pub async fn explain(&self, topic: &str) -> AppResult<String> {
        let extracted = self
            .run(Feature::Explain, topic, &PromptOptions::default())
            .await?;
        expect_prose(extracted)
    }

    pub async fn summarize(&self, notes: &str, length: SummaryLength) -> AppResult<String> {
        let extracted = self
            .run(Feature::Summarize, notes, &PromptOptions::summary(length))
            .await?;
        expect_prose(extracted)
    }

    pub async fn generate_quiz(
        &self,
        input_text: &str,
        count: u8,
        quiz_type: QuizType,
    ) -> AppResult<Vec<QuizQuestion>> {
        let options = PromptOptions::quiz(count, quiz_type);
        match self.run(Feature::Quiz, input_text, &options).await? {
            Extracted::Quiz(questions) => {
                log::info!("Generated quiz with {} questions", questions.len());
                Ok(questions)
            }
            other => Err(unexpected(Feature::Quiz, &other)),
        }
    }

    pub async fn generate_flashcards(
        &self,
        input_text: &str,
        count: u8,
    ) -> AppResult<Vec<Flashcard>> {
        let options = PromptOptions::flashcards(count);
        match self.run(Feature::Flashcards, input_text, &options).await? {
            Extracted::Flashcards(cards) => {
                log::info!("Generated {} flashcards", cards.len());
                Ok(cards)
            }
            other => Err(unexpected(Feature::Flashcards, &other)),
        }
    }
}

fn expect_prose(extracted: Extracted) -> AppResult<String> {
    match extracted {
        Extracted::Prose(text) => Ok(text),
        other => Err(AppError::InternalError(format!(
            "expected prose, extracted {:?}",
            other
        ))),
    }
}

fn unexpected(feature: Feature, extracted: &Extracted) -> AppError {
    AppError::InternalError(format!(
        "{} extraction produced {:?}",
        feature.noun(),
        extracted
    ))
}
