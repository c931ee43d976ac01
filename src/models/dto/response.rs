use serde::Serialize;

use crate::{
    models::domain::{
        feature::{
            FLASHCARD_COUNT_DEFAULT, FLASHCARD_COUNT_MAX, FLASHCARD_COUNT_MIN, QUIZ_COUNT_DEFAULT,
            QUIZ_COUNT_MAX, QUIZ_COUNT_MIN,
        },
        Feature, QuizQuestion, QuizType, SummaryLength,
    },
    services::session_store::SessionState,
};

#[derive(Debug, Serialize)]
pub struct ProseResponse {
    pub feature: Feature,
    pub title: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub source: String,
    pub question_count: usize,
    pub questions: Vec<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuizResponse {
    pub fn from_session(state: &SessionState) -> Self {
        let questions = state.quiz().to_vec();
        Self {
            source: state.quiz_source().to_string(),
            question_count: questions.len(),
            message: questions
                .is_empty()
                .then(|| "No quiz questions to show.".to_string()),
            questions,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FlashcardView {
    pub index: usize,
    pub front: String,
    pub back: String,
    pub flipped: bool,
}

/// Stored deck as the page renders it: every card with its flip flag.
#[derive(Debug, Serialize)]
pub struct FlashcardDeckResponse {
    pub source: String,
    pub card_count: usize,
    pub cards: Vec<FlashcardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FlashcardDeckResponse {
    pub fn from_session(state: &SessionState) -> Self {
        let cards: Vec<FlashcardView> = state
            .flashcards()
            .iter()
            .enumerate()
            .map(|(index, card)| FlashcardView {
                index,
                front: card.front.clone(),
                back: card.back.clone(),
                flipped: state.is_flipped(index),
            })
            .collect();

        Self {
            source: state.flashcards_source().to_string(),
            card_count: cards.len(),
            message: cards
                .is_empty()
                .then(|| "No flashcards to show.".to_string()),
            cards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlipResponse {
    pub index: usize,
    pub flipped: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OptionChoice {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CountBounds {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// One entry of the navigation control.
#[derive(Debug, Serialize)]
pub struct FeatureDescriptor {
    pub feature: Feature,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lengths: Vec<OptionChoice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quiz_types: Vec<OptionChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<CountBounds>,
}

impl From<Feature> for FeatureDescriptor {
    fn from(feature: Feature) -> Self {
        let lengths = match feature {
            Feature::Summarize => SummaryLength::ALL
                .iter()
                .map(|length| OptionChoice {
                    value: enum_value(length),
                    label: length.label(),
                })
                .collect(),
            _ => Vec::new(),
        };
        let quiz_types = match feature {
            Feature::Quiz => QuizType::ALL
                .iter()
                .map(|quiz_type| OptionChoice {
                    value: enum_value(quiz_type),
                    label: quiz_type.label(),
                })
                .collect(),
            _ => Vec::new(),
        };
        let count = match feature {
            Feature::Quiz => Some(CountBounds {
                min: QUIZ_COUNT_MIN,
                max: QUIZ_COUNT_MAX,
                default: QUIZ_COUNT_DEFAULT,
            }),
            Feature::Flashcards => Some(CountBounds {
                min: FLASHCARD_COUNT_MIN,
                max: FLASHCARD_COUNT_MAX,
                default: FLASHCARD_COUNT_DEFAULT,
            }),
            _ => None,
        };

        FeatureDescriptor {
            feature,
            label: feature.label(),
            description: feature.description(),
            lengths,
            quiz_types,
            count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub title: String,
    pub icon: String,
    pub features: Vec<FeatureDescriptor>,
}

/// Serialized form of a unit enum variant, without the surrounding quotes.
fn enum_value<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(text)) => text,
        _ => String::new(),
    }
}
