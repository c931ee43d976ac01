use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Explain,
    Summarize,
    Quiz,
    Flashcards,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Explain,
        Feature::Summarize,
        Feature::Quiz,
        Feature::Flashcards,
    ];

    /// Label shown in the navigation control.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Explain => "📘 Explain Concept",
            Feature::Summarize => "📝 Summarize Notes",
            Feature::Quiz => "❓ Generate Quiz",
            Feature::Flashcards => "🎴 Flashcards",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::Explain => {
                "Enter any topic or concept you'd like explained in simple terms."
            }
            Feature::Summarize => {
                "Paste your notes or text below to get a clear, concise summary."
            }
            Feature::Quiz => "Create quizzes from your text or topic.",
            Feature::Flashcards => "Create interactive flashcards for effective memorization.",
        }
    }

    /// Noun used in user-facing error messages ("Error generating <noun>").
    pub fn noun(&self) -> &'static str {
        match self {
            Feature::Explain => "explanation",
            Feature::Summarize => "summary",
            Feature::Quiz => "quiz",
            Feature::Flashcards => "flashcards",
        }
    }

    /// Warning returned when the trigger action is fired with empty input.
    pub fn empty_input_warning(&self) -> &'static str {
        match self {
            Feature::Explain => "Please enter a topic to explain.",
            Feature::Summarize => "Please enter some notes to summarize.",
            Feature::Quiz => "Please enter a topic or text for quiz generation.",
            Feature::Flashcards => "Please enter a topic or text for flashcard generation.",
        }
    }
}

/// Summary length option. Unrecognized values fall back to `Medium`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SummaryLength {
    Brief,
    #[default]
    Medium,
    Detailed,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::Brief,
        SummaryLength::Medium,
        SummaryLength::Detailed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "Brief (2-3 sentences)",
            SummaryLength::Medium => "Medium (1 paragraph)",
            SummaryLength::Detailed => "Detailed (2-3 paragraphs)",
        }
    }

    /// Phrase injected into the summarize template.
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "in 2-3 sentences",
            SummaryLength::Medium => "in one paragraph",
            SummaryLength::Detailed => "in 2-3 paragraphs",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "brief",
            SummaryLength::Medium => "medium",
            SummaryLength::Detailed => "detailed",
        }
    }
}

impl From<&str> for SummaryLength {
    fn from(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|length| {
                value.eq_ignore_ascii_case(length.label())
                    || value.eq_ignore_ascii_case(length.key())
            })
            .unwrap_or_default()
    }
}

impl From<String> for SummaryLength {
    fn from(value: String) -> Self {
        SummaryLength::from(value.as_str())
    }
}

/// Quiz composition option. Unrecognized values fall back to `Mixed`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum QuizType {
    #[default]
    Mixed,
    McqOnly,
    TrueFalseOnly,
    ShortAnswerOnly,
}

impl QuizType {
    pub const ALL: [QuizType; 4] = [
        QuizType::Mixed,
        QuizType::McqOnly,
        QuizType::TrueFalseOnly,
        QuizType::ShortAnswerOnly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuizType::Mixed => "Mixed (MCQ + True/False)",
            QuizType::McqOnly => "Multiple Choice Only",
            QuizType::TrueFalseOnly => "True/False Only",
            QuizType::ShortAnswerOnly => "Short Answer Only",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            QuizType::Mixed => "mixed",
            QuizType::McqOnly => "mcq_only",
            QuizType::TrueFalseOnly => "true_false_only",
            QuizType::ShortAnswerOnly => "short_answer_only",
        }
    }
}

impl From<&str> for QuizType {
    fn from(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|quiz_type| {
                value.eq_ignore_ascii_case(quiz_type.label())
                    || value.eq_ignore_ascii_case(quiz_type.key())
            })
            .unwrap_or_default()
    }
}

impl From<String> for QuizType {
    fn from(value: String) -> Self {
        QuizType::from(value.as_str())
    }
}

pub const QUIZ_COUNT_MIN: u8 = 3;
pub const QUIZ_COUNT_MAX: u8 = 15;
pub const QUIZ_COUNT_DEFAULT: u8 = 5;
pub const FLASHCARD_COUNT_MIN: u8 = 3;
pub const FLASHCARD_COUNT_MAX: u8 = 20;
pub const FLASHCARD_COUNT_DEFAULT: u8 = 8;

/// Feature-specific knobs handed to the prompt builder. Fields a feature
/// does not use are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptOptions {
    #[serde(default)]
    pub length: SummaryLength,
    #[serde(default)]
    pub count: Option<u8>,
    #[serde(default)]
    pub quiz_type: QuizType,
}

impl PromptOptions {
    pub fn summary(length: SummaryLength) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn quiz(count: u8, quiz_type: QuizType) -> Self {
        Self {
            count: Some(count),
            quiz_type,
            ..Self::default()
        }
    }

    pub fn flashcards(count: u8) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    /// Question count clamped to the UI bounds.
    pub fn quiz_count(&self) -> u8 {
        self.count
            .unwrap_or(QUIZ_COUNT_DEFAULT)
            .clamp(QUIZ_COUNT_MIN, QUIZ_COUNT_MAX)
    }

    /// Card count clamped to the UI bounds.
    pub fn flashcard_count(&self) -> u8 {
        self.count
            .unwrap_or(FLASHCARD_COUNT_DEFAULT)
            .clamp(FLASHCARD_COUNT_MIN, FLASHCARD_COUNT_MAX)
    }
}
