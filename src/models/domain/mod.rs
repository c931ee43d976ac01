pub mod feature;
pub mod flashcard;
pub mod quiz_question;
pub use feature::{Feature, PromptOptions, QuizType, SummaryLength};
pub use flashcard::Flashcard;
pub use quiz_question::QuizQuestion;
