use crate::{
    errors::{AppError, AppResult},
    models::domain::{quiz_question::option_label, Flashcard, QuizQuestion},
};

pub const QUIZ_TEXT_FILENAME: &str = "quiz.txt";
pub const FLASHCARDS_TEXT_FILENAME: &str = "flashcards.txt";
pub const FLASHCARDS_CSV_FILENAME: &str = "flashcards.csv";

/// Plain-text quiz with lettered options, answers and explanations.
pub fn quiz_to_text(source: &str, questions: &[QuizQuestion]) -> String {
    let mut text = format!("Quiz Generated from: {}\n\n", source);

    for (i, question) in questions.iter().enumerate() {
        text.push_str(&format!("Question {}: {}\n", i + 1, question.question()));
        if let QuizQuestion::MultipleChoice { options, .. } = question {
            for (j, option) in options.iter().enumerate() {
                text.push_str(&format!("   {}. {}\n", option_label(j), option));
            }
        }
        text.push_str(&format!("Answer: {}\n", question.answer_text()));
        text.push_str(&format!("Explanation: {}\n\n", question.explanation()));
    }

    text
}

pub fn flashcards_to_text(source: &str, cards: &[Flashcard]) -> String {
    let mut text = format!("Flashcards Generated from: {}\n\n", source);

    for (i, card) in cards.iter().enumerate() {
        text.push_str(&format!(
            "Card {}:\nFront: {}\nBack: {}\n\n",
            i + 1,
            card.front,
            card.back
        ));
    }

    text
}

/// Two-column `front,back` CSV with a header row.
pub fn flashcards_to_csv(cards: &[Flashcard]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["front", "back"])?;
    for card in cards {
        writer.write_record([card.front.as_str(), card.back.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::InternalError(format!("CSV output is not UTF-8: {}", e)))
}
