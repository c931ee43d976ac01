pub mod export_handler;
pub mod health_handler;
pub mod study_handler;

use actix_web::web;

pub use export_handler::{export_flashcards_csv, export_flashcards_text, export_quiz_text};
pub use health_handler::health_check;
pub use study_handler::{
    end_session, explain, flip_flashcard, generate_flashcards, generate_quiz, get_flashcards,
    get_quiz, list_features, summarize,
};

/// Registers every route the study assistant serves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_features)
        .service(explain)
        .service(summarize)
        .service(generate_quiz)
        .service(get_quiz)
        .service(generate_flashcards)
        .service(get_flashcards)
        .service(flip_flashcard)
        .service(export_quiz_text)
        .service(export_flashcards_text)
        .service(export_flashcards_csv)
        .service(end_session);
}
