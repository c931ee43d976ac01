use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::CurrentSession,
    services::{
        export_service::{
            flashcards_to_csv, flashcards_to_text, quiz_to_text, FLASHCARDS_CSV_FILENAME,
            FLASHCARDS_TEXT_FILENAME, QUIZ_TEXT_FILENAME,
        },
        http_helpers::{csv_download, text_download},
    },
};

#[get("/api/export/quiz.txt")]
pub async fn export_quiz_text(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.sessions.snapshot(session.0).await;
    if snapshot.quiz().is_empty() {
        return Err(AppError::NotFound("No quiz to export".to_string()));
    }

    let body = quiz_to_text(snapshot.quiz_source(), snapshot.quiz());
    Ok(text_download(QUIZ_TEXT_FILENAME, body))
}

#[get("/api/export/flashcards.txt")]
pub async fn export_flashcards_text(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.sessions.snapshot(session.0).await;
    if !snapshot.has_flashcards() {
        return Err(AppError::NotFound("No flashcards to export".to_string()));
    }

    let body = flashcards_to_text(snapshot.flashcards_source(), snapshot.flashcards());
    Ok(text_download(FLASHCARDS_TEXT_FILENAME, body))
}

#[get("/api/export/flashcards.csv")]
pub async fn export_flashcards_csv(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.sessions.snapshot(session.0).await;
    if !snapshot.has_flashcards() {
        return Err(AppError::NotFound("No flashcards to export".to_string()));
    }

    let body = flashcards_to_csv(snapshot.flashcards())?;
    Ok(csv_download(FLASHCARDS_CSV_FILENAME, body))
}
