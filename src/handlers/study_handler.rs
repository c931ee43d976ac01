use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::{expired_session_cookie, CurrentSession},
    models::{
        domain::Feature,
        dto::{
            request::{ExplainRequest, FlashcardsRequest, QuizRequest, SummarizeRequest},
            response::{
                FeatureDescriptor, FeaturesResponse, FlashcardDeckResponse, FlipResponse,
                MessageResponse, ProseResponse, QuizResponse,
            },
        },
    },
};

/// Rejects blank input with the feature's warning text.
fn require_input(feature: Feature, input: &str) -> AppResult<()> {
    if input.trim().is_empty() {
        return Err(AppError::BadRequest(feature.empty_input_warning().to_string()));
    }
    Ok(())
}

#[get("/api/features")]
pub async fn list_features(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(FeaturesResponse {
        title: state.config.app_title.clone(),
        icon: state.config.app_icon.clone(),
        features: Feature::ALL.into_iter().map(FeatureDescriptor::from).collect(),
    })
}

#[post("/api/explain")]
pub async fn explain(
    state: web::Data<AppState>,
    request: web::Json<ExplainRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    require_input(Feature::Explain, &request.topic)?;
    request.validate()?;

    let content = state.study_service.explain(&request.topic).await?;
    Ok(HttpResponse::Ok().json(ProseResponse {
        feature: Feature::Explain,
        title: "💡 Explanation",
        content,
    }))
}

#[post("/api/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    require_input(Feature::Summarize, &request.notes)?;
    request.validate()?;

    let content = state
        .study_service
        .summarize(&request.notes, request.length)
        .await?;
    Ok(HttpResponse::Ok().json(ProseResponse {
        feature: Feature::Summarize,
        title: "📋 Summary",
        content,
    }))
}

#[post("/api/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    require_input(Feature::Quiz, &request.input)?;
    request.validate()?;

    // Nothing is stored unless generation and extraction both succeed.
    let questions = state
        .study_service
        .generate_quiz(&request.input, request.count, request.quiz_type)
        .await?;

    let response = state
        .sessions
        .update(session.0, |s| {
            s.store_quiz(questions, &request.input);
            QuizResponse::from_session(s)
        })
        .await;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.sessions.snapshot(session.0).await;
    Ok(HttpResponse::Ok().json(QuizResponse::from_session(&snapshot)))
}

#[post("/api/flashcards")]
pub async fn generate_flashcards(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<FlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    require_input(Feature::Flashcards, &request.input)?;
    request.validate()?;

    let cards = state
        .study_service
        .generate_flashcards(&request.input, request.count)
        .await?;

    let response = state
        .sessions
        .update(session.0, |s| {
            s.store_flashcards(cards, &request.input);
            FlashcardDeckResponse::from_session(s)
        })
        .await;
    Ok(HttpResponse::Ok().json(response))
}

/// Renders the stored deck. Never triggers a generation call.
#[get("/api/flashcards")]
pub async fn get_flashcards(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.sessions.snapshot(session.0).await;
    Ok(HttpResponse::Ok().json(FlashcardDeckResponse::from_session(&snapshot)))
}

#[post("/api/flashcards/{index}/flip")]
pub async fn flip_flashcard(
    state: web::Data<AppState>,
    session: CurrentSession,
    index: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = index.into_inner();

    let missing = || {
        AppError::NotFound(format!(
            "Flashcard {} does not exist in this session",
            index + 1
        ))
    };

    // Unknown sessions are not registered by a flip.
    let flipped = state
        .sessions
        .update_existing(session.0, |s| {
            (index < s.flashcards().len()).then(|| s.toggle_flip(index))
        })
        .await
        .flatten()
        .ok_or_else(missing)?;

    Ok(HttpResponse::Ok().json(FlipResponse { index, flipped }))
}

#[delete("/api/session")]
pub async fn end_session(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    state.sessions.end_session(session.0).await;

    Ok(HttpResponse::Ok()
        .cookie(expired_session_cookie())
        .json(MessageResponse {
            message: "Session ended".to_string(),
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use crate::{
        config::Config,
        middleware::{session_cookie, SessionMiddleware},
        services::{generation_client::MockGenerationClient, session_store::SessionId},
        test_utils::{
            fixtures::{FLASHCARD_REPLY, MIXED_QUIZ_REPLY, NO_JSON_REPLY},
            test_helpers::assert_error_status,
        },
    };

    fn state_with(mock: MockGenerationClient) -> AppState {
        AppState::with_client(Config::test_config(), Arc::new(mock))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .wrap(SessionMiddleware)
                    .configure(crate::handlers::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn explain_returns_prose() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok("Gravity pulls things together.".to_string()));
        let app = app!(state_with(mock));

        let req = test::TestRequest::post()
            .uri("/api/explain")
            .set_json(serde_json::json!({ "topic": "Gravity" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["feature"], "explain");
        assert_eq!(body["content"], "Gravity pulls things together.");
    }

    #[actix_web::test]
    async fn blank_input_is_rejected_without_generation() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate().never();
        let app = app!(state_with(mock));

        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .set_json(serde_json::json!({ "notes": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please enter some notes to summarize.");
    }

    #[actix_web::test]
    async fn quiz_count_outside_bounds_is_rejected() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate().never();
        let app = app!(state_with(mock));

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(serde_json::json!({ "input": "Rivers", "count": 30 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn quiz_is_stored_for_later_rendering() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(MIXED_QUIZ_REPLY.to_string()));
        let app = app!(state_with(mock));
        let session = SessionId::new();

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .cookie(session_cookie(session))
            .set_json(serde_json::json!({ "input": "Plants", "count": 3 }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["question_count"], 3);
        assert_eq!(body["questions"][1]["type"], "true_false");

        let req = test::TestRequest::get()
            .uri("/api/quiz")
            .cookie(session_cookie(session))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["source"], "Plants");
        assert_eq!(body["question_count"], 3);
    }

    #[actix_web::test]
    async fn flashcards_generate_then_flip_one_card() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(FLASHCARD_REPLY.to_string()));
        let app = app!(state_with(mock));
        let session = SessionId::new();

        let req = test::TestRequest::post()
            .uri("/api/flashcards")
            .cookie(session_cookie(session))
            .set_json(serde_json::json!({ "input": "Letters", "count": 3 }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["card_count"], 1);
        assert_eq!(body["cards"][0]["flipped"], false);

        let req = test::TestRequest::post()
            .uri("/api/flashcards/0/flip")
            .cookie(session_cookie(session))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["flipped"], true);

        let req = test::TestRequest::get()
            .uri("/api/flashcards")
            .cookie(session_cookie(session))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cards"][0]["flipped"], true);
    }

    #[actix_web::test]
    async fn flipping_missing_card_is_not_found() {
        let app = app!(state_with(MockGenerationClient::new()));

        let req = test::TestRequest::post()
            .uri("/api/flashcards/4/flip")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn cookieless_flips_leave_no_sessions_behind() {
        let state = state_with(MockGenerationClient::new());
        let sessions = state.sessions.clone();
        let app = app!(state);

        for _ in 0..50 {
            let req = test::TestRequest::post()
                .uri("/api/flashcards/0/flip")
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }

        assert_eq!(sessions.session_count().await, 0);
    }

    #[actix_web::test]
    async fn extraction_failure_returns_raw_reply() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(NO_JSON_REPLY.to_string()));
        let app = app!(state_with(mock));

        let req = test::TestRequest::post()
            .uri("/api/flashcards")
            .set_json(serde_json::json!({ "input": "Cells" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["reason"], "no_json_found");
        assert_eq!(body["raw"], NO_JSON_REPLY);
    }

    #[actix_web::test]
    async fn service_failure_is_reported_inline() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(AppError::ServiceError("HTTP 401: API key not valid".to_string())));
        let app = app!(state_with(mock));

        let req = test::TestRequest::post()
            .uri("/api/explain")
            .set_json(serde_json::json!({ "topic": "Gravity" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Error generating explanation: HTTP 401: API key not valid"
        );
    }

    #[actix_web::test]
    async fn features_lists_four_modes() {
        let app = app!(state_with(MockGenerationClient::new()));

        let req = test::TestRequest::get().uri("/api/features").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "AI-Powered Study Buddy");
        assert_eq!(body["features"].as_array().unwrap().len(), 4);
        assert_eq!(body["features"][3]["feature"], "flashcards");
    }

    #[actix_web::test]
    async fn end_session_clears_stored_deck() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(FLASHCARD_REPLY.to_string()));
        let state = state_with(mock);
        let sessions = state.sessions.clone();
        let app = app!(state);
        let session = SessionId::new();

        let req = test::TestRequest::post()
            .uri("/api/flashcards")
            .cookie(session_cookie(session))
            .set_json(serde_json::json!({ "input": "Letters" }))
            .to_request();
        test::call_service(&app, req).await;
        assert_eq!(sessions.session_count().await, 1);

        let req = test::TestRequest::delete()
            .uri("/api/session")
            .cookie(session_cookie(session))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(sessions.session_count().await, 0);
    }
}
