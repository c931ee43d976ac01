use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{errors::AppError, services::session_store::SessionId};

pub const SESSION_COOKIE: &str = "study_session";

/// Ties every request to a session. A request without a valid
/// `study_session` cookie is given a fresh id, which is sent back as a
/// cookie on the response.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| SessionId::parse(cookie.value()));
        let session_id = existing.unwrap_or_default();
        req.extensions_mut().insert(session_id);

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if existing.is_none() {
                log::debug!("Started session {}", session_id);
                res.response_mut()
                    .add_cookie(&session_cookie(session_id))
                    .map_err(ErrorInternalServerError)?;
            }

            Ok(res)
        })
    }
}

pub fn session_cookie(session_id: SessionId) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Cookie that tells the browser to drop the session id.
pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

// Extractor for the current session in handlers
pub struct CurrentSession(pub SessionId);

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session_id = req
            .extensions()
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| AppError::InternalError("Session middleware not installed".to_string()));

        ready(session_id.map(CurrentSession))
    }
}
