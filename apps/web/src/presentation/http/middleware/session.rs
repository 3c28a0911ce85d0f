use crate::domain::workspace::entity::SessionId;
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "nst_session";

pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(SessionId)
}

/// Attaches a [`SessionId`] to every request, issuing a cookie on first visit.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let (session, issued) = match session_from_headers(req.headers()) {
        Some(session) => (session, false),
        None => (SessionId::generate(), true),
    };
    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;
    if issued {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session
        );
        if let Ok(val) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, val);
        }
    }
    response
}
