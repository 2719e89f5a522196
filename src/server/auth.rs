//! Authentication middleware for the server
//!
//! Validates Bearer tokens on API and WebSocket requests. Health checks,
//! CORS preflights, and everything outside /api/ and /ws/ stay public. A
//! None token disables auth entirely (--no-auth for local development).

use axum::{
    body::Body,
    extract::Request,
    http::{header::AUTHORIZATION, Method, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tower::{Layer, Service};

/// Tower layer that wraps services with Bearer-token validation
#[derive(Clone)]
pub struct AuthLayer {
    token: Arc<Option<String>>,
}

impl AuthLayer {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(token),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            token: self.token.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    token: Arc<Option<String>>,
}

impl<S> Service<Request> for AuthMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let token = self.token.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let authorized = match token.as_ref() {
                Some(expected) => request_is_authorized(&req, expected),
                // Auth disabled
                None => true,
            };

            if authorized {
                inner.call(req).await
            } else {
                Ok(unauthorized_response())
            }
        })
    }
}

/// Decide whether a request may pass without (or with) a valid token.
///
/// WebSocket endpoints accept a `token` query parameter because browsers
/// cannot set headers on WS upgrade requests.
fn request_is_authorized(req: &Request, expected: &str) -> bool {
    // CORS preflights never carry credentials
    if req.method() == Method::OPTIONS {
        return true;
    }

    let path = req.uri().path();
    if !path.starts_with("/api/") && !path.starts_with("/ws/") {
        return true;
    }

    if path.starts_with("/ws/") && query_token_matches(req.uri().query(), expected) {
        return true;
    }

    bearer_token(req).is_some_and(|provided| provided == expected)
}

fn query_token_matches(query: Option<&str>, expected: &str) -> bool {
    let Some(query) = query else {
        return false;
    };
    query
        .split('&')
        .filter_map(|pair| pair.strip_prefix("token="))
        .any(|value| value == expected)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized_response() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .body(Body::from("Unauthorized: Invalid or missing Bearer token"))
        .unwrap()
}

/// Generate a secure random auth token
pub fn generate_auth_token() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 16] = rng.gen();
    hex_encode(&bytes)
}

fn hex_encode(bytes: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut result = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        result.push(HEX_CHARS[(byte >> 4) as usize] as char);
        result.push(HEX_CHARS[(byte & 0xf) as usize] as char);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, uri: &str, header: Option<&str>) -> Request {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_generate_auth_token() {
        let token = generate_auth_token();
        assert_eq!(token.len(), 32); // 16 bytes = 32 hex chars
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_auth_token(), generate_auth_token());
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0x1a]), "00ff1a");
    }

    #[test]
    fn test_health_endpoint_is_public() {
        let req = request(Method::GET, "/health", None);
        assert!(request_is_authorized(&req, "secret"));
    }

    #[test]
    fn test_preflight_is_public() {
        let req = request(Method::OPTIONS, "/api/invoke", None);
        assert!(request_is_authorized(&req, "secret"));
    }

    #[test]
    fn test_api_requires_bearer_token() {
        let missing = request(Method::POST, "/api/invoke", None);
        assert!(!request_is_authorized(&missing, "secret"));

        let wrong = request(Method::POST, "/api/invoke", Some("Bearer nope"));
        assert!(!request_is_authorized(&wrong, "secret"));

        let right = request(Method::POST, "/api/invoke", Some("Bearer secret"));
        assert!(request_is_authorized(&right, "secret"));
    }

    #[test]
    fn test_websocket_accepts_query_token() {
        let right = request(Method::GET, "/ws/events?token=secret", None);
        assert!(request_is_authorized(&right, "secret"));

        let wrong = request(Method::GET, "/ws/events?token=other", None);
        assert!(!request_is_authorized(&wrong, "secret"));
    }

    #[test]
    fn test_query_token_must_match_exactly() {
        // A token that is a prefix of another parameter must not pass
        assert!(!query_token_matches(Some("token=secretx"), "secret"));
        assert!(query_token_matches(Some("a=1&token=secret"), "secret"));
        assert!(!query_token_matches(None, "secret"));
    }
}
