//! Path blocking as an axum function middleware.
//!
//! Use with `axum::middleware::from_fn_with_state(Arc<Interceptor>, block_path_middleware)`
//! when composing with other function middleware; [`crate::http::BlockPathLayer`]
//! is the equivalent tower layer.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::response::blocked;
use crate::interceptor::{Decision, Interceptor};

pub async fn block_path_middleware(
    State(interceptor): State<Arc<Interceptor>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match interceptor.handle(request.uri().path()) {
        Decision::Forward => next.run(request).await,
        Decision::Block { status_code, body } => {
            blocked(interceptor.name(), request.uri().path(), status_code, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use axum::{body::to_bytes, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(rules: Vec<Rule>) -> Router {
        let interceptor = Arc::new(Interceptor::new(&rules, "blockpath").unwrap());
        Router::new()
            .route("/{*path}", get(|| async { "reached" }))
            .layer(middleware::from_fn_with_state(interceptor, block_path_middleware))
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_blocks_matching_path() {
        let app = app(vec![Rule::new("^/admin", Some(403))]);
        assert_eq!(get_path(app, "/admin/users").await, (StatusCode::FORBIDDEN, String::new()));
    }

    #[tokio::test]
    async fn test_forwards_other_paths() {
        let app = app(vec![Rule::new("^/admin", Some(403))]);
        assert_eq!(get_path(app, "/public").await, (StatusCode::OK, "reached".to_string()));
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let app = app(vec![Rule::new("secret", Some(404))]);
        assert_eq!(
            get_path(app, "/a/secret/b").await,
            (StatusCode::NOT_FOUND, "404 page not found".to_string())
        );
    }
}
