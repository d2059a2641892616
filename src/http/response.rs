//! Translation of block decisions into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Build the response for a blocked request.
///
/// Codes that cannot appear on a status line (outside 100..=999) are
/// answered with 500.
pub fn block_response(status_code: u32, body: Option<&'static str>) -> Response {
    let status = u16::try_from(status_code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok());

    let status = match status {
        Some(status) => status,
        None => {
            tracing::error!(status_code, "Configured status code is not a valid HTTP status");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match body {
        Some(body) => (status, body).into_response(),
        None => status.into_response(),
    }
}

/// Log a block and build its response.
pub(crate) fn blocked(
    name: &str,
    path: &str,
    status_code: u32,
    body: Option<&'static str>,
) -> Response {
    tracing::debug!(name = %name, path = %path, status = status_code, "Request blocked");
    block_response(status_code, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_body_only_for_known_codes() {
        let res = block_response(404, Some("404 page not found"));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"404 page not found");

        let res = block_response(403, None);
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_unrepresentable_status() {
        assert_eq!(block_response(42, None).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(block_response(1000, None).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(block_response(70_000, None).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(block_response(599, None).status().as_u16(), 599);
    }
}
