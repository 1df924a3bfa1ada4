use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness probe.
pub async fn ping_handler() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_answers_no_content() {
        let response = ping_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
