use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// An upstream service answered with something unusable.
    pub fn bad_gateway<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_GATEWAY, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_unauthorized_renders_json_error() {
        let response = AppError::unauthorized(anyhow!("Authentication required")).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Authentication required" }));
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(
            AppError::bad_request(anyhow!("x")).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found(anyhow!("x")).status, StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::bad_gateway(anyhow!("x")).status,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::unprocessable(anyhow!("x")).status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_from_any_error_is_internal() {
        let err: AppError = std::io::Error::other("disk").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
