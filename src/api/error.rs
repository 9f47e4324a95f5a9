use crate::book::BookError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tokio::task::JoinError;
use tracing::{debug, error};

/// HTTP 응답으로 변환 되는 에러
///
/// 저장소에서 발생한 에러 메시지는 로그로만 남기고 응답 본문에는 포함하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Service Unavailable")]
    StoreUnavailable,

    #[error("Server Error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookError> for ApiError {
    fn from(e: BookError) -> Self {
        // 저장소 에러는 저장소 계층에서 이미 error 레벨로 기록 된다.
        debug!("{}", e);
        match e {
            BookError::StoreUnavailable(_) => ApiError::StoreUnavailable,
            _ => ApiError::Internal,
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        error!("blocking task failed: {}", e);
        ApiError::Internal
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(e: &ApiError) -> Self {
        Self {
            error: e.to_string(),
            code: e.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
