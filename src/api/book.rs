use crate::api::{ApiError, AppState};
use crate::book::Book;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// 응답에 사용할 날짜 포맷 (UTC, 마이크로초)
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// 도서 목록 응답 항목
///
/// 값이 없는 필드도 생략 하지 않고 `null`로 직렬화 된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub id: u64,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub read_status: &'static str,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id(),
            title: book.title().to_owned(),
            author: book.author().map(str::to_owned),
            isbn: book.isbn().map(str::to_owned),
            cover_image: book.cover_image().map(str::to_owned),
            description: book.description().map(str::to_owned),
            read_status: book.read_status().as_str(),
            created_at: book.created_at().format(DATE_TIME_FORMAT).to_string(),
            updated_at: book.updated_at().format(DATE_TIME_FORMAT).to_string(),
        }
    }
}

/// 저장된 모든 도서를 생성일 역순으로 반환한다.
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let repository = state.books.clone();
    let books = tokio::task::spawn_blocking(move || repository.find_all_latest()).await??;

    Ok(Json(books.iter().map(BookResponse::from).collect()))
}
