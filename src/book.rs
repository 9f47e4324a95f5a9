pub mod repo;

use chrono::NaiveDateTime;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Book 모듈에서 사용할 에러 열거
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// 필수 데이터가 입력 되지 않음
    #[error("required argument missing: {0}")]
    RequireArgumentMissing(String),

    /// 알 수 없는 읽기 상태 코드
    #[error("unknown read status: {0}")]
    UnknownReadStatus(String),

    /// 저장소에 연결할 수 없음
    #[error("book store unavailable: {0}")]
    StoreUnavailable(String),

    /// 저장소 쿼리 실행 실패
    #[error("book store query failed: {0}")]
    QueryFailed(String),

    /// 유일성, 체크 제약 조건 위반
    #[error("book store constraint violated: {0}")]
    ConstraintViolation(String),
}

/// 도서 읽기 상태
///
/// 저장소와 응답에서는 소문자 문자열(`unread`, `reading`, `completed`)로 표현 된다.
///
/// # Example
/// ```
/// use book_catalog::book::ReadStatus;
///
/// assert_eq!(ReadStatus::try_from("reading").unwrap(), ReadStatus::Reading);
/// assert_eq!(ReadStatus::default().as_str(), "unread");
/// assert!(ReadStatus::try_from("abandoned").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, diesel::AsExpression, diesel::FromSqlRow)]
#[diesel(sql_type = diesel::sql_types::Varchar)]
pub enum ReadStatus {
    #[default]
    Unread,
    Reading,
    Completed,
}

impl ReadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Unread => "unread",
            ReadStatus::Reading => "reading",
            ReadStatus::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for ReadStatus {
    type Error = BookError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "unread" => Ok(ReadStatus::Unread),
            "reading" => Ok(ReadStatus::Reading),
            "completed" => Ok(ReadStatus::Completed),
            _ => Err(BookError::UnknownReadStatus(value.to_owned()))
        }
    }
}

impl Display for ReadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 도서
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: u64,
    title: String,
    author: Option<String>,
    isbn: Option<String>,
    cover_image: Option<String>,
    description: Option<String>,
    read_status: ReadStatus,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn read_status(&self) -> ReadStatus {
        self.read_status
    }

    /// 도서가 저장된 시간 (UTC)
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// 도서가 마지막으로 수정된 시간 (UTC)
    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }
}

/// Book 빌더
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookBuilder {
    id: Option<u64>,
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    cover_image: Option<String>,
    description: Option<String>,
    read_status: Option<ReadStatus>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    pub fn isbn(mut self, isbn: String) -> Self {
        self.isbn = Some(isbn);
        self
    }

    pub fn cover_image(mut self, cover_image: String) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn read_status(mut self, read_status: ReadStatus) -> Self {
        self.read_status = Some(read_status);
        self
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Result<Book, BookError> {
        let title = self.title.ok_or(BookError::RequireArgumentMissing("title".to_owned()))?;
        let created_at = self.created_at.ok_or(BookError::RequireArgumentMissing("created_at".to_owned()))?;
        let updated_at = self.updated_at.ok_or(BookError::RequireArgumentMissing("updated_at".to_owned()))?;

        Ok(Book {
            id: self.id.unwrap_or(0),
            title,
            author: self.author,
            isbn: self.isbn,
            cover_image: self.cover_image,
            description: self.description,
            read_status: self.read_status.unwrap_or_default(),
            created_at,
            updated_at,
        })
    }
}

/// 새로 저장할 도서
///
/// `read_status`가 [`None`]인 경우 저장소의 기본값(unread)으로 저장 된다.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub read_status: Option<ReadStatus>,
}

impl NewBook {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            ..Default::default()
        }
    }
}

pub type SharedBookRepository = Arc<dyn BookRepository + Send + Sync>;

/// 도서 저장소
pub trait BookRepository {

    /// 저장된 모든 도서를 생성일 역순으로 가져온다. 생성일이 같으면 아이디 역순으로 정렬한다.
    fn find_all_latest(&self) -> Result<Vec<Book>, BookError>;

    /// 전달 받은 도서를 모두 저장소에 저장하고 저장된 도서를 반환한다.
    fn save_books(&self, books: &[NewBook]) -> Result<Vec<Book>, BookError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 14).unwrap().and_hms_opt(4, 31, 9).unwrap()
    }

    #[test]
    fn read_status_text_form() {
        for status in [ReadStatus::Unread, ReadStatus::Reading, ReadStatus::Completed] {
            assert_eq!(ReadStatus::try_from(status.as_str()), Ok(status));
        }
        assert_eq!(ReadStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn read_status_rejects_unknown_text() {
        assert_eq!(
            ReadStatus::try_from("Reading"),
            Err(BookError::UnknownReadStatus("Reading".to_owned()))
        );
        assert!(ReadStatus::try_from("").is_err());
    }

    #[test]
    fn builder_defaults_read_status_to_unread() {
        let book = Book::builder()
            .id(1)
            .title("Book A".to_owned())
            .created_at(timestamp())
            .updated_at(timestamp())
            .build()
            .unwrap();

        assert_eq!(book.read_status(), ReadStatus::Unread);
        assert_eq!(book.author(), None);
        assert_eq!(book.isbn(), None);
    }

    #[test]
    fn builder_requires_title() {
        let result = Book::builder()
            .created_at(timestamp())
            .updated_at(timestamp())
            .build();

        assert_eq!(result, Err(BookError::RequireArgumentMissing("title".to_owned())));
    }

    #[test]
    fn builder_requires_timestamps() {
        let result = Book::builder()
            .title("Book A".to_owned())
            .created_at(timestamp())
            .build();

        assert_eq!(result, Err(BookError::RequireArgumentMissing("updated_at".to_owned())));
    }
}
