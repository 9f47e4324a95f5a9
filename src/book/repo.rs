use crate::book::repo::diesel::{BookEntity, BookPgStore, Error};
use crate::book::{Book, BookError, BookRepository, NewBook};
use crate::config::DbPool;
use tracing::{debug, error};

mod diesel;

impl From<Error> for BookError {
    fn from(e: Error) -> Self {
        match e {
            Error::ConnectError(message) => BookError::StoreUnavailable(message),
            Error::UniqueViolation(message) | Error::ConstraintViolation(message) => {
                BookError::ConstraintViolation(message)
            }
            Error::SqlExecuteError(message) => BookError::QueryFailed(message),
        }
    }
}

/// PostgreSQL 도서 저장소
pub struct PgBookRepository {
    book_store: BookPgStore,
}

impl PgBookRepository {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            book_store: BookPgStore::new(db_pool),
        }
    }
}

impl BookRepository for PgBookRepository {
    fn find_all_latest(&self) -> Result<Vec<Book>, BookError> {
        let entities = self.book_store
            .find_all_order_by_created_desc()
            .map_err(logging_with_book_error)?;

        debug!("{} books loaded", entities.len());
        to_domain(entities)
    }

    fn save_books(&self, books: &[NewBook]) -> Result<Vec<Book>, BookError> {
        let entities = self.book_store
            .save_books(books)
            .map_err(logging_with_book_error)?;

        debug!("{} books saved", entities.len());
        to_domain(entities)
    }
}

fn to_domain(entities: Vec<BookEntity>) -> Result<Vec<Book>, BookError> {
    entities.into_iter()
        .map(|entity| entity.to_domain_builder().build())
        .collect()
}

fn logging_with_book_error(e: Error) -> BookError {
    error!("{:?}", e);
    BookError::from(e)
}
