use crate::book::{BookBuilder, NewBook, ReadStatus};
use crate::config::DbPool;
use chrono::NaiveDateTime;
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Varchar;
use diesel::debug_query;
use tracing::{debug, enabled};

mod schema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("connect error: {0}")]
    ConnectError(String),

    #[error("unique violation: {0}")]
    UniqueViolation(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("sql execute error: {0}")]
    SqlExecuteError(String)
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Error::UniqueViolation(info.message().to_owned())
            }
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
                info
            ) => Error::ConstraintViolation(info.message().to_owned()),
            e => Error::SqlExecuteError(e.to_string())
        }
    }
}

impl ToSql<Varchar, Pg> for ReadStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        <str as ToSql<Varchar, Pg>>::to_sql(self.as_str(), out)
    }
}

impl FromSql<Varchar, Pg> for ReadStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let value = <String as FromSql<Varchar, Pg>>::from_sql(bytes)?;
        Ok(ReadStatus::try_from(value.as_str())?)
    }
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = schema::books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub read_status: ReadStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn to_domain_builder(self) -> BookBuilder {
        let mut builder = BookBuilder::new()
            .id(self.id as u64)
            .title(self.title)
            .read_status(self.read_status)
            .created_at(self.created_at)
            .updated_at(self.updated_at);

        if let Some(author) = self.author {
            builder = builder.author(author);
        }

        if let Some(isbn) = self.isbn {
            builder = builder.isbn(isbn);
        }

        if let Some(cover_image) = self.cover_image {
            builder = builder.cover_image(cover_image);
        }

        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        builder
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::books)]
pub struct NewBookEntity<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub isbn: Option<&'a str>,
    pub cover_image: Option<&'a str>,
    pub description: Option<&'a str>,
    // None이면 컬럼 기본값(unread)으로 저장 된다.
    pub read_status: Option<ReadStatus>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl<'a> From<&'a NewBook> for NewBookEntity<'a> {
    fn from(book: &'a NewBook) -> Self {
        let now = chrono::Utc::now().naive_utc();

        Self {
            title: &book.title,
            author: book.author.as_deref(),
            isbn: book.isbn.as_deref(),
            cover_image: book.cover_image.as_deref(),
            description: book.description.as_deref(),
            read_status: book.read_status,
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct BookPgStore {
    pool: DbPool
}

impl BookPgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BookPgStore {

    pub fn find_all_order_by_created_desc(&self) -> Result<Vec<BookEntity>, Error> {
        use schema::books::dsl::*;

        let mut connection = self.pool.get()
            .map_err(|e| Error::ConnectError(e.to_string()))?;
        let query = books
            .order_by((created_at.desc(), id.desc()))
            .select(BookEntity::as_select());
        let results = sql_debugging(query)
            .load(&mut connection)?;

        Ok(results)
    }

    pub fn save_books(&self, new_books: &[NewBook]) -> Result<Vec<BookEntity>, Error> {
        use schema::books;

        if new_books.is_empty() {
            return Ok(vec![]);
        }

        let mut connection = self.pool.get()
            .map_err(|e| Error::ConnectError(e.to_string()))?;

        let entities = new_books.iter()
            .map(NewBookEntity::from)
            .collect::<Vec<_>>();

        let results = diesel::insert_into(books::table)
            .values(entities)
            .returning(BookEntity::as_select())
            .get_results(&mut connection)?;

        Ok(results)
    }
}

fn sql_debugging<T>(sql: T) -> T
where T: diesel::query_builder::QueryFragment<Pg>,
{
    if enabled!(tracing::Level::DEBUG) {
        let debug_str = debug_query::<Pg, _>(&sql).to_string();
        debug!("SQL: {}", debug_str);
    }
    sql
}
