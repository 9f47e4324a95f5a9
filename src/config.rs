mod database;
mod server;
pub mod log;

pub use database::Database;
pub use server::Server;

use diesel::r2d2::ConnectionManager;
use diesel::PgConnection;
use r2d2::Pool;
use serde::Deserialize;
use std::env;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

const DEF_RUN_MODE: &str = "development";
const ENV_PREFIX: &str = "BOOK_CATALOG";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    db: Database,
    #[serde(default)]
    server: Server,
    #[serde(default)]
    logger: log::Config,
}

impl AppConfig {
    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn logger(&self) -> &log::Config {
        &self.logger
    }
}

/// 실행 모드를 결정한다. 인자로 받은 모드가 없으면 `RUN_MODE` 환경 변수를 사용하고, 둘 다 없으면 development로 실행한다.
pub fn run_mode(mode: Option<&str>) -> String {
    mode.map(str::to_owned)
        .or_else(|| env::var("RUN_MODE").ok())
        .unwrap_or_else(|| DEF_RUN_MODE.into())
}

/// 실행 모드에 따라 .env 파일을 로드한다.
pub fn load_dotenv(run_mode: &str) {
    dotenvy::from_filename(format!(".env.{}", run_mode)).ok();
    dotenvy::dotenv().ok();
}

/// `config/{run_mode}.json` 파일을 읽어 설정을 만든다.
/// `BOOK_CATALOG__` 로 시작하는 환경 변수가 있으면 파일의 값을 덮어 쓴다. (예: `BOOK_CATALOG__DB__HOST`)
pub fn load_config(run_mode: &str) -> Result<AppConfig, config::ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}.json", run_mode)))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    config.try_deserialize()
}

/// 데이터베이스 연결 풀을 생성한다.
pub fn connect_to_database(db: &Database) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(db.url());

    Pool::builder()
        .max_size(db.pool_size())
        .test_on_check_out(true)
        .build(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_json(json: &str) -> Result<AppConfig, config::ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn only_db_section_is_required() {
        let config = from_json(r#"{
            "db": { "host": "db", "port": 5432, "username": "app", "password": "secret", "dbname": "books" }
        }"#).unwrap();

        assert_eq!(config.db().url(), "postgres://app:secret@db:5432/books");
        assert_eq!(config.db().pool_size(), 10);
        assert_eq!(config.server().socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn server_section_overrides_defaults() {
        let config = from_json(r#"{
            "db": { "host": "db", "port": 5432, "username": "app", "password": "secret", "dbname": "books", "pool_size": 4 },
            "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": ["http://localhost:5173"] },
            "logger": { "level": "INFO" }
        }"#).unwrap();

        assert_eq!(config.db().pool_size(), 4);
        assert_eq!(config.server().socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.server().cors_origins(), ["http://localhost:5173".to_owned()]);
    }

    #[test]
    fn missing_db_section_is_an_error() {
        assert!(from_json(r#"{ "server": { "port": 8080 } }"#).is_err());
    }

    #[test]
    fn explicit_mode_wins() {
        assert_eq!(run_mode(Some("production")), "production");
    }
}
