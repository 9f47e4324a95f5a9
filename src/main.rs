use book_catalog::api::{self, AppState};
use book_catalog::book::repo::PgBookRepository;
use book_catalog::config;
use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};

/// 도서 목록 API 서버
#[derive(Debug, Parser)]
#[command(name = "book-catalog")]
struct Cli {
    /// 실행 모드로 `config/{mode}.json` 파일을 읽는다. 지정하지 않으면 `RUN_MODE` 환경 변수를 사용한다.
    #[arg(long)]
    mode: Option<String>,

    /// 설정 파일의 서버 포트를 덮어 쓴다.
    #[arg(long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let run_mode = config::run_mode(cli.mode.as_deref());
    config::load_dotenv(&run_mode);

    let app_config = config::load_config(&run_mode)?;
    let _log_guard = config::log::set_global_logging_config(app_config.logger())?;

    let mut server = app_config.server().clone();
    if let Some(port) = cli.port {
        server = server.with_port(port);
    }

    let db = app_config.db();
    info!("run mode: {}, database: {}:{}/{}", run_mode, db.host(), db.port(), db.dbname());
    let pool = config::connect_to_database(db)?;

    let repository = Arc::new(PgBookRepository::new(pool));
    let router = api::router(AppState::new(repository), &server);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(api::serve(router, &server, shutdown_signal()))?;

    info!("book catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
