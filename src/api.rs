mod book;
mod error;

pub use book::BookResponse;
pub use error::{ApiError, ErrorResponse};

use crate::book::SharedBookRepository;
use crate::config::Server;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 핸들러들이 공유하는 상태
#[derive(Clone)]
pub struct AppState {
    books: SharedBookRepository,
}

impl AppState {
    pub fn new(books: SharedBookRepository) -> Self {
        Self { books }
    }
}

/// 도서 API 라우터를 생성한다.
///
/// 같은 라우트를 루트와 `/api` 아래에 모두 등록한다. (`GET /books`, `GET /api/books`)
pub fn router(state: AppState, server: &Server) -> Router {
    let books = Router::new()
        .route("/books", get(book::list_books));

    Router::new()
        .merge(books.clone())
        .nest("/api", books)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server.cors_origins()))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins = origins.iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>()
                .map_err(|_| warn!("CORS origin을 해석할 수 없어 무시합니다. {}", origin))
                .ok()
        })
        .collect::<Vec<_>>();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// 서버를 시작하고 `shutdown`이 완료 될 때까지 요청을 처리한다.
pub async fn serve<F>(router: Router, server: &Server, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server.socket_addr()).await?;
    info!("book catalog listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
