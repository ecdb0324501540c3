//! # Módulo Web — A API do Analisador
//!
//! Camada HTTP construída com **Axum** + **Maud** (+ HTMX no painel).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Cliente (JSON) / Browser (HTMX)                          │
//! ├──────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                                │
//! │  ├── GET  /               → painel (HTML completo)       │
//! │  ├── GET  /status         → JSON: {"status":"ok"}        │
//! │  ├── POST /analisar/      → JSON: uma mensagem           │
//! │  ├── POST /analisar/lote  → JSON: lista de mensagens     │
//! │  └── POST /painel         → HTMX fragment                │
//! ├──────────────────────────────────────────────────────────┤
//! │ Camadas: limite de corpo, TraceLayer, CORS               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`error`] | `ApiError` → `{"detail": ...}` |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod error;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// `/analisar` e `/analisar/` apontam para o mesmo handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Páginas HTML ──────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/painel", post(handlers::painel))
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::status))
        .route("/analisar/", post(handlers::analisar))
        .route("/analisar", post(handlers::analisar))
        .route("/analisar/lote", post(handlers::analisar_lote))
        // ── Camadas ───────────────────────────────────────────
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
