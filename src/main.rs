//! # Analisador de Mensagens de Atendimento
//!
//! **Ponto de entrada** do serviço. Classifica mensagens de clientes em
//! humor, intensidade emocional e urgência, e extrai entidades nomeadas.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê configuração (flags / variáveis ANALISADOR_*)
//!   ├── Constrói LexiconToolkit (regex, léxico, stopwords)
//!   ├── Monta MessageAnalyzer, AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --addr 127.0.0.1:8000
//!
//! curl -X POST localhost:8000/analisar/ \
//!   -H 'content-type: application/json' \
//!   -d '{"texto":"Quero cancelar agora!","canal":"chat","dias_aberto":3}'
//! ```

/// Tipos fundamentais: rótulos, scores, resultado.
mod core;

/// Regras de classificação de humor e urgência.
mod classify;

/// Adaptador linguístico: tokenização, lematização, sentimento, NER.
mod nlu;

mod analyzer;
mod config;
mod error;

/// Servidor axum, handlers HTTP e templates.
mod web;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::analyzer::MessageAnalyzer;
use crate::config::Config;
use crate::nlu::LexiconToolkit;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    tracing::info!(?config, "Analisador de Mensagens — iniciando");

    let toolkit = LexiconToolkit::new().context("Falha ao inicializar o toolkit linguístico")?;
    let analyzer = MessageAnalyzer::new(Arc::new(toolkit));

    let state = AppState {
        analyzer,
        max_batch: config.max_batch,
        max_body_bytes: config.max_body_bytes,
    };
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Falha ao escutar em {}", config.addr))?;
    tracing::info!(addr = %config.addr, "Servidor pronto");

    axum::serve(listener, app).await?;

    Ok(())
}
