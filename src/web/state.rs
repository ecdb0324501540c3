//! # Estado da Aplicação Web
//!
//! Estado compartilhado entre todos os handlers Axum. O analisador é
//! imutável, então basta clonar o `Arc` interno por requisição — não há
//! locks.

use crate::analyzer::MessageAnalyzer;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Pipeline de análise (toolkit linguístico + classificadores).
    pub analyzer: MessageAnalyzer,
    /// Máximo de mensagens aceitas em `/analisar/lote`.
    pub max_batch: usize,
    /// Limite do corpo das requisições, em bytes.
    pub max_body_bytes: usize,
}
