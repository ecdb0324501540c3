//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Tipos compartilhados por todo o analisador. Nenhum deles tem ciclo de
//! vida além de uma única requisição:
//!
//! - [`SentimentScores`] — scores VADER (neg/neu/pos/compound)
//! - [`Mood`], [`Intensity`], [`Urgency`] — os três eixos de classificação
//! - [`Entity`] — entidade nomeada `(tipo, texto)`
//! - [`ContextMetadata`] — canal, tipo de cliente, dias em aberto
//! - [`AnalysisResult`] — registro final devolvido ao chamador

/// Rótulos categóricos: humor, intensidade e urgência.
pub mod labels;

/// Entidades, contexto do atendimento e resultado da análise.
pub mod result;

/// Scores de sentimento.
pub mod scores;

pub use labels::{Intensity, Mood, Urgency};
pub use result::{AnalysisResult, ContextMetadata, Entity};
pub use scores::SentimentScores;
