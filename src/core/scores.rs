//! # Scores de Sentimento
//!
//! Pacote de scores produzido uma única vez por mensagem pelo
//! [`LinguisticToolkit`](crate::nlu::LinguisticToolkit), no formato VADER:
//!
//! - `negative`, `neutral`, `positive` ∈ [0, 1] — proporções do texto
//! - `compound` ∈ [-1, 1] — polaridade global normalizada

use serde::{Deserialize, Serialize};

/// Scores de sentimento de uma mensagem. Somente leitura para os classificadores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Cria scores limitando cada componente à sua faixa válida.
    pub fn new(negative: f64, neutral: f64, positive: f64, compound: f64) -> Self {
        Self {
            negative: negative.clamp(0.0, 1.0),
            neutral: neutral.clamp(0.0, 1.0),
            positive: positive.clamp(0.0, 1.0),
            compound: compound.clamp(-1.0, 1.0),
        }
    }

    /// Scores de um texto sem nenhum sinal emocional.
    pub fn neutral() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Atalho para testes que só conhecem `compound` e `pos`.
    #[cfg(test)]
    pub fn with_compound(compound: f64, positive: f64) -> Self {
        Self::new(0.0, 1.0 - positive, positive, compound)
    }
}
