//! # Entidades, Contexto e Resultado da Análise
//!
//! - [`Entity`] — entidade nomeada `(tipo, texto)` repassada sem alterações
//! - [`ContextMetadata`] — canal, tipo de cliente e dias em aberto do ticket
//! - [`AnalysisResult`] — registro imutável devolvido ao chamador
//!
//! ## Formato JSON
//!
//! ```json
//! {
//!   "mensagem": "Quero cancelar agora!",
//!   "humor": "irritado-extremo",
//!   "intensidade_emocional": "extremo",
//!   "urgencia": "alta-extrema",
//!   "entidades": [["ORGANIZATION", "Vivo"]]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::labels::{Intensity, Mood, Urgency};

/// Entidade nomeada extraída do texto.
///
/// Serializada como par `[tipo, texto]`, o mesmo formato da API original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String)", from = "(String, String)")]
pub struct Entity {
    /// Tipo da entidade: `PERSON`, `ORGANIZATION`, `LOCATION`.
    pub kind: String,
    /// Trecho do texto original.
    pub text: String,
}

impl Entity {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

impl From<Entity> for (String, String) {
    fn from(e: Entity) -> Self {
        (e.kind, e.text)
    }
}

impl From<(String, String)> for Entity {
    fn from((kind, text): (String, String)) -> Self {
        Self { kind, text }
    }
}

/// Metadados contextuais do atendimento, fornecidos pelo chamador.
///
/// Só os valores literais `chat`/`telefone` e `VIP`/`premium`
/// (comparação exata, sensível a maiúsculas) participam do escalonamento.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextMetadata {
    pub channel: Option<String>,
    pub customer_type: Option<String>,
    /// Dias desde a abertura do ticket.
    pub days_open: u64,
}

impl ContextMetadata {
    pub fn new(channel: Option<String>, customer_type: Option<String>, days_open: u64) -> Self {
        Self {
            channel,
            customer_type,
            days_open,
        }
    }
}

/// Resultado completo da análise de uma mensagem.
///
/// Construído uma única vez pelo montador de resultado e nunca alterado.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "humor")]
    pub mood: Mood,
    #[serde(rename = "intensidade_emocional")]
    pub intensity: Intensity,
    #[serde(rename = "urgencia")]
    pub urgency: Urgency,
    #[serde(rename = "entidades")]
    pub entities: Vec<Entity>,
}
