//! # Analisador de Mensagens — O Pipeline Completo
//!
//! O [`MessageAnalyzer`] liga o adaptador linguístico ao motor de
//! classificação:
//!
//! ```text
//! texto + contexto
//!   ├── 1. Valida (texto não vazio após trim)
//!   ├── 2. LinguisticToolkit::signals → lemas, scores, entidades
//!   ├── 3. classify::classify         → humor, intensidade, urgência
//!   └── 4. AnalysisResult
//! ```
//!
//! ## Lotes
//!
//! [`MessageAnalyzer::analyze_batch`] valida todos os itens antes de
//! processar qualquer um (fail-fast: o primeiro item inválido rejeita o
//! lote inteiro). Depois, cada mensagem é analisada em paralelo via
//! `rayon`; a ordem de saída é a ordem de entrada.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::core::{AnalysisResult, ContextMetadata};
use crate::error::AnalysisError;
use crate::nlu::LinguisticToolkit;

/// Requisição de análise de uma mensagem, no formato da API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "canal", default)]
    pub channel: Option<String>,
    #[serde(rename = "tipo_cliente", default)]
    pub customer_type: Option<String>,
    #[serde(rename = "dias_aberto", default)]
    pub days_open: u64,
}

impl MessageRequest {
    #[cfg(test)]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn context(&self) -> ContextMetadata {
        ContextMetadata::new(self.channel.clone(), self.customer_type.clone(), self.days_open)
    }

    /// `true` se o texto é vazio ou só tem espaços.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Analisador de mensagens — sem estado mutável, compartilhável entre threads.
#[derive(Clone)]
pub struct MessageAnalyzer {
    toolkit: Arc<dyn LinguisticToolkit>,
}

impl MessageAnalyzer {
    pub fn new(toolkit: Arc<dyn LinguisticToolkit>) -> Self {
        Self { toolkit }
    }

    /// Analisa uma única mensagem.
    ///
    /// # Erros
    ///
    /// [`AnalysisError::EmptyMessage`] se o texto for vazio ou só espaços.
    pub fn analyze(
        &self,
        text: &str,
        context: &ContextMetadata,
    ) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyMessage);
        }
        Ok(self.analyze_unchecked(text, context))
    }

    /// Atalho para uma requisição no formato da API.
    pub fn analyze_request(
        &self,
        request: &MessageRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze(&request.text, &request.context())
    }

    /// Analisa um lote, preservando a ordem.
    ///
    /// # Erros
    ///
    /// [`AnalysisError::EmptyMessageInBatch`] com o índice do primeiro item
    /// vazio — nesse caso nenhuma mensagem é analisada.
    pub fn analyze_batch(
        &self,
        requests: &[MessageRequest],
    ) -> Result<Vec<AnalysisResult>, AnalysisError> {
        if let Some(index) = requests.iter().position(MessageRequest::is_blank) {
            return Err(AnalysisError::EmptyMessageInBatch { index });
        }

        let results: Vec<AnalysisResult> = requests
            .par_iter()
            .map(|r| self.analyze_unchecked(&r.text, &r.context()))
            .collect();

        tracing::info!(count = results.len(), "Lote analisado");
        Ok(results)
    }

    fn analyze_unchecked(&self, text: &str, context: &ContextMetadata) -> AnalysisResult {
        let signals = self.toolkit.signals(text);
        let result = classify::classify(
            text,
            context,
            &signals.lemmas,
            &signals.scores,
            signals.entities,
        );
        tracing::debug!(
            humor = %result.mood,
            intensidade = %result.intensity,
            urgencia = %result.urgency,
            compound = signals.scores.compound,
            lemas = signals.lemmas.len(),
            "Mensagem classificada"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, Intensity, Mood, SentimentScores, Urgency};
    use crate::nlu::LexiconToolkit;

    fn analyzer() -> MessageAnalyzer {
        MessageAnalyzer::new(Arc::new(LexiconToolkit::new().unwrap()))
    }

    /// Toolkit fixo para testar o pipeline sem depender dos léxicos.
    struct FixedToolkit {
        lemmas: Vec<String>,
        scores: SentimentScores,
    }

    impl LinguisticToolkit for FixedToolkit {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(String::from).collect()
        }
        fn lemmatize(&self, _tokens: &[String]) -> Vec<String> {
            self.lemmas.clone()
        }
        fn sentiment_scores(&self, _text: &str) -> SentimentScores {
            self.scores
        }
        fn extract_entities(&self, _tokens: &[String]) -> Vec<Entity> {
            vec![Entity::new("PERSON", "Zé")]
        }
    }

    #[test]
    fn rejects_blank_text() {
        let a = analyzer();
        let context = ContextMetadata::default();
        assert_eq!(a.analyze("", &context), Err(AnalysisError::EmptyMessage));
        assert_eq!(a.analyze(" \n\t ", &context), Err(AnalysisError::EmptyMessage));
    }

    #[test]
    fn uses_the_injected_toolkit() {
        let toolkit = FixedToolkit {
            lemmas: vec!["furioso".into()],
            scores: SentimentScores::with_compound(-0.2, 0.0),
        };
        let a = MessageAnalyzer::new(Arc::new(toolkit));
        let r = a.analyze("qualquer coisa", &ContextMetadata::default()).unwrap();
        assert_eq!(r.mood, Mood::Angry);
        assert_eq!(r.intensity, Intensity::Mild);
        assert_eq!(r.urgency, Urgency::None);
        assert_eq!(r.entities, vec![Entity::new("PERSON", "Zé")]);
    }

    #[test]
    fn furious_cancellation_end_to_end() {
        let request = MessageRequest {
            text: "Estou furioso, quero cancelar agora!".into(),
            channel: Some("email".into()),
            customer_type: None,
            days_open: 0,
        };
        let r = analyzer().analyze_request(&request).unwrap();
        assert_eq!(r.mood, Mood::Furious);
        assert_eq!(r.intensity, Intensity::Extreme);
        assert_eq!(r.urgency, Urgency::Critical);
        assert_eq!(r.message, request.text);
    }

    #[test]
    fn thanks_end_to_end() {
        let r = analyzer()
            .analyze("Obrigado, o atendimento foi excelente!", &ContextMetadata::default())
            .unwrap();
        assert_eq!(r.mood, Mood::Positive);
        assert_eq!(r.urgency, Urgency::None);
    }

    #[test]
    fn context_escalates_plain_message() {
        let request = MessageRequest {
            text: "Gostaria de saber o prazo de entrega".into(),
            channel: Some("chat".into()),
            customer_type: Some("VIP".into()),
            days_open: 10,
        };
        let r = analyzer().analyze_request(&request).unwrap();
        assert_eq!(r.mood, Mood::Neutral);
        assert_eq!(r.intensity, Intensity::Mild);
        assert_eq!(r.urgency, Urgency::High);
    }

    #[test]
    fn batch_preserves_order_and_is_idempotent() {
        let a = analyzer();
        let requests: Vec<MessageRequest> = [
            "Obrigado pela ajuda",
            "Tem um erro no boleto, urgente",
            "Quero reembolso",
            "Qual o horário de atendimento?",
        ]
        .iter()
        .map(|t| MessageRequest::new(*t))
        .collect();

        let first = a.analyze_batch(&requests).unwrap();
        assert_eq!(first.len(), requests.len());
        for (result, request) in first.iter().zip(&requests) {
            assert_eq!(result.message, request.text);
        }
        assert_eq!(first[2].urgency, Urgency::Critical);

        let second = a.analyze_batch(&requests).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_fails_fast_on_first_blank_item() {
        let requests = vec![
            MessageRequest::new("ok"),
            MessageRequest::new("   "),
            MessageRequest::new(""),
        ];
        assert_eq!(
            analyzer().analyze_batch(&requests),
            Err(AnalysisError::EmptyMessageInBatch { index: 1 })
        );
    }

    #[test]
    fn request_defaults_when_fields_missing() {
        let r: MessageRequest = serde_json::from_str(r#"{"texto": "oi"}"#).unwrap();
        assert_eq!(r.channel, None);
        assert_eq!(r.customer_type, None);
        assert_eq!(r.days_open, 0);
    }

    #[test]
    fn negative_days_open_is_rejected_by_deserialization() {
        let r = serde_json::from_str::<MessageRequest>(r#"{"texto": "oi", "dias_aberto": -1}"#);
        assert!(r.is_err());
    }
}
