//! # Módulo Classify — Motor de Classificação
//!
//! A única parte do sistema com lógica de decisão. Recebe sinais
//! linguísticos já calculados e devolve rótulos categóricos.
//!
//! ```text
//! lemas + scores ──► MoodClassifier    ──► (humor, intensidade) ─┐
//!                                                               ├──► AnalysisResult
//! lemas + contexto ► UrgencyClassifier ──► urgência ─────────────┘
//!                                          + entidades (repassadas)
//! ```
//!
//! Os dois classificadores não dependem um do outro. Tudo aqui é função
//! pura: mesma entrada, mesma saída, sem estado compartilhado mutável.

/// Regras de humor e intensidade.
pub mod mood;

/// Pontuação, nível base e escada de escalonamento de urgência.
pub mod urgency;

/// Vocabulários fixos de ameaça, raiva, problema e intensificadores.
pub mod vocabulary;

use crate::core::{AnalysisResult, ContextMetadata, Entity, SentimentScores};

pub use mood::MoodClassifier;
pub use urgency::UrgencyClassifier;
pub use vocabulary::vocabulary;

/// Classifica uma mensagem a partir de sinais linguísticos já extraídos
/// e monta o [`AnalysisResult`].
///
/// Não valida nada — o texto vazio é barrado antes, pela camada chamadora.
/// As entidades são repassadas na ordem recebida.
pub fn classify(
    text: &str,
    context: &ContextMetadata,
    lemmas: &[String],
    scores: &SentimentScores,
    entities: Vec<Entity>,
) -> AnalysisResult {
    let vocabulary = vocabulary();
    let (mood, intensity) = MoodClassifier::classify(scores, lemmas, vocabulary);
    let urgency = UrgencyClassifier::classify(lemmas, context, vocabulary);

    AnalysisResult {
        message: text.to_string(),
        mood,
        intensity,
        urgency,
        entities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Intensity, Mood, Urgency};

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_signal_scenario() {
        let r = classify(
            "ok",
            &ContextMetadata::default(),
            &[],
            &SentimentScores::neutral(),
            Vec::new(),
        );
        assert_eq!(r.mood, Mood::Neutral);
        assert_eq!(r.intensity, Intensity::Mild);
        assert_eq!(r.urgency, Urgency::None);
        assert!(r.entities.is_empty());
    }

    #[test]
    fn threat_scenario_ignores_escalation() {
        let context = ContextMetadata::new(Some("chat".into()), Some("VIP".into()), 30);
        let r = classify(
            "Vou cancelar e pedir reembolso",
            &context,
            &lemmas(&["vou", "cancelar", "pedir", "reembolso"]),
            &SentimentScores::with_compound(-0.8, 0.0),
            Vec::new(),
        );
        assert_eq!(r.mood, Mood::Furious);
        assert_eq!(r.intensity, Intensity::Extreme);
        assert_eq!(r.urgency, Urgency::Critical);
    }

    #[test]
    fn entities_and_text_pass_through_verbatim() {
        let entities = vec![
            Entity::new("PERSON", "Maria"),
            Entity::new("ORGANIZATION", "ACME"),
            Entity::new("PERSON", "Maria"),
        ];
        let r = classify(
            "  Maria da ACME ligou para Maria  ",
            &ContextMetadata::default(),
            &[],
            &SentimentScores::neutral(),
            entities.clone(),
        );
        assert_eq!(r.entities, entities);
        assert_eq!(r.message, "  Maria da ACME ligou para Maria  ");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let context = ContextMetadata::new(Some("telefone".into()), None, 8);
        let l = lemmas(&["erro", "urgente", "furioso"]);
        let scores = SentimentScores::with_compound(-0.45, 0.0);
        let first = classify("x", &context, &l, &scores, Vec::new());
        for _ in 0..10 {
            assert_eq!(classify("x", &context, &l, &scores, Vec::new()), first);
        }
        assert_eq!(first.mood, Mood::Angry);
        assert_eq!(first.urgency, Urgency::High);
    }
}
