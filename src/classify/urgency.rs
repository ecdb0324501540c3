//! # Classificador de Urgência
//!
//! Dois estágios:
//!
//! ```text
//! lemas
//!   ├── 1. Pontuação: problema = 1 ponto, intensificador = 2 pontos
//!   │      (cada ocorrência conta)
//!   ├── 2. Nível base:
//!   │      ameaça → alta-extrema (ignora a pontuação)
//!   │      ≥ 5 → alta | 3..5 → média | 1..3 → baixa | 0 → nenhuma
//!   └── 3. Escalonamento contextual, nesta ordem:
//!          canal chat/telefone → +1
//!          cliente VIP/premium → +1
//!          ticket aberto ≥ 7 dias → +1
//! ```
//!
//! Cada gatilho sobe um degrau sobre o nível já atualizado pelo anterior,
//! mas a escada satura em `alta`; `alta-extrema` só vem de ameaça.

use crate::core::{ContextMetadata, Urgency};

use super::vocabulary::Vocabulary;

/// Canais síncronos que exigem resposta mais rápida.
const ESCALATING_CHANNELS: &[&str] = &["chat", "telefone"];

/// Tipos de cliente com prioridade contratual.
const ESCALATING_CUSTOMER_TYPES: &[&str] = &["VIP", "premium"];

/// A partir de quantos dias em aberto o ticket sobe de prioridade.
const STALE_TICKET_DAYS: u64 = 7;

pub struct UrgencyClassifier;

impl UrgencyClassifier {
    /// Classifica a urgência da mensagem. Função pura, sem falhas.
    pub fn classify(
        lemmas: &[String],
        context: &ContextMetadata,
        vocabulary: &Vocabulary,
    ) -> Urgency {
        let base = Self::base_level(lemmas, vocabulary);
        Self::escalate(base, context)
    }

    /// Pontuação por palavras-chave: 1 por problema, 2 por intensificador.
    pub fn points(lemmas: &[String], vocabulary: &Vocabulary) -> usize {
        vocabulary.problem_count(lemmas) + vocabulary.intensifier_count(lemmas) * 2
    }

    /// Nível antes dos ajustes de contexto.
    pub fn base_level(lemmas: &[String], vocabulary: &Vocabulary) -> Urgency {
        if vocabulary.has_threat(lemmas) {
            return Urgency::Critical;
        }
        match Self::points(lemmas, vocabulary) {
            p if p >= 5 => Urgency::High,
            p if p >= 3 => Urgency::Medium,
            p if p >= 1 => Urgency::Low,
            _ => Urgency::None,
        }
    }

    /// Aplica os três gatilhos contextuais, em ordem fixa.
    pub fn escalate(mut level: Urgency, context: &ContextMetadata) -> Urgency {
        let triggers = [
            matches_any(context.channel.as_deref(), ESCALATING_CHANNELS),
            matches_any(context.customer_type.as_deref(), ESCALATING_CUSTOMER_TYPES),
            context.days_open >= STALE_TICKET_DAYS,
        ];
        for fired in triggers {
            if fired {
                level = level.escalated();
            }
        }
        level
    }
}

/// Comparação exata e sensível a maiúsculas ("Chat" não conta).
fn matches_any(value: Option<&str>, accepted: &[&str]) -> bool {
    value.is_some_and(|v| accepted.contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::vocabulary::vocabulary;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn ctx(channel: Option<&str>, customer: Option<&str>, days: u64) -> ContextMetadata {
        ContextMetadata::new(channel.map(String::from), customer.map(String::from), days)
    }

    fn classify(words: &[&str], context: &ContextMetadata) -> Urgency {
        UrgencyClassifier::classify(&lemmas(words), context, vocabulary())
    }

    #[test]
    fn any_large_days_open_escalates_exactly_once() {
        assert_eq!(classify(&[], &ctx(None, None, u64::MAX)), Urgency::Low);
        assert_eq!(classify(&[], &ctx(None, None, 5_000_000_000)), Urgency::Low);
    }

    #[test]
    fn empty_lemmas_without_triggers_is_none() {
        assert_eq!(classify(&[], &ContextMetadata::default()), Urgency::None);
    }

    #[test]
    fn points_boundaries() {
        let none = ContextMetadata::default();
        // 2 problemas = 2 pontos
        assert_eq!(classify(&["erro", "falha"], &none), Urgency::Low);
        // 3 pontos exatos
        assert_eq!(classify(&["erro", "agora"], &none), Urgency::Medium);
        // 5 pontos exatos
        assert_eq!(classify(&["atraso", "urgente", "já"], &none), Urgency::High);
        assert_eq!(classify(&["erro"], &none), Urgency::Low);
    }

    #[test]
    fn duplicates_count_toward_points() {
        let l = lemmas(&["erro", "erro", "erro"]);
        assert_eq!(UrgencyClassifier::points(&l, vocabulary()), 3);
        assert_eq!(
            classify(&["erro", "erro", "erro"], &ContextMetadata::default()),
            Urgency::Medium
        );
    }

    #[test]
    fn threat_short_circuits_scoring() {
        assert_eq!(classify(&["reembolso"], &ContextMetadata::default()), Urgency::Critical);
        // "cancelar" é ameaça e problema ao mesmo tempo
        assert_eq!(classify(&["cancelar"], &ContextMetadata::default()), Urgency::Critical);
    }

    #[test]
    fn three_triggers_compose_to_high() {
        assert_eq!(classify(&[], &ctx(Some("chat"), Some("VIP"), 10)), Urgency::High);
    }

    #[test]
    fn each_trigger_escalates_once() {
        assert_eq!(classify(&[], &ctx(Some("telefone"), None, 0)), Urgency::Low);
        assert_eq!(classify(&[], &ctx(None, Some("premium"), 0)), Urgency::Low);
        assert_eq!(classify(&[], &ctx(None, None, 7)), Urgency::Low);
        assert_eq!(classify(&[], &ctx(None, None, 6)), Urgency::None);
        assert_eq!(classify(&["erro"], &ctx(Some("chat"), None, 30)), Urgency::High);
    }

    #[test]
    fn escalation_saturates_at_high() {
        let all = ctx(Some("chat"), Some("VIP"), 100);
        assert_eq!(classify(&["urgente", "agora", "erro"], &all), Urgency::High);
        for base in [Urgency::None, Urgency::Low, Urgency::Medium, Urgency::High] {
            assert!(UrgencyClassifier::escalate(base, &all) <= Urgency::High);
        }
    }

    #[test]
    fn critical_is_immune_to_escalation() {
        let all = ctx(Some("chat"), Some("VIP"), 100);
        assert_eq!(classify(&["cancelar", "reembolso"], &all), Urgency::Critical);
    }

    #[test]
    fn trigger_values_are_case_sensitive() {
        let near_miss = ctx(Some("Chat"), Some("vip"), 0);
        assert_eq!(classify(&[], &near_miss), Urgency::None);
        let other = ctx(Some("email"), Some("Premium"), 0);
        assert_eq!(classify(&[], &other), Urgency::None);
    }
}
