//! # Vocabulários Fixos
//!
//! Conjuntos de lemas que disparam as regras de humor e urgência.
//! São construídos uma única vez no processo (via [`OnceLock`]) e
//! nunca mais alterados.
//!
//! | Conjunto | Uso |
//! |----------|-----|
//! | [`THREAT_WORDS`] | Ameaça de cancelar, trocar de fornecedor, pedir reembolso, processar |
//! | [`ANGER_WORDS`] | Expressões explícitas de raiva |
//! | [`PROBLEM_WORDS`] | Problemas operacionais — 1 ponto de urgência cada |
//! | [`INTENSIFIER_WORDS`] | Pressa explícita — 2 pontos de urgência cada |
//!
//! ## Frases de Ameaça
//!
//! `"trocar fornecedor"` tem duas palavras e nunca coincidiria com um
//! lema isolado. Entradas com espaço casam quando suas palavras aparecem
//! como lemas consecutivos (stopwords como "de" já foram removidas).

use std::collections::HashSet;
use std::sync::OnceLock;

pub const THREAT_WORDS: &[&str] = &["cancelar", "trocar fornecedor", "reembolso", "processo"];

pub const ANGER_WORDS: &[&str] = &["furioso", "revoltado", "insuportável", "ódio"];

pub const PROBLEM_WORDS: &[&str] = &["cancelar", "erro", "falha", "atraso"];

pub const INTENSIFIER_WORDS: &[&str] = &["agora", "imediatamente", "já", "urgente", "urgência"];

/// Vocabulários indexados para consulta por pertinência.
pub struct Vocabulary {
    threat_words: HashSet<&'static str>,
    /// Entradas de ameaça com mais de uma palavra, já divididas.
    threat_phrases: Vec<Vec<&'static str>>,
    anger_words: HashSet<&'static str>,
    problem_words: HashSet<&'static str>,
    intensifier_words: HashSet<&'static str>,
}

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

/// Vocabulário global do processo, inicializado no primeiro acesso.
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(Vocabulary::build)
}

impl Vocabulary {
    fn build() -> Self {
        let (phrases, words): (Vec<&'static str>, Vec<&'static str>) =
            THREAT_WORDS.iter().partition(|w| w.contains(' '));

        Self {
            threat_words: words.into_iter().collect(),
            threat_phrases: phrases
                .into_iter()
                .map(|p| p.split_whitespace().collect())
                .collect(),
            anger_words: ANGER_WORDS.iter().copied().collect(),
            problem_words: PROBLEM_WORDS.iter().copied().collect(),
            intensifier_words: INTENSIFIER_WORDS.iter().copied().collect(),
        }
    }

    /// `true` se algum lema (ou sequência de lemas) é uma ameaça.
    pub fn has_threat(&self, lemmas: &[String]) -> bool {
        if lemmas.iter().any(|l| self.threat_words.contains(l.as_str())) {
            return true;
        }
        self.threat_phrases.iter().any(|phrase| {
            lemmas
                .windows(phrase.len())
                .any(|w| w.iter().zip(phrase).all(|(l, p)| l == p))
        })
    }

    /// `true` se algum lema é uma palavra de raiva.
    pub fn has_anger(&self, lemmas: &[String]) -> bool {
        lemmas.iter().any(|l| self.anger_words.contains(l.as_str()))
    }

    /// Número de ocorrências de palavras de problema (repetições contam).
    pub fn problem_count(&self, lemmas: &[String]) -> usize {
        lemmas
            .iter()
            .filter(|l| self.problem_words.contains(l.as_str()))
            .count()
    }

    /// Número de ocorrências de intensificadores (repetições contam).
    pub fn intensifier_count(&self, lemmas: &[String]) -> usize {
        lemmas
            .iter()
            .filter(|l| self.intensifier_words.contains(l.as_str()))
            .count()
    }

    /// `true` se a palavra pertence a qualquer vocabulário, inclusive
    /// como parte de uma frase de ameaça.
    ///
    /// Usado pelo lematizador para nunca descartar essas palavras como stopword.
    pub fn contains_word(&self, word: &str) -> bool {
        self.threat_words.contains(word)
            || self.anger_words.contains(word)
            || self.problem_words.contains(word)
            || self.intensifier_words.contains(word)
            || self.threat_phrases.iter().any(|p| p.contains(&word))
    }
}
