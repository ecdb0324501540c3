//! # Adaptador Linguístico — Primitivas de NLP
//!
//! Este módulo isola o motor de classificação de qualquer toolkit de NLP
//! específico. O contrato é o trait [`LinguisticToolkit`]; a implementação
//! padrão é o [`LexiconToolkit`], baseado em léxicos e heurísticas.
//!
//! ## Fluxo de Processamento
//!
//! ```text
//! Texto da mensagem
//!   ├── 1. tokenize           → ["Quero", "cancelar", "agora", "!"]
//!   ├── 2. lemmatize(tokens)  → ["quero", "cancelar", "agora"]
//!   ├── 3. sentiment_scores   → {neg, neu, pos, compound}
//!   └── 4. extract_entities   → [("PERSON", "Maria"), ...]
//! ```
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`tokenizer`] | Tokens de palavra e pontuação (NFC) |
//! | [`lemmatizer`] | Stopwords PT + EN e redução de flexões |
//! | [`sentiment`] | Scores no estilo VADER |
//! | [`extractor`] | Entidades nomeadas por capitalização |

/// Sub-módulo do extrator de entidades nomeadas.
pub mod extractor;

/// Sub-módulo do lematizador e filtro de stopwords.
pub mod lemmatizer;

/// Sub-módulo do pontuador de sentimento.
pub mod sentiment;

/// Sub-módulo do tokenizador.
pub mod tokenizer;

use anyhow::Result;

use crate::core::{Entity, SentimentScores};

use extractor::EntityExtractor;
use lemmatizer::Lemmatizer;
use sentiment::SentimentScorer;
use tokenizer::Tokenizer;

/// Sinais linguísticos de uma mensagem, prontos para os classificadores.
#[derive(Clone, Debug, PartialEq)]
pub struct LinguisticSignals {
    pub lemmas: Vec<String>,
    pub scores: SentimentScores,
    pub entities: Vec<Entity>,
}

/// Capacidades de NLP consumidas pelo analisador.
///
/// Implementações precisam ser `Send + Sync`: o mesmo toolkit atende
/// requisições concorrentes e lotes processados em paralelo.
pub trait LinguisticToolkit: Send + Sync {
    /// Texto → tokens de palavra e pontuação, em ordem.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tokens → lemas em lowercase, alfabéticos, sem stopwords.
    fn lemmatize(&self, tokens: &[String]) -> Vec<String>;

    /// Texto → scores de sentimento.
    fn sentiment_scores(&self, text: &str) -> SentimentScores;

    /// Tokens → entidades nomeadas `(tipo, texto)`.
    fn extract_entities(&self, tokens: &[String]) -> Vec<Entity>;

    /// Executa as quatro etapas sobre uma mensagem.
    fn signals(&self, text: &str) -> LinguisticSignals {
        let tokens = self.tokenize(text);
        LinguisticSignals {
            lemmas: self.lemmatize(&tokens),
            scores: self.sentiment_scores(text),
            entities: self.extract_entities(&tokens),
        }
    }
}

/// Toolkit padrão: léxicos embutidos, sem modelos externos.
///
/// Imutável após a criação — seguro para uso concorrente.
pub struct LexiconToolkit {
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    scorer: SentimentScorer,
    extractor: EntityExtractor,
}

impl LexiconToolkit {
    /// Cria o toolkit, compilando as expressões regulares.
    ///
    /// # Erros
    ///
    /// Retorna erro se a regex de tokenização não compilar.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            lemmatizer: Lemmatizer::new(),
            scorer: SentimentScorer::new(),
            extractor: EntityExtractor::new(),
        })
    }
}

impl LinguisticToolkit for LexiconToolkit {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        self.lemmatizer.lemmatize(tokens)
    }

    fn sentiment_scores(&self, text: &str) -> SentimentScores {
        self.scorer.polarity_scores(text)
    }

    fn extract_entities(&self, tokens: &[String]) -> Vec<Entity> {
        self.extractor.extract(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_run_every_stage() {
        let toolkit = LexiconToolkit::new().unwrap();
        let s = toolkit.signals("A Maria disse que o erro continua, resolvam já!");
        assert_eq!(s.lemmas, vec!["maria", "disse", "erro", "continua", "resolvam", "já"]);
        assert!(s.scores.compound < 0.0);
        assert_eq!(s.entities, vec![Entity::new("PERSON", "Maria")]);
    }
}
