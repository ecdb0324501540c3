//! # Tokenizador
//!
//! Divide o texto em tokens de palavra e de pontuação, preservando a ordem.
//!
//! ```text
//! "Não quero esperar, é urgente!"
//!   → ["Não", "quero", "esperar", ",", "é", "urgente", "!"]
//! ```
//!
//! O texto é normalizado para NFC antes da divisão, para que "ã" composto
//! e "a" + til combinante virem o mesmo token. Contrações com apóstrofo
//! ("don't", "d'água") ficam inteiras.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

pub struct Tokenizer {
    /// Palavra (com apóstrofos internos) ou um único caractere de pontuação.
    token_re: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            token_re: Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]")?,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text: String = text.nfc().collect();
        self.token_re
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// `true` se o token encerra uma frase.
pub fn is_sentence_end(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        let t = Tokenizer::new().unwrap();
        assert_eq!(
            t.tokenize("Não quero esperar, é urgente!"),
            vec!["Não", "quero", "esperar", ",", "é", "urgente", "!"]
        );
    }

    #[test]
    fn keeps_contractions_whole() {
        let t = Tokenizer::new().unwrap();
        assert_eq!(t.tokenize("I don't care"), vec!["I", "don't", "care"]);
    }

    #[test]
    fn normalizes_decomposed_accents() {
        let t = Tokenizer::new().unwrap();
        // "a" + til combinante
        let tokens = t.tokenize("fala\u{0303}o");
        assert_eq!(tokens, vec!["falão"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let t = Tokenizer::new().unwrap();
        assert!(t.tokenize("   ").is_empty());
    }
}
