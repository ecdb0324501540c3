//! # Lematizador e Filtro de Stopwords
//!
//! Transforma tokens em lemas para o casamento por palavra-chave:
//!
//! ```text
//! token
//!   ├── lowercase
//!   ├── descarta se não for puramente alfabético ("123", ",", "don't")
//!   ├── descarta stopwords PT + EN (exceto palavras dos vocabulários)
//!   └── reduz flexões simples → lema
//! ```
//!
//! ## Por que Stopwords com Exceção?
//!
//! A lista de stopwords em português contém "já", que também é um
//! intensificador de urgência. Palavras que pertencem a algum vocabulário
//! de classificação nunca são descartadas.
//!
//! ## Redução de Flexões
//!
//! Heurística por sufixo, sem dicionário:
//!
//! | Regra | Exemplo |
//! |-------|---------|
//! | Verbo irregular inglês | `paid` → `pay` |
//! | `-ies` (ASCII) | `replies` → `reply` |
//! | `-ing` / `-ed` (ASCII) | `waiting` → `wait`, `stopped` → `stop` |
//! | Plural em vogal + `s` | `falhas` → `falha`, `erros` → `erro` |

use std::collections::HashSet;

use crate::classify::vocabulary;

/// Stopwords em português (lista do NLTK).
const PORTUGUESE_STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos",
    "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos", "essa",
    "essas", "esse", "esses", "esta", "está", "estamos", "estão", "estar", "estas", "estava",
    "estavam", "estávamos", "este", "esteja", "estejam", "estejamos", "estes", "esteve",
    "estive", "estivemos", "estiver", "estivera", "estiveram", "estivéramos", "estiverem",
    "estivermos", "estivesse", "estivessem", "estivéssemos", "estou", "eu", "foi", "fomos",
    "for", "fora", "foram", "fôramos", "forem", "formos", "fosse", "fossem", "fôssemos", "fui",
    "há", "haja", "hajam", "hajamos", "hão", "havemos", "haver", "hei", "houve", "houvemos",
    "houver", "houvera", "houverá", "houveram", "houvéramos", "houverão", "houverei",
    "houverem", "houveremos", "houveria", "houveriam", "houveríamos", "houvermos", "houvesse",
    "houvessem", "houvéssemos", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me",
    "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no", "nos",
    "nós", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela",
    "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja",
    "sejam", "sejamos", "sem", "ser", "será", "serão", "serei", "seremos", "seria", "seriam",
    "seríamos", "seu", "seus", "só", "somos", "sou", "sua", "suas", "também", "te", "tem",
    "tém", "temos", "tenha", "tenham", "tenhamos", "tenho", "terá", "terão", "terei", "teremos",
    "teria", "teriam", "teríamos", "teu", "teus", "teve", "tinha", "tinham", "tínhamos", "tive",
    "tivemos", "tiver", "tivera", "tiveram", "tivéramos", "tiverem", "tivermos", "tivesse",
    "tivessem", "tivéssemos", "tu", "tua", "tuas", "um", "uma", "você", "vocês", "vos",
];

/// Stopwords em inglês (lista do NLTK, sem as formas com apóstrofo,
/// que já são descartadas pelo filtro alfabético).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Verbos irregulares do inglês mais comuns em atendimento.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("paid", "pay"),
    ("sent", "send"),
    ("made", "make"),
    ("got", "get"),
    ("gotten", "get"),
    ("said", "say"),
    ("bought", "buy"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("gave", "give"),
    ("given", "give"),
    ("told", "tell"),
    ("left", "leave"),
    ("broke", "break"),
    ("broken", "break"),
    ("went", "go"),
    ("gone", "go"),
    ("lost", "lose"),
    ("charged", "charge"),
];

pub struct Lemmatizer {
    stopwords: HashSet<&'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            stopwords: PORTUGUESE_STOPWORDS
                .iter()
                .chain(ENGLISH_STOPWORDS)
                .copied()
                .collect(),
        }
    }

    /// Converte tokens em lemas, preservando a ordem e as repetições.
    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        let vocabulary = vocabulary();
        tokens
            .iter()
            .filter_map(|token| {
                let lower = token.to_lowercase();
                if lower.is_empty() || !lower.chars().all(char::is_alphabetic) {
                    return None;
                }
                if vocabulary.contains_word(&lower) {
                    return Some(lower);
                }
                if self.stopwords.contains(lower.as_str()) {
                    return None;
                }
                Some(reduce(&lower))
            })
            .collect()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduz uma palavra em lowercase à sua forma base.
pub fn reduce(word: &str) -> String {
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == word) {
        return base.to_string();
    }

    let len = word.chars().count();
    if word.is_ascii() && len > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 3 {
                    return undouble(stem).to_string();
                }
            }
        }
    }

    // Plural: vogal sem acento + "s" ("falhas", "erros", "clientes")
    if len > 3 && !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            if stem.ends_with(&['a', 'e', 'o'][..]) {
                return stem.to_string();
            }
        }
    }

    word.to_string()
}

/// Remove a consoante final duplicada de radicais como "stopp" → "stop".
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && !matches!(bytes[n - 1], b'l' | b's' | b'z' | b'e' | b'o')
    {
        &stem[..n - 1]
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn drops_stopwords_punctuation_and_numbers() {
        let l = Lemmatizer::new();
        let lemmas = l.lemmatize(&tokens(&["Eu", "quero", "o", "protocolo", "123", "!", "agora"]));
        assert_eq!(lemmas, vec!["quero", "protocolo", "agora"]);
    }

    #[test]
    fn vocabulary_words_survive_stopword_filter() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemmatize(&tokens(&["Resolvam", "JÁ"])), vec!["resolvam", "já"]);
    }

    #[test]
    fn keeps_repetitions_and_order() {
        let l = Lemmatizer::new();
        assert_eq!(
            l.lemmatize(&tokens(&["erro", "falha", "erro"])),
            vec!["erro", "falha", "erro"]
        );
    }

    #[test]
    fn reduces_plurals_to_vocabulary_forms() {
        let l = Lemmatizer::new();
        assert_eq!(
            l.lemmatize(&tokens(&["Erros", "falhas", "atrasos", "processos"])),
            vec!["erro", "falha", "atraso", "processo"]
        );
    }

    #[test]
    fn english_inflections() {
        assert_eq!(reduce("waiting"), "wait");
        assert_eq!(reduce("stopped"), "stop");
        assert_eq!(reduce("replies"), "reply");
        assert_eq!(reduce("paid"), "pay");
        assert_eq!(reduce("called"), "call");
    }

    #[test]
    fn leaves_accented_and_short_words_alone() {
        assert_eq!(reduce("atrás"), "atrás");
        assert_eq!(reduce("urgência"), "urgência");
        assert_eq!(reduce("ódio"), "ódio");
        assert_eq!(reduce("mês"), "mês");
        assert_eq!(reduce("class"), "class");
    }
}
