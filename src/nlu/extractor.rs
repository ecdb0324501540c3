//! # Extrator de Entidades Nomeadas — Heurísticas para PT-BR e EN
//!
//! O [`EntityExtractor`] encontra nomes próprios em uma sequência de tokens
//! e os rotula como `PERSON`, `ORGANIZATION` ou `LOCATION`.
//!
//! ## Estratégia
//!
//! ```text
//! tokens
//!   ├── 1. Agrupa tokens capitalizados consecutivos em trechos
//!   │      (conectores de/do/da/dos/das unem dois nomes: "Rio de Janeiro")
//!   ├── 2. Descarta palavra isolada no início de frase
//!   │      ("Quero", "Olá") — exceto siglas e lugares conhecidos
//!   └── 3. Rotula o trecho:
//!          sigla ou marcador corporativo  → ORGANIZATION
//!          lugar conhecido ou após em/in/at → LOCATION
//!          caso contrário                  → PERSON
//! ```
//!
//! ## Exemplo
//!
//! ```text
//! "Falei com Maria Souza da ACME em Porto Alegre."
//!   → [("PERSON", "Maria Souza"), ("ORGANIZATION", "ACME"), ("LOCATION", "Porto Alegre")]
//! ```

use crate::core::Entity;

use super::tokenizer::is_sentence_end;

pub const PERSON: &str = "PERSON";
pub const ORGANIZATION: &str = "ORGANIZATION";
pub const LOCATION: &str = "LOCATION";

/// Preposições que podem ligar dois nomes capitalizados.
const CONNECTORS: &[&str] = &["de", "do", "da", "dos", "das"];

/// Preposições de lugar que antecedem um trecho de localização.
const LOCATIVE_PREPOSITIONS: &[&str] = &["em", "in", "at"];

/// Palavras (em lowercase) que marcam nomes de empresa.
const ORGANIZATION_MARKERS: &[&str] = &[
    "ltda", "sa", "inc", "corp", "banco", "bank", "telecom", "company", "empresa", "grupo",
    "companhia", "seguros", "airlines", "universidade", "instituto", "faculdade", "loja",
    "lojas", "correios",
];

/// Lugares conhecidos (em lowercase).
const GAZETTEER: &[&str] = &[
    "brasil", "portugal", "são paulo", "rio de janeiro", "belo horizonte", "brasília",
    "curitiba", "porto alegre", "salvador", "recife", "fortaleza", "manaus", "belém",
    "goiânia", "campinas", "florianópolis", "vitória", "natal", "minas gerais", "bahia",
    "pernambuco", "paraná", "lisboa", "porto", "angola", "moçambique", "london", "new york",
    "paris", "madrid", "buenos aires",
];

/// Palavras capitalizadas que não formam nome próprio.
const NON_NAMES: &[&str] = &[
    "eu", "você", "ele", "ela", "nós", "eles", "elas", "o", "a", "os", "as", "um", "uma",
    "i", "the", "olá", "oi", "bom", "boa", "obrigado", "obrigada", "por", "favor", "sr", "sra",
];

/// Um trecho de tokens capitalizados candidatos a entidade.
struct Span<'a> {
    tokens: Vec<&'a str>,
    /// Índice do primeiro token no texto.
    start: usize,
}

/// Extrator de entidades nomeadas por heurísticas de capitalização.
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extrai entidades na ordem em que aparecem no texto.
    ///
    /// Entidades repetidas são mantidas — cada ocorrência gera uma entrada.
    pub fn extract(&self, tokens: &[String]) -> Vec<Entity> {
        collect_spans(tokens)
            .into_iter()
            .filter_map(|span| classify_span(&span, tokens))
            .collect()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Agrupa tokens capitalizados consecutivos.
fn collect_spans(tokens: &[String]) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut current: Option<Span<'_>> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();

        if is_name_token(token) {
            if let Some(span) = current.as_mut() {
                span.tokens.push(token);
            } else {
                current = Some(Span {
                    tokens: vec![token],
                    start: i,
                });
            }
            i += 1;
            continue;
        }

        // Conector entre dois nomes: "Rio de Janeiro", "Banco do Brasil".
        // Uma sigla depois do conector inicia outro trecho ("Maria da ACME").
        let joins = current.is_some()
            && CONNECTORS.contains(&token)
            && tokens
                .get(i + 1)
                .is_some_and(|next| is_name_token(next) && !is_acronym(next));
        if joins {
            if let Some(span) = current.as_mut() {
                span.tokens.push(token);
            }
            i += 1;
            continue;
        }

        if let Some(span) = current.take() {
            spans.push(span);
        }
        i += 1;
    }

    if let Some(span) = current {
        spans.push(span);
    }
    spans
}

/// Rotula um trecho, ou descarta se não parecer nome próprio.
fn classify_span(span: &Span<'_>, tokens: &[String]) -> Option<Entity> {
    let mut words = span.tokens.clone();
    let mut start = span.start;

    // "Eu Maria ..." → descarta o pronome inicial
    while let Some(first) = words.first() {
        if NON_NAMES.contains(&first.to_lowercase().as_str()) || CONNECTORS.contains(first) {
            words.remove(0);
            start += 1;
        } else {
            break;
        }
    }
    // Um conector nunca termina um trecho, mas pode sobrar após o corte acima.
    while words.last().is_some_and(|w| CONNECTORS.contains(w)) {
        words.pop();
    }
    if words.is_empty() {
        return None;
    }
    // Medido após o corte: em "Olá Maria" o nome não abre a frase.
    let at_sentence_start =
        start == 0 || tokens.get(start - 1).is_some_and(|t| is_sentence_end(t));

    let text = words.join(" ");
    let lower = text.to_lowercase();
    let has_acronym = words.iter().any(|w| is_acronym(w));
    let is_organization = has_acronym
        || words
            .iter()
            .any(|w| ORGANIZATION_MARKERS.contains(&w.to_lowercase().as_str()));
    let is_known_place = GAZETTEER.contains(&lower.as_str());

    // Palavra isolada no início de frase: só conta se for sigla ou lugar conhecido.
    if at_sentence_start && words.len() == 1 && !has_acronym && !is_known_place {
        return None;
    }

    let after_locative = start > 0
        && tokens
            .get(start - 1)
            .is_some_and(|prev| LOCATIVE_PREPOSITIONS.contains(&prev.to_lowercase().as_str()));

    let kind = if is_organization {
        ORGANIZATION
    } else if is_known_place || after_locative {
        LOCATION
    } else {
        PERSON
    };
    Some(Entity::new(kind, text))
}

/// Token que pode fazer parte de um nome: começa com maiúscula, só letras.
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(char::is_uppercase)
        && token.chars().count() >= 2
        && token.chars().all(char::is_alphabetic)
}

/// Sigla: 2+ letras, todas maiúsculas ("ACME", "TIM", "SAC").
fn is_acronym(token: &str) -> bool {
    token.chars().count() >= 2 && token.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}
