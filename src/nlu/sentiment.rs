//! # Pontuador de Sentimento — Léxico no Estilo VADER
//!
//! Calcula `{neg, neu, pos, compound}` a partir de um léxico bilíngue
//! (PT-BR + EN) de valências na escala VADER (-4 a +4).
//!
//! ## Algoritmo
//!
//! ```text
//! para cada palavra com valência v:
//!   ├── CAIXA ALTA (num texto com caixa mista) → v ± 0.733
//!   ├── intensificador nas 3 palavras anteriores → v ± 0.293 (×0.95, ×0.9 pela distância)
//!   └── negação nas 3 palavras anteriores → v × -0.74
//! conjunção adversativa ("mas", "but"): antes × 0.5, depois × 1.5
//! soma s += ênfase de pontuação ("!" +0.292 cada, até 4; "??" +0.18 cada)
//! compound = s / √(s² + 15)
//! ```
//!
//! As proporções `pos`/`neg`/`neu` seguem o VADER: cada palavra positiva
//! contribui `v + 1`, cada negativa `v - 1`, cada neutra conta 1.

use std::collections::{HashMap, HashSet};

use crate::core::SentimentScores;

/// Fator de normalização do compound.
const ALPHA: f64 = 15.0;

/// Incremento/decremento aplicado por intensificadores.
const BOOSTER_INCREMENT: f64 = 0.293;

/// Ênfase extra de palavras em CAIXA ALTA.
const CAPS_INCREMENT: f64 = 0.733;

/// Fator aplicado a valências negadas.
const NEGATION_SCALAR: f64 = -0.74;

const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;

/// Valências (escala VADER) de palavras frequentes em mensagens de atendimento.
const LEXICON: &[(&str, f64)] = &[
    // ── positivas (PT) ──
    ("obrigado", 2.0), ("obrigada", 2.0), ("agradeço", 2.0), ("agradecido", 2.0),
    ("agradecida", 2.0), ("grato", 2.0), ("grata", 2.0), ("ótimo", 3.1), ("ótima", 3.1),
    ("excelente", 3.2), ("bom", 1.9), ("boa", 1.9), ("maravilhoso", 3.0), ("maravilhosa", 3.0),
    ("perfeito", 2.9), ("perfeita", 2.9), ("adorei", 3.0), ("amei", 3.1), ("feliz", 2.7),
    ("satisfeito", 1.8), ("satisfeita", 1.8), ("parabéns", 2.5), ("incrível", 2.9),
    ("legal", 1.7), ("eficiente", 1.8), ("rápido", 1.0), ("rápida", 1.0), ("resolvido", 1.5),
    ("resolvida", 1.5), ("resolveu", 1.5), ("ajudou", 1.7), ("gentil", 2.0), ("atencioso", 1.9),
    ("atenciosa", 1.9), ("sucesso", 2.7), ("recomendo", 2.0), ("elogio", 2.1),
    // ── negativas (PT) ──
    ("ruim", -2.5), ("péssimo", -3.1), ("péssima", -3.1), ("horrível", -2.5),
    ("terrível", -3.0), ("odeio", -3.2), ("ódio", -3.2), ("raiva", -2.6), ("furioso", -3.0),
    ("furiosa", -3.0), ("revoltado", -2.7), ("revoltada", -2.7), ("insuportável", -2.9),
    ("absurdo", -2.4), ("absurda", -2.4), ("lixo", -2.8), ("decepcionado", -2.3),
    ("decepcionada", -2.3), ("decepção", -2.4), ("frustrado", -2.1), ("frustrada", -2.1),
    ("irritado", -2.2), ("irritada", -2.2), ("problema", -1.7), ("problemas", -1.7),
    ("erro", -1.8), ("erros", -1.8), ("falha", -1.9), ("falhas", -1.9), ("atraso", -1.3),
    ("atrasado", -1.3), ("atrasada", -1.3), ("lento", -1.2), ("lenta", -1.2),
    ("cancelar", -1.0), ("reclamação", -1.5), ("vergonha", -2.3), ("descaso", -2.5),
    ("desrespeito", -2.6), ("inaceitável", -2.9), ("pior", -2.3), ("triste", -2.1),
    ("chateado", -2.0), ("chateada", -2.0), ("enganado", -2.4), ("enganada", -2.4),
    ("golpe", -2.8), ("cansado", -1.5), ("cansada", -1.5),
    // ── positivas (EN) ──
    ("thanks", 1.9), ("thank", 1.5), ("great", 3.1), ("good", 1.9), ("excellent", 2.7),
    ("love", 3.2), ("happy", 2.7), ("awesome", 3.1), ("perfect", 2.7), ("amazing", 2.8),
    ("helpful", 1.8), ("nice", 1.8), ("appreciate", 2.0),
    // ── negativas (EN) ──
    ("bad", -2.5), ("terrible", -2.1), ("awful", -2.0), ("horrible", -2.5), ("hate", -2.7),
    ("angry", -2.3), ("furious", -2.7), ("worst", -3.1), ("problem", -1.7), ("error", -1.8),
    ("fail", -2.3), ("failed", -2.3), ("broken", -2.0), ("slow", -1.2),
    ("unacceptable", -2.0), ("disappointed", -1.9), ("useless", -1.8), ("ridiculous", -2.0),
    ("scam", -2.8), ("sucks", -1.5),
];

/// Intensificadores: `true` aumenta a valência, `false` atenua.
const BOOSTERS: &[(&str, bool)] = &[
    ("muito", true), ("muita", true), ("muitos", true), ("muitas", true), ("super", true),
    ("extremamente", true), ("totalmente", true), ("completamente", true), ("bastante", true),
    ("demais", true), ("tão", true), ("absolutamente", true), ("very", true), ("really", true),
    ("extremely", true), ("so", true), ("totally", true), ("completely", true),
    ("absolutely", true), ("incredibly", true), ("pouco", false), ("meio", false),
    ("quase", false), ("levemente", false), ("slightly", false), ("somewhat", false),
    ("barely", false),
];

const NEGATIONS: &[&str] = &[
    "não", "nunca", "jamais", "nem", "nada", "ninguém", "nenhum", "nenhuma", "sem", "not", "no",
    "never", "nothing", "nobody", "none", "nor", "without", "cannot",
];

const CONTRASTIVES: &[&str] = &["mas", "porém", "contudo", "entretanto", "but"];

pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, bool>,
    negations: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Calcula os scores de sentimento de um texto.
    ///
    /// Texto sem nenhuma palavra retorna todos os scores zerados.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return SentimentScores::neutral();
        }

        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mixed_caps = has_mixed_caps(&words);

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(i, &words, &lower, mixed_caps))
            .collect();

        apply_contrastive(&lower, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let sum: f64 = sentiments.iter().sum();
        let compound = if sum > 0.0 {
            normalize(sum + emphasis)
        } else if sum < 0.0 {
            normalize(sum - emphasis)
        } else {
            0.0
        };

        let (pos, neg, neu) = proportions(&sentiments, emphasis);
        SentimentScores::new(round3(neg), round3(neu), round3(pos), round4(compound))
    }

    /// Valência da palavra `i` já ajustada por caixa, intensificadores e negação.
    fn word_valence(&self, i: usize, words: &[&str], lower: &[String], mixed_caps: bool) -> f64 {
        let word = lower[i].as_str();
        // Intensificadores não têm valência própria
        if self.boosters.contains_key(word) {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        if mixed_caps && is_all_caps(words[i]) {
            valence += CAPS_INCREMENT * valence.signum();
        }

        for distance in 1..=3 {
            let Some(j) = i.checked_sub(distance) else {
                break;
            };
            if let Some(&increases) = self.boosters.get(lower[j].as_str()) {
                let mut scalar = if increases { BOOSTER_INCREMENT } else { -BOOSTER_INCREMENT };
                if mixed_caps && is_all_caps(words[j]) {
                    scalar += CAPS_INCREMENT * scalar.signum();
                }
                scalar *= match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += scalar * valence.signum();
            }
        }

        let negated = (1..=3)
            .filter_map(|d| i.checked_sub(d))
            .any(|j| self.is_negation(&lower[j]));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valence
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// `true` se o texto mistura palavras em CAIXA ALTA e em caixa normal.
fn has_mixed_caps(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Sentimento antes da adversativa perde peso; depois dela, ganha.
fn apply_contrastive(lower: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lower.iter().position(|w| CONTRASTIVES.contains(&w.as_str())) else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    exclamations * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Proporções `(pos, neg, neu)` no estilo VADER.
fn proportions(sentiments: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neutral = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neutral += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neutral;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (pos_sum / total, neg_sum.abs() / total, neutral / total)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
