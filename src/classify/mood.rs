//! # Classificador de Humor
//!
//! Converte scores de sentimento + lemas em `(humor, intensidade)`.
//!
//! ## Regras (a primeira que casar vence)
//!
//! ```text
//! 1. ameaça  E compound < -0.6  → irritado-extremo
//! 2. palavra de raiva            → irritado
//! 3. compound ≥ 0.5              → positivo
//! 4. pos > 0                     → agradecido
//! 5. compound > -0.3             → neutro
//! 6. caso contrário              → negativo
//! ```
//!
//! A ordem codifica precedência: a checagem de raiva precisa vir antes
//! dos limiares de `compound`, senão "furioso" com compound -0.2 sairia
//! como `neutro`.

use crate::core::{Intensity, Mood, SentimentScores};

use super::vocabulary::Vocabulary;

pub struct MoodClassifier;

impl MoodClassifier {
    /// Classifica humor e intensidade. Função pura, sem falhas.
    pub fn classify(
        scores: &SentimentScores,
        lemmas: &[String],
        vocabulary: &Vocabulary,
    ) -> (Mood, Intensity) {
        let compound = scores.compound;
        let intensity = Intensity::from_compound(compound);

        let mood = if vocabulary.has_threat(lemmas) && compound < -0.6 {
            Mood::Furious
        } else if vocabulary.has_anger(lemmas) {
            Mood::Angry
        } else if compound >= 0.5 {
            Mood::Positive
        } else if scores.positive > 0.0 {
            Mood::Grateful
        } else if compound > -0.3 {
            Mood::Neutral
        } else {
            Mood::Negative
        };

        (mood, intensity)
    }
}
