//! # Rótulos de Classificação
//!
//! Os três eixos categóricos produzidos pelo classificador:
//!
//! | Tipo | Valores | Origem |
//! |------|---------|--------|
//! | [`Mood`] | positivo, agradecido, neutro, negativo, irritado, irritado-extremo | Humor refinado |
//! | [`Intensity`] | extremo, alto, moderado, leve | Magnitude do `compound` |
//! | [`Urgency`] | nenhuma < baixa < média < alta < alta-extrema | Palavras-chave + contexto |
//!
//! Os rótulos são serializados exatamente como aparecem na API
//! (`"irritado-extremo"`, `"média"`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Humor refinado de uma mensagem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// `compound ≥ 0.5`.
    #[serde(rename = "positivo")]
    Positive,
    /// Algum sinal positivo (`pos > 0`) sem chegar a `positivo`.
    #[serde(rename = "agradecido")]
    Grateful,
    #[serde(rename = "neutro")]
    Neutral,
    #[serde(rename = "negativo")]
    Negative,
    /// Presença de palavra de raiva explícita.
    #[serde(rename = "irritado")]
    Angry,
    /// Ameaça (cancelar, reembolso, processo...) com sentimento muito negativo.
    #[serde(rename = "irritado-extremo")]
    Furious,
}

impl Mood {
    /// Rótulo textual, idêntico ao valor serializado.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Positive => "positivo",
            Mood::Grateful => "agradecido",
            Mood::Neutral => "neutro",
            Mood::Negative => "negativo",
            Mood::Angry => "irritado",
            Mood::Furious => "irritado-extremo",
        }
    }
}

/// Intensidade emocional, derivada apenas de `|compound|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    #[serde(rename = "extremo")]
    Extreme,
    #[serde(rename = "alto")]
    High,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "leve")]
    Mild,
}

impl Intensity {
    /// Classifica a magnitude do score `compound`, ignorando o sinal.
    ///
    /// ```text
    /// |compound| ≥ 0.7  → extremo
    /// |compound| ≥ 0.5  → alto
    /// |compound| ≥ 0.3  → moderado
    /// caso contrário    → leve
    /// ```
    pub fn from_compound(compound: f64) -> Self {
        let magnitude = compound.abs();
        if magnitude >= 0.7 {
            Intensity::Extreme
        } else if magnitude >= 0.5 {
            Intensity::High
        } else if magnitude >= 0.3 {
            Intensity::Moderate
        } else {
            Intensity::Mild
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Extreme => "extremo",
            Intensity::High => "alto",
            Intensity::Moderate => "moderado",
            Intensity::Mild => "leve",
        }
    }
}

/// Nível de urgência, totalmente ordenado.
///
/// A ordem de declaração define a ordem de `Ord`:
/// `None < Low < Medium < High < Critical`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "nenhuma")]
    None,
    #[serde(rename = "baixa")]
    Low,
    #[serde(rename = "média")]
    Medium,
    #[serde(rename = "alta")]
    High,
    /// Só alcançável por palavra de ameaça, nunca por escalonamento.
    #[serde(rename = "alta-extrema")]
    Critical,
}

impl Urgency {
    /// Sobe um degrau na escada de prioridade.
    ///
    /// Tabela explícita — a escada satura em `alta` e `alta-extrema`
    /// fica fora dela:
    ///
    /// ```text
    /// nenhuma → baixa → média → alta → alta
    /// alta-extrema → alta-extrema
    /// ```
    pub fn escalated(self) -> Self {
        match self {
            Urgency::None => Urgency::Low,
            Urgency::Low => Urgency::Medium,
            Urgency::Medium => Urgency::High,
            Urgency::High => Urgency::High,
            Urgency::Critical => Urgency::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::None => "nenhuma",
            Urgency::Low => "baixa",
            Urgency::Medium => "média",
            Urgency::High => "alta",
            Urgency::Critical => "alta-extrema",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_boundaries() {
        assert_eq!(Intensity::from_compound(0.7), Intensity::Extreme);
        assert_eq!(Intensity::from_compound(0.69), Intensity::High);
        assert_eq!(Intensity::from_compound(0.5), Intensity::High);
        assert_eq!(Intensity::from_compound(0.49), Intensity::Moderate);
        assert_eq!(Intensity::from_compound(0.3), Intensity::Moderate);
        assert_eq!(Intensity::from_compound(0.29), Intensity::Mild);
        assert_eq!(Intensity::from_compound(0.0), Intensity::Mild);
    }

    /// A intensidade depende só da magnitude — o sinal é irrelevante.
    #[test]
    fn intensity_ignores_sign() {
        for c in [0.0, 0.1, 0.3, 0.45, 0.5, 0.65, 0.7, 0.95, 1.0] {
            assert_eq!(Intensity::from_compound(c), Intensity::from_compound(-c));
        }
    }

    #[test]
    fn escalation_ladder_saturates_at_high() {
        assert_eq!(Urgency::None.escalated(), Urgency::Low);
        assert_eq!(Urgency::Low.escalated(), Urgency::Medium);
        assert_eq!(Urgency::Medium.escalated(), Urgency::High);
        assert_eq!(Urgency::High.escalated(), Urgency::High);
        assert_eq!(Urgency::Critical.escalated(), Urgency::Critical);
    }

    #[test]
    fn urgency_total_order() {
        assert!(Urgency::None < Urgency::Low);
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
        assert!(Urgency::High < Urgency::Critical);
    }

    #[test]
    fn labels_match_serialized_form() {
        assert_eq!(serde_json::to_string(&Urgency::Medium).unwrap(), "\"média\"");
        assert_eq!(serde_json::to_string(&Mood::Furious).unwrap(), "\"irritado-extremo\"");
        assert_eq!(serde_json::to_string(&Intensity::Mild).unwrap(), "\"leve\"");
        assert_eq!(Urgency::Critical.to_string(), "alta-extrema");
    }
}
