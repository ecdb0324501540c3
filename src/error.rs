//! # Erros do Analisador
//!
//! O motor de classificação não falha: toda combinação de entradas gera
//! um resultado. O único erro do sistema é a violação de pré-condição
//! "mensagem vazia", detectada antes da classificação.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Texto vazio ou só com espaços.
    #[error("O texto da mensagem não pode estar vazio.")]
    EmptyMessage,

    /// Item inválido em um lote — o lote inteiro é rejeitado.
    #[error("O texto da mensagem não pode estar vazio (item {index} do lote).")]
    EmptyMessageInBatch { index: usize },

    #[error("O lote tem {size} mensagens; o máximo permitido é {max}.")]
    BatchTooLarge { size: usize, max: usize },

    /// `dias_aberto` do formulário não é um inteiro não negativo.
    #[error("Dias em aberto deve ser um inteiro não negativo (recebido: {value:?}).")]
    InvalidDaysOpen { value: String },
}
