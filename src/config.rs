//! # Configuração do Servidor
//!
//! Argumentos de linha de comando com fallback para variáveis de ambiente.
//! O nível de log é controlado à parte, por `RUST_LOG`.
//!
//! ```bash
//! ANALISADOR_ADDR=127.0.0.1:9000 cargo run
//! cargo run -- --max-batch 200
//! ```

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "analisador-mensagens")]
#[command(
    version,
    about = "Classifica humor, urgência e extrai entidades de mensagens de atendimento"
)]
pub struct Config {
    /// Endereço de escuta do servidor HTTP
    #[arg(long, env = "ANALISADOR_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: String,

    /// Tamanho máximo do corpo de uma requisição, em bytes
    #[arg(long, env = "ANALISADOR_MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Número máximo de mensagens em um lote
    #[arg(long, env = "ANALISADOR_MAX_BATCH", default_value_t = 1000)]
    pub max_batch: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "analisador-mensagens",
            "--addr",
            "127.0.0.1:9000",
            "--max-batch",
            "5",
            "--max-body-bytes",
            "2048",
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.max_batch, 5);
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn rejects_non_numeric_limits() {
        assert!(Config::try_parse_from(["analisador-mensagens", "--max-batch", "muitos"]).is_err());
    }
}
