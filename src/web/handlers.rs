//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Painel com formulário |
//! | `status` | GET | JSON | Verificação de saúde |
//! | `analisar` | POST | JSON | Análise de uma mensagem |
//! | `analisar_lote` | POST | JSON | Análise de um lote |
//! | `painel` | POST | HTMX fragment | Resultado para o painel |
//!
//! ## Validação
//!
//! Texto vazio (ou só espaços) é rejeitado com 400 antes de qualquer
//! classificação. Em lote, o primeiro item vazio rejeita o lote inteiro.
//! JSON malformado ou `dias_aberto` negativo são rejeitados pelo extrator
//! `Json` do Axum. No painel, `dias_aberto` vazio vale 0 e qualquer valor
//! que não seja inteiro não negativo vira um fragmento de erro.

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use super::templates;
use crate::analyzer::MessageRequest;
use crate::core::AnalysisResult;
use crate::error::AnalysisError;

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub versao: &'static str,
}

/// Campos do formulário do painel.
///
/// Campos opcionais chegam como string vazia quando não preenchidos.
#[derive(Deserialize)]
pub struct PainelForm {
    pub texto: String,
    #[serde(default)]
    pub canal: String,
    #[serde(default)]
    pub tipo_cliente: String,
    #[serde(default)]
    pub dias_aberto: String,
}

/// Campo vazio vale 0; qualquer outra coisa precisa ser um inteiro ≥ 0.
impl TryFrom<PainelForm> for MessageRequest {
    type Error = AnalysisError;

    fn try_from(form: PainelForm) -> Result<Self, Self::Error> {
        let non_empty = |s: String| {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        };
        let days = form.dias_aberto.trim();
        let days_open = if days.is_empty() {
            0
        } else {
            days.parse().map_err(|_| AnalysisError::InvalidDaysOpen {
                value: days.to_string(),
            })?
        };
        Ok(MessageRequest {
            text: form.texto,
            channel: non_empty(form.canal),
            customer_type: non_empty(form.tipo_cliente),
            days_open,
        })
    }
}

fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Painel de análise.
pub async fn index() -> Html<String> {
    markup_to_html(templates::full_page())
}

/// GET `/status` — Sempre `ok` quando o processo está de pé.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        versao: env!("CARGO_PKG_VERSION"),
    })
}

/// POST `/analisar/` — Analisa uma mensagem.
///
/// ```json
/// { "texto": "Quero cancelar agora!", "canal": "chat", "tipo_cliente": "VIP", "dias_aberto": 3 }
/// ```
pub async fn analisar(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.analyzer.analyze_request(&request)?;
    tracing::info!(
        humor = %result.mood,
        urgencia = %result.urgency,
        entidades = result.entities.len(),
        "Mensagem analisada"
    );
    Ok(Json(result))
}

/// POST `/analisar/lote` — Analisa várias mensagens de uma vez.
///
/// A análise roda em `spawn_blocking` porque o lote é processado em
/// paralelo pelo pool do rayon e não deve ocupar as threads do runtime.
pub async fn analisar_lote(
    State(state): State<AppState>,
    Json(requests): Json<Vec<MessageRequest>>,
) -> Result<Json<Vec<AnalysisResult>>, ApiError> {
    if requests.len() > state.max_batch {
        return Err(AnalysisError::BatchTooLarge {
            size: requests.len(),
            max: state.max_batch,
        }
        .into());
    }

    let analyzer = state.analyzer.clone();
    let results = tokio::task::spawn_blocking(move || analyzer.analyze_batch(&requests))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Falha na tarefa de análise em lote");
            ApiError::internal("Falha ao processar o lote")
        })??;

    Ok(Json(results))
}

/// POST `/painel` — Analisa o formulário e devolve um fragmento HTML.
pub async fn painel(State(state): State<AppState>, Form(form): Form<PainelForm>) -> Html<String> {
    let analysis = MessageRequest::try_from(form)
        .and_then(|request| state.analyzer.analyze_request(&request));
    markup_to_html(match analysis {
        Ok(result) => templates::result_card(&result),
        Err(e) => {
            tracing::warn!(error = %e, "Formulário rejeitado");
            templates::error_card(&e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(canal: &str, tipo_cliente: &str, dias_aberto: &str) -> PainelForm {
        PainelForm {
            texto: "oi".into(),
            canal: canal.into(),
            tipo_cliente: tipo_cliente.into(),
            dias_aberto: dias_aberto.into(),
        }
    }

    #[test]
    fn painel_form_maps_blank_fields_to_none() {
        let r = MessageRequest::try_from(form("  ", "VIP", "")).unwrap();
        assert_eq!(r.channel, None);
        assert_eq!(r.customer_type.as_deref(), Some("VIP"));
        assert_eq!(r.days_open, 0);
    }

    #[test]
    fn painel_form_parses_days_open() {
        let r = MessageRequest::try_from(form("chat", "", " 12 ")).unwrap();
        assert_eq!(r.days_open, 12);
    }

    #[test]
    fn painel_form_rejects_invalid_days_open() {
        for bad in ["-10", "abc", "10 dias"] {
            assert_eq!(
                MessageRequest::try_from(form("", "", bad)),
                Err(AnalysisError::InvalidDaysOpen { value: bad.to_string() })
            );
        }
    }
}
