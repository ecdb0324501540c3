//! # Templates Maud — HTML Server-Side Rendering
//!
//! O painel é uma página única com um formulário. O HTMX envia o
//! formulário para `POST /painel` e injeta o fragmento retornado em
//! `#resultado`; sem JavaScript o formulário faz um POST comum e o
//! navegador mostra o fragmento.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Formulário de análise |
//! | [`result_card()`] | Fragment HTMX | Rótulos + entidades |
//! | [`error_card()`] | Fragment HTMX | Mensagem de validação |

use maud::{html, Markup, DOCTYPE};

use crate::core::{AnalysisResult, Urgency};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
textarea, input, select { width: 100%; margin: .25rem 0 .75rem; padding: .4rem; }
button { padding: .5rem 1.5rem; }
.card { border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin-top: 1.5rem; }
.error { border-color: #c0392b; color: #c0392b; }
.tag { display: inline-block; padding: .15rem .5rem; border-radius: 4px; background: #eee; margin-right: .35rem; }
.urg-alta, .urg-alta-extrema { background: #f5b7b1; }
.urg-media { background: #fad7a0; }
"#;

/// Página do painel de análise.
pub fn full_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Analisador de Mensagens" }
                style { (STYLE) }
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                h1 { "Analisador de Mensagens" }
                p {
                    "Classifica humor, intensidade emocional e urgência de uma mensagem "
                    "de atendimento e extrai entidades nomeadas."
                }
                form method="post" action="/painel"
                    hx-post="/painel" hx-target="#resultado" hx-swap="innerHTML" {
                    label for="texto" { "Mensagem" }
                    textarea id="texto" name="texto" rows="4" required
                        placeholder="Estou muito frustrado com o serviço!" {}
                    label for="canal" { "Canal" }
                    select id="canal" name="canal" {
                        option value="" { "—" }
                        option value="chat" { "chat" }
                        option value="telefone" { "telefone" }
                        option value="email" { "email" }
                    }
                    label for="tipo_cliente" { "Tipo de cliente" }
                    select id="tipo_cliente" name="tipo_cliente" {
                        option value="" { "—" }
                        option value="VIP" { "VIP" }
                        option value="premium" { "premium" }
                        option value="padrão" { "padrão" }
                    }
                    label for="dias_aberto" { "Dias em aberto" }
                    input id="dias_aberto" name="dias_aberto" type="number" min="0" value="0";
                    button type="submit" { "Analisar" }
                }
                div id="resultado" {}
            }
        }
    }
}

/// Fragmento com o resultado de uma análise.
pub fn result_card(result: &AnalysisResult) -> Markup {
    html! {
        div class="card" {
            p { em { (result.message) } }
            p {
                span class="tag" { "humor: " strong { (result.mood) } }
                span class="tag" { "intensidade: " strong { (result.intensity) } }
                span class=(format!("tag {}", urgency_class(result.urgency))) {
                    "urgência: " strong { (result.urgency) }
                }
            }
            @if result.entities.is_empty() {
                p { "Nenhuma entidade encontrada." }
            } @else {
                ul {
                    @for entity in &result.entities {
                        li { code { (entity.kind) } " " (entity.text) }
                    }
                }
            }
        }
    }
}

/// Fragmento de erro de validação.
pub fn error_card(message: &str) -> Markup {
    html! {
        div class="card error" { (message) }
    }
}

fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::None => "urg-nenhuma",
        Urgency::Low => "urg-baixa",
        Urgency::Medium => "urg-media",
        Urgency::High => "urg-alta",
        Urgency::Critical => "urg-alta-extrema",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, Intensity, Mood};

    #[test]
    fn result_card_lists_labels_and_entities() {
        let result = AnalysisResult {
            message: "Falei com <Maria>".into(),
            mood: Mood::Negative,
            intensity: Intensity::High,
            urgency: Urgency::Critical,
            entities: vec![Entity::new("PERSON", "Maria")],
        };
        let html = result_card(&result).into_string();
        assert!(html.contains("negativo"));
        assert!(html.contains("alto"));
        assert!(html.contains("alta-extrema"));
        assert!(html.contains("PERSON"));
        // conteúdo do usuário é escapado
        assert!(html.contains("&lt;Maria&gt;"));
    }

    #[test]
    fn page_posts_to_painel() {
        let html = full_page().into_string();
        assert!(html.contains(r#"hx-post="/painel""#));
        assert!(html.contains(r#"name="dias_aberto""#));
    }
}
