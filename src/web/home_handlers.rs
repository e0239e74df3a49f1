// src/web/home_handlers.rs
use crate::{
    error::AppResult,
    services::painel_service::{self, ResumoPainel},
    state::AppState,
    templates::HomePage,
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

/// Sentinela exibido em todos os contadores quando as consultas falham.
const SENTINELA_ERRO: &str = "!";

// GET /home — painel com as quatro contagens. Falha de consulta nunca
// derruba a requisição: a página degrada para os sentinelas.
pub async fn show_home(State(state): State<AppState>) -> AppResult<Response> {
    let pagina = match painel_service::resumo(&state.db_pool).await {
        ResumoPainel::Disponivel(contagens) => HomePage {
            mensagem: "Como podemos te ajudar hoje?".to_string(),
            nome_creche: "Minha Creche".to_string(),
            professores: contagens.professores.to_string(),
            alunos: contagens.alunos.to_string(),
            turmas: contagens.turmas.to_string(),
            matriculas: contagens.matriculas.to_string(),
        },
        ResumoPainel::Indisponivel => HomePage {
            mensagem: "Erro ao carregar dados.".to_string(),
            nome_creche: "Erro".to_string(),
            professores: SENTINELA_ERRO.to_string(),
            alunos: SENTINELA_ERRO.to_string(),
            turmas: SENTINELA_ERRO.to_string(),
            matriculas: SENTINELA_ERRO.to_string(),
        },
    };

    Ok(Html(pagina.render()?).into_response())
}
