// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::turma::NovaTurmaForm,
    services::turma_service,
    state::AppState,
    templates::TurmasPage,
};
use askama::Template;
use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /turmas
pub async fn show_turmas(State(state): State<AppState>) -> AppResult<Response> {
    let pagina = match turma_service::listar(&state.db_pool).await {
        Ok(turmas) => TurmasPage { turmas, erro: None },
        Err(e) => {
            tracing::error!("Erro ao listar turmas: {:?}", e);
            TurmasPage {
                turmas: Vec::new(),
                erro: Some("Falha ao carregar as turmas.".to_string()),
            }
        }
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /turmas
pub async fn handle_criar_turma(
    State(state): State<AppState>,
    Form(form): Form<NovaTurmaForm>,
) -> Redirect {
    if form.nome.trim().is_empty() {
        tracing::warn!("Criação de turma com nome vazio ignorada");
        return Redirect::to("/turmas");
    }
    if let Err(e) =
        turma_service::criar(&state.db_pool, form.nome.trim(), &form.periodo, form.capacidade).await
    {
        tracing::error!("Erro ao criar turma: {:?}", e);
    }
    Redirect::to("/turmas")
}

// POST /turmas/arquivar/{id}
pub async fn handle_arquivar_turma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(e) = turma_service::arquivar(&state.db_pool, id).await {
        tracing::error!("Erro ao arquivar turma {}: {:?}", id, e);
    }
    Redirect::to("/turmas")
}
