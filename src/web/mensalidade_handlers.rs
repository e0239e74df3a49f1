// src/web/mensalidade_handlers.rs
use crate::{
    error::AppResult,
    services::mensalidade_service,
    state::AppState,
    templates::MensalidadePage,
};
use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /mensalidade
pub async fn show_mensalidades(State(state): State<AppState>) -> AppResult<Response> {
    let pagina = match mensalidade_service::listar_com_alunos(&state.db_pool).await {
        Ok(mensalidades) => MensalidadePage { mensalidades, erro: None },
        Err(e) => {
            tracing::error!("Erro ao listar mensalidades: {:?}", e);
            MensalidadePage {
                mensalidades: Vec::new(),
                erro: Some("Falha ao carregar as mensalidades.".to_string()),
            }
        }
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /mensalidade/pagar/{id}
pub async fn handle_pagar(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let hoje = chrono::Local::now().date_naive();
    if let Err(e) = mensalidade_service::marcar_paga(&state.db_pool, id, hoje).await {
        tracing::error!("Erro ao dar baixa na mensalidade {}: {:?}", id, e);
    }
    Redirect::to("/mensalidade")
}
