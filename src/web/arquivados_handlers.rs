// src/web/arquivados_handlers.rs
use crate::{
    error::AppResult,
    services::arquivados_service,
    state::AppState,
    templates::ArquivadosPage,
};
use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /arquivados — falha de consulta degrada para lista vazia.
pub async fn show_arquivados(State(state): State<AppState>) -> AppResult<Response> {
    let hoje = chrono::Local::now().date_naive();
    let criancas = match arquivados_service::listar_arquivadas(&state.db_pool, hoje).await {
        Ok(lista) => lista,
        Err(e) => {
            tracing::error!("Erro ao carregar fichas arquivadas: {:?}", e);
            Vec::new()
        }
    };

    let pagina = ArquivadosPage { criancas };
    Ok(Html(pagina.render()?).into_response())
}

// POST /arquivados/desarquivar/{id} — redireciona de volta sempre;
// erro fica só no log.
pub async fn handle_desarquivar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(e) = arquivados_service::desarquivar(&state.db_pool, id).await {
        tracing::error!("Erro ao desarquivar ficha {}: {:?}", id, e);
    }
    Redirect::to("/arquivados")
}
