// src/web/financeiro_handlers.rs
use crate::{
    error::AppResult,
    services::mensalidade_service,
    state::AppState,
    templates::FinanceiroPage,
};
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

// GET /financeiro
pub async fn show_financeiro() -> AppResult<Response> {
    Ok(Html(FinanceiroPage.render()?).into_response())
}

// GET /api/financeiro — resumo consolidado em JSON; aqui o erro sobe
// como status 500 em vez de página degradada.
pub async fn api_resumo_financeiro(State(state): State<AppState>) -> Response {
    match mensalidade_service::resumo_financeiro(&state.db_pool).await {
        Ok(resumo) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "success", "details": resumo })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Erro no resumo financeiro: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "status": "error", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
