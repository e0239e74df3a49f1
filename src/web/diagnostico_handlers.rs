// src/web/diagnostico_handlers.rs
use crate::{services::professor_service, state::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

// GET /testar-banco — sonda de conectividade: um COUNT na tabela de
// professores, resultado em JSON.
pub async fn testar_banco(State(state): State<AppState>) -> impl IntoResponse {
    match professor_service::contar(&state.db_pool).await {
        Ok(total) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "details": format!("Banco conectado. Registros: {}", total),
            })),
        ),
        Err(e) => {
            tracing::error!("Sonda de banco falhou: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "status": "error", "error": e.to_string() })),
            )
        }
    }
}
