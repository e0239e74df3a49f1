// src/web/perfil_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{PerfilForm, PerfilResumo},
    services::usuario_service,
    state::AppState,
    templates::PerfilPage,
    web::mw_auth::UsuarioLogado,
};
use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Json,
};

// GET /meuperfil
pub async fn show_perfil(
    State(state): State<AppState>,
    Extension(UsuarioLogado(usuario_id)): Extension<UsuarioLogado>,
) -> AppResult<Response> {
    let usuario = usuario_service::buscar_por_id(&state.db_pool, usuario_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let pagina = PerfilPage {
        nome: usuario.nome,
        email: usuario.email,
        sucesso: None,
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /meuperfil
pub async fn handle_atualizar_perfil(
    State(state): State<AppState>,
    Extension(UsuarioLogado(usuario_id)): Extension<UsuarioLogado>,
    Form(form): Form<PerfilForm>,
) -> AppResult<Redirect> {
    if form.nome.trim().is_empty() {
        tracing::warn!("Atualização de perfil com nome vazio ignorada");
        return Ok(Redirect::to("/meuperfil"));
    }
    usuario_service::atualizar_nome(&state.db_pool, usuario_id, form.nome.trim()).await?;
    Ok(Redirect::to("/meuperfil"))
}

// GET /api/perfil — perfil da conta logada em JSON, sem o hash.
pub async fn api_perfil(
    State(state): State<AppState>,
    Extension(UsuarioLogado(usuario_id)): Extension<UsuarioLogado>,
) -> Response {
    match usuario_service::buscar_por_id(&state.db_pool, usuario_id).await {
        Ok(Some(usuario)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "details": PerfilResumo::from(&usuario),
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "status": "error", "error": "Conta não encontrada" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Erro ao carregar perfil {}: {:?}", usuario_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "status": "error", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
