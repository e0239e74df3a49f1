// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::LoginForm,
    services::{auth_service, usuario_service},
    state::AppState,
    templates::LoginPage,
    web::mw_auth::CHAVE_SESSAO_USUARIO,
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

// GET /login
pub async fn show_login_form(session: Session) -> AppResult<Response> {
    // já logado? direto para o painel
    if session
        .get::<i64>(CHAVE_SESSAO_USUARIO)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        return Ok(Redirect::to("/home").into_response());
    }

    let pagina = LoginPage { erro: None };
    Ok(Html(pagina.render()?).into_response())
}

fn login_com_erro() -> AppResult<Response> {
    let pagina = LoginPage {
        erro: Some("E-mail ou senha inválidos.".to_string()),
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Tentativa de login para: {}", form.email);

    let Some(usuario) = usuario_service::buscar_por_email(&state.db_pool, &form.email).await?
    else {
        tracing::warn!("Login: conta não encontrada para {}", form.email);
        return login_com_erro();
    };

    if !auth_service::verificar_senha(&form.senha, &usuario.senha_hash).await? {
        tracing::warn!("Login: senha incorreta para {}", form.email);
        return login_com_erro();
    }

    // novo id de sessão ao autenticar
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao rodar id da sessão: {}", e)))?;
    session
        .insert(CHAVE_SESSAO_USUARIO, usuario.id)
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao gravar sessão: {}", e)))?;

    tracing::info!("✅ Login bem-sucedido para {}", usuario.email);
    Ok(Redirect::to("/home").into_response())
}

// GET /logout
pub async fn handle_logout(session: Session) -> AppResult<Redirect> {
    let usuario_id: Option<i64> = session.get(CHAVE_SESSAO_USUARIO).await.ok().flatten();

    session
        .delete()
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao encerrar sessão: {}", e)))?;

    match usuario_id {
        Some(id) => tracing::info!("🚪 Usuário {} saiu", id),
        None => tracing::info!("🚪 Sessão anônima encerrada"),
    }

    Ok(Redirect::to("/login"))
}
