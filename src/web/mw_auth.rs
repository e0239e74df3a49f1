// src/web/mw_auth.rs
use crate::error::AppError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Chave da sessão onde fica o id da conta autenticada.
pub const CHAVE_SESSAO_USUARIO: &str = "usuario_id";

/// Id da conta autenticada, anexado às extensões da requisição para os
/// handlers protegidos.
#[derive(Clone, Copy, Debug)]
pub struct UsuarioLogado(pub i64);

// Portão de autorização: sem sessão autenticada, nenhuma rota protegida
// executa; o pedido volta como redirect para /login.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session.get::<i64>(CHAVE_SESSAO_USUARIO).await {
        Ok(Some(usuario_id)) => {
            tracing::debug!("MW auth: usuário {} autenticado", usuario_id);
            request.extensions_mut().insert(UsuarioLogado(usuario_id));
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::debug!("MW auth: sessão anônima, redirecionando para /login");
            Ok(Redirect::to("/login").into_response())
        }
        Err(e) => {
            tracing::error!("MW auth: erro ao ler sessão: {:?}", e);
            Err(AppError::SessionError(format!("Erro ao verificar sessão: {}", e)))
        }
    }
}
