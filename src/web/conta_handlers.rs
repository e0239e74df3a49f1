// src/web/conta_handlers.rs
//
// Registro de conta (/cadastro) e troca de senha (/senha).
use crate::{
    error::{AppError, AppResult},
    models::usuario::{CadastroContaForm, TrocaSenhaForm},
    services::usuario_service,
    state::AppState,
    templates::{CadastroContaPage, SenhaPage},
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};

// GET /cadastro
pub async fn show_cadastro_conta() -> AppResult<Response> {
    let pagina = CadastroContaPage { erro: None, sucesso: None };
    Ok(Html(pagina.render()?).into_response())
}

// POST /cadastro
pub async fn handle_cadastro_conta(
    State(state): State<AppState>,
    Form(form): Form<CadastroContaForm>,
) -> AppResult<Response> {
    let pagina = if form.nome.trim().is_empty() || form.email.trim().is_empty() || form.senha.is_empty() {
        CadastroContaPage {
            erro: Some("Preencha nome, e-mail e senha.".to_string()),
            sucesso: None,
        }
    } else {
        match usuario_service::criar_conta(
            &state.db_pool,
            form.nome.trim(),
            form.email.trim(),
            &form.senha,
        )
        .await
        {
            Ok(_) => CadastroContaPage {
                erro: None,
                sucesso: Some("Conta criada. Você já pode entrar.".to_string()),
            },
            Err(AppError::InvalidCredentials) => CadastroContaPage {
                erro: Some("Este e-mail já está cadastrado.".to_string()),
                sucesso: None,
            },
            Err(e) => return Err(e),
        }
    };

    Ok(Html(pagina.render()?).into_response())
}

// GET /senha
pub async fn show_troca_senha() -> AppResult<Response> {
    let pagina = SenhaPage { mensagem: None, erro: None };
    Ok(Html(pagina.render()?).into_response())
}

// POST /senha
pub async fn handle_troca_senha(
    State(state): State<AppState>,
    Form(form): Form<TrocaSenhaForm>,
) -> AppResult<Response> {
    let pagina = match usuario_service::trocar_senha(
        &state.db_pool,
        form.email.trim(),
        &form.senha_atual,
        &form.senha_nova,
    )
    .await
    {
        Ok(()) => SenhaPage {
            mensagem: Some("Senha alterada com sucesso.".to_string()),
            erro: None,
        },
        Err(AppError::InvalidCredentials) => SenhaPage {
            mensagem: None,
            erro: Some("E-mail ou senha atual inválidos.".to_string()),
        },
        Err(e) => return Err(e),
    };

    Ok(Html(pagina.render()?).into_response())
}
