// src/web/cadastro_handlers.rs
//
// Cadastro de criança (/cadastro-aluno) e vínculo de responsável
// (/cadastro-responsavel). Ambos exigem sessão autenticada.
use crate::{
    error::AppResult,
    models::crianca::{NovaCriancaForm, NovoResponsavelForm},
    services::aluno_service,
    state::AppState,
    templates::{CadastroAlunoPage, CadastroResponsavelPage},
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /cadastro-aluno
pub async fn show_cadastro_aluno() -> AppResult<Response> {
    Ok(Html(CadastroAlunoPage.render()?).into_response())
}

// POST /cadastro-aluno
pub async fn handle_cadastro_aluno(
    State(state): State<AppState>,
    Form(form): Form<NovaCriancaForm>,
) -> Redirect {
    if form.nome.trim().is_empty() {
        tracing::warn!("Cadastro de criança sem nome ignorado");
        return Redirect::to("/cadastro-aluno");
    }
    if let Err(e) = aluno_service::cadastrar_crianca(&state.db_pool, &form).await {
        tracing::error!("Erro ao cadastrar criança: {:?}", e);
    }
    Redirect::to("/matriculas")
}

// GET /cadastro-responsavel
pub async fn show_cadastro_responsavel(State(state): State<AppState>) -> AppResult<Response> {
    let fichas = match aluno_service::listar_fichas(&state.db_pool).await {
        Ok(lista) => lista,
        Err(e) => {
            tracing::error!("Erro ao listar fichas: {:?}", e);
            Vec::new()
        }
    };
    let pagina = CadastroResponsavelPage { fichas };
    Ok(Html(pagina.render()?).into_response())
}

// POST /cadastro-responsavel
pub async fn handle_cadastro_responsavel(
    State(state): State<AppState>,
    Form(form): Form<NovoResponsavelForm>,
) -> Redirect {
    let parentesco = form.parentesco.as_deref().map(str::trim).filter(|p| !p.is_empty());
    let telefone = form.telefone.as_deref().map(str::trim).filter(|t| !t.is_empty());

    if let Err(e) = aluno_service::vincular_responsavel(
        &state.db_pool,
        form.cadastro_crianca_id,
        form.nome.trim(),
        parentesco,
        telefone,
    )
    .await
    {
        tracing::error!("Erro ao vincular responsável: {:?}", e);
    }
    Redirect::to("/cadastro-responsavel")
}
