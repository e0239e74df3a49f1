// src/web/professor_handlers.rs
use crate::{
    error::AppResult,
    models::professor::NovoProfessorForm,
    services::professor_service,
    state::AppState,
    templates::ProfessoresPage,
};
use askama::Template;
use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /professores
pub async fn show_professores(State(state): State<AppState>) -> AppResult<Response> {
    let pagina = match professor_service::listar(&state.db_pool).await {
        Ok(professores) => ProfessoresPage { professores, erro: None },
        Err(e) => {
            tracing::error!("Erro ao listar professores: {:?}", e);
            ProfessoresPage {
                professores: Vec::new(),
                erro: Some("Falha ao carregar os professores.".to_string()),
            }
        }
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /professores
pub async fn handle_criar_professor(
    State(state): State<AppState>,
    Form(form): Form<NovoProfessorForm>,
) -> Redirect {
    if form.nome.trim().is_empty() {
        tracing::warn!("Cadastro de professor sem nome ignorado");
        return Redirect::to("/professores");
    }
    let email = form.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    if let Err(e) = professor_service::criar(&state.db_pool, form.nome.trim(), email).await {
        tracing::error!("Erro ao cadastrar professor: {:?}", e);
    }
    Redirect::to("/professores")
}

// POST /professores/arquivar/{id}
pub async fn handle_arquivar_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(e) = professor_service::arquivar(&state.db_pool, id).await {
        tracing::error!("Erro ao arquivar professor {}: {:?}", id, e);
    }
    Redirect::to("/professores")
}
