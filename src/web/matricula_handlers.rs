// src/web/matricula_handlers.rs
use crate::{
    error::AppResult,
    models::matricula::NovaMatriculaForm,
    services::{aluno_service, matricula_service, turma_service},
    state::AppState,
    templates::MatriculasPage,
};
use askama::Template;
use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

// GET /matriculas — a listagem e os selects do formulário vêm de três
// consultas independentes.
pub async fn show_matriculas(State(state): State<AppState>) -> AppResult<Response> {
    let carregado = tokio::try_join!(
        matricula_service::listar_com_nomes(&state.db_pool),
        aluno_service::listar_ativos(&state.db_pool),
        turma_service::listar_ativas(&state.db_pool),
    );

    let pagina = match carregado {
        Ok((matriculas, alunos, turmas)) => MatriculasPage {
            matriculas,
            alunos,
            turmas,
            erro: None,
        },
        Err(e) => {
            tracing::error!("Erro ao carregar matrículas: {:?}", e);
            MatriculasPage {
                matriculas: Vec::new(),
                alunos: Vec::new(),
                turmas: Vec::new(),
                erro: Some("Falha ao carregar as matrículas.".to_string()),
            }
        }
    };
    Ok(Html(pagina.render()?).into_response())
}

// POST /matriculas
pub async fn handle_criar_matricula(
    State(state): State<AppState>,
    Form(form): Form<NovaMatriculaForm>,
) -> Redirect {
    let hoje = chrono::Local::now().date_naive();
    if let Err(e) =
        matricula_service::criar(&state.db_pool, form.aluno_id, form.turma_id, hoje).await
    {
        tracing::error!("Erro ao criar matrícula: {:?}", e);
    }
    Redirect::to("/matriculas")
}

// POST /matriculas/encerrar/{id}
pub async fn handle_encerrar_matricula(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(e) = matricula_service::encerrar(&state.db_pool, id).await {
        tracing::error!("Erro ao encerrar matrícula {}: {:?}", id, e);
    }
    Redirect::to("/matriculas")
}
