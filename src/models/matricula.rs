// src/models/matricula.rs
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

/// Linha da listagem de matrículas, já com os nomes resolvidos
/// (JOIN com 'aluno' e 'turma').
#[derive(Debug, Clone, FromRow)]
pub struct MatriculaView {
    pub id: i64,
    pub aluno_nome: String,
    pub turma_nome: String,
    pub data_inicio: NaiveDate,
    pub ativo: bool,
}

// Formulário de nova matrícula (POST /matriculas)
#[derive(Debug, Deserialize)]
pub struct NovaMatriculaForm {
    pub aluno_id: i64,
    pub turma_id: i64,
}
