// src/models/professor.rs
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Professor {
    pub id: i64,
    pub nome: String,
    pub email: Option<String>,
    pub ativo: bool,
}

// Formulário de cadastro de professor (POST /professores)
#[derive(Debug, Deserialize)]
pub struct NovoProfessorForm {
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
}
