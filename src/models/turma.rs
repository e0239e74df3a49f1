// src/models/turma.rs
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Turma {
    pub id: i64,
    pub nome: String,
    pub periodo: String, // "Manhã", "Tarde" ou "Integral"
    pub capacidade: i64,
    pub ativo: bool,
}

// Formulário de criação de turma (POST /turmas)
#[derive(Debug, Deserialize)]
pub struct NovaTurmaForm {
    pub nome: String,
    pub periodo: String,
    pub capacidade: i64,
}
