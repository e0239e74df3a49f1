// src/models/aluno.rs
use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Aluno {
    pub id: i64,
    pub nome: String,
    pub nascimento: Option<NaiveDate>,
    pub ativo: bool,
}
