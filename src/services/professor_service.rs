// src/services/professor_service.rs
use crate::{error::AppResult, models::professor::Professor};
use sqlx::SqlitePool;

pub async fn listar(db_pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    let professores = sqlx::query_as::<_, Professor>(
        "SELECT id, nome, email, ativo FROM professor ORDER BY ativo DESC, nome ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(professores)
}

pub async fn criar(db_pool: &SqlitePool, nome: &str, email: Option<&str>) -> AppResult<i64> {
    let resultado = sqlx::query("INSERT INTO professor (nome, email, ativo) VALUES (?1, ?2, 1)")
        .bind(nome)
        .bind(email)
        .execute(db_pool)
        .await?;
    tracing::info!("✅ Professor '{}' cadastrado", nome);
    Ok(resultado.last_insert_rowid())
}

pub async fn arquivar(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    sqlx::query("UPDATE professor SET ativo = 0 WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?;
    Ok(())
}

/// Contagem total, usada pela sonda /testar-banco.
pub async fn contar(db_pool: &SqlitePool) -> AppResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM professor")
        .fetch_one(db_pool)
        .await?)
}
