// src/services/matricula_service.rs
use crate::{error::AppResult, models::matricula::MatriculaView};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub async fn listar_com_nomes(db_pool: &SqlitePool) -> AppResult<Vec<MatriculaView>> {
    let matriculas = sqlx::query_as::<_, MatriculaView>(
        r#"
        SELECT m.id, a.nome AS aluno_nome, t.nome AS turma_nome, m.data_inicio, m.ativo
        FROM matricula m
        JOIN aluno a ON a.id = m.aluno_id
        JOIN turma t ON t.id = m.turma_id
        ORDER BY m.ativo DESC, m.data_inicio DESC, m.id DESC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(matriculas)
}

pub async fn criar(
    db_pool: &SqlitePool,
    aluno_id: i64,
    turma_id: i64,
    data_inicio: NaiveDate,
) -> AppResult<i64> {
    let resultado = sqlx::query(
        "INSERT INTO matricula (aluno_id, turma_id, data_inicio, ativo) VALUES (?1, ?2, ?3, 1)",
    )
    .bind(aluno_id)
    .bind(turma_id)
    .bind(data_inicio)
    .execute(db_pool)
    .await?;
    tracing::info!("✅ Matrícula criada: aluno {} na turma {}", aluno_id, turma_id);
    Ok(resultado.last_insert_rowid())
}

pub async fn encerrar(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    sqlx::query("UPDATE matricula SET ativo = 0 WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?;
    Ok(())
}
