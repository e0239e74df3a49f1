// src/services/turma_service.rs
use crate::{error::AppResult, models::turma::Turma};
use sqlx::SqlitePool;

pub async fn listar(db_pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    let turmas = sqlx::query_as::<_, Turma>(
        "SELECT id, nome, periodo, capacidade, ativo FROM turma ORDER BY ativo DESC, nome ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(turmas)
}

pub async fn listar_ativas(db_pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    let turmas = sqlx::query_as::<_, Turma>(
        "SELECT id, nome, periodo, capacidade, ativo FROM turma WHERE ativo = 1 ORDER BY nome ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(turmas)
}

pub async fn criar(
    db_pool: &SqlitePool,
    nome: &str,
    periodo: &str,
    capacidade: i64,
) -> AppResult<i64> {
    let resultado = sqlx::query(
        "INSERT INTO turma (nome, periodo, capacidade, ativo) VALUES (?1, ?2, ?3, 1)",
    )
    .bind(nome)
    .bind(periodo)
    .bind(capacidade)
    .execute(db_pool)
    .await?;
    tracing::info!("✅ Turma '{}' criada", nome);
    Ok(resultado.last_insert_rowid())
}

/// Desativa a turma. Idempotente, como o desarquivamento de fichas.
pub async fn arquivar(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    sqlx::query("UPDATE turma SET ativo = 0 WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;

    #[tokio::test]
    async fn cria_lista_e_arquiva() {
        let pool = pool_em_memoria().await;
        let id = criar(&pool, "Jardim A", "Manhã", 18).await.unwrap();

        let ativas = listar_ativas(&pool).await.unwrap();
        assert_eq!(ativas.len(), 1);
        assert_eq!(ativas[0].nome, "Jardim A");
        assert_eq!(ativas[0].capacidade, 18);

        arquivar(&pool, id).await.unwrap();
        assert!(listar_ativas(&pool).await.unwrap().is_empty());
        // a listagem geral continua mostrando a turma arquivada
        assert_eq!(listar(&pool).await.unwrap().len(), 1);
    }
}
