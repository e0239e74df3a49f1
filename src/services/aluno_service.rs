// src/services/aluno_service.rs
use crate::{
    error::AppResult,
    models::{aluno::Aluno, crianca::CadastroCrianca, crianca::NovaCriancaForm},
};
use sqlx::SqlitePool;

pub async fn listar_ativos(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    let alunos = sqlx::query_as::<_, Aluno>(
        "SELECT id, nome, nascimento, ativo FROM aluno WHERE ativo = 1 ORDER BY nome ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(alunos)
}

pub async fn listar_fichas(db_pool: &SqlitePool) -> AppResult<Vec<CadastroCrianca>> {
    let fichas = sqlx::query_as::<_, CadastroCrianca>(
        "SELECT id, nome, i_nascimento, observacoes, ativo FROM cadastro_crianca ORDER BY nome ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(fichas)
}

/// Cadastra a criança: a ficha completa (cadastro_crianca) e a linha
/// enxuta de aluno nascem juntas, na mesma transação.
pub async fn cadastrar_crianca(db_pool: &SqlitePool, form: &NovaCriancaForm) -> AppResult<i64> {
    let mut tx = db_pool.begin().await?;

    let ficha_id = sqlx::query(
        "INSERT INTO cadastro_crianca (nome, i_nascimento, observacoes, ativo) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&form.nome)
    .bind(form.i_nascimento)
    .bind(&form.observacoes)
    .bind(form.ativo)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    sqlx::query("INSERT INTO aluno (nome, nascimento, ativo) VALUES (?1, ?2, ?3)")
        .bind(&form.nome)
        .bind(form.i_nascimento)
        .bind(form.ativo)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Criança '{}' cadastrada (ficha {})", form.nome, ficha_id);
    Ok(ficha_id)
}

/// Vincula um responsável a uma ficha existente.
pub async fn vincular_responsavel(
    db_pool: &SqlitePool,
    cadastro_crianca_id: i64,
    nome: &str,
    parentesco: Option<&str>,
    telefone: Option<&str>,
) -> AppResult<i64> {
    let resultado = sqlx::query(
        "INSERT INTO responsavel (cadastro_crianca_id, nome, parentesco, telefone) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(cadastro_crianca_id)
    .bind(nome)
    .bind(parentesco)
    .bind(telefone)
    .execute(db_pool)
    .await?;
    Ok(resultado.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn cadastro_cria_ficha_e_aluno_juntos() {
        let pool = pool_em_memoria().await;
        let form = NovaCriancaForm {
            nome: "Bia".into(),
            i_nascimento: NaiveDate::from_ymd_opt(2021, 3, 10),
            observacoes: None,
            ativo: true,
        };

        let ficha_id = cadastrar_crianca(&pool, &form).await.unwrap();
        assert!(ficha_id > 0);

        let alunos = listar_ativos(&pool).await.unwrap();
        assert_eq!(alunos.len(), 1);
        assert_eq!(alunos[0].nome, "Bia");
        assert_eq!(alunos[0].nascimento, NaiveDate::from_ymd_opt(2021, 3, 10));
        assert!(alunos[0].ativo);

        let fichas = listar_fichas(&pool).await.unwrap();
        assert_eq!(fichas.len(), 1);
        assert_eq!(fichas[0].i_nascimento, NaiveDate::from_ymd_opt(2021, 3, 10));
        assert!(fichas[0].ativo);
    }

    #[tokio::test]
    async fn cadastro_ja_arquivado_fica_fora_dos_ativos() {
        let pool = pool_em_memoria().await;
        let form = NovaCriancaForm {
            nome: "Davi".into(),
            i_nascimento: None,
            observacoes: Some("transferido".into()),
            ativo: false,
        };
        cadastrar_crianca(&pool, &form).await.unwrap();

        assert!(listar_ativos(&pool).await.unwrap().is_empty());
        let fichas = listar_fichas(&pool).await.unwrap();
        assert_eq!(fichas.len(), 1);
        assert_eq!(fichas[0].observacoes.as_deref(), Some("transferido"));
    }
}
