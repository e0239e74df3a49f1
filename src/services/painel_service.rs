// src/services/painel_service.rs
//
// Contagens do painel inicial (/home): professores ativos, total de
// alunos, turmas ativas e matrículas ativas.
use crate::error::AppResult;
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContagensPainel {
    pub professores: i64,
    pub alunos: i64,
    pub turmas: i64,
    pub matriculas: i64,
}

/// Resultado explícito do carregamento do painel: ou os números estão
/// todos disponíveis, ou o painel degrada inteiro para o sentinela "!".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumoPainel {
    Disponivel(ContagensPainel),
    Indisponivel,
}

async fn contar_professores_ativos(db_pool: &SqlitePool) -> AppResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM professor WHERE ativo = 1")
        .fetch_one(db_pool)
        .await?)
}

async fn contar_alunos(db_pool: &SqlitePool) -> AppResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM aluno")
        .fetch_one(db_pool)
        .await?)
}

async fn contar_turmas_ativas(db_pool: &SqlitePool) -> AppResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM turma WHERE ativo = 1")
        .fetch_one(db_pool)
        .await?)
}

async fn contar_matriculas_ativas(db_pool: &SqlitePool) -> AppResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM matricula WHERE ativo = 1")
        .fetch_one(db_pool)
        .await?)
}

/// As quatro contagens são leituras independentes; disparamos em paralelo.
pub async fn carregar_contagens(db_pool: &SqlitePool) -> AppResult<ContagensPainel> {
    let (professores, alunos, turmas, matriculas) = tokio::try_join!(
        contar_professores_ativos(db_pool),
        contar_alunos(db_pool),
        contar_turmas_ativas(db_pool),
        contar_matriculas_ativas(db_pool),
    )?;

    Ok(ContagensPainel {
        professores,
        alunos,
        turmas,
        matriculas,
    })
}

/// Qualquer falha de consulta degrada o painel inteiro, nunca a requisição.
pub async fn resumo(db_pool: &SqlitePool) -> ResumoPainel {
    match carregar_contagens(db_pool).await {
        Ok(contagens) => ResumoPainel::Disponivel(contagens),
        Err(e) => {
            tracing::error!("Erro ao carregar contagens do painel: {:?}", e);
            ResumoPainel::Indisponivel
        }
    }
}
