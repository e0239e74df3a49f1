// src/services/mensalidade_service.rs
use crate::{
    error::AppResult,
    models::mensalidade::{MensalidadeView, ResumoFinanceiro, ResumoMes},
};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub async fn listar_com_alunos(db_pool: &SqlitePool) -> AppResult<Vec<MensalidadeView>> {
    let mensalidades = sqlx::query_as::<_, MensalidadeView>(
        r#"
        SELECT m.id, a.nome AS aluno_nome, m.referencia, m.valor_centavos, m.vencimento, m.pago
        FROM mensalidade m
        JOIN aluno a ON a.id = m.aluno_id
        ORDER BY m.referencia DESC, a.nome ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(mensalidades)
}

/// Dá baixa numa mensalidade. Idempotente: pagar de novo não muda a
/// data original do pagamento.
pub async fn marcar_paga(db_pool: &SqlitePool, id: i64, hoje: NaiveDate) -> AppResult<()> {
    let afetadas = sqlx::query(
        "UPDATE mensalidade SET pago = 1, pago_em = COALESCE(pago_em, ?1) WHERE id = ?2",
    )
    .bind(hoje)
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if afetadas == 0 {
        tracing::warn!("Baixa em mensalidade inexistente: {}", id);
    } else {
        tracing::info!("✅ Mensalidade {} marcada como paga", id);
    }
    Ok(())
}

/// Totais cobrado/recebido/pendente e o quebrado por mês de referência.
pub async fn resumo_financeiro(db_pool: &SqlitePool) -> AppResult<ResumoFinanceiro> {
    let meses = sqlx::query_as::<_, ResumoMes>(
        r#"
        SELECT referencia,
               COALESCE(SUM(valor_centavos), 0) AS cobrado_centavos,
               COALESCE(SUM(CASE WHEN pago THEN valor_centavos ELSE 0 END), 0) AS recebido_centavos
        FROM mensalidade
        GROUP BY referencia
        ORDER BY referencia DESC
        "#,
    )
    .fetch_all(db_pool)
    .await?;

    let total_cobrado_centavos: i64 = meses.iter().map(|m| m.cobrado_centavos).sum();
    let total_recebido_centavos: i64 = meses.iter().map(|m| m.recebido_centavos).sum();

    Ok(ResumoFinanceiro {
        total_cobrado_centavos,
        total_recebido_centavos,
        total_pendente_centavos: total_cobrado_centavos - total_recebido_centavos,
        meses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;

    async fn semear(pool: &SqlitePool) {
        sqlx::raw_sql(
            r#"
            INSERT INTO aluno (id, nome) VALUES (1, 'Bia'), (2, 'Davi');
            INSERT INTO mensalidade (id, aluno_id, referencia, valor_centavos, vencimento, pago)
                VALUES (1, 1, '2026-08', 35000, '2026-08-05', 0),
                       (2, 2, '2026-08', 35000, '2026-08-05', 1),
                       (3, 1, '2026-07', 35000, '2026-07-05', 1);
            "#,
        )
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn baixa_e_idempotente_e_preserva_a_data_original() {
        let pool = pool_em_memoria().await;
        semear(&pool).await;

        let primeiro_dia = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        marcar_paga(&pool, 1, primeiro_dia).await.unwrap();

        // segunda baixa, noutro dia, não sobrescreve pago_em
        marcar_paga(&pool, 1, NaiveDate::from_ymd_opt(2026, 8, 20).unwrap())
            .await
            .unwrap();

        let pago_em: NaiveDate = sqlx::query_scalar("SELECT pago_em FROM mensalidade WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(pago_em, primeiro_dia);

        // id inexistente não é erro
        marcar_paga(&pool, 999, primeiro_dia).await.unwrap();
    }

    #[tokio::test]
    async fn resumo_agrega_por_mes_e_totaliza() {
        let pool = pool_em_memoria().await;
        semear(&pool).await;

        let resumo = resumo_financeiro(&pool).await.unwrap();
        assert_eq!(resumo.total_cobrado_centavos, 105000);
        assert_eq!(resumo.total_recebido_centavos, 70000);
        assert_eq!(resumo.total_pendente_centavos, 35000);

        assert_eq!(resumo.meses.len(), 2);
        // ordenado do mês mais recente para o mais antigo
        assert_eq!(resumo.meses[0].referencia, "2026-08");
        assert_eq!(resumo.meses[0].cobrado_centavos, 70000);
        assert_eq!(resumo.meses[0].recebido_centavos, 35000);
    }

    #[tokio::test]
    async fn extrato_resolve_o_nome_do_aluno() {
        let pool = pool_em_memoria().await;
        semear(&pool).await;

        let extrato = listar_com_alunos(&pool).await.unwrap();
        assert_eq!(extrato.len(), 3);
        assert_eq!(extrato[0].referencia, "2026-08");
        assert_eq!(extrato[0].aluno_nome, "Bia");
        assert_eq!(extrato[0].valor_formatado(), "R$ 350,00");
    }
}
