// src/services/arquivados_service.rs
//
// Fichas arquivadas (cadastro_crianca com ativo = 0): listagem com idade
// formatada e responsável principal, e o desarquivamento.
use crate::{
    error::AppResult,
    models::crianca::{CriancaArquivadaView, ResponsavelResumo},
};
use chrono::{Datelike, NaiveDate};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeMap;

/// Idade em anos completos na data `hoje`, no formato de exibição
/// ("4 anos", "1 ano"). Sem data de nascimento não há o que calcular.
pub fn calcular_idade(nascimento: Option<NaiveDate>, hoje: NaiveDate) -> String {
    let Some(nascimento) = nascimento else {
        return "Idade desconhecida".to_string();
    };

    let mut idade = hoje.year() - nascimento.year();
    // ainda não fez aniversário este ano
    if (hoje.month(), hoje.day()) < (nascimento.month(), nascimento.day()) {
        idade -= 1;
    }

    if idade == 1 {
        "1 ano".to_string()
    } else {
        format!("{} anos", idade)
    }
}

/// Escolhe o responsável exibido na listagem: preferência pelo parentesco
/// "Mãe", senão o primeiro vínculo. Regra herdada do sistema antigo; um
/// campo explícito de responsável principal fica como evolução do esquema.
pub fn nome_responsavel_principal(responsaveis: &[ResponsavelResumo]) -> String {
    responsaveis
        .iter()
        .find(|r| r.parentesco.as_deref() == Some("Mãe"))
        .or_else(|| responsaveis.first())
        .map(|r| r.nome.clone())
        .unwrap_or_else(|| "Não encontrado".to_string())
}

// Linha crua do LEFT JOIN ficha × responsável.
#[derive(Debug, FromRow)]
struct LinhaArquivada {
    id: i64,
    nome: String,
    i_nascimento: Option<NaiveDate>,
    responsavel_nome: Option<String>,
    parentesco: Option<String>,
}

/// Lista as fichas arquivadas com os campos prontos para o template.
pub async fn listar_arquivadas(
    db_pool: &SqlitePool,
    hoje: NaiveDate,
) -> AppResult<Vec<CriancaArquivadaView>> {
    let linhas = sqlx::query_as::<_, LinhaArquivada>(
        r#"
        SELECT c.id, c.nome, c.i_nascimento,
               r.nome AS responsavel_nome, r.parentesco
        FROM cadastro_crianca c
        LEFT JOIN responsavel r ON r.cadastro_crianca_id = c.id
        WHERE c.ativo = 0
        ORDER BY c.id ASC, r.id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;

    // Agrupa os responsáveis por ficha, mantendo a ordem por id.
    let mut fichas: BTreeMap<i64, (String, Option<NaiveDate>, Vec<ResponsavelResumo>)> =
        BTreeMap::new();
    for linha in linhas {
        let entrada = fichas
            .entry(linha.id)
            .or_insert((linha.nome, linha.i_nascimento, Vec::new()));
        if let Some(nome) = linha.responsavel_nome {
            entrada.2.push(ResponsavelResumo {
                nome,
                parentesco: linha.parentesco,
            });
        }
    }

    let criancas = fichas
        .into_iter()
        .map(|(id, (nome, nascimento, responsaveis))| CriancaArquivadaView {
            id,
            nome,
            idade_formatada: calcular_idade(nascimento, hoje),
            responsavel_principal_nome: nome_responsavel_principal(&responsaveis),
        })
        .collect();

    Ok(criancas)
}

/// Reativa uma ficha. Idempotente: desarquivar ficha já ativa (ou id
/// inexistente) não é erro.
pub async fn desarquivar(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let afetadas = sqlx::query("UPDATE cadastro_crianca SET ativo = 1 WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if afetadas == 0 {
        tracing::warn!("Desarquivar: ficha {} não encontrada", id);
    } else {
        tracing::info!("✅ Ficha {} desarquivada", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn idade_vira_na_data_do_aniversario() {
        let nascimento = Some(data(2020, 6, 15));
        assert_eq!(calcular_idade(nascimento, data(2024, 6, 14)), "3 anos");
        assert_eq!(calcular_idade(nascimento, data(2024, 6, 15)), "4 anos");
    }

    #[test]
    fn idade_singular_e_desconhecida() {
        assert_eq!(calcular_idade(Some(data(2025, 1, 10)), data(2026, 3, 1)), "1 ano");
        assert_eq!(calcular_idade(None, data(2026, 3, 1)), "Idade desconhecida");
    }

    #[test]
    fn responsavel_principal_prefere_mae() {
        let responsaveis = vec![
            ResponsavelResumo { nome: "Carlos".into(), parentesco: Some("Pai".into()) },
            ResponsavelResumo { nome: "Joana".into(), parentesco: Some("Mãe".into()) },
        ];
        assert_eq!(nome_responsavel_principal(&responsaveis), "Joana");
    }

    #[test]
    fn sem_mae_usa_o_primeiro_e_sem_ninguem_o_placeholder() {
        let so_pai = vec![ResponsavelResumo { nome: "Carlos".into(), parentesco: Some("Pai".into()) }];
        assert_eq!(nome_responsavel_principal(&so_pai), "Carlos");
        assert_eq!(nome_responsavel_principal(&[]), "Não encontrado");
    }

    #[tokio::test]
    async fn listagem_vazia_nao_falha() {
        let pool = pool_em_memoria().await;
        let criancas = listar_arquivadas(&pool, data(2026, 8, 30)).await.unwrap();
        assert!(criancas.is_empty());
    }

    #[tokio::test]
    async fn listagem_monta_idade_e_responsavel_principal() {
        let pool = pool_em_memoria().await;
        sqlx::raw_sql(
            r#"
            INSERT INTO cadastro_crianca (id, nome, i_nascimento, ativo)
                VALUES (1, 'Bia', '2020-06-15', 0), (2, 'Davi', NULL, 0), (3, 'Ativa', '2021-01-01', 1);
            INSERT INTO responsavel (cadastro_crianca_id, nome, parentesco)
                VALUES (1, 'Carlos', 'Pai'), (1, 'Joana', 'Mãe');
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let criancas = listar_arquivadas(&pool, data(2024, 6, 15)).await.unwrap();
        assert_eq!(criancas.len(), 2); // ficha ativa fica de fora

        let bia = criancas.iter().find(|c| c.nome == "Bia").unwrap();
        assert_eq!(bia.idade_formatada, "4 anos");
        assert_eq!(bia.responsavel_principal_nome, "Joana");

        let davi = criancas.iter().find(|c| c.nome == "Davi").unwrap();
        assert_eq!(davi.idade_formatada, "Idade desconhecida");
        assert_eq!(davi.responsavel_principal_nome, "Não encontrado");
    }

    #[tokio::test]
    async fn desarquivar_e_idempotente() {
        let pool = pool_em_memoria().await;
        sqlx::query("INSERT INTO cadastro_crianca (id, nome, ativo) VALUES (7, 'Bia', 0)")
            .execute(&pool)
            .await
            .unwrap();

        desarquivar(&pool, 7).await.unwrap();
        let ativo: bool = sqlx::query_scalar("SELECT ativo FROM cadastro_crianca WHERE id = 7")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(ativo);

        // segunda vez não dá erro e mantém a ficha ativa
        desarquivar(&pool, 7).await.unwrap();
        let ainda_ativo: bool = sqlx::query_scalar("SELECT ativo FROM cadastro_crianca WHERE id = 7")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(ainda_ativo);

        // id inexistente também não é erro
        desarquivar(&pool, 999).await.unwrap();
    }
}
