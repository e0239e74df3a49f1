// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::Usuario,
    services::auth_service,
};
use sqlx::SqlitePool;

const COLUNAS: &str = "id, email, senha_hash, nome";

pub async fn buscar_por_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<Usuario>> {
    tracing::debug!("Buscando usuário por e-mail: {}", email);
    let usuario = sqlx::query_as::<_, Usuario>(&format!(
        "SELECT {COLUNAS} FROM usuario WHERE email = ?1"
    ))
    .bind(email)
    .fetch_optional(db_pool)
    .await?;
    Ok(usuario)
}

pub async fn buscar_por_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Usuario>> {
    let usuario = sqlx::query_as::<_, Usuario>(&format!(
        "SELECT {COLUNAS} FROM usuario WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(usuario)
}

/// Cria uma conta de acesso. E-mail duplicado devolve `InvalidCredentials`,
/// que o handler converte em mensagem genérica no formulário.
pub async fn criar_conta(
    db_pool: &SqlitePool,
    nome: &str,
    email: &str,
    senha: &str,
) -> AppResult<i64> {
    tracing::info!("Criando conta para: {}", email);
    let senha_hash = auth_service::gerar_hash_senha(senha).await?;

    let resultado = sqlx::query(
        "INSERT INTO usuario (nome, email, senha_hash) VALUES (?1, ?2, ?3)",
    )
    .bind(nome)
    .bind(email)
    .bind(&senha_hash)
    .execute(db_pool)
    .await;

    match resultado {
        Ok(r) => {
            tracing::info!("✅ Conta criada para {}", email);
            Ok(r.last_insert_rowid())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("E-mail já cadastrado: {}", email);
            Err(AppError::InvalidCredentials)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn atualizar_nome(db_pool: &SqlitePool, id: i64, nome: &str) -> AppResult<()> {
    let afetadas = sqlx::query("UPDATE usuario SET nome = ?1 WHERE id = ?2")
        .bind(nome)
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if afetadas == 0 {
        tracing::warn!("Atualização de perfil para usuário inexistente: {}", id);
        Err(AppError::NotFound)
    } else {
        Ok(())
    }
}

/// Troca a senha conferindo primeiro a senha atual.
pub async fn trocar_senha(
    db_pool: &SqlitePool,
    email: &str,
    senha_atual: &str,
    senha_nova: &str,
) -> AppResult<()> {
    let Some(usuario) = buscar_por_email(db_pool, email).await? else {
        return Err(AppError::InvalidCredentials);
    };
    if !auth_service::verificar_senha(senha_atual, &usuario.senha_hash).await? {
        return Err(AppError::InvalidCredentials);
    }

    let novo_hash = auth_service::gerar_hash_senha(senha_nova).await?;
    sqlx::query("UPDATE usuario SET senha_hash = ?1 WHERE id = ?2")
        .bind(&novo_hash)
        .bind(usuario.id)
        .execute(db_pool)
        .await?;

    tracing::info!("✅ Senha alterada para {}", email);
    Ok(())
}
