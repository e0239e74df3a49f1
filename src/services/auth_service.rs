// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

// bcrypt é CPU-pesado; roda em spawn_blocking para não prender o runtime.

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verificar_senha(senha: &str, hash_guardado: &str) -> AppResult<bool> {
    let senha = senha.to_string();
    let hash_guardado = hash_guardado.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(&senha, &hash_guardado))
        .await
        .map_err(|e| {
            tracing::error!("Erro na task spawn_blocking (verificar_senha): {:?}", e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
            AppError::PasswordHashingError
        })
}

/// Gera um hash bcrypt para uma senha.
pub async fn gerar_hash_senha(senha: &str) -> AppResult<String> {
    let senha = senha.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(&senha, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| {
            tracing::error!("Erro na task spawn_blocking (gerar_hash_senha): {:?}", e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
            AppError::PasswordHashingError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_e_verificacao_fecham_o_ciclo() {
        // custo baixo direto no bcrypt para o teste não arrastar
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        assert!(verificar_senha("segredo123", &hash).await.unwrap());
        assert!(!verificar_senha("outra-coisa", &hash).await.unwrap());
    }
}
