// src/error.rs
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Erro ao renderizar página: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Erro ao processar senha")]
    PasswordHashingError,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Erro na sessão: {0}")]
    SessionError(String),

    #[error("Registro não encontrado")]
    NotFound,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Converte AppError numa resposta HTTP com uma página de erro mínima.
// O detalhe fica no log; o utilizador vê só a mensagem genérica.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Erro processado: {:?}", self);

        let (status, mensagem) = match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao aceder aos dados.")
            }
            AppError::EnvVarError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro de configuração.")
            }
            AppError::TemplateError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao montar a página.")
            }
            AppError::PasswordHashingError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao processar credenciais.")
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            AppError::SessionError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro na gestão da sua sessão.")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Registro não encontrado."),
            AppError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        (
            status,
            Html(format!(
                r#"<!DOCTYPE html><html lang="pt-BR"><head><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
<body><h1>Erro {status_code}</h1><p>{mensagem}</p><a href="javascript:history.back()">Voltar</a></body></html>"#,
                status_code = status.as_u16(),
            )),
        )
            .into_response()
    }
}

// Tipo Result padrão da aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
