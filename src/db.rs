// src/db.rs
use crate::error::AppResult;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Migrações embutidas no binário; executadas no arranque e nos testes.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    let database_url = std::env::var("DATABASE_URL")?;

    tracing::info!("Ligando à base de dados: {}", database_url);

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Pool em memória já migrado, para os testes. Uma única conexão:
/// cada conexão ':memory:' do SQLite seria uma base de dados distinta.
#[cfg(test)]
pub async fn pool_em_memoria() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir SQLite em memória");
    MIGRATOR.run(&pool).await.expect("falha ao migrar DB de teste");
    pool
}
