use crate::config::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        position TEXT NOT NULL,
        employee_id TEXT NOT NULL,
        gender TEXT NOT NULL,
        image TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_EMPLOYEES).execute(pool).await?;
    Ok(())
}
