use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query("CREATE SCHEMA IF NOT EXISTS scheduling;")
        .execute(pool)
        .await?;

    // One appointment per trainer and start instant
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS scheduling.appointments (
            id BIGSERIAL PRIMARY KEY,
            trainer_id BIGINT NOT NULL,
            user_id BIGINT NOT NULL,
            starts_at TIMESTAMP WITH TIME ZONE NOT NULL,
            ends_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            canceled_at TIMESTAMP WITH TIME ZONE NULL,
            CONSTRAINT valid_time_range CHECK (ends_at > starts_at),
            CONSTRAINT unique_trainer_slot UNIQUE (trainer_id, starts_at)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_trainer_window
        ON scheduling.appointments(trainer_id, starts_at, ends_at);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_window
        ON scheduling.appointments(starts_at, ends_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully");
    Ok(())
}
