use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub email: String,
    pub content: String,
    pub updated_at: OffsetDateTime,
}

impl Note {
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT email, content, updated_at
            FROM notes
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(note)
    }

    /// Create-or-update the account's note in a single statement.
    /// Concurrent saves for the same account serialize at the store;
    /// last write wins.
    pub async fn upsert(db: &PgPool, email: &str, content: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (email, content)
            VALUES ($1, $2)
            ON CONFLICT (email)
            DO UPDATE SET content = EXCLUDED.content, updated_at = now()
            "#,
        )
        .bind(email)
        .bind(content)
        .execute(db)
        .await?;
        Ok(())
    }
}
