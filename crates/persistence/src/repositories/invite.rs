//! Repository for instructor invite database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{InstructorInviteEntity, InviteStatusDb};
use shared::validation::normalize_email;

const INVITE_COLUMNS: &str =
    "id, franchise_id, invited_by, email, full_name, status, token, created_at, completed_at";

/// Repository for instructor invite operations.
#[derive(Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Creates a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new invite with status `pending`.
    ///
    /// The email is normalized before insert so every later lookup can use
    /// exact equality on the stored value.
    pub async fn create(
        &self,
        franchise_id: Uuid,
        invited_by: Uuid,
        email: &str,
        full_name: &str,
        token: &str,
    ) -> Result<InstructorInviteEntity, sqlx::Error> {
        sqlx::query_as::<_, InstructorInviteEntity>(
            r#"
            INSERT INTO instructor_invites (franchise_id, invited_by, email, full_name, status, token)
            VALUES ($1, $2, $3, $4, 'pending', $5)
            RETURNING id, franchise_id, invited_by, email, full_name, status, token, created_at, completed_at
            "#,
        )
        .bind(franchise_id)
        .bind(invited_by)
        .bind(normalize_email(email))
        .bind(full_name)
        .bind(token)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds an invite by exact token match.
    ///
    /// The token is the sole credential for completion, so this lookup must
    /// never widen to pattern matching.
    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<InstructorInviteEntity>, sqlx::Error> {
        sqlx::query_as::<_, InstructorInviteEntity>(&format!(
            "SELECT {INVITE_COLUMNS} FROM instructor_invites WHERE token = $1"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Checks whether a `pending` or `active` invite exists for this email
    /// under the franchise.
    pub async fn has_open_invite(
        &self,
        franchise_id: Uuid,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM instructor_invites
            WHERE franchise_id = $1 AND email = $2 AND status IN ('pending', 'active')
            "#,
        )
        .bind(franchise_id)
        .bind(normalize_email(email))
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0 > 0)
    }

    /// Lists invites for a franchise, optionally filtered by status.
    pub async fn list_by_franchise(
        &self,
        franchise_id: Uuid,
        status: Option<InviteStatusDb>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InstructorInviteEntity>, sqlx::Error> {
        match status {
            Some(status) => {
                sqlx::query_as::<_, InstructorInviteEntity>(&format!(
                    r#"
                    SELECT {INVITE_COLUMNS} FROM instructor_invites
                    WHERE franchise_id = $1 AND status = $2
                    ORDER BY created_at DESC
                    LIMIT $3 OFFSET $4
                    "#
                ))
                .bind(franchise_id)
                .bind(status)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, InstructorInviteEntity>(&format!(
                    r#"
                    SELECT {INVITE_COLUMNS} FROM instructor_invites
                    WHERE franchise_id = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#
                ))
                .bind(franchise_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Counts invites for a franchise, optionally filtered by status.
    pub async fn count_by_franchise(
        &self,
        franchise_id: Uuid,
        status: Option<InviteStatusDb>,
    ) -> Result<i64, sqlx::Error> {
        let result: (i64,) = match status {
            Some(status) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM instructor_invites WHERE franchise_id = $1 AND status = $2",
                )
                .bind(franchise_id)
                .bind(status)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM instructor_invites WHERE franchise_id = $1")
                    .bind(franchise_id)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(result.0)
    }

    /// Gets per-status counts for a franchise's invites.
    pub async fn get_status_counts(
        &self,
        franchise_id: Uuid,
    ) -> Result<InviteStatusCounts, sqlx::Error> {
        let result: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'pending') as pending,
                COUNT(*) FILTER (WHERE status = 'active') as active,
                COUNT(*) FILTER (WHERE status = 'inactive') as inactive
            FROM instructor_invites
            WHERE franchise_id = $1
            "#,
        )
        .bind(franchise_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(InviteStatusCounts {
            pending: result.0,
            active: result.1,
            inactive: result.2,
        })
    }

    /// Marks an invite active and stamps the completion time.
    ///
    /// Returns the number of rows updated (0 when the invite vanished
    /// between lookup and update).
    pub async fn mark_active(&self, invite_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE instructor_invites
            SET status = 'active', completed_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(invite_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Sets every non-inactive invite for (franchise, email) to `inactive`.
    ///
    /// Administrative override: no token re-validation.
    pub async fn deactivate_for_email(
        &self,
        franchise_id: Uuid,
        email: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE instructor_invites
            SET status = 'inactive'
            WHERE franchise_id = $1 AND email = $2 AND status <> 'inactive'
            "#,
        )
        .bind(franchise_id)
        .bind(normalize_email(email))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Status of the most recent invite for (franchise, email), if any.
    pub async fn latest_status_for_email(
        &self,
        franchise_id: Uuid,
        email: &str,
    ) -> Result<Option<InviteStatusDb>, sqlx::Error> {
        let row: Option<(InviteStatusDb,)> = sqlx::query_as(
            r#"
            SELECT status FROM instructor_invites
            WHERE franchise_id = $1 AND email = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(franchise_id)
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.0))
    }
}

/// Per-status invite counts.
#[derive(Debug, Clone)]
pub struct InviteStatusCounts {
    pub pending: i64,
    pub active: i64,
    pub inactive: i64,
}
