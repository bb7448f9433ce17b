//! Repository for profile database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ProfileEntity, RoleDb};
use shared::validation::normalize_email;

const PROFILE_COLUMNS: &str = "id, role, franchise_id, email, full_name, created_at";

/// Repository for profile operations.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Creates a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a profile with an externally assigned identity id.
    pub async fn create(
        &self,
        id: Uuid,
        role: RoleDb,
        franchise_id: Option<Uuid>,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<ProfileEntity, sqlx::Error> {
        sqlx::query_as::<_, ProfileEntity>(&format!(
            r#"
            INSERT INTO profiles (id, role, franchise_id, email, full_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(role)
        .bind(franchise_id)
        .bind(normalize_email(email))
        .bind(full_name)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds a profile by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProfileEntity>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Finds a profile by normalized email.
    ///
    /// Emails are stored lowercase, but the comparison is case-insensitive
    /// anyway to match rows written before normalization existed.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<ProfileEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProfileEntity>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE LOWER(email) = $1"
        ))
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await
    }

    /// Lists profiles under a franchise, optionally filtered by role.
    pub async fn list_by_franchise(
        &self,
        franchise_id: Uuid,
        role: Option<RoleDb>,
    ) -> Result<Vec<ProfileEntity>, sqlx::Error> {
        match role {
            Some(role) => {
                sqlx::query_as::<_, ProfileEntity>(&format!(
                    r#"
                    SELECT {PROFILE_COLUMNS} FROM profiles
                    WHERE franchise_id = $1 AND role = $2
                    ORDER BY created_at
                    "#
                ))
                .bind(franchise_id)
                .bind(role)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ProfileEntity>(&format!(
                    r#"
                    SELECT {PROFILE_COLUMNS} FROM profiles
                    WHERE franchise_id = $1
                    ORDER BY created_at
                    "#
                ))
                .bind(franchise_id)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Updates a profile's display name.
    pub async fn update_full_name(
        &self,
        id: Uuid,
        full_name: &str,
    ) -> Result<Option<ProfileEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProfileEntity>(&format!(
            r#"
            UPDATE profiles SET full_name = $2
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(full_name)
        .fetch_optional(&self.pool)
        .await
    }

    /// Promotes a profile to instructor under the given franchise.
    ///
    /// A supplied name wins; an absent name leaves the stored value
    /// untouched (COALESCE keeps the existing column value on NULL).
    pub async fn promote_to_instructor(
        &self,
        id: Uuid,
        franchise_id: Uuid,
        full_name: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET role = 'instructor', franchise_id = $2, full_name = COALESCE($3, full_name)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(franchise_id)
        .bind(full_name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Resets an instructor profile back to student, keeping the franchise.
    ///
    /// Only fires when the profile currently holds the instructor role under
    /// this franchise; anything else is a no-op.
    pub async fn demote_to_student(
        &self,
        id: Uuid,
        franchise_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET role = 'student'
            WHERE id = $1 AND franchise_id = $2 AND role = 'instructor'
            "#,
        )
        .bind(id)
        .bind(franchise_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Instructor profiles under a franchise whose most recent invite is not
    /// inactive. Profiles with no invite history are included.
    pub async fn list_assignable_instructors(
        &self,
        franchise_id: Uuid,
    ) -> Result<Vec<ProfileEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProfileEntity>(
            r#"
            SELECT p.id, p.role, p.franchise_id, p.email, p.full_name, p.created_at
            FROM profiles p
            LEFT JOIN LATERAL (
                SELECT i.status FROM instructor_invites i
                WHERE i.franchise_id = p.franchise_id AND i.email = LOWER(p.email)
                ORDER BY i.created_at DESC
                LIMIT 1
            ) latest ON TRUE
            WHERE p.franchise_id = $1
              AND p.role = 'instructor'
              AND (latest.status IS NULL OR latest.status <> 'inactive')
            ORDER BY p.created_at
            "#,
        )
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await
    }
}
