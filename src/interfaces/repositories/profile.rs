use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::{
        filter::ProfileFilter,
        profile::{Profile, ProfileInsert, UpdateProfileRequest},
        stats::DirectoryStats,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn count_profiles(&self, filter: &ProfileFilter) -> Result<i64, AppError>;
    async fn search_profiles(
        &self,
        filter: &ProfileFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Profile>, AppError>;
    async fn get_profile_by_id(&self, id: i32) -> Result<Option<Profile>, AppError>;
    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, AppError>;
    async fn create_profile(&self, profile: &ProfileInsert) -> Result<Profile, AppError>;
    async fn update_profile(
        &self,
        id: i32,
        changes: &UpdateProfileRequest,
    ) -> Result<Profile, AppError>;
    async fn delete_profile(&self, id: i32) -> Result<(), AppError>;
    async fn collect_stats(&self) -> Result<DirectoryStats, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

/// Appends the WHERE clause for a filter set. Shared by the listing and the
/// count query so both always see the same predicate.
fn push_filters(builder: &mut QueryBuilder<Postgres>, filter: &ProfileFilter) {
    let mut prefix = " WHERE ";

    if let Some(location) = &filter.location {
        builder
            .push(prefix)
            .push("location ILIKE ")
            .push_bind(format!("%{}%", location));
        prefix = " AND ";
    }

    if let Some(available) = filter.available_for_work {
        builder
            .push(prefix)
            .push("available_for_work = ")
            .push_bind(available);
        prefix = " AND ";
    }

    if let Some(min_experience) = filter.min_experience {
        builder
            .push(prefix)
            .push("experience_years >= ")
            .push_bind(min_experience);
        prefix = " AND ";
    }

    if let Some(max_rate) = filter.max_hourly_rate {
        builder
            .push(prefix)
            .push("hourly_rate <= ")
            .push_bind(max_rate);
        prefix = " AND ";
    }

    // Array overlap: matches when the profile has ANY of the requested
    // skills, by exact element equality.
    if let Some(skills) = &filter.skills {
        builder
            .push(prefix)
            .push("skills && ")
            .push_bind(skills.to_vec());
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn count_profiles(&self, filter: &ProfileFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM profiles");
        push_filters(&mut builder, filter);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn search_profiles(
        &self,
        filter: &ProfileFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Profile>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM profiles");
        push_filters(&mut builder, filter);

        builder.push(" ORDER BY created_at DESC");
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(offset);

        let profiles: Vec<Profile> = builder
            .build_query_as::<Profile>()
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }

    async fn get_profile_by_id(&self, id: i32) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM profiles
                WHERE email = $1
                  AND ($2::INT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_profile(&self, profile: &ProfileInsert) -> Result<Profile, AppError> {
        let created = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (
                name, email, location, skills,
                experience_years, available_for_work, hourly_rate,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.location)
        .bind(&profile.skills)
        .bind(profile.experience_years)
        .bind(profile.available_for_work)
        .bind(profile.hourly_rate)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("profiles_email_key") {
                    return AppError::Conflict("A profile with this email already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(created)
    }

    async fn update_profile(
        &self,
        id: i32,
        changes: &UpdateProfileRequest,
    ) -> Result<Profile, AppError> {
        // COALESCE keeps the stored value for every absent field.
        let updated = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                location = COALESCE($3, location),
                skills = COALESCE($4, skills),
                experience_years = COALESCE($5, experience_years),
                available_for_work = COALESCE($6, available_for_work),
                hourly_rate = COALESCE($7, hourly_rate),
                updated_at = NOW()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.location)
        .bind(&changes.skills)
        .bind(changes.experience_years)
        .bind(changes.available_for_work)
        .bind(changes.hourly_rate.map(|rate| rate.round_dp(2)))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("profiles_email_key") {
                    return AppError::Conflict(
                        "Cannot use this email; it belongs to another profile".into(),
                    );
                }
            }
            AppError::from(e)
        })?;

        Ok(updated)
    }

    async fn delete_profile(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Profile with id {id} not found")));
        }

        Ok(())
    }

    async fn collect_stats(&self) -> Result<DirectoryStats, AppError> {
        let row: StatsRow = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE available_for_work) AS available,
                AVG(experience_years)::FLOAT8 AS avg_experience,
                MIN(experience_years) AS min_experience,
                MAX(experience_years) AS max_experience,
                AVG(hourly_rate) AS avg_rate,
                MIN(hourly_rate) AS min_rate,
                MAX(hourly_rate) AS max_rate
            FROM profiles
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DirectoryStats {
            total_profiles: row.total,
            available_profiles: row.available,
            unavailable_profiles: row.total - row.available,
            average_experience: row.avg_experience.unwrap_or(0.0),
            min_experience: row.min_experience.unwrap_or(0),
            max_experience: row.max_experience.unwrap_or(0),
            average_rate: row.avg_rate.map(|r| r.round_dp(2)).unwrap_or(Decimal::ZERO),
            min_rate: row.min_rate.unwrap_or(Decimal::ZERO),
            max_rate: row.max_rate.unwrap_or(Decimal::ZERO),
        })
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total: i64,
    available: i64,
    avg_experience: Option<f64>,
    min_experience: Option<i32>,
    max_experience: Option<i32>,
    avg_rate: Option<Decimal>,
    min_rate: Option<Decimal>,
    max_rate: Option<Decimal>,
}
