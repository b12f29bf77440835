use chrono::Utc;
use validator::Validate;

use crate::{
    entities::{
        filter::ProfileFilter,
        pagination::{PageParams, Paginated, Pagination},
        profile::{NewProfileRequest, Profile, UpdateProfileRequest},
        stats::DirectoryStats,
    },
    errors::{AppError, FieldError},
    repositories::profile::ProfileRepository,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    /// Plain paginated listing, newest first.
    pub async fn list_profiles(&self, params: PageParams) -> Result<Paginated<Profile>, AppError> {
        self.run_query(&ProfileFilter::default(), params).await
    }

    /// Filtered listing with the same pagination contract as `list_profiles`.
    pub async fn search_profiles(
        &self,
        filter: &ProfileFilter,
        params: PageParams,
    ) -> Result<Paginated<Profile>, AppError> {
        self.run_query(filter, params).await
    }

    async fn run_query(
        &self,
        filter: &ProfileFilter,
        params: PageParams,
    ) -> Result<Paginated<Profile>, AppError> {
        let total_items = self.profile_repo.count_profiles(filter).await?;
        let data = self
            .profile_repo
            .search_profiles(filter, params.limit() as i64, params.offset())
            .await?;

        Ok(Paginated {
            data,
            pagination: Pagination::new(params, total_items),
        })
    }

    pub async fn get_profile(&self, id: i32) -> Result<Profile, AppError> {
        self.profile_repo
            .get_profile_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile with id {id} not found")))
    }

    /// Creates a profile. The email pre-check gives the friendly conflict in
    /// the common case; the unique index backstops the concurrent one.
    pub async fn create_profile(&self, request: NewProfileRequest) -> Result<Profile, AppError> {
        request.validate()?;

        if self.profile_repo.email_exists(&request.email, None).await? {
            return Err(AppError::Conflict(
                "A profile with this email already exists".to_string(),
            ));
        }

        let insert = request.into_insert(Utc::now());
        self.profile_repo.create_profile(&insert).await
    }

    /// Partial update. The uniqueness check runs only when the payload
    /// carries an email different from the stored one.
    pub async fn update_profile(
        &self,
        id: i32,
        request: UpdateProfileRequest,
    ) -> Result<Profile, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(vec![FieldError::new(
                "body",
                "At least one field must be provided",
            )]));
        }
        request.validate()?;

        let current = self.get_profile(id).await?;

        if let Some(email) = request.email.as_deref() {
            if email != current.email
                && self.profile_repo.email_exists(email, Some(id)).await?
            {
                return Err(AppError::Conflict(
                    "Cannot use this email; it belongs to another profile".to_string(),
                ));
            }
        }

        self.profile_repo.update_profile(id, &request).await
    }

    pub async fn delete_profile(&self, id: i32) -> Result<(), AppError> {
        self.profile_repo.delete_profile(id).await
    }

    pub async fn collect_stats(&self) -> Result<DirectoryStats, AppError> {
        self.profile_repo.collect_stats().await
    }
}
