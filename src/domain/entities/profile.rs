use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_NAME_LENGTH: u64 = 2;
const MAX_NAME_LENGTH: u64 = 100;
const MIN_LOCATION_LENGTH: u64 = 2;
const MAX_LOCATION_LENGTH: u64 = 100;
pub const MAX_HOURLY_RATE: u32 = 1000;

// ───── Database Model ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub available_for_work: bool,
    pub hourly_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Validate)]
pub struct ProfileInsert {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_LOCATION_LENGTH, max = MAX_LOCATION_LENGTH))]
    pub location: String,

    #[validate(custom(function = "validate_skills"))]
    pub skills: Vec<String>,

    #[validate(range(min = 0, max = 50))]
    pub experience_years: i32,

    pub available_for_work: bool,

    #[validate(custom(function = "validate_hourly_rate"))]
    pub hourly_rate: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProfileRequest {
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(
        min = MIN_LOCATION_LENGTH,
        max = MAX_LOCATION_LENGTH,
        message = "Location must be between 2 and 100 characters"
    ))]
    pub location: String,

    #[validate(custom(function = "validate_skills"))]
    pub skills: Vec<String>,

    #[validate(range(min = 0, max = 50, message = "Experience years must be between 0 and 50"))]
    pub experience_years: i32,

    #[serde(default = "default_available")]
    pub available_for_work: bool,

    #[validate(custom(function = "validate_hourly_rate"))]
    pub hourly_rate: Decimal,
}

/// Returns true, used for serde default.
fn default_available() -> bool {
    true
}

impl NewProfileRequest {
    pub fn into_insert(self, now: DateTime<Utc>) -> ProfileInsert {
        ProfileInsert {
            name: self.name,
            email: self.email,
            location: self.location,
            skills: self.skills,
            experience_years: self.experience_years,
            available_for_work: self.available_for_work,
            hourly_rate: self.hourly_rate.round_dp(2),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; absent fields are left untouched. No column in the
/// profile schema is nullable, so `Option` is enough to express "unchanged".
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,

    #[validate(length(
        min = MIN_LOCATION_LENGTH,
        max = MAX_LOCATION_LENGTH,
        message = "Location must be between 2 and 100 characters"
    ))]
    pub location: Option<String>,

    #[validate(custom(function = "validate_skills"))]
    pub skills: Option<Vec<String>>,

    #[validate(range(min = 0, max = 50, message = "Experience years must be between 0 and 50"))]
    pub experience_years: Option<i32>,

    pub available_for_work: Option<bool>,

    #[validate(custom(function = "validate_hourly_rate"))]
    pub hourly_rate: Option<Decimal>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.skills.is_none()
            && self.experience_years.is_none()
            && self.available_for_work.is_none()
            && self.hourly_rate.is_none()
    }
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_skills(skills: &Vec<String>) -> Result<(), ValidationError> {
    if skills.is_empty() {
        return Err(new_validation_error("skills_empty", "At least one skill is required"));
    }
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err(new_validation_error("skill_blank", "Skills must be non-empty strings"));
    }
    Ok(())
}

pub fn validate_hourly_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < Decimal::ZERO || *rate > Decimal::from(MAX_HOURLY_RATE) {
        return Err(new_validation_error("rate_out_of_range", "Hourly rate must be between 0 and 1000"));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(msg.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> NewProfileRequest {
        NewProfileRequest {
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            location: "San Francisco, CA".into(),
            skills: vec!["React".into(), "TypeScript".into()],
            experience_years: 5,
            available_for_work: true,
            hourly_rate: Decimal::new(8500, 2),
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let mut req = valid_request();
        req.name = "A".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_invalid_email() {
        let mut req = valid_request();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_skills() {
        let mut req = valid_request();
        req.skills = vec![];
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_blank_skill_entry() {
        let mut req = valid_request();
        req.skills = vec!["React".into(), "   ".into()];
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_experience() {
        let mut req = valid_request();
        req.experience_years = 51;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_excessive_rate() {
        let mut req = valid_request();
        req.hourly_rate = Decimal::from(1001);
        assert!(req.validate().is_err());
    }

    #[test]
    fn insert_rounds_rate_to_two_decimals() {
        let mut req = valid_request();
        req.hourly_rate = Decimal::new(85_559, 3); // 85.559
        let insert = req.into_insert(Utc::now());
        assert_eq!(insert.hourly_rate, Decimal::new(8556, 2)); // 85.56
    }

    #[test]
    fn update_request_defaults_to_empty() {
        let req = UpdateProfileRequest::default();
        assert!(req.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_request_validates_provided_fields_only() {
        let req = UpdateProfileRequest {
            email: Some("broken".into()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
