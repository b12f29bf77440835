use chrono::{DateTime, Utc};
use devdirectory_backend::entities::profile::Profile;
use rust_decimal::Decimal;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct TestProfile {
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

impl TestProfile {
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: "Test Developer".into(),
            email: email.into(),
            location: "Portland, OR".into(),
            skills: vec!["Rust".into(), "SQL".into()],
            experience_years: 3,
            available_for_work: true,
            hourly_rate: Decimal::new(7500, 2),
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(dead_code)]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[allow(dead_code)]
    pub fn located_in(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[allow(dead_code)]
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    #[allow(dead_code)]
    pub fn with_experience(mut self, years: i32) -> Self {
        self.experience_years = years;
        self
    }

    #[allow(dead_code)]
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = rate;
        self
    }

    #[allow(dead_code)]
    pub fn unavailable(mut self) -> Self {
        self.available_for_work = false;
        self
    }

    /// Request body for POST /api/profiles.
    #[allow(dead_code)]
    pub fn request_body(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "location": self.location,
            "skills": self.skills,
            "experienceYears": self.experience_years,
            "availableForWork": self.available_for_work,
            "hourlyRate": self.hourly_rate,
        })
    }

    /// Materializes the fixture as a stored row, for mocked repositories.
    #[allow(dead_code)]
    pub fn into_profile(self, id: i32) -> Profile {
        Profile {
            id,
            name: self.name,
            email: self.email,
            location: self.location,
            skills: self.skills,
            experience_years: self.experience_years,
            available_for_work: self.available_for_work,
            hourly_rate: self.hourly_rate,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
