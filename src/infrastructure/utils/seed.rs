use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    entities::{filter::ProfileFilter, profile::ProfileInsert},
    errors::AppError,
    repositories::profile::ProfileRepository,
};

struct SampleProfile {
    name: &'static str,
    email: &'static str,
    location: &'static str,
    skills: &'static [&'static str],
    experience_years: i32,
    available_for_work: bool,
    hourly_rate: Decimal,
}

const SAMPLE_PROFILES: &[SampleProfile] = &[
    SampleProfile {
        name: "Alice Johnson",
        email: "alice.johnson@email.com",
        location: "San Francisco, CA",
        skills: &["React", "Node.js", "TypeScript", "MongoDB"],
        experience_years: 5,
        available_for_work: true,
        hourly_rate: Decimal::from_parts(85, 0, 0, false, 0),
    },
    SampleProfile {
        name: "Bob Smith",
        email: "bob.smith@email.com",
        location: "New York, NY",
        skills: &["Python", "Django", "PostgreSQL", "AWS"],
        experience_years: 7,
        available_for_work: false,
        hourly_rate: Decimal::from_parts(95, 0, 0, false, 0),
    },
    SampleProfile {
        name: "Carol Davis",
        email: "carol.davis@email.com",
        location: "Austin, TX",
        skills: &["JavaScript", "Vue.js", "Express", "MySQL"],
        experience_years: 3,
        available_for_work: true,
        hourly_rate: Decimal::from_parts(65, 0, 0, false, 0),
    },
    SampleProfile {
        name: "David Wilson",
        email: "david.wilson@email.com",
        location: "Seattle, WA",
        skills: &["Java", "Spring Boot", "React", "Docker"],
        experience_years: 8,
        available_for_work: true,
        hourly_rate: Decimal::from_parts(105, 0, 0, false, 0),
    },
    SampleProfile {
        name: "Eva Martinez",
        email: "eva.martinez@email.com",
        location: "Miami, FL",
        skills: &["Angular", "C#", ".NET", "SQL Server"],
        experience_years: 4,
        available_for_work: true,
        hourly_rate: Decimal::from_parts(75, 0, 0, false, 0),
    },
    SampleProfile {
        name: "Frank Brown",
        email: "frank.brown@email.com",
        location: "Chicago, IL",
        skills: &["PHP", "Laravel", "Vue.js", "Redis"],
        experience_years: 6,
        available_for_work: false,
        hourly_rate: Decimal::from_parts(80, 0, 0, false, 0),
    },
    SampleProfile {
        name: "Grace Lee",
        email: "grace.lee@email.com",
        location: "Boston, MA",
        skills: &["React Native", "Firebase", "GraphQL", "JavaScript"],
        experience_years: 4,
        available_for_work: true,
        hourly_rate: Decimal::from_parts(90, 0, 0, false, 0),
    },
];

/// Populates an empty directory with the sample set so a fresh instance has
/// something to browse. Returns the number of profiles inserted.
pub async fn seed_if_empty<R: ProfileRepository>(repo: &R) -> Result<u64, AppError> {
    let existing = repo.count_profiles(&ProfileFilter::default()).await?;
    if existing > 0 {
        debug!("database already contains {existing} profiles, skipping seed");
        return Ok(0);
    }

    info!("database empty, inserting sample profiles...");
    let now = Utc::now();
    let total = SAMPLE_PROFILES.len();

    for (idx, sample) in SAMPLE_PROFILES.iter().enumerate() {
        // Stagger creation times so the newest-first ordering is stable.
        let created_at = now - Duration::seconds((total - idx) as i64);
        let insert = ProfileInsert {
            name: sample.name.to_string(),
            email: sample.email.to_string(),
            location: sample.location.to_string(),
            skills: sample.skills.iter().map(|s| s.to_string()).collect(),
            experience_years: sample.experience_years,
            available_for_work: sample.available_for_work,
            hourly_rate: sample.hourly_rate,
            created_at,
            updated_at: created_at,
        };
        repo.create_profile(&insert).await?;
    }

    info!("seeded {total} sample profiles");
    Ok(total as u64)
}
