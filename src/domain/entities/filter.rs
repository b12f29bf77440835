use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::pagination::{PageParams, DEFAULT_LIMIT};
use crate::errors::{AppError, FieldError};

/// Fully-typed search criteria. Every field is optional; `None` means the
/// predicate is absent, never "match the default".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_work: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hourly_rate: Option<Decimal>,

    /// A profile matches when its skill list contains ANY of these names
    /// (exact element equality, OR across the requested skills).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Parse `page`/`limit` from a raw query string. Malformed numbers are
/// rejected; out-of-range numbers are clamped by [`PageParams::new`].
pub fn parse_page_params(raw_query: &str) -> Result<PageParams, AppError> {
    let pairs = decode_pairs(raw_query)?;
    let mut errors = Vec::new();
    let params = page_params_from_pairs(&pairs, &mut errors);

    if errors.is_empty() {
        Ok(params)
    } else {
        Err(AppError::ValidationError(errors))
    }
}

/// Parse the full search surface: filter criteria plus the pagination window.
/// All offending parameters are reported together in one validation error.
pub fn parse_search_query(raw_query: &str) -> Result<(ProfileFilter, PageParams), AppError> {
    let pairs = decode_pairs(raw_query)?;
    let mut errors = Vec::new();

    let params = page_params_from_pairs(&pairs, &mut errors);

    let mut filter = ProfileFilter::default();

    if let Some(location) = last_value(&pairs, "location") {
        if !location.trim().is_empty() {
            filter.location = Some(location.to_string());
        }
    }

    if let Some(token) = last_value(&pairs, "availableForWork") {
        match token {
            "true" => filter.available_for_work = Some(true),
            "false" => filter.available_for_work = Some(false),
            _ => errors.push(FieldError::new(
                "availableForWork",
                "must be \"true\" or \"false\"",
            )),
        }
    }

    if let Some(value) = last_value(&pairs, "minExperience") {
        match value.parse::<i32>() {
            Ok(years) => filter.min_experience = Some(years),
            Err(_) => errors.push(FieldError::new("minExperience", "must be an integer")),
        }
    }

    if let Some(value) = last_value(&pairs, "maxHourlyRate") {
        match Decimal::from_str(value) {
            Ok(rate) => filter.max_hourly_rate = Some(rate),
            Err(_) => errors.push(FieldError::new("maxHourlyRate", "must be a number")),
        }
    }

    // `skills` may repeat and each occurrence may carry a comma-separated list.
    let skills: Vec<String> = pairs
        .iter()
        .filter(|(key, _)| key == "skills")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if !skills.is_empty() {
        filter.skills = Some(skills);
    }

    if errors.is_empty() {
        Ok((filter, params))
    } else {
        Err(AppError::ValidationError(errors))
    }
}

fn decode_pairs(raw_query: &str) -> Result<Vec<(String, String)>, AppError> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(raw_query).map_err(|_| {
        AppError::ValidationError(vec![FieldError::new("query", "malformed query string")])
    })
}

fn page_params_from_pairs(pairs: &[(String, String)], errors: &mut Vec<FieldError>) -> PageParams {
    let mut page: i64 = 1;
    let mut limit: i64 = DEFAULT_LIMIT as i64;

    if let Some(value) = last_value(pairs, "page") {
        match value.parse::<i64>() {
            Ok(n) => page = n,
            Err(_) => errors.push(FieldError::new("page", "must be an integer")),
        }
    }

    if let Some(value) = last_value(pairs, "limit") {
        match value.parse::<i64>() {
            Ok(n) => limit = n,
            Err(_) => errors.push(FieldError::new("limit", "must be an integer")),
        }
    }

    PageParams::new(
        page.clamp(1, u32::MAX as i64) as u32,
        limit.clamp(1, u32::MAX as i64) as u32,
    )
}

fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::pagination::{DEFAULT_LIMIT, MAX_LIMIT};

    #[test]
    fn empty_query_yields_defaults() {
        let (filter, params) = parse_search_query("").unwrap();
        assert_eq!(filter, ProfileFilter::default());
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn parses_every_filter() {
        let (filter, _) = parse_search_query(
            "location=Austin&availableForWork=true&minExperience=5&maxHourlyRate=80.50&skills=React",
        )
        .unwrap();

        assert_eq!(filter.location.as_deref(), Some("Austin"));
        assert_eq!(filter.available_for_work, Some(true));
        assert_eq!(filter.min_experience, Some(5));
        assert_eq!(filter.max_hourly_rate, Some(Decimal::new(8050, 2)));
        assert_eq!(filter.skills, Some(vec!["React".to_string()]));
    }

    #[test]
    fn skills_accept_repeats_and_commas() {
        let (filter, _) = parse_search_query("skills=React&skills=Go,Rust").unwrap();
        assert_eq!(
            filter.skills,
            Some(vec!["React".to_string(), "Go".to_string(), "Rust".to_string()])
        );

        let (filter, _) = parse_search_query("skills=React,%20SQL").unwrap();
        assert_eq!(
            filter.skills,
            Some(vec!["React".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn blank_location_and_skills_are_ignored() {
        let (filter, _) = parse_search_query("location=%20&skills=,,").unwrap();
        assert_eq!(filter.location, None);
        assert_eq!(filter.skills, None);
    }

    #[test]
    fn malformed_numbers_are_rejected_not_coerced() {
        let err = parse_search_query("minExperience=five").unwrap_err();
        match err {
            AppError::ValidationError(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "minExperience");
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert!(parse_search_query("maxHourlyRate=cheap").is_err());
        assert!(parse_search_query("page=first").is_err());
        assert!(parse_search_query("limit=all").is_err());
    }

    #[test]
    fn malformed_boolean_is_rejected() {
        let err = parse_search_query("availableForWork=yes").unwrap_err();
        match err {
            AppError::ValidationError(details) => {
                assert_eq!(details[0].field, "availableForWork");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn all_offending_parameters_reported_together() {
        let err = parse_search_query("minExperience=a&maxHourlyRate=b&availableForWork=c").unwrap_err();
        match err {
            AppError::ValidationError(details) => assert_eq!(details.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn page_window_is_clamped() {
        let params = parse_page_params("page=0&limit=1000").unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), MAX_LIMIT);

        let params = parse_page_params("page=-3").unwrap();
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn list_parser_ignores_filter_parameters() {
        let params = parse_page_params("page=2&limit=5&minExperience=not-a-number").unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 5);
    }
}
