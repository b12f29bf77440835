use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        filter::{parse_page_params, parse_search_query},
        profile::{NewProfileRequest, UpdateProfileRequest},
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, req))]
pub async fn list_profiles(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let params = parse_page_params(req.query_string())?;
    let result = state.profile_handler.list_profiles(params).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[instrument(skip(state, req))]
pub async fn search_profiles(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let (filter, params) = parse_search_query(req.query_string())?;
    let result = state.profile_handler.search_profiles(&filter, params).await?;

    // The normalized criteria go back to the caller for transparency.
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "data": result.data,
        "pagination": result.pagination,
        "criteria": filter,
    })))
}

#[instrument(skip(state))]
pub async fn get_profile_by_id(
    state: web::Data<AppState>,
    profile_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .get_profile(profile_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": profile })))
}

#[instrument(skip(state, data))]
pub async fn create_profile(
    state: web::Data<AppState>,
    data: web::Json<NewProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .create_profile(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "data": profile,
        "message": "Profile created successfully",
    })))
}

#[instrument(skip(state, data))]
pub async fn update_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<i32>,
    data: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .update_profile(profile_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "data": profile,
        "message": "Profile updated successfully",
    })))
}

#[instrument(skip(state))]
pub async fn delete_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = profile_id.into_inner();
    state.profile_handler.delete_profile(id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Profile {id} deleted successfully"),
    })))
}
