use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Session, Store,
    dto::{
        athlete::{
            AthleteResponse, AthleteSummaryResponse, CreateAthleteRequest, UpdateAthleteRequest,
        },
        common::{PaginatedResponse, PaginationParams, paginate},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of athlete summaries", body = PaginatedResponse<AthleteSummaryResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes<D: Store>(
    State(db): State<D>,
    Query(params): Query<PaginationParams>,
) -> WebResult<Response> {
    params.validate().map_err(WebError::BadRequest)?;

    let mut session = db.begin().await?;
    let athletes = services::list_athletes(&mut session).await?;

    Ok(Json(paginate(athletes, &params)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete<D: Store>(
    State(db): State<D>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let mut session = db.begin().await?;
    let athlete = services::get_athlete(&mut session, id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/national-id/{national_id}",
    params(
        ("national_id" = String, Path, description = "Athlete national id (CPF)")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "No athlete with this national id")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_by_national_id<D: Store>(
    State(db): State<D>,
    Path(national_id): Path<String>,
) -> WebResult<Response> {
    let mut session = db.begin().await?;
    let athlete = services::get_athlete_by_national_id(&mut session, &national_id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/name/{name}",
    params(
        ("name" = String, Path, description = "Case-insensitive part of the athlete name")
    ),
    responses(
        (status = 200, description = "First athlete whose name matches", body = AthleteResponse),
        (status = 404, description = "No athlete name matches")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_by_name<D: Store>(
    State(db): State<D>,
    Path(name): Path<String>,
) -> WebResult<Response> {
    let mut session = db.begin().await?;
    let athlete = services::get_athlete_by_name(&mut session, &name).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown category / training center"),
        (status = 409, description = "National id already registered")
    ),
    tag = "athletes"
)]
pub async fn create_athlete<D: Store>(
    State(db): State<D>,
    Json(req): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let mut session = db.begin().await?;
    let athlete = services::create_athlete(&mut session, &req).await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "National id already registered")
    ),
    tag = "athletes"
)]
pub async fn update_athlete<D: Store>(
    State(db): State<D>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let mut session = db.begin().await?;
    let updated = services::update_athlete(&mut session, id, &update_req).await?;
    session.commit().await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete<D: Store>(
    State(db): State<D>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let mut session = db.begin().await?;
    services::delete_athlete(&mut session, id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
