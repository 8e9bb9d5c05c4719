use utoipa::OpenApi;

use crate::features::athletes::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Athletes API", description = "Athlete records linked to categories and training centers"),
    paths(
        handlers::list_athletes,
        handlers::get_athlete,
        handlers::get_athlete_by_national_id,
        handlers::get_athlete_by_name,
        handlers::create_athlete,
        handlers::update_athlete,
        handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummaryResponse,
            storage::dto::athlete::CategoryRef,
            storage::dto::athlete::TrainingCenterRef,
            storage::dto::common::PaginationMeta,
            storage::models::Athlete,
            storage::models::Category,
            storage::models::TrainingCenter,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete endpoints"),
    )
)]
pub struct ApiDoc;
