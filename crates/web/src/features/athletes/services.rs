use chrono::SubsecRound;
use storage::{
    Session,
    dto::athlete::{
        AthleteResponse, AthleteSummaryResponse, CreateAthleteRequest, UpdateAthleteRequest,
    },
    error::{Result, StorageError},
    models::{Athlete, AthleteRecord},
    query::AthleteFilter,
    services::resolver,
};
use uuid::Uuid;

/// Create an athlete after resolving its category and training center by name.
///
/// `created_at` is the call time in UTC truncated to microseconds, the
/// precision Postgres stores, so the returned view equals later reads.
pub async fn create_athlete<S: Session>(
    session: &mut S,
    request: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let category = resolver::resolve_category(session, &request.category.name).await?;
    let training_center =
        resolver::resolve_training_center(session, &request.training_center.name).await?;

    let created_at = chrono::Utc::now().naive_utc().trunc_subsecs(6);

    let athlete = Athlete {
        athlete_id: Uuid::new_v4(),
        name: request.name.clone(),
        national_id: request.national_id.clone(),
        age: request.age,
        weight: request.weight,
        height: request.height,
        sex: request.sex.clone(),
        category_id: category.category_id,
        training_center_id: training_center.training_center_id,
        created_at,
    };

    if let Err(e) = session.insert_athlete(&athlete).await {
        if let StorageError::DuplicateKey { national_id } = &e {
            tracing::warn!(%national_id, "Rejected athlete with duplicate national id");
        }
        return Err(e);
    }

    tracing::info!(athlete_id = %athlete.athlete_id, "Athlete created");

    Ok(AthleteResponse::from(AthleteRecord {
        athlete,
        category_name: category.name,
        training_center_name: training_center.name,
    }))
}

/// List all athletes as summaries
pub async fn list_athletes<S: Session>(session: &mut S) -> Result<Vec<AthleteSummaryResponse>> {
    let athletes = session.list_athletes().await?;
    Ok(athletes
        .into_iter()
        .map(AthleteSummaryResponse::from)
        .collect())
}

async fn find_athlete<S: Session>(session: &mut S, filter: AthleteFilter) -> Result<AthleteRecord> {
    session
        .find_athlete(&filter)
        .await?
        .ok_or_else(|| StorageError::not_found("Athlete", filter.key()))
}

/// Get athlete by id
pub async fn get_athlete<S: Session>(session: &mut S, id: Uuid) -> Result<AthleteResponse> {
    let athlete = find_athlete(session, AthleteFilter::Id(id)).await?;
    Ok(AthleteResponse::from(athlete))
}

/// Get athlete by national id
pub async fn get_athlete_by_national_id<S: Session>(
    session: &mut S,
    national_id: &str,
) -> Result<AthleteResponse> {
    let athlete = find_athlete(session, AthleteFilter::NationalId(national_id.to_string())).await?;
    Ok(AthleteResponse::from(athlete))
}

/// Get the first athlete whose name contains `name`, ignoring case
pub async fn get_athlete_by_name<S: Session>(
    session: &mut S,
    name: &str,
) -> Result<AthleteResponse> {
    let athlete = find_athlete(session, AthleteFilter::NameContains(name.to_string())).await?;
    Ok(AthleteResponse::from(athlete))
}

/// Update an athlete
pub async fn update_athlete<S: Session>(
    session: &mut S,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let existing = find_athlete(session, AthleteFilter::Id(id)).await?;

    if request.is_empty() {
        return Ok(AthleteResponse::from(existing));
    }

    let mut athlete = existing.athlete;
    request.apply_to(&mut athlete);

    if !session.update_athlete(&athlete).await? {
        return Err(StorageError::not_found("Athlete", id));
    }

    tracing::info!(athlete_id = %id, "Athlete updated");

    let updated = find_athlete(session, AthleteFilter::Id(id)).await?;
    Ok(AthleteResponse::from(updated))
}

/// Delete an athlete
pub async fn delete_athlete<S: Session>(session: &mut S, id: Uuid) -> Result<()> {
    if !session.delete_athlete(id).await? {
        return Err(StorageError::not_found("Athlete", id));
    }

    tracing::info!(athlete_id = %id, "Athlete deleted");
    Ok(())
}
