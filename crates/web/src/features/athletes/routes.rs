use axum::{Router, routing::get};
use storage::Store;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, get_athlete_by_name, get_athlete_by_national_id,
    list_athletes, update_athlete,
};

pub fn routes<D: Store>() -> Router<D> {
    Router::new()
        .route("/", get(list_athletes::<D>).post(create_athlete::<D>))
        .route(
            "/:id",
            get(get_athlete::<D>)
                .patch(update_athlete::<D>)
                .delete(delete_athlete::<D>),
        )
        .route(
            "/national-id/:national_id",
            get(get_athlete_by_national_id::<D>),
        )
        .route("/name/:name", get(get_athlete_by_name::<D>))
}
